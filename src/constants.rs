/// User agent string used in HTTP requests to identify this client to the forum API
pub const USER_AGENT: &str = concat!("forum-api-client/", env!("CARGO_PKG_VERSION"));
/// Path segment placed between the server base URL and the resource path
pub const API_PREFIX: &str = "api";
/// Page requested by list operations when the caller has no preference
pub const DEFAULT_PAGE: u32 = 1;
/// Server used when `API_SERVER` is not configured
pub const DEFAULT_API_SERVER: &str = "http://localhost:9999";
/// File holding the persisted access token when `API_TOKEN_PATH` is not configured
pub const DEFAULT_TOKEN_PATH: &str = ".forum_api_token.json";
/// Key under which the access token is persisted
pub const TOKEN_STORAGE_KEY: &str = "t";
/// Header, and query parameter, carrying the access token
pub const ACCESS_TOKEN_KEY: &str = "AccessToken";
/// Header carrying the acting role
pub const ROLE_HEADER: &str = "Role";
/// Query parameter listing foreign keys to load; sent as a JSON string
pub const LOADFK_KEY: &str = "loadfk";
