/// Module containing the user client
pub mod user_service;
/// Module containing the notification client, also used for log management
pub mod notification_service;
/// Module containing the generic resource client every other client wraps
pub mod resource_service;
/// Module containing the upload client
pub mod upload_service;

pub use notification_service::NotificationClient;
pub use resource_service::ResourceClient;
pub use upload_service::UploadClient;
pub use user_service::UserClient;
