/// Request executor
pub mod http;
/// Request models: query parameters, form bodies and filters
pub mod requests;
/// Response envelope and result codes
pub mod responses;
