pub mod notification;
pub mod resource;
pub mod upload;
pub mod user;
