pub mod invoice;
pub mod response;
pub mod upload;
pub mod user;
