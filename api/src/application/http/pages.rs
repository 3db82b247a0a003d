pub mod handlers;
pub mod picker_upload;
pub mod render;
pub mod router;
pub mod session;
