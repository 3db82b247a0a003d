pub mod common;
pub mod detection;
pub mod ingredient;
pub mod recipe;
pub mod upload;
