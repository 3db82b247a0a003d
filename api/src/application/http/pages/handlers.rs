pub mod analyze;
pub mod index;
pub mod recipes;
