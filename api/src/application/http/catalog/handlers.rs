pub mod get_catalog;
pub mod get_moods;
