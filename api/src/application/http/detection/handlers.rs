pub mod create_detection;
