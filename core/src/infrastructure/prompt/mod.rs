pub mod file_template_store;
