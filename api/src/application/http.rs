pub mod catalog;
pub mod detection;
pub mod health;
pub mod pages;
pub mod recipe;
pub mod server;

#[cfg(test)]
mod test;
