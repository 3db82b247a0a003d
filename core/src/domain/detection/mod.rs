pub mod entities;
pub mod filter;
pub mod normalizer;
pub mod ports;
pub mod schema;
pub mod services;
pub mod value_objects;

pub use entities::*;
pub use filter::*;
pub use normalizer::*;
pub use ports::*;
pub use value_objects::*;
