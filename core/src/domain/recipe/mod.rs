pub mod entities;
pub mod layout;
pub mod ports;
pub mod services;
pub mod value_objects;

pub use entities::*;
pub use layout::*;
pub use ports::*;
pub use value_objects::*;
