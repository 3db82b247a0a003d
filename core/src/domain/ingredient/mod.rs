pub mod catalog;
pub mod ranker;
pub mod selection;
pub mod value_objects;

pub use catalog::*;
pub use ranker::*;
pub use selection::*;
pub use value_objects::*;
