pub mod error;
pub mod structure;

pub use error::{Result, StructError};
pub use structure::{ModuleMap, StructuralUnit};
