pub mod launch;
pub mod metadata;
pub mod token;

pub use launch::*;
pub use metadata::*;
pub use token::*;
