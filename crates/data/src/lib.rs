//! Loading and validation of the rules configuration.

pub mod load;
pub mod schema;

pub use load::*;
pub use schema::*;
