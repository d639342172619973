pub mod parse;

pub mod serializer;
pub use serializer::{Placeholder, Serializer};

pub mod stmt;
pub use stmt::Statement;
