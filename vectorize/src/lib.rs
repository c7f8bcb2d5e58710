//! Drivers that run a function body over recycled arguments, either once per
//! element or once over whole columns.

pub mod columns;
pub mod error;
pub mod function;
pub mod mask;

pub use columns::Columns;
pub use error::VectorizeError;
pub use function::Vectorized;
pub use mask::select;
