//! Argument recycling: expand every argument of a call to one common length so
//! a function body can run element-wise over all of them.

pub mod args;
pub mod broadcast;
pub mod error;
pub mod params;
pub mod set;
pub mod value;

pub use args::{BoundArguments, CallArguments};
pub use broadcast::{broadcast, BroadcastOptions, Broadcaster};
pub use error::RecycleError;
pub use params::{Parameter, ParameterSpec, ParameterSpecBuilder};
pub use set::{BroadcastSet, Row};
pub use value::{Argument, Value};
