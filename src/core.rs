//! The graph contract and the types it is expressed with.

pub mod error;
pub mod facts;
pub mod marker;
pub mod validate;

mod create;
mod digraph;

pub use create::Create;
pub use digraph::*;
pub use error::{ErrorKind, ExportError, GraphError, Result};
