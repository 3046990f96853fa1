//! Directed simple graphs over a fixed vertex set, with two interchangeable
//! storages and an export to the GEXF interchange format.
//!
//! ```
//! use digraf::prelude::*;
//!
//! let mut graph = AdjMatrix::new(3);
//! graph.add_edge(0, 1)?;
//! graph.add_edge(1, 2)?;
//! graph.set_edge_weight(0, 1, 5.0)?;
//!
//! assert!(graph.is_connected());
//! assert_eq!(graph.out_degree(0)?, 1);
//!
//! let document = Gexf::new().to_string(&graph);
//! assert!(document.contains(r#"weight="5""#));
//! # Ok::<(), GraphError>(())
//! ```

pub mod algo;
pub mod common;
pub mod core;
pub mod infra;
pub mod storage;

pub mod prelude {
    pub use crate::{
        algo::Connected,
        core::{marker::Direction, Create, Digraph, GraphError},
        infra::export::{Export, Gexf},
        storage::{AdjList, AdjMatrix},
    };
}
