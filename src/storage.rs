//! Implementations of the graph storages.
//!
//! A _storage_ is a representation of a directed simple graph with a fixed
//! vertex set. Both storages implement [`Digraph`](crate::core::Digraph) and
//! are observationally indistinguishable through it; they differ only in
//! complexity and memory footprint.
//!
//! # Storages and their properties
//!
//! The **adjacency list** suits sparse graphs: its memory grows with the edge
//! count and all degree queries are constant time. The **adjacency matrix**
//! suits dense graphs: edge lookups and updates touch a single bit, but degree
//! queries scan a row or a column.
//!
//! |                    | **[AdjList]**  | **[AdjMatrix]** |
//! |--------------------|----------------|-----------------|
//! | add/remove edge    | _O(1)_ avg     | _O(1)_          |
//! | lookup edge        | _O(1)_ avg     | _O(1)_          |
//! | in/out degree      | _O(1)_         | _O(V)_          |
//! | get neighbors      | _O(d)_         | _O(V)_          |
//! | connectivity       | _O(V + E)_     | _O(V²)_         |
//! | space              | _O(V + E)_     | _O(V²)_         |
//!
//! * _V_ – vertex count
//! * _E_ – edge count
//! * _d_ – vertex degree

pub mod adj_list;
pub mod adj_matrix;
mod shared;

#[doc(inline)]
pub use self::{adj_list::AdjList, adj_matrix::AdjMatrix};
