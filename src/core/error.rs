use std::{fmt, io, path::PathBuf};

use thiserror::Error;

#[derive(Debug, Clone, Copy, Error, PartialEq)]
pub enum GraphError {
    #[error("vertex index {index} is out of range for a graph with {vertex_count} vertices")]
    IndexOutOfRange { index: usize, vertex_count: usize },
    #[error("self-loop on vertex {vertex} is not allowed in a simple graph")]
    SelfLoop { vertex: usize },
    #[error("edge ({src}, {dst}) does not exist")]
    EdgeNotFound { src: usize, dst: usize },
    #[error("weight of vertex {vertex} was never set")]
    VertexWeightUnset { vertex: usize },
    #[error("weight of edge ({src}, {dst}) was never set")]
    EdgeWeightUnset { src: usize, dst: usize },
}

impl GraphError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            GraphError::IndexOutOfRange { .. } => ErrorKind::IndexOutOfRange,
            GraphError::SelfLoop { .. } => ErrorKind::SelfLoop,
            GraphError::EdgeNotFound { .. } => ErrorKind::EdgeNotFound,
            GraphError::VertexWeightUnset { .. } | GraphError::EdgeWeightUnset { .. } => {
                ErrorKind::WeightUnset
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    IndexOutOfRange,
    SelfLoop,
    EdgeNotFound,
    WeightUnset,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            ErrorKind::IndexOutOfRange => "vertex index out of range",
            ErrorKind::SelfLoop => "self-loop",
            ErrorKind::EdgeNotFound => "edge not found",
            ErrorKind::WeightUnset => "weight unset",
        };
        f.write_str(reason)
    }
}

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("writing export to {} failed", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ExportError {
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        ExportError::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T, E = GraphError> = std::result::Result<T, E>;
