use std::borrow::Cow;

use rustc_hash::FxHashMap;

use crate::core::{GraphError, Result};

/// Weights and labels of a fixed number of vertices.
///
/// Indices are expected to be validated by the owning storage.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct VertexAttrs {
    weights: Vec<Option<f64>>,
    labels: Vec<Option<String>>,
}

impl VertexAttrs {
    pub fn new(vertex_count: usize) -> Self {
        Self {
            weights: vec![None; vertex_count],
            labels: vec![None; vertex_count],
        }
    }

    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn set_weight(&mut self, vertex: usize, weight: f64) {
        self.weights[vertex] = Some(weight);
    }

    pub fn weight(&self, vertex: usize) -> Result<f64> {
        self.weights[vertex].ok_or(GraphError::VertexWeightUnset { vertex })
    }

    pub fn set_label(&mut self, vertex: usize, label: String) {
        self.labels[vertex] = Some(label);
    }

    pub fn label(&self, vertex: usize) -> Cow<'_, str> {
        match &self.labels[vertex] {
            Some(label) => Cow::Borrowed(label.as_str()),
            None => Cow::Owned(vertex.to_string()),
        }
    }
}

/// Weights of edges that had one set explicitly. Edges without an entry are
/// unweighted.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EdgeWeights(FxHashMap<(usize, usize), f64>);

impl EdgeWeights {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, src: usize, dst: usize, weight: f64) {
        self.0.insert((src, dst), weight);
    }

    pub fn get(&self, src: usize, dst: usize) -> Result<f64> {
        self.0
            .get(&(src, dst))
            .copied()
            .ok_or(GraphError::EdgeWeightUnset { src, dst })
    }

    pub fn remove(&mut self, src: usize, dst: usize) -> Option<f64> {
        self.0.remove(&(src, dst))
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }
}
