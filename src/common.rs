pub mod visit_set;

pub use visit_set::VisitSet;
