//! Precondition checks shared by all storages.
//!
//! Every check returns the error that the calling operation must surface
//! before it touches any state, so that a failed operation leaves the graph
//! unchanged.

use super::error::{GraphError, Result};

#[inline]
pub fn check_vertex(index: usize, vertex_count: usize) -> Result<()> {
    if index < vertex_count {
        Ok(())
    } else {
        Err(GraphError::IndexOutOfRange {
            index,
            vertex_count,
        })
    }
}

/// Checks both endpoints, source first.
#[inline]
pub fn check_endpoints(src: usize, dst: usize, vertex_count: usize) -> Result<()> {
    check_vertex(src, vertex_count)?;
    check_vertex(dst, vertex_count)
}

#[inline]
pub fn check_no_self_loop(src: usize, dst: usize) -> Result<()> {
    if src == dst {
        Err(GraphError::SelfLoop { vertex: src })
    } else {
        Ok(())
    }
}

/// Turns the presence of an edge into `EdgeNotFound` when it is absent.
#[inline]
pub fn require_edge(present: bool, src: usize, dst: usize) -> Result<()> {
    if present {
        Ok(())
    } else {
        Err(GraphError::EdgeNotFound { src, dst })
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn vertex_bounds() {
        assert!(check_vertex(0, 1).is_ok());
        assert_matches!(
            check_vertex(1, 1),
            Err(GraphError::IndexOutOfRange {
                index: 1,
                vertex_count: 1
            })
        );
        assert_matches!(
            check_vertex(-1isize as usize, 3),
            Err(GraphError::IndexOutOfRange { .. })
        );
        assert_matches!(check_vertex(0, 0), Err(GraphError::IndexOutOfRange { .. }));
    }

    #[test]
    fn endpoints_reports_source_first() {
        assert_matches!(
            check_endpoints(5, 7, 3),
            Err(GraphError::IndexOutOfRange { index: 5, .. })
        );
        assert_matches!(
            check_endpoints(0, 7, 3),
            Err(GraphError::IndexOutOfRange { index: 7, .. })
        );
    }

    #[test]
    fn self_loop() {
        assert_matches!(
            check_no_self_loop(2, 2),
            Err(GraphError::SelfLoop { vertex: 2 })
        );
        assert!(check_no_self_loop(2, 3).is_ok());
    }
}
