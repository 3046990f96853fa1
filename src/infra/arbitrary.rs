use arbitrary::{Arbitrary, Unstructured};

use super::modeling::{Index, MutOp, MutOpsSeq};

const MAX_VERTEX_COUNT: usize = 64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum OpKind {
    AddEdge,
    RemoveEdge,
    SetVertexWeight,
    SetEdgeWeight,
    ClearEdges,
}

impl<'a> Arbitrary<'a> for MutOpsSeq {
    fn arbitrary(u: &mut Unstructured<'a>) -> arbitrary::Result<Self> {
        let vertex_count = u.int_in_range(0..=MAX_VERTEX_COUNT)?;

        let mut ops = Vec::new();

        while !u.is_empty() {
            match arbitrary_op(u) {
                Ok(op) => ops.push(op),
                Err(_) => break,
            }
        }

        Ok(MutOpsSeq::new(vertex_count, ops))
    }
}

fn arbitrary_op(u: &mut Unstructured<'_>) -> arbitrary::Result<MutOp> {
    // Adding dominates so that the graphs get reasonably dense. Clearing
    // should be a rare operation.
    let kind = match u.int_in_range(0..=99u8)? {
        0..=54 => OpKind::AddEdge,
        55..=74 => OpKind::RemoveEdge,
        75..=84 => OpKind::SetVertexWeight,
        85..=98 => OpKind::SetEdgeWeight,
        _ => OpKind::ClearEdges,
    };

    match kind {
        OpKind::AddEdge => Ok(MutOp::AddEdge(index(u)?, index(u)?)),
        OpKind::RemoveEdge => Ok(MutOp::RemoveEdge(index(u)?, index(u)?)),
        OpKind::SetVertexWeight => Ok(MutOp::SetVertexWeight(index(u)?, u.arbitrary()?)),
        OpKind::SetEdgeWeight => Ok(MutOp::SetEdgeWeight(index(u)?, index(u)?, u.arbitrary()?)),
        OpKind::ClearEdges => Ok(MutOp::ClearEdges),
    }
}

fn index(u: &mut Unstructured<'_>) -> arbitrary::Result<Index> {
    u.arbitrary().map(Index)
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use fastrand::Rng;

    use super::*;

    #[test]
    fn mut_ops_seq_arbitrary_sanity() {
        let mut frequency = HashMap::<_, usize>::new();
        let mut total = 0;

        for size in [500, 1000, 5000] {
            let mut raw = vec![0; size];

            for seed in [0, 3, 7, 13, 23, 42, 69, 123] {
                let mut rng = Rng::with_seed(seed);
                rng.fill(&mut raw);

                let mut u = Unstructured::new(&raw);
                let seq: MutOpsSeq = u.arbitrary().unwrap();

                assert!(seq.vertex_count() <= MAX_VERTEX_COUNT);
                total += seq.ops().len();

                for op in seq {
                    let kind = match op {
                        MutOp::AddEdge(_, _) => OpKind::AddEdge,
                        MutOp::RemoveEdge(_, _) => OpKind::RemoveEdge,
                        MutOp::SetVertexWeight(_, _) => OpKind::SetVertexWeight,
                        MutOp::SetEdgeWeight(_, _, _) => OpKind::SetEdgeWeight,
                        MutOp::ClearEdges => OpKind::ClearEdges,
                    };

                    *frequency.entry(kind).or_default() += 1;
                }
            }
        }

        let share = |kind| frequency.get(&kind).copied().unwrap_or_default() as f64 / total as f64;

        assert!(total > 0);
        assert!((0.4..=0.7).contains(&share(OpKind::AddEdge)));
        assert!((0.1..=0.3).contains(&share(OpKind::RemoveEdge)));
        assert!(share(OpKind::ClearEdges) <= 0.05);
    }
}
