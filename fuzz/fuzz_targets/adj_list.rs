#![no_main]

use libfuzzer_sys::fuzz_target;

use digraf::{
    infra::{modeling::MutOpsSeq, testing::check_consistency},
    storage::AdjList,
};

fuzz_target!(|ops: MutOpsSeq| {
    let mut graph = AdjList::new(ops.vertex_count());

    for op in ops {
        op.apply(&mut graph);
        check_consistency(&graph)
            .as_ref()
            .map_err(ToString::to_string)
            .unwrap();
    }
});
