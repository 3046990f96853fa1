#![no_main]

use libfuzzer_sys::fuzz_target;

use digraf::{
    infra::{
        export::Gexf,
        modeling::MutOpsSeq,
        testing::{check_consistency, check_equivalence},
    },
    storage::{AdjList, AdjMatrix},
};

fuzz_target!(|ops: MutOpsSeq| {
    let mut adj_list = AdjList::new(ops.vertex_count());
    let mut adj_matrix = AdjMatrix::new(ops.vertex_count());

    for op in ops {
        let list_result = op.clone().apply(&mut adj_list);
        let matrix_result = op.apply(&mut adj_matrix);

        assert_eq!(list_result, matrix_result, "storages disagree on operation result");

        let results = [
            (
                check_equivalence(&adj_list, &adj_matrix).map_err(|error| error.to_string()),
                "AdjList <-> AdjMatrix",
            ),
            (
                check_consistency(&adj_list).map_err(|error| error.to_string()),
                "AdjList",
            ),
            (
                check_consistency(&adj_matrix).map_err(|error| error.to_string()),
                "AdjMatrix",
            ),
        ];

        if results.iter().any(|(result, _)| result.is_err()) {
            let mut report = "storages are not equivalent:".to_string();

            for (result, label) in results {
                let result = match result {
                    Ok(_) => "OK".to_string(),
                    Err(error) => error,
                };
                report.push_str(format!("\n  {label}: {result}").as_str());
            }

            panic!("{report}");
        }
    }

    let gexf = Gexf::new();
    assert_eq!(gexf.to_string(&adj_list), gexf.to_string(&adj_matrix));
});
