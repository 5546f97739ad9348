use serde::Deserialize;

use knight_moves::{build_graph, find_path};

#[derive(Deserialize)]
struct DistanceTable {
    cases: Vec<Case>,
}

#[derive(Deserialize)]
struct Case {
    start: (i32, i32),
    target: (i32, i32),
    moves: usize,
}

#[test]
fn knight_distance_table() {
    let data = include_str!("data/distances.json");
    let table: DistanceTable = serde_json::from_str(data).expect("invalid distances.json");
    assert_eq!(table.cases.len(), 4 * 64);

    let graph = build_graph();
    for case in &table.cases {
        let path = find_path(&graph, case.start, case.target).unwrap_or_else(|e| {
            panic!("{:?} -> {:?} failed: {e}", case.start, case.target)
        });
        assert_eq!(
            path.moves(),
            case.moves,
            "wrong distance for {:?} -> {:?}",
            case.start,
            case.target
        );
    }
}
