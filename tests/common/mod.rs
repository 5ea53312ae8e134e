#![allow(dead_code)]

use std::path::PathBuf;

use schedviz_test_utils::builders::{dependency_file, schedule_report};
use schedviz_test_utils::write_input;
use tempfile::TempDir;

/// Five-node adder/multiplier example: 0,1 -> 2 -> 4 and 3 -> 4, plus an
/// edge to node 5 which the schedule never mentions.
pub const NODES: &[(u32, u32, i64, i64)] = &[
    (0, 1, 0, 1),
    (1, 2, 0, 4),
    (2, 1, 4, 5),
    (3, 2, 1, 5),
    (4, 1, 5, 6),
];

pub const EDGES: &[(u32, u32)] = &[(0, 2), (1, 2), (2, 4), (3, 4), (4, 5)];

/// Temp dir holding `output.txt` and `input.txt` for the sample graph.
pub struct SampleInputs {
    pub dir: TempDir,
    pub schedule: PathBuf,
    pub dependencies: PathBuf,
}

pub fn sample_inputs() -> SampleInputs {
    let dir = TempDir::new().unwrap();
    let schedule = write_input(dir.path(), "output.txt", &schedule_report(NODES)).unwrap();
    let dependencies =
        write_input(dir.path(), "input.txt", &dependency_file(&[1, 2, 1, 2, 1, 1], EDGES)).unwrap();
    SampleInputs {
        dir,
        schedule,
        dependencies,
    }
}
