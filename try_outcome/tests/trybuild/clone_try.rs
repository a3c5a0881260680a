//! Cloning a `Try` whose value type is `Clone` compiles.

use try_outcome::{Failure, Try};

#[derive(Clone)]
struct Snapshot {
    rows: Vec<u32>,
}

fn main() {
    let original = Try::new(Snapshot { rows: vec![1, 2] });
    let copy = original.clone();
    assert_eq!(copy.value().map(|s| s.rows.len()).ok(), Some(2));

    let failed: Try<Snapshot> = Try::from_failure(Failure::msg("lost"));
    let failed_copy = failed.clone();
    assert!(failed_copy.has_failure());
}
