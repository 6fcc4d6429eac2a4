//! List Comparison Benchmark - Rust
//!
//! Prints tables to the CLI with execution times of the main array-list
//! (`Vec`) and linked-list (`LinkedList`) operations, each repeated many
//! times (1000, 2000, 4000 times). Tested operations: add, remove, get
//! (from head, middle and end). Displays time in nanoseconds.
//!
//! Run with: cargo run --release

use std::collections::LinkedList;

pub mod harness;
pub mod linked;

pub const COLLECTION_SIZE: usize = 100_000;
pub const INITIAL_INVOKES_COUNT: u32 = 1000;
pub const MAX_INVOKES_COUNT: u32 = 4000;
pub const INVOKES_COUNT_MULTIPLIER: u32 = 2;

/// Builds the two seed collections, each pre-filled with
/// [`COLLECTION_SIZE`] zero elements. Seeding is untimed.
pub fn seed_collections() -> (Vec<i64>, LinkedList<i64>) {
    let mut array_list = Vec::with_capacity(COLLECTION_SIZE);
    let mut linked_list = LinkedList::new();
    for _ in 0..COLLECTION_SIZE {
        array_list.push(0);
        linked_list.push_back(0);
    }
    (array_list, linked_list)
}

/// Runs the whole comparison: one table per invocation count, a blank
/// line after each. Batches are never isolated from each other, so the
/// collections drift in size across rounds; that drift is part of what
/// is being measured and is left alone.
pub fn run() {
    let (mut array_list, mut linked_list) = seed_collections();
    let mut invokes_count = INITIAL_INVOKES_COUNT;
    while invokes_count <= MAX_INVOKES_COUNT {
        let report = harness::run_round(&mut array_list, &mut linked_list, invokes_count);
        print!("{report}");
        println!();
        invokes_count *= INVOKES_COUNT_MULTIPLIER;
    }
}
