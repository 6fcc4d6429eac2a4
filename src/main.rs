//! List Comparison Benchmark - Rust
//!
//! Run with: cargo run --release

fn main() {
    list_compare::run();
}
