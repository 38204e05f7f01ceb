//! Index survey over random two-generator subgroups of F(a, b).
//!
//! Purpose
//! - Give a quick feel for how often short random bases already have finite
//!   index, and how large their Stallings graphs get.
//! - Exercise folding, index and cosets end to end on reproducible draws.
//!
//! Run with `cargo run --release --example index_survey`.

use std::time::Instant;

use stallings::prelude::*;

fn main() {
    let cfg = WordCfg {
        rank: 2,
        min_len: 1,
        max_len: 4,
    };
    let samples = 2000u64;
    let mut finite = 0usize;
    let mut max_index = 0usize;
    let mut total_vertices = 0usize;

    let start = Instant::now();
    for index in 0..samples {
        let base = draw_base(cfg, 3, ReplayToken { seed: 2024, index });
        let sg = Subgroup::from_base(base);
        total_vertices += sg.graph().size();
        if let Index::Finite(n) = sg.index(2) {
            finite += 1;
            max_index = max_index.max(n);
            let cosets = sg.cosets(2).expect("finite index has cosets");
            assert_eq!(cosets.len(), n);
        }
    }
    let elapsed = start.elapsed().as_secs_f64() * 1e3;

    println!("samples={samples} generators=3 len=1..=4");
    println!(
        "finite_index={finite} ({:.1}%) max_index={max_index}",
        100.0 * finite as f64 / samples as f64
    );
    println!(
        "mean_vertices={:.2}",
        total_vertices as f64 / samples as f64
    );
    println!("elapsed_ms={elapsed:.3}");
}
