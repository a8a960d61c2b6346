//! Basic Bayesian Blocks segmentation example
//!
//! Run with `RUST_LOG=blocks_changepoint=trace` to see recursion progress.

use blocks_changepoint::{segment, BayesianBlocks, BlockSegmenter};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::Exp;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    println!("=== Bayesian Blocks Examples ===\n");

    // Example 1: uniform events form a single block
    println!("1. Evenly spaced events");
    let uniform: Vec<f64> = (0..20).map(|i| i as f64).collect();
    let edges = segment(&uniform, 0.01)?;
    println!("  Edges: {edges:?}");

    // Example 2: Poisson arrivals with a burst in the middle
    println!("\n2. Poisson arrivals with a rate burst in [40, 50)");
    let mut rng = StdRng::seed_from_u64(1);
    let mut arrivals = Vec::new();
    let mut t = 0.0;
    while t < 100.0 {
        let rate = if (40.0..50.0).contains(&t) { 15.0 } else { 1.0 };
        t += rng.sample(Exp::new(rate)?);
        arrivals.push(t);
    }

    let result = BayesianBlocks::new(0.01)
        .with_timings(true)
        .segment_positions(&arrivals)?;
    println!("  {result}");
    for block in result.blocks() {
        println!(
            "    {block}  rate={:.2}",
            block.weight / block.width().max(f64::MIN_POSITIVE)
        );
    }
    if let Some(timings) = result.timings() {
        println!("  Timings: {timings}");
    }

    // Example 3: explicit weights, e.g. pre-binned counts
    println!("\n3. Weighted positions");
    let positions = [0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0];
    let weights = [1.0, 1.0, 1.0, 1.0, 20.0, 20.0, 20.0, 20.0];
    let result = BayesianBlocks::default().segment_weighted(&positions, &weights)?;
    println!("  Edges: {:?}", result.edges());

    Ok(())
}
