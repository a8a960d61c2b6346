//! Rebin a fine fixed-width histogram with Bayesian Blocks
//!
//! The first histogram's edges are computed once and reused for a second
//! one, as when several spectra must share a common binning.

use blocks_changepoint::BlocksParameters;
use blocks_histogram::{
    fixed_histogram, rebin, rebin_with_edges, scale_by_width, NonIntegerContents,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, Normal, Uniform};
use tracing_subscriber::EnvFilter;

fn spectrum(seed: u64) -> Result<Vec<f64>, Box<dyn std::error::Error>> {
    let mut rng = StdRng::seed_from_u64(seed);
    let line = Normal::new(30.0, 1.5)?;
    let flat = Uniform::new(0.0, 100.0);
    let mut data: Vec<f64> = (0..500).map(|_| line.sample(&mut rng)).collect();
    data.extend((0..1500).map(|_| flat.sample(&mut rng)));
    Ok(data)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let fine = fixed_histogram(&spectrum(1)?, 200)?;
    println!("Input:   {fine}");

    let params = BlocksParameters::default();
    let coarse = rebin(&fine, &params, NonIntegerContents::Reject)?;
    println!("Rebinned: {coarse}");
    for bin in scale_by_width(&coarse).bins() {
        println!("  {bin}");
    }

    let second = fixed_histogram(&spectrum(2)?, 200)?;
    let aligned = rebin_with_edges(&second, &coarse.edges())?;
    println!("Second spectrum on shared edges: {aligned}");

    Ok(())
}
