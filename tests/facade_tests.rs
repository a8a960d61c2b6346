//! Workspace-level checks through the re-exporting facade

use anyhow::Result;
use bayesian_blocks::blocks_histogram::BayesianBlocksBuilder;
use bayesian_blocks::{
    rebin, segment, BayesianBlocks, BlockSegmenter, BlocksParameters, Error, HistogramBuilder,
    NonIntegerContents, DEFAULT_FALSE_POSITIVE_RATE,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rand_distr::{Distribution, Normal};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new("debug"))
        .with_test_writer()
        .try_init();
}

#[test]
fn test_histogram_edges_match_segmentation() -> Result<()> {
    init_tracing();
    let mut rng = ChaCha8Rng::seed_from_u64(9);
    let normal = Normal::new(0.0, 1.0)?;
    let data: Vec<f64> = (0..500).map(|_| normal.sample(&mut rng)).collect();

    let edges = segment(&data, DEFAULT_FALSE_POSITIVE_RATE)?;
    let hist = BayesianBlocksBuilder::default().build(&data)?;
    tracing::info!(%hist, "built");

    assert_eq!(hist.edges(), edges);
    assert_eq!(hist.total_content(), data.len() as f64);
    Ok(())
}

#[test]
fn test_rebin_of_adaptive_histogram_is_stable() -> Result<()> {
    init_tracing();
    let data: Vec<f64> = (0..40).map(|i| (i / 4) as f64).collect();
    let hist = BayesianBlocksBuilder::default().build(&data)?;
    let again = rebin(&hist, &BlocksParameters::default(), NonIntegerContents::Reject)?;
    assert_eq!(again.total_content(), hist.total_content());
    Ok(())
}

#[test]
fn test_errors_surface_through_facade() {
    let err = BayesianBlocks::default()
        .segment_weighted(&[1.0, 2.0, 3.0], &[1.0, 2.0])
        .unwrap_err();
    assert!(err.is_validation());
    assert_eq!(
        err.to_string(),
        Error::size_mismatch(3, 2).to_string()
    );
}
