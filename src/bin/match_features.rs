use anyhow::Context;

use yuvlab_rs::feature_matching::{FeatureMatchPipeline, MatchConfig};
use yuvlab_rs::logger;

use tracing::info;

const IMAGE1_PATH: &str = "./data/img1.jpg";
const IMAGE2_PATH: &str = "./data/img2.jpg";
const SAVE_PATH: &str = "./data/matched.jpg";

fn main() -> anyhow::Result<()> {
    logger::init();

    let pipeline = FeatureMatchPipeline::new(MatchConfig::default());
    info!("Ratio threshold: {}", pipeline.config().ratio);

    let result = pipeline
        .match_files(IMAGE1_PATH, IMAGE2_PATH, SAVE_PATH)
        .with_context(|| format!("matching {} against {}", IMAGE1_PATH, IMAGE2_PATH))?;

    info!("{} good matches written to {}", result.matches.len(), SAVE_PATH);
    Ok(())
}
