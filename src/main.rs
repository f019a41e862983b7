use std::process::ExitCode;

use yuvlab_rs::image_pipeline::{BmpToYuvPipeline, ConversionConfig};
use yuvlab_rs::logger;

use tracing::{error, info};

const INPUT_DIR: &str = "data/";
const OUTPUT_DIR: &str = "results/";

fn main() -> ExitCode {
    logger::init();

    info!("Starting yuvlab...");

    let config = ConversionConfig::default();
    let pipeline = BmpToYuvPipeline::new(config);

    info!("BMP to YUV pipeline initialized");
    info!("Row padding: {:?}", pipeline.config().row_padding);
    info!("Batch policy: {:?}", pipeline.config().batch_policy);

    match pipeline.convert_directory(INPUT_DIR, OUTPUT_DIR) {
        Ok(report) => match report.first_failure() {
            None => {
                info!("Converted {} file(s) into {}", report.converted().len(), OUTPUT_DIR);
                ExitCode::SUCCESS
            }
            Some((path, e)) => {
                error!(
                    "{} of {} file(s) failed, first: {}: {}",
                    report.failures().len(),
                    report.total(),
                    path.display(),
                    e
                );
                ExitCode::from(e.exit_code())
            }
        },
        Err(e) => {
            error!("Conversion failed: {}", e);
            ExitCode::from(e.exit_code())
        }
    }
}
