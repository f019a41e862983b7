pub mod image_pipeline;
pub mod feature_matching;
pub mod logger;
