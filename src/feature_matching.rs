//! Feature matching module
//!
//! Detects keypoints in two grayscale images, matches their descriptors with a
//! nearest-neighbour ratio test and renders the surviving pairs side by side.
//! Every stage is a pure function of its inputs; only [`FeatureMatchPipeline::match_files`]
//! touches the filesystem.

mod error;
mod detector;
mod sift_detector;
mod matcher;
mod draw;
mod pipeline;
#[cfg(test)]
mod test_support;
pub mod types;

pub use error::{MatchError, Result};
pub use detector::FeatureDetector;
pub use sift_detector::SiftDetector;
pub use matcher::{BruteForceMatcher, DescriptorMatcher, ratio_test};
pub use draw::draw_matches;
pub use pipeline::{FeatureMatchPipeline, load_grayscale, match_images};
pub use types::{DMatch, Descriptor, Features, Keypoint, MatchConfig, MatchConfigBuilder, MatchResult};
