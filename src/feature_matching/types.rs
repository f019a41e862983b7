//! Feature matching data and configuration types

/// Length of a SIFT descriptor: 4x4 spatial cells of 8 orientation bins
pub const DESCRIPTOR_LEN: usize = 128;

pub type Descriptor = [f32; DESCRIPTOR_LEN];

/// A locally distinctive image point
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Keypoint {
    /// Column in pixels
    pub x: f32,
    /// Row in pixels
    pub y: f32,
    /// Diameter of the neighbourhood the descriptor was computed over
    pub size: f32,
    /// Dominant gradient orientation in degrees
    pub angle: f32,
}

/// Keypoints of one image and their descriptors, index-aligned
#[derive(Debug, Clone, Default)]
pub struct Features {
    pub keypoints: Vec<Keypoint>,
    pub descriptors: Vec<Descriptor>,
}

impl Features {
    pub fn len(&self) -> usize {
        self.keypoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keypoints.is_empty()
    }
}

/// Candidate correspondence between a query descriptor and a train descriptor
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DMatch {
    pub query_idx: usize,
    pub train_idx: usize,
    /// Euclidean distance between the two descriptors
    pub distance: f32,
}

/// Keypoints of both images and the matches that passed the ratio test
#[derive(Debug, Clone, Default)]
pub struct MatchResult {
    pub keypoints1: Vec<Keypoint>,
    pub keypoints2: Vec<Keypoint>,
    pub matches: Vec<DMatch>,
}

/// Configuration for detection and matching
#[derive(Debug, Clone)]
pub struct MatchConfig {
    /// Best match is kept only if closer than `ratio` times the second best
    pub ratio: f32,
    /// Strongest keypoints kept per image, `None` keeps all
    pub max_features: Option<usize>,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            ratio: 0.5,
            max_features: Some(500),
        }
    }
}

impl MatchConfig {
    pub fn builder() -> MatchConfigBuilder {
        MatchConfigBuilder::default()
    }
}

/// Builder for MatchConfig
#[derive(Default)]
pub struct MatchConfigBuilder {
    ratio: Option<f32>,
    max_features: Option<Option<usize>>,
}

impl MatchConfigBuilder {
    pub fn ratio(mut self, ratio: f32) -> Self {
        self.ratio = Some(ratio);
        self
    }

    pub fn max_features(mut self, max: Option<usize>) -> Self {
        self.max_features = Some(max);
        self
    }

    pub fn build(self) -> MatchConfig {
        let default = MatchConfig::default();
        MatchConfig {
            ratio: self.ratio.unwrap_or(default.ratio),
            max_features: self.max_features.unwrap_or(default.max_features),
        }
    }
}
