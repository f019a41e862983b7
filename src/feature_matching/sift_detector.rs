//! SIFT keypoints and descriptors via the `sift_features` crate.
//!
//! Keypoints come from a difference-of-Gaussians scale space, so they survive scaling and
//! in-plane rotation. Descriptors are the usual 128 orientation-histogram bins, widened
//! to `f32` for L2 matching.

use image::GrayImage;
use sift_features::SiftResult;
use tracing::debug;

use crate::feature_matching::detector::FeatureDetector;
use crate::feature_matching::types::{DESCRIPTOR_LEN, Descriptor, Features, Keypoint, MatchConfig};

/// Below this the scale-space pyramid has no room for a single octave.
const MIN_SIDE: u32 = 16;

pub struct SiftDetector {
    max_features: Option<usize>,
}

impl SiftDetector {
    pub fn new(config: &MatchConfig) -> Self {
        Self {
            max_features: config.max_features,
        }
    }
}

impl FeatureDetector for SiftDetector {
    fn detect_and_compute(&self, image: &GrayImage) -> Features {
        if image.width() < MIN_SIDE || image.height() < MIN_SIDE {
            debug!("Image {}x{} too small for SIFT", image.width(), image.height());
            return Features::default();
        }

        let SiftResult {
            keypoints,
            descriptors,
        } = sift_features::sift(image, self.max_features);

        let mut features = Features::default();
        for (kp, row) in keypoints.iter().zip(descriptors.rows()) {
            let mut descriptor: Descriptor = [0.0; DESCRIPTOR_LEN];
            for (dst, &src) in descriptor.iter_mut().zip(row.iter()) {
                *dst = src as f32;
            }
            features.keypoints.push(Keypoint {
                x: kp.x,
                y: kp.y,
                size: kp.size,
                angle: kp.angle,
            });
            features.descriptors.push(descriptor);
        }

        debug!(
            "Detected {} keypoints in {}x{} image",
            features.len(),
            image.width(),
            image.height()
        );
        features
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Luma;
    use crate::feature_matching::test_support::texture;

    #[test]
    fn test_flat_image_has_no_keypoints() {
        let image = GrayImage::from_pixel(64, 64, Luma([90]));
        let features = SiftDetector::new(&MatchConfig::default()).detect_and_compute(&image);
        assert!(features.is_empty());
        assert!(features.descriptors.is_empty());
    }

    #[test]
    fn test_tiny_image_has_no_keypoints() {
        let image = texture(8, 8, 7);
        let features = SiftDetector::new(&MatchConfig::default()).detect_and_compute(&image);
        assert!(features.is_empty());
    }

    #[test]
    fn test_textured_image_yields_aligned_features() {
        let image = texture(128, 128, 11);
        let features = SiftDetector::new(&MatchConfig::default()).detect_and_compute(&image);

        assert!(!features.is_empty());
        assert_eq!(features.keypoints.len(), features.descriptors.len());
        for kp in &features.keypoints {
            assert!((0.0..128.0).contains(&kp.x) && (0.0..128.0).contains(&kp.y), "{:?}", kp);
            assert!(kp.size > 0.0);
        }
        assert!(features.descriptors.iter().all(|d| d.iter().any(|&v| v > 0.0)));
    }

    #[test]
    fn test_max_features_caps_keypoints() {
        let image = texture(128, 128, 3);
        let config = MatchConfig::builder().max_features(Some(5)).build();
        let features = SiftDetector::new(&config).detect_and_compute(&image);
        assert!(features.len() <= 5);
        assert_eq!(features.keypoints.len(), features.descriptors.len());
    }
}
