use std::path::Path;

use image::GrayImage;
use tracing::{info, instrument};

use crate::feature_matching::{
    detector::FeatureDetector,
    draw::draw_matches,
    error::{MatchError, Result},
    matcher::{BruteForceMatcher, DescriptorMatcher, ratio_test},
    sift_detector::SiftDetector,
    types::{MatchConfig, MatchResult},
};

/// Candidates requested per query descriptor for the ratio test.
const NEIGHBOURS: usize = 2;

/// Loads any supported image file as 8-bit grayscale.
pub fn load_grayscale<P: AsRef<Path>>(path: P) -> Result<GrayImage> {
    let path = path.as_ref();
    let image = image::open(path)
        .map_err(|e| MatchError::ImageLoad(format!("{}: {}", path.display(), e)))?;
    Ok(image.to_luma8())
}

/// Matches two images with the default detector and matcher.
pub fn match_images(image1: &GrayImage, image2: &GrayImage, config: &MatchConfig) -> Result<MatchResult> {
    FeatureMatchPipeline::new(config.clone()).match_images(image1, image2)
}

pub struct FeatureMatchPipeline<D: FeatureDetector, M: DescriptorMatcher> {
    detector: D,
    matcher: M,
    config: MatchConfig,
}

impl FeatureMatchPipeline<SiftDetector, BruteForceMatcher> {
    pub fn new(config: MatchConfig) -> Self {
        Self {
            detector: SiftDetector::new(&config),
            matcher: BruteForceMatcher,
            config,
        }
    }
}

impl<D: FeatureDetector, M: DescriptorMatcher> FeatureMatchPipeline<D, M> {
    pub fn with_custom(detector: D, matcher: M, config: MatchConfig) -> Self {
        Self {
            detector,
            matcher,
            config,
        }
    }

    fn validate(&self, image1: &GrayImage, image2: &GrayImage) -> Result<()> {
        let ratio = self.config.ratio;
        if !(ratio > 0.0 && ratio <= 1.0) {
            return Err(MatchError::InvalidRatio(ratio));
        }
        for image in [image1, image2] {
            if image.width() == 0 || image.height() == 0 {
                return Err(MatchError::EmptyImage(image.width(), image.height()));
            }
        }
        Ok(())
    }

    /// Detects features in both images and keeps the matches passing the ratio test.
    #[instrument(skip_all, fields(ratio = self.config.ratio))]
    pub fn match_images(&self, image1: &GrayImage, image2: &GrayImage) -> Result<MatchResult> {
        self.validate(image1, image2)?;

        let (features1, features2) = {
            let _span = tracing::info_span!("detect_features").entered();
            (
                self.detector.detect_and_compute(image1),
                self.detector.detect_and_compute(image2),
            )
        };

        let matches = {
            let _span = tracing::info_span!("match_descriptors").entered();
            let knn = self.matcher.knn_match(&features1.descriptors, &features2.descriptors, NEIGHBOURS);
            ratio_test(&knn, self.config.ratio)
        };

        info!(
            keypoints1 = features1.len(),
            keypoints2 = features2.len(),
            good_matches = matches.len(),
            "Matching complete"
        );

        Ok(MatchResult {
            keypoints1: features1.keypoints,
            keypoints2: features2.keypoints,
            matches,
        })
    }

    /// Loads both images, matches them and saves the rendered matches to `save_path`.
    ///
    /// The output format follows the extension of `save_path`.
    #[instrument(skip(self, image1_path, image2_path, save_path))]
    pub fn match_files<P: AsRef<Path>, Q: AsRef<Path>, S: AsRef<Path>>(
        &self,
        image1_path: P,
        image2_path: Q,
        save_path: S,
    ) -> Result<MatchResult> {
        let save_path = save_path.as_ref();

        let (image1, image2) = {
            let _span = tracing::info_span!("load_images").entered();
            (load_grayscale(image1_path)?, load_grayscale(image2_path)?)
        };

        let result = self.match_images(&image1, &image2)?;

        {
            let _span = tracing::info_span!("draw_and_save").entered();
            draw_matches(&image1, &image2, &result)
                .save(save_path)
                .map_err(|e| MatchError::ImageSave(format!("{}: {}", save_path.display(), e)))?;
        }

        info!(output = %save_path.display(), "Saved match visualization");
        Ok(result)
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Luma;
    use image::imageops::{self, FilterType};
    use crate::feature_matching::test_support::{shifted, texture};
    use crate::feature_matching::types::{Descriptor, Features, Keypoint};

    struct FixedDetector {
        features: Features,
    }

    impl FeatureDetector for FixedDetector {
        fn detect_and_compute(&self, _image: &GrayImage) -> Features {
            self.features.clone()
        }
    }

    fn one_hot(index: usize) -> Descriptor {
        let mut d = [0.0; 128];
        d[index] = 1.0;
        d
    }

    #[test]
    fn test_self_match_pairs_each_keypoint_with_itself() {
        let image = texture(96, 96, 21);
        let result = match_images(&image, &image, &MatchConfig::default()).unwrap();

        assert!(!result.matches.is_empty());
        assert_eq!(result.keypoints1, result.keypoints2);
        for m in &result.matches {
            assert_eq!(m.query_idx, m.train_idx);
            assert_eq!(m.distance, 0.0);
        }
    }

    #[test]
    fn test_translation_is_recovered() {
        let image1 = texture(128, 128, 42);
        let image2 = shifted(&image1, 5, 3, 0);
        let result = match_images(&image1, &image2, &MatchConfig::default()).unwrap();

        assert!(!result.matches.is_empty());
        let consistent = result
            .matches
            .iter()
            .filter(|m| {
                let a = result.keypoints1[m.query_idx];
                let b = result.keypoints2[m.train_idx];
                (b.x - a.x - 5.0).abs() < 1.5 && (b.y - a.y - 3.0).abs() < 1.5
            })
            .count();
        assert!(consistent * 10 >= result.matches.len() * 8, "{} of {}", consistent, result.matches.len());
    }

    #[test]
    fn test_scaled_copy_still_matches() {
        let image1 = texture(160, 160, 42);
        let image2 = imageops::resize(&image1, 320, 320, FilterType::Triangle);
        let result = match_images(&image1, &image2, &MatchConfig::default()).unwrap();

        assert!(!result.matches.is_empty());
        let consistent = result
            .matches
            .iter()
            .filter(|m| {
                let a = result.keypoints1[m.query_idx];
                let b = result.keypoints2[m.train_idx];
                (b.x - (2.0 * a.x + 0.5)).abs() < 3.0 && (b.y - (2.0 * a.y + 0.5)).abs() < 3.0
            })
            .count();
        assert!(consistent * 10 >= result.matches.len() * 7, "{} of {}", consistent, result.matches.len());
    }

    #[test]
    fn test_ratio_applies_to_detector_output() {
        let features = Features {
            keypoints: vec![
                Keypoint { x: 1.0, y: 1.0, size: 4.0, angle: 0.0 },
                Keypoint { x: 2.0, y: 2.0, size: 4.0, angle: 0.0 },
            ],
            descriptors: vec![one_hot(0), one_hot(1)],
        };
        let pipeline = FeatureMatchPipeline::with_custom(
            FixedDetector { features },
            BruteForceMatcher,
            MatchConfig::default(),
        );
        let image = GrayImage::from_pixel(4, 4, Luma([0]));

        let result = pipeline.match_images(&image, &image).unwrap();

        assert_eq!(result.matches.len(), 2);
        assert_eq!((result.matches[0].query_idx, result.matches[0].train_idx), (0, 0));
        assert_eq!((result.matches[1].query_idx, result.matches[1].train_idx), (1, 1));
    }

    #[test]
    fn test_invalid_ratio_is_rejected() {
        let image = GrayImage::from_pixel(4, 4, Luma([0]));
        for ratio in [0.0, -0.5, 1.5, f32::NAN] {
            let config = MatchConfig::builder().ratio(ratio).build();
            let result = match_images(&image, &image, &config);
            assert!(matches!(result, Err(MatchError::InvalidRatio(_))));
        }
    }

    #[test]
    fn test_empty_image_is_rejected() {
        let empty = GrayImage::new(0, 0);
        let image = GrayImage::from_pixel(4, 4, Luma([0]));
        let result = match_images(&image, &empty, &MatchConfig::default());
        assert!(matches!(result, Err(MatchError::EmptyImage(0, 0))));
    }

    #[test]
    fn test_match_files_writes_visualization() {
        let dir = tempfile::tempdir().unwrap();
        let path1 = dir.path().join("img1.png");
        let path2 = dir.path().join("img2.png");
        let save = dir.path().join("matched.png");

        let image1 = texture(96, 80, 9);
        image1.save(&path1).unwrap();
        shifted(&image1, 4, 2, 0).save(&path2).unwrap();

        let pipeline = FeatureMatchPipeline::new(MatchConfig::default());
        pipeline.match_files(&path1, &path2, &save).unwrap();

        let saved = image::open(&save).unwrap();
        assert_eq!((saved.width(), saved.height()), (192, 80));
    }

    #[test]
    fn test_missing_input_is_load_error() {
        let dir = tempfile::tempdir().unwrap();
        let pipeline = FeatureMatchPipeline::new(MatchConfig::default());
        let result = pipeline.match_files(
            dir.path().join("nope1.png"),
            dir.path().join("nope2.png"),
            dir.path().join("out.png"),
        );
        assert!(matches!(result, Err(MatchError::ImageLoad(_))));
        assert!(!dir.path().join("out.png").exists());
    }
}
