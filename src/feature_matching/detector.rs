use image::GrayImage;
use crate::feature_matching::types::Features;

pub trait FeatureDetector {
    fn detect_and_compute(&self, image: &GrayImage) -> Features;
}
