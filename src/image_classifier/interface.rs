use crate::classification::ClassificationResult;
use crate::error::InferenceError;
use image::DynamicImage;

pub trait ImageClassifier {
    fn classify(&self, image: &DynamicImage) -> Result<ClassificationResult, InferenceError>;
}
