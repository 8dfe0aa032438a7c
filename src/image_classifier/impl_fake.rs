use crate::classification::ClassificationResult;
use crate::error::InferenceError;
use crate::freshness::Freshness;
use crate::image_classifier::interface::ImageClassifier;
use crate::logger::interface::Logger;
use image::DynamicImage;
use rand::distr::{Distribution, Uniform};
use std::sync::Arc;

/// Stands in for the trained model: fixed probabilities, or random ones that sum to 1.
pub struct ImageClassifierFake {
    logger: Arc<dyn Logger + Send + Sync>,
    probabilities: Option<[f32; Freshness::COUNT]>,
}

impl ImageClassifierFake {
    pub fn new(logger: Arc<dyn Logger + Send + Sync>) -> Self {
        Self {
            logger: logger.with_namespace("image_classifier").with_namespace("fake"),
            probabilities: None,
        }
    }

    #[cfg(test)]
    pub fn with_probabilities(
        logger: Arc<dyn Logger + Send + Sync>,
        probabilities: [f32; Freshness::COUNT],
    ) -> Self {
        Self {
            probabilities: Some(probabilities),
            ..Self::new(logger)
        }
    }

    fn random_probabilities() -> Result<[f32; Freshness::COUNT], InferenceError> {
        let mut rng = rand::rng();

        let weight_dist =
            Uniform::new(0.01f32, 1.0).map_err(|e| InferenceError::Run(e.to_string()))?;

        let weights: [f32; Freshness::COUNT] =
            std::array::from_fn(|_| weight_dist.sample(&mut rng));
        let total: f32 = weights.iter().sum();

        Ok(weights.map(|w| w / total))
    }
}

impl ImageClassifier for ImageClassifierFake {
    fn classify(&self, image: &DynamicImage) -> Result<ClassificationResult, InferenceError> {
        self.logger.info(&format!(
            "Classifying {}x{} image with fake classifier...",
            image.width(),
            image.height()
        ));

        let probabilities = match self.probabilities {
            Some(probabilities) => probabilities,
            None => Self::random_probabilities()?,
        };

        ClassificationResult::from_probabilities(&probabilities)
    }
}
