use crate::classification::ClassificationResult;
use crate::error::{InferenceError, LoadError};
use crate::freshness::Freshness;
use crate::image_classifier::interface::ImageClassifier;
use crate::image_classifier::preprocess::resize_image_to_tensor;
use crate::logger::interface::Logger;
use image::DynamicImage;
use std::sync::Arc;
use tract_onnx::prelude::*;

use super::models::model_config::ModelConfig;

pub struct ImageClassifierTractOnnx {
    model: TypedRunnableModel<TypedModel>,
    config: ModelConfig,
    logger: Arc<dyn Logger + Send + Sync>,
}

impl ImageClassifierTractOnnx {
    pub fn new(
        config: ModelConfig,
        logger: Arc<dyn Logger + Send + Sync>,
    ) -> Result<Self, LoadError> {
        let logger = logger.with_namespace("image_classifier").with_namespace("tract_onnx");
        let path = config.onnx_model_path.display().to_string();

        if !config.onnx_model_path.is_file() {
            return Err(LoadError::NotFound { path });
        }

        let invalid = |reason: String| LoadError::Invalid {
            path: path.clone(),
            reason,
        };

        logger.info(&format!("Loading model from {}", path));

        let (height, width) = config.input_shape;
        let input_shape = tvec!(1, height as usize, width as usize, 3);

        let model = tract_onnx::onnx()
            .model_for_path(&config.onnx_model_path)
            .map_err(|e| invalid(format!("onnx parse failed: {e}")))?
            .with_input_fact(0, InferenceFact::dt_shape(f32::datum_type(), input_shape))
            .map_err(|e| invalid(format!("onnx input fact failed: {e}")))?
            .into_optimized()
            .map_err(|e| invalid(format!("onnx optimize failed: {e}")))?
            .into_runnable()
            .map_err(|e| invalid(format!("onnx runnable failed: {e}")))?;

        let dummy = tract_ndarray::Array4::<f32>::zeros((1, height as usize, width as usize, 3))
            .into_tensor();
        let outputs = model
            .run(tvec!(dummy.into_tvalue()))
            .map_err(|e| invalid(format!("onnx trial run failed: {e}")))?;
        let output_len = outputs.first().map(|o| o.len()).unwrap_or(0);
        if output_len != Freshness::COUNT {
            return Err(invalid(format!(
                "model produces {} outputs, expected {}",
                output_len,
                Freshness::COUNT
            )));
        }

        logger.info(&format!(
            "Model loaded (input {}x{}, {:?})",
            width, height, config.normalization
        ));

        Ok(Self {
            model,
            config,
            logger,
        })
    }
}

impl ImageClassifier for ImageClassifierTractOnnx {
    fn classify(&self, image: &DynamicImage) -> Result<ClassificationResult, InferenceError> {
        let (height, width) = self.config.input_shape;

        let input = resize_image_to_tensor(image, width, height, self.config.normalization);

        let outputs = self
            .model
            .run(tvec!(input.into_tvalue()))
            .map_err(|e| InferenceError::Run(e.to_string()))?;

        let output = outputs
            .first()
            .ok_or_else(|| InferenceError::Run("model produced no outputs".to_string()))?
            .to_array_view::<f32>()
            .map_err(|e| InferenceError::Run(e.to_string()))?;

        let probabilities: Vec<f32> = output.iter().copied().collect();

        self.logger
            .info(&format!("Probabilities: {:?}", probabilities));

        ClassificationResult::from_probabilities(&probabilities)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image_classifier::models::model_config::Normalization;
    use crate::logger::impl_console::LoggerConsole;
    use image::{ImageBuffer, Rgb};
    use std::path::PathBuf;

    /// Averages each color channel over the image, then applies softmax:
    /// red dominant → Fresh, green → Half-Fresh, blue → Spoiled.
    const MEAN_COLOR_MODEL: &str = concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/src/image_classifier/models/mean_color_softmax.onnx"
    );

    /// Channel means followed by their overall mean: four outputs.
    const FOUR_OUTPUT_MODEL: &str = concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/src/image_classifier/models/mean_color_four_outputs.onnx"
    );

    fn model_config(path: &str, normalization: Normalization) -> ModelConfig {
        ModelConfig {
            onnx_model_path: PathBuf::from(path),
            input_shape: (128, 128),
            normalization,
        }
    }

    fn solid(width: u32, height: u32, color: [u8; 3]) -> DynamicImage {
        DynamicImage::ImageRgb8(ImageBuffer::from_pixel(width, height, Rgb(color)))
    }

    #[test]
    fn test_classifies_with_real_model() {
        let classifier = ImageClassifierTractOnnx::new(
            model_config(MEAN_COLOR_MODEL, Normalization::UnitRange),
            Arc::new(LoggerConsole::new()),
        )
        .unwrap();

        let result = classifier.classify(&solid(300, 77, [255, 0, 0])).unwrap();

        assert_eq!(result.freshness(), Freshness::Fresh);
        assert_eq!(result.confidence_text(), "57.61%");
        let expected_low = 1.0 / (std::f32::consts::E + 2.0);
        assert!((result.probability(Freshness::HalfFresh) - expected_low).abs() < 0.001);
        assert!((result.probability(Freshness::Spoiled) - expected_low).abs() < 0.001);
    }

    #[test]
    fn test_channel_order_maps_to_labels() {
        let classifier = ImageClassifierTractOnnx::new(
            model_config(MEAN_COLOR_MODEL, Normalization::UnitRange),
            Arc::new(LoggerConsole::new()),
        )
        .unwrap();

        let cases = [
            ([0, 255, 0], Freshness::HalfFresh),
            ([0, 0, 255], Freshness::Spoiled),
            ([200, 40, 40], Freshness::Fresh),
        ];

        for (color, expected) in cases {
            let result = classifier.classify(&solid(64, 500, color)).unwrap();
            assert_eq!(result.freshness(), expected);
        }
    }

    #[test]
    fn test_raw_normalization_reaches_the_model() {
        let classifier = ImageClassifierTractOnnx::new(
            model_config(MEAN_COLOR_MODEL, Normalization::Raw),
            Arc::new(LoggerConsole::new()),
        )
        .unwrap();

        let result = classifier.classify(&solid(10, 10, [0, 0, 255])).unwrap();

        assert_eq!(result.freshness(), Freshness::Spoiled);
        assert!(result.confidence() > 0.999);
    }

    #[test]
    fn test_wrong_output_size_is_invalid() {
        let error = ImageClassifierTractOnnx::new(
            model_config(FOUR_OUTPUT_MODEL, Normalization::UnitRange),
            Arc::new(LoggerConsole::new()),
        )
        .err()
        .unwrap();

        match error {
            LoadError::Invalid { reason, .. } => {
                assert_eq!(reason, "model produces 4 outputs, expected 3")
            }
            error => panic!("Unexpected error: {:?}", error),
        }
    }

    #[test]
    fn test_missing_model_is_not_found() {
        let config = ModelConfig {
            onnx_model_path: PathBuf::from("./does/not/exist.onnx"),
            ..ModelConfig::default()
        };

        let error = ImageClassifierTractOnnx::new(config, Arc::new(LoggerConsole::new()))
            .err()
            .unwrap();

        assert_eq!(
            error,
            LoadError::NotFound {
                path: "./does/not/exist.onnx".to_string()
            }
        );
    }

    #[test]
    fn test_corrupt_model_is_invalid() {
        let path = std::env::temp_dir().join("fresh_lens_corrupt_model.onnx");
        std::fs::write(&path, b"not an onnx protobuf").unwrap();
        let config = ModelConfig {
            onnx_model_path: path.clone(),
            ..ModelConfig::default()
        };

        let error = ImageClassifierTractOnnx::new(config, Arc::new(LoggerConsole::new()))
            .err()
            .unwrap();

        assert!(matches!(error, LoadError::Invalid { .. }));
        let _ = std::fs::remove_file(path);
    }
}
