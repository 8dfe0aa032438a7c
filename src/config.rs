use crate::image_classifier::models::model_config::{ModelConfig, Normalization};
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    pub model: ModelConfig,
    pub use_fake_classifier: bool,
    pub logger_timezone: chrono::FixedOffset,
    pub log_filter: String,
    pub window_size: [f32; 2],
}

impl Default for Config {
    fn default() -> Self {
        Self {
            model: ModelConfig::default(),
            use_fake_classifier: false,
            logger_timezone: local_timezone(),
            log_filter: "info".to_string(),
            window_size: [640.0, 820.0],
        }
    }
}

fn local_timezone() -> chrono::FixedOffset {
    *chrono::Local::now().offset()
}

/// FreshLens AI: quality assessment for meat products
#[derive(Parser, Debug, Clone)]
#[command(version, about)]
pub struct Args {
    /// ONNX export of the freshness classifier
    #[arg(long, env = "FRESH_LENS_MODEL_PATH", default_value = "model_v1_meat.onnx")]
    pub model_path: PathBuf,

    /// Side length of the square model input, in pixels
    #[arg(long, env = "FRESH_LENS_IMAGE_SIZE", default_value_t = 128)]
    pub image_size: u32,

    /// Pixel scaling the model was trained with
    #[arg(long, value_enum, env = "FRESH_LENS_NORMALIZATION", default_value_t = Normalization::UnitRange)]
    pub normalization: Normalization,

    /// Use a random classifier instead of loading the model
    #[arg(long, env = "FRESH_LENS_FAKE")]
    pub fake: bool,

    /// Log filter, overridden by RUST_LOG
    #[arg(long, env = "FRESH_LENS_LOG", default_value = "info")]
    pub log_filter: String,
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        Self {
            model: ModelConfig {
                onnx_model_path: args.model_path,
                input_shape: (args.image_size, args.image_size),
                normalization: args.normalization,
            },
            use_fake_classifier: args.fake,
            log_filter: args.log_filter,
            ..Config::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_trained_model() {
        let config = Config::from(Args::parse_from(["fresh-lens"]));

        assert_eq!(config.model, ModelConfig::default());
        assert_eq!(config.model.input_shape, (128, 128));
        assert!(!config.use_fake_classifier);
    }

    #[test]
    fn test_args_override_model() {
        let args = Args::parse_from([
            "fresh-lens",
            "--model-path",
            "other.onnx",
            "--image-size",
            "224",
            "--normalization",
            "raw",
            "--fake",
        ]);
        let config = Config::from(args);

        assert_eq!(config.model.onnx_model_path, PathBuf::from("other.onnx"));
        assert_eq!(config.model.input_shape, (224, 224));
        assert_eq!(config.model.normalization, Normalization::Raw);
        assert!(config.use_fake_classifier);
    }
}
