use std::path::PathBuf;

/// Pixel scaling applied before inference. Must match how the model was trained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Normalization {
    /// Divide every channel by 255.
    #[default]
    #[value(name = "unit")]
    UnitRange,
    /// Keep 0..=255 intensities.
    Raw,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ModelConfig {
    pub onnx_model_path: PathBuf,
    /// (height, width)
    pub input_shape: (u32, u32),
    pub normalization: Normalization,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            onnx_model_path: PathBuf::from("model_v1_meat.onnx"),
            input_shape: (128, 128),
            normalization: Normalization::UnitRange,
        }
    }
}
