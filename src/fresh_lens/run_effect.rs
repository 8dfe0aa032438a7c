use super::core::{Classified, Effect, Msg};
use super::main::FreshLens;
use super::upload::{Preview, Upload};
use crate::error::{ClassifyError, InferenceError};
use crate::image_classifier::preprocess::decode_upload;

impl FreshLens {
    pub fn run_effect(&self, effect: Effect) -> Msg {
        self.logger.info(&format!("Running effect: {:?}", effect));

        match effect {
            Effect::LoadModel => {
                let loaded = self.model_cache.get_or_load(|| (self.loader)());

                if let Err(error) = &loaded {
                    self.logger.error(&error.to_string());
                }

                Msg::ModelLoadDone(loaded.map(|_| ()))
            }
            Effect::ClassifyUpload(upload) => {
                let result = self.classify_upload(&upload);

                if let Err(error) = &result {
                    self.logger.error(&error.to_string());
                }

                Msg::ClassifyDone {
                    upload_id: upload.id,
                    file_name: upload.file_name,
                    result,
                }
            }
        }
    }

    fn classify_upload(&self, upload: &Upload) -> Result<Classified, ClassifyError> {
        let image = decode_upload(&upload.file_name, &upload.bytes)?;

        let classifier = self
            .model_cache
            .get()
            .ok_or_else(|| InferenceError::Run("model is not loaded".to_string()))?;

        let result = classifier.classify(&image)?;

        Ok(Classified {
            preview: Preview::from_image(&image),
            result,
        })
    }
}
