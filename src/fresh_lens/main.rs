use super::core::{init, transition, Effect, Msg, State};
use super::upload::{file_name_of, Upload};
use crate::config::Config;
use crate::error::LoadError;
use crate::image_classifier::impl_fake::ImageClassifierFake;
use crate::image_classifier::impl_tract_onnx::ImageClassifierTractOnnx;
use crate::image_classifier::model_cache::{ModelCache, SharedImageClassifier};
use crate::logger::interface::Logger;
use std::collections::VecDeque;
use std::path::Path;
use std::sync::Arc;

pub type ClassifierLoader =
    Arc<dyn Fn() -> Result<SharedImageClassifier, LoadError> + Send + Sync>;

pub struct FreshLens {
    pub config: Config,
    pub logger: Arc<dyn Logger + Send + Sync>,
    pub model_cache: ModelCache,
    pub loader: ClassifierLoader,
    state: State,
    next_upload_id: u64,
}

impl FreshLens {
    pub fn new(
        config: Config,
        logger: Arc<dyn Logger + Send + Sync>,
        model_cache: ModelCache,
        loader: ClassifierLoader,
    ) -> Self {
        let (state, effects) = init();

        let mut fresh_lens = Self {
            config,
            logger: logger.with_namespace("fresh_lens"),
            model_cache,
            loader,
            state,
            next_upload_id: 0,
        };

        fresh_lens.run_effects(effects);

        fresh_lens
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    /// Runs `msg` and every message its effects produce until the queue is empty.
    pub fn send(&mut self, msg: Msg) {
        let mut queue = VecDeque::from([msg]);

        while let Some(msg) = queue.pop_front() {
            self.logger.info(&format!("msg: {:?}", msg));

            let (new_state, effects) = transition(self.state.clone(), msg);

            self.logger
                .info(&format!("state: {:?} effects: {:?}", new_state, effects));

            self.state = new_state;

            queue.extend(effects.into_iter().map(|effect| self.run_effect(effect)));
        }
    }

    fn run_effects(&mut self, effects: Vec<Effect>) {
        for effect in effects {
            let msg = self.run_effect(effect);
            self.send(msg);
        }
    }

    pub fn upload_bytes(&mut self, file_name: &str, bytes: impl Into<Arc<[u8]>>) {
        let upload = Upload::new(self.allocate_upload_id(), file_name, bytes);
        self.send(Msg::FileUploaded(upload));
    }

    pub fn upload_path(&mut self, path: &Path) {
        let msg = match Upload::from_path(self.allocate_upload_id(), path) {
            Ok(upload) => Msg::FileUploaded(upload),
            Err(error) => Msg::UploadRejected {
                file_name: file_name_of(path),
                error,
            },
        };
        self.send(msg);
    }

    fn allocate_upload_id(&mut self) -> u64 {
        self.next_upload_id += 1;
        self.next_upload_id
    }
}

pub fn classifier_loader(
    config: &Config,
    logger: Arc<dyn Logger + Send + Sync>,
) -> ClassifierLoader {
    let model_config = config.model.clone();
    let use_fake_classifier = config.use_fake_classifier;

    Arc::new(move || {
        let classifier: SharedImageClassifier = if use_fake_classifier {
            Arc::new(ImageClassifierFake::new(logger.clone()))
        } else {
            Arc::new(ImageClassifierTractOnnx::new(
                model_config.clone(),
                logger.clone(),
            )?)
        };
        Ok(classifier)
    })
}
