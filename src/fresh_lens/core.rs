use super::upload::{Preview, Upload};
use crate::classification::ClassificationResult;
use crate::error::{ClassifyError, ImageDecodeError, LoadError};

#[derive(Debug, Clone, PartialEq)]
pub struct Classified {
    pub preview: Preview,
    pub result: ClassificationResult,
}

#[derive(Debug, Clone, PartialEq)]
pub enum UploadState {
    AwaitingUpload,
    Classifying {
        upload_id: u64,
        file_name: String,
    },
    Classified {
        upload_id: u64,
        file_name: String,
        classified: Classified,
    },
    Failed {
        file_name: String,
        error: ClassifyError,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub enum State {
    LoadingModel,
    ModelLoadFailed { error: LoadError },
    Ready { upload: UploadState },
}

#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    ModelLoadDone(Result<(), LoadError>),
    FileUploaded(Upload),
    UploadRejected {
        file_name: String,
        error: ImageDecodeError,
    },
    ClassifyDone {
        upload_id: u64,
        file_name: String,
        result: Result<Classified, ClassifyError>,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    LoadModel,
    ClassifyUpload(Upload),
}

pub fn init() -> (State, Vec<Effect>) {
    (State::LoadingModel, vec![Effect::LoadModel])
}

pub fn transition(state: State, msg: Msg) -> (State, Vec<Effect>) {
    match (state, msg) {
        (State::LoadingModel, Msg::ModelLoadDone(Ok(()))) => (
            State::Ready {
                upload: UploadState::AwaitingUpload,
            },
            vec![],
        ),
        (State::LoadingModel, Msg::ModelLoadDone(Err(error))) => {
            (State::ModelLoadFailed { error }, vec![])
        }

        (State::Ready { .. }, Msg::FileUploaded(upload)) => (
            State::Ready {
                upload: UploadState::Classifying {
                    upload_id: upload.id,
                    file_name: upload.file_name.clone(),
                },
            },
            vec![Effect::ClassifyUpload(upload)],
        ),
        (State::Ready { .. }, Msg::UploadRejected { file_name, error }) => (
            State::Ready {
                upload: UploadState::Failed {
                    file_name,
                    error: error.into(),
                },
            },
            vec![],
        ),

        (
            State::Ready {
                upload:
                    UploadState::Classifying {
                        upload_id: current_id,
                        ..
                    },
            },
            Msg::ClassifyDone {
                upload_id,
                file_name,
                result,
            },
        ) if upload_id == current_id => {
            let upload = match result {
                Ok(classified) => UploadState::Classified {
                    upload_id,
                    file_name,
                    classified,
                },
                Err(error) => UploadState::Failed { file_name, error },
            };
            (State::Ready { upload }, vec![])
        }

        // Uploads before the model is ready, after a load failure, or stale results.
        (state, _) => (state, vec![]),
    }
}
