use std::future::Future;
use std::path::PathBuf;

use crate::domain::{
    common::entities::app_errors::CoreError,
    upload::{entities::StagedImage, value_objects::UploadImageInput},
};

/// Port for the scratch directory that holds uploaded photos.
#[cfg_attr(test, mockall::automock)]
pub trait UploadStore: Send + Sync {
    /// Persist an upload under its file name and describe where it landed
    fn stage(
        &self,
        input: UploadImageInput,
    ) -> impl Future<Output = Result<StagedImage, CoreError>> + Send;

    /// Read back the bytes of a staged image
    fn read(&self, path: PathBuf) -> impl Future<Output = Result<Vec<u8>, CoreError>> + Send;
}
