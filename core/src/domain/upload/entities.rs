use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::common::generate_timestamp;

/// An uploaded image written to the scratch directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct StagedImage {
    pub id: Uuid,
    pub file_name: String,
    #[schema(value_type = String)]
    pub path: PathBuf,
    pub media_type: String,
    pub size_bytes: u64,
    pub checksum_sha256: String,
    pub staged_at: DateTime<Utc>,
}

impl StagedImage {
    pub fn new(
        file_name: String,
        path: PathBuf,
        media_type: String,
        size_bytes: u64,
        checksum_sha256: String,
    ) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            file_name,
            path,
            media_type,
            size_bytes,
            checksum_sha256,
            staged_at: now,
        }
    }
}
