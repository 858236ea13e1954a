// SPDX-FileCopyrightText: 2026 Shigeo Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Uploaded image ingestion.
//!
//! Each user has one current image at `{image_dir}/{user_id}.jpg`; a new
//! upload overwrites it.

use std::path::{Path, PathBuf};

use image::ImageFormat;
use shigeo_core::{ImageReference, ShigeoError, UserId};
use tracing::debug;

/// Writes uploaded images under a single directory.
#[derive(Debug, Clone)]
pub struct ImageStore {
    dir: PathBuf,
}

impl ImageStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Decodes `bytes`, re-encodes them as JPEG, and returns the saved path.
    pub async fn save(&self, user: &UserId, bytes: Vec<u8>) -> Result<ImageReference, ShigeoError> {
        validate_user_id(user.as_str())?;
        let path = self.dir.join(format!("{}.jpg", user.as_str()));

        tokio::fs::create_dir_all(&self.dir)
            .await
            .map_err(|e| {
                ShigeoError::Internal(format!(
                    "cannot create image directory {}: {e}",
                    self.dir.display()
                ))
            })?;

        let target = path.clone();
        tokio::task::spawn_blocking(move || reencode_jpeg(&bytes, &target))
            .await
            .map_err(|e| ShigeoError::Internal(format!("image task failed: {e}")))??;

        debug!(user_id = %user, path = %path.display(), "image stored");
        Ok(ImageReference(path.to_string_lossy().into_owned()))
    }
}

fn reencode_jpeg(bytes: &[u8], path: &Path) -> Result<(), ShigeoError> {
    let decoded = image::load_from_memory(bytes).map_err(|e| ShigeoError::Image {
        message: format!("cannot decode uploaded image: {e}"),
        source: Some(Box::new(e)),
    })?;
    // JPEG has no alpha channel.
    decoded
        .to_rgb8()
        .save_with_format(path, ImageFormat::Jpeg)
        .map_err(|e| ShigeoError::Internal(format!("cannot write {}: {e}", path.display())))
}

/// Rejects ids that are empty or could escape the image directory.
pub fn validate_user_id(user_id: &str) -> Result<(), ShigeoError> {
    if user_id.is_empty() {
        return Err(ShigeoError::InvalidInput("user_id must not be empty".into()));
    }
    if !user_id
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
    {
        return Err(ShigeoError::InvalidInput(format!(
            "user_id {user_id:?} may only contain letters, digits, '_' and '-'"
        )));
    }
    Ok(())
}
