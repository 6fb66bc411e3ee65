//! Source image validation and loading.

use std::fs;
use std::path::Path;

use image::{ColorType, DynamicImage};

use crate::{Error, Result};

/// Check that `path` names an existing regular file.
///
/// Runs before any decoding so a bad path never reaches the codec.
pub fn validate_input<P: AsRef<Path>>(path: P) -> Result<()> {
    let path = path.as_ref();

    let metadata = fs::metadata(path).map_err(|source| match source.kind() {
        std::io::ErrorKind::NotFound => Error::InputNotFound(path.to_path_buf()),
        _ => Error::InputUnreadable {
            path: path.to_path_buf(),
            source,
        },
    })?;

    if !metadata.is_file() {
        return Err(Error::InputNotAFile(path.to_path_buf()));
    }

    Ok(())
}

/// A decoded source texture in its native pixel format.
#[derive(Debug, Clone)]
pub struct SourceImage {
    image: DynamicImage,
}

impl SourceImage {
    /// Decode the image at `path`, inferring the format from its extension.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let image = image::open(path).map_err(|source| Error::Decode {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self { image })
    }

    /// Image width in pixels.
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    /// Image height in pixels.
    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Pixel format of the decoded buffer.
    pub fn color(&self) -> ColorType {
        self.image.color()
    }

    /// Borrow the decoded pixels.
    pub fn image(&self) -> &DynamicImage {
        &self.image
    }
}

impl From<DynamicImage> for SourceImage {
    fn from(image: DynamicImage) -> Self {
        Self { image }
    }
}
