//! Mip atlas build pipeline.

use std::path::{Path, PathBuf};

use crate::compose::compose_atlas;
use crate::layout::AtlasLayout;
use crate::naming::mip_output_path;
use crate::source::{validate_input, SourceImage};
use crate::{Error, Result};

/// Inputs to a single atlas build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildConfig {
    /// Source image path.
    pub input: PathBuf,
    /// Explicit output path. When unset the atlas is written next to the
    /// input as `<stem>_mip.<ext>`.
    pub output: Option<PathBuf>,
}

impl BuildConfig {
    /// Build config for `input` with the derived output path.
    pub fn new<P: Into<PathBuf>>(input: P) -> Self {
        Self {
            input: input.into(),
            output: None,
        }
    }

    /// Build config from an optional command-line argument.
    pub fn from_arg(input: Option<PathBuf>) -> Result<Self> {
        input.map(Self::new).ok_or(Error::MissingInput)
    }

    /// Write the atlas to `output` instead of the derived path.
    pub fn with_output<P: Into<PathBuf>>(mut self, output: P) -> Self {
        self.output = Some(output.into());
        self
    }

    /// Where the atlas will be written.
    pub fn output_path(&self) -> Result<PathBuf> {
        match &self.output {
            Some(output) => Ok(output.clone()),
            None => mip_output_path(&self.input),
        }
    }
}

/// Outcome of a successful build.
#[derive(Debug, Clone)]
pub struct BuildReport {
    /// Path the atlas was written to.
    pub output: PathBuf,
    /// Geometry of the written atlas.
    pub layout: AtlasLayout,
}

impl BuildReport {
    /// Source height plus the heights of every generated level.
    pub fn used_height(&self) -> u32 {
        self.layout.used_height()
    }
}

/// Builds a mip atlas from one source image.
#[derive(Debug, Clone)]
pub struct MipAtlasBuilder {
    config: BuildConfig,
}

impl MipAtlasBuilder {
    /// Create a builder for `config`.
    pub fn new(config: BuildConfig) -> Self {
        Self { config }
    }

    /// Compute the layout from the image header without decoding pixels or
    /// writing anything.
    pub fn plan(&self) -> Result<AtlasLayout> {
        let input = &self.config.input;
        validate_input(input)?;

        let (width, height) = image::image_dimensions(input).map_err(|source| Error::Decode {
            path: input.clone(),
            source,
        })?;

        Ok(AtlasLayout::new(width, height))
    }

    /// Decode the input, render the atlas and write it out.
    pub fn build(&self) -> Result<BuildReport> {
        let input = &self.config.input;
        validate_input(input)?;
        let output = self.config.output_path()?;

        let source = SourceImage::open(input)?;
        log::info!(
            "Loaded {}: {}x{} {:?}",
            input.display(),
            source.width(),
            source.height(),
            source.color()
        );

        let layout = AtlasLayout::new(source.width(), source.height());
        log::debug!(
            "{} levels, canvas {}x{}",
            layout.mip_levels(),
            layout.canvas_width(),
            layout.canvas_height()
        );

        let atlas = compose_atlas(&source, &layout)?;
        save(&atlas, &output)?;
        log::info!("Wrote {}", output.display());

        Ok(BuildReport { output, layout })
    }
}

fn save(atlas: &image::DynamicImage, path: &Path) -> Result<()> {
    atlas.save(path).map_err(|source| Error::Encode {
        path: path.to_path_buf(),
        source,
    })
}
