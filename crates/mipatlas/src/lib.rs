//! Mip atlas generation.
//!
//! Packs a texture and its full mip chain into a single image:
//! - the original at full resolution on the left
//! - levels 1..n, each half the size of the one before, stacked top to bottom
//!   in a column to its right
//!
//! The canvas is `width + width / 2` wide and as tall as the original, keeps
//! the source pixel format, and every level is resampled from the original
//! with a bicubic filter.
//!
//! # Example
//!
//! ```no_run
//! use mipatlas::{BuildConfig, MipAtlasBuilder};
//!
//! // Writes textures/rock_mip.png
//! let report = MipAtlasBuilder::new(BuildConfig::new("textures/rock.png")).build()?;
//! println!("{}", report.used_height());
//! # Ok::<(), mipatlas::Error>(())
//! ```

mod builder;
mod error;

pub mod compose;
pub mod layout;
pub mod naming;
pub mod source;

pub use builder::{BuildConfig, BuildReport, MipAtlasBuilder};
pub use error::{Error, Result};
pub use layout::{AtlasLayout, MipLevel};
pub use naming::mip_output_path;
pub use source::SourceImage;
