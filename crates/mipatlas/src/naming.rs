//! Output file naming.

use std::path::{Path, PathBuf};

use crate::{Error, Result};

/// Suffix inserted between the file stem and its extension.
pub const MIP_SUFFIX: &str = "_mip";

/// Derive the atlas path for `input`: `dir/name.ext` becomes
/// `dir/name_mip.ext`.
///
/// Only the last `.` separates the extension, so `a.tar.gz` becomes
/// `a.tar_mip.gz`. A name without any `.` is treated as all extension:
/// `texture` becomes `_mip.texture`.
pub fn mip_output_path<P: AsRef<Path>>(input: P) -> Result<PathBuf> {
    let input = input.as_ref();
    let file_name = input
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| Error::InvalidFileName(input.to_path_buf()))?;

    let output_name = match file_name.rsplit_once('.') {
        Some((stem, ext)) => format!("{stem}{MIP_SUFFIX}.{ext}"),
        None => format!("{MIP_SUFFIX}.{file_name}"),
    };

    Ok(input.with_file_name(output_name))
}
