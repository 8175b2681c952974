//! Durable storage for rendered log documents.

use std::{
    fs,
    path::{Path, PathBuf},
};

use log::info;

use super::{document::LogDocument, svg::to_svg};
use crate::error::{FileSystemResultExt, Result};

/// Writes `document` as SVG into `dir`, replacing any earlier rendering of
/// the same trip. Returns the written path.
pub fn write_document(document: &LogDocument, dir: &Path) -> Result<PathBuf> {
    fs::create_dir_all(dir).fs_context(dir)?;

    let svg = to_svg(document)?;
    let path = dir.join(document.file_name());
    fs::write(&path, svg).fs_context(&path)?;

    info!(
        "Wrote {} page(s) for trip {} to {}",
        document.pages().len(),
        document.trip_id(),
        path.display()
    );
    Ok(path)
}
