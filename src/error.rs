use std::path::PathBuf;

use crate::slide::SlideId;

#[derive(Debug, thiserror::Error)]
pub enum ShowcaseError {
    /// A showcase needs at least one slide.
    #[error("showcase has no slides")]
    EmptySlideList,

    #[error("slide id {id} appears more than once")]
    DuplicateSlideId { id: SlideId },

    #[error("slide index {index} out of range for {len} slides")]
    IndexOutOfRange { index: usize, len: usize },

    /// A content file could not be parsed or described an invalid slide.
    #[error("parse error in {file}: {detail}")]
    Parse { file: PathBuf, detail: String },

    #[error("no image files found in directory: {dir}")]
    NoImages { dir: PathBuf },

    #[error("failed to load texture for {path}: {detail}")]
    Texture { path: PathBuf, detail: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
