use std::result;

use thiserror::Error;
use write_fonts::{BuilderError, tables::cmap::CmapConflict};

#[derive(Error, Debug)]
pub enum BuildError {
    #[error("glyph U+{code_point:04X} has a malformed outline: {detail}")]
    BadOutline { code_point: u32, detail: String },

    #[error("U+{0:04X} is not a Unicode scalar value")]
    InvalidCodePoint(u32),

    #[error("invalid version '{0}': expected YYYY-MM-DD or YYYY-MM-DD.N")]
    InvalidVersion(String),

    #[error("failed to build cmap: {0}")]
    Cmap(#[from] CmapConflict),

    #[error("failed to compile glyph table: {0}")]
    Glyf(#[from] write_fonts::error::Error),

    #[error("failed to assemble font: {0}")]
    Builder(#[from] BuilderError),
}

pub type Result<T> = result::Result<T, BuildError>;
