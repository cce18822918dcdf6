//! Mithila Core - reusable build pipeline logic for the Mithila prototype
//! fonts.

pub mod config;
pub mod families;
pub mod io;
pub mod pipeline;
pub mod styles;

pub use families::FontFamily;
pub use pipeline::{PipelineContext, build_all, build_family, clean, validate_paths};
pub use styles::{STYLES, Style};
