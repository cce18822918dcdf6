//! Configuration constants for Mithila font builds.

/// Default output directory for fonts and review pages.
pub const DEFAULT_DIST_DIR: &str = "dist";

/// Copyright string embedded in every generated font.
pub const COPYRIGHT: &str = "Copyright 2026 The Mithila Fonts Project Authors";

/// Glob pattern matching every generated font file.
pub const FONT_PATTERN: &str = "Mithila*-*.ttf";
