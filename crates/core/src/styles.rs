//! Style definitions for the generated fonts.

/// One static style of a family.
///
/// Bold is metadata-only in these prototypes: the outlines are shared and
/// only naming, weight class and style flags differ.
#[derive(Debug, Clone, Copy)]
pub struct Style {
    pub name: &'static str,
    pub weight_class: u16,
    pub bold: bool,
}

impl Style {
    pub const fn new(name: &'static str, weight_class: u16, bold: bool) -> Self {
        Self { name, weight_class, bold }
    }
}

/// The styles every family is generated in.
pub const STYLES: &[Style] =
    &[Style::new("Regular", 400, false), Style::new("Bold", 700, true)];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn regular_comes_before_bold() {
        assert_eq!(STYLES[0].name, "Regular");
        assert!(!STYLES[0].bold);
        assert_eq!(STYLES[1].name, "Bold");
        assert!(STYLES[1].bold);
    }
}
