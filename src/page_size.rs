//! Page geometry resolution and stylesheet generation
//!
//! Every run resolves exactly one CSS size string, used uniformly for all
//! rendered chapters. The resolved size and margin are embedded in a small
//! stylesheet that also zeroes the engine's default body/html spacing so
//! content fills the page exactly.

/// Intrinsic content size: 595px × 841px CSS pixels, i.e. A4 at 96 DPI.
/// Used when no page size is requested so pages match the HTML content
/// dimensions produced by the download step.
pub const INTRINSIC_SIZE: &str = "595px 841px";

/// Named physical paper sizes in millimeters (width, height)
const PRESETS: &[(&str, (f64, f64))] = &[
    ("A4", (210.0, 297.0)),
    ("A5", (148.0, 210.0)),
    ("Letter", (215.9, 279.4)),
    ("Legal", (215.9, 355.6)),
    ("Tabloid", (279.4, 431.8)),
];

/// Requested page size for a run
#[derive(Debug, Clone, PartialEq)]
pub enum PageSize {
    /// A named preset ("A4", "Letter", ...) or, if unrecognized, a raw CSS
    /// size expression passed through verbatim
    Named(String),
    /// Explicit width and height in millimeters
    Custom { width_mm: f64, height_mm: f64 },
}

impl PageSize {
    /// Look up a preset by name. Returns None for unrecognized names.
    pub fn preset(name: &str) -> Option<(f64, f64)> {
        PRESETS
            .iter()
            .find(|(preset, _)| *preset == name)
            .map(|(_, dims)| *dims)
    }
}

/// Resolve the requested page size into a CSS `size` value.
///
/// - absent → the intrinsic content size (`"595px 841px"`)
/// - recognized preset → `"{w}mm {h}mm"` from the preset table
/// - unrecognized string → passed through verbatim
/// - explicit pair → `"{w}mm {h}mm"`
pub fn resolve_size(page_size: Option<&PageSize>) -> String {
    match page_size {
        None => INTRINSIC_SIZE.to_string(),
        Some(PageSize::Named(name)) => match PageSize::preset(name) {
            Some((width, height)) => format!("{}mm {}mm", width, height),
            None => name.clone(),
        },
        Some(PageSize::Custom {
            width_mm,
            height_mm,
        }) => format!("{}mm {}mm", width_mm, height_mm),
    }
}

/// Build the stylesheet applied to every chapter in a run.
///
/// Besides the `@page` rule this resets the default body/html margin and
/// padding to zero, otherwise the engine's defaults would add spacing
/// around content that was laid out to fill the page.
pub fn page_stylesheet(page_size: Option<&PageSize>, margin: &str) -> String {
    let size = resolve_size(page_size);
    format!(
        "@page {{\n    size: {size};\n    margin: {margin};\n}}\nhtml, body {{\n    margin: 0;\n    padding: 0;\n}}\n"
    )
}

/// Parse a `--page-size` CLI value: either "WIDTHxHEIGHT" in millimeters
/// (e.g. "100x200") or a preset/raw size name.
pub fn parse_page_size(value: &str) -> PageSize {
    if let Some((w, h)) = value.split_once('x') {
        if let (Ok(width_mm), Ok(height_mm)) = (w.trim().parse(), h.trim().parse()) {
            return PageSize::Custom {
                width_mm,
                height_mm,
            };
        }
    }
    PageSize::Named(value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_size_is_intrinsic() {
        assert_eq!(resolve_size(None), "595px 841px");
    }

    #[test]
    fn test_preset_a4() {
        let size = PageSize::Named("A4".to_string());
        assert_eq!(resolve_size(Some(&size)), "210mm 297mm");
    }

    #[test]
    fn test_preset_letter() {
        let size = PageSize::Named("Letter".to_string());
        assert_eq!(resolve_size(Some(&size)), "215.9mm 279.4mm");
    }

    #[test]
    fn test_custom_pair() {
        let size = PageSize::Custom {
            width_mm: 100.0,
            height_mm: 200.0,
        };
        assert_eq!(resolve_size(Some(&size)), "100mm 200mm");
    }

    #[test]
    fn test_unrecognized_name_passes_through() {
        let size = PageSize::Named("12in 9in".to_string());
        assert_eq!(resolve_size(Some(&size)), "12in 9in");
    }

    #[test]
    fn test_stylesheet_contains_size_and_margin() {
        let css = page_stylesheet(None, "1cm");
        assert!(css.contains("size: 595px 841px;"));
        assert!(css.contains("margin: 1cm;"));
        assert!(css.contains("html, body"));
        assert!(css.contains("padding: 0;"));
    }

    #[test]
    fn test_parse_page_size_pair() {
        assert_eq!(
            parse_page_size("100x200"),
            PageSize::Custom {
                width_mm: 100.0,
                height_mm: 200.0
            }
        );
    }

    #[test]
    fn test_parse_page_size_name() {
        assert_eq!(parse_page_size("A5"), PageSize::Named("A5".to_string()));
    }
}
