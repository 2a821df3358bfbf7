//! Note color palette and contrast helpers.

/// Color assigned to notes created without an explicit color.
pub const DEFAULT_NOTE_COLOR: &str = "#FFF9C4";

/// Sentinel stored when a note uses the surface's own card background
/// instead of an explicit color value.
pub const DEFAULT_COLOR_TOKEN: &str = "default";

/// The named colors offered by the picker, default token first.
pub const NOTE_COLORS: &[(&str, &str)] = &[
    ("Default", DEFAULT_COLOR_TOKEN),
    ("Yellow", "#FFF9C4"),
    ("Blue", "#BBDEFB"),
    ("Green", "#C8E6C9"),
    ("Pink", "#FFCDD2"),
    ("Purple", "#E1BEE7"),
];

/// Resolves a user-supplied color argument.
///
/// Palette names map to their values (case-insensitive), so "default" yields
/// the default token; anything else passes through untouched, since the core
/// does not validate color formats.
pub fn resolve_color(input: &str) -> String {
    let input = input.trim();
    for (name, value) in NOTE_COLORS {
        if name.eq_ignore_ascii_case(input) {
            return (*value).to_string();
        }
    }
    input.to_string()
}

/// Perceived-luminance check used to pick readable text on a colored card.
///
/// Only `#rrggbb` values can be dark; the default token and anything
/// unparseable count as light backgrounds.
pub fn is_dark_color(color: &str) -> bool {
    let Some(hex) = color.strip_prefix('#') else {
        return false;
    };
    if hex.len() != 6 || !hex.is_ascii() {
        return false;
    }

    let (Ok(r), Ok(g), Ok(b)) = (
        u8::from_str_radix(&hex[0..2], 16),
        u8::from_str_radix(&hex[2..4], 16),
        u8::from_str_radix(&hex[4..6], 16),
    ) else {
        return false;
    };

    0.299 * f64::from(r) + 0.587 * f64::from(g) + 0.114 * f64::from(b) < 186.0
}
