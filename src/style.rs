// Vendor-prefixed CSS property names.
//
// Pure helpers; the DOM probing and the per-page cache live in `support.rs`.

use parallax_core::camel_case;

/// Prefix table tried in order: (CSS prefix, JS style-property prefix).
/// The unprefixed name always comes first.
pub const VENDORS: [Option<(&str, &str)>; 5] = [
    None,
    Some(("-webkit-", "webkit")),
    Some(("-moz-", "Moz")),
    Some(("-o-", "O")),
    Some(("-ms-", "ms")),
];

/// JS style-property names to try for a hyphenated CSS property, in order.
pub fn property_candidates(property: &str) -> Vec<String> {
    VENDORS
        .iter()
        .map(|vendor| match vendor {
            None => camel_case(property),
            Some((_, js)) => camel_case(&format!("{js}-{property}")),
        })
        .collect()
}

/// (CSS name, JS name) pairs for the `transform` property, in probe order.
pub fn transform_candidates() -> Vec<(String, String)> {
    VENDORS
        .iter()
        .map(|vendor| match vendor {
            None => ("transform".to_string(), "transform".to_string()),
            Some((css, js)) => (format!("{css}transform"), format!("{js}Transform")),
        })
        .collect()
}
