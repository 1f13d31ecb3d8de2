//! Inline SVG line icons.
//!
//! Paths are taken from the lucide icon set, drawn on a 24x24 view box with
//! round caps and joins, stroked with `currentColor`.

use crate::catalog::Icon;

fn paths(icon: Icon) -> &'static [&'static str] {
    match icon {
        Icon::AlertCircle => &["M12 8v4", "M12 16h.01", "M22 12a10 10 0 1 1-20 0 10 10 0 0 1 20 0"],
        Icon::Camera => &[
            "M14.5 4h-5L7 7H4a2 2 0 0 0-2 2v9a2 2 0 0 0 2 2h16a2 2 0 0 0 2-2V9a2 2 0 0 0-2-2h-3l-2.5-3z",
            "M15 13a3 3 0 1 1-6 0 3 3 0 0 1 6 0",
        ],
        Icon::Crown => &["m2 4 3 12h14l3-12-6 7-4-7-4 7-6-7z", "M5 20h14"],
        Icon::Heart => &[
            "M19 14c1.49-1.46 3-3.21 3-5.5A5.5 5.5 0 0 0 16.5 3c-1.76 0-3 .5-4.5 2-1.5-1.5-2.74-2-4.5-2A5.5 5.5 0 0 0 2 8.5c0 2.3 1.5 4.05 3 5.5l7 7Z",
        ],
        Icon::Palette => &[
            "M13.5 6.5h.01",
            "M17.5 10.5h.01",
            "M8.5 7.5h.01",
            "M6.5 12.5h.01",
            "M12 2C6.5 2 2 6.5 2 12s4.5 10 10 10c.93 0 1.65-.75 1.65-1.69 0-.44-.18-.84-.44-1.13-.29-.29-.44-.65-.44-1.13a1.64 1.64 0 0 1 1.67-1.67h2c3.05 0 5.56-2.5 5.56-5.55C21.97 6.01 17.46 2 12 2z",
        ],
        Icon::Shield => &["M20 13c0 5-3.5 7.5-7.66 8.95a1 1 0 0 1-.67-.01C7.5 20.5 4 18 4 13V6a1 1 0 0 1 1-1c2 0 4.5-1.2 6.24-2.72a1.17 1.17 0 0 1 1.52 0C14.51 3.81 17 5 19 5a1 1 0 0 1 1 1z"],
        Icon::ShoppingBag => &["M6 2 3 6v14a2 2 0 0 0 2 2h14a2 2 0 0 0 2-2V6l-3-4Z", "M3 6h18", "M16 10a4 4 0 0 1-8 0"],
        Icon::Sparkles => &[
            "m12 3-1.91 5.81a2 2 0 0 1-1.28 1.28L3 12l5.81 1.91a2 2 0 0 1 1.28 1.28L12 21l1.91-5.81a2 2 0 0 1 1.28-1.28L21 12l-5.81-1.91a2 2 0 0 1-1.28-1.28Z",
            "M5 3v4",
            "M19 17v4",
            "M3 5h4",
            "M17 19h4",
        ],
        Icon::Sun => &[
            "M16 12a4 4 0 1 1-8 0 4 4 0 0 1 8 0",
            "M12 2v2",
            "M12 20v2",
            "m4.93 4.93 1.41 1.41",
            "m17.66 17.66 1.41 1.41",
            "M2 12h2",
            "M20 12h2",
            "m6.34 17.66-1.41 1.41",
            "m19.07 4.93-1.41 1.41",
        ],
        Icon::Wand => &[
            "M15 4V2",
            "M15 16v-2",
            "M8 9h2",
            "M20 9h2",
            "M17.8 11.8 19 13",
            "M15 9h.01",
            "M17.8 6.2 19 5",
            "m3 21 9-9",
            "M12.2 6.2 11 5",
        ],
        Icon::WandSparkles => &[
            "m21.64 3.64-1.28-1.28a1.21 1.21 0 0 0-1.72 0L2.36 18.64a1.21 1.21 0 0 0 0 1.72l1.28 1.28a1.2 1.2 0 0 0 1.72 0L21.64 5.36a1.2 1.2 0 0 0 0-1.72",
            "m14 7 3 3",
            "M5 6v4",
            "M19 14v4",
            "M10 2v2",
            "M7 8H3",
            "M21 16h-4",
            "M11 3H9",
        ],
    }
}

/// Renders `icon` as an inline, decorative SVG element.
pub fn icon(icon: Icon, class: &str) -> String {
    let body: String = paths(icon).iter().map(|d| format!(r#"<path d="{d}"/>"#)).collect();
    format!(
        r#"<svg class="icon {class}" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" aria-hidden="true">{body}</svg>"#
    )
}
