use crate::catalog::Color;
use crate::ui::kit::html::{classes, escape};

/// A row of round swatches, one link per color.
///
/// `href` maps a color to the location that selects it; the current
/// selection is marked and reported through `aria-pressed`.
pub struct ColorPicker<'a> {
    colors: &'a [Color],
    selected: Option<Color>,
    href: Box<dyn Fn(Color) -> String + 'a>,
}

impl<'a> ColorPicker<'a> {
    pub fn new(colors: &'a [Color], selected: Option<Color>, href: impl Fn(Color) -> String + 'a) -> Self {
        Self {
            colors,
            selected,
            href: Box::new(href),
        }
    }

    pub fn as_html(&self) -> String {
        let swatches: String = self
            .colors
            .iter()
            .map(|&color| {
                let selected = self.selected == Some(color);
                format!(
                    r#"<a class="{class}" href="{href}" style="background-color:{color}" title="{color}" aria-label="Shade {color}" aria-pressed="{selected}"></a>"#,
                    class = classes(["swatch", if selected { "selected" } else { "" }]),
                    href = escape(&(self.href)(color)),
                )
            })
            .collect();

        format!(r#"<div class="swatches" role="group" aria-label="Shades">{swatches}</div>"#)
    }
}
