use serde::Deserialize;
use tracing::{debug, info, warn};

use crate::catalog::{self, Category, Color, Icon};
use crate::error::{Result, TryOnError};
use crate::ui::components::button::{Button, ButtonVariant};
use crate::ui::components::color_picker::ColorPicker;
use crate::ui::components::layout::Layout;
use crate::ui::kit::html::{classes, escape};
use crate::ui::kit::icons::icon;
use crate::ui::messages::{Route, ScreenAction, TryOnMessage};
use crate::ui::ViewContext;

/// The chosen category and, optionally, one of its shades.
///
/// Exactly one category is always selected. The color, when present, is
/// always offered by the selected category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    category: &'static Category,
    color: Option<Color>,
}

impl Default for Selection {
    fn default() -> Self {
        Self {
            category: catalog::default_category(),
            color: None,
        }
    }
}

impl Selection {
    pub fn category(&self) -> &'static Category {
        self.category
    }

    pub fn color(&self) -> Option<Color> {
        self.color
    }

    /// Selects the category with `id`; returns whether anything changed.
    ///
    /// The current color survives only if the new category offers it.
    pub fn select_category(&mut self, id: &str) -> Result<bool> {
        let category = catalog::find(id).ok_or_else(|| TryOnError::UnknownCategory(id.to_string()))?;
        if category.id == self.category.id {
            return Ok(false);
        }

        self.category = category;
        self.color = self.color.filter(|c| category.offers(*c));
        Ok(true)
    }

    /// Selects `color` if the current category offers it; returns whether
    /// anything changed.
    pub fn select_color(&mut self, color: Color) -> bool {
        if !self.category.offers(color) || self.color == Some(color) {
            return false;
        }

        self.color = Some(color);
        true
    }

    pub fn with_category(mut self, id: &str) -> Self {
        let _ = self.select_category(id);
        self
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.select_color(color);
        self
    }

    pub fn query(&self) -> String {
        match self.color {
            Some(color) => format!("category={}&color={}", self.category.id, color.to_hex_digits()),
            None => format!("category={}", self.category.id),
        }
    }

    /// Location of the try-on screen showing this selection.
    pub fn href(&self) -> String {
        format!("{}?{}", Route::TryOn.path(), self.query())
    }
}

/// Selection carried in the try-on URL, e.g. `?category=blush&color=FFB6C1`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SelectionQuery {
    pub category: Option<String>,
    pub color: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Studio {
    image: String,
    selection: Selection,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TryOnScreen {
    /// No captured image in the session.
    AwaitingImage,
    Ready(Studio),
}

impl TryOnScreen {
    /// Enters the screen with whatever the session's image slot holds.
    pub fn enter(stored: Option<String>) -> Self {
        match stored.filter(|image| !image.is_empty()) {
            Some(image) => {
                info!(bytes = image.len(), "entering try-on with captured image");
                TryOnScreen::Ready(Studio {
                    image,
                    selection: Selection::default(),
                })
            }
            None => {
                info!("no captured image in session");
                TryOnScreen::AwaitingImage
            }
        }
    }

    /// Replays the selection in `query` as selection messages.
    pub fn apply_query(&mut self, query: &SelectionQuery) {
        if let Some(category) = &query.category {
            self.update(TryOnMessage::CategorySelected(category.clone()));
        }

        if let Some(color) = &query.color {
            match color.parse() {
                Ok(color) => {
                    self.update(TryOnMessage::ColorSelected(color));
                }
                Err(e) => warn!(%e, "ignoring color selection"),
            }
        }
    }

    pub fn update(&mut self, message: TryOnMessage) -> ScreenAction {
        if let Some(route) = self.navigation(&message) {
            return ScreenAction::Navigate(route);
        }

        match (self, message) {
            (TryOnScreen::Ready(studio), TryOnMessage::CategorySelected(id)) => {
                match studio.selection.select_category(&id) {
                    Ok(true) => debug!(category = %id, "category selected"),
                    Ok(false) => {}
                    Err(e) => warn!(%e, "ignoring category selection"),
                }
                ScreenAction::None
            }
            (TryOnScreen::Ready(studio), TryOnMessage::ColorSelected(color)) => {
                if studio.selection.select_color(color) {
                    debug!(%color, "color selected");
                } else if !studio.selection.category.offers(color) {
                    debug!(%color, category = studio.selection.category.id, "color not offered, ignoring");
                }
                ScreenAction::None
            }
            _ => ScreenAction::None,
        }
    }

    /// Route a navigation message leads to from the current state.
    fn navigation(&self, message: &TryOnMessage) -> Option<Route> {
        match (self, message) {
            (_, TryOnMessage::RetakePhoto) => Some(Route::Capture),
            (TryOnScreen::Ready(_), TryOnMessage::ViewProducts) => Some(Route::Recommendations),
            _ => None,
        }
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, TryOnScreen::Ready(_))
    }

    pub fn selection(&self) -> Option<&Selection> {
        match self {
            TryOnScreen::Ready(studio) => Some(&studio.selection),
            TryOnScreen::AwaitingImage => None,
        }
    }

    pub fn image(&self) -> Option<&str> {
        match self {
            TryOnScreen::Ready(studio) => Some(&studio.image),
            TryOnScreen::AwaitingImage => None,
        }
    }

    /// Where a navigation message leads from the current state.
    fn href_for(&self, message: TryOnMessage, ctx: &ViewContext) -> String {
        match self.navigation(&message) {
            Some(Route::Recommendations) => ctx.recommendations_url.clone(),
            Some(route) => route.path().to_string(),
            None => Route::TryOn.path().to_string(),
        }
    }

    pub fn view(&self, ctx: &ViewContext) -> String {
        match self {
            TryOnScreen::AwaitingImage => Layout::new("No image").render(&format!(
                r#"<div class="card notice" role="alert">
{alert}
<p class="lead">No image found. Please capture or upload an image first.</p>
{take_photo}
</div>"#,
                alert = icon(Icon::AlertCircle, "icon-xl"),
                take_photo = Button::new("Take Photo")
                    .with_icon(Icon::Camera)
                    .with_href(&self.href_for(TryOnMessage::RetakePhoto, ctx))
                    .as_html(),
            )),
            TryOnScreen::Ready(studio) => Layout::new("Try On").render(&self.studio_view(studio, ctx)),
        }
    }

    fn studio_view(&self, studio: &Studio, ctx: &ViewContext) -> String {
        let selection = studio.selection;

        let categories: String = catalog::categories()
            .iter()
            .map(|category| {
                let selected = category.id == selection.category.id;
                format!(
                    r#"<a class="{class}" href="{href}" aria-current="{selected}"><span>{icon} <strong>{name}</strong></span><p>{description}</p></a>"#,
                    class = classes(["category", if selected { "selected" } else { "" }]),
                    href = escape(&selection.with_category(category.id).href()),
                    icon = icon(category.icon, ""),
                    name = category.name,
                    description = category.description,
                )
            })
            .collect();

        let picker = ColorPicker::new(selection.category.colors, selection.color, |color| {
            selection.with_color(color).href()
        })
        .as_html();

        let retake = Button::new("Try Different Photo")
            .with_icon(Icon::WandSparkles)
            .with_href(&self.href_for(TryOnMessage::RetakePhoto, ctx))
            .as_html();
        let products = Button::new("View Products")
            .with_icon(Icon::ShoppingBag)
            .with_variant(ButtonVariant::Secondary)
            .with_href(&self.href_for(TryOnMessage::ViewProducts, ctx))
            .as_html();

        format!(
            r#"<div class="center">
<span class="pill">{crown}Virtual Beauty Studio</span>
<h1>Transform Your Look</h1>
</div>
<div class="studio">
<section class="card">
<h2>{palette} Makeup Categories</h2>
<nav class="categories">{categories}</nav>
</section>
<section class="card">
<div class="preview"><img src="{image}" alt="Your photo"></div>
<div class="shade-header"><h3>{wand} Select Your Shade</h3><span class="pill">{category}</span></div>
{picker}
<div class="actions">{retake}{products}</div>
</section>
</div>"#,
            crown = icon(Icon::Crown, ""),
            palette = icon(Icon::Palette, ""),
            wand = icon(Icon::Wand, ""),
            image = escape(&studio.image),
            category = selection.category.name,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const IMAGE: &str = "data:image/gif;base64,R0lGODlhAQABAAAAACw=";

    fn ready() -> TryOnScreen {
        TryOnScreen::enter(Some(IMAGE.to_string()))
    }

    fn query(category: Option<&str>, color: Option<&str>) -> SelectionQuery {
        SelectionQuery {
            category: category.map(str::to_string),
            color: color.map(str::to_string),
        }
    }

    #[test]
    fn missing_image_awaits_capture_and_hides_the_studio() {
        for stored in [None, Some(String::new())] {
            let screen = TryOnScreen::enter(stored);
            assert_eq!(screen, TryOnScreen::AwaitingImage);

            let html = screen.view(&ViewContext::default());
            assert!(html.contains("No image found. Please capture or upload an image first."));
            assert!(html.contains(r#"href="/demo/process""#));
            assert!(!html.contains(r#"class="categories""#));
            assert!(!html.contains(r#"class="swatches""#));
        }
    }

    #[test]
    fn awaiting_screen_only_navigates_back_to_capture() {
        let mut screen = TryOnScreen::AwaitingImage;
        assert_eq!(screen.update(TryOnMessage::RetakePhoto), ScreenAction::Navigate(Route::Capture));
        assert_eq!(screen.update(TryOnMessage::ViewProducts), ScreenAction::None);
        assert_eq!(screen.update(TryOnMessage::CategorySelected("blush".into())), ScreenAction::None);
        assert_eq!(screen, TryOnScreen::AwaitingImage);
    }

    #[test]
    fn first_category_is_selected_by_default() {
        let screen = ready();
        let selection = screen.selection().unwrap();
        assert_eq!(selection.category().id, "lipstick");
        assert_eq!(selection.color(), None);
        assert_eq!(screen.image(), Some(IMAGE));
    }

    #[test]
    fn selecting_a_category_selects_exactly_that_one() {
        let mut screen = ready();
        for category in catalog::categories() {
            screen.update(TryOnMessage::CategorySelected(category.id.to_string()));
            assert_eq!(screen.selection().unwrap().category().id, category.id);

            let html = screen.view(&ViewContext::default());
            assert_eq!(html.matches(r#"class="category selected""#).count(), 1);
            assert_eq!(html.matches(r#"aria-current="true""#).count(), 1);
        }
    }

    #[test]
    fn unknown_categories_leave_the_selection_alone() {
        let mut screen = ready();
        screen.update(TryOnMessage::CategorySelected("blush".into()));
        let before = screen.clone();

        assert_eq!(screen.update(TryOnMessage::CategorySelected("mascara".into())), ScreenAction::None);
        assert_eq!(screen, before);
    }

    #[test]
    fn picker_offers_exactly_the_selected_palette() {
        let mut screen = ready();
        screen.update(TryOnMessage::CategorySelected("eyeliner".into()));

        let html = screen.view(&ViewContext::default());
        for color in catalog::find("eyeliner").unwrap().colors {
            assert!(html.contains(&format!("background-color:{color}")), "{color} missing");
        }
        for color in catalog::find("lipstick").unwrap().colors {
            assert!(!html.contains(&format!("background-color:{color}")), "{color} leaked");
        }
    }

    #[test]
    fn color_selection_only_touches_the_selection() {
        let mut screen = ready();
        let red = Color::hex(0xFF0000);

        assert_eq!(screen.update(TryOnMessage::ColorSelected(red)), ScreenAction::None);
        assert_eq!(screen.selection().unwrap().color(), Some(red));
        assert_eq!(screen.selection().unwrap().category().id, "lipstick");
        assert_eq!(screen.image(), Some(IMAGE));
        assert_eq!(catalog::find("lipstick").unwrap().colors[0], red);
    }

    #[test]
    fn colors_outside_the_palette_are_ignored() {
        let mut screen = ready();
        screen.update(TryOnMessage::ColorSelected(Color::hex(0x000000)));
        assert_eq!(screen.selection().unwrap().color(), None);
    }

    #[test]
    fn switching_category_keeps_only_shared_colors() {
        let mut selection = Selection::default();
        let hot_pink = Color::hex(0xFF69B4);
        assert!(selection.select_color(hot_pink));

        // blush also offers hot pink
        assert!(selection.select_category("blush").unwrap());
        assert_eq!(selection.color(), Some(hot_pink));

        assert!(selection.select_category("eyeliner").unwrap());
        assert_eq!(selection.color(), None);
    }

    #[test]
    fn repeated_selection_is_idempotent() {
        let mut screen = ready();
        screen.update(TryOnMessage::CategorySelected("foundation".into()));
        screen.update(TryOnMessage::ColorSelected(Color::hex(0xD2B48C)));
        let before = screen.clone();

        assert_eq!(screen.update(TryOnMessage::CategorySelected("foundation".into())), ScreenAction::None);
        assert_eq!(screen.update(TryOnMessage::ColorSelected(Color::hex(0xD2B48C))), ScreenAction::None);
        assert_eq!(screen, before);

        let mut selection = *before.selection().unwrap();
        assert!(!selection.select_category("foundation").unwrap());
        assert!(!selection.select_color(Color::hex(0xD2B48C)));
    }

    #[test]
    fn query_replays_the_selection() {
        let mut screen = ready();
        screen.apply_query(&query(Some("blush"), Some("dc143c")));
        let selection = screen.selection().unwrap();
        assert_eq!(selection.category().id, "blush");
        assert_eq!(selection.color(), Some(Color::hex(0xDC143C)));
        assert_eq!(selection.href(), "/demo/try-on?category=blush&color=DC143C");
    }

    #[test]
    fn bad_query_values_fall_back_to_defaults() {
        let mut screen = ready();
        screen.apply_query(&query(Some("glitter"), Some("not-a-color")));
        assert_eq!(screen.selection().copied(), Some(Selection::default()));
    }

    #[test]
    fn navigation_actions() {
        let mut screen = ready();
        assert_eq!(screen.update(TryOnMessage::RetakePhoto), ScreenAction::Navigate(Route::Capture));
        assert_eq!(screen.update(TryOnMessage::ViewProducts), ScreenAction::Navigate(Route::Recommendations));

        let ctx = ViewContext {
            recommendations_url: "https://shop.example/looks".to_string(),
        };
        let html = screen.view(&ctx);
        assert!(html.contains(r#"href="https://shop.example/looks""#));
        assert!(html.contains("Try Different Photo"));
        assert!(html.contains(&format!(r#"<img src="{IMAGE}" alt="Your photo">"#)));
    }

    #[test]
    fn links_follow_the_navigation_of_each_state() {
        let ctx = ViewContext::default();
        for screen in [TryOnScreen::AwaitingImage, ready()] {
            for message in [TryOnMessage::RetakePhoto, TryOnMessage::ViewProducts] {
                let expected = match screen.clone().update(message.clone()) {
                    ScreenAction::Navigate(Route::Recommendations) => ctx.recommendations_url.clone(),
                    ScreenAction::Navigate(route) => route.path().to_string(),
                    _ => Route::TryOn.path().to_string(),
                };
                assert_eq!(screen.href_for(message, &ctx), expected);
            }
        }
        assert_eq!(ready().href_for(TryOnMessage::ViewProducts, &ctx), "/demo/recommendations");
    }
}
