use crate::catalog::Icon;
use crate::ui::kit::html::{classes, escape};
use crate::ui::kit::icons::icon;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
}

impl ButtonVariant {
    fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn-primary",
            ButtonVariant::Secondary => "btn-secondary",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum ButtonTarget {
    Link(String),
    Submit,
}

/// A pill button with an optional leading icon.
///
/// Renders as an `<a>` when given a link target, otherwise as a submit
/// button for the enclosing form.
#[derive(Debug, Clone)]
pub struct Button {
    label: String,
    icon: Option<Icon>,
    variant: ButtonVariant,
    target: ButtonTarget,
}

impl Button {
    pub fn new(label: &str) -> Self {
        Self {
            label: label.to_string(),
            icon: None,
            variant: ButtonVariant::default(),
            target: ButtonTarget::Submit,
        }
    }

    pub fn with_icon(mut self, icon: Icon) -> Self {
        self.icon = Some(icon);
        self
    }

    pub fn with_variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn with_href(mut self, href: &str) -> Self {
        self.target = ButtonTarget::Link(href.to_string());
        self
    }

    pub fn as_html(&self) -> String {
        let class = classes(["btn", self.variant.class()]);
        let icon = self.icon.map(|i| icon(i, "")).unwrap_or_default();
        let label = escape(&self.label);

        match &self.target {
            ButtonTarget::Link(href) => {
                format!(r#"<a class="{class}" href="{}">{icon}<span>{label}</span></a>"#, escape(href))
            }
            ButtonTarget::Submit => format!(r#"<button class="{class}" type="submit">{icon}<span>{label}</span></button>"#),
        }
    }
}
