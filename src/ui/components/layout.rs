//! The page shell every screen is rendered into.

use std::time::Duration;

use chrono::{Datelike, Local};

use crate::catalog::Icon;
use crate::ui::kit::html::escape;
use crate::ui::kit::icons::icon;
use crate::ui::theme;

/// A timed client-side navigation, rendered as a `<meta http-equiv="refresh">`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Refresh {
    pub after: Duration,
    pub to: String,
}

impl Refresh {
    /// Whole seconds to wait, rounded up so the redirect never fires early.
    pub fn seconds(&self) -> u64 {
        let secs = self.after.as_secs();
        if self.after.subsec_nanos() > 0 {
            secs + 1
        } else {
            secs
        }
    }
}

pub struct Layout {
    title: String,
    refresh: Option<Refresh>,
}

impl Layout {
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
            refresh: None,
        }
    }

    pub fn with_refresh(mut self, refresh: Refresh) -> Self {
        self.refresh = Some(refresh);
        self
    }

    pub fn render(&self, body: &str) -> String {
        let refresh = self
            .refresh
            .as_ref()
            .map(|r| {
                format!(
                    r#"<meta http-equiv="refresh" content="{};url={}">"#,
                    r.seconds(),
                    escape(&r.to)
                )
            })
            .unwrap_or_default();

        format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
{refresh}
<title>{title} · Virtual Try-On</title>
<style>{style}</style>
</head>
<body>
<header class="shell-header"><a class="brand" href="/">{logo}Virtual Try-On</a></header>
<main>
{body}
</main>
<footer class="shell-footer">© {year} Virtual Try-On demo</footer>
</body>
</html>
"#,
            title = escape(&self.title),
            style = theme::stylesheet(),
            logo = icon(Icon::Sparkles, ""),
            year = Local::now().year(),
        )
    }
}
