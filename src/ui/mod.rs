//! Screens, components and rendering for the try-on flow.
//!
//! Screens follow a small update/view split: a screen holds its own state,
//! `update` consumes a message and returns a [`ScreenAction`] for the HTTP
//! shell to carry out, and `view` renders the current state to HTML.
//!
//! - [`screens`]: the capture and try-on screens
//! - [`components`]: layout shell, buttons, color picker, capture widget
//! - [`kit`]: html escaping and icons

pub mod components;
pub mod kit;
pub mod messages;
pub mod screens;
pub mod theme;

pub use messages::{CaptureMessage, Route, ScreenAction, TryOnMessage};

/// Values every view needs from the running configuration.
#[derive(Debug, Clone)]
pub struct ViewContext {
    /// Where the "View Products" action leads.
    pub recommendations_url: String,
}

impl Default for ViewContext {
    fn default() -> Self {
        Self {
            recommendations_url: Route::Recommendations.path().to_string(),
        }
    }
}
