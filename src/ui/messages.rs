use std::time::Duration;

use crate::catalog::Color;
use crate::image::CapturedImage;

// ============================================================================
// Routes
// ============================================================================

/// Logical navigation targets of the flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Capture,
    TryOn,
    /// External product page; navigated to, never served here.
    Recommendations,
}

impl Route {
    pub fn path(&self) -> &'static str {
        match self {
            Route::Capture => "/demo/process",
            Route::TryOn => "/demo/try-on",
            Route::Recommendations => "/demo/recommendations",
        }
    }
}

// ============================================================================
// Screen Messages
// ============================================================================

#[derive(Debug, Clone)]
pub enum CaptureMessage {
    ImageCaptured(CapturedImage),
    ImageRejected(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum TryOnMessage {
    CategorySelected(String),
    ColorSelected(Color),
    RetakePhoto,
    ViewProducts,
}

// ============================================================================
// Screen Actions - side effects requested from the shell
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub enum ScreenAction {
    None,
    /// Persist the image into the session's `capturedImage` slot.
    StoreImage(CapturedImage),
    Navigate(Route),
    NavigateAfter { route: Route, delay: Duration },
    Batch(Vec<ScreenAction>),
}

impl ScreenAction {
    /// Flattens nested batches into the order they should run in.
    pub fn into_steps(self) -> Vec<ScreenAction> {
        match self {
            ScreenAction::None => Vec::new(),
            ScreenAction::Batch(actions) => actions.into_iter().flat_map(ScreenAction::into_steps).collect(),
            action => vec![action],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn batches_flatten_in_order() {
        let action = ScreenAction::Batch(vec![
            ScreenAction::None,
            ScreenAction::Navigate(Route::Capture),
            ScreenAction::Batch(vec![ScreenAction::Navigate(Route::TryOn)]),
        ]);

        assert_eq!(
            action.into_steps(),
            vec![ScreenAction::Navigate(Route::Capture), ScreenAction::Navigate(Route::TryOn)]
        );
        assert!(ScreenAction::None.into_steps().is_empty());
    }
}
