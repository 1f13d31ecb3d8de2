use std::time::Duration;

use tracing::{debug, info, warn};

use crate::catalog::Icon;
use crate::ui::components::capture_widget::capture_widget;
use crate::ui::components::layout::{Layout, Refresh};
use crate::ui::kit::icons::icon;
use crate::ui::messages::{CaptureMessage, Route, ScreenAction};

const TIPS: [&str; 4] = [
    "Ensure your face is well-lit",
    "Remove glasses or accessories",
    "Face the camera directly",
    "Keep a neutral expression",
];

const FEATURES: [(Icon, &str, &str); 3] = [
    (Icon::Camera, "Easy Capture", "Take or upload a photo in seconds"),
    (Icon::Shield, "Secure Process", "Your photos are processed securely"),
    (Icon::Sparkles, "AI-Powered", "Advanced AI for accurate results"),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CapturePhase {
    /// Showing the capture widget.
    Idle,
    /// The last payload was refused; the widget is shown with the reason.
    Rejected(String),
    /// An image is stored and the try-on screen opens after `remaining`.
    Processing { remaining: Duration },
}

#[derive(Debug, Clone)]
pub struct CaptureScreen {
    phase: CapturePhase,
    delay: Duration,
}

impl CaptureScreen {
    pub fn new(delay: Duration) -> Self {
        Self {
            phase: CapturePhase::Idle,
            delay,
        }
    }

    /// A screen already in the processing state, e.g. when the try-on
    /// screen is requested before the delay has run out.
    pub fn resume_processing(delay: Duration, remaining: Duration) -> Self {
        Self {
            phase: CapturePhase::Processing { remaining },
            delay,
        }
    }

    pub fn phase(&self) -> &CapturePhase {
        &self.phase
    }

    pub fn update(&mut self, message: CaptureMessage) -> ScreenAction {
        match message {
            CaptureMessage::ImageCaptured(image) => {
                if let CapturePhase::Processing { .. } = self.phase {
                    debug!("already processing an image, ignoring capture");
                    return ScreenAction::None;
                }

                info!(bytes = image.len(), mime = image.mime_type(), "image captured");
                self.phase = CapturePhase::Processing { remaining: self.delay };
                ScreenAction::Batch(vec![
                    ScreenAction::StoreImage(image),
                    ScreenAction::NavigateAfter {
                        route: Route::TryOn,
                        delay: self.delay,
                    },
                ])
            }
            CaptureMessage::ImageRejected(reason) => {
                warn!(%reason, "image rejected");
                self.phase = CapturePhase::Rejected(reason);
                ScreenAction::None
            }
        }
    }

    pub fn view(&self) -> String {
        let (layout, main) = match &self.phase {
            CapturePhase::Processing { remaining } => (
                Layout::new("Processing").with_refresh(Refresh {
                    after: *remaining,
                    to: Route::TryOn.path().to_string(),
                }),
                processing_view(),
            ),
            CapturePhase::Idle => (Layout::new("Capture"), capture_widget(Route::Capture.path(), None)),
            CapturePhase::Rejected(reason) => (
                Layout::new("Capture"),
                capture_widget(Route::Capture.path(), Some(reason)),
            ),
        };

        let tips: String = TIPS.iter().map(|tip| format!("<li>{tip}</li>")).collect();
        let features: String = FEATURES
            .iter()
            .map(|(i, title, description)| {
                format!(
                    r#"<div class="card feature"><div class="badge">{}</div><h3>{title}</h3><p>{description}</p></div>"#,
                    icon(*i, "icon-lg")
                )
            })
            .collect();

        layout.render(&format!(
            r#"<div class="center">
<h1>Virtual Try-On Experience</h1>
<p class="lead">Get ready to see yourself in a whole new way. Take a photo or upload one to begin your personalized try-on experience.</p>
</div>
<section class="card">
{main}
<div class="tips">
<h3>{sun} Tips for the Perfect Shot</h3>
<ul>{tips}</ul>
</div>
</section>
<section class="features">{features}</section>"#,
            sun = icon(Icon::Sun, "icon-lg"),
        ))
    }
}

fn processing_view() -> String {
    r#"<div class="center processing" aria-live="polite">
<div class="spinner"></div>
<p class="lead">Processing your image...</p>
<p>This will only take a moment</p>
</div>"#
        .to_string()
}
