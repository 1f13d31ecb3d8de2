//! Virtual makeup try-on demo.
//!
//! A two-screen web flow: the capture screen collects a photo into the
//! browser session, the try-on screen shows that photo next to the
//! cosmetic catalog and lets the user pick a category and a shade.
//!
//! - [`catalog`]: the fixed cosmetic categories and their palettes
//! - [`image`]: validation of captured image payloads
//! - [`session`]: the per-browser-session key/value slot store
//! - [`ui`]: screen state machines and HTML views
//! - [`server`]: the axum router that glues the screens to HTTP

pub mod catalog;
pub mod config;
pub mod error;
pub mod image;
pub mod server;
pub mod session;
pub mod ui;

pub use error::{Result, TryOnError};
