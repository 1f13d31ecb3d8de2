//! The two screens of the flow.
//!
//! - [`CaptureScreen`]: collects the photo and runs the processing delay
//! - [`TryOnScreen`]: shows the photo with the category and shade pickers

mod capture;
mod try_on;

pub use capture::*;
pub use try_on::*;
