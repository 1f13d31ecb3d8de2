//! Presentational building blocks shared by the screens.

pub mod button;
pub mod capture_widget;
pub mod color_picker;
pub mod layout;
