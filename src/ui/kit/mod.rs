//! Small rendering helpers shared by components.

pub mod html;
pub mod icons;
