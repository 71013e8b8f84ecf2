//! Page effects. Each module attaches independently and degrades to a no-op
//! when its DOM anchors are missing.

pub mod navigation;
pub mod page;
pub mod parallax;
pub mod particles;
pub mod reveal;
pub mod theme;
