//! HUD building blocks
//!
//! Screen-space rectangles and the shared color palette.

mod rect;
pub mod theme;

pub use rect::*;
