//! Coordinate and geometry types shared by the gradient pipeline.
//!
//! Spaces:
//! - device space: integer pixels, origin top-left, +X right, +Y down
//! - user space: what the caller's device transform maps from
//! - gradient space: where stop positions are measured; mapped to user space
//!   by the gradient's own transform

mod affine;
mod rect;
mod vec2;

pub use affine::Affine;
pub use rect::PixelRect;
pub use vec2::Vec2;
