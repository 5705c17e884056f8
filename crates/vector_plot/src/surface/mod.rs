//! Drawing surfaces
//!
//! A surface owns the axis ranges and the ordered list of drawn primitives.
//! Plot operations mutate a surface; a render pass (see [`crate::render`])
//! flattens it into screen space. `Axes3` additionally owns the camera that
//! supplies the projection transform at render time.

mod axes2;
mod axes3;
mod axis;

pub use axes2::{ArrowHead, Axes2, Shape2};
pub use axes3::{Axes3, Shape3};
pub use axis::AxisRange;

/// Handle to a shape stored on a drawing surface.
///
/// Indexes into the surface's insertion-ordered shape list; shapes are never
/// removed, so handles stay valid for the surface's lifetime.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ShapeId(pub u32);

impl ShapeId {
    /// Create a handle from a raw index
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    /// Raw index value
    pub fn as_u32(self) -> u32 {
        self.0
    }
}
