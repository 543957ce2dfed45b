use crate::geometry::{Real, Rect, Vec2};

/// A rectangle tagged with the identity it had when it was handed to the
/// packer.
///
/// `index` is never interpreted by the packer. It's expected that consumers
/// use it to associate the packing results back to their own objects. `param`
/// is an optional sort key, only consulted when sorting by
/// [`SortKey::Param`][crate::SortKey::Param].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IndexRect {
    pub index: u32,
    pub param: Real,
    pub rect: Rect,
}

impl IndexRect {
    #[inline]
    pub fn new(index: u32, rect: Rect) -> Self {
        Self {
            index,
            param: 0.0,
            rect,
        }
    }

    #[inline]
    pub fn with_param(index: u32, param: Real, rect: Rect) -> Self {
        Self { index, param, rect }
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        self.rect.size()
    }

    #[inline]
    pub fn area(&self) -> Real {
        self.rect.area()
    }

    /// A copy of this rectangle moved to `position`, keeping identity, key
    /// and size.
    pub(crate) fn placed_at(&self, position: Vec2) -> Self {
        let mut placed = *self;
        placed.rect.set_position(position);
        placed
    }
}

/// Rectangles in the order they were pushed, sorted or placed.
pub type RectList = Vec<IndexRect>;
