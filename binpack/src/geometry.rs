//! The handful of 2D primitives the packer works in terms of.

/// Scalar type used for every coordinate and size.
pub type Real = f64;

/// Smallest extent a `Rect` may have, and the tolerance used by
/// [`reciprocal`].
pub const EPSILON: Real = 1.0e-6;

/// `1 / value`, or `EPSILON` when `value` is too close to zero to divide by.
#[inline]
pub fn reciprocal(value: Real) -> Real {
    if value.abs() < EPSILON {
        EPSILON
    } else {
        1.0 / value
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Vec2 {
    pub x: Real,
    pub y: Real,
}

impl Vec2 {
    #[inline]
    pub const fn new(x: Real, y: Real) -> Self {
        Self { x, y }
    }

    /// Component-wise maximum.
    #[inline]
    pub fn max_of(self, other: Vec2) -> Vec2 {
        Vec2::new(self.x.max(other.x), self.y.max(other.y))
    }

    /// Component-wise minimum.
    #[inline]
    pub fn min_of(self, other: Vec2) -> Vec2 {
        Vec2::new(self.x.min(other.x), self.y.min(other.y))
    }
}

impl From<(Real, Real)> for Vec2 {
    fn from((x, y): (Real, Real)) -> Self {
        Vec2::new(x, y)
    }
}

/// An axis-aligned rectangle anchored at its top-left corner.
///
/// Width and height never drop below `EPSILON`; every constructor and mutator
/// clamps them, so a `Rect` always has a positive area.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    x: Real,
    y: Real,
    w: Real,
    h: Real,
}

impl Default for Rect {
    fn default() -> Self {
        Rect::new(0.0, 0.0, EPSILON, EPSILON)
    }
}

impl Rect {
    #[inline]
    pub fn new(x: Real, y: Real, w: Real, h: Real) -> Self {
        Self {
            x,
            y,
            w: w.max(EPSILON),
            h: h.max(EPSILON),
        }
    }

    #[inline]
    pub fn from_size(size: Vec2) -> Self {
        Rect::new(0.0, 0.0, size.x, size.y)
    }

    #[inline]
    pub fn x(&self) -> Real {
        self.x
    }

    #[inline]
    pub fn y(&self) -> Real {
        self.y
    }

    #[inline]
    pub fn width(&self) -> Real {
        self.w
    }

    #[inline]
    pub fn height(&self) -> Real {
        self.h
    }

    #[inline]
    pub fn position(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.w, self.h)
    }

    #[inline]
    pub fn left(&self) -> Real {
        self.x
    }

    #[inline]
    pub fn top(&self) -> Real {
        self.y
    }

    #[inline]
    pub fn right(&self) -> Real {
        self.x + self.w
    }

    #[inline]
    pub fn bottom(&self) -> Real {
        self.y + self.h
    }

    #[inline]
    pub fn left_top(&self) -> Vec2 {
        self.position()
    }

    #[inline]
    pub fn right_bottom(&self) -> Vec2 {
        Vec2::new(self.right(), self.bottom())
    }

    #[inline]
    pub fn area(&self) -> Real {
        self.w * self.h
    }

    pub fn set_position(&mut self, position: Vec2) {
        self.x = position.x;
        self.y = position.y;
    }

    pub fn offset(&mut self, dx: Real, dy: Real) {
        self.x += dx;
        self.y += dy;
    }

    /// Scales position and size together, as if the whole coordinate space
    /// was stretched by `(sx, sy)`.
    pub fn scale(&mut self, sx: Real, sy: Real) {
        self.x *= sx;
        self.y *= sy;
        self.w = (self.w * sx).max(EPSILON);
        self.h = (self.h * sy).max(EPSILON);
    }

    /// Whether the interiors of the two rectangles overlap. Rectangles that
    /// only share an edge do not intersect.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && other.left() < self.right()
            && self.top() < other.bottom()
            && other.top() < self.bottom()
    }

    /// Whether `other` lies completely inside `self`.
    pub fn contains(&self, other: &Rect) -> bool {
        self.left() <= other.left()
            && self.top() <= other.top()
            && self.right() >= other.right()
            && self.bottom() >= other.bottom()
    }
}

/// A running 2D bounding box.
///
/// A cleared box starts with its minimum at `+inf` and its maximum at zero,
/// so merging any point or rectangle with non-negative coordinates yields a
/// box anchored at whatever the smallest merged corner was.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Box2d {
    pub x0: Real,
    pub y0: Real,
    pub x1: Real,
    pub y1: Real,
}

impl Default for Box2d {
    fn default() -> Self {
        Self {
            x0: Real::INFINITY,
            y0: Real::INFINITY,
            x1: 0.0,
            y1: 0.0,
        }
    }
}

impl Box2d {
    #[inline]
    pub fn new(x0: Real, y0: Real, x1: Real, y1: Real) -> Self {
        Self { x0, y0, x1, y1 }
    }

    pub fn zero() -> Self {
        Box2d::new(0.0, 0.0, 0.0, 0.0)
    }

    pub fn clear(&mut self) {
        *self = Box2d::default();
    }

    /// True until something has been merged in.
    pub fn is_cleared(&self) -> bool {
        self.x0 == Real::INFINITY && self.y0 == Real::INFINITY
    }

    #[inline]
    pub fn minimum(&self) -> Vec2 {
        Vec2::new(self.x0, self.y0)
    }

    #[inline]
    pub fn maximum(&self) -> Vec2 {
        Vec2::new(self.x1, self.y1)
    }

    pub fn merge(&mut self, other: &Box2d) {
        if other.x0 < self.x0 {
            self.x0 = other.x0;
        }
        if other.y0 < self.y0 {
            self.y0 = other.y0;
        }
        if other.x1 > self.x1 {
            self.x1 = other.x1;
        }
        if other.y1 > self.y1 {
            self.y1 = other.y1;
        }
    }

    pub fn merge_point(&mut self, x: Real, y: Real) {
        self.merge(&Box2d::new(x, y, x, y));
    }

    pub fn merge_rect(&mut self, rect: &Rect) {
        let min = rect.left_top();
        let max = rect.right_bottom();

        self.merge(&Box2d::new(min.x, min.y, max.x, max.y));
    }

    /// Area spanned by the box, or zero for a cleared box.
    pub fn area(&self) -> Real {
        if self.is_cleared() {
            return 0.0;
        }

        (self.x1 - self.x0) * (self.y1 - self.y0)
    }
}
