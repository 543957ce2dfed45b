use crate::{
    geometry::{Box2d, Real, Rect, Vec2, EPSILON},
    options::{BinOptions, FitPolicy, SplitPolicy},
    types::{IndexRect, RectList},
};

/// Where a [`Bin`] is in its fill/resort cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinState {
    /// Nothing has been inserted yet.
    Empty,

    /// Exactly one rectangle has been placed in the current pass, carving the
    /// whole bin into its first free fragments.
    Seeded,

    /// Further rectangles are being placed or rejected.
    Filling,

    /// A resort found nothing left to place.
    Exhausted,
}

/// The two free fragments left over after carving a rectangle out of the
/// top-left corner of a free rectangle.
///
/// Sizes go through `Rect` clamping, so a fragment with nothing left in one
/// dimension comes out `EPSILON` wide. `Bin` never keeps those.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FreeRects {
    pub d0: Rect,
    pub d1: Rect,
}

impl FreeRects {
    pub fn minimum(&self) -> Real {
        self.d0.area().min(self.d1.area())
    }

    pub fn maximum(&self) -> Real {
        self.d0.area().max(self.d1.area())
    }
}

/// Splits `free` after a rectangle of `size` has been placed in its top-left
/// corner.
///
/// Two guillotine cuts are possible: a vertical one, where the fragment on
/// the right spans the full height of `free`, and a horizontal one, where the
/// fragment below spans its full width. `policy` decides which pair is kept.
pub fn split(free: &Rect, size: Vec2, policy: SplitPolicy) -> FreeRects {
    let vertical = FreeRects {
        d0: Rect::new(
            free.x() + size.x,
            free.y(),
            free.width() - size.x,
            free.height(),
        ),
        d1: Rect::new(free.x(), free.y() + size.y, size.x, free.height() - size.y),
    };

    let horizontal = FreeRects {
        d0: Rect::new(free.x() + size.x, free.y(), free.width() - size.x, size.y),
        d1: Rect::new(
            free.x(),
            free.y() + size.y,
            free.width(),
            free.height() - size.y,
        ),
    };

    let choose_vertical = match policy {
        SplitPolicy::MinAreaMin => vertical.minimum() < horizontal.minimum(),
        SplitPolicy::MinAreaMax => vertical.minimum() > horizontal.minimum(),
        SplitPolicy::MaxAreaMin => vertical.maximum() < horizontal.maximum(),
        SplitPolicy::MaxAreaMax => vertical.maximum() > horizontal.maximum(),
    };

    if choose_vertical {
        vertical
    } else {
        horizontal
    }
}

/// Area a free rectangle would have left over in its unused corner after
/// `rect` was placed in it.
pub(crate) fn leftover_area(free: &Rect, rect: &Rect) -> Real {
    (free.width() - rect.width()) * (free.height() - rect.height())
}

#[inline]
fn fits_into(rect: &Rect, free: &Rect) -> bool {
    rect.width() <= free.width() && rect.height() <= free.height()
}

/// A single fixed-size bin that tracks its free space as a list of disjoint
/// rectangles.
///
/// Free fragments are never merged back together once split.
#[derive(Debug, Clone)]
pub struct Bin {
    size: Vec2,
    sorted: RectList,
    disjoint: Vec<Rect>,
    rejected: RectList,
    bounds: Box2d,
    options: BinOptions,
    passes: u32,
}

impl Bin {
    pub fn new(size: Vec2, options: BinOptions) -> Self {
        Self {
            size,
            sorted: Vec::new(),
            disjoint: Vec::new(),
            rejected: Vec::new(),
            bounds: Box2d::default(),
            options,
            passes: 0,
        }
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        self.size
    }

    #[inline]
    pub fn options(&self) -> BinOptions {
        self.options
    }

    /// Rectangles placed during the current pass, in placement order.
    #[inline]
    pub fn sorted(&self) -> &[IndexRect] {
        &self.sorted
    }

    /// Free space still available in the current pass.
    #[inline]
    pub fn disjoint(&self) -> &[Rect] {
        &self.disjoint
    }

    /// Rectangles that did not fit during the current pass.
    #[inline]
    pub fn rejected(&self) -> &[IndexRect] {
        &self.rejected
    }

    /// Bounding box of everything placed during the current pass.
    #[inline]
    pub fn bounds(&self) -> &Box2d {
        &self.bounds
    }

    /// How many times `resort` has been called.
    #[inline]
    pub fn passes(&self) -> u32 {
        self.passes
    }

    pub fn state(&self) -> BinState {
        match (self.sorted.len(), self.rejected.is_empty()) {
            (0, true) if self.passes == 0 => BinState::Empty,
            (0, true) => BinState::Exhausted,
            (1, true) => BinState::Seeded,
            _ => BinState::Filling,
        }
    }

    /// Whether the current pass placed or rejected anything.
    ///
    /// `resort` throws away the placed rectangles, so they have to be read
    /// out with `sorted` before it's called.
    pub fn has_more(&self) -> bool {
        !self.sorted.is_empty() || !self.rejected.is_empty()
    }

    /// Places `rect` in this bin, or records it as rejected if no free
    /// rectangle is large enough.
    ///
    /// The first rectangle of a pass is always accepted at the origin, even if
    /// it's larger than the bin itself.
    pub fn insert(&mut self, rect: IndexRect) {
        if self.sorted.is_empty() {
            log::trace!(
                "Seeding {}x{} bin with item {} ({}x{})",
                self.size.x,
                self.size.y,
                rect.index,
                rect.rect.width(),
                rect.rect.height()
            );

            let whole = Rect::from_size(self.size);

            self.push(rect.placed_at(Vec2::default()));
            self.carve(&whole, rect.size());
            return;
        }

        match self.find_free(&rect.rect) {
            Some(found) => {
                let free = self.disjoint.remove(found);

                log::trace!(
                    "Item {} ({}x{}) fit at ({}, {})",
                    rect.index,
                    rect.rect.width(),
                    rect.rect.height(),
                    free.x(),
                    free.y()
                );

                self.push(rect.placed_at(free.left_top()));
                self.carve(&free, rect.size());
            }
            None => {
                log::trace!("Item {} did not fit in this bin.", rect.index);

                self.rejected.push(rect);
            }
        }
    }

    /// Starts a new pass over the rectangles rejected by the previous one.
    ///
    /// The bin grows by one unit in each dimension, and everything placed in
    /// the previous pass is forgotten.
    pub fn resort(&mut self) {
        let pending = std::mem::take(&mut self.rejected);

        self.size.x += 1.0;
        self.size.y += 1.0;
        self.sorted.clear();
        self.disjoint.clear();
        self.bounds.clear();
        self.passes += 1;

        log::trace!(
            "Resorting {} rejected items into a {}x{} bin",
            pending.len(),
            self.size.x,
            self.size.y
        );

        for rect in pending {
            self.insert(rect);
        }
    }

    fn find_free(&self, rect: &Rect) -> Option<usize> {
        let fits = |free: &Rect| fits_into(rect, free);

        match self.options.fit {
            FitPolicy::First => self.disjoint.iter().position(fits),
            FitPolicy::Last => self.disjoint.iter().rposition(fits),
            FitPolicy::MinArea | FitPolicy::MaxArea => {
                let loosest = self.options.fit == FitPolicy::MaxArea;
                let mut best = if loosest { 0.0 } else { Real::INFINITY };
                let mut found = None;

                for (index, free) in self.disjoint.iter().enumerate() {
                    if !fits(free) {
                        continue;
                    }

                    let area_left = leftover_area(free, rect);
                    let better = if loosest {
                        area_left > best
                    } else {
                        area_left < best
                    };

                    if better {
                        best = area_left;
                        found = Some(index);
                    }
                }

                found
            }
        }
    }

    /// Splits `free` around a rectangle of `size` placed in its corner and
    /// keeps the fragments that still have room in them.
    ///
    /// A fragment with no width or height left would be clamped into a sliver
    /// lying past the edge of `free`, so it is dropped instead. Only the part
    /// of an oversized seed that overlaps `free` is carved out.
    fn carve(&mut self, free: &Rect, size: Vec2) {
        let size = size.min_of(free.size());
        let fragments = split(free, size, self.options.split);

        if free.width() - size.x > EPSILON {
            self.disjoint.push(fragments.d0);
        }

        if free.height() - size.y > EPSILON {
            self.disjoint.push(fragments.d1);
        }
    }

    fn push(&mut self, rect: IndexRect) {
        self.bounds.merge_rect(&rect.rect);
        self.sorted.push(rect);
    }
}
