use std::cmp::Ordering;

use crate::{
    bin::Bin,
    error::PackError,
    geometry::{reciprocal, Box2d, Real, Rect, Vec2},
    options::{PackOptions, SortKey, SortOrder},
    types::{IndexRect, RectList},
};

/// Drives one packing job: collects input rectangles, orders them, drains
/// them through as many bin passes as needed, then shelves the bins into one
/// layout scaled to a requested output size.
#[derive(Debug, Clone, Default)]
pub struct Pack {
    input: RectList,
    input_bounds: Box2d,
    output: RectList,
    bounds: Box2d,
    bins: Vec<RectList>,
    options: PackOptions,
}

impl Pack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: PackOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    #[inline]
    pub fn options(&self) -> PackOptions {
        self.options
    }

    pub fn set_options(&mut self, options: PackOptions) {
        self.options = options;
    }

    /// Forgets all input, output and bins. Options are kept.
    pub fn clear(&mut self) {
        self.input.clear();
        self.input_bounds.clear();
        self.output.clear();
        self.bounds.clear();
        self.bins.clear();
    }

    /// Adds a rectangle identified by its position in the input.
    pub fn push(&mut self, rect: Rect) {
        let index = self.input.len() as u32;
        self.push_indexed(index, 0.0, rect);
    }

    /// Adds a rectangle with an explicit identity and sort key.
    pub fn push_indexed(&mut self, index: u32, param: Real, rect: Rect) {
        self.input_bounds.merge_point(rect.width(), rect.height());
        self.input.push(IndexRect::with_param(index, param, rect));
    }

    /// Orders the input by the configured sort key and direction.
    ///
    /// The sort is stable, so rectangles with equal keys keep the order they
    /// were pushed in.
    pub fn sort(&mut self) {
        let key = self.options.sort_key;
        let order = self.options.sort_order;

        self.input
            .sort_by(|a, b| compare(order, sort_param(key, a), sort_param(key, b)));
    }

    /// Like [`sort`][Pack::sort], but orders by the remainder of each key
    /// divided by `modulus`, grouping rectangles into bands.
    pub fn mod_sort(&mut self, modulus: Real) -> Result<(), PackError> {
        if !modulus.is_finite() || modulus <= 0.0 {
            return Err(PackError::InvalidModulus { modulus });
        }

        let key = self.options.sort_key;
        let order = self.options.sort_order;

        self.input.sort_by(|a, b| {
            compare(
                order,
                sort_param(key, a) % modulus,
                sort_param(key, b) % modulus,
            )
        });

        Ok(())
    }

    /// Input rectangles in their current order.
    #[inline]
    pub fn input(&self) -> &[IndexRect] {
        &self.input
    }

    /// Placed rectangles from the last call to `pack`, in output space.
    #[inline]
    pub fn output(&self) -> &[IndexRect] {
        &self.output
    }

    /// The contents of each bin pass from the last call to `pack`, in bin
    /// local coordinates.
    #[inline]
    pub fn bins(&self) -> &[RectList] {
        &self.bins
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.input.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.input.is_empty()
    }

    /// Bounds of the output. Before anything was packed this is a cleared box.
    #[inline]
    pub fn bounds(&self) -> &Box2d {
        &self.bounds
    }

    #[inline]
    pub fn dimensions(&self) -> Vec2 {
        self.bounds.maximum()
    }

    /// Packs every input rectangle and scales the result into `size`.
    ///
    /// The longer side of the packed layout is stretched to the matching side
    /// of `size`, and the shorter side to its own side of `size` times the
    /// layout's aspect ratio. With a square `size` the layout keeps its
    /// proportions, whether it came out wide or tall.
    ///
    /// Bins start out as large as the biggest input dimensions, or `size`,
    /// whichever is larger. Calling this again with the same input and size
    /// produces the same output.
    pub fn pack(&mut self, size: Vec2) {
        let bin_size = self.input_bounds.maximum().max_of(size);
        let mut bin = Bin::new(bin_size, self.options.bin_options());

        log::trace!(
            "Packing {} items into bins starting at {}x{}",
            self.input.len(),
            bin_size.x,
            bin_size.y
        );

        for rect in &self.input {
            bin.insert(*rect);
        }

        self.output.clear();
        self.bins.clear();

        // Every pass after the first places at least the rectangle it was
        // seeded with, so this runs at most once per input rectangle.
        loop {
            self.bins.push(bin.sorted().to_vec());
            bin.resort();

            if !bin.has_more() {
                break;
            }

            debug_assert!(self.bins.len() < self.input.len());
        }

        self.shelve();
        self.normalize(size);

        log::trace!(
            "Finished packing {} items into {} bins",
            self.output.len(),
            self.bins.len()
        );
    }

    /// Lays the bins out left to right in rows of roughly `sqrt(bins)`, each
    /// row as tall as its tallest bin.
    fn shelve(&mut self) {
        let columns = ((self.bins.len() as Real).sqrt() as usize).max(1);

        let mut step = Vec2::default();
        let mut row_height: Real = 0.0;
        let mut in_row = 0;

        self.bounds.clear();

        for bin in &self.bins {
            let mut bin_bounds = Box2d::default();

            for placed in bin {
                bin_bounds.merge_rect(&placed.rect);

                let mut shelved = *placed;
                shelved.rect.offset(step.x, step.y);

                self.bounds.merge_rect(&shelved.rect);
                self.output.push(shelved);
            }

            step.x += bin_bounds.x1;
            row_height = row_height.max(bin_bounds.y1);
            in_row += 1;

            if in_row == columns {
                in_row = 0;
                step.x = 0.0;
                step.y += row_height;
                row_height = 0.0;
            }
        }
    }

    fn normalize(&mut self, size: Vec2) {
        if self.output.is_empty() {
            self.bounds = Box2d::zero();
            return;
        }

        // Never empty here, so the larger extent is at least EPSILON.
        let extent = self.bounds.maximum();
        let aspect = extent.x.min(extent.y) / extent.x.max(extent.y);

        let unit = Vec2::new(reciprocal(extent.x), reciprocal(extent.y));
        let scale = if extent.x >= extent.y {
            Vec2::new(size.x, size.y * aspect)
        } else {
            Vec2::new(size.x * aspect, size.y)
        };

        for placed in &mut self.output {
            placed.rect.scale(unit.x, unit.y);
            placed.rect.scale(scale.x, scale.y);
        }

        self.bounds = Box2d::new(0.0, 0.0, scale.x, scale.y);
    }
}

fn sort_param(key: SortKey, rect: &IndexRect) -> Real {
    match key {
        SortKey::Area => rect.rect.area(),
        SortKey::Width => rect.rect.width(),
        SortKey::Height => rect.rect.height(),
        SortKey::Param => rect.param,
    }
}

fn compare(order: SortOrder, a: Real, b: Real) -> Ordering {
    match order {
        SortOrder::Ascending => a.total_cmp(&b),
        SortOrder::Descending => b.total_cmp(&a),
    }
}

#[cfg(test)]
mod test {
    use super::*;

    use float_cmp::approx_eq;

    fn sized(w: Real, h: Real) -> Rect {
        Rect::new(0.0, 0.0, w, h)
    }

    fn indices(rects: &[IndexRect]) -> Vec<u32> {
        rects.iter().map(|rect| rect.index).collect()
    }

    fn sample_pack(options: PackOptions) -> Pack {
        let mut pack = Pack::with_options(options);
        pack.push(sized(2.0, 3.0));
        pack.push(sized(5.0, 1.0));
        pack.push(sized(1.0, 1.0));
        pack.push(sized(4.0, 4.0));
        pack
    }

    #[test]
    fn push_assigns_sequential_indices() {
        let mut pack = sample_pack(PackOptions::default());
        pack.push_indexed(40, 2.5, sized(1.0, 9.0));

        assert_eq!(indices(pack.input()), vec![0, 1, 2, 3, 40]);
        assert_eq!(pack.input()[4].param, 2.5);
        assert_eq!(pack.len(), 5);
    }

    #[test]
    fn sort_by_each_key() {
        let mut pack = sample_pack(PackOptions::default());
        pack.sort();
        assert_eq!(indices(pack.input()), vec![3, 0, 1, 2]);

        let mut pack = sample_pack(
            PackOptions::new()
                .sort_key(SortKey::Width)
                .sort_order(SortOrder::Ascending),
        );
        pack.sort();
        assert_eq!(indices(pack.input()), vec![2, 0, 3, 1]);

        let mut pack = sample_pack(PackOptions::new().sort_key(SortKey::Height));
        pack.sort();
        assert_eq!(indices(pack.input()), vec![3, 0, 1, 2]);
    }

    #[test]
    fn sort_by_param() {
        let mut pack = Pack::with_options(
            PackOptions::new()
                .sort_key(SortKey::Param)
                .sort_order(SortOrder::Ascending),
        );
        pack.push_indexed(0, 3.0, sized(1.0, 1.0));
        pack.push_indexed(1, -1.0, sized(9.0, 9.0));
        pack.push_indexed(2, 2.0, sized(5.0, 5.0));

        pack.sort();
        assert_eq!(indices(pack.input()), vec![1, 2, 0]);
    }

    #[test]
    fn mod_sort_groups_into_bands() {
        let mut pack = sample_pack(PackOptions::default());

        // Areas 6, 5, 1, 16 become 1, 0, 1, 1.
        pack.mod_sort(5.0).unwrap();
        assert_eq!(indices(pack.input()), vec![0, 2, 3, 1]);
    }

    #[test]
    fn mod_sort_rejects_bad_modulus() {
        let mut pack = sample_pack(PackOptions::default());

        assert_eq!(
            pack.mod_sort(0.0),
            Err(PackError::InvalidModulus { modulus: 0.0 })
        );
        assert!(pack.mod_sort(Real::NAN).is_err());
        assert!(pack.mod_sort(-2.0).is_err());
        assert_eq!(indices(pack.input()), vec![0, 1, 2, 3]);
    }

    #[test]
    fn small_items_share_one_bin() {
        let mut pack = Pack::new();
        pack.push(sized(10.0, 10.0));
        pack.push(sized(5.0, 5.0));
        pack.push(sized(5.0, 5.0));
        pack.sort();
        pack.pack(Vec2::new(20.0, 20.0));

        assert_eq!(pack.bins().len(), 1);
        assert_eq!(pack.output().len(), 3);

        let positions: Vec<_> = pack.bins()[0]
            .iter()
            .map(|rect| rect.rect.position())
            .collect();
        assert_eq!(
            positions,
            vec![
                Vec2::new(0.0, 0.0),
                Vec2::new(10.0, 0.0),
                Vec2::new(15.0, 0.0),
            ]
        );

        // The 20x10 layout keeps its aspect ratio inside the 20x20 target.
        assert_eq!(pack.dimensions(), Vec2::new(20.0, 10.0));
        for (placed, normalized) in pack.bins()[0].iter().zip(pack.output()) {
            assert!(approx_eq!(Real, placed.rect.x(), normalized.rect.x(), epsilon = 1e-9));
            assert!(approx_eq!(Real, placed.rect.width(), normalized.rect.width(), epsilon = 1e-9));
        }
    }

    #[test]
    fn tall_layouts_stay_tall() {
        let mut pack = Pack::new();
        pack.push(sized(1.0, 300.0));
        pack.pack(Vec2::new(512.0, 512.0));

        let dimensions = pack.dimensions();
        assert!(approx_eq!(Real, dimensions.x, 512.0 / 300.0, epsilon = 1e-9));
        assert_eq!(dimensions.y, 512.0);

        let placed = pack.output()[0].rect;
        assert!(approx_eq!(Real, placed.width(), 512.0 / 300.0, epsilon = 1e-9));
        assert!(approx_eq!(Real, placed.height(), 512.0, epsilon = 1e-9));
        assert!(placed.height() > placed.width());
    }

    #[test]
    fn wide_and_tall_layouts_mirror_each_other() {
        let mut wide = Pack::new();
        wide.push(sized(40.0, 10.0));
        wide.pack(Vec2::new(64.0, 64.0));

        let mut tall = Pack::new();
        tall.push(sized(10.0, 40.0));
        tall.pack(Vec2::new(64.0, 64.0));

        assert_eq!(wide.dimensions(), Vec2::new(64.0, 16.0));
        assert_eq!(tall.dimensions(), Vec2::new(16.0, 64.0));
    }

    #[test]
    fn overflowing_bins_are_shelved_in_rows() {
        let mut pack = Pack::new();
        for _ in 0..4 {
            pack.push(sized(8.0, 8.0));
        }
        pack.pack(Vec2::new(4.0, 4.0));

        // Each 8x8 item fills a bin, so every pass places exactly one.
        assert_eq!(pack.bins().len(), 4);

        let output: Vec<_> = pack
            .output()
            .iter()
            .map(|rect| (rect.index, rect.rect))
            .collect();
        assert_eq!(
            output,
            vec![
                (0, Rect::new(0.0, 0.0, 2.0, 2.0)),
                (1, Rect::new(2.0, 0.0, 2.0, 2.0)),
                (2, Rect::new(0.0, 2.0, 2.0, 2.0)),
                (3, Rect::new(2.0, 2.0, 2.0, 2.0)),
            ]
        );
        assert_eq!(pack.dimensions(), Vec2::new(4.0, 4.0));
    }

    #[test]
    fn empty_input_packs_to_nothing() {
        let mut pack = Pack::new();
        pack.pack(Vec2::new(16.0, 16.0));

        assert!(pack.output().is_empty());
        assert_eq!(pack.bins().len(), 1);
        assert_eq!(pack.bounds().area(), 0.0);
        assert_eq!(pack.dimensions(), Vec2::new(0.0, 0.0));
    }

    #[test]
    fn clear_resets_everything_but_options() {
        let options = PackOptions::new().sort_order(SortOrder::Ascending);
        let mut pack = sample_pack(options);
        pack.pack(Vec2::new(8.0, 8.0));
        pack.clear();

        assert!(pack.is_empty());
        assert!(pack.output().is_empty());
        assert!(pack.bins().is_empty());
        assert!(pack.bounds().is_cleared());
        assert_eq!(pack.options(), options);
    }

    #[test]
    fn repacking_is_stable() {
        let mut pack = sample_pack(PackOptions::default());
        pack.sort();
        pack.pack(Vec2::new(3.0, 3.0));
        let first = pack.output().to_vec();

        pack.pack(Vec2::new(3.0, 3.0));
        assert_eq!(pack.output(), first.as_slice());
    }
}
