use binpack::{
    random_rect, random_square, FitPolicy, IndexRect, Pack, PackOptions, Rect, SortKey,
    SortOrder, SplitPolicy, Vec2,
};
use rand::{rngs::SmallRng, SeedableRng};
use test_case::test_case;

const TOLERANCE: f64 = 1e-9;

fn random_inputs(seed: u64, count: usize) -> Vec<Rect> {
    let mut rng = SmallRng::seed_from_u64(seed);

    (0..count)
        .map(|i| {
            if i % 3 == 0 {
                random_square(&mut rng, 1, 48)
            } else {
                random_rect(&mut rng, 1, 32)
            }
        })
        .collect()
}

fn packed(options: PackOptions, inputs: &[Rect], size: Vec2) -> Pack {
    let mut pack = Pack::with_options(options);
    for rect in inputs {
        pack.push(*rect);
    }
    pack.sort();
    pack.pack(size);
    pack
}

fn sorted_indices<'a, I: IntoIterator<Item = &'a IndexRect>>(rects: I) -> Vec<u32> {
    let mut indices: Vec<_> = rects.into_iter().map(|rect| rect.index).collect();
    indices.sort();
    indices
}

#[test_case(FitPolicy::MinArea, SplitPolicy::MaxAreaMax; "default")]
#[test_case(FitPolicy::MaxArea, SplitPolicy::MinAreaMin; "loose fit")]
#[test_case(FitPolicy::First, SplitPolicy::MinAreaMax; "first fit")]
#[test_case(FitPolicy::Last, SplitPolicy::MaxAreaMin; "last fit")]
fn packing_invariants(fit: FitPolicy, split: SplitPolicy) {
    let _ = env_logger::try_init();

    let options = PackOptions::new().fit(fit).split(split);
    let size = Vec2::new(40.0, 40.0);

    for seed in 0..8 {
        let inputs = random_inputs(seed, 60);
        let pack = packed(options, &inputs, size);

        // Nothing lost, nothing duplicated.
        let expected: Vec<u32> = (0..inputs.len() as u32).collect();
        assert_eq!(sorted_indices(pack.output()), expected);
        assert_eq!(sorted_indices(pack.bins().iter().flatten()), expected);

        let largest = inputs
            .iter()
            .fold(Vec2::default(), |largest, rect| largest.max_of(rect.size()));
        let base = largest.max_of(size);

        for (pass, bin) in pack.bins().iter().enumerate() {
            let grown = pass as f64;
            let extent = Rect::new(0.0, 0.0, base.x + grown, base.y + grown);

            for (i, a) in bin.iter().enumerate() {
                assert!(
                    extent.contains(&a.rect),
                    "{:?} escapes bin {} ({:?})",
                    a,
                    pass,
                    extent
                );

                for b in &bin[i + 1..] {
                    assert!(!a.rect.intersects(&b.rect), "{:?} overlaps {:?}", a, b);
                }
            }
        }

        // The longer side of the layout fills the target, the other fits in it.
        let dimensions = pack.dimensions();
        assert!(dimensions.x == size.x || dimensions.y == size.y);
        assert!(dimensions.x <= size.x && dimensions.y <= size.y);

        for placed in pack.output() {
            assert!(placed.rect.x() >= -TOLERANCE && placed.rect.y() >= -TOLERANCE);
            assert!(placed.rect.right() <= dimensions.x + TOLERANCE);
            assert!(placed.rect.bottom() <= dimensions.y + TOLERANCE);
        }
    }
}

#[test]
fn packing_keeps_sizes_proportional() {
    let inputs = random_inputs(11, 25);
    let pack = packed(PackOptions::default(), &inputs, Vec2::new(64.0, 64.0));

    let widths: Vec<_> = pack
        .bins()
        .iter()
        .flatten()
        .map(|rect| (rect.index, rect.rect.width()))
        .collect();

    // Every item is scaled by the same factor on the way out.
    let first = pack.output()[0];
    let factor = first.rect.width() / widths[0].1;

    for ((index, width), placed) in widths.iter().zip(pack.output()) {
        assert_eq!(*index, placed.index);
        assert!((placed.rect.width() - width * factor).abs() < 1e-6);
    }
}

#[test]
fn repacking_identical_input_is_bit_identical() {
    let inputs = random_inputs(3, 40);
    let options = PackOptions::new()
        .sort_key(SortKey::Height)
        .sort_order(SortOrder::Ascending);
    let size = Vec2::new(30.0, 30.0);

    let mut pack = packed(options, &inputs, size);
    let first = pack.output().to_vec();
    let first_dimensions = pack.dimensions();

    pack.clear();
    for rect in &inputs {
        pack.push(*rect);
    }
    pack.sort();
    pack.pack(size);

    assert_eq!(pack.output(), first.as_slice());
    assert_eq!(pack.dimensions(), first_dimensions);
}

#[test]
fn zero_size_items_stay_inside_their_bins() {
    let mut pack = Pack::new();
    for i in 0..24 {
        let side = (i % 5) as f64;
        pack.push(Rect::new(0.0, 0.0, side, 4.0 - side));
    }
    pack.sort();
    pack.pack(Vec2::new(6.0, 6.0));

    assert_eq!(pack.output().len(), 24);

    for (pass, bin) in pack.bins().iter().enumerate() {
        let grown = 6.0 + pass as f64 + TOLERANCE;
        let extent = Rect::new(0.0, 0.0, grown, grown);

        for placed in bin {
            assert!(extent.contains(&placed.rect), "{:?} escapes bin {}", placed, pass);
        }
    }
}

#[test]
fn oversized_item_still_gets_placed() {
    let mut pack = Pack::new();
    pack.push(Rect::new(0.0, 0.0, 100.0, 100.0));
    pack.pack(Vec2::new(10.0, 10.0));

    assert_eq!(pack.bins().len(), 1);
    assert_eq!(pack.output().len(), 1);
    assert_eq!(pack.output()[0].rect, Rect::new(0.0, 0.0, 10.0, 10.0));
}

#[test]
fn mod_sort_then_pack() {
    let inputs = random_inputs(21, 30);
    let mut pack = Pack::new();
    for rect in &inputs {
        pack.push(*rect);
    }

    pack.mod_sort(64.0).unwrap();

    let keys: Vec<_> = pack
        .input()
        .iter()
        .map(|rect| rect.area() % 64.0)
        .collect();
    assert!(keys.windows(2).all(|pair| pair[0] >= pair[1]));

    pack.pack(Vec2::new(50.0, 50.0));
    assert_eq!(pack.output().len(), inputs.len());
}
