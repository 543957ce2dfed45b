use std::io::{self, Write};

use binpack::{random_rect, random_square, FitPolicy, SortKey, SortOrder, SplitPolicy};
use rand::{rngs::SmallRng, Rng, SeedableRng};

use crate::data::{PackConfig, RectConfig};
use crate::options::SampleOptions;

pub fn sample(options: SampleOptions) -> anyhow::Result<()> {
    let mut rng = match options.seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_entropy(),
    };

    let config = sample_config(&options, &mut rng);
    let contents = toml::to_string_pretty(&config)?;

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    handle.write_all(contents.as_bytes())?;

    Ok(())
}

/// Builds a pack description filled with random rects.
pub fn sample_config<R: Rng>(options: &SampleOptions, rng: &mut R) -> PackConfig {
    log::debug!(
        "Generating {} {} between {} and {}",
        options.count,
        if options.square { "squares" } else { "rects" },
        options.min,
        options.max
    );

    let rects = (0..options.count)
        .map(|_| {
            let rect = if options.square {
                random_square(rng, options.min, options.max)
            } else {
                random_rect(rng, options.min, options.max)
            };

            RectConfig {
                width: rect.width(),
                height: rect.height(),
                param: None,
                index: None,
            }
        })
        .collect();

    PackConfig {
        output_size: (options.size, options.size),
        sort_key: SortKey::default(),
        sort_order: SortOrder::default(),
        fit: FitPolicy::default(),
        split: SplitPolicy::default(),
        modulus: None,
        rects,
        file_path: Default::default(),
    }
}
