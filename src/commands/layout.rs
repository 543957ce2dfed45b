use std::io::{self, Write};

use binpack::{SpiralStep, TreeStep, Vec2};

use crate::options::{LayoutKind, LayoutOptions};

pub fn layout(options: LayoutOptions) -> anyhow::Result<()> {
    let offsets: Vec<(f64, f64)> = layout_offsets(&options)
        .into_iter()
        .map(|offset| (offset.x, offset.y))
        .collect();

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    serde_json::to_writer_pretty(&mut handle, &offsets)?;
    writeln!(handle)?;

    Ok(())
}

pub fn layout_offsets(options: &LayoutOptions) -> Vec<Vec2> {
    log::debug!(
        "Generating {} {:?} offsets at scale {}",
        options.count,
        options.kind,
        options.scale
    );

    match options.kind {
        LayoutKind::Spiral => SpiralStep::new(options.scale)
            .take(options.count)
            .collect(),
        LayoutKind::Tree => TreeStep::new(options.scale, options.row)
            .take(options.count)
            .collect(),
    }
}
