use std::io::{self, BufWriter, Write};

use fs_err as fs;

use crate::data::{PackConfig, PackOutput};
use crate::options::PackOptions;

pub fn pack(options: PackOptions) -> anyhow::Result<()> {
    let config = PackConfig::read_from_file(&options.input)?;

    log::debug!(
        "Read {} rects from {}",
        config.rects.len(),
        config.file_path.display()
    );

    let output = pack_config(&config)?;

    log::info!(
        "Packed {} rects into {} bins, laid out in {}x{}",
        output.rects.len(),
        output.bins,
        output.dimensions.0,
        output.dimensions.1
    );

    match &options.output {
        Some(path) => {
            let mut file = BufWriter::new(fs::File::create(path)?);
            serde_json::to_writer_pretty(&mut file, &output)?;
            file.flush()?;
        }
        None => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            serde_json::to_writer_pretty(&mut handle, &output)?;
            writeln!(handle)?;
        }
    }

    Ok(())
}

/// Sorts and packs every rect of a config.
pub fn pack_config(config: &PackConfig) -> anyhow::Result<PackOutput> {
    let mut pack = config.build();

    match config.modulus {
        Some(modulus) => pack.mod_sort(modulus)?,
        None => pack.sort(),
    }

    pack.pack(config.output_size());

    Ok(PackOutput::from_pack(&pack))
}
