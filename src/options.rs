use std::{path::PathBuf, str::FromStr};

use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(about = "Packs rectangles into normalized atlas layouts")]
pub struct Options {
    #[structopt(subcommand)]
    pub command: Subcommand,
}

#[derive(Debug, StructOpt)]
pub enum Subcommand {
    /// Pack the rectangles described by a TOML file. Prints the resulting
    /// layout as JSON.
    Pack(PackOptions),

    /// Generate a pack description filled with random rectangles. Prints it as
    /// TOML to stdout.
    Sample(SampleOptions),

    /// Print the offsets produced by one of the layout step generators as
    /// JSON.
    Layout(LayoutOptions),
}

#[derive(Debug, StructOpt)]
pub struct PackOptions {
    /// The path to the pack description to read.
    pub input: PathBuf,

    /// Where to write the resulting layout. Defaults to stdout.
    #[structopt(long)]
    pub output: Option<PathBuf>,
}

#[derive(Debug, StructOpt)]
pub struct SampleOptions {
    /// How many rectangles to generate.
    #[structopt(long, default_value = "32")]
    pub count: usize,

    /// The smallest width or height to generate.
    #[structopt(long, default_value = "1")]
    pub min: i32,

    /// The largest width or height to generate.
    #[structopt(long, default_value = "64")]
    pub max: i32,

    /// Seed for the random number generator. A fresh seed is used if not
    /// specified.
    #[structopt(long)]
    pub seed: Option<u64>,

    /// Only generate squares.
    #[structopt(long)]
    pub square: bool,

    /// Width and height of the output size written to the description.
    #[structopt(long, default_value = "512")]
    pub size: f64,
}

#[derive(Debug, StructOpt)]
pub struct LayoutOptions {
    /// Which generator to run.
    ///
    /// Options:
    ///
    /// - spiral: Walk outward along a square spiral
    ///
    /// - tree: A root with one centered row of children below it
    pub kind: LayoutKind,

    /// How many offsets to print.
    #[structopt(long, default_value = "9")]
    pub count: usize,

    /// Distance between neighboring offsets.
    #[structopt(long, default_value = "1")]
    pub scale: f64,

    /// Number of children in the row below the root, for the tree layout.
    #[structopt(long, default_value = "4")]
    pub row: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutKind {
    Spiral,
    Tree,
}

impl FromStr for LayoutKind {
    type Err = String;

    fn from_str(value: &str) -> Result<LayoutKind, Self::Err> {
        match value {
            "spiral" => Ok(LayoutKind::Spiral),
            "tree" => Ok(LayoutKind::Tree),

            _ => Err(String::from(
                "Invalid layout kind. Valid options are 'spiral' and 'tree'.",
            )),
        }
    }
}
