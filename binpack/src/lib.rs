//! Binpack packs rectangles into bins with a guillotine best-fit heuristic,
//! then shelves the bins into a single layout scaled to a requested size.
//! It was built for atlaspack, a tool that turns pack descriptions into
//! normalized atlas layouts.
//!
//! Free space in a [`Bin`][Bin] is tracked as a list of disjoint rectangles.
//! Each placement carves the item out of the top-left corner of the chosen
//! free rectangle and splits what is left with one straight cut. Fragments
//! are never merged back together. [`Pack`][Pack] drives a bin through as
//! many passes as it takes to place everything, growing it slightly each
//! time.
//!
//! ## Example
//! ```
//! use binpack::{FitPolicy, Pack, PackOptions, Rect, Vec2};
//!
//! let mut pack = Pack::with_options(PackOptions::new().fit(FitPolicy::MinArea));
//!
//! pack.push(Rect::new(0.0, 0.0, 128.0, 64.0));
//! pack.push(Rect::new(0.0, 0.0, 64.0, 64.0));
//! pack.push(Rect::new(0.0, 0.0, 1.0, 300.0));
//!
//! // Larger items first tends to pack tighter.
//! pack.sort();
//! pack.pack(Vec2::new(512.0, 512.0));
//!
//! assert_eq!(pack.output().len(), 3);
//! assert!(pack.dimensions().x <= 512.0);
//! ```

mod bin;
mod error;
mod geometry;
mod options;
mod pack;
mod random;
mod step;
mod types;

pub use bin::*;
pub use error::*;
pub use geometry::*;
pub use options::*;
pub use pack::*;
pub use random::*;
pub use step::*;
pub use types::*;
