mod layout;
mod pack;
mod sample;

pub use layout::*;
pub use pack::*;
pub use sample::*;
