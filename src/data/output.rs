use binpack::Pack;
use serde::Serialize;

/// The result of a packing run, written out as JSON.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PackOutput {
    pub dimensions: (f64, f64),
    pub bins: usize,
    pub rects: Vec<OutputRect>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OutputRect {
    pub index: u32,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl PackOutput {
    pub fn from_pack(pack: &Pack) -> Self {
        let dimensions = pack.dimensions();

        let rects = pack
            .output()
            .iter()
            .map(|placed| OutputRect {
                index: placed.index,
                x: placed.rect.x(),
                y: placed.rect.y(),
                width: placed.rect.width(),
                height: placed.rect.height(),
            })
            .collect();

        PackOutput {
            dimensions: (dimensions.x, dimensions.y),
            bins: pack.bins().len(),
            rects,
        }
    }
}
