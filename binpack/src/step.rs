//! Incremental position generators for spreading already-packed items out in
//! space.
//!
//! Neither generator knows anything about bins. Each call to `step` returns
//! the next offset, and both can be used as infinite iterators.

use crate::geometry::{Real, Vec2};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpiralState {
    Start,
    Next,
    East,
    South,
    West,
    North,
}

/// Walks outward along a square spiral, one grid cell of `scale` per step.
///
/// The first step is the origin. Every ring after that starts in its top-left
/// corner and runs clockwise; each completed ring widens the runs along every
/// side by two cells.
#[derive(Debug, Clone)]
pub struct SpiralStep {
    scale: Real,
    state: SpiralState,
    offset: Vec2,

    // Straight run lengths of the east/west and north/south sides.
    across: i32,
    down: i32,
    i: i32,
    rings: u32,
}

impl SpiralStep {
    pub fn new(scale: Real) -> Self {
        Self {
            scale,
            state: SpiralState::Start,
            offset: Vec2::default(),
            across: 1,
            down: -1,
            i: 0,
            rings: 0,
        }
    }

    #[inline]
    pub fn offset(&self) -> Vec2 {
        self.offset
    }

    #[inline]
    pub fn state(&self) -> SpiralState {
        self.state
    }

    /// Number of rings walked all the way around.
    #[inline]
    pub fn rings(&self) -> u32 {
        self.rings
    }

    /// Steps taken along the top and bottom side of the current ring.
    #[inline]
    pub fn run_length(&self) -> i32 {
        self.across
    }

    pub fn step(&mut self) -> Vec2 {
        let scale = self.scale;
        self.i += 1;

        match self.state {
            SpiralState::Start => {
                self.i = 0;
                self.offset = Vec2::default();
                self.state = SpiralState::Next;
            }
            SpiralState::Next => {
                self.i = 0;
                self.offset.x -= scale;
                self.offset.y += scale;
                self.down += 2;
                self.across += 2;
                self.state = SpiralState::East;
            }
            SpiralState::East => {
                if self.i < self.across {
                    self.offset.x += scale;
                } else {
                    self.offset.y -= scale;
                    self.i = 0;
                    self.state = SpiralState::South;
                }
            }
            SpiralState::South => {
                self.offset.y -= scale;

                if self.i >= self.down {
                    self.i = 0;
                    self.state = SpiralState::West;
                }
            }
            SpiralState::West => {
                if self.i < self.across {
                    self.offset.x -= scale;
                } else {
                    self.offset.y += scale;
                    self.i = 0;
                    self.state = SpiralState::North;
                }
            }
            SpiralState::North => {
                if self.i < self.down {
                    self.offset.y += scale;
                } else {
                    // Hop to the top-left corner of the next ring.
                    self.offset.y += 2.0 * scale;
                    self.offset.x -= scale;
                    self.across += 2;
                    self.down += 2;
                    self.i = 0;
                    self.rings += 1;
                    self.state = SpiralState::East;
                }
            }
        }

        self.offset
    }
}

impl Iterator for SpiralStep {
    type Item = Vec2;

    fn next(&mut self) -> Option<Vec2> {
        Some(self.step())
    }
}

/// Lays items out as a root followed by a single row of `n` children
/// centered below it.
///
/// Only one row break is ever made: steps past the first row keep moving
/// right along the same row.
#[derive(Debug, Clone)]
pub struct TreeStep {
    scale: Real,
    n: usize,
    i: usize,
    offset: Vec2,
}

impl TreeStep {
    pub fn new(scale: Real, n: usize) -> Self {
        Self {
            scale,
            n,
            i: 0,
            offset: Vec2::default(),
        }
    }

    #[inline]
    pub fn offset(&self) -> Vec2 {
        self.offset
    }

    pub fn step(&mut self) -> Vec2 {
        if self.i != 0 {
            if self.i == 1 {
                let span = self.n.saturating_sub(1) as Real;

                self.offset.y += self.scale;
                self.offset.x = -span * self.scale * 0.5;
            }

            self.offset.x += self.scale;
        }

        self.i += 1;
        self.offset
    }
}

impl Iterator for TreeStep {
    type Item = Vec2;

    fn next(&mut self) -> Option<Vec2> {
        Some(self.step())
    }
}
