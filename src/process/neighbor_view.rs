// src/process/neighbor_view.rs

//! Read-only 3x3 neighborhood queries over a single-channel raster.
//!
//! Out-of-bounds neighbors always match: the canvas edge behaves as if it
//! already belonged to the target value.

use crate::image::{Point, Raster};
use crate::utils::error::ProcessingError;

/// The side of a region boundary a directional processor works on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Top,
    Right,
    Bottom,
    Left,
}

impl Side {
    pub const ALL: [Side; 4] = [Side::Top, Side::Right, Side::Bottom, Side::Left];

    /// Quarter turns needed to bring this side's neighbor into the top slot.
    fn quarter_turns(self) -> usize {
        match self {
            Side::Top => 0,
            Side::Right => 1,
            Side::Bottom => 2,
            Side::Left => 3,
        }
    }
}

/// The 8 neighbor predicates of a pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Neighbors {
    pub tl: bool,
    pub t: bool,
    pub tr: bool,
    pub l: bool,
    pub r: bool,
    pub bl: bool,
    pub b: bool,
    pub br: bool,
}

impl Neighbors {
    pub fn count(&self) -> u8 {
        [self.tl, self.t, self.tr, self.l, self.r, self.bl, self.b, self.br]
            .iter()
            .filter(|&&m| m)
            .count() as u8
    }

    /// Rotates the window a quarter turn counter-clockwise, so that the
    /// right-hand neighbor ends up in the top slot.
    fn rotate_ccw(self) -> Neighbors {
        Neighbors {
            tl: self.tr,
            t: self.r,
            tr: self.br,
            l: self.t,
            r: self.b,
            bl: self.tl,
            b: self.l,
            br: self.bl,
        }
    }

    /// Re-expresses the window so that `side` faces up.
    pub fn facing(self, side: Side) -> Neighbors {
        (0..side.quarter_turns()).fold(self, |n, _| n.rotate_ccw())
    }

    /// Top-border rule: nothing above, something below.
    fn is_top_border(&self) -> bool {
        !self.t && self.b
    }

    /// Top-irregularity rule: a lone bump sticking out of the top edge.
    fn is_top_irregularity(&self) -> bool {
        !self.tl && !self.t && !self.tr && !self.l && !self.r && (!self.bl || self.b)
    }
}

/// A 3x3 view over a single-channel raster.
pub struct NeighborView<'a> {
    samples: &'a [u8],
    width: u32,
    height: u32,
}

impl<'a> NeighborView<'a> {
    pub fn new(raster: &'a Raster) -> Result<Self, ProcessingError> {
        Ok(Self::over(raster.samples()?, raster.width(), raster.height()))
    }

    /// A view over raw row-major samples. `samples.len()` must be `width * height`.
    pub fn over(samples: &'a [u8], width: u32, height: u32) -> Self {
        debug_assert_eq!(samples.len(), width as usize * height as usize);
        NeighborView {
            samples,
            width,
            height,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Whether the sample at `p` equals `target`; out of bounds is always true.
    #[inline]
    pub fn sample_at(&self, p: Point, target: u8) -> bool {
        if !p.is_within(self.width, self.height) {
            return true;
        }
        self.samples[p.to_linear(self.width)] == target
    }

    /// The 8 neighbor predicates of the pixel at `index`.
    pub fn neighbors(&self, index: usize, target: u8) -> Neighbors {
        let p = Point::from_linear(index, self.width);
        Neighbors {
            tl: self.sample_at(p.offset(-1, -1), target),
            t: self.sample_at(p.offset(0, -1), target),
            tr: self.sample_at(p.offset(1, -1), target),
            l: self.sample_at(p.offset(-1, 0), target),
            r: self.sample_at(p.offset(1, 0), target),
            bl: self.sample_at(p.offset(-1, 1), target),
            b: self.sample_at(p.offset(0, 1), target),
            br: self.sample_at(p.offset(1, 1), target),
        }
    }

    /// Number of 8-connected neighbors equal to `target`, in `[0, 8]`.
    pub fn count_matching_neighbors(&self, index: usize, target: u8) -> u8 {
        self.neighbors(index, target).count()
    }

    /// Whether the pixel lies on the `side` edge of a `target`-valued region.
    pub fn is_border(&self, index: usize, side: Side, target: u8) -> bool {
        self.neighbors(index, target).facing(side).is_top_border()
    }

    /// Whether the pixel is a single-pixel protrusion on the `side` edge of a
    /// `target`-valued region.
    pub fn is_irregularity(&self, index: usize, side: Side, target: u8) -> bool {
        self.neighbors(index, target)
            .facing(side)
            .is_top_irregularity()
    }

    /// Whether the pixel at `index` touches the canvas edge.
    pub fn is_edge(&self, index: usize) -> bool {
        let p = Point::from_linear(index, self.width);
        p.x == 0 || p.y == 0 || p.x == self.width as i64 - 1 || p.y == self.height as i64 - 1
    }
}
