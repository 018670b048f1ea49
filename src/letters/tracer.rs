// src/letters/tracer.rs

//! Incremental connected-component labeling.
//!
//! The tracer walks a cursor over the pixel array one index per `step()`.
//! When the cursor lands on an unclaimed foreground pixel, every pixel
//! 8-connected to it with the same value is collected into a new `Region`.
//! Flooding uses an explicit work stack, so region size is bounded by memory
//! rather than call depth.
//!
//! The cursor is tied to the dimensions of the first raster it was stepped
//! with. Stepping with a raster of other dimensions fails with
//! `StaleTracer` until `reset()` is called.

use super::fingerprint::{ShapeFingerprint, fingerprint};
use crate::image::{BBox, Point, Raster};
use crate::utils::error::ProcessingError;
use bitvec::prelude::*;
use log::{trace, warn};
use std::collections::BTreeSet;
use std::sync::OnceLock;

/// A traced 8-connected set of foreground pixels ("letter").
#[derive(Debug, Clone, PartialEq)]
pub struct Region {
    id: usize,
    canvas: (u32, u32),
    bounds: BBox,
    pixels: BTreeSet<usize>,
    shape: OnceLock<ShapeFingerprint>,
}

impl Region {
    /// Position of this region in discovery order.
    pub fn id(&self) -> usize {
        self.id
    }

    /// Dimensions of the raster the region was traced on.
    pub fn canvas(&self) -> (u32, u32) {
        self.canvas
    }

    pub fn bounds(&self) -> BBox {
        self.bounds
    }

    /// Linear indices of the member pixels.
    pub fn pixels(&self) -> &BTreeSet<usize> {
        &self.pixels
    }

    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    pub fn contains(&self, index: usize) -> bool {
        self.pixels.contains(&index)
    }

    /// The shape fingerprint, computed on first use and cached.
    ///
    /// Later calls return the cached value regardless of `raster` or the
    /// parameters passed.
    pub fn shape(
        &self,
        raster: &Raster,
        foreground: u8,
        long_line_ratio: f64,
    ) -> Result<&ShapeFingerprint, ProcessingError> {
        if let Some(shape) = self.shape.get() {
            return Ok(shape);
        }
        let computed = fingerprint(self, raster, foreground, long_line_ratio)?;
        Ok(self.shape.get_or_init(|| computed))
    }

    /// The fingerprint if it has already been computed.
    pub fn cached_shape(&self) -> Option<&ShapeFingerprint> {
        self.shape.get()
    }
}

/// Cursor-driven region discovery over a single-channel raster.
#[derive(Debug, Default)]
pub struct ComponentTracer {
    next_index: usize,
    regions: Vec<Region>,
    claimed: BitVec,
    canvas: Option<(u32, u32)>,
}

impl ComponentTracer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears discovered regions and rewinds the cursor.
    pub fn reset(&mut self) {
        self.next_index = 0;
        self.regions.clear();
        self.claimed.clear();
        self.canvas = None;
    }

    /// Index the next `step()` will examine.
    pub fn next_index(&self) -> usize {
        self.next_index
    }

    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    pub fn last_region(&self) -> Option<&Region> {
        self.regions.last()
    }

    pub fn into_regions(self) -> Vec<Region> {
        self.regions
    }

    /// Whether the cursor has consumed the whole pixel array.
    pub fn is_exhausted(&self) -> bool {
        self.canvas.is_some() && self.next_index >= self.claimed.len()
    }

    /// Advances the cursor by one pixel, tracing a new region if one starts there.
    ///
    /// Returns `false` once the cursor has consumed the entire pixel array,
    /// `true` otherwise (including steps that found nothing new).
    pub fn step(&mut self, raster: &Raster, foreground: u8) -> Result<bool, ProcessingError> {
        let samples = raster.samples()?;
        let dims = raster.dimensions();

        match self.canvas {
            Some(traced) if traced != dims => {
                warn!(
                    "tracer stepped with a {:?} raster after tracing {:?}",
                    dims, traced
                );
                return Err(ProcessingError::StaleTracer {
                    traced,
                    current: dims,
                });
            }
            Some(_) => {}
            None => {
                self.canvas = Some(dims);
                self.claimed = bitvec![0; samples.len()];
            }
        }

        let idx = self.next_index;
        if idx >= samples.len() {
            return Ok(false);
        }

        if samples[idx] == foreground && !self.claimed[idx] {
            let region = self.flood(samples, dims, idx);
            trace!(
                "region {} at {:?}: {} pixels",
                region.id,
                region.bounds,
                region.pixels.len()
            );
            self.regions.push(region);
        }

        self.next_index += 1;
        Ok(true)
    }

    /// Steps until the cursor is exhausted and returns every region found.
    pub fn trace_all(
        &mut self,
        raster: &Raster,
        foreground: u8,
    ) -> Result<&[Region], ProcessingError> {
        while self.step(raster, foreground)? {}
        Ok(&self.regions)
    }

    fn flood(&mut self, samples: &[u8], (width, height): (u32, u32), seed: usize) -> Region {
        let color = samples[seed];
        let mut pixels = BTreeSet::new();
        let mut bounds = BBox::around(Point::from_linear(seed, width));
        let mut stack = vec![seed];
        self.claimed.set(seed, true);

        while let Some(idx) = stack.pop() {
            pixels.insert(idx);
            let p = Point::from_linear(idx, width);
            bounds.include(p);

            for dy in -1..=1 {
                for dx in -1..=1 {
                    if dx == 0 && dy == 0 {
                        continue;
                    }
                    let n = p.offset(dx, dy);
                    if !n.is_within(width, height) {
                        continue;
                    }
                    let ni = n.to_linear(width);
                    if samples[ni] == color && !self.claimed[ni] {
                        self.claimed.set(ni, true);
                        stack.push(ni);
                    }
                }
            }
        }

        Region {
            id: self.regions.len(),
            canvas: (width, height),
            bounds,
            pixels,
            shape: OnceLock::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::{BLACK, WHITE};

    fn two_blocks() -> Raster {
        Raster::from_fn(10, 5, |x, y| {
            let in_a = (1..=3).contains(&x) && (1..=3).contains(&y);
            let in_b = (6..=8).contains(&x) && (1..=3).contains(&y);
            if in_a || in_b { BLACK } else { WHITE }
        })
        .unwrap()
    }

    #[test]
    fn finds_two_disjoint_blocks() {
        let raster = two_blocks();
        let mut tracer = ComponentTracer::new();
        let regions = tracer.trace_all(&raster, BLACK).unwrap();
        assert_eq!(regions.len(), 2);

        let a = regions[0].pixels();
        let b = regions[1].pixels();
        assert!(a.is_disjoint(b));
        assert_eq!(a.len() + b.len(), 18);

        let fg: BTreeSet<usize> = raster
            .samples()
            .unwrap()
            .iter()
            .enumerate()
            .filter(|(_, p)| **p == BLACK)
            .map(|(i, _)| i)
            .collect();
        let union: BTreeSet<usize> = a.union(b).copied().collect();
        assert_eq!(union, fg);

        assert_eq!(regions[0].bounds().top_left, Point::new(1, 1));
        assert_eq!(regions[0].bounds().bottom_right, Point::new(3, 3));
        assert_eq!(regions[1].bounds().top_left, Point::new(6, 1));
    }

    #[test]
    fn step_reports_exhaustion() {
        let raster = Raster::filled(2, 2, WHITE).unwrap();
        let mut tracer = ComponentTracer::new();
        for _ in 0..4 {
            assert!(tracer.step(&raster, BLACK).unwrap());
        }
        assert!(tracer.is_exhausted());
        assert!(!tracer.step(&raster, BLACK).unwrap());
        assert!(tracer.regions().is_empty());
    }

    #[test]
    fn diagonal_pixels_are_connected() {
        let raster = Raster::from_fn(3, 3, |x, y| if x == y { BLACK } else { WHITE }).unwrap();
        let mut tracer = ComponentTracer::new();
        let regions = tracer.trace_all(&raster, BLACK).unwrap();
        assert_eq!(regions.len(), 1);
        assert_eq!(regions[0].len(), 3);
    }

    #[test]
    fn region_appears_on_the_step_that_reaches_it() {
        let raster = two_blocks();
        let mut tracer = ComponentTracer::new();
        // Index 11 is (1, 1), the first foreground pixel.
        for _ in 0..11 {
            tracer.step(&raster, BLACK).unwrap();
        }
        assert!(tracer.regions().is_empty());
        tracer.step(&raster, BLACK).unwrap();
        assert_eq!(tracer.regions().len(), 1);
        assert_eq!(tracer.last_region().map(Region::id), Some(0));
    }

    #[test]
    fn large_region_does_not_recurse() {
        let raster = Raster::filled(1000, 1000, BLACK).unwrap();
        let mut tracer = ComponentTracer::new();
        tracer.step(&raster, BLACK).unwrap();
        assert_eq!(tracer.regions()[0].len(), 1_000_000);
    }

    #[test]
    fn stale_cursor_is_rejected_until_reset() {
        let mut tracer = ComponentTracer::new();
        tracer.step(&two_blocks(), BLACK).unwrap();

        let other = Raster::filled(4, 4, BLACK).unwrap();
        assert!(matches!(
            tracer.step(&other, BLACK),
            Err(ProcessingError::StaleTracer { .. })
        ));

        tracer.reset();
        assert_eq!(tracer.next_index(), 0);
        assert_eq!(tracer.trace_all(&other, BLACK).unwrap().len(), 1);
    }

    #[test]
    fn shape_is_cached() {
        let raster = two_blocks();
        let mut tracer = ComponentTracer::new();
        let regions = tracer.trace_all(&raster, BLACK).unwrap();
        assert!(regions[0].cached_shape().is_none());
        let first = regions[0].shape(&raster, BLACK, 0.8).unwrap().clone();
        assert_eq!(regions[0].cached_shape(), Some(&first));
        assert_eq!(regions[0].shape(&raster, BLACK, 0.1).unwrap(), &first);
    }
}
