// src/process/directional.rs

//! Directional erosion: border thinning and irregularity cleanup.
//!
//! Both processors clear foreground pixels matched by a side-specific rule.
//! The scan runs in place in a side-specific order, so each decision sees
//! the pixels cleared earlier in the same pass:
//!
//! | side   | rows           | columns        |
//! |--------|----------------|----------------|
//! | top    | bottom → top   | left → right   |
//! | right  | top → bottom   | left → right   |
//! | bottom | top → bottom   | left → right   |
//! | left   | top → bottom   | right → left   |

use super::neighbor_view::{NeighborView, Side};
use crate::image::Raster;
use crate::utils::error::ProcessingError;

/// Which rule a directional pass applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Erosion {
    /// Clear pixels on the `side` border of a region.
    Thin,
    /// Clear single-pixel protrusions on the `side` edge of a region.
    Cleanup,
}

/// Visits every pixel index in the scan order for `side`.
fn for_each_in_scan_order(width: u32, height: u32, side: Side, mut f: impl FnMut(usize)) {
    let (w, h) = (width as usize, height as usize);
    match side {
        Side::Top => {
            for r in (0..h).rev() {
                for c in 0..w {
                    f(r * w + c);
                }
            }
        }
        Side::Right | Side::Bottom => {
            for i in 0..w * h {
                f(i);
            }
        }
        Side::Left => {
            for r in 0..h {
                for c in (0..w).rev() {
                    f(r * w + c);
                }
            }
        }
    }
}

/// Runs one directional pass. Returns whether any pixel was cleared.
pub fn erode(
    raster: &mut Raster,
    erosion: Erosion,
    side: Side,
    foreground: u8,
    background: u8,
) -> Result<bool, ProcessingError> {
    let (width, height) = raster.dimensions();
    let pixels = raster.samples_mut()?;
    let mut changed = false;

    for_each_in_scan_order(width, height, side, |i| {
        if pixels[i] == background {
            return;
        }
        let view = NeighborView::over(pixels, width, height);
        let hit = match erosion {
            Erosion::Thin => view.is_border(i, side, foreground),
            Erosion::Cleanup => view.is_irregularity(i, side, foreground),
        };
        if hit {
            pixels[i] = background;
            changed = true;
        }
    });

    Ok(changed)
}

/// Clears the `side` border of every foreground region once.
pub fn thin(
    raster: &mut Raster,
    side: Side,
    foreground: u8,
    background: u8,
) -> Result<bool, ProcessingError> {
    erode(raster, Erosion::Thin, side, foreground, background)
}

/// Clears single-pixel protrusions on the `side` edge once.
pub fn cleanup(
    raster: &mut Raster,
    side: Side,
    foreground: u8,
    background: u8,
) -> Result<bool, ProcessingError> {
    erode(raster, Erosion::Cleanup, side, foreground, background)
}
