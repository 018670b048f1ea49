// src/process/fill.rs

//! Hole filling.
//!
//! A pixel takes `fill_color` when at least 5 of its 8 neighbors already have
//! it, or all 8 when the pixel touches the canvas edge (off-canvas neighbors
//! already count as matches there). The scan is row-major and in place, so
//! later pixels see earlier fills. One pass per call.

use super::neighbor_view::NeighborView;
use crate::image::Raster;
use crate::utils::error::ProcessingError;

const INTERIOR_THRESHOLD: u8 = 5;
const EDGE_THRESHOLD: u8 = 8;

/// Runs one fill pass. Returns whether any pixel changed.
pub fn fill(raster: &mut Raster, fill_color: u8) -> Result<bool, ProcessingError> {
    let (width, height) = raster.dimensions();
    let pixels = raster.samples_mut()?;
    let mut changed = false;

    for i in 0..pixels.len() {
        if pixels[i] == fill_color {
            continue;
        }

        let view = NeighborView::over(pixels, width, height);
        let limit = if view.is_edge(i) {
            EDGE_THRESHOLD
        } else {
            INTERIOR_THRESHOLD
        };

        if view.count_matching_neighbors(i, fill_color) >= limit {
            pixels[i] = fill_color;
            changed = true;
        }
    }

    Ok(changed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::{BLACK, WHITE};

    #[test]
    fn isolated_pixel_is_absorbed_then_stable() {
        let mut r = Raster::filled(3, 3, WHITE).unwrap();
        r.samples_mut().unwrap()[4] = BLACK;

        assert!(fill(&mut r, WHITE).unwrap());
        assert!(r.samples().unwrap().iter().all(|&p| p == WHITE));
        assert!(!fill(&mut r, WHITE).unwrap());
    }

    #[test]
    fn fills_hole_inside_ring() {
        let mut r = Raster::from_fn(5, 5, |x, y| {
            if (1..=3).contains(&x) && (1..=3).contains(&y) && !(x == 2 && y == 2) {
                BLACK
            } else {
                WHITE
            }
        })
        .unwrap();

        assert!(fill(&mut r, BLACK).unwrap());
        assert_eq!(r.samples().unwrap()[12], BLACK);
        // Edge pixels never reach 8 matches next to a white border.
        assert_eq!(r.samples().unwrap()[0], WHITE);
    }

    #[test]
    fn edge_pixel_needs_every_neighbor() {
        let mut r = Raster::filled(3, 3, BLACK).unwrap();
        r.samples_mut().unwrap()[1] = WHITE;
        assert!(fill(&mut r, BLACK).unwrap());
        assert_eq!(r.samples().unwrap()[1], BLACK);

        let mut r = Raster::filled(3, 3, BLACK).unwrap();
        r.samples_mut().unwrap()[1] = WHITE;
        r.samples_mut().unwrap()[2] = WHITE;
        fill(&mut r, BLACK).unwrap();
        assert_eq!(r.samples().unwrap()[1], WHITE);
    }

    #[test]
    fn requires_single_channel() {
        let mut r = Raster::from_channels(1, 1, vec![vec![0], vec![0], vec![0]]).unwrap();
        assert!(matches!(
            fill(&mut r, BLACK),
            Err(ProcessingError::UnsupportedChannelLayout { .. })
        ));
    }
}
