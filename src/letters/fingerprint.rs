// src/letters/fingerprint.rs

//! Run-count shape descriptors for traced regions.
//!
//! For each row of a region's bounding box we count the maximal runs of
//! member foreground pixels. Pixels outside the region break a run the same
//! way background does. A row holding a single run that covers at least
//! `long_line_ratio` of the box width is recorded as [`LONG_LINE`] instead of
//! 1. Consecutive equal counts are collapsed. Columns are handled the same
//! way against the box height.

use super::tracer::Region;
use crate::image::Raster;
use crate::utils::error::ProcessingError;

/// Marker for a line made of one run spanning most of the box.
pub const LONG_LINE: i32 = -1;

/// Per-row and per-column run counts of a region.
#[derive(Debug, Clone, PartialEq, Eq, Default, Hash)]
pub struct ShapeFingerprint {
    pub horizontal_runs: Vec<i32>,
    pub vertical_runs: Vec<i32>,
}

impl ShapeFingerprint {
    pub fn new(horizontal_runs: Vec<i32>, vertical_runs: Vec<i32>) -> Self {
        ShapeFingerprint {
            horizontal_runs,
            vertical_runs,
        }
    }
}

/// Appends `count` unless it repeats the previous entry.
fn push_collapsed(seq: &mut Vec<i32>, count: i32) {
    if seq.last() != Some(&count) {
        seq.push(count);
    }
}

/// Counts the runs along one line of the box.
fn count_runs(
    line: impl Iterator<Item = usize>,
    is_on: impl Fn(usize) -> bool,
    span: u32,
    long_line_ratio: f64,
) -> i32 {
    let mut runs = 0i32;
    let mut current = 0usize;
    let mut last_len = 0usize;

    for idx in line {
        if is_on(idx) {
            current += 1;
        } else if current > 0 {
            runs += 1;
            last_len = current;
            current = 0;
        }
    }
    if current > 0 {
        runs += 1;
        last_len = current;
    }

    if runs == 1 && last_len as f64 >= long_line_ratio * span as f64 {
        LONG_LINE
    } else {
        runs
    }
}

/// Computes the fingerprint of `region` against the raster it was traced on.
pub fn fingerprint(
    region: &Region,
    raster: &Raster,
    foreground: u8,
    long_line_ratio: f64,
) -> Result<ShapeFingerprint, ProcessingError> {
    let samples = raster.samples()?;
    if region.canvas() != raster.dimensions() {
        return Err(ProcessingError::StaleTracer {
            traced: region.canvas(),
            current: raster.dimensions(),
        });
    }

    let w = raster.width() as usize;
    let bb = region.bounds();
    let (x0, x1) = (bb.top_left.x as usize, bb.bottom_right.x as usize);
    let (y0, y1) = (bb.top_left.y as usize, bb.bottom_right.y as usize);
    let is_on = |idx: usize| region.contains(idx) && samples[idx] == foreground;

    let mut shape = ShapeFingerprint::default();

    for y in y0..=y1 {
        let count = count_runs((x0..=x1).map(|x| y * w + x), is_on, bb.width(), long_line_ratio);
        push_collapsed(&mut shape.horizontal_runs, count);
    }

    for x in x0..=x1 {
        let count = count_runs((y0..=y1).map(|y| y * w + x), is_on, bb.height(), long_line_ratio);
        push_collapsed(&mut shape.vertical_runs, count);
    }

    Ok(shape)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::{BLACK, WHITE};
    use crate::letters::tracer::ComponentTracer;

    fn grid(rows: &[&str]) -> Raster {
        let h = rows.len() as u32;
        let w = rows[0].len() as u32;
        Raster::from_fn(w, h, |x, y| {
            if rows[y as usize].as_bytes()[x as usize] == b'#' {
                BLACK
            } else {
                WHITE
            }
        })
        .unwrap()
    }

    fn shapes(raster: &Raster) -> Vec<ShapeFingerprint> {
        let mut tracer = ComponentTracer::new();
        tracer
            .trace_all(raster, BLACK)
            .unwrap()
            .iter()
            .map(|r| fingerprint(r, raster, BLACK, 0.8).unwrap())
            .collect()
    }

    #[test]
    fn full_width_row_is_a_long_line() {
        let r = grid(&[
            "#####", //
            "..#..", //
            "..#..",
        ]);
        let s = &shapes(&r)[0];
        assert_eq!(s.horizontal_runs, vec![LONG_LINE, 1]);
        // Columns 0,1,3,4 hold a single pixel; column 2 is full height.
        assert_eq!(s.vertical_runs, vec![1, LONG_LINE, 1]);
    }

    #[test]
    fn ring_has_two_runs_in_the_middle() {
        let r = grid(&[
            "###", //
            "#.#", //
            "###",
        ]);
        let s = &shapes(&r)[0];
        assert_eq!(s.horizontal_runs, vec![LONG_LINE, 2, LONG_LINE]);
        assert_eq!(s.vertical_runs, vec![LONG_LINE, 2, LONG_LINE]);
    }

    #[test]
    fn short_single_run_stays_one() {
        let r = grid(&[
            "#....", //
            ".#...", //
            "..###",
        ]);
        let s = &shapes(&r)[0];
        // Row 0 and 1: one pixel out of five; row 2: three of five.
        assert_eq!(s.horizontal_runs, vec![1]);
    }

    #[test]
    fn foreign_pixels_break_runs() {
        // Two regions whose boxes overlap: the inner dot is not a member
        // of the outer frame.
        let r = grid(&[
            "#####", //
            "#...#", //
            "#.#.#", //
            "#...#", //
            "#####",
        ]);
        let all = shapes(&r);
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].horizontal_runs, vec![LONG_LINE, 2, LONG_LINE]);
        assert_eq!(all[1].horizontal_runs, vec![LONG_LINE]);
    }

    #[test]
    fn stale_region_is_rejected() {
        let r = grid(&["#"]);
        let mut tracer = ComponentTracer::new();
        let regions = tracer.trace_all(&r, BLACK).unwrap();
        let other = Raster::filled(2, 2, BLACK).unwrap();
        assert!(matches!(
            fingerprint(&regions[0], &other, BLACK, 0.8),
            Err(ProcessingError::StaleTracer { .. })
        ));
    }

    #[test]
    fn collapse_only_merges_neighbors() {
        let mut seq = Vec::new();
        for c in [1, 1, 2, 2, 1] {
            push_collapsed(&mut seq, c);
        }
        assert_eq!(seq, vec![1, 2, 1]);
    }
}
