// src/letters/classify.rs

//! Matching shape fingerprints against reference letters.
//!
//! Classification is opt-in: the tracer never calls it. Similarity is the
//! number of positions where two run sequences agree, summed over both axes
//! and divided by the summed lengths of the longer sequence per axis.

use super::fingerprint::{LONG_LINE, ShapeFingerprint};

const L: i32 = LONG_LINE;

/// A reference fingerprint for one letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Etalon {
    pub letter: char,
    pub horizontal_runs: &'static [i32],
    pub vertical_runs: &'static [i32],
}

const fn etalon(
    letter: char,
    horizontal_runs: &'static [i32],
    vertical_runs: &'static [i32],
) -> Etalon {
    Etalon {
        letter,
        horizontal_runs,
        vertical_runs,
    }
}

/// Reference fingerprints for punctuation, lowercase letters and part of
/// the uppercase alphabet.
pub static ETALONS: &[Etalon] = &[
    etalon('.', &[L], &[L]),
    etalon('a', &[1, 2, 1, 2, L, 2], &[1, 2, 3, 1, L]),
    etalon('b', &[1, 2, 1, 2, 1], &[1, L, 2, 1]),
    etalon('c', &[1, 2, 1, 2, 1], &[1, 2]),
    etalon('d', &[1, 2, 1, 2, 1, 2], &[1, 2, 3, 1, L]),
    etalon('e', &[1, 2, L, 1, 2, L, 1], &[1, 3, 2]),
    etalon('f', &[L, 2, 1, 2, 1], &[L, 2, L, 3, 1]),
    etalon('g', &[L, 2, 1, L, 2, 1], &[3, 5, 4, 3, 4, 3, 2]),
    etalon('h', &[1, 2, 1, 2], &[2, L, 2, 1, 2, L]),
    etalon('i', &[1, L], &[2, L]),
    etalon('j', &[L, 2, L, 1, 2, 1], &[1, L, 2, 1]),
    etalon('k', &[1, 2, 1, 2, 1], &[2, 1, 2, 1, 2, 3, 2]),
    etalon('l', &[1, L], &[2, L]),
    etalon('m', &[3], &[2, 1, 2, L, 2, 1, 2, L]),
    etalon('n', &[2], &[2, L, 2, 1, 2, L]),
    etalon('o', &[1, 2, 1], &[1, 2, 1]),
    etalon('p', &[2, 1, 2, 1, 2, 1], &[2, L, 3, 2, 1]),
    etalon('q', &[2, 1, L], &[1, 2, 3, L]),
    etalon('r', &[2, 1], &[2, L, 2, 1]),
    etalon('s', &[1, L, 2, 1, L, 2], &[2, 3, 2]),
    etalon('t', &[1, L, 1, L, 1], &[1, 2]),
    etalon('u', &[2, 1, 2], &[1, L, 1, 2, 1, L]),
    etalon('v', &[2, 1], &[1, 2, L, 1, 2, 1]),
    etalon('w', &[3, 4, 2], &[1, 2, L, 1, L, 1, 2, 1]),
    etalon('x', &[2, 1, 2], &[2, 1, 2]),
    etalon('y', &[2, 1, 2, 1], &[1, 2, 3, 1, 2, 1]),
    etalon('z', &[L, 1, L], &[2]),
    etalon('A', &[], &[]),
    etalon('B', &[1, 2, 1, 2, 1], &[2, L, 3, 3, 1]),
    etalon('C', &[1, 2, 1, 2, 1], &[1, 2]),
    etalon('D', &[1, 2, 1], &[2, L, 2, 1]),
    etalon('E', &[1, 2, 1, 2, 1, 2, 1, 2, 1, 2], &[2, L, 3, 2, 1]),
    etalon('F', &[1, 2, 1, 2, 1, 2, 1], &[2, L, 3, 2, 1]),
    etalon('G', &[2, 1, 2, 1, 2, 1], &[1, 2, 3, 2, 1]),
    etalon('H', &[2, 1, 2], &[2, L, 3, 1, 3, L, 2]),
    etalon('S', &[L, 2, 1, L, 2], &[2, 3, 2]),
    etalon('T', &[1, L, 3, 1], &[1, 2, L, 2, 1]),
];

fn positional_matches(a: &[i32], b: &[i32]) -> usize {
    a.iter().zip(b).filter(|(x, y)| x == y).count()
}

fn score(h1: &[i32], v1: &[i32], h2: &[i32], v2: &[i32]) -> f64 {
    let denom = h1.len().max(h2.len()) + v1.len().max(v2.len());
    if denom == 0 {
        return 0.0;
    }
    (positional_matches(h1, h2) + positional_matches(v1, v2)) as f64 / denom as f64
}

/// Similarity of two fingerprints, in `[0, 1]`.
pub fn similarity(a: &ShapeFingerprint, b: &ShapeFingerprint) -> f64 {
    score(
        &a.horizontal_runs,
        &a.vertical_runs,
        &b.horizontal_runs,
        &b.vertical_runs,
    )
}

/// A letter and how closely a fingerprint resembles it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Candidate {
    pub letter: char,
    pub similarity: f64,
}

/// Scores `shape` against every reference letter, best match first.
///
/// Equal scores are ordered by letter.
pub fn classify(shape: &ShapeFingerprint) -> Vec<Candidate> {
    let mut out: Vec<Candidate> = ETALONS
        .iter()
        .map(|e| Candidate {
            letter: e.letter,
            similarity: score(
                &shape.horizontal_runs,
                &shape.vertical_runs,
                e.horizontal_runs,
                e.vertical_runs,
            ),
        })
        .collect();
    out.sort_by(|a, b| {
        b.similarity
            .total_cmp(&a.similarity)
            .then(a.letter.cmp(&b.letter))
    });
    out
}

/// The best-matching letter, if any reference scores above zero.
pub fn best_match(shape: &ShapeFingerprint) -> Option<Candidate> {
    classify(shape).into_iter().find(|c| c.similarity > 0.0)
}
