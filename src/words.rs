// Copyright (C) 2020-2026 Andy Kurnia.

use super::{board, play};
use std::collections::HashSet;

/// A word read off the grid: its letters in increasing coordinate order,
/// the squares they sit on, and which of those squares are newly occupied
/// this turn (the scoring engine needs that to apply multipliers).
/// Derived per placement, never stored.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExtractedWord {
    pub word: String,
    pub squares: Vec<(i8, i8)>,
    pub new_mask: Vec<bool>,
}

// Tentative view of the grid with the plan's tiles laid over the real
// occupancy, so extraction (and lexicon checks) can run before anything
// is committed.
struct Overlay<'a, 'b> {
    board: &'b board::Board<'a>,
    plan: &'b play::PlacementPlan,
}

impl Overlay<'_, '_> {
    fn letter_at(&self, row: i8, col: i8) -> Option<u8> {
        for (i, &(r, c)) in self.plan.positions.iter().enumerate() {
            if (r, c) == (row, col) {
                return Some(self.plan.tiles[i].letter);
            }
        }
        self.board.letter_at(row, col)
    }
}

// Walks back to the start of the contiguous run through (row, col) along
// (d_row, d_col), then forward to its end, concatenating in increasing
// coordinate order.
fn scan_run(
    overlay: &Overlay<'_, '_>,
    new_squares: &HashSet<(i8, i8)>,
    row: i8,
    col: i8,
    d_row: i8,
    d_col: i8,
) -> ExtractedWord {
    let (mut r, mut c) = (row, col);
    while overlay.letter_at(r - d_row, c - d_col).is_some() {
        r -= d_row;
        c -= d_col;
    }
    let mut word = String::new();
    let mut squares = Vec::new();
    let mut new_mask = Vec::new();
    while let Some(letter) = overlay.letter_at(r, c) {
        word.push(letter as char);
        squares.push((r, c));
        new_mask.push(new_squares.contains(&(r, c)));
        r += d_row;
        c += d_col;
    }
    ExtractedWord {
        word,
        squares,
        new_mask,
    }
}

/// All words formed or extended by the plan, computed against the
/// tentative overlay: the primary word along the play direction, then one
/// cross word per newly placed letter. Runs of length < 2 are not words
/// and are dropped; cross words are deduplicated by starting square.
pub fn extract(board: &board::Board<'_>, plan: &play::PlacementPlan) -> Vec<ExtractedWord> {
    let overlay = Overlay { board, plan };
    let new_squares: HashSet<(i8, i8)> = plan
        .positions
        .iter()
        .zip(plan.new_mask.iter())
        .filter(|&(_, &is_new)| is_new)
        .map(|(&pos, _)| pos)
        .collect();

    let (d_row, d_col) = if plan.down { (1, 0) } else { (0, 1) };
    let mut words = Vec::new();

    let (start_row, start_col) = plan.positions[0];
    let primary = scan_run(&overlay, &new_squares, start_row, start_col, d_row, d_col);
    if primary.word.len() >= 2 {
        words.push(primary);
    }

    let mut visited_starts = HashSet::new();
    for (&(row, col), &is_new) in plan.positions.iter().zip(plan.new_mask.iter()) {
        if !is_new {
            continue;
        }
        let cross = scan_run(&overlay, &new_squares, row, col, d_col, d_row);
        if cross.word.len() >= 2 && visited_starts.insert(cross.squares[0]) {
            words.push(cross);
        }
    }

    words
}
