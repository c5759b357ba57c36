// Copyright (C) 2020-2026 Andy Kurnia.

use super::{alphabet, board_layout, matrix};

/// Outcome of a mutation attempt. Failures perform no mutation; whether a
/// failed placement is a caller bug is the caller's call.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum PlaceOutcome {
    Placed,
    Occupied,
    OutOfBounds,
}

/// One cell of a read-only grid traversal, for rendering collaborators.
pub struct Cell {
    pub row: i8,
    pub col: i8,
    pub letter: Option<u8>,
    pub premium: board_layout::Premium,
    pub is_star: bool,
}

/// Sparse occupancy grid over a premium layout. 0 means empty; a filled
/// square never changes letter again.
pub struct Board<'a> {
    layout: &'a board_layout::BoardLayout,
    tiles: Box<[u8]>,
}

impl<'a> Board<'a> {
    pub fn new(layout: &'a board_layout::BoardLayout) -> Self {
        let dim = layout.dim();
        Self {
            layout,
            tiles: vec![0u8; (dim.rows as usize) * (dim.cols as usize)].into_boxed_slice(),
        }
    }

    #[inline(always)]
    pub fn layout(&self) -> &'a board_layout::BoardLayout {
        self.layout
    }

    #[inline(always)]
    pub fn dim(&self) -> matrix::Dim {
        self.layout.dim()
    }

    /// Neutral read: `None` for an empty square and for out-of-range
    /// coordinates alike. Bounds checking is `dim().in_bounds`.
    #[inline(always)]
    pub fn letter_at(&self, row: i8, col: i8) -> Option<u8> {
        if !self.dim().in_bounds(row, col) {
            return None;
        }
        match self.tiles[self.dim().at_row_col(row, col)] {
            0 => None,
            letter => Some(letter),
        }
    }

    /// Out-of-range coordinates read as not-empty.
    #[inline(always)]
    pub fn is_empty(&self, row: i8, col: i8) -> bool {
        self.dim().in_bounds(row, col) && self.tiles[self.dim().at_row_col(row, col)] == 0
    }

    /// Neutral read: {1, 1} outside the grid.
    #[inline(always)]
    pub fn multiplier_at(&self, row: i8, col: i8) -> board_layout::Premium {
        if self.dim().in_bounds(row, col) {
            self.layout.premium_at(row, col)
        } else {
            board_layout::FVS
        }
    }

    pub fn place_tile(&mut self, row: i8, col: i8, tile: alphabet::Tile) -> PlaceOutcome {
        if !self.dim().in_bounds(row, col) {
            return PlaceOutcome::OutOfBounds;
        }
        let idx = self.dim().at_row_col(row, col);
        if self.tiles[idx] != 0 {
            return PlaceOutcome::Occupied;
        }
        self.tiles[idx] = tile.letter;
        PlaceOutcome::Placed
    }

    pub fn occupied_count(&self) -> usize {
        self.tiles.iter().filter(|&&letter| letter != 0).count()
    }

    /// Ordered row-major traversal for rendering. Read-only.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        let dim = self.dim();
        (0..dim.rows).flat_map(move |row| {
            (0..dim.cols).map(move |col| Cell {
                row,
                col,
                letter: self.letter_at(row, col),
                premium: self.layout.premium_at(row, col),
                is_star: self.layout.is_star(row, col),
            })
        })
    }
}

impl Clone for Board<'_> {
    fn clone(&self) -> Self {
        Self {
            layout: self.layout,
            tiles: self.tiles.clone(),
        }
    }
}
