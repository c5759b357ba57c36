// Copyright (C) 2020-2026 Andy Kurnia.

// Flat row-major addressing over a small rectangular grid.

#[derive(Clone, Copy, Default, PartialEq, Eq, Debug)]
pub struct Dim {
    pub rows: i8,
    pub cols: i8,
}

impl Dim {
    #[inline(always)]
    pub fn at_row_col(&self, row: i8, col: i8) -> usize {
        (((row as isize) * (self.cols as isize)) + (col as isize)) as usize
    }

    #[inline(always)]
    pub fn in_bounds(&self, row: i8, col: i8) -> bool {
        row >= 0 && row < self.rows && col >= 0 && col < self.cols
    }
}
