// Copyright (C) 2020-2026 Andy Kurnia.

use super::matrix;

/// Score amplifiers carried by one square. Fixed at board construction.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Premium {
    pub word_multiplier: i8,
    pub letter_multiplier: i8,
}

pub static TWS: Premium = Premium {
    word_multiplier: 3,
    letter_multiplier: 1,
};
pub static DWS: Premium = Premium {
    word_multiplier: 2,
    letter_multiplier: 1,
};
pub static TLS: Premium = Premium {
    word_multiplier: 1,
    letter_multiplier: 3,
};
pub static DLS: Premium = Premium {
    word_multiplier: 1,
    letter_multiplier: 2,
};
pub static FVS: Premium = Premium {
    word_multiplier: 1,
    letter_multiplier: 1,
};

pub struct StaticBoardLayout {
    premiums: Box<[Premium]>,
    dim: matrix::Dim,
    star_row: i8,
    star_col: i8,
}

pub enum BoardLayout {
    Static(StaticBoardLayout),
}

impl BoardLayout {
    #[inline(always)]
    pub fn dim(&self) -> matrix::Dim {
        match self {
            BoardLayout::Static(x) => x.dim,
        }
    }

    #[inline(always)]
    pub fn star_row(&self) -> i8 {
        match self {
            BoardLayout::Static(x) => x.star_row,
        }
    }

    #[inline(always)]
    pub fn star_col(&self) -> i8 {
        match self {
            BoardLayout::Static(x) => x.star_col,
        }
    }

    #[inline(always)]
    pub fn is_star(&self, row: i8, col: i8) -> bool {
        row == self.star_row() && col == self.star_col()
    }

    /// Premium at a square. Valid coordinates only; read-query callers that
    /// may go out of range go through `board::Board::multiplier_at`.
    #[inline(always)]
    pub fn premium_at(&self, row: i8, col: i8) -> Premium {
        match self {
            BoardLayout::Static(x) => x.premiums[x.dim.at_row_col(row, col)],
        }
    }
}

/// Builds the symmetric premium layout for an odd n >= 9, scaling the
/// classic positions proportionally instead of hard-coding them:
/// - corners and edge midpoints: triple word
/// - both diagonals at offsets 1..n/3 (mirrored 4-fold): double word
/// - crossings of offsets {1, mid-2, mid+2, n-2} not already premium:
///   triple letter
/// - a 7-point first-quadrant inset relative to mid (mirrored 4-fold):
///   double letter
/// - center: the star, counted as a double-word square
///
/// At n = 15 this reproduces the classic table exactly.
pub fn make_board_layout(n: i8) -> BoardLayout {
    assert!(n >= 9 && n % 2 == 1, "board size must be odd and at least 9");
    let dim = matrix::Dim { rows: n, cols: n };
    let mid = n / 2;
    let mut premiums = vec![FVS; (n as usize) * (n as usize)].into_boxed_slice();

    for &(row, col) in &[
        (0, 0),
        (0, mid),
        (0, n - 1),
        (mid, 0),
        (mid, n - 1),
        (n - 1, 0),
        (n - 1, mid),
        (n - 1, n - 1),
    ] {
        premiums[dim.at_row_col(row, col)] = TWS;
    }

    for i in 1..n / 3 {
        for &(row, col) in &[(i, i), (i, n - 1 - i), (n - 1 - i, i), (n - 1 - i, n - 1 - i)] {
            premiums[dim.at_row_col(row, col)] = DWS;
        }
    }

    let offsets = [1, mid - 2, mid + 2, n - 2];
    for &row in &offsets {
        for &col in &offsets {
            let idx = dim.at_row_col(row, col);
            if premiums[idx] == FVS {
                premiums[idx] = TLS;
            }
        }
    }

    let inset = [
        (0, mid - 4),
        (2, mid - 1),
        (mid - 4, 0),
        (mid - 4, mid),
        (mid - 1, 2),
        (mid - 1, mid - 1),
        (mid, mid - 4),
    ];
    for &(row, col) in &inset {
        for &(r, c) in &[
            (row, col),
            (row, n - 1 - col),
            (n - 1 - row, col),
            (n - 1 - row, n - 1 - col),
        ] {
            let idx = dim.at_row_col(r, c);
            if premiums[idx] == FVS {
                premiums[idx] = DLS;
            }
        }
    }

    premiums[dim.at_row_col(mid, mid)] = DWS;

    BoardLayout::Static(StaticBoardLayout {
        premiums,
        dim,
        star_row: mid,
        star_col: mid,
    })
}

pub fn make_standard_board_layout() -> BoardLayout {
    make_board_layout(15)
}

#[cfg(test)]
mod tests {
    use super::*;

    // '=' TWS, '-' DWS, '"' TLS, '\'' DLS, ' ' plain.
    static CLASSIC_ROWS: [&str; 15] = [
        "=  '   =   '  =",
        " -   \"   \"   - ",
        "  -   ' '   -  ",
        "'  -   '   -  '",
        "    -     -    ",
        " \"   \"   \"   \" ",
        "  '   ' '   '  ",
        "=  '   -   '  =",
        "  '   ' '   '  ",
        " \"   \"   \"   \" ",
        "    -     -    ",
        "'  -   '   -  '",
        "  -   ' '   -  ",
        " -   \"   \"   - ",
        "=  '   =   '  =",
    ];

    fn glyph(premium: Premium) -> char {
        match (premium.word_multiplier, premium.letter_multiplier) {
            (3, _) => '=',
            (2, _) => '-',
            (_, 3) => '"',
            (_, 2) => '\'',
            _ => ' ',
        }
    }

    #[test]
    fn standard_layout_reproduces_classic_table() {
        let layout = make_standard_board_layout();
        for row in 0..15 {
            let rendered: String = (0..15)
                .map(|col| glyph(layout.premium_at(row, col)))
                .collect();
            assert_eq!(rendered, CLASSIC_ROWS[row as usize], "row {row}");
        }
    }

    #[test]
    fn layout_is_4_fold_symmetric() {
        for n in [9, 11, 15, 21] {
            let layout = make_board_layout(n);
            for row in 0..n {
                for col in 0..n {
                    let premium = layout.premium_at(row, col);
                    assert_eq!(premium, layout.premium_at(col, row));
                    assert_eq!(premium, layout.premium_at(n - 1 - row, col));
                    assert_eq!(premium, layout.premium_at(row, n - 1 - col));
                }
            }
        }
    }

    #[test]
    fn exactly_one_star_at_center() {
        let layout = make_board_layout(11);
        assert_eq!(layout.star_row(), 5);
        assert_eq!(layout.star_col(), 5);
        let stars = (0..11)
            .flat_map(|row| (0..11).map(move |col| (row, col)))
            .filter(|&(row, col)| layout.is_star(row, col))
            .count();
        assert_eq!(stars, 1);
        assert_eq!(layout.premium_at(5, 5), DWS);
    }

    #[test]
    #[should_panic]
    fn even_sizes_are_refused() {
        make_board_layout(14);
    }
}
