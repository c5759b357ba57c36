// Copyright (C) 2020-2026 Andy Kurnia.

use super::{alphabet, board};

/// One turn's proposed move: an ordered run of letters from (row, col)
/// going across (down = false) or down. Transient; lives for one
/// validate/commit cycle.
#[derive(Clone, Debug)]
pub struct Placement {
    pub row: i8,
    pub col: i8,
    pub down: bool,
    pub letters: Vec<u8>,
}

/// Why a placement (or session command) was refused. All recoverable; each
/// carries enough detail for a UI to highlight the problem.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(tag = "reason")]
pub enum Rejection {
    #[serde(rename = "out_of_bounds")]
    OutOfBounds,
    #[serde(rename = "overlap")]
    Overlap { row: i8, col: i8, existing: char },
    #[serde(rename = "empty_word")]
    EmptyWord,
    #[serde(rename = "invalid_word")]
    InvalidWord { word: String },
    #[serde(rename = "insufficient_tiles")]
    InsufficientTiles { letter: char },
    #[serde(rename = "game_not_started")]
    GameNotStarted,
    #[serde(rename = "game_already_started")]
    GameAlreadyStarted,
    #[serde(rename = "insufficient_players")]
    InsufficientPlayers,
}

impl std::fmt::Display for Rejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rejection::OutOfBounds => write!(f, "placement runs off the board"),
            Rejection::Overlap { row, col, existing } => {
                write!(f, "square ({row}, {col}) already holds {existing}")
            }
            Rejection::EmptyWord => write!(f, "placement forms no word"),
            Rejection::InvalidWord { word } => write!(f, "{word} is not a word"),
            Rejection::InsufficientTiles { letter } => {
                write!(f, "rack has no {letter}")
            }
            Rejection::GameNotStarted => write!(f, "game is not in progress"),
            Rejection::GameAlreadyStarted => write!(f, "game has already started"),
            Rejection::InsufficientPlayers => write!(f, "need at least two players"),
        }
    }
}

/// A vetted placement: every covered square with its letter, and which of
/// them take a rack tile this turn. Produced by `plan` without touching
/// the board.
#[derive(Debug)]
pub struct PlacementPlan {
    pub down: bool,
    pub positions: Vec<(i8, i8)>,
    pub tiles: Vec<alphabet::Tile>,
    pub new_mask: Vec<bool>,
}

impl PlacementPlan {
    /// Tiles actually leaving the rack this turn.
    pub fn num_played(&self) -> i8 {
        self.new_mask.iter().filter(|&&is_new| is_new).count() as i8
    }

    pub fn played_letters(&self) -> impl Iterator<Item = u8> + '_ {
        self.tiles
            .iter()
            .zip(self.new_mask.iter())
            .filter(|&(_, &is_new)| is_new)
            .map(|(tile, _)| tile.letter)
    }
}

/// Pure legality check of a run against occupancy and boundaries. Reads
/// the board, never mutates it.
///
/// A covered square that already holds the same letter is a legal anchor:
/// the run passes through it and consumes no rack tile there. A different
/// letter is an `Overlap`. A run that plays no new tile at all (including
/// the empty run) is `EmptyWord`.
pub fn plan(
    board: &board::Board<'_>,
    alphabet: &alphabet::Alphabet,
    placement: &Placement,
) -> Result<PlacementPlan, Rejection> {
    if placement.letters.is_empty() {
        return Err(Rejection::EmptyWord);
    }

    let dim = board.dim();
    if !dim.in_bounds(placement.row, placement.col) {
        return Err(Rejection::OutOfBounds);
    }
    if placement.letters.len() > dim.rows.max(dim.cols) as usize {
        return Err(Rejection::OutOfBounds);
    }
    let last = (placement.letters.len() - 1) as i16;
    let fits = if placement.down {
        placement.row as i16 + last < dim.rows as i16
    } else {
        placement.col as i16 + last < dim.cols as i16
    };
    if !fits {
        return Err(Rejection::OutOfBounds);
    }

    let mut positions = Vec::with_capacity(placement.letters.len());
    let mut tiles = Vec::with_capacity(placement.letters.len());
    let mut new_mask = Vec::with_capacity(placement.letters.len());
    for (i, &raw) in (0i8..).zip(placement.letters.iter()) {
        let letter = raw.to_ascii_uppercase();
        let Some(tile) = alphabet.tile(letter) else {
            return Err(Rejection::InvalidWord {
                word: placement
                    .letters
                    .iter()
                    .map(|&b| b.to_ascii_uppercase() as char)
                    .collect(),
            });
        };
        let (row, col) = if placement.down {
            (placement.row + i, placement.col)
        } else {
            (placement.row, placement.col + i)
        };
        match board.letter_at(row, col) {
            None => new_mask.push(true),
            Some(existing) if existing == letter => new_mask.push(false),
            Some(existing) => {
                return Err(Rejection::Overlap {
                    row,
                    col,
                    existing: existing as char,
                });
            }
        }
        positions.push((row, col));
        tiles.push(tile);
    }

    let plan = PlacementPlan {
        down: placement.down,
        positions,
        tiles,
        new_mask,
    };
    if plan.num_played() == 0 {
        return Err(Rejection::EmptyWord);
    }
    Ok(plan)
}
