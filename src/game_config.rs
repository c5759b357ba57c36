// Copyright (C) 2020-2026 Andy Kurnia.

use super::{alphabet, board_layout};

pub struct StaticGameConfig {
    alphabet: &'static alphabet::Alphabet,
    board_layout: board_layout::BoardLayout,
    rack_size: i8,
    bingo_bonus: i16,
}

pub enum GameConfig {
    Static(StaticGameConfig),
}

impl GameConfig {
    #[inline(always)]
    pub fn alphabet(&self) -> &'static alphabet::Alphabet {
        match self {
            GameConfig::Static(x) => x.alphabet,
        }
    }

    #[inline(always)]
    pub fn board_layout(&self) -> &board_layout::BoardLayout {
        match self {
            GameConfig::Static(x) => &x.board_layout,
        }
    }

    #[inline(always)]
    pub fn rack_size(&self) -> i8 {
        match self {
            GameConfig::Static(x) => x.rack_size,
        }
    }

    /// Fixed additive bonus for playing the entire rack in one turn,
    /// applied once per qualifying turn.
    #[inline(always)]
    pub fn num_played_bonus(&self, num_played: i8) -> i16 {
        match self {
            GameConfig::Static(x) => {
                if num_played >= x.rack_size {
                    x.bingo_bonus
                } else {
                    0
                }
            }
        }
    }
}

pub fn make_standard_game_config() -> GameConfig {
    GameConfig::Static(StaticGameConfig {
        alphabet: &alphabet::ENGLISH_ALPHABET,
        board_layout: board_layout::make_standard_board_layout(),
        rack_size: 7,
        bingo_bonus: 50,
    })
}

pub fn make_game_config(board_size: i8) -> GameConfig {
    GameConfig::Static(StaticGameConfig {
        alphabet: &alphabet::ENGLISH_ALPHABET,
        board_layout: board_layout::make_board_layout(board_size),
        rack_size: 7,
        bingo_bonus: 50,
    })
}
