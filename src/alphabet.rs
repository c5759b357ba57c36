// Copyright (C) 2020-2026 Andy Kurnia.

// Letters are ASCII uppercase bytes (b'A'..=b'Z'). 0 is reserved as the
// empty-square sentinel and is never a letter.

/// A drawn letter with its face value. Construct via [`Alphabet::tile`] so
/// the point value always matches the letter.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Tile {
    pub letter: u8,
    pub score: i8,
}

struct LetterSpec {
    label: u8,
    freq: u8,
    score: i8,
}

pub struct StaticAlphabet {
    letters: &'static [LetterSpec],
}

pub enum Alphabet {
    Static(StaticAlphabet),
}

impl Alphabet {
    #[inline(always)]
    pub fn len(&self) -> u8 {
        match self {
            Alphabet::Static(x) => x.letters.len() as u8,
        }
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[inline(always)]
    fn spec(&self, letter: u8) -> Option<&LetterSpec> {
        match self {
            Alphabet::Static(x) => x
                .letters
                .get(letter.wrapping_sub(b'A') as usize)
                .filter(|spec| spec.label == letter),
        }
    }

    #[inline(always)]
    pub fn is_letter(&self, ch: u8) -> bool {
        self.spec(ch).is_some()
    }

    /// Face value of a letter; 0 for anything outside the alphabet.
    #[inline(always)]
    pub fn score(&self, letter: u8) -> i8 {
        self.spec(letter).map_or(0, |spec| spec.score)
    }

    /// How many copies of a letter the full bag holds.
    #[inline(always)]
    pub fn freq(&self, letter: u8) -> u8 {
        self.spec(letter).map_or(0, |spec| spec.freq)
    }

    #[inline(always)]
    pub fn tile(&self, letter: u8) -> Option<Tile> {
        self.spec(letter).map(|spec| Tile {
            letter: spec.label,
            score: spec.score,
        })
    }

    /// Total number of tiles in a full bag.
    pub fn num_tiles(&self) -> u16 {
        match self {
            Alphabet::Static(x) => x.letters.iter().map(|spec| spec.freq as u16).sum(),
        }
    }

    pub fn letters(&self) -> impl Iterator<Item = u8> + '_ {
        match self {
            Alphabet::Static(x) => x.letters.iter().map(|spec| spec.label),
        }
    }
}

macro_rules! letter_spec {
    ($label:literal, $freq:literal, $score:literal) => {
        LetterSpec {
            label: $label,
            freq: $freq,
            score: $score,
        }
    };
}

pub static ENGLISH_ALPHABET: Alphabet = Alphabet::Static(StaticAlphabet {
    letters: &[
        letter_spec!(b'A', 9, 1),
        letter_spec!(b'B', 2, 3),
        letter_spec!(b'C', 2, 3),
        letter_spec!(b'D', 4, 2),
        letter_spec!(b'E', 12, 1),
        letter_spec!(b'F', 2, 4),
        letter_spec!(b'G', 3, 2),
        letter_spec!(b'H', 2, 4),
        letter_spec!(b'I', 9, 1),
        letter_spec!(b'J', 1, 8),
        letter_spec!(b'K', 1, 5),
        letter_spec!(b'L', 4, 1),
        letter_spec!(b'M', 2, 3),
        letter_spec!(b'N', 6, 1),
        letter_spec!(b'O', 8, 1),
        letter_spec!(b'P', 2, 3),
        letter_spec!(b'Q', 1, 10),
        letter_spec!(b'R', 6, 1),
        letter_spec!(b'S', 4, 1),
        letter_spec!(b'T', 6, 1),
        letter_spec!(b'U', 4, 1),
        letter_spec!(b'V', 2, 4),
        letter_spec!(b'W', 2, 4),
        letter_spec!(b'X', 1, 8),
        letter_spec!(b'Y', 2, 4),
        letter_spec!(b'Z', 1, 10),
    ],
});
