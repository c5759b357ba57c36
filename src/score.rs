// Copyright (C) 2020-2026 Andy Kurnia.

use super::{alphabet, board_layout, words};

/// Scores one extracted word. Letter multipliers apply only on squares
/// newly occupied this turn; word multipliers likewise come only from the
/// new squares. Tiles already on the board count at face value.
pub fn score_word(
    layout: &board_layout::BoardLayout,
    alphabet: &alphabet::Alphabet,
    word: &words::ExtractedWord,
) -> i16 {
    let mut word_multiplier = 1i16;
    let mut word_score = 0i16;
    for (i, &(row, col)) in word.squares.iter().enumerate() {
        let letter_score = alphabet.score(word.word.as_bytes()[i]) as i16;
        if word.new_mask[i] {
            let premium = layout.premium_at(row, col);
            word_score += letter_score * premium.letter_multiplier as i16;
            word_multiplier *= premium.word_multiplier as i16;
        } else {
            word_score += letter_score;
        }
    }
    word_score * word_multiplier
}

/// Total score delta for one placement: the sum over every affected word.
pub fn score_words(
    layout: &board_layout::BoardLayout,
    alphabet: &alphabet::Alphabet,
    words: &[words::ExtractedWord],
) -> i16 {
    words
        .iter()
        .map(|word| score_word(layout, alphabet, word))
        .sum()
}
