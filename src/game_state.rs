// Copyright (C) 2020-2026 Andy Kurnia.

use super::{bag, board, game_config, lexicon, play, score, words};
use rand::prelude::*;

// Checks that the rack covers the needed letters; reports the first
// letter it cannot cover.
fn missing_letter(rack: &[u8], needed: impl IntoIterator<Item = u8>) -> Option<u8> {
    let mut tally = [0u8; 26];
    for &letter in rack {
        tally[(letter - b'A') as usize] += 1;
    }
    for letter in needed {
        let slot = &mut tally[(letter - b'A') as usize];
        if *slot == 0 {
            return Some(letter);
        }
        *slot -= 1;
    }
    None
}

// Debits the rack; the caller has already established coverage.
fn use_tiles(rack: &mut Vec<u8>, tiles: impl IntoIterator<Item = u8>) {
    for tile in tiles {
        if let Some(pos) = rack.iter().rposition(|&t| t == tile) {
            rack.swap_remove(pos);
        }
    }
}

pub struct GamePlayer {
    pub name: String,
    pub score: i16,
    pub rack: Vec<u8>,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum GamePhase {
    NotStarted,
    InProgress,
    Finished,
}

/// What an accepted placement did, for the caller's UI.
#[derive(Clone, Debug, serde::Serialize)]
pub struct TurnSummary {
    pub player: String,
    pub score_delta: i16,
    pub words: Vec<String>,
}

/// One game session. Owns its board, bag, and players outright; all
/// mutation flows through the methods here, one placement at a time.
pub struct GameState<'a> {
    config: &'a game_config::GameConfig,
    lexicon: &'a dyn lexicon::Lexicon,
    pub board: board::Board<'a>,
    pub players: Vec<GamePlayer>,
    pub bag: bag::Bag,
    turn: u8,
    phase: GamePhase,
}

impl<'a> GameState<'a> {
    pub fn new(config: &'a game_config::GameConfig, lexicon: &'a dyn lexicon::Lexicon) -> Self {
        Self {
            config,
            lexicon,
            board: board::Board::new(config.board_layout()),
            players: Vec::new(),
            bag: bag::Bag::new(config.alphabet()),
            turn: 0,
            phase: GamePhase::NotStarted,
        }
    }

    #[inline(always)]
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    #[inline(always)]
    pub fn is_finished(&self) -> bool {
        self.phase == GamePhase::Finished
    }

    /// Panics if no player has been registered yet.
    pub fn current_player(&self) -> &GamePlayer {
        &self.players[self.turn as usize]
    }

    pub fn add_player(&mut self, name: &str) -> Result<(), play::Rejection> {
        if self.phase != GamePhase::NotStarted {
            return Err(play::Rejection::GameAlreadyStarted);
        }
        self.players.push(GamePlayer {
            name: name.to_string(),
            score: 0,
            rack: Vec::with_capacity(self.config.rack_size() as usize),
        });
        Ok(())
    }

    /// Shuffles the bag, deals every rack, and opens play with player 0.
    pub fn start_game(&mut self, rng: &mut dyn RngCore) -> Result<(), play::Rejection> {
        if self.phase != GamePhase::NotStarted {
            return Err(play::Rejection::GameAlreadyStarted);
        }
        if self.players.len() < 2 {
            return Err(play::Rejection::InsufficientPlayers);
        }
        self.bag.shuffle(rng);
        let rack_size = self.config.rack_size() as usize;
        for player in self.players.iter_mut() {
            self.bag.replenish(&mut player.rack, rack_size);
        }
        self.turn = 0;
        self.phase = GamePhase::InProgress;
        log::info!("game started with {} players", self.players.len());
        Ok(())
    }

    /// Validates, commits, and scores one placement, or rejects it leaving
    /// the session byte-for-byte unchanged.
    pub fn submit_placement(
        &mut self,
        placement: &play::Placement,
    ) -> Result<TurnSummary, play::Rejection> {
        let result = self.try_placement(placement);
        match &result {
            Ok(summary) => log::info!(
                "{} played {:?} for {}",
                summary.player,
                summary.words,
                summary.score_delta
            ),
            Err(rejection) => log::debug!("placement rejected: {rejection}"),
        }
        result
    }

    fn try_placement(
        &mut self,
        placement: &play::Placement,
    ) -> Result<TurnSummary, play::Rejection> {
        if self.phase != GamePhase::InProgress {
            return Err(play::Rejection::GameNotStarted);
        }
        let alphabet = self.config.alphabet();
        let layout = self.config.board_layout();

        // everything up to the commit below reads the tentative overlay
        // and mutates nothing
        let plan = play::plan(&self.board, alphabet, placement)?;
        let affected = words::extract(&self.board, &plan);
        if affected.is_empty() {
            return Err(play::Rejection::EmptyWord);
        }
        for word in &affected {
            if !self.lexicon.contains(&word.word) {
                return Err(play::Rejection::InvalidWord {
                    word: word.word.clone(),
                });
            }
        }
        if let Some(letter) =
            missing_letter(&self.players[self.turn as usize].rack, plan.played_letters())
        {
            return Err(play::Rejection::InsufficientTiles {
                letter: letter as char,
            });
        }

        // commit: all checks passed, so every placement below lands
        for ((&(row, col), &tile), &is_new) in plan
            .positions
            .iter()
            .zip(plan.tiles.iter())
            .zip(plan.new_mask.iter())
        {
            if is_new {
                let outcome = self.board.place_tile(row, col, tile);
                debug_assert_eq!(outcome, board::PlaceOutcome::Placed);
            }
        }
        let score_delta = score::score_words(layout, alphabet, &affected)
            + self.config.num_played_bonus(plan.num_played());
        let rack_size = self.config.rack_size() as usize;
        let player = &mut self.players[self.turn as usize];
        player.score += score_delta;
        use_tiles(&mut player.rack, plan.played_letters());
        self.bag.replenish(&mut player.rack, rack_size);

        let summary = TurnSummary {
            player: player.name.clone(),
            score_delta,
            words: affected.into_iter().map(|word| word.word).collect(),
        };
        if self.bag.is_empty() && player.rack.is_empty() {
            self.phase = GamePhase::Finished;
        } else {
            self.next_turn();
        }
        Ok(summary)
    }

    fn next_turn(&mut self) {
        self.turn = (self.turn + 1) % self.players.len() as u8;
    }

    /// Defensive copy; callers never see the live grid.
    pub fn board_snapshot(&self) -> board::Board<'a> {
        self.board.clone()
    }

    /// Players ordered by score, best first; ties keep registration order.
    pub fn standings(&self) -> Vec<(String, i16)> {
        let mut ranked: Vec<_> = self
            .players
            .iter()
            .map(|player| (player.name.clone(), player.score))
            .collect();
        ranked.sort_by_key(|&(_, score)| std::cmp::Reverse(score));
        ranked
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_config::make_standard_game_config;
    use crate::lexicon::SetLexicon;
    use rand::SeedableRng;

    fn placement(row: i8, col: i8, down: bool, word: &str) -> play::Placement {
        play::Placement {
            row,
            col,
            down,
            letters: word.bytes().collect(),
        }
    }

    fn started_game<'a>(
        config: &'a game_config::GameConfig,
        lexicon: &'a SetLexicon,
    ) -> GameState<'a> {
        let mut game = GameState::new(config, lexicon);
        game.add_player("Alice").unwrap();
        game.add_player("Bob").unwrap();
        let mut rng = rand_chacha::ChaCha20Rng::seed_from_u64(7);
        game.start_game(&mut rng).unwrap();
        game
    }

    #[test]
    fn start_requires_two_players() {
        let config = make_standard_game_config();
        let lexicon = SetLexicon::new(["CAT"]);
        let mut game = GameState::new(&config, &lexicon);
        game.add_player("Alice").unwrap();
        let mut rng = rand_chacha::ChaCha20Rng::seed_from_u64(0);
        assert_eq!(
            game.start_game(&mut rng).unwrap_err(),
            play::Rejection::InsufficientPlayers
        );
        assert_eq!(game.phase(), GamePhase::NotStarted);
    }

    #[test]
    fn placement_before_start_is_rejected() {
        let config = make_standard_game_config();
        let lexicon = SetLexicon::new(["CAT"]);
        let mut game = GameState::new(&config, &lexicon);
        game.add_player("Alice").unwrap();
        game.add_player("Bob").unwrap();
        assert_eq!(
            game.submit_placement(&placement(7, 6, false, "CAT"))
                .unwrap_err(),
            play::Rejection::GameNotStarted
        );
    }

    #[test]
    fn registration_closes_once_started() {
        let config = make_standard_game_config();
        let lexicon = SetLexicon::new(["CAT"]);
        let mut game = started_game(&config, &lexicon);
        assert_eq!(
            game.add_player("Carol").unwrap_err(),
            play::Rejection::GameAlreadyStarted
        );
        let mut rng = rand_chacha::ChaCha20Rng::seed_from_u64(0);
        assert_eq!(
            game.start_game(&mut rng).unwrap_err(),
            play::Rejection::GameAlreadyStarted
        );
    }

    #[test]
    fn start_deals_full_racks() {
        let config = make_standard_game_config();
        let lexicon = SetLexicon::new(["CAT"]);
        let game = started_game(&config, &lexicon);
        for player in &game.players {
            assert_eq!(player.rack.len(), 7);
        }
        assert_eq!(game.bag.len(), 98 - 14);
    }

    #[test]
    fn accepted_placement_scores_and_advances_the_turn() {
        let config = make_standard_game_config();
        let lexicon = SetLexicon::new(["CAT"]);
        let mut game = started_game(&config, &lexicon);
        game.players[0].rack = b"CATXYZW".to_vec();
        let summary = game.submit_placement(&placement(7, 6, false, "CAT")).unwrap();
        assert_eq!(summary.player, "Alice");
        assert_eq!(summary.score_delta, (3 + 1 + 1) * 2);
        assert_eq!(summary.words, vec!["CAT".to_string()]);
        assert_eq!(game.players[0].score, 10);
        assert_eq!(game.current_player().name, "Bob");
        assert_eq!(game.players[0].rack.len(), 7);
        assert_eq!(game.board.letter_at(7, 7), Some(b'A'));
    }

    #[test]
    fn rejection_leaves_everything_untouched() {
        let config = make_standard_game_config();
        let lexicon = SetLexicon::new(["CAT"]);
        let mut game = started_game(&config, &lexicon);
        game.players[0].rack = b"QQQQQQQ".to_vec();
        let bag_before = game.bag.0.clone();
        let rack_before = game.players[0].rack.clone();
        assert_eq!(
            game.submit_placement(&placement(7, 6, false, "QAT"))
                .unwrap_err(),
            play::Rejection::InvalidWord {
                word: "QAT".to_string()
            }
        );
        assert_eq!(game.board.occupied_count(), 0);
        assert_eq!(game.players[0].score, 0);
        assert_eq!(game.players[0].rack, rack_before);
        assert_eq!(game.bag.0, bag_before);
        assert_eq!(game.current_player().name, "Alice");
    }

    #[test]
    fn rack_must_cover_the_new_tiles() {
        let config = make_standard_game_config();
        let lexicon = SetLexicon::new(["CAT"]);
        let mut game = started_game(&config, &lexicon);
        game.players[0].rack = b"CAXXXXX".to_vec();
        assert_eq!(
            game.submit_placement(&placement(7, 6, false, "CAT"))
                .unwrap_err(),
            play::Rejection::InsufficientTiles { letter: 'T' }
        );
        assert_eq!(game.board.occupied_count(), 0);
    }

    #[test]
    fn anchored_replay_consumes_only_the_new_tile() {
        let config = make_standard_game_config();
        let lexicon = SetLexicon::new(["CAT", "CATS"]);
        let mut game = started_game(&config, &lexicon);
        game.players[0].rack = b"CATXYZW".to_vec();
        game.submit_placement(&placement(7, 6, false, "CAT")).unwrap();
        // Bob extends with just the S; no C, A, or T required in his rack
        game.players[1].rack = b"SQQQQQQ".to_vec();
        let summary = game.submit_placement(&placement(7, 6, false, "CATS")).unwrap();
        assert_eq!(summary.player, "Bob");
        assert_eq!(summary.words, vec!["CATS".to_string()]);
        // no multiplier re-applies on the anchored squares
        assert_eq!(summary.score_delta, 3 + 1 + 1 + 1);
    }

    #[test]
    fn single_letter_play_scores_only_its_cross_word() {
        let config = make_standard_game_config();
        let lexicon = SetLexicon::new(["CAT", "TS"]);
        let mut game = started_game(&config, &lexicon);
        game.players[0].rack = b"CATXYZW".to_vec();
        game.submit_placement(&placement(7, 6, false, "CAT")).unwrap();
        // lone S below the T: the across run is length 1, so the only
        // word is the vertical TS, with S on a double-letter square
        game.players[1].rack = b"SQQQQQQ".to_vec();
        let summary = game.submit_placement(&placement(8, 8, false, "S")).unwrap();
        assert_eq!(summary.words, vec!["TS".to_string()]);
        assert_eq!(summary.score_delta, 1 + 1 * 2);
    }

    #[test]
    fn session_finishes_when_bag_and_rack_empty() {
        let config = make_standard_game_config();
        let lexicon = SetLexicon::new(["CAT"]);
        let mut game = started_game(&config, &lexicon);
        game.bag.0.clear();
        game.players[0].rack = b"CAT".to_vec();
        game.submit_placement(&placement(7, 6, false, "CAT")).unwrap();
        assert!(game.is_finished());
        assert_eq!(
            game.submit_placement(&placement(8, 6, false, "CAT"))
                .unwrap_err(),
            play::Rejection::GameNotStarted
        );
    }

    #[test]
    fn standings_rank_by_score_with_registration_tie_break() {
        let config = make_standard_game_config();
        let lexicon = SetLexicon::new(["CAT"]);
        let mut game = GameState::new(&config, &lexicon);
        game.add_player("Alice").unwrap();
        game.add_player("Bob").unwrap();
        game.add_player("Carol").unwrap();
        game.players[1].score = 20;
        assert_eq!(
            game.standings(),
            vec![
                ("Bob".to_string(), 20),
                ("Alice".to_string(), 0),
                ("Carol".to_string(), 0)
            ]
        );
    }

    #[test]
    fn turn_order_is_round_robin() {
        let config = make_standard_game_config();
        let lexicon = SetLexicon::new(["CAT", "DOG", "CD", "AO", "TG"]);
        let mut game = started_game(&config, &lexicon);
        game.players[0].rack = b"CATXXXX".to_vec();
        game.submit_placement(&placement(7, 6, false, "CAT")).unwrap();
        game.players[1].rack = b"DOGXXXX".to_vec();
        game.submit_placement(&placement(8, 6, false, "DOG")).unwrap();
        assert_eq!(game.current_player().name, "Alice");
    }
}
