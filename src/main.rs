// Copyright (C) 2020-2026 Andy Kurnia.

use gridwords::{display, error, game_config, game_state, lexicon, play, return_error};
use rand::SeedableRng;

// fallback lexicon so the shell is playable without a word list
static SAMPLE_WORDS: &[&str] = &[
    "AD", "AN", "AT", "AX", "BE", "BY", "CAB", "CAR", "CAT", "CATS", "COG", "DIG", "DOG", "DOGS",
    "EAR", "EAT", "GO", "HAT", "HATS", "IT", "NO", "ON", "OX", "RAT", "RATS", "SAT", "SO", "TAR",
    "TO", "TOGA", "WORD", "WORDS",
];

fn parse_coord(s: &str) -> Option<i8> {
    s.parse::<i8>().ok()
}

fn parse_direction(s: &str) -> Option<bool> {
    match s {
        "across" | "a" | "h" => Some(false),
        "down" | "d" | "v" => Some(true),
        _ => None,
    }
}

fn main() -> error::Returns<()> {
    let _logger = flexi_logger::Logger::try_with_env_or_str("info")?.start()?;

    let lexicon = match std::env::args().nth(1) {
        Some(path) => {
            let whole_file = std::fs::read_to_string(&path)?;
            lexicon::SetLexicon::new(whole_file.lines())
        }
        None => {
            println!("no word list given, using the built-in sample lexicon");
            lexicon::SetLexicon::new(SAMPLE_WORDS.iter().copied())
        }
    };
    if lexicon.is_empty() {
        return_error!("lexicon has no words".to_string());
    }
    println!("lexicon: {} words", lexicon.len());

    let config = game_config::make_standard_game_config();
    let mut game = game_state::GameState::new(&config, &lexicon);
    let mut json_mode = false;

    let mut rl = rustyline::DefaultEditor::new()?;
    loop {
        match rl.readline(">> ") {
            Ok(line) => {
                let _ = rl.add_history_entry(line.as_str());
                let strings = match shell_words::split(&line) {
                    Ok(strings) => strings,
                    Err(err) => {
                        println!("Bad quoting: {err:?}");
                        continue;
                    }
                };
                if strings.is_empty() {
                    continue;
                }
                match strings[0].as_str() {
                    "help" => {
                        println!("addplayer NAME");
                        println!("start [SEED]");
                        println!("play ROW COL across|down LETTERS   (0-based coordinates)");
                        println!("board");
                        println!("rack");
                        println!("standings");
                        println!("json on|off");
                        println!("exit");
                    }
                    "exit" => {
                        break;
                    }
                    "addplayer" => {
                        if strings.len() != 2 {
                            println!("need a name");
                            continue;
                        }
                        match game.add_player(&strings[1]) {
                            Ok(()) => println!("registered {}", strings[1]),
                            Err(rejection) => println!("{rejection}"),
                        }
                    }
                    "start" => {
                        let mut rng = match strings.get(1) {
                            Some(seed) => match seed.parse::<u64>() {
                                Ok(seed) => rand_chacha::ChaCha20Rng::seed_from_u64(seed),
                                Err(_) => {
                                    println!("seed must be a number");
                                    continue;
                                }
                            },
                            None => rand_chacha::ChaCha20Rng::from_os_rng(),
                        };
                        match game.start_game(&mut rng) {
                            Ok(()) => println!("{} to move", game.current_player().name),
                            Err(rejection) => println!("{rejection}"),
                        }
                    }
                    "play" => {
                        let parsed = if strings.len() == 5 {
                            match (
                                parse_coord(&strings[1]),
                                parse_coord(&strings[2]),
                                parse_direction(&strings[3]),
                            ) {
                                (Some(row), Some(col), Some(down)) => Some((row, col, down)),
                                _ => None,
                            }
                        } else {
                            None
                        };
                        let Some((row, col, down)) = parsed else {
                            println!("usage: play ROW COL across|down LETTERS");
                            continue;
                        };
                        let placement = play::Placement {
                            row,
                            col,
                            down,
                            letters: strings[4].bytes().collect(),
                        };
                        match game.submit_placement(&placement) {
                            Ok(summary) => {
                                if json_mode {
                                    println!("{}", serde_json::to_string(&summary)?);
                                } else {
                                    println!(
                                        "{} scored {} with {}",
                                        summary.player,
                                        summary.score_delta,
                                        summary.words.join(", ")
                                    );
                                }
                                if game.is_finished() {
                                    println!("game over");
                                    for (name, score) in game.standings() {
                                        println!("{score:>5} {name}");
                                    }
                                } else {
                                    println!("{} to move", game.current_player().name);
                                }
                            }
                            Err(rejection) => {
                                if json_mode {
                                    println!("{}", serde_json::to_string(&rejection)?);
                                } else {
                                    println!("rejected: {rejection}");
                                }
                            }
                        }
                    }
                    "board" => {
                        display::print_board(&game.board_snapshot());
                    }
                    "rack" => {
                        if game.players.is_empty() {
                            println!("no players yet");
                        } else {
                            let player = game.current_player();
                            let rack: String =
                                player.rack.iter().map(|&letter| letter as char).collect();
                            println!("{}: {}", player.name, rack);
                        }
                    }
                    "standings" => {
                        for (name, score) in game.standings() {
                            println!("{score:>5} {name}");
                        }
                    }
                    "json" => match strings.get(1).map(String::as_str) {
                        Some("on") => json_mode = true,
                        Some("off") => json_mode = false,
                        _ => println!("json on|off"),
                    },
                    _ => {
                        println!("invalid input, help for help");
                    }
                }
            }
            Err(rustyline::error::ReadlineError::Interrupted) => {
                println!("CTRL-C");
                break;
            }
            Err(rustyline::error::ReadlineError::Eof) => {
                println!("CTRL-D");
                break;
            }
            Err(err) => {
                println!("Error: {err:?}");
                break;
            }
        }
    }

    Ok(())
}
