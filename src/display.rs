// Copyright (C) 2020-2026 Andy Kurnia.

use super::board;

#[inline(always)]
pub fn empty_label(board: &board::Board<'_>, row: i8, col: i8) -> char {
    if board.layout().is_star(row, col) {
        return '*';
    }
    let premium = board.multiplier_at(row, col);
    match premium.word_multiplier {
        3 => '=',
        2 => '-',
        _ => match premium.letter_multiplier {
            3 => '"',
            2 => '\'',
            _ => ' ',
        },
    }
}

#[inline(always)]
pub fn board_label(board: &board::Board<'_>, row: i8, col: i8) -> char {
    match board.letter_at(row, col) {
        Some(letter) => letter as char,
        None => empty_label(board, row, col),
    }
}

pub fn print_board(board: &board::Board<'_>) {
    let dim = board.dim();
    print!("  ");
    for c in 0..dim.cols {
        print!(" {}", ((c as u8) + 0x61) as char);
    }
    println!();
    print!("  +");
    for _ in 1..dim.cols {
        print!("--");
    }
    println!("-+");
    for r in 0..dim.rows {
        print!("{:2}|", r + 1);
        for c in 0..dim.cols {
            if c > 0 {
                print!(" ")
            }
            print!("{}", board_label(board, r, c));
        }
        println!("|{}", r + 1);
    }
    print!("  +");
    for _ in 1..dim.cols {
        print!("--");
    }
    println!("-+");
    print!("  ");
    for c in 0..dim.cols {
        print!(" {}", ((c as u8) + 0x61) as char);
    }
    println!();
}
