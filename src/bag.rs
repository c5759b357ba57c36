// Copyright (C) 2020-2026 Andy Kurnia.

use super::alphabet;
use rand::prelude::*;

/// The pool of undrawn letters. Only shrinks; tiles are never put back.
pub struct Bag(pub Vec<u8>);

impl Bag {
    pub fn new(alphabet: &alphabet::Alphabet) -> Bag {
        let mut bag = Vec::with_capacity(alphabet.num_tiles() as usize);
        for letter in alphabet.letters() {
            for _ in 0..alphabet.freq(letter) {
                bag.push(letter);
            }
        }
        Bag(bag)
    }

    pub fn shuffle(&mut self, mut rng: &mut dyn RngCore) {
        self.0.shuffle(&mut rng);
    }

    pub fn pop(&mut self) -> Option<u8> {
        self.0.pop()
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Draw until the rack is at capacity or the bag runs dry.
    pub fn replenish(&mut self, rack: &mut Vec<u8>, rack_size: usize) {
        while rack.len() < rack_size {
            match self.pop() {
                Some(letter) => rack.push(letter),
                None => break,
            }
        }
    }
}

impl Clone for Bag {
    #[inline(always)]
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }

    #[inline(always)]
    fn clone_from(&mut self, source: &Self) {
        self.0.clone_from(&source.0);
    }
}
