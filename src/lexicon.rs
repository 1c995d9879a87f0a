// Copyright (C) 2020-2026 Andy Kurnia.

use super::{alphabet, error};
use std::collections::HashSet;

// Words are given as rack tiles (blanks already resolved to their letters).
pub trait Lexicon {
    fn accepts(&self, word: &[u8]) -> bool;
}

// Anything goes.
pub struct AcceptAll;

impl Lexicon for AcceptAll {
    #[inline(always)]
    fn accepts(&self, _word: &[u8]) -> bool {
        true
    }
}

pub struct WordList {
    words: HashSet<Box<[u8]>>,
}

impl WordList {
    // one word per line. blank lines are skipped.
    pub fn from_text(alphabet: &alphabet::Alphabet, giant_string: &str) -> error::Returns<Self> {
        let mut words = HashSet::new();
        for (line_num, s) in (1..).zip(giant_string.lines()) {
            let s = s.trim();
            if s.is_empty() {
                continue;
            }
            let mut v = Vec::with_capacity(s.len());
            for c in s.chars() {
                let mut buf = [0u8; 4];
                match alphabet.board_tile_of(c.to_ascii_uppercase().encode_utf8(&mut buf)) {
                    Some(tile) => v.push(tile & 0x7f),
                    None => {
                        return_error!(format!("line {}: invalid tile {:?} in {:?}", line_num, c, s));
                    }
                }
            }
            words.insert(v.into_boxed_slice());
        }
        Ok(Self { words })
    }

    pub fn from_file(alphabet: &alphabet::Alphabet, filename: &str) -> error::Returns<Self> {
        Self::from_text(alphabet, &std::fs::read_to_string(filename)?)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Lexicon for WordList {
    #[inline(always)]
    fn accepts(&self, word: &[u8]) -> bool {
        self.words.contains(word)
    }
}
