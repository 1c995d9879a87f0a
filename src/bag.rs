// Copyright (C) 2020-2026 Andy Kurnia.

use super::alphabet;
use rand::prelude::*;

pub struct Bag(pub Vec<u8>);

impl Bag {
    pub fn new(alphabet: &alphabet::Alphabet) -> Bag {
        let mut bag = Vec::with_capacity(alphabet.num_tiles() as usize);
        for tile in 0..alphabet.len() {
            for _ in 0..alphabet.freq(tile) {
                bag.push(tile);
            }
        }
        Bag(bag)
    }

    pub fn empty() -> Bag {
        Bag(Vec::new())
    }

    pub fn shuffle(&mut self, rng: &mut dyn RngCore) {
        self.0.shuffle(rng);
    }

    pub fn pop(&mut self) -> Option<u8> {
        self.0.pop()
    }

    // take these rack tiles out, wherever they are. false if any is missing.
    pub fn remove_tiles<II: IntoIterator<Item = u8>>(&mut self, tiles: II) -> bool {
        let mut all_found = true;
        for tile in tiles {
            match self.0.iter().rposition(|&t| t == tile) {
                Some(pos) => {
                    self.0.swap_remove(pos);
                }
                None => all_found = false,
            }
        }
        all_found
    }

    pub fn replenish(&mut self, rack: &mut Vec<u8>, rack_size: usize) {
        for _ in 0..rack_size.saturating_sub(rack.len()) {
            match self.pop() {
                Some(tile) => rack.push(tile),
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

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    #[test]
    fn replenish_stops_when_bag_runs_out() {
        let alphabet = alphabet::make_english_alphabet();
        let mut bag = Bag::new(&alphabet);
        bag.shuffle(&mut ChaCha20Rng::seed_from_u64(7));
        assert_eq!(bag.0.len(), 100);
        let mut rack = Vec::new();
        bag.replenish(&mut rack, 7);
        assert_eq!(rack.len(), 7);
        assert_eq!(bag.0.len(), 93);

        let mut small = Bag(vec![1, 2]);
        let mut rack = vec![5];
        small.replenish(&mut rack, 7);
        assert_eq!(rack, [5, 2, 1]);
        assert!(small.0.is_empty());
    }

    #[test]
    fn removes_what_is_there() {
        let mut bag = Bag(vec![1, 2, 2, 3]);
        assert!(bag.remove_tiles([2, 3]));
        bag.0.sort_unstable();
        assert_eq!(bag.0, [1, 2]);
        assert!(!bag.remove_tiles([4]));
    }
}
