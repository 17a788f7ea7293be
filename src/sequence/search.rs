// Copyright (c) 2024 <Wei Li>.
//
// This source code is licensed under the GNU license found in the
// LICENSE file in the root directory of this source tree.

use itertools::Itertools;

/// Outcome of a linear search. A miss is a valid outcome, not an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchResult {
    Found { position: usize, value: i32 },
    NotFound,
}

impl SearchResult {
    pub fn is_found(&self) -> bool {
        matches!(self, SearchResult::Found { .. })
    }

    pub fn position(&self) -> Option<usize> {
        match self {
            SearchResult::Found { position, .. } => Some(*position),
            SearchResult::NotFound => None,
        }
    }

    pub fn value(&self) -> Option<i32> {
        match self {
            SearchResult::Found { value, .. } => Some(*value),
            SearchResult::NotFound => None,
        }
    }
}

/// Returns the position of the first element equal to `target`, scanning in order.
pub fn linear_find<T: PartialEq>(elems: &[T], target: &T) -> Option<usize> {
    elems
        .iter()
        .find_position(|elem| *elem == target)
        .map(|(pos, _)| pos)
}

#[cfg(test)]
mod test {
    use super::*;
    use rand::Rng;

    #[test]
    fn linear_find_test() {
        let elems = vec!["a", "b", "c", "b"];
        assert_eq!(linear_find(&elems, &"a"), Some(0));
        assert_eq!(linear_find(&elems, &"b"), Some(1));
        assert_eq!(linear_find(&elems, &"z"), None);
        assert_eq!(linear_find::<u8>(&[], &0), None);
    }

    #[test]
    fn random_hits_and_misses() {
        let elems: Vec<i32> = (0..100).collect();
        let mut rng = rand::thread_rng();
        for _ in 0..50 {
            let hit = rng.gen_range(0..100);
            assert_eq!(linear_find(&elems, &hit), Some(hit as usize));
            let miss = rng.gen_range(100..10_000);
            assert_eq!(linear_find(&elems, &miss), None);
            assert_eq!(linear_find(&elems, &-miss), None);
        }
    }

    #[test]
    fn result_accessors() {
        let found = SearchResult::Found { position: 81, value: 81 };
        assert!(found.is_found());
        assert_eq!(found.value(), Some(81));
        assert!(!SearchResult::NotFound.is_found());
        assert_eq!(SearchResult::NotFound.position(), None);
    }
}
