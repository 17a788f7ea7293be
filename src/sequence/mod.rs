// Copyright (c) 2024 <Wei Li>.
//
// This source code is licensed under the GNU license found in the
// LICENSE file in the root directory of this source tree.

//! The ordered integer sequence the demo builds, prints and searches.

use log::*;
use std::ops::Index;

pub mod printer;
pub mod search;

pub use search::SearchResult;

/// An ordered, growable sequence of integers.
///
/// Once built, element `i` equals `i` for every index in the sequence.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Sequence {
    data: Vec<i32>,
}

impl Index<usize> for Sequence {
    type Output = i32;

    fn index(&self, index: usize) -> &Self::Output {
        &self.data[index]
    }
}

impl<'a> IntoIterator for &'a Sequence {
    type Item = &'a i32;
    type IntoIter = std::slice::Iter<'a, i32>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

impl Sequence {
    pub fn new() -> Self {
        Self { data: Vec::new() }
    }

    /// Builds the sequence `0, 1, ..., upper_bound - 1`, appending one element at a time.
    /// A non-positive bound yields an empty sequence.
    pub fn build(upper_bound: i32) -> Self {
        let mut seq = Sequence::new();
        for i in 0..upper_bound {
            seq.push(i);
        }
        debug!("Built sequence of {} elements", seq.len());
        seq
    }

    #[inline]
    pub fn push(&mut self, value: i32) {
        self.data.push(value);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<i32> {
        self.data.get(index).copied()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, i32> {
        self.data.iter()
    }

    fn as_slice(&self) -> &[i32] {
        &self.data
    }

    /// Scans from the first element for `target`. The earliest match wins.
    pub fn find_value(&self, target: i32) -> SearchResult {
        match search::linear_find(self.as_slice(), &target) {
            Some(position) => SearchResult::Found {
                position,
                value: self.data[position],
            },
            None => SearchResult::NotFound,
        }
    }
}
