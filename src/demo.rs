// Copyright (c) 2024 <Wei Li>.
//
// This source code is licensed under the GNU license found in the
// LICENSE file in the root directory of this source tree.

//! The driver that runs the demo phases in order: build, print, search.

use log::*;
use std::io::{Result, Write};

use crate::sequence::printer;
use crate::sequence::{SearchResult, Sequence};
use crate::util::options::DemoOptions;

pub struct SequenceDemo {
    pub options: DemoOptions,
    sequence: Option<Sequence>,
}

impl SequenceDemo {
    pub fn new(options: DemoOptions) -> Self {
        SequenceDemo {
            options,
            sequence: None,
        }
    }

    /// The sequence produced by the build phase, if it has run.
    pub fn sequence(&self) -> Option<&Sequence> {
        self.sequence.as_ref()
    }

    /// Runs build, print and search against the given diagnostic writer and
    /// returns the search outcome.
    pub fn run<W: Write>(&mut self, diag: &mut W) -> Result<SearchResult> {
        info!("Building sequence with upper bound {}", self.options.upper_bound);
        let sequence = Sequence::build(self.options.upper_bound);

        info!("Printing {} elements", sequence.len());
        printer::print_all(&sequence, diag)?;

        info!("Searching for {}", self.options.target);
        let result = sequence.find_value(self.options.target);
        debug!("Search result: {:?}", result);
        printer::report_search(&result, diag)?;

        self.sequence = Some(sequence);
        Ok(result)
    }
}
