// Copyright (c) 2024 <Wei Li>.
//
// This source code is licensed under the GNU license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use log::*;
use serde::Serialize;
use std::io::{BufWriter, Write};

use crate::sequence::{SearchResult, Sequence};
use crate::util::options::DemoOptions;

/// Summary of one run, as written by `--dump-result`.
#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    pub upper_bound: i32,
    pub length: usize,
    pub target: i32,
    pub found: bool,
    pub position: Option<usize>,
}

impl RunSummary {
    pub fn new(options: &DemoOptions, sequence: &Sequence, result: &SearchResult) -> Self {
        RunSummary {
            upper_bound: options.upper_bound,
            length: sequence.len(),
            target: options.target,
            found: result.is_found(),
            position: result.position(),
        }
    }
}

/// Writes the run summary to standard output when `--dump-result` is given.
pub fn dump_results(options: &DemoOptions, sequence: &Sequence, result: &SearchResult) -> Result<()> {
    if options.dump_result {
        info!("Dumping run summary...");
        let summary = RunSummary::new(options, sequence, result);
        write_summary(&summary, std::io::stdout().lock())?;
    }
    Ok(())
}

pub fn write_summary<W: Write>(summary: &RunSummary, writer: W) -> Result<()> {
    let mut writer = BufWriter::new(writer);
    serde_json::to_writer_pretty(&mut writer, summary).context("Unable to serialize run summary")?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}
