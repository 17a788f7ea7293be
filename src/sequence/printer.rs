// Copyright (c) 2024 <Wei Li>.
//
// This source code is licensed under the GNU license found in the
// LICENSE file in the root directory of this source tree.

use std::io::{Result, Write};

use super::{SearchResult, Sequence};

/// Label printed in front of each element.
pub const ELEMENT_LABEL: &str = "vector<int> -> ";

/// Writes one line per element, in index order.
pub fn print_all<W: Write>(seq: &Sequence, writer: &mut W) -> Result<()> {
    for value in seq {
        writeln!(writer, "{}{}", ELEMENT_LABEL, value)?;
    }
    writer.flush()
}

/// Reports a successful search. A miss produces no output.
pub fn report_search<W: Write>(result: &SearchResult, writer: &mut W) -> Result<()> {
    if let Some(value) = result.value() {
        writeln!(writer, "element {} found", value)?;
        writer.flush()?;
    }
    Ok(())
}
