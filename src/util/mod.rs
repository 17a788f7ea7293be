// Copyright (c) 2024 <Wei Li>.
//
// This source code is licensed under the GNU license found in the
// LICENSE file in the root directory of this source tree.

pub mod options;
pub mod results_dumper;

/// Environment variable holding extra options as a JSON array of strings.
pub const SEQDEMO_FLAGS: &str = "SEQDEMO_FLAGS";

/// Parses the value of `SEQDEMO_FLAGS`. A missing or malformed value yields no arguments.
pub fn flags_from_json(flags: &str) -> Vec<String> {
    serde_json::from_str(flags).unwrap_or_default()
}
