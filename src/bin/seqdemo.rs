// Copyright (c) 2024 <Wei Li>.
//
// This source code is licensed under the GNU license found in the
// LICENSE file in the root directory of this source tree.

//! The main routine of `seqdemo`.
//!
//! Builds the sequence, prints every element to standard error, then reports
//! whether the target value is present. The process always exits with 0.

use log::*;
use std::env;

use seqdemo::demo::SequenceDemo;
use seqdemo::util;
use seqdemo::util::options::DemoOptions;
use seqdemo::util::results_dumper;

fn main() {
    // Initialize loggers.
    if env::var("SEQDEMO_LOG").is_ok() {
        let e = env_logger::Env::new()
            .filter("SEQDEMO_LOG")
            .write_style("SEQDEMO_LOG_STYLE");
        env_logger::init_from_env(e);
    }

    // Get any options specified via the SEQDEMO_FLAGS environment variable
    let mut options = DemoOptions::default();
    let env_flags = env::var(util::SEQDEMO_FLAGS).unwrap_or_default();
    options.parse_from_args(&util::flags_from_json(&env_flags));

    // Let arguments supplied on the command line override the environment variable.
    let args = env::args().skip(1).collect::<Vec<_>>();
    options.parse_from_args(&args);
    info!("Demo Options: {:?}", options);

    let mut demo = SequenceDemo::new(options);
    let stderr = std::io::stderr();
    let result = match demo.run(&mut stderr.lock()) {
        Ok(result) => result,
        Err(e) => {
            error!("Unable to write diagnostics: {}", e);
            return;
        }
    };

    if let Some(sequence) = demo.sequence() {
        if let Err(e) = results_dumper::dump_results(&demo.options, sequence, &result) {
            error!("{:#}", e);
        }
    }
}
