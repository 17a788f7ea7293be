// Copyright (c) 2024 <Wei Li>.
//
// This source code is licensed under the GNU license found in the
// LICENSE file in the root directory of this source tree.

//! Demo options.

use clap::error::ErrorKind;
use clap::{Arg, ArgMatches, Command};
use log::*;

const SEQDEMO_USAGE: &str = r#"seqdemo [OPTIONS]"#;

/// Creates the clap::Command metadata for argument parsing.
fn make_options_parser() -> Command<'static> {
    let parser = Command::new("seqdemo")
        .no_binary_name(true)
        .override_usage(SEQDEMO_USAGE)
        .version(env!("CARGO_PKG_VERSION"))
        .arg(Arg::new("upper-bound")
            .long("upper-bound")
            .takes_value(true)
            .allow_hyphen_values(true)
            .value_parser(clap::value_parser!(i32))
            .help("The exclusive upper bound of the built sequence [default: 100]."))
        .arg(Arg::new("target")
            .long("target")
            .takes_value(true)
            .allow_hyphen_values(true)
            .value_parser(clap::value_parser!(i32))
            .help("The value to search for [default: 81]."))
        .arg(Arg::new("dump-result")
            .long("dump-result")
            .takes_value(false)
            .help("Dump a JSON summary of the run to standard output."));
    parser
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DemoOptions {
    pub upper_bound: i32,
    pub target: i32,
    pub dump_result: bool,
}

impl Default for DemoOptions {
    fn default() -> Self {
        Self {
            upper_bound: 100,
            target: 81,
            dump_result: false,
        }
    }
}

impl DemoOptions {
    /// Parses options from a list of strings, leaving unspecified options untouched so
    /// that later sources override earlier ones. `--help` and `--version` print and
    /// exit; any other parse error is logged and the whole list is ignored.
    pub fn parse_from_args(&mut self, args: &[String]) {
        if let Err(e) = self.try_parse_from_args(args) {
            match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                    e.exit();
                }
                _ => {
                    error!("Ignoring invalid options {:?}: {}", args, e);
                }
            }
        }
    }

    pub fn try_parse_from_args(&mut self, args: &[String]) -> clap::Result<()> {
        let matches = make_options_parser().try_get_matches_from(args.iter())?;
        self.apply(&matches);
        Ok(())
    }

    fn apply(&mut self, matches: &ArgMatches) {
        if let Some(bound) = matches.get_one::<i32>("upper-bound") {
            self.upper_bound = *bound;
        }
        if let Some(target) = matches.get_one::<i32>("target") {
            self.target = *target;
        }
        if matches.contains_id("dump-result") {
            self.dump_result = true;
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn no_args_keeps_defaults() {
        let mut options = DemoOptions::default();
        options.try_parse_from_args(&[]).unwrap();
        assert_eq!(options, DemoOptions::default());
    }

    #[test]
    fn parse_all_options() {
        let mut options = DemoOptions::default();
        options
            .try_parse_from_args(&args(&["--upper-bound", "10", "--target", "-3", "--dump-result"]))
            .unwrap();
        assert_eq!(options.upper_bound, 10);
        assert_eq!(options.target, -3);
        assert!(options.dump_result);
    }

    #[test]
    fn later_args_override_earlier() {
        let mut options = DemoOptions::default();
        options.try_parse_from_args(&args(&["--target", "5", "--upper-bound", "7"])).unwrap();
        options.try_parse_from_args(&args(&["--target", "6"])).unwrap();
        assert_eq!(options.target, 6);
        assert_eq!(options.upper_bound, 7);
    }

    #[test]
    fn reject_bad_values() {
        let mut options = DemoOptions::default();
        assert!(options.try_parse_from_args(&args(&["--target", "abc"])).is_err());
        assert!(options.try_parse_from_args(&args(&["--unknown"])).is_err());
        assert_eq!(options, DemoOptions::default());
    }

    #[test]
    fn invalid_args_are_ignored() {
        let mut options = DemoOptions::default();
        options.parse_from_args(&args(&["--target", "12"]));
        options.parse_from_args(&args(&["extra"]));
        options.parse_from_args(&args(&["--bogus", "--target", "40"]));
        assert_eq!(options.target, 12);
        assert_eq!(options.upper_bound, 100);
        assert!(!options.dump_result);
    }
}
