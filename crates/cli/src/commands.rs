//! Clap command tree and config resolution.
//!
//! The positional megabyte count and the flags override whatever the
//! optional `--config` file provides.

use std::path::Path;

use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use memtest_engine::{MemtestConfig, Result, CONFIG_FILE_NAME};

/// Build the complete CLI command tree.
pub fn build_cli() -> Command {
    Command::new("memtest")
        .about("Exercise a block of RAM with patterned writes and reads")
        .arg(
            Arg::new("megabytes")
                .value_name("MEGABYTES")
                .help("Megabytes of memory to test (default: 64)")
                .value_parser(value_parser!(usize)),
        )
        .arg(
            Arg::new("passes")
                .long("passes")
                .short('p')
                .value_name("N")
                .help("Number of passes; 0 or negative runs forever (default: 1)")
                .allow_negative_numbers(true)
                .value_parser(value_parser!(i64)),
        )
        .arg(
            Arg::new("seed")
                .long("seed")
                .value_name("SEED")
                .help("Seed for the random fill (default: random, logged)")
                .value_parser(value_parser!(u64)),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .value_name("FILE")
                .help("Read settings from a memtest.toml file"),
        )
        .arg(
            Arg::new("no-progress")
                .long("no-progress")
                .help("Do not draw the progress screen")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("log-level")
                .long("log-level")
                .value_name("LEVEL")
                .help("Log level written to stderr")
                .value_parser(["error", "warn", "info", "debug", "trace"])
                .default_value("warn"),
        )
        .subcommand(
            Command::new("init-config")
                .about("Write a commented default configuration file")
                .arg(
                    Arg::new("path")
                        .value_name("PATH")
                        .help("Where to write it")
                        .default_value(CONFIG_FILE_NAME),
                )
                .arg(
                    Arg::new("resolved")
                        .long("resolved")
                        .help("Write the settings resolved from --config and flags instead")
                        .action(ArgAction::SetTrue),
                ),
        )
}

/// Merge the config file (if any) with command-line overrides.
pub fn resolve_config(matches: &ArgMatches) -> Result<MemtestConfig> {
    let mut config = match matches.get_one::<String>("config") {
        Some(path) => MemtestConfig::from_file(Path::new(path))?,
        None => MemtestConfig::default(),
    };

    if let Some(&megabytes) = matches.get_one::<usize>("megabytes") {
        config.megabytes = megabytes;
    }
    if let Some(&passes) = matches.get_one::<i64>("passes") {
        config.passes = passes;
    }
    if let Some(&seed) = matches.get_one::<u64>("seed") {
        config.seed = Some(seed);
    }
    if matches.get_flag("no-progress") {
        config.progress = false;
    }

    config.validate()?;
    Ok(config)
}

/// Write a config file for `init-config`, never replacing an existing one.
///
/// With `resolved` the file holds the settings `resolve_config` produces for
/// `matches`; otherwise it is the commented default template. Returns `true`
/// if a file was written.
pub fn write_config_file(matches: &ArgMatches, path: &Path, resolved: bool) -> Result<bool> {
    if !resolved {
        return MemtestConfig::write_default_if_missing(path);
    }
    let config = resolve_config(matches)?;
    if path.exists() {
        return Ok(false);
    }
    config.write_to_file(path)?;
    Ok(true)
}
