//! memtest: patterned RAM diagnostic.
//!
//! Allocates the requested number of megabytes and runs passes of the
//! addressing, random, solid and checkerboard tests over it. The first
//! detected fault is printed and the process exits with status 1.
//!
//! - `memtest [MEGABYTES] [--passes N]`: run the test
//! - `memtest init-config [PATH] [--resolved]`: write a `memtest.toml`

mod commands;
mod progress;
mod terminal;

use std::io;
use std::path::Path;
use std::process;

use clap::ArgMatches;
use memtest_engine::{Error, Memtest, MemtestConfig, NativeWord, NoopProgress, RunSummary};
use tracing::{error, info};

use commands::{build_cli, resolve_config, write_config_file};
use progress::TextProgress;
use terminal::TerminalSize;

fn main() {
    let matches = build_cli().get_matches();

    // Initialise structured logging.
    let level = matches
        .get_one::<String>("log-level")
        .map(String::as_str)
        .unwrap_or("warn");
    tracing_subscriber::fmt()
        .with_max_level(
            level
                .parse::<tracing_subscriber::filter::LevelFilter>()
                .unwrap_or(tracing_subscriber::filter::LevelFilter::WARN),
        )
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    if let Some(("init-config", sub)) = matches.subcommand() {
        let path = sub
            .get_one::<String>("path")
            .map(String::as_str)
            .unwrap_or(memtest_engine::CONFIG_FILE_NAME);
        let resolved = sub.get_flag("resolved");
        process::exit(run_init_config(&matches, Path::new(path), resolved));
    }

    let config = match resolve_config(&matches) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            process::exit(e.exit_code());
        }
    };

    process::exit(run_memtest(&config));
}

fn run_init_config(matches: &ArgMatches, path: &Path, resolved: bool) -> i32 {
    match write_config_file(matches, path, resolved) {
        Ok(true) => {
            println!("Wrote {}", path.display());
            0
        }
        Ok(false) => {
            eprintln!("{} already exists, leaving it untouched", path.display());
            0
        }
        Err(e) => {
            eprintln!("{}", e);
            e.exit_code()
        }
    }
}

fn run_memtest(config: &MemtestConfig) -> i32 {
    info!(
        megabytes = config.megabytes,
        passes = config.passes,
        "allocating test buffer"
    );
    let mut memtest = match Memtest::<NativeWord>::new(config) {
        Ok(memtest) => memtest,
        Err(e) => {
            eprintln!("{}", e);
            return e.exit_code();
        }
    };

    let result = if config.progress {
        let mut progress = TextProgress::new(io::stdout(), TerminalSize::detect());
        memtest.run(&mut progress)
    } else {
        memtest.run(&mut NoopProgress)
    };

    match result {
        Ok(summary) => {
            print_passed(&summary);
            0
        }
        Err(Error::MemoryFault(fault)) => {
            println!("\n*** {}", fault);
            error!(seed = memtest.seed(), "run aborted on memory fault");
            1
        }
        Err(e) => {
            eprintln!("{}", e);
            e.exit_code()
        }
    }
}

fn print_passed(summary: &RunSummary) {
    info!(
        passes = summary.passes,
        bytes = summary.bytes,
        seed = summary.seed,
        "run complete"
    );
    println!("\nYour memory passed this test.");
    println!("Please if you are still in doubt use the following two tools:");
    println!("1) memtest86: http://www.memtest86.com/");
    println!("2) memtester: http://pyropus.ca/software/memtester/");
}
