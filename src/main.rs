use clap::Parser;
use log::{debug, info, LevelFilter};
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};
use splay_set::splay_tree::SplaySet;
use thiserror::Error;

#[derive(Debug, Parser)]
#[command(name = "splay-demo")]
#[command(about = "Fills a splay set, removes one key and prints the keys in order", long_about = None)]
struct Cli {
    /// Keys `0..N` are inserted in ascending order
    #[arg(long, value_name = "N", default_value_t = 50)]
    ascending: u32,

    /// Keys `M-1` down to `N` are inserted in descending order
    #[arg(long, value_name = "M", default_value_t = 100)]
    total: u32,

    /// Key removed before printing
    #[arg(long, value_name = "KEY", default_value_t = 27)]
    remove: u32,

    /// Verbosity of the log written to stderr
    #[arg(long, value_name = "LEVEL", default_value_t = LevelFilter::Warn)]
    log_level: LevelFilter,
}

#[derive(Debug, Error)]
enum DemoError {
    #[error("failed to initialize logger")]
    Logger(#[from] log::SetLoggerError),

    #[error("ascending count {ascending} exceeds total {total}")]
    InvalidRange { ascending: u32, total: u32 },

    #[error("key {0} is not in the set")]
    MissingKey(u32),
}

fn main() -> Result<(), DemoError> {
    let cli = Cli::parse();
    TermLogger::init(cli.log_level, Config::default(), TerminalMode::Stderr, ColorChoice::Auto)?;

    if cli.ascending > cli.total {
        return Err(DemoError::InvalidRange {
            ascending: cli.ascending,
            total: cli.total,
        });
    }

    let mut set = SplaySet::new();
    for key in 0..cli.ascending {
        set.add(key);
    }
    for key in (cli.ascending..cli.total).rev() {
        set.add(key);
    }
    info!("inserted {} keys", set.len());

    if !set.remove(&cli.remove) {
        return Err(DemoError::MissingKey(cli.remove));
    }
    debug!("removed {}, root is now {:?}", cli.remove, set.root());

    println!("{}", set);
    Ok(())
}
