use std::fs::File;
use std::path::Path;

use env_logger::{Builder, Env, Target};
use log::LevelFilter;

/// Where log records go. The interactive UI owns the terminal, so it logs
/// to a file; headless runs log to stderr.
#[derive(Debug, Clone, Copy)]
pub enum LogTarget<'a> {
    File(&'a Path),
    Stderr,
}

/// `--debug` forces `debug`; otherwise `RUST_LOG` applies, defaulting to `info`.
pub fn init_logging(target: LogTarget<'_>, debug: bool) -> std::io::Result<()> {
    let mut builder = Builder::from_env(Env::default().default_filter_or("info"));
    if debug {
        builder.filter_level(LevelFilter::Debug);
    }

    match target {
        LogTarget::File(path) => {
            let file = File::options().create(true).append(true).open(path)?;
            builder.target(Target::Pipe(Box::new(file)));
        }
        LogTarget::Stderr => {
            builder.target(Target::Stderr);
        }
    }

    // A second init (tests) keeps the first logger.
    let _ = builder.try_init();
    Ok(())
}
