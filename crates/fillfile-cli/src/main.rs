//! fillfile - create a file with a given size, filled with a repeating
//! pattern or pseudo-random data
//!
//! # Usage
//!
//! ```bash
//! # 512 random bytes
//! fillfile 512 x.dat
//!
//! # 32 KB of zeros
//! fillfile -z 32k x.dat
//!
//! # a repeating hex pattern
//! fillfile -hde,ad,be,ef 1m x.dat
//! ```

use anyhow::{Context, Result};
use console::style;
use fillfile_core::{format_count, FillConfig, Filler, DEFAULT_CHUNK_SIZE};
use tracing_subscriber::EnvFilter;

mod args;
mod progress;

use args::{parse_args, ArgSyntax, Invocation, Parsed};

/// Validation or I/O failure
const EXIT_FAILURE: i32 = 1;

/// Help was shown; nothing was done
const EXIT_HELP: i32 = 2;

fn main() {
    // The option surface has no verbosity flags, so logging is env-driven
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .init();

    match parse_args(std::env::args().skip(1), &ArgSyntax::default()) {
        Ok(Parsed::Help) => {
            eprint!("{}", args::usage());
            std::process::exit(EXIT_HELP);
        }
        Ok(Parsed::Run(invocation)) => {
            if let Err(e) = run(&invocation) {
                eprintln!("{} {}", style("Error:").red().bold(), e);
                eprintln!("Usage: fillfile [options] <size> <file>  (try -? for help)");
                std::process::exit(EXIT_FAILURE);
            }
        }
        Err(e) => {
            eprintln!("{} {}", style("Error:").red().bold(), e);
            eprint!("{}", args::usage());
            std::process::exit(EXIT_FAILURE);
        }
    }
}

fn run(invocation: &Invocation) -> Result<()> {
    tracing::debug!(
        "Creating {} ({} bytes, {:?})",
        invocation.path.display(),
        invocation.size,
        invocation.policy
    );

    let mut out = std::fs::File::create(&invocation.path).with_context(|| {
        format!(
            "Failed to create output file: {}",
            invocation.path.display()
        )
    })?;

    let pb = progress::create_fill_progress_bar(invocation.size);
    let pb_clone = pb.clone();

    let mut filler = Filler::with_config(FillConfig::new().chunk_size(DEFAULT_CHUNK_SIZE))
        .on_progress(move |p| {
            pb_clone.set_position(p.bytes_written);
            pb_clone.set_message(format!("{}, ETA: {}", p.speed_display(), p.eta_display()));
        });

    let report = filler.fill(&mut out, invocation.size, &invocation.policy)?;

    // File::flush is a no-op; deferred writeback errors only show up at
    // sync/close time and must fail the run, not the drop
    out.sync_all().with_context(|| {
        format!(
            "Failed to close output file: {}",
            invocation.path.display()
        )
    })?;
    pb.finish_and_clear();

    println!("Created file with {} bytes.", format_count(report.bytes_written));
    Ok(())
}
