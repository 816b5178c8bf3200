//! # Fillfile Core
//!
//! Core library for the fillfile dummy-file creation tool.
//!
//! ## Modules
//!
//! - `size`: Parses size tokens with binary-unit suffixes (`32k`, `1m`, ...)
//! - `pattern`: Parses decimal/hex byte-sequence text into raw bytes
//! - `policy`: The data-source policy selecting what bytes get written
//! - `filler`: Buffered fill engine writing exactly the requested size
//! - `error`: Error types and result alias
//!
//! ## Example
//!
//! ```ignore
//! use fillfile_core::{FillConfig, FillPolicy, Filler};
//! use std::fs::File;
//!
//! let mut out = File::create("dummy.dat")?;
//! let policy = FillPolicy::Pattern(b"ab".to_vec());
//!
//! let mut filler = Filler::with_config(FillConfig::new().chunk_size(256 * 1024))
//!     .on_progress(|p| println!("{:.1}% - {}", p.percentage(), p.speed_display()));
//!
//! let report = filler.fill(&mut out, 1024 * 1024, &policy)?;
//! println!("Wrote {} bytes in {:?}", report.bytes_written, report.elapsed);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod filler;
pub mod pattern;
pub mod policy;
pub mod size;

pub use error::{Error, Result};
pub use filler::{
    format_count, format_duration, format_speed, FillConfig, FillProgress, FillReport, Filler,
    DEFAULT_CHUNK_SIZE, MAX_CHUNK_SIZE, MIN_CHUNK_SIZE,
};
pub use pattern::{parse_dec_bytes, parse_hex_bytes};
pub use policy::FillPolicy;
pub use size::parse_size;
