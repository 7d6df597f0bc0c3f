//! # Series Assembly
//!
//! This module turns `.out` files into chart-ready stacks:
//!
//! 1. [`discover`] expands inputs into [`FileSource`]s (one per file version).
//! 2. [`ingest_file`] / [`ingest_all`] parse and downsample versions into
//!    [`FileVersion`]s.
//! 3. [`assemble_stacks`] groups the downsampled series into one [`Stack`]
//!    per selected parameter, with one colored [`Trace`] per active file
//!    version.
//!
//! [`Session`] keeps these steps together with the selection state of an
//! interactive plotting session.
//!
//! ## Stack Layout
//!
//! | Field | Value |
//! |-------|-------|
//! | `Trace::id` | `{file_key}__{version_index}__{parameter}` |
//! | `Trace::name` | file key, plus ` (n)` when the key has several versions |
//! | `Trace::color` | palette color of the file key, stable for the session |
//! | `Trace::visible` | `true` unless toggled from the legend |
//!
//! ## Example
//!
//! ```rust,no_run
//! use outplot::series::{discover, IngestConfig, Session};
//!
//! let mut session = Session::new(IngestConfig::default());
//! session.add_files(discover(["runs/"])?);
//!
//! for key in session.file_keys().to_vec() {
//!     for error in session.toggle_file(&key) {
//!         eprintln!("{error}");
//!     }
//! }
//! session.toggle_param("GenPwr");
//!
//! let stacks = session.stacks();
//! println!("{}", serde_json::to_string(&stacks).unwrap());
//! # Ok::<(), outplot::series::IngestError>(())
//! ```

mod assembly;
mod color;
mod error;
mod filter;
mod ingest;
mod session;
mod source;


pub use assembly::{assemble_stacks, trace_id, Stack, Trace, TracePoint};
pub use color::{ColorAssigner, PALETTE};
pub use error::IngestError;
pub use filter::{filter_names, wildcard_regex};
pub use ingest::{ingest_all, ingest_file, FileVersion, IngestConfig};
pub use session::Session;
pub use source::{discover, is_out_name, FileSource, OUT_SUFFIX};
