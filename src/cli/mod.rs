//! Command Line Interface (CLI) layer for detprep.
//!
//! This module defines argument parsing (`args`), error types (`errors`),
//! and the orchestration logic (`runner`) for the `letterbox` and `frames`
//! subcommands. It wires user-provided options to the library functionality
//! exposed via `detprep::api`.
//!
//! If you are embedding detprep into another application, prefer using
//! the high-level `detprep::api` module instead of calling the CLI code.
pub mod args;
pub mod errors;
pub mod runner;

pub use args::CliArgs;
pub use runner::run;
