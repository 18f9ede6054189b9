//
// lib.rs
// dicom-manager
//
// Exposes the crate's modules and re-exports the CLI entry point for both binary and library consumers.
//

// Public surface of the library: each module mirrors a CLI verb or shared utility.
pub mod anonymize;
pub mod cli;
pub mod dicomdir;
pub mod dump;
pub mod error;
pub mod locate;
pub mod models;
pub mod modify;
pub mod read;
pub mod rewrite;

pub use cli::{run as run_cli, Cli, Commands};
pub use error::ManagerError;
