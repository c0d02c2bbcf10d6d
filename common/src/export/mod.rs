//! Export core modules shared by the CLI.

#[cfg(feature = "excel")]
pub mod excel_core;
