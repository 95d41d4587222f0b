//! Session-oriented run orchestration.

/// The mosaic session: catalog → extent → rows → top level → materialize.
pub mod run;

pub use run::{ComposeReport, MosaicOpts, MosaicSession};
