//! Script registry and the render-time merge protocol.
//!
//! A widget snapshots the registry, renders its row template (columns may
//! register scripts as a side effect), then diffs the registry against the
//! snapshot. New entries in the ready bucket are handed to the client for
//! replay per cloned row and removed from the page; everything else new is
//! left in place and reported as prelude.

mod merge;
mod registry;
mod snapshot;

pub use merge::*;
pub use registry::*;
pub use snapshot::*;
