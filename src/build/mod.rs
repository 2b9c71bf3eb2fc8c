//! Batch build system
//!
//! Turns a `sprites.toml` manifest into generated header files. The
//! unit of work is one header (a group of sprite tables emitted into a
//! single file):
//!
//! - **Discovery**: the manifest names every header and sprite; source
//!   images are resolved against the project image directory.
//! - **Conversion**: each sprite runs the pure pipeline
//!   load -> extract -> resample -> encode.
//! - **Emission**: a header's tables are rendered together and written
//!   in one shot. A header whose sprites failed is never written, so a
//!   broken sprite cannot compile into firmware as a half-empty table.
//!
//! Headers share no state, so [`ParallelBuild`] runs them concurrently.

pub mod context;
pub mod parallel;
pub mod pipeline;
pub mod result;

pub use context::*;
pub use parallel::*;
pub use pipeline::*;
pub use result::*;
