//! Project path helpers for the CAISO interconnection queue notebooks.
//!
//! ```no_run
//! let (root, raw, processed, outputs) = caiso_queue::paths::resolve_paths()?.into_tuple();
//! # let _ = (root, raw, processed, outputs);
//! # Ok::<(), caiso_queue::paths::PathError>(())
//! ```

pub mod logging;
pub mod paths;
pub mod util;

pub use paths::{PathError, PathResolver, PathSet};
