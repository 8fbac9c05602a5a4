//! Reads the text of a file picked through a file-selection input, optionally
//! requiring it to look like a CSV, and reports failures as localized values
//! instead of panics.

#[macro_use]
mod logging;

pub mod disk;
pub mod error;
pub mod loader;
pub mod messages;
pub mod selection;

pub use disk::{DiskFile, selection_from_paths};
pub use error::{ErrorKind, LoadFailure, LoadResult};
pub use loader::{FileCheck, FileTextLoader, LoaderConfig};
pub use messages::Locale;
pub use selection::{FileSelection, MemoryFile, PickedFile, SelectionRegistry, SelectionResolver};
