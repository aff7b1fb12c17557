//! Path combination helpers.
//!
//! Fragments are joined with `/` as the only separator, relative paths can be
//! mapped against the directory of the running executable and directories can
//! be created on demand.

#[macro_use]
extern crate log;

pub mod base_dir;
pub mod config;
pub mod error;
pub mod file_utils;
pub mod layout;
pub mod path_builder;

pub use base_dir::{BaseDirError, BaseDirectory, ExecutableDirectory, FixedDirectory};
pub use file_utils::ensure_dir;
pub use layout::Layout;
pub use path_builder::{
    append_paths, combine, combine_with, fragments_of, PathFragment, PathMapper,
};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
