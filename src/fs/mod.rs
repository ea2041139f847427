//! Filesystem utilities for inidoc.
//!
//! Documents are saved through atomic writes so an interrupted save never
//! truncates an existing INI file.

pub mod atomic;

pub use atomic::atomic_write;
pub use atomic::atomic_write_file;
