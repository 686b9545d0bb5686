//! Queries translated and executed against scratch directories.
//! These need a GNU-compatible `find` on the PATH.

mod batch;
mod filesystem;

use std::{fs, path::Path};

pub fn write_file(dir: &Path, name: &str, len: usize) {
    fs::write(dir.join(name), "x".repeat(len)).unwrap();
}
