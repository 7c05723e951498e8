//! Byte-exact concatenation of files and standard input.
//!
//! [`cat_file`] copies one named file to a writer and [`cat_stdin`] copies
//! the process's standard input. Output is always the exact byte sequence of
//! the input with nothing inserted, removed, or transformed.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

#[cfg(unix)]
mod map;

#[cfg(unix)]
pub use crate::map::FileMap;

/// Copies standard input to `out` until end-of-input.
///
/// Returns the number of bytes copied.
pub fn cat_stdin<W>(out: &mut W) -> io::Result<u64> where W: Write {
    let stdin = io::stdin();
    io::copy(&mut stdin.lock(), out)
}

/// Opens `path` for reading and copies its content to `out`.
///
/// The file handle is released when this returns, on success and on error.
/// Returns the number of bytes copied.
pub fn cat_file<P, W>(path: P, out: &mut W) -> io::Result<u64>
where P: AsRef<Path>, W: Write {
    let file = File::open(path)?;
    copy_file(file, out)
}

/// Regular files go through a read-only map and a single write; everything
/// else takes the streaming copy.
#[cfg(unix)]
fn copy_file<W>(mut file: File, out: &mut W) -> io::Result<u64> where W: Write {
    match FileMap::open(&file)? {
        Some(map) => {
            out.write_all(&map)?;
            Ok(map.len() as u64)
        }
        None => io::copy(&mut file, out),
    }
}

#[cfg(not(unix))]
fn copy_file<W>(mut file: File, out: &mut W) -> io::Result<u64> where W: Write {
    io::copy(&mut file, out)
}
