use std::fs::File;
use std::io;
use std::ops::Deref;
use std::os::unix::io::AsRawFd;
use std::{ptr, slice};

/// A read-only memory map of an open file.
///
/// Dereferences to the mapped bytes and unmaps on drop.
pub struct FileMap {
    ptr: *mut libc::c_void,
    len: usize,
}

impl FileMap {

    /// Maps `file` read-only from offset zero to its current length.
    ///
    /// Returns `Ok(None)` when the file cannot usefully be mapped: it is not
    /// a regular file, it is empty (zero-length mappings are invalid), or its
    /// length does not fit the address space. A mapping the filesystem
    /// refuses (procfs and some network filesystems do) is also `Ok(None)`
    /// rather than an error, so callers can fall back to a streaming copy.
    pub fn open(file: &File) -> io::Result<Option<FileMap>> {
        let metadata = file.metadata()?;
        if !metadata.is_file() || metadata.len() == 0 {
            return Ok(None);
        }
        if metadata.len() > usize::max_value() as u64 {
            return Ok(None);
        }
        let len = metadata.len() as usize;

        let ptr = unsafe {
            libc::mmap(ptr::null_mut(),
                       len as libc::size_t,
                       libc::PROT_READ,
                       libc::MAP_SHARED,
                       file.as_raw_fd(),
                       0)
        };

        if ptr == libc::MAP_FAILED {
            Ok(None)
        } else {
            Ok(Some(FileMap {
                ptr: ptr,
                len: len,
            }))
        }
    }

    /// Returns the length of the mapping in bytes.
    pub fn len(&self) -> usize {
        self.len
    }
}

impl Deref for FileMap {

    type Target = [u8];

    fn deref(&self) -> &[u8] {
        unsafe { slice::from_raw_parts(self.ptr as *const u8, self.len) }
    }
}

impl Drop for FileMap {
    fn drop(&mut self) {
        unsafe {
            assert!(libc::munmap(self.ptr, self.len as libc::size_t) == 0,
                    "unable to unmap file: {}", io::Error::last_os_error());
        }
    }
}

unsafe impl Send for FileMap { }
unsafe impl Sync for FileMap { }

#[cfg(test)]
mod test {
    extern crate tempdir;

    use std::fs::{self, File};

    use super::*;

    #[test]
    fn map_file() {
        let tempdir = tempdir::TempDir::new("fcat").unwrap();
        let path = tempdir.path().join("data");
        fs::write(&path, b"some bytes\x00\xff").unwrap();

        let file = File::open(&path).unwrap();
        let map = FileMap::open(&file).unwrap().unwrap();

        assert_eq!(12, map.len());
        assert_eq!(b"some bytes\x00\xff", &map[..]);
    }

    // Zero-length mappings are invalid, so an empty file is unmappable.
    #[test]
    fn empty_file_is_not_mapped() {
        let tempdir = tempdir::TempDir::new("fcat").unwrap();
        let path = tempdir.path().join("empty");
        fs::write(&path, b"").unwrap();

        let file = File::open(&path).unwrap();
        assert!(FileMap::open(&file).unwrap().is_none());
    }

    #[test]
    fn directory_is_not_mapped() {
        let tempdir = tempdir::TempDir::new("fcat").unwrap();

        let file = File::open(tempdir.path()).unwrap();
        assert!(FileMap::open(&file).unwrap().is_none());
    }
}
