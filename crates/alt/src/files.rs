//! Whole-file read and write helpers.
//!
//! Failures are reported as [`UtilError`] and also logged at `ERRO` through
//! the global logger, so fire-and-forget callers still leave a trace.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

use alt_log::alt_err;

use crate::error::{Result, UtilError};

/// Reads a whole file as UTF-8 text.
pub fn file_read(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|e| {
        alt_err!("Issues opening file [r]: {}", path.display());
        UtilError::io(path, e)
    })?;
    String::from_utf8(bytes).map_err(|source| UtilError::InvalidUtf8 {
        path: path.to_path_buf(),
        source,
    })
}

/// Appends `data` to `path`, creating the file if needed.
pub fn file_write_append(path: impl AsRef<Path>, data: impl AsRef<[u8]>) -> Result<()> {
    let mut options = OpenOptions::new();
    options.create(true).append(true);
    file_write(path.as_ref(), data.as_ref(), &options)
}

/// Replaces the content of `path` with `data`, creating the file if needed.
pub fn file_write_trunc(path: impl AsRef<Path>, data: impl AsRef<[u8]>) -> Result<()> {
    let mut options = OpenOptions::new();
    options.create(true).write(true).truncate(true);
    file_write(path.as_ref(), data.as_ref(), &options)
}

fn file_write(path: &Path, data: &[u8], options: &OpenOptions) -> Result<()> {
    if data.is_empty() {
        alt_err!("[file_write] Invalid data: {}", path.display());
        return Err(UtilError::EmptyWrite(path.to_path_buf()));
    }

    let mut file = options.open(path).map_err(|e| {
        alt_err!("[file_write] Opening file: {}", path.display());
        UtilError::io(path, e)
    })?;
    file.write_all(data).map_err(|e| UtilError::io(path, e))
}

/// Checks the text after the last `.` of `path` against `ext`, ignoring
/// ASCII case. A name without any `.` is compared whole.
///
/// ```rust
/// use alt::file_check_extension;
///
/// assert!(file_check_extension("shaders/basic.GLSL", "glsl"));
/// assert!(!file_check_extension("archive.tar.gz", "tar"));
/// ```
pub fn file_check_extension(path: &str, ext: &str) -> bool {
    let suffix = path.rsplit_once('.').map_or(path, |(_, suffix)| suffix);
    suffix.eq_ignore_ascii_case(ext)
}
