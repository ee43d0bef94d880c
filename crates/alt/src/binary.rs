//! Raw byte helpers.

use std::fs;
use std::path::Path;

use crate::error::{Result, UtilError};

/// Reads a whole file as bytes.
pub fn bin_read(path: impl AsRef<Path>) -> Result<Vec<u8>> {
    let path = path.as_ref();
    fs::read(path).map_err(|e| UtilError::io(path, e))
}

/// Checks whether `bin` starts with `magic`.
///
/// An empty `magic` never matches, nor does input shorter than it.
///
/// ```rust
/// use alt::bin_check_magic;
///
/// let png = [0x89, b'P', b'N', b'G', 0x0D, 0x0A];
/// assert!(bin_check_magic(&png, &[0x89, b'P', b'N', b'G']));
/// assert!(!bin_check_magic(&png, &[]));
/// ```
pub fn bin_check_magic(bin: &[u8], magic: &[u8]) -> bool {
    !magic.is_empty() && bin.starts_with(magic)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_magic_match() {
        assert!(bin_check_magic(b"GIF89a...", b"GIF8"));
        assert!(bin_check_magic(b"GIF8", b"GIF8"));
    }

    #[test]
    fn test_magic_mismatch() {
        assert!(!bin_check_magic(b"GIF89a", b"\x89PNG"));
        assert!(!bin_check_magic(b"GI", b"GIF8"));
        assert!(!bin_check_magic(b"", b"G"));
        assert!(!bin_check_magic(b"", b""));
    }

    #[test]
    fn test_read_missing_file() {
        let err = bin_read("definitely/not/here.bin").unwrap_err();
        assert!(matches!(err, UtilError::Io { .. }));
        assert!(err.to_string().contains("here.bin"));
    }
}
