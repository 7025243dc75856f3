//! Conversion between native paths and a portable byte string.
//!
//! Unix paths already are byte strings and pass through untouched, including
//! bytes that are not valid UTF-8. Windows paths are UTF-16 and travel as
//! UTF-8. Unpaired surrogates become U+FFFD on the way out, and invalid UTF-8
//! becomes U+FFFD on the way in.

use std::path::{Path, PathBuf};

/// Encode a native path as a portable byte string.
#[cfg(unix)]
pub fn native_string_from_path(path: &Path) -> Vec<u8> {
    use std::os::unix::ffi::OsStrExt;
    path.as_os_str().as_bytes().to_vec()
}

/// Encode a native path as a portable byte string.
#[cfg(windows)]
pub fn native_string_from_path(path: &Path) -> Vec<u8> {
    use std::os::windows::ffi::OsStrExt;
    let wide: Vec<u16> = path.as_os_str().encode_wide().collect();
    String::from_utf16_lossy(&wide).into_bytes()
}

/// Encode a native path as a portable byte string.
#[cfg(not(any(unix, windows)))]
pub fn native_string_from_path(path: &Path) -> Vec<u8> {
    path.to_string_lossy().into_owned().into_bytes()
}

/// Rebuild a native path from a portable byte string.
#[cfg(unix)]
pub fn path_from_native_string(bytes: impl AsRef<[u8]>) -> PathBuf {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;
    PathBuf::from(OsStr::from_bytes(bytes.as_ref()))
}

/// Rebuild a native path from a portable byte string.
#[cfg(windows)]
pub fn path_from_native_string(bytes: impl AsRef<[u8]>) -> PathBuf {
    use std::ffi::OsString;
    use std::os::windows::ffi::OsStringExt;
    let text = String::from_utf8_lossy(bytes.as_ref());
    let wide: Vec<u16> = text.encode_utf16().collect();
    PathBuf::from(OsString::from_wide(&wide))
}

/// Rebuild a native path from a portable byte string.
#[cfg(not(any(unix, windows)))]
pub fn path_from_native_string(bytes: impl AsRef<[u8]>) -> PathBuf {
    PathBuf::from(String::from_utf8_lossy(bytes.as_ref()).into_owned())
}
