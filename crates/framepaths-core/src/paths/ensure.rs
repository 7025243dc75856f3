//! Directory creation and verification utilities.
//!
//! `ensure_path_exists` walks a path one component at a time and creates the
//! segments that are missing. The filesystem is reached through
//! [`DirectoryProbe`] so the walk can be observed in tests.

use std::fs::{self, OpenOptions};
use std::io::{self, ErrorKind, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use super::error::PathError;

/// The two filesystem queries the ensure walk needs.
pub trait DirectoryProbe {
    /// Whether `path` exists. Errors are classified by the caller.
    fn try_exists(&self, path: &Path) -> io::Result<bool>;

    /// Create exactly one directory; parents must already exist.
    fn create_dir(&self, path: &Path) -> io::Result<()>;
}

/// [`DirectoryProbe`] backed by `std::fs`.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdFilesystem;

impl DirectoryProbe for StdFilesystem {
    fn try_exists(&self, path: &Path) -> io::Result<bool> {
        path.try_exists()
    }

    fn create_dir(&self, path: &Path) -> io::Result<()> {
        fs::create_dir(path)
    }
}

/// Make sure every prefix of `path` exists as a directory.
///
/// See [`ensure_path_exists_with`] for the exact rules.
pub fn ensure_path_exists(path: &Path) -> Result<(), PathError> {
    ensure_path_exists_with(&StdFilesystem, path)
}

/// Walk `path` left to right and create each missing segment.
///
/// For every accumulated prefix the probe is asked whether it exists:
/// - present: move on to the next segment
/// - absent (`Ok(false)` or `NotFound`): create that single segment
/// - `PermissionDenied`: the segment is presumed present and is not created
/// - anything else: the walk stops with [`PathError::EnsureFailed`]
///
/// A failed creation does not stop the walk. It is logged, and a later probe
/// or the caller's own file access will report the real problem. A path with
/// N components costs at most N probes and N creations.
pub fn ensure_path_exists_with<P>(probe: &P, path: &Path) -> Result<(), PathError>
where
    P: DirectoryProbe + ?Sized,
{
    let mut prefix = PathBuf::new();

    for component in path.components() {
        prefix.push(component);

        let exists = match probe.try_exists(&prefix) {
            Ok(exists) => exists,
            Err(e) => match e.kind() {
                ErrorKind::PermissionDenied => {
                    debug!(path = %prefix.display(), "no access to probe segment, assuming it exists");
                    continue;
                }
                ErrorKind::NotFound => false,
                _ => {
                    return Err(PathError::EnsureFailed {
                        path: prefix,
                        source: e,
                    });
                }
            },
        };

        if !exists {
            debug!(path = %prefix.display(), "creating directory");
            match probe.create_dir(&prefix) {
                Ok(()) => {}
                // Someone else created it between the probe and now.
                Err(e) if e.kind() == ErrorKind::AlreadyExists => {}
                Err(e) => {
                    warn!(path = %prefix.display(), error = %e, "failed to create directory");
                }
            }
        }
    }

    Ok(())
}

/// Verify a directory is writable by attempting to create a test file.
pub fn verify_writable(path: &Path) -> Result<(), PathError> {
    if path.exists() && !path.is_dir() {
        return Err(PathError::NotADirectory(path.to_path_buf()));
    }

    let test_file = path.join(".framepaths_write_test");
    let result = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(&test_file);

    match result {
        Ok(mut file) => {
            file.write_all(b"test")
                .map_err(|e| PathError::NotWritable {
                    path: path.to_path_buf(),
                    reason: e.to_string(),
                })?;
            drop(file);
            let _ = fs::remove_file(&test_file);
            Ok(())
        }
        Err(err) => Err(PathError::NotWritable {
            path: path.to_path_buf(),
            reason: err.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::HashMap;
    use tempfile::tempdir;

    /// In-memory probe that records every call it receives.
    #[derive(Default)]
    struct RecordingProbe {
        existing: RefCell<Vec<PathBuf>>,
        probe_errors: HashMap<PathBuf, ErrorKind>,
        create_errors: HashMap<PathBuf, ErrorKind>,
        probed: RefCell<Vec<PathBuf>>,
        created: RefCell<Vec<PathBuf>>,
    }

    impl RecordingProbe {
        fn with_existing(paths: &[&str]) -> Self {
            Self {
                existing: RefCell::new(paths.iter().map(PathBuf::from).collect()),
                ..Self::default()
            }
        }

        fn fail_probe(mut self, path: &str, kind: ErrorKind) -> Self {
            self.probe_errors.insert(PathBuf::from(path), kind);
            self
        }

        fn fail_create(mut self, path: &str, kind: ErrorKind) -> Self {
            self.create_errors.insert(PathBuf::from(path), kind);
            self
        }
    }

    impl DirectoryProbe for RecordingProbe {
        fn try_exists(&self, path: &Path) -> io::Result<bool> {
            self.probed.borrow_mut().push(path.to_path_buf());
            if let Some(kind) = self.probe_errors.get(path) {
                return Err(io::Error::from(*kind));
            }
            Ok(self.existing.borrow().iter().any(|p| p == path))
        }

        fn create_dir(&self, path: &Path) -> io::Result<()> {
            self.created.borrow_mut().push(path.to_path_buf());
            if let Some(kind) = self.create_errors.get(path) {
                return Err(io::Error::from(*kind));
            }
            self.existing.borrow_mut().push(path.to_path_buf());
            Ok(())
        }
    }

    #[test]
    fn creates_only_missing_segments() {
        let probe = RecordingProbe::with_existing(&["/", "/opt", "/opt/app"]);
        ensure_path_exists_with(&probe, Path::new("/opt/app/TeknoParrot/Documents")).unwrap();

        assert_eq!(
            *probe.created.borrow(),
            vec![
                PathBuf::from("/opt/app/TeknoParrot"),
                PathBuf::from("/opt/app/TeknoParrot/Documents"),
            ]
        );
    }

    #[test]
    fn probes_and_creates_at_most_once_per_component() {
        let path = Path::new("/a/b/c/d");
        let probe = RecordingProbe::default();
        ensure_path_exists_with(&probe, path).unwrap();

        let depth = path.components().count();
        assert_eq!(probe.probed.borrow().len(), depth);
        assert!(probe.created.borrow().len() <= depth);
    }

    #[test]
    fn permission_denied_segment_is_skipped_not_created() {
        let probe = RecordingProbe::with_existing(&["/"])
            .fail_probe("/locked", ErrorKind::PermissionDenied);
        ensure_path_exists_with(&probe, Path::new("/locked/inner")).unwrap();

        let created = probe.created.borrow();
        assert!(!created.contains(&PathBuf::from("/locked")));
        assert!(created.contains(&PathBuf::from("/locked/inner")));
        assert!(probe.probed.borrow().contains(&PathBuf::from("/locked/inner")));
    }

    #[test]
    fn failed_create_does_not_stop_walk() {
        let probe = RecordingProbe::with_existing(&["/"])
            .fail_create("/full", ErrorKind::StorageFull);
        ensure_path_exists_with(&probe, Path::new("/full/deeper")).unwrap();

        assert!(probe.probed.borrow().contains(&PathBuf::from("/full/deeper")));
        assert_eq!(
            *probe.created.borrow(),
            vec![PathBuf::from("/full"), PathBuf::from("/full/deeper")]
        );
    }

    #[test]
    fn concurrent_creator_is_not_an_error() {
        let probe = RecordingProbe::with_existing(&["/"])
            .fail_create("/raced", ErrorKind::AlreadyExists);
        ensure_path_exists_with(&probe, Path::new("/raced/inner")).unwrap();

        assert_eq!(probe.probed.borrow().len(), 3);
        assert!(probe.created.borrow().contains(&PathBuf::from("/raced/inner")));
    }

    #[test]
    fn not_found_error_is_treated_as_absent() {
        let probe =
            RecordingProbe::with_existing(&["/"]).fail_probe("/gone", ErrorKind::NotFound);
        ensure_path_exists_with(&probe, Path::new("/gone")).unwrap();
        assert_eq!(*probe.created.borrow(), vec![PathBuf::from("/gone")]);
    }

    #[test]
    fn unexpected_probe_error_aborts_walk() {
        let probe = RecordingProbe::with_existing(&["/"])
            .fail_probe("/broken", ErrorKind::InvalidData);
        let err = ensure_path_exists_with(&probe, Path::new("/broken/deeper")).unwrap_err();

        match err {
            PathError::EnsureFailed { path, .. } => assert_eq!(path, PathBuf::from("/broken")),
            other => panic!("unexpected error: {other}"),
        }
        assert!(!probe.probed.borrow().contains(&PathBuf::from("/broken/deeper")));
        assert!(probe.created.borrow().is_empty());
    }

    #[test]
    fn ensure_creates_nested_directories_on_disk() {
        let temp = tempdir().unwrap();
        let target = temp.path().join("TeknoParrot").join("AppData").join("Local");

        ensure_path_exists(&target).unwrap();
        assert!(target.is_dir());
    }

    #[test]
    fn ensure_is_idempotent() {
        let temp = tempdir().unwrap();
        let target = temp.path().join("one").join("two");

        ensure_path_exists(&target).unwrap();
        ensure_path_exists(&target).unwrap();

        assert!(target.is_dir());
        let entries: Vec<_> = fs::read_dir(temp.path().join("one")).unwrap().collect();
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn ensure_on_empty_path_is_a_no_op() {
        let probe = RecordingProbe::default();
        ensure_path_exists_with(&probe, Path::new("")).unwrap();
        assert!(probe.probed.borrow().is_empty());
    }

    #[test]
    fn verify_writable_accepts_temp_dir() {
        let temp = tempdir().unwrap();
        verify_writable(temp.path()).unwrap();
        assert!(!temp.path().join(".framepaths_write_test").exists());
    }

    #[test]
    fn verify_writable_rejects_file() {
        let temp = tempdir().unwrap();
        let file = temp.path().join("plain.txt");
        fs::write(&file, b"x").unwrap();

        assert!(matches!(
            verify_writable(&file),
            Err(PathError::NotADirectory(_))
        ));
    }
}
