//! Atomic registry export.
//!
//! This module writes a registry to disk using a temporary file and rename
//! strategy so a target file is never left partially written.

use std::io::Write;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use camino::{Utf8Component, Utf8Path};
use cap_std::fs::{Dir, OpenOptions};

use crate::error::RegistryError;
use crate::registry::ContentRegistry;

static TEMP_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Serialises `registry` and writes it into `dir` under `file_name`.
///
/// The registry is first written to a hidden temporary file in the same
/// directory and then renamed over the target, so readers never observe a
/// half-written registry. `file_name` must be a bare file name, not a path.
///
/// # Errors
///
/// Returns [`RegistryError::WriteError`] if `file_name` is not a bare file
/// name or if any filesystem step fails, and [`RegistryError::ParseError`]
/// if the registry cannot be serialised.
pub fn write_registry(
    dir: &Dir,
    file_name: &Utf8Path,
    registry: &ContentRegistry,
) -> Result<(), RegistryError> {
    let mut components = file_name.components();
    let (Some(Utf8Component::Normal(target_name)), None) = (components.next(), components.next())
    else {
        return Err(RegistryError::WriteError {
            path: file_name.to_path_buf(),
            message: "registry target must be a bare file name".to_owned(),
        });
    };

    let json = registry.to_json_pretty()?;

    let counter = TEMP_COUNTER.fetch_add(1, Ordering::Relaxed);
    let suffix = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |elapsed| elapsed.as_nanos());
    let tmp_name = format!(".{target_name}.tmp.{}.{suffix}.{counter}", std::process::id());

    write_to_temp_file(dir, &tmp_name, file_name, &json)?;
    rename_temp_to_target(dir, &tmp_name, target_name, file_name)?;

    Ok(())
}

fn write_to_temp_file(
    dir: &Dir,
    tmp_name: &str,
    target_path: &Utf8Path,
    contents: &str,
) -> Result<(), RegistryError> {
    let tmp_path = target_path.with_file_name(tmp_name);
    let mut options = OpenOptions::new();
    options.write(true).create_new(true);
    let mut file = dir
        .open_with(tmp_name, &options)
        .map_err(|err| RegistryError::WriteError {
            path: tmp_path.clone(),
            message: err.to_string(),
        })?;

    let written = file
        .write_all(contents.as_bytes())
        .and_then(|()| file.write_all(b"\n"))
        .and_then(|()| file.sync_all());
    if let Err(err) = written {
        drop(file);
        drop(dir.remove_file(tmp_name));
        return Err(RegistryError::WriteError {
            path: tmp_path,
            message: err.to_string(),
        });
    }

    Ok(())
}

fn rename_temp_to_target(
    dir: &Dir,
    tmp_name: &str,
    target_name: &str,
    target_path: &Utf8Path,
) -> Result<(), RegistryError> {
    if let Err(err) = rename_temp_to_target_impl(dir, tmp_name, target_name) {
        // Best-effort cleanup of the temp file on rename failure.
        drop(dir.remove_file(tmp_name));
        return Err(RegistryError::WriteError {
            path: target_path.to_path_buf(),
            message: err.to_string(),
        });
    }
    Ok(())
}

#[cfg(not(windows))]
fn rename_temp_to_target_impl(dir: &Dir, tmp_name: &str, target_name: &str) -> std::io::Result<()> {
    dir.rename(tmp_name, dir, target_name)
}

#[cfg(windows)]
fn rename_temp_to_target_impl(dir: &Dir, tmp_name: &str, target_name: &str) -> std::io::Result<()> {
    // Windows rename fails if the target exists, so remove it first.
    match dir.remove_file(target_name) {
        Ok(()) => {}
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {}
        Err(err) => return Err(err),
    }
    dir.rename(tmp_name, dir, target_name)
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use camino::Utf8Path;
    use cap_std::ambient_authority;
    use cap_std::fs::Dir;

    use super::*;

    fn temp_dir() -> (tempfile::TempDir, Dir) {
        let tmp = tempfile::tempdir().expect("create temp dir");
        let dir = Dir::open_ambient_dir(tmp.path(), ambient_authority()).expect("open temp dir");
        (tmp, dir)
    }

    #[test]
    fn writes_registry_readable_by_from_file() {
        let (tmp, dir) = temp_dir();
        let registry = ContentRegistry::builtin();

        write_registry(&dir, Utf8Path::new("content.json"), &registry).expect("write registry");

        let reloaded = ContentRegistry::from_file(&tmp.path().join("content.json"))
            .expect("reload exported registry");
        assert_eq!(reloaded, registry);
    }

    #[test]
    fn overwrites_existing_file() {
        let (_tmp, dir) = temp_dir();
        let registry = ContentRegistry::builtin();

        dir.write("content.json", b"stale").expect("seed stale file");
        write_registry(&dir, Utf8Path::new("content.json"), &registry).expect("write registry");

        let contents = dir.read_to_string("content.json").expect("read back");
        assert!(contents.contains("\"version\""));
    }

    #[test]
    fn rejects_nested_target_paths() {
        let (_tmp, dir) = temp_dir();
        let registry = ContentRegistry::builtin();

        let err = write_registry(&dir, Utf8Path::new("nested/content.json"), &registry)
            .expect_err("nested path must be rejected");
        assert!(matches!(err, RegistryError::WriteError { .. }));
    }

    #[test]
    fn leaves_no_temp_files_behind() {
        let (tmp, dir) = temp_dir();
        let registry = ContentRegistry::builtin();

        write_registry(&dir, Utf8Path::new("content.json"), &registry).expect("write registry");

        let leftovers: Vec<_> = std::fs::read_dir(tmp.path())
            .expect("list temp dir")
            .filter_map(Result::ok)
            .filter(|entry| entry.file_name().to_string_lossy().contains(".tmp."))
            .collect();
        assert!(leftovers.is_empty());
    }
}
