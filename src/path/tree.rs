//! Small helpers that walk directory trees.

use log::{trace, warn};
use std::{
    fs::{self, DirEntry},
    io,
    path::Path,
};

/// Immediate entries of `dir`, sorted by file name.
pub fn sorted_entries(dir: &Path) -> io::Result<Vec<DirEntry>> {
    let mut entries = fs::read_dir(dir)?.collect::<Result<Vec<_>, _>>()?;
    entries.sort_by_key(|entry| entry.file_name());
    Ok(entries)
}

pub fn is_empty_dir(dir: &Path) -> io::Result<bool> {
    Ok(fs::read_dir(dir)?.next().is_none())
}

/// True when both paths exist and refer to the same file after resolving
/// symlinks.
pub fn same_file(a: &Path, b: &Path) -> bool {
    match (fs::canonicalize(a), fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

/// Copies the tree rooted at `src` into `dst`, depth first, pre-order.
///
/// `dst` is created when absent. Files with matching names are overwritten;
/// anything else already under `dst` is left alone. Stops at the first entry
/// that cannot be copied, e.g. a file whose name is taken by a directory.
/// Returns the number of files copied.
pub fn copy_tree(src: &Path, dst: &Path) -> io::Result<usize> {
    if !dst.exists() {
        fs::create_dir(dst)?;
        trace!("created directory {}", dst.display());
    } else if !dst.is_dir() {
        warn!("cannot copy a directory over file {}", dst.display());
        return Err(io::Error::new(
            io::ErrorKind::AlreadyExists,
            format!("{} exists and is not a directory", dst.display()),
        ));
    }

    let mut copied = 0;
    for entry in sorted_entries(src)? {
        let source = entry.path();
        let target = dst.join(entry.file_name());

        if source.is_dir() {
            copied += copy_tree(&source, &target)?;
        } else if target.is_dir() {
            warn!(
                "cannot overwrite directory {} with file {}",
                target.display(),
                source.display()
            );
            return Err(io::Error::new(
                io::ErrorKind::IsADirectory,
                format!("{} is a directory", target.display()),
            ));
        } else {
            fs::copy(&source, &target)
                .inspect_err(|err| warn!("failed to copy {}: {}", source.display(), err))?;
            trace!("copied {} -> {}", source.display(), target.display());
            copied += 1;
        }
    }

    Ok(copied)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_sorted_entries_orders_by_name() {
        let dir = TempDir::new().unwrap();
        for name in ["zeta", "alpha", "mid"] {
            fs::write(dir.path().join(name), "").unwrap();
        }

        let names: Vec<_> = sorted_entries(dir.path())
            .unwrap()
            .iter()
            .map(|e| e.file_name().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, ["alpha", "mid", "zeta"]);
    }

    #[test]
    fn test_is_empty_dir() {
        let dir = TempDir::new().unwrap();
        assert!(is_empty_dir(dir.path()).unwrap());

        fs::write(dir.path().join("f"), "x").unwrap();
        assert!(!is_empty_dir(dir.path()).unwrap());

        assert!(is_empty_dir(&dir.path().join("missing")).is_err());
    }

    #[test]
    fn test_same_file() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("f");
        fs::write(&file, "x").unwrap();

        assert!(same_file(&file, &dir.path().join("./f")));
        assert!(!same_file(&file, &dir.path().join("g")));
    }

    #[test]
    fn test_copy_tree_creates_destination_and_nested_dirs() {
        let dir = TempDir::new().unwrap();
        let src = dir.path().join("src");
        fs::create_dir_all(src.join("nested/deeper")).unwrap();
        fs::write(src.join("top.txt"), "top").unwrap();
        fs::write(src.join("nested/deeper/leaf.txt"), "leaf").unwrap();

        let dst = dir.path().join("dst");
        let copied = copy_tree(&src, &dst).unwrap();

        assert_eq!(copied, 2);
        assert_eq!(fs::read_to_string(dst.join("top.txt")).unwrap(), "top");
        assert_eq!(
            fs::read_to_string(dst.join("nested/deeper/leaf.txt")).unwrap(),
            "leaf"
        );
    }

    #[test]
    fn test_copy_tree_keeps_unrelated_destination_files() {
        let dir = TempDir::new().unwrap();
        let src = dir.path().join("src");
        let dst = dir.path().join("dst");
        fs::create_dir(&src).unwrap();
        fs::create_dir(&dst).unwrap();
        fs::write(src.join("shared.txt"), "new").unwrap();
        fs::write(dst.join("shared.txt"), "old").unwrap();
        fs::write(dst.join("keep.txt"), "keep").unwrap();

        copy_tree(&src, &dst).unwrap();

        assert_eq!(fs::read_to_string(dst.join("shared.txt")).unwrap(), "new");
        assert_eq!(fs::read_to_string(dst.join("keep.txt")).unwrap(), "keep");
    }

    #[test]
    fn test_copy_tree_refuses_file_destination() {
        let dir = TempDir::new().unwrap();
        let src = dir.path().join("src");
        let dst = dir.path().join("dst");
        fs::create_dir(&src).unwrap();
        fs::write(&dst, "file").unwrap();

        let err = copy_tree(&src, &dst).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::AlreadyExists);
    }

    #[test]
    fn test_copy_tree_refuses_file_over_directory() {
        let dir = TempDir::new().unwrap();
        let src = dir.path().join("src");
        let dst = dir.path().join("dst");
        fs::create_dir(&src).unwrap();
        fs::write(src.join("clash"), "file").unwrap();
        fs::create_dir_all(dst.join("clash")).unwrap();

        let err = copy_tree(&src, &dst).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::IsADirectory);
        assert!(dst.join("clash").is_dir());
    }
}
