/// Shared filesystem helpers.
pub mod fs {
    use std::fs;
    use std::io;
    use std::path::Path;

    /// Ensure a directory exists, creating it and any missing parents.
    ///
    /// An existing directory is success. Anything else already sitting at
    /// `path` (a regular file, say) is reported as an error.
    pub fn ensure_dir(path: &Path) -> io::Result<()> {
        fs::create_dir_all(path)
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use tempfile::tempdir;

        #[test]
        fn ensure_dir_creates_nested_and_is_repeatable() {
            let tmp = tempdir().unwrap();
            let target = tmp.path().join("a").join("b").join("c");

            ensure_dir(&target).unwrap();
            assert!(target.is_dir());
            ensure_dir(&target).unwrap();
            assert!(target.is_dir());
        }

        #[test]
        fn ensure_dir_rejects_existing_file() {
            let tmp = tempdir().unwrap();
            let occupied = tmp.path().join("occupied");
            fs::write(&occupied, "not a directory").unwrap();

            assert!(ensure_dir(&occupied).is_err());
            assert!(ensure_dir(&occupied.join("child")).is_err());
        }
    }
}
