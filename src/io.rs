use crate::config::{COLOR_CYAN, COLOR_RED, COLOR_RESET, COLOR_YELLOW};
use std::{
    fs,
    io::{self, Write},
    path::Path,
};
use tempfile::{Builder, NamedTempFile};

pub fn print_error(message: &str) {
    eprintln!("{}ERROR{}: {}", COLOR_RED, COLOR_RESET, message);
}

pub fn print_warning(message: &str) {
    eprintln!("{}WARNING{}: {}", COLOR_YELLOW, COLOR_RESET, message);
}

pub fn print_info(message: &str) {
    eprintln!("{}INFO{}: {}", COLOR_CYAN, COLOR_RESET, message);
}

pub fn ensure_output_dir(output_dir: &Path, verbose: bool) -> io::Result<()> {
    if verbose {
        if output_dir.is_dir() {
            print_info(&format!("Using existing output directory: {}", output_dir.display()));
        } else {
            print_info(&format!("Creating output directory: {}", output_dir.display()));
        }
    }

    fs::create_dir_all(output_dir).map_err(|e| {
        io::Error::new(
            e.kind(),
            format!("Failed to create output directory {}: {}", output_dir.display(), e),
        )
    })
}

/// Writes `contents` to `path` through a temp file in the same directory, so
/// readers see either the old file or the complete new one.
pub fn write_atomically(path: &Path, contents: &[u8]) -> io::Result<()> {
    let dir = path.parent().unwrap_or(Path::new("."));
    let mut tmp = new_temp_file(dir)?;
    tmp.write_all(contents)?;
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

/// Same mode `fs::write` would give a new file: 0666 minus the umask.
#[cfg(unix)]
fn new_temp_file(dir: &Path) -> io::Result<NamedTempFile> {
    use std::os::unix::fs::PermissionsExt;
    Builder::new()
        .permissions(fs::Permissions::from_mode(0o666))
        .tempfile_in(dir)
}

#[cfg(not(unix))]
fn new_temp_file(dir: &Path) -> io::Result<NamedTempFile> {
    NamedTempFile::new_in(dir)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn ensure_output_dir_tolerates_existing() {
        let tmp = TempDir::new().unwrap();
        let out = tmp.path().join("sitemaps");
        ensure_output_dir(&out, false).unwrap();
        ensure_output_dir(&out, false).unwrap();
        assert!(out.is_dir());
    }

    #[test]
    fn write_atomically_replaces_and_leaves_no_temp_files() {
        let tmp = TempDir::new().unwrap();
        let target = tmp.path().join("sitemap1.xml");
        fs::write(&target, "old").unwrap();

        write_atomically(&target, b"new").unwrap();

        assert_eq!(fs::read_to_string(&target).unwrap(), "new");
        let entries: Vec<_> = fs::read_dir(tmp.path()).unwrap().collect();
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn ensure_output_dir_reports_the_path_on_failure() {
        let tmp = TempDir::new().unwrap();
        let blocker = tmp.path().join("sitemaps");
        fs::write(&blocker, "not a directory").unwrap();

        let err = ensure_output_dir(&blocker.join("inner"), false).unwrap_err();
        assert!(err.to_string().contains("Failed to create output directory"));
        assert!(err.to_string().contains("inner"));
    }

    #[cfg(unix)]
    #[test]
    fn written_files_get_the_same_mode_as_fs_write() {
        use std::os::unix::fs::PermissionsExt;

        let tmp = TempDir::new().unwrap();
        let plain = tmp.path().join("plain.xml");
        fs::write(&plain, "x").unwrap();
        let target = tmp.path().join("sitemap1.xml");
        write_atomically(&target, b"x").unwrap();

        let mode = |p: &Path| fs::metadata(p).unwrap().permissions().mode() & 0o777;
        assert_eq!(mode(&target), mode(&plain));
    }
}
