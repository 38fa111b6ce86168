use std::{
    io,
    path::{Component, Path},
};
use walkdir::{DirEntry, WalkDir};

use crate::io::{print_info, print_warning};

const HTML_SUFFIX: &str = ".html";

/// Collects the URL path of every `.html` file under `root`, in file-name
/// order within each directory. Symlinks are not followed; one pointing at a
/// directory counts as a directory, any other is listed like a file.
pub fn collect_html_paths(root: &Path, verbose: bool) -> io::Result<Vec<String>> {
    let mut url_paths = Vec::new();

    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry?;
        if is_directory(&entry) {
            continue;
        }

        let file_name = entry.file_name();
        if !file_name.to_string_lossy().ends_with(HTML_SUFFIX) {
            continue;
        }
        if file_name.to_str().is_none() {
            print_warning(&format!(
                "File name is not valid UTF-8, converting lossily: {}",
                entry.path().display()
            ));
        }

        let rel_path = pathdiff::diff_paths(entry.path(), root)
            .unwrap_or_else(|| entry.path().to_path_buf());
        let url_path = to_url_path(&rel_path);
        if verbose {
            print_info(&format!("Found: {}", url_path));
        }
        url_paths.push(url_path);
    }

    Ok(url_paths)
}

fn is_directory(entry: &DirEntry) -> bool {
    entry.file_type().is_dir() || (entry.path_is_symlink() && entry.path().is_dir())
}

/// Joins the path's components with `/`, whatever the host separator is.
pub fn to_url_path(rel_path: &Path) -> String {
    rel_path
        .components()
        .filter_map(|c| match c {
            Component::Normal(os_str) => Some(os_str.to_string_lossy().replace('\\', "/")),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}
