use crate::parsers::ParserType;
use std::io;
use std::path::{Path, PathBuf};

/// Length in characters, not bytes
pub fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// HTML files directly inside `dir` (no recursion), sorted by file name
pub fn html_files(dir: &Path) -> io::Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() && ParserType::from_path(&path) == ParserType::Html {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// File name for report headers, falling back to the full path
pub fn file_label(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
