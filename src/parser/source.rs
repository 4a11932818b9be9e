//! Content source abstraction for reading report files from the filesystem or
//! from a zipped code generation report.

use anyhow::{Context, Result};
use camino::{Utf8Path, Utf8PathBuf};
use std::io::{Read, Seek};

/// Trait for abstracting file I/O (filesystem vs. ZIP source).
pub trait ContentSource {
    /// Read a file at the given logical path and return its content as a string.
    fn read_to_string(&mut self, path: &Utf8Path) -> Result<String>;
    /// List files directly below a directory (logical path for the source).
    /// An empty path denotes the source root.
    fn list_dir(&mut self, path: &Utf8Path) -> Result<Vec<Utf8PathBuf>>;
}

/// Reads files directly from the local filesystem.
pub struct FsSource;

impl ContentSource for FsSource {
    fn read_to_string(&mut self, path: &Utf8Path) -> Result<String> {
        std::fs::read_to_string(path.as_std_path()).with_context(|| format!("Failed to read {}", path))
    }

    fn list_dir(&mut self, path: &Utf8Path) -> Result<Vec<Utf8PathBuf>> {
        let dir = if path.as_str().is_empty() {
            Utf8Path::new(".")
        } else {
            path
        };
        let mut files = Vec::new();
        for entry in dir
            .read_dir_utf8()
            .with_context(|| format!("Read dir {}", dir))?
        {
            let entry = entry?;
            if entry.file_type()?.is_file() {
                files.push(entry.into_path());
            }
        }
        files.sort();
        Ok(files)
    }
}

/// Reads files from a ZIP archive, e.g. a packaged `<model>_ert_rtw` folder.
pub struct ZipSource<R: Read + Seek> {
    zip: zip::ZipArchive<R>,
}

impl ZipSource<std::io::BufReader<std::fs::File>> {
    /// Open a ZIP file on disk.
    pub fn open(path: &Utf8Path) -> Result<Self> {
        let file = std::fs::File::open(path).with_context(|| format!("Open {}", path))?;
        Self::new(std::io::BufReader::new(file))
    }
}

impl<R: Read + Seek> ZipSource<R> {
    pub fn new(reader: R) -> Result<Self> {
        let zip = zip::ZipArchive::new(reader).context("Failed to open zip archive")?;
        Ok(Self { zip })
    }
}

/// Strip leading `./` and `/` so logical paths match ZIP entry names.
fn entry_name(path: &Utf8Path) -> &str {
    path.as_str().trim_start_matches("./").trim_start_matches('/')
}

impl<R: Read + Seek> ContentSource for ZipSource<R> {
    fn read_to_string(&mut self, path: &Utf8Path) -> Result<String> {
        let name = entry_name(path);
        let mut f = self
            .zip
            .by_name(name)
            .with_context(|| format!("File {} not found in zip", name))?;
        let mut s = String::new();
        f.read_to_string(&mut s)
            .with_context(|| format!("Failed to read {} from zip", name))?;
        Ok(s)
    }

    /// Unlike [`FsSource`], lists the whole subtree: ZIP archives have no
    /// reliable directory entries.
    fn list_dir(&mut self, path: &Utf8Path) -> Result<Vec<Utf8PathBuf>> {
        let mut prefix = entry_name(path).to_string();
        if !prefix.is_empty() && !prefix.ends_with('/') {
            prefix.push('/');
        }
        let mut files: Vec<Utf8PathBuf> = self
            .zip
            .file_names()
            .filter(|name| name.starts_with(&prefix) && !name.ends_with('/'))
            .map(Utf8PathBuf::from)
            .collect();
        files.sort();
        Ok(files)
    }
}
