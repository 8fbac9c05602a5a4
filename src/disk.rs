// src/disk.rs
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use async_trait::async_trait;
use tokio::fs;

use crate::selection::{FileSelection, PickedFile};

/// A file on the local filesystem exposed through [`PickedFile`].
#[derive(Debug, Clone)]
pub struct DiskFile {
    path: PathBuf,
    name: String,
    media_type: String,
}

impl DiskFile {
    /// Media type is guessed from the extension.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let media_type = guess_media_type(&path).to_string();
        Self::with_media_type(path, media_type)
    }

    pub fn with_media_type(path: impl Into<PathBuf>, media_type: impl Into<String>) -> Self {
        let path = path.into();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self {
            path,
            name,
            media_type: media_type.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl PickedFile for DiskFile {
    fn name(&self) -> &str {
        &self.name
    }

    fn media_type(&self) -> &str {
        &self.media_type
    }

    async fn read_as_text(&self) -> Result<String> {
        let content = fs::read_to_string(&self.path)
            .await
            .with_context(|| format!("Failed to read file at '{}'", self.path.display()))?;
        Ok(content)
    }
}

/// Builds a selection from paths in order. `media_type`, when given, is
/// declared for every file instead of guessing.
pub fn selection_from_paths<P: AsRef<Path>>(paths: &[P], media_type: Option<&str>) -> FileSelection {
    let files = paths
        .iter()
        .map(|p| {
            let file = match media_type {
                Some(t) => DiskFile::with_media_type(p.as_ref(), t),
                None => DiskFile::new(p.as_ref()),
            };
            Box::new(file) as Box<dyn PickedFile>
        })
        .collect();
    FileSelection::new(files)
}

fn guess_media_type(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|s| s.to_lowercase());
    match ext.as_deref() {
        Some("csv") => "text/csv",
        Some("xls") => "application/vnd.ms-excel",
        Some("txt") => "text/plain",
        Some("json") => "application/json",
        _ => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    fn guesses_from_extension_case_insensitively() {
        assert_eq!(DiskFile::new("/tmp/DATA.CSV").media_type(), "text/csv");
        assert_eq!(
            DiskFile::new("export.xls").media_type(),
            "application/vnd.ms-excel"
        );
        assert_eq!(DiskFile::new("noext").media_type(), "");
        assert_eq!(DiskFile::new("/tmp/DATA.CSV").name(), "DATA.CSV");
    }

    #[tokio::test]
    async fn reads_the_exact_contents() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("rows.csv");
        let mut file = std::fs::File::create(&file_path).unwrap();
        write!(file, "a,b\r\n1,2\n\n").unwrap();

        let text = DiskFile::new(&file_path).read_as_text().await.unwrap();
        assert_eq!(text, "a,b\r\n1,2\n\n");
    }

    #[tokio::test]
    async fn invalid_utf8_is_a_read_error() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("bin.csv");
        std::fs::write(&file_path, [0xff, 0xfe, 0x00]).unwrap();

        let err = DiskFile::new(&file_path).read_as_text().await.unwrap_err();
        assert!(err.to_string().contains("Failed to read file at"));
    }

    #[test]
    fn declared_type_overrides_the_guess() {
        let selection = selection_from_paths(&["a.txt", "b.csv"][..], Some("text/csv"));
        assert_eq!(selection.len(), 2);
        assert_eq!(selection.first().unwrap().media_type(), "text/csv");
    }
}
