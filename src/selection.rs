// src/selection.rs
use std::collections::HashMap;

use anyhow::{Result, anyhow};
use async_trait::async_trait;

/// One file picked by the user.
#[async_trait]
pub trait PickedFile: Send + Sync {
    fn name(&self) -> &str;

    /// Declared media type. May be empty and is not trusted on its own.
    fn media_type(&self) -> &str;

    /// Reads the whole file as text.
    async fn read_as_text(&self) -> Result<String>;
}

/// The files chosen through a single picker, in selection order.
#[derive(Default)]
pub struct FileSelection {
    files: Vec<Box<dyn PickedFile>>,
}

impl FileSelection {
    pub fn new(files: Vec<Box<dyn PickedFile>>) -> Self {
        Self { files }
    }

    pub fn single(file: impl PickedFile + 'static) -> Self {
        Self::new(vec![Box::new(file)])
    }

    pub fn first(&self) -> Option<&dyn PickedFile> {
        self.files.first().map(|file| file.as_ref())
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

/// Looks up the selection behind an input reference (an element id in a UI).
pub trait SelectionResolver {
    fn resolve(&self, handle_ref: &str) -> Option<&FileSelection>;
}

/// Selections keyed by input id.
#[derive(Default)]
pub struct SelectionRegistry {
    inputs: HashMap<String, FileSelection>,
}

impl SelectionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces whatever was selected on `input_id` before.
    pub fn select(&mut self, input_id: impl Into<String>, selection: FileSelection) {
        self.inputs.insert(input_id.into(), selection);
    }

    pub fn clear(&mut self, input_id: &str) -> Option<FileSelection> {
        self.inputs.remove(input_id)
    }
}

impl SelectionResolver for SelectionRegistry {
    fn resolve(&self, handle_ref: &str) -> Option<&FileSelection> {
        self.inputs.get(handle_ref)
    }
}

/// A file held entirely in memory, for embedding UIs and tests.
#[derive(Debug, Clone)]
pub struct MemoryFile {
    name: String,
    media_type: String,
    contents: std::result::Result<String, String>,
}

impl MemoryFile {
    pub fn new(
        name: impl Into<String>,
        media_type: impl Into<String>,
        contents: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            media_type: media_type.into(),
            contents: Ok(contents.into()),
        }
    }

    /// A file whose every read fails with `message`.
    pub fn unreadable(
        name: impl Into<String>,
        media_type: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            media_type: media_type.into(),
            contents: Err(message.into()),
        }
    }
}

#[async_trait]
impl PickedFile for MemoryFile {
    fn name(&self) -> &str {
        &self.name
    }

    fn media_type(&self) -> &str {
        &self.media_type
    }

    async fn read_as_text(&self) -> Result<String> {
        self.contents.clone().map_err(|message| anyhow!(message))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_is_the_earliest_pick() {
        let selection = FileSelection::new(vec![
            Box::new(MemoryFile::new("a.csv", "", "a")),
            Box::new(MemoryFile::new("b.csv", "", "b")),
        ]);

        assert_eq!(selection.len(), 2);
        assert_eq!(selection.first().map(|f| f.name()), Some("a.csv"));
        assert!(FileSelection::default().first().is_none());
    }

    #[test]
    fn registry_resolves_by_input_id() {
        let mut registry = SelectionRegistry::new();
        registry.select("upload", FileSelection::single(MemoryFile::new("x.csv", "", "")));

        assert!(registry.resolve("upload").is_some());
        assert!(registry.resolve("other").is_none());

        registry.clear("upload");
        assert!(registry.resolve("upload").is_none());
    }

    #[tokio::test]
    async fn unreadable_file_reports_its_message() {
        let file = MemoryFile::unreadable("x.csv", "text/csv", "disk on fire");
        let err = file.read_as_text().await.unwrap_err();
        assert_eq!(err.to_string(), "disk on fire");
    }
}
