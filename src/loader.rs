// src/loader.rs
use log::{debug, info, warn};

use crate::error::{LoadFailure, LoadResult};
use crate::messages::Locale;
use crate::selection::{PickedFile, SelectionResolver};

const CSV_MEDIA_TYPES: [&str; 2] = ["text/csv", "application/vnd.ms-excel"];

/// Which files the loader is willing to read.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FileCheck {
    #[default]
    Any,
    /// Accept when the name ends in `.csv` (any case) or the declared media
    /// type is a CSV type. Either one is enough.
    Csv,
}

impl FileCheck {
    pub fn accepts(self, file: &dyn PickedFile) -> bool {
        match self {
            FileCheck::Any => true,
            FileCheck::Csv => {
                let by_extension = file.name().to_lowercase().ends_with(".csv");
                let by_media_type = CSV_MEDIA_TYPES.iter().any(|t| *t == file.media_type());
                debug!(
                    "csv check for '{}' (type '{}'): extension={}, media_type={}",
                    file.name(),
                    file.media_type(),
                    by_extension,
                    by_media_type
                );
                by_extension || by_media_type
            }
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoaderConfig {
    pub check: FileCheck,
    pub locale: Locale,
}

impl LoaderConfig {
    pub fn csv() -> Self {
        Self {
            check: FileCheck::Csv,
            ..Self::default()
        }
    }

    pub fn with_check(mut self, check: FileCheck) -> Self {
        self.check = check;
        self
    }

    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }
}

/// Reads the text of the first file picked on an input.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileTextLoader {
    config: LoaderConfig,
}

impl FileTextLoader {
    pub fn new(config: LoaderConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> LoaderConfig {
        self.config
    }

    /// Resolves `handle_ref`, validates its first file and reads it.
    ///
    /// Every outcome comes back as a value; the read is the only await point.
    pub async fn load_text<R>(&self, resolver: &R, handle_ref: &str) -> LoadResult
    where
        R: SelectionResolver + ?Sized,
    {
        let locale = self.config.locale;

        let Some(file) = resolver.resolve(handle_ref).and_then(|s| s.first()) else {
            warn!("No file selected on input '{}'", handle_ref);
            return Err(LoadFailure::no_file_selected(locale));
        };

        if !self.config.check.accepts(file) {
            warn!("Rejected '{}' on input '{}'", file.name(), handle_ref);
            return Err(LoadFailure::unacceptable_file_type(locale));
        }

        match file.read_as_text().await {
            Ok(text) => {
                info!("Read {} bytes from '{}'", text.len(), file.name());
                Ok(text)
            }
            Err(e) => {
                warn!("Reading '{}' failed: {:#}", file.name(), e);
                Err(LoadFailure::read_failure(locale, &e))
            }
        }
    }
}
