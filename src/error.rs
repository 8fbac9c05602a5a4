// src/error.rs
use thiserror::Error;

use crate::messages::Locale;

/// What went wrong while loading a selected file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The input could not be resolved or has no files.
    NoFileSelected,
    /// The file passed neither the extension nor the media-type check.
    UnacceptableFileType,
    /// The underlying read failed (I/O, decoding, revoked permission).
    ReadFailure,
}

/// Failure half of a load. `Display` is the localized, user-facing message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct LoadFailure {
    kind: ErrorKind,
    message: String,
}

impl LoadFailure {
    pub fn no_file_selected(locale: Locale) -> Self {
        Self {
            kind: ErrorKind::NoFileSelected,
            message: locale.catalog().no_file_selected.to_string(),
        }
    }

    pub fn unacceptable_file_type(locale: Locale) -> Self {
        Self {
            kind: ErrorKind::UnacceptableFileType,
            message: locale.catalog().not_a_csv.to_string(),
        }
    }

    /// Wraps the underlying read error; its message is kept verbatim.
    pub fn read_failure(locale: Locale, cause: &anyhow::Error) -> Self {
        Self {
            kind: ErrorKind::ReadFailure,
            message: format!("{}{:#}", locale.catalog().read_error_prefix, cause),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Outcome of a single load: the file's text or a [`LoadFailure`].
pub type LoadResult = Result<String, LoadFailure>;

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;

    #[test]
    fn read_failure_keeps_the_whole_context_chain() {
        let cause = anyhow!("permission denied").context("Failed to read file at 'a.csv'");
        let failure = LoadFailure::read_failure(Locale::English, &cause);

        assert_eq!(failure.kind(), ErrorKind::ReadFailure);
        assert_eq!(
            failure.to_string(),
            "Error reading file: Failed to read file at 'a.csv': permission denied"
        );
    }

    #[test]
    fn messages_follow_the_locale() {
        assert_eq!(
            LoadFailure::no_file_selected(Locale::Portuguese).message(),
            "Nenhum arquivo selecionado"
        );
        assert_eq!(
            LoadFailure::unacceptable_file_type(Locale::English).message(),
            "The selected file is not a CSV"
        );
    }
}
