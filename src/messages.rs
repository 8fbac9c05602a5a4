// src/messages.rs
use std::fmt;
use std::str::FromStr;

use anyhow::{Result, bail};

/// User-facing strings for one language.
pub struct Catalog {
    pub no_file_selected: &'static str,
    pub not_a_csv: &'static str,
    pub read_error_prefix: &'static str,
}

const ENGLISH: Catalog = Catalog {
    no_file_selected: "No file selected",
    not_a_csv: "The selected file is not a CSV",
    read_error_prefix: "Error reading file: ",
};

const PORTUGUESE: Catalog = Catalog {
    no_file_selected: "Nenhum arquivo selecionado",
    not_a_csv: "O arquivo selecionado não é um CSV",
    read_error_prefix: "Erro ao ler o arquivo: ",
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Locale {
    #[default]
    English,
    /// Brazilian Portuguese.
    Portuguese,
}

impl Locale {
    pub fn catalog(self) -> &'static Catalog {
        match self {
            Locale::English => &ENGLISH,
            Locale::Portuguese => &PORTUGUESE,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Locale::English => "en",
            Locale::Portuguese => "pt-br",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Locale {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().replace('_', "-").as_str() {
            "en" | "en-us" | "en-gb" => Ok(Locale::English),
            "pt" | "pt-br" => Ok(Locale::Portuguese),
            other => bail!("Unsupported locale '{}'", other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_common_spellings() {
        assert_eq!("pt_BR".parse::<Locale>().unwrap(), Locale::Portuguese);
        assert_eq!("PT".parse::<Locale>().unwrap(), Locale::Portuguese);
        assert_eq!("en".parse::<Locale>().unwrap(), Locale::English);
        assert!("de".parse::<Locale>().is_err());
    }

    #[test]
    fn code_round_trips() {
        for locale in [Locale::English, Locale::Portuguese] {
            assert_eq!(locale.code().parse::<Locale>().unwrap(), locale);
        }
    }
}
