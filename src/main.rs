// src/main.rs
use std::path::PathBuf;

use anyhow::{Result, bail};
use clap::{Parser, Subcommand, ValueEnum};
use log::info;

use file_text_loader::{
    DiskFile, FileCheck, FileTextLoader, LoaderConfig, Locale, SelectionRegistry,
    selection_from_paths, success,
};

const INPUT_ID: &str = "file-input";

#[derive(Parser)]
#[command(name = "file-text-loader")]
#[command(about = "Reads the text of a picked file, optionally requiring a CSV.", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the contents of the first given file.
    Read {
        #[arg(short, long, num_args = 0..)]
        path: Vec<PathBuf>,
        /// Only accept files that look like CSV.
        #[arg(long)]
        csv: bool,
        #[arg(short, long, value_enum, default_value_t = Lang::En)]
        locale: Lang,
        /// Declared media type; guessed from the extension when omitted.
        #[arg(short, long)]
        media_type: Option<String>,
    },
    /// Tell whether a file passes the CSV check without reading it.
    Check {
        #[arg(short, long)]
        path: PathBuf,
        #[arg(short, long)]
        media_type: Option<String>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Lang {
    En,
    PtBr,
}

impl From<Lang> for Locale {
    fn from(lang: Lang) -> Self {
        match lang {
            Lang::En => Locale::English,
            Lang::PtBr => Locale::Portuguese,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Read {
            path,
            csv,
            locale,
            media_type,
        } => {
            let check = if csv { FileCheck::Csv } else { FileCheck::Any };
            let config = LoaderConfig::default()
                .with_check(check)
                .with_locale(locale.into());

            let mut inputs = SelectionRegistry::new();
            inputs.select(INPUT_ID, selection_from_paths(&path[..], media_type.as_deref()));

            info!("Loading {} selected file(s) with {:?}", path.len(), config);
            let content = FileTextLoader::new(config)
                .load_text(&inputs, INPUT_ID)
                .await?;
            success!("Loaded {} bytes", content.len());
            print!("{}", content);
        }
        Commands::Check { path, media_type } => {
            let file = match media_type {
                Some(t) => DiskFile::with_media_type(&path, t),
                None => DiskFile::new(&path),
            };
            if !FileCheck::Csv.accepts(&file) {
                bail!("{} is not a CSV", path.display());
            }
            println!("{} looks like a CSV", path.display());
        }
    }
    Ok(())
}
