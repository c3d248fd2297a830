use clap::ArgMatches;
use std::path::PathBuf;

use crate::{DEFAULT_BOOK_LIMIT, DEFAULT_DATA_DIR, DEFAULT_SUBJECT, LOG_FILE_NAME};

/// Runtime settings, taken from the command line with defaults
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub data_dir: PathBuf,
    pub log_file: PathBuf,
    pub books_subject: String,
    pub books_limit: u32,
}

impl AppConfig {
    /// Create configuration with default values rooted at a data directory
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        let data_dir = data_dir.into();
        Self {
            log_file: data_dir.join(LOG_FILE_NAME),
            data_dir,
            books_subject: DEFAULT_SUBJECT.to_string(),
            books_limit: DEFAULT_BOOK_LIMIT,
        }
    }

    /// Build configuration from parsed arguments, including any `books` subcommand options
    pub fn from_matches(matches: &ArgMatches) -> Self {
        let data_dir = matches
            .get_one::<PathBuf>("data-dir")
            .cloned()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR));
        let mut config = Self::new(data_dir);

        if let Some(log_file) = matches.get_one::<PathBuf>("log-file") {
            config.log_file = log_file.clone();
        }

        if let Some(books) = matches.subcommand_matches("books") {
            if let Some(subject) = books.get_one::<String>("subject") {
                config.books_subject = subject.clone();
            }
            if let Some(limit) = books.get_one::<u32>("limit") {
                config.books_limit = *limit;
            }
        }

        config
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new(DEFAULT_DATA_DIR)
    }
}
