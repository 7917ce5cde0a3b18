//! Loading document text for analysis.

use std::io::Read;
use std::path::Path;

use crate::error::{Error, Result};

/// Where a document is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// Standard input.
    Stdin,
    /// A file on disk.
    File(std::path::PathBuf),
}

impl Source {
    /// Interpret a command-line argument; `-` means standard input.
    pub fn from_arg(arg: &Path) -> Self {
        if arg.as_os_str() == "-" {
            Self::Stdin
        } else {
            Self::File(arg.to_path_buf())
        }
    }

    /// Human-readable label for reports.
    pub fn label(&self) -> String {
        match self {
            Self::Stdin => "<stdin>".to_string(),
            Self::File(path) => path.display().to_string(),
        }
    }

    /// Read the whole document.
    pub fn read(&self) -> Result<String> {
        match self {
            Self::Stdin => {
                let mut text = String::new();
                std::io::stdin().read_to_string(&mut text)?;
                Ok(normalize_newlines(text))
            }
            Self::File(path) => load_document(path),
        }
    }
}

/// Read a document from disk, normalizing `\r\n` line endings to `\n`.
pub fn load_document(path: &Path) -> Result<String> {
    let text = fs_err::read_to_string(path).map_err(|e| Error::io(e, path.to_path_buf()))?;
    Ok(normalize_newlines(text))
}

/// Lines are split on `\n`; a trailing `\r` would otherwise end up in every line.
fn normalize_newlines(text: String) -> String {
    if text.contains("\r\n") {
        text.replace("\r\n", "\n")
    } else {
        text
    }
}
