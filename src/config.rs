use std::fs;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use log::info;

use crate::error::{Error, Result};

pub const USAGE: &str = "encode [<input_file> | --file=<input_file>]\n  \
    without arguments one line of text is read from standard input";

/// Where the text to compress comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Stdin,
    File(PathBuf),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub source: Source,
}

impl Config {
    /// Parses command line arguments, program name excluded.
    pub fn from_args<I>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let mut source = Source::Stdin;

        for arg in args {
            if arg == "-h" || arg == "--help" {
                return Err(Error::Usage(USAGE.to_string()));
            } else if let Some(path) = arg.strip_prefix("--file=") {
                source = Source::File(PathBuf::from(path));
            } else if arg.starts_with("--") {
                return Err(Error::Usage(format!("unknown option {}\n{}", arg, USAGE)));
            } else {
                source = Source::File(PathBuf::from(arg));
            }
        }

        Ok(Config { source })
    }
}

impl Source {
    /// Reads the whole file, or a single line from standard input.
    pub fn read(&self) -> Result<String> {
        match self {
            Source::File(path) => {
                info!("Reading input file: {}", path.display());
                Ok(fs::read_to_string(path)?)
            }
            Source::Stdin => {
                print!("Enter plain text: ");
                io::stdout().flush()?;
                read_line(io::stdin().lock())
            }
        }
    }
}

fn read_line<R: BufRead>(mut reader: R) -> Result<String> {
    let mut line = String::new();
    reader.read_line(&mut line)?;
    let trimmed = line.trim_end_matches(['\r', '\n']).len();
    line.truncate(trimmed);
    Ok(line)
}
