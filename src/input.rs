//! Reading source text from a path or from stdin.

use anyhow::{Context, Result};
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

/// Argument that selects stdin instead of a file.
pub const STDIN_ARG: &str = "-";

/// Read the source named by `arg`: `-` reads all of stdin, anything else is a path.
pub fn read_source(arg: &str) -> Result<String> {
    if arg == STDIN_ARG {
        read_from_stdin()
    } else {
        read_from_file(arg)
    }
}

/// Display name used for diagnostics: the file name, or `<stdin>`.
pub fn source_name(arg: &str) -> String {
    if arg == STDIN_ARG {
        return "<stdin>".to_string();
    }
    Path::new(arg)
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| arg.to_string())
}

pub fn read_from_file(path: &str) -> Result<String> {
    let path = expand_home(path).context("failed to expand path")?;
    fs::read_to_string(&path)
        .with_context(|| format!("error reading source file: {}", path.display()))
}

pub fn read_from_stdin() -> Result<String> {
    let mut buf = String::new();
    std::io::stdin()
        .read_to_string(&mut buf)
        .context("couldn't read from stdin")?;
    Ok(buf)
}

/// Expand a leading `~` to the home directory. `~user` forms are not supported.
pub fn expand_home(path: &str) -> Result<PathBuf> {
    let rest = match path.strip_prefix('~') {
        Some(rest) => rest,
        None => return Ok(PathBuf::from(path)),
    };
    if !rest.is_empty() && !rest.starts_with('/') && !rest.starts_with('\\') {
        anyhow::bail!("cannot expand user-specific home dir in '{}'", path);
    }

    let home = dirs::home_dir().context("home directory could not be determined")?;
    let rest = rest.trim_start_matches(['/', '\\']);
    if rest.is_empty() {
        Ok(home)
    } else {
        Ok(home.join(rest))
    }
}

/// Split text into one entry per line, trimming whitespace and skipping blanks.
pub fn lines_to_words(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
