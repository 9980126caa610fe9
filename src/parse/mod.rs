//! Token extraction from loosely structured training logs.
//!
//! The matrix dump arrives embedded in free text, with numbers sometimes
//! carrying a trailing `]` from printed-array syntax. Parsing is best-effort:
//! each line is split on spaces, tokens that do not look like integers are
//! dropped, and the survivors are collected in file order.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::{Result, TrazarError};


/// Decide whether a raw token is a candidate number.
///
/// Empty tokens are kept as boundary no-ops (extraction skips them). A token
/// is otherwise kept if it is all digits, or if the substring before its
/// first `]` is all digits. Anything after the first `]` is ignored here.
pub fn keep_token(token: &str) -> bool {
    if token.is_empty() {
        return true;
    }
    is_digits(token) || token.split(']').next().is_some_and(is_digits)
}

/// Extract the integer value of a kept token.
///
/// Returns `None` for empty tokens, which pass the filter but carry no value.
pub fn extract_value(token: &str) -> Option<u64> {
    if token.is_empty() {
        return None;
    }
    token.split(']').next().and_then(|digits| digits.parse().ok())
}

/// Scan one line of the log, yielding the integers it contains.
///
/// Splits on single spaces so runs of spaces produce empty boundary tokens,
/// matching the shape of the dump this tolerates.
pub fn scan_line(line: &str) -> impl Iterator<Item = u64> + '_ {
    line.split(' ')
        .filter(|token| keep_token(token))
        .filter_map(extract_value)
}

/// Read a training log and accumulate every embedded integer in file order.
///
/// The file handle is scoped to this function and released on every exit
/// path. A missing file fails fast with [`TrazarError::InputNotFound`].
pub fn parse_log(path: &Path) -> Result<Vec<u64>> {
    let file = File::open(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            TrazarError::InputNotFound { path: path.to_path_buf() }
        } else {
            TrazarError::io(format!("opening {}", path.display()), e)
        }
    })?;

    let mut values = Vec::new();
    for line in BufReader::new(file).lines() {
        let line = line.map_err(|e| TrazarError::io(format!("reading {}", path.display()), e))?;
        values.extend(scan_line(&line));
    }
    Ok(values)
}

fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}
