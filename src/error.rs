use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use thiserror::Error;

// ---------------------------------------------------------------------------
// LookupError
// ---------------------------------------------------------------------------

/// A filesystem query that failed for a reason other than "not found".
///
/// Displays exactly as the underlying `io::Error` does; the message is kept
/// verbatim. The `io::Error` is not reported again as `source()`, so error
/// chain printers show the message once; reach it with
/// [`io_error`](LookupError::io_error). It is shared behind an `Arc` so
/// failed records can be cloned into filtered and partitioned collections.
#[derive(Error, Debug, Clone)]
#[error("{io}")]
pub struct LookupError {
    path: PathBuf,
    io:   Arc<io::Error>,
}

impl LookupError {
    pub(crate) fn new(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self {
            path: path.into(),
            io:   Arc::new(source),
        }
    }

    /// The path whose lookup failed.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The kind of the underlying I/O error.
    pub fn kind(&self) -> io::ErrorKind {
        self.io.kind()
    }

    /// The underlying I/O error.
    pub fn io_error(&self) -> &io::Error {
        &self.io
    }
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Every lookup failure in a collection, in collection order.
///
/// `Errors` is itself an error: its message is each failure's message joined
/// with `\n`, and an empty list has an empty message. Use
/// [`into_result`](Errors::into_result) to treat "zero or more failures" as a
/// single `Result`.
#[derive(Error, Debug, Clone, Default)]
#[error("{}", join_lines(.0))]
pub struct Errors(Vec<LookupError>);

impl Errors {
    /// Number of failures.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether there were no failures.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate the failures in collection order.
    pub fn iter(&self) -> std::slice::Iter<'_, LookupError> {
        self.0.iter()
    }

    /// `Ok(())` when empty, otherwise `Err(self)`.
    ///
    /// ```rust
    /// # fn check() -> Result<(), filemod::Errors> {
    /// let inputs = filemod::new(["Cargo.toml", "src/lib.rs"]);
    /// inputs.errors().into_result()?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn into_result(self) -> Result<(), Errors> {
        if self.0.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl FromIterator<LookupError> for Errors {
    fn from_iter<I: IntoIterator<Item = LookupError>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for Errors {
    type Item     = LookupError;
    type IntoIter = std::vec::IntoIter<LookupError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Errors {
    type Item     = &'a LookupError;
    type IntoIter = std::slice::Iter<'a, LookupError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

fn join_lines(errors: &[LookupError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn failure(path: &str, msg: &str) -> LookupError {
        LookupError::new(path, io::Error::new(io::ErrorKind::Other, msg.to_string()))
    }

    #[test]
    fn lookup_error_displays_source_verbatim() {
        let err = failure("/a1", "a1");
        assert_eq!(err.to_string(), "a1");
        assert_eq!(err.path(), Path::new("/a1"));
        assert_eq!(err.kind(), io::ErrorKind::Other);
    }

    #[test]
    fn lookup_error_is_the_end_of_its_chain() {
        let err = failure("/locked", "denied");
        assert!(std::error::Error::source(&err).is_none());
        assert_eq!(err.io_error().to_string(), "denied");
    }

    #[test]
    fn errors_join_with_newlines_in_order() {
        let errs: Errors = vec![failure("/a1", "a1"), failure("/a2", "a2")]
            .into_iter()
            .collect();
        assert_eq!(errs.len(), 2);
        assert_eq!(errs.to_string(), "a1\na2");
    }

    #[test]
    fn empty_errors_have_empty_message() {
        let errs = Errors::default();
        assert!(errs.is_empty());
        assert_eq!(errs.to_string(), "");
        assert!(errs.into_result().is_ok());
    }

    #[test]
    fn non_empty_errors_into_err() {
        let errs: Errors = std::iter::once(failure("/x", "boom")).collect();
        let err = errs.into_result().unwrap_err();
        assert_eq!(err.to_string(), "boom");
    }
}
