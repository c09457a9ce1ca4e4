//! Error types with rich diagnostics using miette
//!
//! Document loading is all-or-nothing: either variant aborts the build and
//! no partial scene is handed back.

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Errors that abort a document build, carrying the offending path.
#[derive(Error, Diagnostic, Debug)]
pub enum LoadError {
    #[error("unable to load {path}")]
    #[diagnostic(code(svgscene::load::io))]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed document in {path}")]
    #[diagnostic(code(svgscene::load::xml))]
    Xml {
        path: String,
        message: String,
        #[source_code]
        src: NamedSource<String>,
        #[label("{message}")]
        span: SourceSpan,
    },
}

impl LoadError {
    /// Wrap a reader error, pointing the label at the reported position.
    pub(crate) fn xml(path: &str, source: &str, err: roxmltree::Error) -> LoadError {
        let offset = offset_of(source, err.pos().row, err.pos().col);
        LoadError::Xml {
            path: path.to_string(),
            message: err.to_string(),
            src: NamedSource::new(path, source.to_string()),
            span: (offset, 0).into(),
        }
    }
}

/// Byte offset of a 1-based row/column position, clamped to the source length.
fn offset_of(source: &str, row: u32, col: u32) -> usize {
    let mut offset = 0usize;
    for (i, line) in source.split('\n').enumerate() {
        if i + 1 == row as usize {
            offset += (col as usize).saturating_sub(1).min(line.len());
            return offset.min(source.len());
        }
        offset += line.len() + 1;
    }
    source.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_of_first_line() {
        assert_eq!(offset_of("abc\ndef", 1, 2), 1);
    }

    #[test]
    fn offset_of_later_line() {
        assert_eq!(offset_of("abc\ndef", 2, 3), 6);
    }

    #[test]
    fn offset_clamps_past_the_end() {
        assert_eq!(offset_of("abc", 9, 9), 3);
    }
}
