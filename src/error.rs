//! Error types for lmvp2text operations.

use thiserror::Error;

use crate::tag::TagDirection;

/// Errors that abort a conversion run.
#[derive(Error, Debug)]
pub enum Error {
    /// A tag outside the `art`/`p`/`s` vocabulary, or a `</s>`.
    #[error("Found unknown tag: {direction}->{name}")]
    UnknownTag {
        direction: TagDirection,
        name: String,
    },

    /// A `<s>` that is not enclosed by a `<p>`.
    #[error("Malformed structure: sentence tag outside a paragraph")]
    SentenceOutsideParagraph,

    #[error("Markup error: {0}")]
    Markup(#[from] quick_xml::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// True for errors caused by the corpus itself rather than the
    /// environment (markup vocabulary or structure).
    pub fn is_corpus_error(&self) -> bool {
        matches!(
            self,
            Error::UnknownTag { .. } | Error::SentenceOutsideParagraph | Error::Markup(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, Error>;
