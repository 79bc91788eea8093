//! # lmvp2text
//!
//! Convert HUB4 "Verbalized Punctuation" language-model corpora from their
//! SGML markup into plain text, one sentence per line.
//!
//! The corpus uses three tags: `<art>` (article), `<p>` (paragraph) and
//! `<s>` (sentence start). Sentences are never closed explicitly; a sentence
//! ends where the next one starts or where its paragraph closes. Any other
//! tag aborts the conversion.
//!
//! ## Quick Start
//!
//! ```
//! use lmvp2text::convert_str;
//!
//! let text = convert_str("<art><p><s>Hello  world.<s>Bye.</p></art>").unwrap();
//! assert_eq!(text, "Hello world.\nBye.\n");
//! ```
//!
//! ## Streaming
//!
//! [`convert`] reads any [`std::io::BufRead`] and writes to any
//! [`std::io::Write`]:
//!
//! ```no_run
//! use std::io;
//!
//! let stdin = io::stdin().lock();
//! let stdout = io::stdout().lock();
//! lmvp2text::convert(stdin, stdout)?;
//! # Ok::<(), lmvp2text::Error>(())
//! ```

pub mod converter;
pub mod error;
pub mod markup;
pub mod normalize;
pub mod tag;

pub use converter::{ConversionStats, Converter, ParserState, convert, convert_str};
pub use error::{Error, Result};
pub use markup::{MarkupEvent, MarkupEvents};
pub use tag::{Tag, TagDirection};
