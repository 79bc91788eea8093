//! Markup-to-text conversion.
//!
//! [`Converter`] consumes [`MarkupEvent`]s and writes one normalized sentence
//! per line. The corpus has no explicit end-of-sentence tag: a sentence ends
//! when the next `<s>` opens or the enclosing `</p>` closes, and both sites
//! call [`Converter::flush`].

use std::io::{BufRead, BufWriter, Write};

use crate::error::{Error, Result};
use crate::markup::{MarkupEvent, MarkupEvents};
use crate::normalize::collapse_whitespace;
use crate::tag::{Tag, TagDirection};

/// Mutable state for a single conversion run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParserState {
    /// True between `<p>` and `</p>`.
    pub in_paragraph: bool,
    /// Raw character data of the segment being built.
    pub pending_text: String,
}

/// Counters collected over a conversion run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConversionStats {
    pub articles: usize,
    pub paragraphs: usize,
    pub sentences: usize,
    pub lines_written: usize,
    pub empty_segments: usize,
}

/// Event-driven converter writing sentences to `W`.
pub struct Converter<W: Write> {
    state: ParserState,
    stats: ConversionStats,
    out: W,
}

impl<W: Write> Converter<W> {
    pub fn new(out: W) -> Self {
        Self {
            state: ParserState::default(),
            stats: ConversionStats::default(),
            out,
        }
    }

    pub fn state(&self) -> &ParserState {
        &self.state
    }

    pub fn stats(&self) -> ConversionStats {
        self.stats
    }

    /// Apply one markup event.
    ///
    /// Unknown tags, `</s>`, and `<s>` outside a paragraph are fatal; the
    /// state is left as it was before the offending event.
    pub fn handle(&mut self, event: &MarkupEvent) -> Result<()> {
        match event {
            MarkupEvent::Text(text) => {
                self.state.pending_text.push_str(text);
                Ok(())
            }
            MarkupEvent::Start(name) => self.start_tag(name),
            MarkupEvent::End(name) => self.end_tag(name),
        }
    }

    fn start_tag(&mut self, name: &str) -> Result<()> {
        match Tag::from_name(name) {
            Some(Tag::Article) => {
                self.stats.articles += 1;
                Ok(())
            }
            Some(Tag::Paragraph) => {
                self.stats.paragraphs += 1;
                self.state.in_paragraph = true;
                Ok(())
            }
            Some(Tag::Sentence) => {
                if !self.state.in_paragraph {
                    return Err(Error::SentenceOutsideParagraph);
                }
                self.stats.sentences += 1;
                self.flush()
            }
            None => Err(unknown(TagDirection::Start, name)),
        }
    }

    fn end_tag(&mut self, name: &str) -> Result<()> {
        match Tag::from_name(name) {
            Some(Tag::Article) => Ok(()),
            Some(Tag::Paragraph) => {
                self.flush()?;
                self.state.in_paragraph = false;
                Ok(())
            }
            // Sentences are never closed explicitly.
            Some(Tag::Sentence) | None => Err(unknown(TagDirection::End, name)),
        }
    }

    /// Emit the pending segment as one line if it has any non-whitespace
    /// content, then reset it.
    pub fn flush(&mut self) -> Result<()> {
        match collapse_whitespace(&self.state.pending_text) {
            Some(line) => {
                writeln!(self.out, "{line}")?;
                self.stats.lines_written += 1;
            }
            None => self.stats.empty_segments += 1,
        }
        self.state.pending_text.clear();
        Ok(())
    }

    /// End the run, discarding any segment that was never flushed.
    ///
    /// Returns the writer (flushed) and the run statistics.
    pub fn finish(mut self) -> Result<(W, ConversionStats)> {
        if !self.state.pending_text.is_empty() {
            tracing::debug!(
                bytes = self.state.pending_text.len(),
                "discarding unterminated text at end of input"
            );
            self.state.pending_text.clear();
        }
        self.out.flush()?;
        Ok((self.out, self.stats))
    }
}

fn unknown(direction: TagDirection, name: &str) -> Error {
    Error::UnknownTag {
        direction,
        name: name.to_string(),
    }
}

/// Convert a whole corpus stream, writing sentences to `output`.
///
/// Lines written before a fatal error are flushed to `output` on a
/// best-effort basis; the conversion error is what gets returned.
pub fn convert<R: BufRead, W: Write>(input: R, output: W) -> Result<ConversionStats> {
    let mut converter = Converter::new(BufWriter::new(output));

    for event in MarkupEvents::new(input) {
        let result = event.and_then(|event| converter.handle(&event));
        if let Err(e) = result {
            if let Err(flush_err) = converter.out.flush() {
                tracing::debug!(error = %flush_err, "failed to flush output after fatal error");
            }
            return Err(e);
        }
    }

    let (_, stats) = converter.finish()?;
    tracing::debug!(
        articles = stats.articles,
        paragraphs = stats.paragraphs,
        sentences = stats.sentences,
        lines = stats.lines_written,
        empty = stats.empty_segments,
        "conversion finished"
    );
    Ok(stats)
}

/// Convert an in-memory corpus to a string of newline-terminated sentences.
///
/// # Examples
///
/// ```
/// let text = lmvp2text::convert_str("<art><p><s>Hello  world.<s>Bye.</p></art>").unwrap();
/// assert_eq!(text, "Hello world.\nBye.\n");
/// ```
pub fn convert_str(input: &str) -> Result<String> {
    let mut out = Vec::new();
    convert(input.as_bytes(), &mut out)?;
    Ok(String::from_utf8_lossy(&out).into_owned())
}
