//! Streaming tokenizer for VP corpus markup.
//!
//! Wraps a lenient `quick_xml` reader and turns its events into owned
//! [`MarkupEvent`]s: tag opens, tag closes, and character data. The reader
//! does not validate nesting; the SGML corpus leaves `<s>` unclosed and the
//! converter owns all structural rules.
//!
//! A `<` that cannot open a tag (`a < b`, `x<>y`, `<3`) is character data,
//! the same as in SGML: a tag name must start with an ASCII letter.

use std::collections::VecDeque;
use std::io::BufRead;

use quick_xml::Reader;
use quick_xml::events::Event;

use crate::error::Result;

/// A single markup event, in document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MarkupEvent {
    /// Opening tag, name lowercased. Attributes are dropped.
    Start(String),
    /// Closing tag, name lowercased.
    End(String),
    /// Character data with character references already resolved.
    Text(String),
}

/// Pull-based iterator of [`MarkupEvent`]s over a buffered reader.
pub struct MarkupEvents<R> {
    reader: Reader<R>,
    buf: Vec<u8>,
    /// Events recovered from markup that turned out to be data.
    pending: VecDeque<MarkupEvent>,
    done: bool,
}

impl<R: BufRead> MarkupEvents<R> {
    pub fn new(input: R) -> Self {
        let mut reader = Reader::from_reader(input);
        let config = reader.config_mut();
        config.trim_text(false);
        config.check_end_names = false;
        config.allow_unmatched_ends = true;
        config.allow_dangling_amp = true;

        Self {
            reader,
            buf: Vec::new(),
            pending: VecDeque::new(),
            done: false,
        }
    }

    /// Read the next event, or `None` at end of input.
    ///
    /// Comments, processing instructions, declarations and doctypes are
    /// skipped. Once an error has been returned the stream is exhausted.
    pub fn next_event(&mut self) -> Result<Option<MarkupEvent>> {
        if let Some(event) = self.pending.pop_front() {
            return Ok(Some(event));
        }
        if self.done {
            return Ok(None);
        }

        loop {
            self.buf.clear();
            let event = match self.reader.read_event_into(&mut self.buf) {
                Ok(event) => event,
                Err(e) => {
                    self.done = true;
                    return Err(e.into());
                }
            };

            let converted = match event {
                Event::Start(e) if !is_tag_name(e.name().as_ref()) => {
                    let content = e.to_vec();
                    self.recover_data("<", content, ">")?
                }
                Event::Empty(e) if !is_tag_name(e.name().as_ref()) => {
                    let content = e.to_vec();
                    self.recover_data("<", content, "/>")?
                }
                Event::End(e) if !is_tag_name(e.name().as_ref()) => {
                    let content = e.to_vec();
                    self.recover_data("</", content, ">")?
                }
                Event::Start(e) | Event::Empty(e) => {
                    MarkupEvent::Start(tag_name(e.name().as_ref()))
                }
                Event::End(e) => MarkupEvent::End(tag_name(e.name().as_ref())),
                Event::Text(e) => {
                    MarkupEvent::Text(String::from_utf8_lossy(e.as_ref()).into_owned())
                }
                Event::CData(e) => {
                    MarkupEvent::Text(String::from_utf8_lossy(&e.into_inner()).into_owned())
                }
                Event::GeneralRef(e) => {
                    let entity = String::from_utf8_lossy(e.as_ref());
                    match resolve_entity(&entity) {
                        Some(resolved) => MarkupEvent::Text(resolved),
                        None => {
                            tracing::debug!(
                                entity = %entity,
                                position = self.reader.buffer_position(),
                                "dropping unknown entity reference"
                            );
                            continue;
                        }
                    }
                }
                Event::Eof => {
                    self.done = true;
                    return Ok(None);
                }
                _ => continue,
            };

            return Ok(Some(converted));
        }
    }

    /// Turn a bogus tag back into data.
    ///
    /// The tag's opener becomes text; its content and closer are tokenized
    /// again, since a real tag may hide inside (`a < b</p>`).
    fn recover_data(
        &mut self,
        open: &str,
        mut content: Vec<u8>,
        close: &str,
    ) -> Result<MarkupEvent> {
        content.extend_from_slice(close.as_bytes());
        for event in MarkupEvents::new(content.as_slice()) {
            match event {
                Ok(event) => self.pending.push_back(event),
                Err(e) => {
                    self.done = true;
                    self.pending.clear();
                    return Err(e);
                }
            }
        }
        Ok(MarkupEvent::Text(open.to_string()))
    }
}

impl<R: BufRead> Iterator for MarkupEvents<R> {
    type Item = Result<MarkupEvent>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_event().transpose()
    }
}

fn is_tag_name(raw: &[u8]) -> bool {
    raw.first().is_some_and(u8::is_ascii_alphabetic)
}

fn tag_name(raw: &[u8]) -> String {
    String::from_utf8_lossy(raw).to_ascii_lowercase()
}

/// Resolve a predefined or numeric character reference.
fn resolve_entity(entity: &str) -> Option<String> {
    match entity {
        "apos" => return Some("'".to_string()),
        "quot" => return Some("\"".to_string()),
        "lt" => return Some("<".to_string()),
        "gt" => return Some(">".to_string()),
        "amp" => return Some("&".to_string()),
        _ => {}
    }

    let code = if let Some(hex) = entity
        .strip_prefix("#x")
        .or_else(|| entity.strip_prefix("#X"))
    {
        u32::from_str_radix(hex, 16).ok()?
    } else {
        entity.strip_prefix('#')?.parse::<u32>().ok()?
    };

    char::from_u32(code).map(|c| c.to_string())
}
