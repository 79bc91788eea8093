//! The fixed tag vocabulary of the VP corpus format.

use std::fmt;

/// Structural tags recognized in the corpus.
///
/// Articles contain paragraphs, paragraphs contain sentences. Only sentence
/// boundaries affect the output text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tag {
    /// `art`
    Article,
    /// `p`
    Paragraph,
    /// `s`
    Sentence,
}

impl Tag {
    const ALL: [Tag; 3] = [Tag::Article, Tag::Paragraph, Tag::Sentence];

    /// Look up a tag by name, ignoring ASCII case.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|tag| tag.name().eq_ignore_ascii_case(name))
    }

    pub fn name(self) -> &'static str {
        match self {
            Tag::Article => "art",
            Tag::Paragraph => "p",
            Tag::Sentence => "s",
        }
    }
}

/// Whether a tag opens or closes an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TagDirection {
    Start,
    End,
}

impl fmt::Display for TagDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TagDirection::Start => f.write_str("start"),
            TagDirection::End => f.write_str("end"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name() {
        assert_eq!(Tag::from_name("art"), Some(Tag::Article));
        assert_eq!(Tag::from_name("p"), Some(Tag::Paragraph));
        assert_eq!(Tag::from_name("s"), Some(Tag::Sentence));
        assert_eq!(Tag::from_name("P"), Some(Tag::Paragraph));
        assert_eq!(Tag::from_name("ART"), Some(Tag::Article));
        assert_eq!(Tag::from_name("foo"), None);
        assert_eq!(Tag::from_name(""), None);
        assert_eq!(Tag::from_name("sp"), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(TagDirection::Start.to_string(), "start");
        assert_eq!(TagDirection::End.to_string(), "end");
    }
}
