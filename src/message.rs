//! Message boundary: symbols or text in, symbols or text out
//!
//! The codec only works on field elements. Text is mapped one character per
//! symbol through its code point, which must fit into the field.

use crate::reed_solomon::error::{RsError, RsResult};
use crate::reed_solomon::galois::{Element, GaloisField};

/// Input or output of the codec
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    Symbols(Vec<Element>),
    Text(String),
}

/// Representation requested for codec output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Symbols,
    Text,
}

impl Message {
    /// Normalize to field elements, validating every symbol against `field`
    pub fn to_symbols(&self, field: &GaloisField) -> RsResult<Vec<Element>> {
        match self {
            Message::Symbols(symbols) => symbols
                .iter()
                .map(|&s| field.check(s as u32))
                .collect(),
            Message::Text(text) => text_to_symbols(text, field),
        }
    }

    /// Wrap codec output in the requested representation
    pub fn from_symbols(symbols: Vec<Element>, format: OutputFormat) -> RsResult<Self> {
        match format {
            OutputFormat::Symbols => Ok(Message::Symbols(symbols)),
            OutputFormat::Text => symbols_to_text(&symbols).map(Message::Text),
        }
    }

    pub fn as_symbols(&self) -> Option<&[Element]> {
        match self {
            Message::Symbols(symbols) => Some(symbols),
            Message::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Message::Text(text) => Some(text),
            Message::Symbols(_) => None,
        }
    }

    /// Number of symbols (characters for text)
    pub fn len(&self) -> usize {
        match self {
            Message::Symbols(symbols) => symbols.len(),
            Message::Text(text) => text.chars().count(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl From<&str> for Message {
    fn from(text: &str) -> Self {
        Message::Text(text.to_string())
    }
}

impl From<String> for Message {
    fn from(text: String) -> Self {
        Message::Text(text)
    }
}

impl From<Vec<Element>> for Message {
    fn from(symbols: Vec<Element>) -> Self {
        Message::Symbols(symbols)
    }
}

impl From<&[u8]> for Message {
    fn from(bytes: &[u8]) -> Self {
        Message::Symbols(bytes.iter().map(|&b| b as Element).collect())
    }
}

/// Map each character to its code point, rejecting those outside the field
pub fn text_to_symbols(text: &str, field: &GaloisField) -> RsResult<Vec<Element>> {
    text.chars()
        .map(|ch| {
            let code = ch as u32;
            if field.contains(code) {
                Ok(code as Element)
            } else {
                Err(RsError::TextSymbolOutOfRange {
                    ch,
                    code,
                    cap: field.cap() as u32,
                })
            }
        })
        .collect()
}

/// Map each symbol back to the character with that code point
pub fn symbols_to_text(symbols: &[Element]) -> RsResult<String> {
    symbols
        .iter()
        .map(|&s| char::from_u32(s as u32).ok_or(RsError::NotRepresentableAsText(s)))
        .collect()
}
