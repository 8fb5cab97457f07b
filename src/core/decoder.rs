//! Unicode text -> letter index decoder (single-pass state machine)

use std::fmt;

use crate::core::alphabet::VOWEL_COUNT;
use crate::core::unicode::{classify, Annotation, COMPOSED_BASE, CONSONANT_BASE};

/// Decode failure
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// Input has no letters
    Empty,
    /// Code point outside the supported alphabet
    UnsupportedCodePoint { position: usize, ch: char },
    /// Dead mark or attached vowel sign without a base consonant before it
    MissingBaseConsonant { position: usize, ch: char },
    /// A single-letter literal decoded to a different number of letters
    NotSingleLetter { count: usize },
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeError::Empty => write!(f, "empty input"),
            DecodeError::UnsupportedCodePoint { position, ch } => write!(
                f,
                "unsupported code point U+{:04X} ({:?}) at position {}",
                *ch as u32, ch, position
            ),
            DecodeError::MissingBaseConsonant { position, ch } => write!(
                f,
                "combining code point U+{:04X} at position {} has no base consonant",
                *ch as u32, position
            ),
            DecodeError::NotSingleLetter { count } => {
                write!(f, "expected a single letter, got {}", count)
            }
        }
    }
}

impl std::error::Error for DecodeError {}

fn pure_consonant(c: u8) -> u8 {
    CONSONANT_BASE + c
}

fn composed(c: u8, v: u8) -> u8 {
    COMPOSED_BASE + c * VOWEL_COUNT as u8 + v
}

/// Decoder state machine
///
/// Carries the annotation of the previous code point. Only a base consonant
/// may be followed by (at most one) dead mark or attached vowel sign.
/// The first failure sticks: later `feed` calls and `finish` report it again.
pub(crate) struct Decoder {
    prev: Annotation,
    position: usize,
    output: Vec<u8>,
    failed: Option<DecodeError>,
}

impl Decoder {
    pub(crate) fn new() -> Self {
        Self {
            prev: Annotation::None,
            position: 0,
            output: Vec::new(),
            failed: None,
        }
    }

    /// Feed one code point
    pub(crate) fn feed(&mut self, ch: char) -> Result<(), DecodeError> {
        if let Some(e) = &self.failed {
            return Err(e.clone());
        }
        match self.step(ch) {
            Ok(()) => Ok(()),
            Err(e) => {
                self.output.clear();
                self.failed = Some(e.clone());
                Err(e)
            }
        }
    }

    fn step(&mut self, ch: char) -> Result<(), DecodeError> {
        let curr = classify(ch);
        log::trace!("decode {} after {:?}", curr, self.prev);
        match curr {
            Annotation::Consonant(_) => {
                // A consonant directly after another one stands with its inherent vowel
                self.flush_bare_consonant();
            }
            Annotation::Vowel(v) => {
                self.flush_bare_consonant();
                self.output.push(v);
            }
            Annotation::DeadMark | Annotation::AttachedVowel(_) => {
                let Annotation::Consonant(c) = self.prev else {
                    return Err(DecodeError::MissingBaseConsonant {
                        position: self.position,
                        ch,
                    });
                };
                let idx = match curr {
                    Annotation::AttachedVowel(v) => composed(c, v),
                    _ => pure_consonant(c),
                };
                self.output.push(idx);
            }
            Annotation::None => {
                return Err(DecodeError::UnsupportedCodePoint {
                    position: self.position,
                    ch,
                });
            }
        }
        self.prev = curr;
        self.position += 1;
        Ok(())
    }

    /// Emit a pending base consonant as consonant + அ
    fn flush_bare_consonant(&mut self) {
        if let Annotation::Consonant(c) = self.prev {
            self.output.push(composed(c, 0));
        }
    }

    /// Finish decoding and return the letter indices
    pub(crate) fn finish(mut self) -> Result<Vec<u8>, DecodeError> {
        if let Some(e) = self.failed.take() {
            return Err(e);
        }
        self.flush_bare_consonant();
        if self.output.is_empty() {
            return Err(DecodeError::Empty);
        }
        Ok(self.output)
    }
}

/// Decode a Unicode text into letter indices
///
/// Fails as a whole: no partial result is ever returned.
pub(crate) fn decode(text: &str) -> Result<Vec<u8>, DecodeError> {
    let mut decoder = Decoder::new();
    for ch in text.chars() {
        if let Err(e) = decoder.feed(ch) {
            log::debug!("rejected {:?}: {}", text, e);
            return Err(e);
        }
    }
    decoder.finish()
}
