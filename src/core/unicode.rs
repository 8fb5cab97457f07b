//! Thamizh Unicode block: code point classification and letter encoding

use std::fmt;

use lazy_static::lazy_static;

use crate::core::alphabet::{CONSONANTS, CONSONANT_COUNT, DEAD_MARK, VOWELS, VOWEL_COUNT};

/// Start of the Thamizh Unicode block (U+0B80)
pub(crate) const BLOCK_BASE: u32 = 0x0B80;
/// Number of code points covered by the classification table
pub(crate) const BLOCK_SIZE: u32 = 80;

/// Number of letters in the index space
pub(crate) const LETTER_COUNT: usize = 246;
/// First pure consonant letter index
pub(crate) const CONSONANT_BASE: u8 = VOWEL_COUNT as u8;
/// First composed (consonant + vowel) letter index
pub(crate) const COMPOSED_BASE: u8 = (VOWEL_COUNT + CONSONANT_COUNT) as u8;

/// Classification of a single code point
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Annotation {
    /// Outside the block, or unassigned within it
    #[default]
    None,
    /// The dead-consonant mark
    DeadMark,
    /// Standalone vowel (vowel ordinal)
    Vowel(u8),
    /// Base consonant (consonant ordinal)
    Consonant(u8),
    /// Attached vowel sign (vowel ordinal, never 0)
    AttachedVowel(u8),
}

impl fmt::Display for Annotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Annotation::None => write!(f, "None"),
            Annotation::DeadMark => write!(f, "DeadMark {} 0", DEAD_MARK),
            Annotation::Vowel(i) => {
                write!(f, "Vowel {} {}", VOWELS[i as usize].primary_form(), i)
            }
            Annotation::Consonant(i) => {
                write!(f, "Consonant {} {}", CONSONANTS[i as usize].base_form(), i)
            }
            Annotation::AttachedVowel(i) => {
                let sign = VOWELS[i as usize].attached_form().unwrap_or(' ');
                write!(f, "AttachedVowel {} {}", sign, i)
            }
        }
    }
}

/// Offset of a code point inside the block; caller guarantees the range
fn block_offset(c: char) -> usize {
    (c as u32 - BLOCK_BASE) as usize
}

fn in_block(c: char) -> bool {
    (BLOCK_BASE..BLOCK_BASE + BLOCK_SIZE).contains(&(c as u32))
}

fn build_annotations() -> Vec<Annotation> {
    let mut table = vec![Annotation::None; BLOCK_SIZE as usize];
    table[block_offset(DEAD_MARK)] = Annotation::DeadMark;
    for (i, v) in VOWELS.iter().enumerate() {
        table[block_offset(v.primary_form())] = Annotation::Vowel(i as u8);
        if let Some(sign) = v.attached_form() {
            table[block_offset(sign)] = Annotation::AttachedVowel(i as u8);
        }
    }
    for (i, c) in CONSONANTS.iter().enumerate() {
        table[block_offset(c.base_form())] = Annotation::Consonant(i as u8);
    }
    table
}

fn build_encodings() -> Vec<String> {
    let mut table = Vec::with_capacity(LETTER_COUNT);
    // Vowel letters
    for v in VOWELS.iter() {
        table.push(v.rep());
    }
    // Pure consonant letters
    for c in CONSONANTS.iter() {
        table.push(c.rep());
    }
    // Composed letters, one row per consonant
    for c in CONSONANTS.iter() {
        for v in VOWELS.iter() {
            let mut s = String::with_capacity(6);
            s.push(c.base_form());
            if let Some(sign) = v.attached_form() {
                s.push(sign);
            }
            table.push(s);
        }
    }
    debug_assert_eq!(table.len(), LETTER_COUNT);
    table
}

lazy_static! {
    static ref ANNOTATIONS: Vec<Annotation> = build_annotations();
    static ref ENCODINGS: Vec<String> = build_encodings();
}

/// Classify a single code point
pub fn classify(c: char) -> Annotation {
    if in_block(c) {
        ANNOTATIONS[block_offset(c)]
    } else {
        Annotation::None
    }
}

/// Classify every code point of a text
pub fn annotations(text: &str) -> Vec<Annotation> {
    text.chars().map(classify).collect()
}

/// Unicode text of one letter index
///
/// Panics if `idx` is outside the letter index space.
pub(crate) fn encode_letter(idx: u8) -> &'static str {
    assert!(
        (idx as usize) < LETTER_COUNT,
        "letter index {} out of range",
        idx
    );
    &ENCODINGS[idx as usize]
}

/// Unicode text of a letter index sequence
pub(crate) fn encode(idxs: &[u8]) -> String {
    let mut out = String::with_capacity(idxs.len() * 6);
    for &idx in idxs {
        out.push_str(encode_letter(idx));
    }
    out
}
