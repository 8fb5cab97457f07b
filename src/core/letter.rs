//! Thamizh letter model and letter algebra

use std::fmt;
use std::str::FromStr;

use lazy_static::lazy_static;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::core::alphabet::{VocalDuration, VocalStrength, CONSONANTS, VOWELS, VOWEL_COUNT};
use crate::core::decoder::{decode, DecodeError};
use crate::core::unicode::{encode_letter, COMPOSED_BASE, CONSONANT_BASE, LETTER_COUNT};

// Property query bits
const BIT_STRONG: u8 = 1 << 0;
const BIT_MEDIUM: u8 = 1 << 1;
const BIT_MILD: u8 = 1 << 2;
const BIT_SHORT: u8 = 1 << 3;
const BIT_LONG: u8 = 1 << 4;

fn strength_bit(s: VocalStrength) -> u8 {
    match s {
        VocalStrength::Strong => BIT_STRONG,
        VocalStrength::Medium => BIT_MEDIUM,
        VocalStrength::Mild => BIT_MILD,
    }
}

fn duration_bit(d: VocalDuration) -> u8 {
    match d {
        VocalDuration::Short => BIT_SHORT,
        VocalDuration::Long => BIT_LONG,
    }
}

fn build_property_table() -> [u8; LETTER_COUNT] {
    let mut table = [0u8; LETTER_COUNT];
    for (vi, v) in VOWELS.iter().enumerate() {
        table[vi] = duration_bit(v.duration());
    }
    for (ci, c) in CONSONANTS.iter().enumerate() {
        table[CONSONANT_BASE as usize + ci] = strength_bit(c.strength());
    }
    for (ci, c) in CONSONANTS.iter().enumerate() {
        let row = COMPOSED_BASE as usize + ci * VOWEL_COUNT;
        for (vi, v) in VOWELS.iter().enumerate() {
            table[row + vi] = strength_bit(c.strength()) | duration_bit(v.duration());
        }
    }
    table
}

lazy_static! {
    static ref PROPERTIES: [u8; LETTER_COUNT] = build_property_table();
}

/// Overall shape of a letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum LetterShape {
    /// உயிர் எழுத்து
    Vowel,
    /// மெய் எழுத்து
    Consonant,
    /// உயிர்மெய் எழுத்து
    Composed,
}

/// A Thamizh letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Letter {
    idx: u8,
}

impl Letter {
    pub(crate) fn from_index(idx: u8) -> Self {
        debug_assert!((idx as usize) < LETTER_COUNT);
        Self { idx }
    }

    pub(crate) fn index(self) -> u8 {
        self.idx
    }

    pub fn shape(self) -> LetterShape {
        if self.is_vowel() {
            LetterShape::Vowel
        } else if self.is_consonant() {
            LetterShape::Consonant
        } else {
            LetterShape::Composed
        }
    }

    /// Vowel letter (உயிர் எழுத்து)
    pub fn is_vowel(self) -> bool {
        self.idx < CONSONANT_BASE
    }

    /// Pure consonant letter (மெய் எழுத்து)
    pub fn is_consonant(self) -> bool {
        (CONSONANT_BASE..COMPOSED_BASE).contains(&self.idx)
    }

    /// Composed consonant + vowel letter (உயிர்மெய் எழுத்து)
    pub fn is_composed(self) -> bool {
        self.idx >= COMPOSED_BASE
    }

    /// Primary letter (முதல் எழுத்து): vowel or pure consonant
    pub fn is_primary(self) -> bool {
        self.idx < COMPOSED_BASE
    }

    fn has(self, bit: u8) -> bool {
        PROPERTIES[self.idx as usize] & bit != 0
    }

    pub fn is_strong_vocal(self) -> bool {
        self.has(BIT_STRONG)
    }

    pub fn is_medium_vocal(self) -> bool {
        self.has(BIT_MEDIUM)
    }

    pub fn is_mild_vocal(self) -> bool {
        self.has(BIT_MILD)
    }

    pub fn is_short_vocal(self) -> bool {
        self.has(BIT_SHORT)
    }

    pub fn is_long_vocal(self) -> bool {
        self.has(BIT_LONG)
    }

    /// Consonant strength; `None` for vowel letters
    pub fn strength(self) -> Option<VocalStrength> {
        if self.has(BIT_STRONG) {
            Some(VocalStrength::Strong)
        } else if self.has(BIT_MEDIUM) {
            Some(VocalStrength::Medium)
        } else if self.has(BIT_MILD) {
            Some(VocalStrength::Mild)
        } else {
            None
        }
    }

    /// Vowel duration; `None` for pure consonant letters
    pub fn duration(self) -> Option<VocalDuration> {
        if self.has(BIT_SHORT) {
            Some(VocalDuration::Short)
        } else if self.has(BIT_LONG) {
            Some(VocalDuration::Long)
        } else {
            None
        }
    }

    /// Same letter as the given single-letter literal
    ///
    /// Panics if `literal` is not exactly one valid letter.
    pub fn is_letter(self, literal: &str) -> bool {
        match literal.parse::<Letter>() {
            Ok(l) => l == self,
            Err(e) => panic!("invalid letter literal {:?}: {}", literal, e),
        }
    }

    /// Split a composed letter into its pure consonant and vowel letters
    ///
    /// Panics unless the letter is composed.
    pub fn split(self) -> (Letter, Letter) {
        assert!(self.is_composed(), "split: expected composed letter, got {}", self);
        let offset = self.idx - COMPOSED_BASE;
        let vowels = VOWEL_COUNT as u8;
        (
            Letter::from_index(CONSONANT_BASE + offset / vowels),
            Letter::from_index(offset % vowels),
        )
    }

    /// Join a pure consonant letter with a vowel letter
    ///
    /// Panics unless `self` is a pure consonant and `vowel` a vowel letter.
    pub fn join(self, vowel: Letter) -> Letter {
        assert!(
            self.is_consonant() && vowel.is_vowel(),
            "join: expected consonant and vowel letters, got {} and {}",
            self,
            vowel
        );
        let row = (self.idx - CONSONANT_BASE) * VOWEL_COUNT as u8;
        Letter::from_index(COMPOSED_BASE + row + vowel.idx)
    }

    /// Letter text with a summary of its properties, e.g. `கா, Consonant|Vowel|Long|Strong`
    pub fn describe(self) -> String {
        let mut parts = vec![match self.shape() {
            LetterShape::Vowel => "Vowel",
            LetterShape::Consonant => "Consonant",
            LetterShape::Composed => "Consonant|Vowel",
        }];
        match self.duration() {
            Some(VocalDuration::Short) => parts.push("Short"),
            Some(VocalDuration::Long) => parts.push("Long"),
            None => {}
        }
        match self.strength() {
            Some(VocalStrength::Strong) => parts.push("Strong"),
            Some(VocalStrength::Medium) => parts.push("Medium"),
            Some(VocalStrength::Mild) => parts.push("Mild"),
            None => {}
        }
        format!("{}, {}", self, parts.join("|"))
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(encode_letter(self.idx))
    }
}

impl FromStr for Letter {
    type Err = DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let idxs = decode(s)?;
        if idxs.len() != 1 {
            return Err(DecodeError::NotSingleLetter { count: idxs.len() });
        }
        Ok(Letter::from_index(idxs[0]))
    }
}

impl Serialize for Letter {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(encode_letter(self.idx))
    }
}

impl<'de> Deserialize<'de> for Letter {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}

/// Serializable summary of one letter
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LetterReport {
    pub text: String,
    pub shape: LetterShape,
    pub strength: Option<VocalStrength>,
    pub duration: Option<VocalDuration>,
}

impl From<Letter> for LetterReport {
    fn from(letter: Letter) -> Self {
        Self {
            text: letter.to_string(),
            shape: letter.shape(),
            strength: letter.strength(),
            duration: letter.duration(),
        }
    }
}

/// Ordered iterator over all letters: vowels, pure consonants, then composed rows
pub fn all_letters() -> impl Iterator<Item = Letter> {
    (0..LETTER_COUNT as u8).map(Letter::from_index)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn letter(s: &str) -> Letter {
        s.parse().unwrap()
    }

    #[test]
    fn test_shapes() {
        assert_eq!(letter("அ").shape(), LetterShape::Vowel);
        assert_eq!(letter("க்").shape(), LetterShape::Consonant);
        assert_eq!(letter("க").shape(), LetterShape::Composed);
        assert!(letter("அ").is_primary());
        assert!(letter("ழ்").is_primary());
        assert!(!letter("மி").is_primary());
    }

    #[test]
    fn test_band_counts() {
        assert_eq!(all_letters().filter(|l| l.is_vowel()).count(), 12);
        assert_eq!(all_letters().filter(|l| l.is_consonant()).count(), 18);
        assert_eq!(all_letters().filter(|l| l.is_composed()).count(), 216);
    }

    #[test]
    fn test_vocalization() {
        assert!(letter("அ").is_short_vocal());
        assert!(letter("க்").is_strong_vocal());
        let ka = letter("க");
        assert!(ka.is_strong_vocal() && ka.is_short_vocal());
        assert!(letter("ழ்").is_medium_vocal());
        assert!(letter("மை").is_mild_vocal() && letter("மை").is_long_vocal());
    }

    #[test]
    fn test_property_presence() {
        for l in all_letters() {
            assert_eq!(l.strength().is_some(), !l.is_vowel(), "{}", l);
            assert_eq!(l.duration().is_some(), !l.is_consonant(), "{}", l);
            if l.is_composed() {
                let (c, v) = l.split();
                assert_eq!(l.strength(), c.strength());
                assert_eq!(l.duration(), v.duration());
            }
        }
    }

    #[test]
    fn test_split_join() {
        let (c, v) = letter("க").split();
        assert!(c.is_letter("க்"));
        assert!(v.is_letter("அ"));
        assert!(c.join(v).is_letter("க"));

        let (c, v) = letter("ழி").split();
        assert!(c.is_letter("ழ்"));
        assert!(v.is_letter("இ"));
    }

    #[test]
    fn test_split_join_closure() {
        let consonants: Vec<Letter> = all_letters().filter(|l| l.is_consonant()).collect();
        let vowels: Vec<Letter> = all_letters().filter(|l| l.is_vowel()).collect();
        for &c in &consonants {
            for &v in &vowels {
                assert_eq!(c.join(v).split(), (c, v));
            }
        }
        for l in all_letters().filter(|l| l.is_composed()) {
            let (c, v) = l.split();
            assert_eq!(c.join(v), l);
        }
    }

    #[test]
    #[should_panic(expected = "expected composed letter")]
    fn test_split_non_composed() {
        letter("க்").split();
    }

    #[test]
    #[should_panic(expected = "expected consonant and vowel")]
    fn test_join_wrong_bands() {
        letter("அ").join(letter("இ"));
    }

    #[test]
    #[should_panic(expected = "invalid letter literal")]
    fn test_is_letter_invalid_literal() {
        letter("அ").is_letter("தமிழ்");
    }

    #[test]
    fn test_from_str_errors() {
        assert_eq!(
            "தமிழ்".parse::<Letter>(),
            Err(DecodeError::NotSingleLetter { count: 3 })
        );
        assert_eq!("".parse::<Letter>(), Err(DecodeError::Empty));
        assert!(matches!(
            "்".parse::<Letter>(),
            Err(DecodeError::MissingBaseConsonant { .. })
        ));
    }

    #[test]
    fn test_describe() {
        assert_eq!(letter("அ").describe(), "அ, Vowel|Short");
        assert_eq!(letter("ழ்").describe(), "ழ், Consonant|Medium");
        assert_eq!(letter("கா").describe(), "கா, Consonant|Vowel|Long|Strong");
    }

    #[test]
    fn test_report() {
        let report = LetterReport::from(letter("மி"));
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["text"], "மி");
        assert_eq!(json["shape"], "Composed");
        assert_eq!(json["strength"], "Mild");
        assert_eq!(json["duration"], "Short");

        let vowel = serde_json::to_value(LetterReport::from(letter("ஆ"))).unwrap();
        assert!(vowel["strength"].is_null());
    }

    #[test]
    fn test_serde() {
        let json = serde_json::to_string(&letter("மி")).unwrap();
        assert_eq!(json, "\"மி\"");
        let parsed: Letter = serde_json::from_str(&json).unwrap();
        assert!(parsed.is_letter("மி"));
        assert!(serde_json::from_str::<Letter>("\"x\"").is_err());
    }
}
