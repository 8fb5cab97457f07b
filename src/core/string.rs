//! Thamizh letter string: decoding, trimming, appending and syllabification

use std::fmt;
use std::str::FromStr;

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::core::decoder::{decode, DecodeError};
use crate::core::letter::Letter;

/// Non-empty sequence of Thamizh letters
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LetterString {
    letters: Vec<Letter>,
}

#[allow(clippy::len_without_is_empty)]
impl LetterString {
    fn from_letters(letters: Vec<Letter>) -> Self {
        assert!(!letters.is_empty(), "letter string cannot be empty");
        Self { letters }
    }

    /// Decode Unicode text
    pub fn decode(text: &str) -> Result<Self, DecodeError> {
        let idxs = decode(text)?;
        Ok(Self::from_letters(
            idxs.into_iter().map(Letter::from_index).collect(),
        ))
    }

    /// Unicode text of the string
    pub fn encode(&self) -> String {
        let idxs: Vec<u8> = self.letters.iter().map(|l| l.index()).collect();
        crate::core::unicode::encode(&idxs)
    }

    /// Number of letters
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    pub fn letters(&self) -> impl Iterator<Item = Letter> + '_ {
        self.letters.iter().copied()
    }

    pub fn first_letter(&self) -> Letter {
        self.letters[0]
    }

    pub fn last_letter(&self) -> Letter {
        self.letters[self.letters.len() - 1]
    }

    /// Letter at position `i`
    ///
    /// Panics if `i` is past the end.
    pub fn letter_at(&self, i: usize) -> Letter {
        assert!(
            i < self.letters.len(),
            "letter index {} out of bounds for length {}",
            i,
            self.letters.len()
        );
        self.letters[i]
    }

    /// Exact letter-wise prefix check
    pub fn has_prefix(&self, prefix: &LetterString) -> bool {
        self.letters.starts_with(&prefix.letters)
    }

    /// Exact letter-wise suffix check
    pub fn has_suffix(&self, suffix: &LetterString) -> bool {
        self.letters.ends_with(&suffix.letters)
    }

    /// Remove a trailing `suffix`, returning the trimmed string
    ///
    /// Besides an exact tail match, a composed letter whose vowel part equals
    /// the suffix's leading vowel matches too; only its consonant part is
    /// kept (தமிழிலக்கனம் - இலக்கனம் = தமிழ்). Dead-mark overlap is not tried.
    /// Returns `None` when nothing matches or nothing would remain.
    pub fn strip_suffix(&self, suffix: &LetterString) -> Option<LetterString> {
        let n = self.letters.len();
        let m = suffix.letters.len();
        if m > n {
            return None;
        }
        let at = n - m;

        if self.letters[at..] == suffix.letters[..] {
            if at == 0 {
                return None;
            }
            return Some(Self::from_letters(self.letters[..at].to_vec()));
        }

        let pivot = self.letters[at];
        let lead = suffix.letters[0];
        if !pivot.is_composed() || !lead.is_vowel() {
            return None;
        }
        if self.letters[at + 1..] != suffix.letters[1..] {
            return None;
        }
        let (consonant, vowel) = pivot.split();
        if vowel != lead {
            return None;
        }
        let mut letters = Vec::with_capacity(at + 1);
        letters.extend_from_slice(&self.letters[..at]);
        letters.push(consonant);
        Some(Self::from_letters(letters))
    }

    /// Trim a trailing `suffix`; on failure the original string comes back with `false`
    pub fn trim_end(&self, suffix: &LetterString) -> (LetterString, bool) {
        match self.strip_suffix(suffix) {
            Some(trimmed) => (trimmed, true),
            None => (self.clone(), false),
        }
    }

    /// Concatenate, merging a trailing pure consonant with a leading vowel
    pub fn append(&self, other: &LetterString) -> LetterString {
        let mut letters = Vec::with_capacity(self.letters.len() + other.letters.len());
        letters.extend_from_slice(&self.letters);

        let last = self.last_letter();
        let first = other.first_letter();
        if last.is_consonant() && first.is_vowel() {
            letters.pop();
            letters.push(last.join(first));
            letters.extend_from_slice(&other.letters[1..]);
        } else {
            letters.extend_from_slice(&other.letters);
        }
        Self::from_letters(letters)
    }

    /// Split into syllables
    ///
    /// A syllable starts at a vowel or composed letter and runs through the
    /// pure consonants after it. The first syllable always starts at 0.
    pub fn syllables(&self) -> Vec<LetterString> {
        let mut out = Vec::new();
        let mut start = 0;
        for (i, l) in self.letters.iter().enumerate().skip(1) {
            if !l.is_consonant() {
                out.push(Self::from_letters(self.letters[start..i].to_vec()));
                start = i;
            }
        }
        out.push(Self::from_letters(self.letters[start..].to_vec()));
        out
    }

    /// Syllables joined with `sep`, e.g. `த-மிழ்`
    pub fn syllabified(&self, sep: &str) -> String {
        self.syllables()
            .iter()
            .map(|s| s.encode())
            .collect::<Vec<_>>()
            .join(sep)
    }
}

impl fmt::Display for LetterString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for l in &self.letters {
            write!(f, "{}", l)?;
        }
        Ok(())
    }
}

impl FromStr for LetterString {
    type Err = DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::decode(s)
    }
}

impl Serialize for LetterString {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.encode())
    }
}

impl<'de> Deserialize<'de> for LetterString {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::decode(&s).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn s(text: &str) -> LetterString {
        LetterString::decode(text).unwrap()
    }

    #[test]
    fn test_decode_encode() {
        let word = s("தமிழ்");
        assert_eq!(word.len(), 3);
        assert_eq!(word.encode(), "தமிழ்");
        assert_eq!(word.to_string(), "தமிழ்");
        assert!(LetterString::decode("").is_err());
        assert!(LetterString::decode("ி").is_err());
    }

    #[test]
    fn test_letter_access() {
        let word = s("தமிழ்");
        assert!(word.first_letter().is_letter("த"));
        assert!(word.last_letter().is_letter("ழ்"));
        for (i, want) in ["த", "மி", "ழ்"].iter().enumerate() {
            assert!(word.letter_at(i).is_letter(want));
        }
        let texts: Vec<String> = word.letters().map(|l| l.to_string()).collect();
        assert_eq!(texts, vec!["த", "மி", "ழ்"]);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_letter_at_out_of_bounds() {
        s("தமிழ்").letter_at(3);
    }

    #[test]
    fn test_prefix_suffix() {
        let word = s("தமிழிலக்கனம்");
        assert!(word.has_prefix(&s("தமி")));
        assert!(word.has_suffix(&s("கனம்")));
        // Exact letters only: ழி is not ழ்
        assert!(!word.has_prefix(&s("தமிழ்")));
        assert!(!word.has_suffix(&s("இலக்கனம்")));
    }

    #[test]
    fn test_trim_end_exact() {
        let (trimmed, ok) = s("தமிழ்நாடு").trim_end(&s("நாடு"));
        assert!(ok);
        assert_eq!(trimmed.encode(), "தமிழ்");
    }

    #[test]
    fn test_trim_end_overlap() {
        let (trimmed, ok) = s("தமிழிலக்கனம்").trim_end(&s("இலக்கனம்"));
        assert!(ok);
        assert_eq!(trimmed.encode(), "தமிழ்");
        assert_eq!(trimmed.len(), 3);
    }

    #[test]
    fn test_trim_end_failure() {
        let word = s("தமிழ்");
        let (same, ok) = word.trim_end(&s("நாடு"));
        assert!(!ok);
        assert_eq!(same, word);

        // Longer suffix
        assert!(word.strip_suffix(&s("தமிழ்நாடு")).is_none());
        // Whole string would vanish
        assert!(word.strip_suffix(&s("தமிழ்")).is_none());
        // Overlap needs the same vowel
        assert!(s("தமிழிலக்கனம்").strip_suffix(&s("உலக்கனம்")).is_none());
        // Overlap needs a leading vowel letter in the suffix
        assert!(s("தமிழ்").strip_suffix(&s("ம்")).is_none());
    }

    #[test]
    fn test_trim_end_overlap_at_start() {
        // The composed letter is the first one
        let (trimmed, ok) = s("கஇ").trim_end(&s("அஇ"));
        assert!(ok);
        assert_eq!(trimmed.encode(), "க்");
    }

    #[test]
    fn test_trim_end_single_vowel_overlap() {
        let (trimmed, ok) = s("தமிழி").trim_end(&s("இ"));
        assert!(ok);
        assert_eq!(trimmed.encode(), "தமிழ்");
    }

    #[test]
    fn test_trim_end_overlap_same_length() {
        // Exact match fails on the only letter, the vowel overlap still applies
        let (trimmed, ok) = s("கா").trim_end(&s("ஆ"));
        assert!(ok);
        assert_eq!(trimmed.encode(), "க்");
        assert!(trimmed.first_letter().is_consonant());
    }

    #[test]
    fn test_append_merge() {
        let joined = s("தமிழ்").append(&s("இலக்கனம்"));
        assert_eq!(joined.encode(), "தமிழிலக்கனம்");
        assert_eq!(joined.len(), 8);
    }

    #[test]
    fn test_append_plain() {
        assert_eq!(s("தமிழ்").append(&s("நாடு")).encode(), "தமிழ்நாடு");
        // Composed letter does not merge with a following vowel
        assert_eq!(s("தமிழ").append(&s("இ")).encode(), "தமிழஇ");
        assert_eq!(s("அ").append(&s("ஆ")).len(), 2);
    }

    #[test]
    fn test_append_trim_inverse() {
        let stem = s("தமிழ்");
        let suffix = s("இலக்கனம்");
        let (back, ok) = stem.append(&suffix).trim_end(&suffix);
        assert!(ok);
        assert_eq!(back, stem);
    }

    #[test]
    fn test_syllables() {
        let parts: Vec<String> = s("தமிழ்").syllables().iter().map(|p| p.encode()).collect();
        assert_eq!(parts, vec!["த", "மிழ்"]);
    }

    #[test]
    fn test_syllabified() {
        let cases = [
            ("அ", "அ"),
            ("ழ்", "ழ்"),
            ("க", "க"),
            ("தமிழ்", "த-மிழ்"),
            (
                "ஒட்டுமொத்தமாகப்பார்த்துக்கொண்டிருந்தாள்",
                "ஒட்-டு-மொத்-த-மா-கப்-பார்த்-துக்-கொண்-டி-ருந்-தாள்",
            ),
        ];
        for (input, want) in cases {
            assert_eq!(s(input).syllabified("-"), want);
        }
    }

    #[test]
    fn test_syllables_leading_consonants() {
        // Leading pure consonants form the first syllable on their own
        assert_eq!(s("ப்ரம்மா").syllabified("|"), "ப்|ரம்|மா");
        assert_eq!(s("க்க்").syllables().len(), 1);
    }

    #[test]
    fn test_syllables_reconstruct() {
        let word = s("ஒட்டுமொத்தமாகப்பார்த்துக்கொண்டிருந்தாள்");
        let letters: Vec<Letter> = word
            .syllables()
            .iter()
            .flat_map(|p| p.letters().collect::<Vec<_>>())
            .collect();
        assert_eq!(letters, word.letters().collect::<Vec<_>>());
    }

    #[test]
    fn test_serde() {
        let word = s("தமிழ்");
        let json = serde_json::to_string(&word).unwrap();
        assert_eq!(json, "\"தமிழ்\"");
        let back: LetterString = serde_json::from_str(&json).unwrap();
        assert_eq!(back, word);
        assert!(serde_json::from_str::<LetterString>("\"\"").is_err());
    }
}
