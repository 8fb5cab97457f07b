//! Thamizh alphabet tables: ordered consonants and vowels

use serde::{Deserialize, Serialize};

/// Dead-consonant mark (புள்ளி), U+0BCD
pub const DEAD_MARK: char = '\u{0BCD}';

/// Number of consonants (மெய் எழுத்து)
pub const CONSONANT_COUNT: usize = 18;
/// Number of vowels (உயிர் எழுத்து)
pub const VOWEL_COUNT: usize = 12;

/// Consonant vocalization strength
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VocalStrength {
    /// வல்லினம்
    Strong,
    /// இடையினம்
    Medium,
    /// மெல்லினம்
    Mild,
}

/// Vowel vocalization duration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VocalDuration {
    /// குறில்
    Short,
    /// நெடில்
    Long,
}

/// A consonant of the script
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Consonant {
    /// Base code point, without the dead mark
    base: char,
    strength: VocalStrength,
}

impl Consonant {
    const fn new(base: char, strength: VocalStrength) -> Self {
        Self { base, strength }
    }

    /// Base code point (consonant with its inherent அ)
    pub fn base_form(&self) -> char {
        self.base
    }

    /// Pure consonant text: base code point followed by the dead mark
    pub fn rep(&self) -> String {
        let mut s = String::with_capacity(6);
        s.push(self.base);
        s.push(DEAD_MARK);
        s
    }

    /// Base form as text
    pub fn base_form_rep(&self) -> String {
        self.base.to_string()
    }

    pub fn strength(&self) -> VocalStrength {
        self.strength
    }
}

/// A vowel of the script
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Vowel {
    /// Standalone code point
    primary: char,
    /// Combining (attached) code point; the first vowel has none
    attached: Option<char>,
    duration: VocalDuration,
}

impl Vowel {
    const fn new(primary: char, attached: Option<char>, duration: VocalDuration) -> Self {
        Self {
            primary,
            attached,
            duration,
        }
    }

    pub fn primary_form(&self) -> char {
        self.primary
    }

    pub fn attached_form(&self) -> Option<char> {
        self.attached
    }

    /// Standalone vowel text
    pub fn rep(&self) -> String {
        self.primary.to_string()
    }

    /// Attached vowel text (empty for அ, which has no attached form)
    pub fn attached_form_rep(&self) -> String {
        self.attached.map(String::from).unwrap_or_default()
    }

    pub fn duration(&self) -> VocalDuration {
        self.duration
    }
}

use VocalDuration::{Long, Short};
use VocalStrength::{Medium, Mild, Strong};

/// Ordered consonant list
#[rustfmt::skip]
pub static CONSONANTS: [Consonant; CONSONANT_COUNT] = [
    Consonant::new('க', Strong), // ka
    Consonant::new('ங', Mild),   // nga
    Consonant::new('ச', Strong), // ca
    Consonant::new('ஞ', Mild),   // ña
    Consonant::new('ட', Strong), // ṭa
    Consonant::new('ண', Mild),   // ṇa
    Consonant::new('த', Strong), // ta
    Consonant::new('ந', Mild),   // na
    Consonant::new('ப', Strong), // pa
    Consonant::new('ம', Mild),   // ma
    Consonant::new('ய', Medium), // ya
    Consonant::new('ர', Medium), // ra
    Consonant::new('ல', Medium), // la
    Consonant::new('வ', Medium), // va
    Consonant::new('ழ', Medium), // ḻa
    Consonant::new('ள', Medium), // ḷa
    Consonant::new('ற', Strong), // ṟa
    Consonant::new('ன', Mild),   // ṉa
];

/// Ordered vowel list
#[rustfmt::skip]
pub static VOWELS: [Vowel; VOWEL_COUNT] = [
    Vowel::new('அ', None,      Short),
    Vowel::new('ஆ', Some('ா'), Long),
    Vowel::new('இ', Some('ி'), Short),
    Vowel::new('ஈ', Some('ீ'), Long),
    Vowel::new('உ', Some('ு'), Short),
    Vowel::new('ஊ', Some('ூ'), Long),
    Vowel::new('எ', Some('ெ'), Short),
    Vowel::new('ஏ', Some('ே'), Long),
    Vowel::new('ஐ', Some('ை'), Long),
    Vowel::new('ஒ', Some('ொ'), Short),
    Vowel::new('ஓ', Some('ோ'), Long),
    Vowel::new('ஔ', Some('ௌ'), Long),
];

/// Ordered consonant iterator
pub fn consonants() -> impl Iterator<Item = &'static Consonant> {
    CONSONANTS.iter()
}

/// Ordered vowel iterator
pub fn vowels() -> impl Iterator<Item = &'static Vowel> {
    VOWELS.iter()
}
