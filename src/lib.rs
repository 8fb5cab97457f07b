pub mod config;
mod core;

pub use crate::core::alphabet::{consonants, vowels, Consonant, VocalDuration, VocalStrength, Vowel};
pub use crate::core::decoder::DecodeError;
pub use crate::core::letter::{all_letters, Letter, LetterReport, LetterShape};
pub use crate::core::string::LetterString;
pub use crate::core::unicode::{annotations, classify, Annotation};
