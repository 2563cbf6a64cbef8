//! Dictionary word attributes and part-of-speech bitmasks.

use std::fmt;
use std::ops::BitOr;

use serde::{Deserialize, Serialize};

/// Part-of-speech bitmask of a dictionary entry.
///
/// A word may carry several parts of speech at once; each is a single bit.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PartOfSpeech(u32);

impl PartOfSpeech {
    pub const UNKNOWN: PartOfSpeech = PartOfSpeech(0);
    /// Adjective
    pub const ADJECTIVE: PartOfSpeech = PartOfSpeech(0x4000_0000);
    /// Distinguishing word
    pub const DISTINGUISHING: PartOfSpeech = PartOfSpeech(0x2000_0000);
    /// Conjunction
    pub const CONJUNCTION: PartOfSpeech = PartOfSpeech(0x1000_0000);
    /// Adverb
    pub const ADVERB: PartOfSpeech = PartOfSpeech(0x0800_0000);
    /// Interjection
    pub const INTERJECTION: PartOfSpeech = PartOfSpeech(0x0400_0000);
    /// Direction word
    pub const DIRECTION: PartOfSpeech = PartOfSpeech(0x0200_0000);
    /// Idiom
    pub const IDIOM: PartOfSpeech = PartOfSpeech(0x0100_0000);
    /// Fixed expression
    pub const EXPRESSION: PartOfSpeech = PartOfSpeech(0x0080_0000);
    /// Numeral
    pub const NUMERAL: PartOfSpeech = PartOfSpeech(0x0040_0000);
    /// Numeral-classifier compound
    pub const NUMERAL_CLASSIFIER: PartOfSpeech = PartOfSpeech(0x0020_0000);
    /// Noun
    pub const NOUN: PartOfSpeech = PartOfSpeech(0x0010_0000);
    /// Onomatopoeia
    pub const ONOMATOPOEIA: PartOfSpeech = PartOfSpeech(0x0008_0000);
    /// Preposition
    pub const PREPOSITION: PartOfSpeech = PartOfSpeech(0x0004_0000);
    /// Classifier
    pub const CLASSIFIER: PartOfSpeech = PartOfSpeech(0x0002_0000);
    /// Pronoun
    pub const PRONOUN: PartOfSpeech = PartOfSpeech(0x0001_0000);
    /// Locative word
    pub const LOCATIVE: PartOfSpeech = PartOfSpeech(0x0000_8000);
    /// Time word
    pub const TIME: PartOfSpeech = PartOfSpeech(0x0000_4000);
    /// Particle
    pub const PARTICLE: PartOfSpeech = PartOfSpeech(0x0000_2000);
    /// Verb
    pub const VERB: PartOfSpeech = PartOfSpeech(0x0000_1000);
    /// Punctuation
    pub const PUNCTUATION: PartOfSpeech = PartOfSpeech(0x0000_0800);
    /// Non-morpheme character
    pub const NON_MORPHEME: PartOfSpeech = PartOfSpeech(0x0000_0400);
    /// Modal particle
    pub const MODAL: PartOfSpeech = PartOfSpeech(0x0000_0200);
    /// Status word
    pub const STATUS: PartOfSpeech = PartOfSpeech(0x0000_0100);
    /// Person name
    pub const PERSON_NAME: PartOfSpeech = PartOfSpeech(0x0000_0080);
    /// Place name
    pub const PLACE_NAME: PartOfSpeech = PartOfSpeech(0x0000_0040);
    /// Organization name
    pub const ORGANIZATION: PartOfSpeech = PartOfSpeech(0x0000_0020);
    /// Foreign word
    pub const FOREIGN: PartOfSpeech = PartOfSpeech(0x0000_0010);
    /// Other proper noun
    pub const PROPER_NOUN: PartOfSpeech = PartOfSpeech(0x0000_0008);
    /// Prefix component
    pub const PREFIX: PartOfSpeech = PartOfSpeech(0x0000_0004);
    /// Suffix component
    pub const SUFFIX: PartOfSpeech = PartOfSpeech(0x0000_0002);

    /// Function words: conjunctions, prepositions, pronouns and particles.
    pub const FUNCTION_WORDS: PartOfSpeech = PartOfSpeech(
        Self::CONJUNCTION.0 | Self::PREPOSITION.0 | Self::PRONOUN.0 | Self::PARTICLE.0,
    );

    pub const fn from_bits(bits: u32) -> Self {
        PartOfSpeech(bits)
    }

    pub const fn bits(self) -> u32 {
        self.0
    }

    /// True if any bit of `other` is set in `self`.
    pub const fn intersects(self, other: PartOfSpeech) -> bool {
        self.0 & other.0 != 0
    }

    pub const fn is_function_word(self) -> bool {
        self.intersects(Self::FUNCTION_WORDS)
    }
}

impl BitOr for PartOfSpeech {
    type Output = PartOfSpeech;

    fn bitor(self, rhs: Self) -> Self::Output {
        PartOfSpeech(self.0 | rhs.0)
    }
}

impl fmt::Display for PartOfSpeech {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:08x}", self.0)
    }
}

/// A dictionary entry: the word, its part-of-speech bitmask and frequency.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WordAttr {
    pub word: String,
    pub pos: PartOfSpeech,
    pub frequency: f64,
}

impl WordAttr {
    pub fn new<S: Into<String>>(word: S, pos: PartOfSpeech, frequency: f64) -> Self {
        WordAttr {
            word: word.into(),
            pos,
            frequency,
        }
    }

    /// Number of code points in the word.
    pub fn char_len(&self) -> usize {
        self.word.chars().count()
    }
}
