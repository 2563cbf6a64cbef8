//! Finite-state scanner that splits text into character-class runs.
//!
//! The scanner walks the input once and emits maximal runs of English
//! identifiers, whitespace, numbers, Chinese ideographs, and single symbols.
//! Fullwidth digits and Latin letters drive the same transitions as their
//! ASCII counterparts; the emitted text always keeps the original characters.
//!
//! # Examples
//!
//! ```
//! use hanseg::analysis::token::WordType;
//! use hanseg::analysis::tokenizer::lexical::{Dfa, Scanner};
//!
//! let text: Vec<char> = "ＩＢＭ发布3.5版".chars().collect();
//! let runs = Scanner::new(Dfa::standard()).scan(&text);
//!
//! let kinds: Vec<_> = runs.iter().map(|t| (t.text.as_str(), t.word_type)).collect();
//! assert_eq!(kinds, vec![
//!     ("ＩＢＭ", WordType::English),
//!     ("发布", WordType::SimplifiedChinese),
//!     ("3.5", WordType::Numeric),
//!     ("版", WordType::SimplifiedChinese),
//! ]);
//! ```

use std::sync::LazyLock;

use super::Tokenizer;

use crate::analysis::token::{IntoTokenStream, Token, TokenStream, WordType};
use crate::error::Result;
use crate::util::fullwidth_to_ascii;

/// Index of a state in its [`Dfa`].
pub type StateId = usize;

pub const START: StateId = 0;
const IDENT: StateId = 1;
const IDENT_END: StateId = 2;
const SPACE: StateId = 3;
const SPACE_END: StateId = 4;
const NUMBER: StateId = 5;
const NUMBER_DOT: StateId = 6;
const NUMBER_END: StateId = 7;
const IDEOGRAPH: StateId = 8;
const IDEOGRAPH_END: StateId = 9;
pub const SYMBOL: StateId = 10;

const IDEOGRAPH_RANGES: &[(char, char)] = &[
    ('\u{3400}', '\u{4DBF}'),   // CJK Extension A
    ('\u{4E00}', '\u{9FFF}'),   // CJK Unified Ideographs
    ('\u{F900}', '\u{FAFF}'),   // CJK Compatibility Ideographs
    ('\u{20000}', '\u{2A6DF}'), // CJK Extension B
    ('\u{2A700}', '\u{2B73F}'), // CJK Extension C
    ('\u{2B740}', '\u{2B81F}'), // CJK Extension D
    ('\u{2B820}', '\u{2CEAF}'), // CJK Extension E
];

const IDENT_START_RANGES: &[(char, char)] = &[('_', '_'), ('a', 'z'), ('A', 'Z')];
const IDENT_RANGES: &[(char, char)] = &[('_', '_'), ('a', 'z'), ('A', 'Z'), ('0', '9')];
const SPACE_RANGES: &[(char, char)] = &[(' ', ' '), ('\t', '\t'), ('\r', '\r'), ('\n', '\n')];
const DIGIT_RANGES: &[(char, char)] = &[('0', '9')];

/// One scanner state.
///
/// Quit states close the run that is currently open. Every other state either
/// matches the input against its sorted transition ranges or falls back to
/// its else-state.
#[derive(Clone, Debug)]
pub struct State {
    pub id: StateId,
    pub quit: bool,
    /// Run type emitted when this state is entered
    pub emit: Option<WordType>,
    transitions: Vec<(char, char, StateId)>,
    else_state: StateId,
}

impl State {
    pub fn new(id: StateId) -> Self {
        State {
            id,
            quit: false,
            emit: None,
            transitions: Vec::new(),
            else_state: START,
        }
    }

    /// Quit state emitting a run of `kind`.
    pub fn emitting(id: StateId, kind: WordType) -> Self {
        State {
            quit: true,
            emit: Some(kind),
            ..Self::new(id)
        }
    }

    /// Add transitions for every inclusive range.
    pub fn on(mut self, ranges: &[(char, char)], target: StateId) -> Self {
        self.transitions
            .extend(ranges.iter().map(|&(low, high)| (low, high, target)));
        self.transitions.sort_by_key(|&(low, _, _)| low);
        self
    }

    /// Set the fallback transition.
    pub fn otherwise(mut self, target: StateId) -> Self {
        self.else_state = target;
        self
    }

    /// Next state for `input`, and whether the else-transition was taken.
    /// End of input (`None`) always takes the else-transition.
    pub fn next(&self, input: Option<char>) -> (StateId, bool) {
        let Some(c) = input else {
            return (self.else_state, true);
        };
        let c = fullwidth_to_ascii(c);
        let index = self.transitions.partition_point(|&(low, _, _)| low <= c);
        match index.checked_sub(1).map(|i| self.transitions[i]) {
            Some((_, high, target)) if c <= high => (target, false),
            _ => (self.else_state, true),
        }
    }
}

/// An immutable transition table.
#[derive(Clone, Debug)]
pub struct Dfa {
    states: Vec<State>,
}

static STANDARD_DFA: LazyLock<Dfa> = LazyLock::new(|| {
    Dfa::new(vec![
        State::new(START)
            .on(IDENT_START_RANGES, IDENT)
            .on(SPACE_RANGES, SPACE)
            .on(DIGIT_RANGES, NUMBER)
            .on(IDEOGRAPH_RANGES, IDEOGRAPH)
            .otherwise(SYMBOL),
        State::new(IDENT).on(IDENT_RANGES, IDENT).otherwise(IDENT_END),
        State::emitting(IDENT_END, WordType::English),
        State::new(SPACE).on(SPACE_RANGES, SPACE).otherwise(SPACE_END),
        State::emitting(SPACE_END, WordType::Space),
        State::new(NUMBER)
            .on(DIGIT_RANGES, NUMBER)
            .on(&[('.', '.')], NUMBER_DOT)
            .otherwise(NUMBER_END),
        State::new(NUMBER_DOT).on(DIGIT_RANGES, NUMBER_DOT).otherwise(NUMBER_END),
        State::emitting(NUMBER_END, WordType::Numeric),
        State::new(IDEOGRAPH).on(IDEOGRAPH_RANGES, IDEOGRAPH).otherwise(IDEOGRAPH_END),
        State::emitting(IDEOGRAPH_END, WordType::SimplifiedChinese),
        State::emitting(SYMBOL, WordType::Symbol),
    ])
});

impl Dfa {
    /// Build a table. State ids must equal their index.
    pub fn new(states: Vec<State>) -> Self {
        debug_assert!(states.iter().enumerate().all(|(i, s)| s.id == i));
        Dfa { states }
    }

    /// The shared table for mixed Chinese/English text.
    pub fn standard() -> &'static Dfa {
        &STANDARD_DFA
    }

    pub fn state(&self, id: StateId) -> &State {
        &self.states[id]
    }
}

/// Runs a [`Dfa`] over text.
#[derive(Clone, Copy, Debug)]
pub struct Scanner<'a> {
    dfa: &'a Dfa,
}

impl<'a> Scanner<'a> {
    pub fn new(dfa: &'a Dfa) -> Self {
        Scanner { dfa }
    }

    /// Split `text` into runs. Positions are code-point offsets.
    pub fn scan(&self, text: &[char]) -> Vec<Token> {
        let mut runs = Vec::new();
        let mut state = START;
        let mut begin = 0;
        let mut index = 0;

        loop {
            let input = text.get(index).copied();
            if state == START && input.is_none() {
                break;
            }

            let (next, is_else) = self.dfa.state(state).next(input);
            let target = self.dfa.state(next);

            if let Some(kind) = target.emit {
                // Symbols consume the character that selected them; other
                // runs end before the character that closed them.
                let end = if next == SYMBOL { index + 1 } else { index };
                let word: String = text[begin..end].iter().collect();
                runs.push(
                    Token::new(word, begin)
                        .with_word_type(kind)
                        .with_original_word_type(kind),
                );
                begin = end;
            }

            if !target.quit {
                state = next;
                index += 1;
                continue;
            }

            state = START;
            if !is_else || next == SYMBOL {
                index += 1;
            }
        }

        runs
    }
}

impl Tokenizer for Scanner<'_> {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        let chars: Vec<char> = text.chars().collect();
        Ok(self.scan(&chars).into_token_stream())
    }

    fn name(&self) -> &'static str {
        "lexical"
    }
}
