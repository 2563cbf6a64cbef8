//! Dictionary-driven segmentation of one Chinese run.
//!
//! Candidates are split into independent groups, the tilings of each group
//! are enumerated and ranked, and the ranked tilings are recombined across
//! groups into up to `K` full-run tilings. Depending on the options, one or
//! several of them are merged into the output, together with unknown words
//! for the characters no accepted word covers.

use std::ops::Range;
use std::sync::Arc;

use crate::analysis::token::{Token, WordType};
use crate::dictionary::{Candidate, Lexicon, PartOfSpeech, WordAttr};
use crate::matcher::options::MatchOptions;
use crate::matcher::parameter::MatchParameter;
use crate::matcher::tree::TilingTree;

/// Minimum number of recombined tilings.
const TOP_TILINGS: usize = 3;

/// Level of synthesized single-character candidates.
const SINGLE_LEVEL: usize = 3;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Coverage {
    Uncovered,
    /// Covered only by a one-character word
    Single,
    /// Covered by a word of two or more characters
    Multi,
    /// Single-covered and absorbed into an unknown word
    Folded,
}

/// Segments Chinese runs with a lexicon and a fixed set of options.
#[derive(Debug, Clone, Copy)]
pub struct ChineseFullTextMatch<'a> {
    lexicon: &'a Lexicon,
    options: &'a MatchOptions,
    params: &'a MatchParameter,
}

impl<'a> ChineseFullTextMatch<'a> {
    pub fn new(lexicon: &'a Lexicon, options: &'a MatchOptions, params: &'a MatchParameter) -> Self {
        ChineseFullTextMatch {
            lexicon,
            options,
            params,
        }
    }

    /// Segment `run` given its position-sorted `candidates`.
    ///
    /// Token positions are offsets inside `run`.
    pub fn run(&self, candidates: &[Candidate], run: &[char]) -> Vec<Token> {
        debug_assert!(candidates.windows(2).all(|w| w[0].position <= w[1].position));
        debug_assert!(candidates.iter().all(|c| c.length > 0 && c.end() <= run.len()));

        if run.is_empty() {
            return Vec::new();
        }
        if candidates.is_empty() {
            return self.unknown_run(run);
        }

        let slots = self.recombine(candidates);
        let accepted = self.select(&slots, candidates, run.len());

        let mut coverage = vec![Coverage::Uncovered; run.len()];
        for candidate in &accepted {
            if candidate.length > 1 {
                coverage[candidate.position..candidate.end()].fill(Coverage::Multi);
            } else if coverage[candidate.position] != Coverage::Multi {
                coverage[candidate.position] = Coverage::Single;
            }
        }

        let unknowns = self.unknown_words(&mut coverage, run);

        let known = accepted.into_iter().filter(|candidate| {
            self.options.force_single_word
                || candidate.length > 1
                || coverage[candidate.position] != Coverage::Folded
        });

        let mut unknowns = unknowns.into_iter().peekable();
        let mut tokens = Vec::new();
        for candidate in known {
            while let Some(unknown) = unknowns.next_if(|u| u.position <= candidate.position) {
                tokens.push(unknown);
            }
            tokens.push(self.known_token(&candidate, run));
        }
        tokens.extend(unknowns);
        tokens
    }

    /// Split candidates into groups. A candidate starting at or after the
    /// furthest end seen so far starts a new group.
    fn groups(candidates: &[Candidate]) -> Vec<(Range<usize>, usize)> {
        let mut groups = Vec::new();
        let mut first = 0;
        let mut boundary = candidates[0].end();

        for (index, candidate) in candidates.iter().enumerate().skip(1) {
            if candidate.position >= boundary {
                groups.push((first..index, boundary));
                first = index;
            }
            boundary = boundary.max(candidate.end());
        }
        groups.push((first..candidates.len(), boundary));
        groups
    }

    /// Build the top `K` full-run tilings as lists of candidate indices.
    ///
    /// Slot `i` takes every group's `i`-th ranked tiling, or the group's last
    /// one when it has fewer. `K` never exceeds the largest leaf count of any
    /// group, since further slots would only repeat the last one.
    fn recombine(&self, candidates: &[Candidate]) -> Vec<Vec<usize>> {
        let trees: Vec<_> = Self::groups(candidates)
            .into_iter()
            .map(|(range, end)| {
                let group = &candidates[range.clone()];
                let mut tree = TilingTree::build(group, group[0].position, end);
                tree.rank(self.options.frequency_first);
                (range.start, tree)
            })
            .collect();

        let most_leaves = trees.iter().map(|(_, tree)| tree.leaf_count()).max().unwrap_or(0);
        let k = TOP_TILINGS
            .max(self.params.redundancy.saturating_add(1))
            .min(most_leaves.max(1));
        let mut slots = vec![Vec::new(); k];

        for (offset, tree) in &trees {
            let last = tree.leaf_count().saturating_sub(1);
            for (i, slot) in slots.iter_mut().enumerate() {
                slot.extend(tree.tiling(i.min(last)).into_iter().map(|j| offset + j));
            }
        }

        slots
    }

    /// Merge the selected tilings into one position-ordered candidate list.
    fn select(&self, slots: &[Vec<usize>], candidates: &[Candidate], run_len: usize) -> Vec<Candidate> {
        let mut accepted: Vec<Candidate> = Vec::new();

        if !self.options.multi_dimensionality && !self.options.force_single_word {
            let best = slots[0].iter().map(|&i| candidates[i].clone());
            merge_layer(&mut accepted, best, 0);
            return accepted;
        }

        let last_slot = self.params.redundancy.min(slots.len() - 1);
        for (level, slot) in slots.iter().enumerate().take(last_slot + 1) {
            merge_layer(&mut accepted, slot.iter().map(|&i| candidates[i].clone()), level);
        }

        if self.options.force_single_word {
            let unknown = Arc::new(WordAttr::new("", PartOfSpeech::UNKNOWN, 0.0));
            let singles = (0..run_len).map(|position| Candidate::new(position, 1, unknown.clone()));
            merge_layer(&mut accepted, singles, SINGLE_LEVEL);
        }

        accepted
    }

    /// Detect unknown words from the coverage of accepted words.
    ///
    /// Folded positions are marked in `coverage`.
    fn unknown_words(&self, coverage: &mut [Coverage], run: &[char]) -> Vec<Token> {
        let mut unknowns = Vec::new();

        if !self.options.unknown_word_identify {
            for (position, cell) in coverage.iter().enumerate() {
                if *cell == Coverage::Uncovered {
                    unknowns.push(self.unknown_token(run, position..position + 1));
                }
            }
            return unknowns;
        }

        let foldable = |position: usize, cell: Coverage| match cell {
            Coverage::Uncovered => true,
            Coverage::Single => self.is_function_word(run[position]),
            Coverage::Multi | Coverage::Folded => false,
        };

        let mut position = 0;
        while position < run.len() {
            if !foldable(position, coverage[position]) {
                position += 1;
                continue;
            }

            let start = position;
            while position < run.len() && foldable(position, coverage[position]) {
                position += 1;
            }

            if position - start <= 2 {
                for k in start..position {
                    if coverage[k] == Coverage::Uncovered {
                        unknowns.push(self.unknown_token(run, k..k + 1));
                    }
                }
            } else {
                for cell in &mut coverage[start..position] {
                    if *cell == Coverage::Single {
                        *cell = Coverage::Folded;
                    }
                }
                unknowns.push(self.unknown_token(run, start..position));
            }
        }

        unknowns
    }

    fn is_function_word(&self, c: char) -> bool {
        self.lexicon
            .lookup(&[c])
            .is_some_and(|attr| attr.pos.is_function_word())
    }

    /// No candidate at all: the whole run is unknown.
    fn unknown_run(&self, run: &[char]) -> Vec<Token> {
        if self.options.unknown_word_identify {
            vec![self.unknown_token(run, 0..run.len())]
        } else {
            (0..run.len())
                .map(|position| self.unknown_token(run, position..position + 1))
                .collect()
        }
    }

    fn unknown_token(&self, run: &[char], span: Range<usize>) -> Token {
        let start = span.start;
        Token::new(run[span].iter().collect::<String>(), start)
            .with_rank(self.params.unknown_rank)
            .with_word_type(WordType::Unknown)
    }

    fn known_token(&self, candidate: &Candidate, run: &[char]) -> Token {
        Token::new(run[candidate.position..candidate.end()].iter().collect::<String>(), candidate.position)
            .with_rank(self.params.rank_for_level(candidate.level))
            .with_word_type(WordType::SimplifiedChinese)
            .with_pos(candidate.attr.pos)
            .with_frequency(candidate.attr.frequency)
    }
}

/// Insert each candidate of `layer` before the entries at its position,
/// unless an entry with the same position and length is already present.
fn merge_layer<I>(accepted: &mut Vec<Candidate>, layer: I, level: usize)
where
    I: IntoIterator<Item = Candidate>,
{
    for mut candidate in layer {
        let at = accepted.partition_point(|c| c.position < candidate.position);
        let duplicate = accepted[at..]
            .iter()
            .take_while(|c| c.position == candidate.position)
            .any(|c| c.length == candidate.length);
        if duplicate {
            continue;
        }
        candidate.level = level;
        accepted.insert(at, candidate);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lexicon(words: &[(&str, PartOfSpeech, f64)]) -> Lexicon {
        Lexicon::from_entries(
            words
                .iter()
                .map(|&(word, pos, frequency)| WordAttr::new(word, pos, frequency)),
        )
    }

    fn segment(
        lexicon: &Lexicon,
        text: &str,
        options: &MatchOptions,
        params: &MatchParameter,
    ) -> Vec<(String, usize, u32, WordType)> {
        let run: Vec<char> = text.chars().collect();
        let candidates = lexicon.matches(&run, None);
        ChineseFullTextMatch::new(lexicon, options, params)
            .run(&candidates, &run)
            .into_iter()
            .map(|t| (t.text, t.position, t.rank, t.word_type))
            .collect()
    }

    fn texts(tokens: &[(String, usize, u32, WordType)]) -> Vec<&str> {
        tokens.iter().map(|(text, _, _, _)| text.as_str()).collect()
    }

    fn single_best() -> MatchOptions {
        MatchOptions {
            multi_dimensionality: false,
            ..MatchOptions::default()
        }
    }

    #[test]
    fn test_single_known_word() {
        let lexicon = lexicon(&[("中国", PartOfSpeech::PLACE_NAME, 10.0)]);
        let tokens = segment(&lexicon, "中国", &MatchOptions::default(), &MatchParameter::default());
        assert_eq!(
            tokens,
            vec![("中国".to_string(), 0, 5, WordType::SimplifiedChinese)]
        );
    }

    #[test]
    fn test_no_candidates() {
        let lexicon = Lexicon::new();
        let params = MatchParameter::default();

        let tokens = segment(&lexicon, "甲乙丙丁戊", &MatchOptions::default(), &params);
        assert_eq!(tokens, vec![("甲乙丙丁戊".to_string(), 0, 1, WordType::Unknown)]);

        let options = MatchOptions {
            unknown_word_identify: false,
            ..MatchOptions::default()
        };
        let tokens = segment(&lexicon, "甲乙丙丁戊", &options, &params);
        assert_eq!(tokens.len(), 5);
        assert!(tokens.iter().all(|(text, _, _, kind)| text.chars().count() == 1 && *kind == WordType::Unknown));
        assert_eq!(tokens[4].1, 4);
    }

    #[test]
    fn test_fewer_words_win() {
        let lexicon = lexicon(&[
            ("甲乙", PartOfSpeech::NOUN, 5.0),
            ("甲", PartOfSpeech::NOUN, 1.0),
            ("乙", PartOfSpeech::NOUN, 1.0),
        ]);
        let options = MatchOptions {
            frequency_first: true,
            ..single_best()
        };
        let tokens = segment(&lexicon, "甲乙", &options, &MatchParameter::default());
        assert_eq!(texts(&tokens), vec!["甲乙"]);
    }

    #[test]
    fn test_groups_are_resolved_independently() {
        let lexicon = lexicon(&[
            ("研究", PartOfSpeech::VERB, 5.0),
            ("研究生", PartOfSpeech::NOUN, 3.0),
            ("生命", PartOfSpeech::NOUN, 5.0),
            ("命", PartOfSpeech::NOUN, 1.0),
            ("起源", PartOfSpeech::NOUN, 5.0),
        ]);
        let tokens = segment(&lexicon, "研究生命起源", &single_best(), &MatchParameter::default());
        assert_eq!(texts(&tokens), vec!["研究", "生命", "起源"]);
    }

    #[test]
    fn test_redundancy_adds_lower_tiers() {
        let lexicon = lexicon(&[
            ("中华", PartOfSpeech::NOUN, 5.0),
            ("华人", PartOfSpeech::NOUN, 1.0),
            ("中", PartOfSpeech::NOUN, 1.0),
            ("人", PartOfSpeech::NOUN, 1.0),
        ]);
        let params = MatchParameter {
            redundancy: 1,
            ..MatchParameter::default()
        };
        let tokens = segment(&lexicon, "中华人", &MatchOptions::default(), &params);

        // Best: 中华 人 (rank 5); second: 中 华人 (rank 3)
        assert_eq!(
            tokens,
            vec![
                ("中".to_string(), 0, 3, WordType::SimplifiedChinese),
                ("中华".to_string(), 0, 5, WordType::SimplifiedChinese),
                ("华人".to_string(), 1, 3, WordType::SimplifiedChinese),
                ("人".to_string(), 2, 5, WordType::SimplifiedChinese),
            ]
        );
    }

    #[test]
    fn test_force_single_word_layer() {
        let lexicon = lexicon(&[("中国", PartOfSpeech::PLACE_NAME, 10.0)]);
        let options = MatchOptions {
            force_single_word: true,
            ..MatchOptions::default()
        };
        let tokens = segment(&lexicon, "中国", &options, &MatchParameter::default());
        assert_eq!(
            tokens,
            vec![
                ("中".to_string(), 0, 1, WordType::SimplifiedChinese),
                ("中国".to_string(), 0, 5, WordType::SimplifiedChinese),
                ("国".to_string(), 1, 1, WordType::SimplifiedChinese),
            ]
        );
    }

    #[test]
    fn test_short_unknown_span() {
        // 天 is uncovered between two known words
        let lexicon = lexicon(&[("今", PartOfSpeech::TIME, 1.0), ("很好", PartOfSpeech::ADJECTIVE, 3.0)]);
        let tokens = segment(&lexicon, "今天很好", &MatchOptions::default(), &MatchParameter::default());
        assert_eq!(
            tokens,
            vec![
                ("今".to_string(), 0, 5, WordType::SimplifiedChinese),
                ("天".to_string(), 1, 1, WordType::Unknown),
                ("很好".to_string(), 2, 5, WordType::SimplifiedChinese),
            ]
        );
    }

    #[test]
    fn test_fold_function_word_into_unknown() {
        let lexicon = lexicon(&[("的", PartOfSpeech::PARTICLE, 100.0)]);
        let tokens = segment(&lexicon, "的甲乙丙", &MatchOptions::default(), &MatchParameter::default());
        assert_eq!(tokens, vec![("的甲乙丙".to_string(), 0, 1, WordType::Unknown)]);
    }

    #[test]
    fn test_non_function_single_is_kept() {
        let lexicon = lexicon(&[("书", PartOfSpeech::NOUN, 10.0)]);
        let tokens = segment(&lexicon, "书甲乙丙", &MatchOptions::default(), &MatchParameter::default());
        assert_eq!(
            tokens,
            vec![
                ("书".to_string(), 0, 5, WordType::SimplifiedChinese),
                ("甲乙丙".to_string(), 1, 1, WordType::Unknown),
            ]
        );
    }

    #[test]
    fn test_unknown_identify_off_keeps_characters_separate() {
        let lexicon = lexicon(&[("的", PartOfSpeech::PARTICLE, 100.0)]);
        let options = MatchOptions {
            unknown_word_identify: false,
            ..MatchOptions::default()
        };
        let tokens = segment(&lexicon, "的甲乙", &options, &MatchParameter::default());
        assert_eq!(
            tokens,
            vec![
                ("的".to_string(), 0, 5, WordType::SimplifiedChinese),
                ("甲".to_string(), 1, 1, WordType::Unknown),
                ("乙".to_string(), 2, 1, WordType::Unknown),
            ]
        );
    }

    #[test]
    fn test_coverage_of_best_tiling() {
        let lexicon = lexicon(&[
            ("中华", PartOfSpeech::NOUN, 1.0),
            ("人民", PartOfSpeech::NOUN, 1.0),
            ("共和国", PartOfSpeech::NOUN, 1.0),
            ("国", PartOfSpeech::NOUN, 1.0),
        ]);
        let text = "中华人民甲共和国乙丙丁";
        let tokens = segment(&lexicon, text, &single_best(), &MatchParameter::default());

        let mut cursor = 0;
        for (word, position, _, _) in &tokens {
            assert_eq!(*position, cursor);
            cursor += word.chars().count();
        }
        assert_eq!(cursor, text.chars().count());
        assert_eq!(texts(&tokens), vec!["中华", "人民", "甲", "共和国", "乙丙丁"]);
    }

    #[test]
    fn test_deterministic() {
        let lexicon = lexicon(&[
            ("中", PartOfSpeech::NOUN, 1.0),
            ("中华", PartOfSpeech::NOUN, 1.0),
            ("华人", PartOfSpeech::NOUN, 1.0),
            ("人", PartOfSpeech::NOUN, 1.0),
        ]);
        let params = MatchParameter {
            redundancy: 2,
            ..MatchParameter::default()
        };
        let first = segment(&lexicon, "中华人中华人", &MatchOptions::default(), &params);
        let second = segment(&lexicon, "中华人中华人", &MatchOptions::default(), &params);
        assert_eq!(first, second);
    }

    #[test]
    fn test_enumeration_limit_run() {
        let lexicon = lexicon(&[
            ("甲", PartOfSpeech::NOUN, 1.0),
            ("甲甲", PartOfSpeech::NOUN, 1.0),
        ]);
        let text: String = std::iter::repeat_n('甲', 40).collect();
        let tokens = segment(&lexicon, &text, &single_best(), &MatchParameter::default());

        assert_eq!(tokens.len(), 20);
        for (i, (word, position, rank, _)) in tokens.iter().enumerate() {
            assert_eq!(word, "甲甲");
            assert_eq!(*position, i * 2);
            assert_eq!(*rank, 5);
        }
    }

    #[test]
    fn test_huge_redundancy() {
        let lexicon = lexicon(&[
            ("甲", PartOfSpeech::NOUN, 1.0),
            ("甲甲", PartOfSpeech::NOUN, 1.0),
        ]);
        let expected = vec![
            ("甲".to_string(), 0, 3, WordType::SimplifiedChinese),
            ("甲甲".to_string(), 0, 5, WordType::SimplifiedChinese),
            ("甲".to_string(), 1, 3, WordType::SimplifiedChinese),
        ];

        for redundancy in [1, 1_000_000_000, usize::MAX] {
            let params = MatchParameter {
                redundancy,
                ..MatchParameter::default()
            };
            let tokens = segment(&lexicon, "甲甲", &MatchOptions::default(), &params);
            assert_eq!(tokens, expected, "redundancy {redundancy}");
        }
    }

    #[test]
    fn test_merge_layer_skips_duplicates() {
        let attr = Arc::new(WordAttr::new("", PartOfSpeech::UNKNOWN, 0.0));
        let mut accepted = Vec::new();
        merge_layer(
            &mut accepted,
            vec![Candidate::new(0, 2, attr.clone()), Candidate::new(2, 1, attr.clone())],
            0,
        );
        merge_layer(
            &mut accepted,
            vec![Candidate::new(0, 1, attr.clone()), Candidate::new(2, 1, attr.clone())],
            1,
        );

        let spans: Vec<_> = accepted.iter().map(|c| (c.position, c.length, c.level)).collect();
        assert_eq!(spans, vec![(0, 1, 1), (0, 2, 0), (2, 1, 0)]);
    }
}
