//! Synonym expansion filter.
//!
//! Each token is followed by one extra token per synonym. Synonym tokens share
//! the source token's position, part of speech and frequency.

use std::sync::Arc;

use crate::analysis::synonym::SynonymDictionary;
use crate::analysis::token::{IntoTokenStream, Token, TokenStream, WordType};
use crate::analysis::token_filter::Filter;
use crate::error::Result;

/// Filter that inserts synonyms after each token.
#[derive(Clone, Debug)]
pub struct SynonymFilter {
    dictionary: Arc<SynonymDictionary>,
    rank: u32,
}

impl SynonymFilter {
    /// Create a synonym filter. Inserted tokens get rank 1.
    pub fn new(dictionary: Arc<SynonymDictionary>) -> Self {
        SynonymFilter { dictionary, rank: 1 }
    }

    /// Set the rank of inserted synonym tokens.
    pub fn with_rank(mut self, rank: u32) -> Self {
        self.rank = rank;
        self
    }
}

impl Filter for SynonymFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let mut result = Vec::new();
        for token in tokens {
            let synonyms: Vec<Token> = self
                .dictionary
                .synonyms(&token.text)
                .into_iter()
                .map(|synonym| {
                    token
                        .with_text(synonym)
                        .with_rank(self.rank)
                        .with_word_type(WordType::Synonym)
                        .with_original_word_type(token.word_type)
                })
                .collect();
            result.push(token);
            result.extend(synonyms);
        }

        Ok(result.into_token_stream())
    }

    fn name(&self) -> &'static str {
        "synonym"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::PartOfSpeech;

    #[test]
    fn test_synonym_filter() {
        let dictionary = SynonymDictionary::from_synonym_groups(vec![vec!["电脑", "计算机", "微机"]]);
        let filter = SynonymFilter::new(Arc::new(dictionary)).with_rank(2);
        let tokens = vec![
            Token::new("我的", 0).with_rank(5),
            Token::new("电脑", 2)
                .with_rank(5)
                .with_word_type(WordType::SimplifiedChinese)
                .with_pos(PartOfSpeech::NOUN)
                .with_frequency(7.0),
        ];

        let result: Vec<Token> = filter.filter(Box::new(tokens.into_iter())).unwrap().collect();

        let texts: Vec<_> = result.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["我的", "电脑", "计算机", "微机"]);

        let synonym = &result[2];
        assert_eq!(synonym.position, 2);
        assert_eq!(synonym.rank, 2);
        assert_eq!(synonym.word_type, WordType::Synonym);
        assert_eq!(synonym.original_word_type, WordType::SimplifiedChinese);
        assert_eq!(synonym.pos, PartOfSpeech::NOUN);
        assert_eq!(synonym.frequency, 7.0);
    }

    #[test]
    fn test_filter_name() {
        let filter = SynonymFilter::new(Arc::new(SynonymDictionary::new()));
        assert_eq!(filter.name(), "synonym");
    }
}
