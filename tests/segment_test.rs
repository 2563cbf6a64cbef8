use std::fs;
use std::path::Path;

use hanseg::analysis::token::{Token, WordType};
use hanseg::analysis::tokenizer::Segmenter;
use hanseg::dictionary::PartOfSpeech;
use hanseg::matcher::{MatchOptions, MatchParameter};

use tempfile::{TempDir, tempdir};

const DICT: &str = "\
中华|0x100000|20
中华人民共和国|0x40|50
人民|0x100000|80
共和国|0x100000|30
成立|0x1000|40
于|0x40000|90
年|0x20000|70
的|0x2000|100
北京|0x40|60
我|0x10000|50
爱|0x1000|20
说|0x1000|10
电脑|0x100000|30
C++|0x10|5
";

fn write_dictionary(dir: &Path) {
    fs::write(dir.join("Dict.txt"), DICT).unwrap();
    fs::write(dir.join("ChsSingleName.txt"), "明\n").unwrap();
    fs::write(dir.join("ChsDoubleName1.txt"), "小\n").unwrap();
    fs::write(dir.join("ChsDoubleName2.txt"), "平\n").unwrap();
    fs::write(dir.join("Stopword.txt"), "的\nthe\n").unwrap();
    fs::write(dir.join("Synonym.txt"), "电脑,计算机\n").unwrap();
    fs::write(dir.join("Verbtable.txt"), "go\twent\tgone\n").unwrap();
}

fn segmenter() -> (TempDir, Segmenter) {
    let dir = tempdir().unwrap();
    write_dictionary(dir.path());
    let segmenter = Segmenter::from_dir(dir.path()).unwrap();
    (dir, segmenter)
}

fn words(tokens: &[Token]) -> Vec<&str> {
    tokens.iter().map(|t| t.text.as_str()).collect()
}

fn with_options(segmenter: &Segmenter, text: &str, options: MatchOptions) -> Vec<Token> {
    segmenter
        .segment_with(text, &options, &MatchParameter::default())
        .unwrap()
}

#[test]
fn test_sentence() {
    let (_dir, segmenter) = segmenter();
    let tokens = segmenter.segment("中华人民共和国成立于1949年").unwrap();

    let summary: Vec<_> = tokens
        .iter()
        .map(|t| (t.text.as_str(), t.position, t.rank, t.word_type))
        .collect();
    assert_eq!(
        summary,
        vec![
            ("中华人民共和国", 0, 5, WordType::SimplifiedChinese),
            ("成立", 7, 5, WordType::SimplifiedChinese),
            ("于", 9, 5, WordType::SimplifiedChinese),
            ("1949", 10, 1, WordType::Numeric),
            ("年", 14, 5, WordType::SimplifiedChinese),
        ]
    );
}

#[test]
fn test_redundancy_adds_second_tiling() {
    let (_dir, segmenter) = segmenter();
    let params = MatchParameter {
        redundancy: 1,
        ..MatchParameter::default()
    };
    let tokens = segmenter
        .segment_with("中华人民共和国", &MatchOptions::default(), &params)
        .unwrap();

    let summary: Vec<_> = tokens.iter().map(|t| (t.text.as_str(), t.rank)).collect();
    assert_eq!(
        summary,
        vec![("中华", 3), ("中华人民共和国", 5), ("人民", 3), ("共和国", 3)]
    );
}

#[test]
fn test_stop_words_and_synonyms() {
    let (_dir, segmenter) = segmenter();
    assert_eq!(words(&segmenter.segment("我的电脑").unwrap()), vec!["我", "电脑"]);
    assert_eq!(words(&segmenter.segment("The 电脑").unwrap()), vec!["电脑"]);

    let tokens = with_options(
        &segmenter,
        "我的电脑",
        MatchOptions {
            synonym_output: true,
            ..MatchOptions::default()
        },
    );
    assert_eq!(words(&tokens), vec!["我", "电脑", "计算机"]);
    assert_eq!(tokens[2].word_type, WordType::Synonym);
    assert_eq!(tokens[2].position, 2);
}

#[test]
fn test_english_segment_uses_verb_table() {
    let (_dir, segmenter) = segmenter();
    let tokens = with_options(
        &segmenter,
        "He went",
        MatchOptions {
            english_segment: true,
            ..MatchOptions::default()
        },
    );

    let summary: Vec<_> = tokens
        .iter()
        .map(|t| (t.text.as_str(), t.position, t.rank))
        .collect();
    assert_eq!(
        summary,
        vec![("he", 0, 3), ("He", 0, 5), ("go", 3, 2), ("went", 3, 5)]
    );
}

#[test]
fn test_chinese_names() {
    let (_dir, segmenter) = segmenter();
    let tokens = with_options(
        &segmenter,
        "邓小平说",
        MatchOptions {
            chinese_name_identify: true,
            ..MatchOptions::default()
        },
    );
    assert_eq!(words(&tokens), vec!["邓小平", "说"]);
    assert_eq!(tokens[0].pos, PartOfSpeech::PERSON_NAME);
    assert_eq!(tokens[0].frequency, 0.0);

    let tokens = segmenter.segment("邓小平说").unwrap();
    assert_eq!(words(&tokens), vec!["邓小平", "说"]);
    assert_eq!(tokens[0].word_type, WordType::Unknown);
}

#[test]
fn test_special_word() {
    let (_dir, segmenter) = segmenter();
    let tokens = segmenter.segment("用C++写").unwrap();
    assert_eq!(words(&tokens), vec!["用", "C++", "写"]);
    assert_eq!(tokens[1].pos, PartOfSpeech::FOREIGN);
}

#[test]
fn test_force_single_word() {
    let (_dir, segmenter) = segmenter();
    let tokens = with_options(
        &segmenter,
        "北京",
        MatchOptions {
            force_single_word: true,
            ..MatchOptions::default()
        },
    );

    let summary: Vec<_> = tokens
        .iter()
        .map(|t| (t.text.as_str(), t.position, t.rank))
        .collect();
    assert_eq!(summary, vec![("北", 0, 1), ("北京", 0, 5), ("京", 1, 1)]);
}

#[test]
fn test_unknown_words() {
    let (_dir, segmenter) = segmenter();

    // Function words next to a long unknown span are folded into it
    let tokens = with_options(
        &segmenter,
        "的的的甲乙丙",
        MatchOptions {
            filter_stop_words: false,
            ..MatchOptions::default()
        },
    );
    assert_eq!(words(&tokens), vec!["的的的甲乙丙"]);
    assert_eq!(tokens[0].word_type, WordType::Unknown);

    let tokens = with_options(
        &segmenter,
        "甲乙丙丁戊",
        MatchOptions {
            unknown_word_identify: false,
            ..MatchOptions::default()
        },
    );
    assert_eq!(words(&tokens), vec!["甲", "乙", "丙", "丁", "戊"]);
    assert!(tokens.iter().all(|t| t.word_type == WordType::Unknown));
}

#[test]
fn test_tokens_cover_input() {
    let (_dir, segmenter) = segmenter();
    let options = MatchOptions {
        multi_dimensionality: false,
        filter_stop_words: false,
        ignore_space: false,
        ..MatchOptions::default()
    };

    for text in [
        "中华人民共和国成立于1949年",
        "我爱北京天安门",
        "Hello, 世界! 1.2.3",
        "的的的甲乙丙",
        "用C++写的程序",
    ] {
        let tokens = with_options(&segmenter, text, options.clone());

        let mut cursor = 0;
        for token in &tokens {
            assert_eq!(token.position, cursor, "{text}: {token:?}");
            cursor = token.end();
        }
        assert_eq!(cursor, text.chars().count(), "{text}");

        let joined: String = tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(joined, text);
    }
}

#[test]
fn test_deterministic_and_batch() {
    let (_dir, segmenter) = segmenter();
    let texts = ["中华人民共和国成立于1949年", "我的电脑", "He went", ""];

    let batch = segmenter.segment_batch(&texts).unwrap();
    for (text, tokens) in texts.iter().zip(&batch) {
        assert_eq!(tokens, &segmenter.segment(text).unwrap());
        assert_eq!(tokens, &segmenter.segment(text).unwrap());
    }
    assert!(batch[3].is_empty());
}
