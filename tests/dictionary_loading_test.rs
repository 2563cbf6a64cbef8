use std::fs;
use std::path::Path;

use hanseg::analysis::token_filter::stem::Stemmer;
use hanseg::analysis::tokenizer::Segmenter;
use hanseg::config::SegmentConfig;
use hanseg::dictionary::loader::{DICT_FILE, STOP_WORD_FILE};
use hanseg::dictionary::{Dictionaries, PartOfSpeech};
use hanseg::error::SegmentError;

use tempfile::tempdir;

fn write_files(dir: &Path, dict: &str) {
    fs::write(dir.join("Dict.txt"), dict).unwrap();
    fs::write(dir.join("ChsSingleName.txt"), "明\n\n华\n").unwrap();
    fs::write(dir.join("ChsDoubleName1.txt"), "小\n").unwrap();
    fs::write(dir.join("ChsDoubleName2.txt"), "平\n").unwrap();
    fs::write(dir.join("Stopword.txt"), "的\nThe\n了\n").unwrap();
    fs::write(dir.join("Synonym.txt"), "电脑, 计算机\n番茄,西红柿\n").unwrap();
    fs::write(dir.join("Verbtable.txt"), "go\twent\tgone\nbe\twas\tbeen\nbroken line\n").unwrap();
}

#[test]
fn test_load_directory() {
    let dir = tempdir().unwrap();
    write_files(dir.path(), "中国|0x40|10\n人民|1048576|5\n的|0x2000|100\n");

    let dictionaries = Dictionaries::load(dir.path()).unwrap();

    assert_eq!(dictionaries.lexicon.len(), 3);
    assert_eq!(dictionaries.lexicon.get("中国").unwrap().pos, PartOfSpeech::PLACE_NAME);
    assert_eq!(dictionaries.lexicon.get("人民").unwrap().pos, PartOfSpeech::NOUN);

    assert_eq!(dictionaries.stop_words.len(), 3);
    assert!(dictionaries.stop_words.contains("the"));

    assert_eq!(dictionaries.synonyms.synonyms("电脑"), vec!["计算机"]);
    assert_eq!(dictionaries.synonyms.synonyms("西红柿"), vec!["番茄"]);

    assert_eq!(dictionaries.stemmer.len(), 4);
    assert_eq!(dictionaries.stemmer.stem("went"), "go");
    assert_eq!(dictionaries.stemmer.stem("was"), "be");
}

#[test]
fn test_malformed_dictionary_lines_are_skipped() {
    let dir = tempdir().unwrap();
    write_files(
        dir.path(),
        "中国|0x40|10\nno separators\n人民|noun|5\n|1|1\n北京|0x40|60|extra\n大学|0x100000|8.5\n",
    );

    let dictionaries = Dictionaries::load(dir.path()).unwrap();
    assert_eq!(dictionaries.lexicon.len(), 2);
    assert_eq!(dictionaries.lexicon.get("大学").unwrap().frequency, 8.5);
    assert!(dictionaries.lexicon.get("北京").is_none());
}

#[test]
fn test_missing_file_fails() {
    for missing in [DICT_FILE, STOP_WORD_FILE] {
        let dir = tempdir().unwrap();
        write_files(dir.path(), "中国|0x40|10\n");
        fs::remove_file(dir.path().join(missing)).unwrap();

        match Dictionaries::load(dir.path()) {
            Err(SegmentError::Dictionary(message)) => assert!(message.contains(missing)),
            other => panic!("expected a dictionary error, got {other:?}"),
        }
    }
}

#[test]
fn test_segmenter_from_config() {
    let dir = tempdir().unwrap();
    write_files(dir.path(), "说|0x1000|10\n");

    let config_path = dir.path().join("hanseg.json");
    let config = serde_json::json!({
        "dict_dir": dir.path(),
        "options": { "chinese_name_identify": true },
        "params": { "best_rank": 9 }
    });
    fs::write(&config_path, config.to_string()).unwrap();

    let config = SegmentConfig::from_file(&config_path).unwrap();
    let segmenter = Segmenter::from_config(&config).unwrap();
    assert!(segmenter.options().chinese_name_identify);

    let tokens = segmenter.segment("王明说").unwrap();
    let summary: Vec<_> = tokens.iter().map(|t| (t.text.as_str(), t.rank)).collect();
    assert_eq!(summary, vec![("王明", 9), ("说", 9)]);
}
