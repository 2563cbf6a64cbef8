//! Chinese personal-name recognition.
//!
//! A name is a family name (one or two characters) followed by a one- or
//! two-character given name whose characters appear in the given-name tables.

use std::io::BufRead;
use std::sync::Arc;

use ahash::{AHashMap, AHashSet};
use smallvec::SmallVec;

use crate::dictionary::word_attr::{PartOfSpeech, WordAttr};
use crate::error::Result;
use crate::util::for_each_line;

/// A name found at some offset.
#[derive(Clone, Debug)]
pub struct NameSpan {
    /// Length in code points
    pub length: usize,
    pub attr: Arc<WordAttr>,
}

impl NameSpan {
    /// Create a name span. Names are tagged as person names with zero frequency.
    pub fn new<S: Into<String>>(length: usize, name: S) -> Self {
        NameSpan {
            length,
            attr: Arc::new(WordAttr::new(name, PartOfSpeech::PERSON_NAME, 0.0)),
        }
    }
}

/// Finds personal names starting at an offset of a run.
pub trait NameMatcher: Send + Sync {
    /// Return up to two name spans starting at `start`.
    fn match_names(&self, text: &[char], start: usize) -> SmallVec<[NameSpan; 2]>;
}

#[rustfmt::skip]
const FAMILY_NAMES: &[&str] = &[
    "王", "张", "黄", "周", "徐", "胡", "高", "林", "马", "于",
    "程", "傅", "曾", "叶", "余", "夏", "钟", "田", "任", "方",
    "石", "熊", "白", "毛", "江", "史", "候", "龙", "万", "段",
    "雷", "钱", "汤", "易", "常", "武", "赖", "文", "查",
    "赵", "肖", "孙", "李", "吴", "郑", "冯", "陈", "褚", "卫",
    "蒋", "沈", "韩", "杨", "朱", "秦", "尤", "许", "何", "吕",
    "施", "桓", "孔", "曹", "严", "华", "金", "魏", "陶", "姜",
    "戚", "谢", "邹", "喻", "柏", "窦", "苏", "潘", "葛", "奚",
    "范", "彭", "鲁", "韦", "昌", "俞", "袁", "酆", "鲍", "唐",
    "费", "廉", "岑", "薛", "贺", "倪", "滕", "殷", "罗", "毕",
    "郝", "邬", "卞", "康", "卜", "顾", "孟", "穆", "萧", "尹",
    "姚", "邵", "湛", "汪", "祁", "禹", "狄", "贝", "臧", "伏",
    "戴", "宋", "茅", "庞", "纪", "舒", "屈", "祝", "董", "梁",
    "杜", "阮", "闵", "贾", "娄", "颜", "郭", "邱", "骆", "蔡",
    "樊", "凌", "霍", "虞", "柯", "昝", "卢", "缪", "宗", "丁",
    "贲", "邓", "郁", "杭", "洪", "崔", "龚", "嵇", "邢", "滑",
    "裴", "陆", "荣", "荀", "惠", "甄", "芮", "羿", "储", "靳",
    "汲", "邴", "糜", "隗", "侯", "宓", "蓬", "郗", "仲", "栾",
    "钭", "历", "戎", "刘", "詹", "幸", "韶", "郜", "黎", "蓟",
    "溥", "蒲", "邰", "鄂", "咸", "卓", "蔺", "屠", "乔", "胥",
    "苍", "莘", "翟", "谭", "贡", "劳", "冉", "郦", "雍", "璩",
    "桑", "桂", "濮", "扈", "冀", "浦", "庄", "晏", "瞿", "阎",
    "慕", "茹", "习", "宦", "艾", "容", "慎", "戈", "廖", "庾",
    "衡", "耿", "弘", "匡", "阙", "殳", "沃", "蔚", "夔", "隆",
    "巩", "聂", "晁", "敖", "融", "訾", "辛", "阚", "毋", "乜",
    "鞠", "丰", "蒯", "荆", "竺", "盍", "单", "欧",
    "司马", "上官", "欧阳", "夏侯", "诸葛", "闻人", "东方", "赫连",
    "皇甫", "尉迟", "公羊", "澹台", "公冶", "宗政", "濮阳", "淳于",
    "单于", "太叔", "申屠", "公孙", "仲孙", "轩辕", "令狐", "徐离",
    "宇文", "长孙", "慕容", "司徒", "司空", "万俟",
];

#[derive(Debug, Default)]
struct Surname {
    /// The first character is a family name on its own
    single: bool,
    /// Second characters of compound family names starting with this character
    second_chars: SmallVec<[char; 2]>,
}

/// Name matcher over the built-in family-name list and loaded given-name tables.
#[derive(Debug, Default)]
pub struct ChineseNameMatcher {
    surnames: AHashMap<char, Surname>,
    single_names: AHashSet<char>,
    double_first: AHashSet<char>,
    double_second: AHashSet<char>,
}

impl ChineseNameMatcher {
    /// Create a matcher with the built-in family names and empty given-name tables.
    pub fn new() -> Self {
        let mut surnames: AHashMap<char, Surname> = AHashMap::new();
        for name in FAMILY_NAMES {
            let mut chars = name.chars();
            let Some(first) = chars.next() else { continue };
            let entry = surnames.entry(first).or_default();
            match chars.next() {
                Some(second) => entry.second_chars.push(second),
                None => entry.single = true,
            }
        }

        ChineseNameMatcher {
            surnames,
            ..Default::default()
        }
    }

    /// Build a matcher from the three given-name tables.
    pub fn from_readers<R1, R2, R3>(single: R1, double_first: R2, double_second: R3) -> Result<Self>
    where
        R1: BufRead,
        R2: BufRead,
        R3: BufRead,
    {
        let mut matcher = Self::new();
        matcher.single_names = read_name_chars(single)?;
        matcher.double_first = read_name_chars(double_first)?;
        matcher.double_second = read_name_chars(double_second)?;
        Ok(matcher)
    }

    /// Add given-name characters directly.
    pub fn with_given_names(mut self, single: &str, double_first: &str, double_second: &str) -> Self {
        self.single_names.extend(single.chars());
        self.double_first.extend(double_first.chars());
        self.double_second.extend(double_second.chars());
        self
    }

    fn surname_len(&self, text: &[char], start: usize) -> Option<usize> {
        let surname = self.surnames.get(&text[start])?;
        if surname.second_chars.contains(&text[start + 1]) {
            Some(2)
        } else if surname.single {
            Some(1)
        } else {
            None
        }
    }
}

fn read_name_chars<R: BufRead>(reader: R) -> Result<AHashSet<char>> {
    let mut chars = AHashSet::new();
    for_each_line(reader, |_, line| {
        if let Some(c) = line.chars().next() {
            chars.insert(c);
        }
        Ok(())
    })?;
    Ok(chars)
}

impl NameMatcher for ChineseNameMatcher {
    fn match_names(&self, text: &[char], start: usize) -> SmallVec<[NameSpan; 2]> {
        let mut spans = SmallVec::new();
        if start + 2 > text.len() {
            return spans;
        }
        let Some(surname_len) = self.surname_len(text, start) else {
            return spans;
        };

        let given = start + surname_len;
        if given >= text.len() {
            return spans;
        }

        if self.single_names.contains(&text[given]) {
            let length = surname_len + 1;
            spans.push(NameSpan::new(length, text[start..start + length].iter().collect::<String>()));
        }

        if self.double_first.contains(&text[given])
            && given + 1 < text.len()
            && self.double_second.contains(&text[given + 1])
        {
            let length = surname_len + 2;
            spans.push(NameSpan::new(length, text[start..start + length].iter().collect::<String>()));
        }

        spans
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(text: &str) -> Vec<char> {
        text.chars().collect()
    }

    fn matcher() -> ChineseNameMatcher {
        ChineseNameMatcher::new().with_given_names("明", "小", "平")
    }

    fn names(matcher: &ChineseNameMatcher, text: &str, start: usize) -> Vec<String> {
        matcher
            .match_names(&chars(text), start)
            .iter()
            .map(|span| span.attr.word.clone())
            .collect()
    }

    #[test]
    fn test_single_surname() {
        let matcher = matcher();
        assert_eq!(names(&matcher, "王明说", 0), vec!["王明"]);
        assert_eq!(names(&matcher, "邓小平", 0), vec!["邓小平"]);
        assert!(names(&matcher, "邓小平", 1).is_empty());
    }

    #[test]
    fn test_both_given_name_forms() {
        let matcher = ChineseNameMatcher::new().with_given_names("小", "小", "明");
        assert_eq!(names(&matcher, "张小明", 0), vec!["张小", "张小明"]);
    }

    #[test]
    fn test_compound_surname() {
        let matcher = matcher();
        assert_eq!(names(&matcher, "欧阳明", 0), vec!["欧阳明"]);
        // 欧 is also a single family name
        assert_eq!(names(&matcher, "欧明", 0), vec!["欧明"]);
        // 司 only starts compound surnames
        assert!(names(&matcher, "司明", 0).is_empty());
    }

    #[test]
    fn test_bounds() {
        let matcher = matcher();
        assert!(names(&matcher, "王", 0).is_empty());
        assert!(names(&matcher, "欧阳", 0).is_empty());
        assert!(names(&matcher, "邓小", 0).is_empty());
    }

    #[test]
    fn test_name_attr() {
        let matcher = matcher();
        let spans = matcher.match_names(&chars("王明"), 0);
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].length, 2);
        assert_eq!(spans[0].attr.pos, PartOfSpeech::PERSON_NAME);
        assert_eq!(spans[0].attr.frequency, 0.0);
    }

    #[test]
    fn test_from_readers() {
        let matcher =
            ChineseNameMatcher::from_readers("明\n\n华\n".as_bytes(), "小".as_bytes(), "平".as_bytes())
                .unwrap();
        assert_eq!(names(&matcher, "李华", 0), vec!["李华"]);
        assert_eq!(names(&matcher, "李小平", 0), vec!["李小平"]);
    }
}
