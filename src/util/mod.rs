//! Text helpers shared by the scanner, the lexicon and the dictionary loaders.

use std::io::BufRead;

use crate::error::Result;

/// Fold a code point to lower case when the mapping yields exactly one code point.
///
/// Multi-code-point mappings (e.g. `'İ'`) leave the character unchanged so that
/// folded keys always keep the length of the original word.
pub fn fold_char(c: char) -> char {
    if c.is_ascii() {
        return c.to_ascii_lowercase();
    }
    let mut lower = c.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(l), None) => l,
        _ => c,
    }
}

/// Map fullwidth digits and Latin letters onto their ASCII counterparts.
pub fn fullwidth_to_ascii(c: char) -> char {
    match c {
        '０'..='９' | 'Ａ'..='Ｚ' | 'ａ'..='ｚ' => char::from_u32(c as u32 - 0xFEE0).unwrap_or(c),
        _ => c,
    }
}

/// Convert every fullwidth digit and Latin letter in `text` to ASCII.
pub fn to_ascii_width(text: &str) -> String {
    text.chars().map(fullwidth_to_ascii).collect()
}

/// Call `handle` with each line of `reader` and its 1-based line number.
///
/// A leading byte-order mark and trailing carriage returns are stripped.
pub fn for_each_line<R, F>(reader: R, mut handle: F) -> Result<()>
where
    R: BufRead,
    F: FnMut(usize, &str) -> Result<()>,
{
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let mut line = line.trim_end_matches('\r');
        if index == 0 {
            line = line.trim_start_matches('\u{feff}');
        }
        handle(index + 1, line)?;
    }
    Ok(())
}
