//! Cursor-relative token lookup for hover.

use unicode_properties::{GeneralCategoryGroup, UnicodeGeneralCategory};

/// The token under `character` (a char index into `line`).
///
/// A letter (Unicode general category L*) resolves to the maximal run of
/// letters around it. Any other character (space, punctuation, digit,
/// symbol) is a token on its own.
/// An empty line, or an index at or past the end of the line, yields `""`.
pub fn word_at(line: &str, character: usize) -> &str {
    let chars: Vec<(usize, char)> = line.char_indices().collect();

    let Some(&(offset, current)) = chars.get(character) else {
        return "";
    };

    if !is_letter(current) {
        return &line[offset..offset + current.len_utf8()];
    }

    let mut start = character;
    while start > 0 && is_letter(chars[start - 1].1) {
        start -= 1;
    }

    let mut end = character + 1;
    while end < chars.len() && is_letter(chars[end].1) {
        end += 1;
    }

    let byte_start = chars[start].0;
    let byte_end = chars.get(end).map_or(line.len(), |&(offset, _)| offset);
    &line[byte_start..byte_end]
}

fn is_letter(c: char) -> bool {
    c.general_category_group() == GeneralCategoryGroup::Letter
}

/// Convert an LSP UTF-16 column into a char index into `line`.
///
/// Columns past the end map to the char length of the line; a column that
/// lands inside a surrogate pair maps to the char containing it.
pub fn char_index_from_utf16(line: &str, column: u32) -> usize {
    let column = column as usize;
    let mut units = 0;
    for (index, c) in line.chars().enumerate() {
        units += c.len_utf16();
        if units > column {
            return index;
        }
    }
    line.chars().count()
}
