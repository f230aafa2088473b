//! Display-name derivation for route files.
//!
//! A route file's display name is its stem with underscores turned into
//! spaces and every word title-cased, so `morning_ride.gpx` is listed as
//! `Morning Ride`.

/// Strip `.<extension>` from a file name.
///
/// Leading dots never start an extension, so a bare `.gpx` (or `..gpx`)
/// keeps its full name as the stem. Names without the suffix are returned
/// unchanged.
#[must_use]
pub fn file_stem<'a>(file_name: &'a str, extension: &str) -> &'a str {
    let Some(stem) = file_name
        .strip_suffix(extension)
        .and_then(|rest| rest.strip_suffix('.'))
    else {
        return file_name;
    };

    if stem.chars().all(|c| c == '.') {
        return file_name;
    }
    stem
}

/// Title-case a string word by word.
///
/// A cased character (upper, lower or titlecase letter) takes its
/// titlecase form when the character before it is not cased and its
/// lowercase form otherwise; digits, punctuation and spaces all start a
/// new word. `RIVER loop` becomes `River Loop` and `ride2go` becomes
/// `Ride2Go`.
///
/// Titlecase is not always uppercase: `ßig` becomes `Ssig`, `ǆemal`
/// becomes `ǅemal`, and a word-final `Σ` lowercases to `ς`.
#[must_use]
pub fn title_case(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut previous_cased = false;

    for (i, c) in input.char_indices() {
        let cased = is_cased(c);
        if !cased {
            out.push(c);
        } else if !previous_cased {
            push_titlecase(&mut out, c);
        } else if c == 'Σ' {
            let rest = &input[i + c.len_utf8()..];
            out.push(if ends_word(rest) { 'ς' } else { 'σ' });
        } else {
            out.extend(c.to_lowercase());
        }
        previous_cased = cased;
    }

    out
}

fn is_cased(c: char) -> bool {
    c.is_lowercase() || c.is_uppercase() || is_titlecase(c)
}

/// Letters in the Unicode `Lt` category
fn is_titlecase(c: char) -> bool {
    matches!(
        c,
        '\u{01C5}'
            | '\u{01C8}'
            | '\u{01CB}'
            | '\u{01F2}'
            | '\u{1F88}'..='\u{1F8F}'
            | '\u{1F98}'..='\u{1F9F}'
            | '\u{1FA8}'..='\u{1FAF}'
            | '\u{1FBC}'
            | '\u{1FCC}'
            | '\u{1FFC}'
    )
}

/// Characters skipped when deciding whether a sigma ends its word
fn is_case_ignorable(c: char) -> bool {
    matches!(
        c,
        '\'' | '.'
            | ':'
            | '^'
            | '`'
            | '\u{00A8}'
            | '\u{00AD}'
            | '\u{00AF}'
            | '\u{00B4}'
            | '\u{00B7}'
            | '\u{00B8}'
            | '\u{02B0}'..='\u{036F}'
            | '\u{0483}'..='\u{0489}'
            | '\u{200B}'..='\u{200F}'
            | '\u{2018}'
            | '\u{2019}'
            | '\u{2024}'
            | '\u{2027}'
    )
}

fn ends_word(rest: &str) -> bool {
    !rest
        .chars()
        .find(|&c| !is_case_ignorable(c))
        .is_some_and(is_cased)
}

fn push_titlecase(out: &mut String, c: char) {
    if let Some(expansion) = titlecase_expansion(c) {
        out.push_str(expansion);
    } else if let Some(mapped) = titlecase_single(c) {
        out.push(mapped);
    } else {
        out.extend(c.to_uppercase());
    }
}

/// Letters whose titlecase form is several characters and differs from
/// their uppercase form
fn titlecase_expansion(c: char) -> Option<&'static str> {
    let expansion = match c {
        'ß' => "Ss",
        '\u{FB00}' => "Ff",
        '\u{FB01}' => "Fi",
        '\u{FB02}' => "Fl",
        '\u{FB03}' => "Ffi",
        '\u{FB04}' => "Ffl",
        '\u{FB05}' | '\u{FB06}' => "St",
        '\u{0587}' => "\u{0535}\u{0582}",
        '\u{FB13}' => "\u{0544}\u{0576}",
        '\u{FB14}' => "\u{0544}\u{0565}",
        '\u{FB15}' => "\u{0544}\u{056B}",
        '\u{FB16}' => "\u{054E}\u{0576}",
        '\u{FB17}' => "\u{0544}\u{056D}",
        '\u{1FB2}' => "\u{1FBA}\u{0345}",
        '\u{1FB4}' => "\u{0386}\u{0345}",
        '\u{1FB7}' => "\u{0391}\u{0342}\u{0345}",
        '\u{1FC2}' => "\u{1FCA}\u{0345}",
        '\u{1FC4}' => "\u{0389}\u{0345}",
        '\u{1FC7}' => "\u{0397}\u{0342}\u{0345}",
        '\u{1FF2}' => "\u{1FFA}\u{0345}",
        '\u{1FF4}' => "\u{038F}\u{0345}",
        '\u{1FF7}' => "\u{03A9}\u{0342}\u{0345}",
        _ => return None,
    };
    Some(expansion)
}

/// Letters whose single-character titlecase form differs from their
/// uppercase form
fn titlecase_single(c: char) -> Option<char> {
    let mapped = match u32::from(c) {
        0x01C4..=0x01C6 => 0x01C5,
        0x01C7..=0x01C9 => 0x01C8,
        0x01CA..=0x01CC => 0x01CB,
        0x01F1..=0x01F3 => 0x01F2,
        // Georgian Mkhedruli titlecases to itself
        0x10D0..=0x10FA | 0x10FD..=0x10FF => return Some(c),
        // Greek with ypogegrammeni: lowercase and titlecase share a block of eight
        cp @ 0x1F80..=0x1FAF => cp | 0x8,
        0x1FB3 | 0x1FBC => 0x1FBC,
        0x1FC3 | 0x1FCC => 0x1FCC,
        0x1FF3 | 0x1FFC => 0x1FFC,
        _ => return None,
    };
    char::from_u32(mapped)
}

/// Derive the human-readable name for a route file.
#[must_use]
pub fn display_name(file_name: &str, extension: &str) -> String {
    title_case(&file_stem(file_name, extension).replace('_', " "))
}
