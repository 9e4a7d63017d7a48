//! Author name normalization.
//!
//! Maps a raw human-entered author name to a canonical comparison key so
//! that duplicate authors can be caught before insertion. Authors are often
//! entered inconsistently ("J.K. Rowling", "Rowling, J. K.", "Jk Rowling");
//! every such variant must collapse to the same key ("jk rowling"), which
//! carries a unique index in the authors table.
//!
//! The pipeline is an ordered list of named steps. The order is load-bearing:
//! stored keys were produced by exactly this sequence, and changing it would
//! orphan existing rows.

use unicode_normalization::{char::is_combining_mark, UnicodeNormalization};

/// Canonical comparison key for an author name.
///
/// Total over all inputs; whitespace-only or letter-free input normalizes to
/// the empty string (name-presence validation happens upstream).
pub fn normalize(raw: &str) -> String {
    if raw.is_empty() {
        return String::new();
    }

    let s = strip_diacritics(raw);
    let s = replace_punctuation(&s);
    let s = collapse_and_lowercase(&s);
    let s = reorder_comma_form(&s);
    let s = merge_initials(&s);
    let s = strip_non_letters(&s);
    collapse_whitespace(&s)
}

/// Canonical decomposition (NFD) followed by removal of combining marks,
/// so accented letters fall back to their base Latin letter.
fn strip_diacritics(s: &str) -> String {
    s.nfd().filter(|c| !is_combining_mark(*c)).collect()
}

/// Periods and apostrophes become spaces. Commas are deliberately left
/// alone here: the "Last, First" detection downstream needs them.
fn replace_punctuation(s: &str) -> String {
    s.chars()
        .map(|c| if c == '.' || c == '\'' { ' ' } else { c })
        .collect()
}

fn collapse_and_lowercase(s: &str) -> String {
    collapse_whitespace(s).to_lowercase()
}

/// Rewrites the two-part "last, first" form as "first last".
///
/// Only a split into exactly two comma-delimited parts is defined; zero or
/// multiple commas pass through untouched (any leftover commas are removed
/// by [`strip_non_letters`]).
fn reorder_comma_form(s: &str) -> String {
    let parts: Vec<&str> = s.split(',').collect();
    match parts.as_slice() {
        [last, first] => format!("{} {}", first.trim(), last.trim()),
        _ => s.to_string(),
    }
}

/// Joins adjacent single-letter initials: "j k rowling" becomes
/// "jk rowling".
///
/// Single non-overlapping left-to-right pass: a merged pair is consumed and
/// the scan continues after it, so "a b c" yields "ab c", not "abc".
fn merge_initials(s: &str) -> String {
    let tokens: Vec<&str> = s.split(' ').collect();
    let mut out: Vec<String> = Vec::with_capacity(tokens.len());
    let mut i = 0;
    while i < tokens.len() {
        if i + 1 < tokens.len() && is_single_letter(tokens[i]) && is_single_letter(tokens[i + 1]) {
            out.push(format!("{}{}", tokens[i], tokens[i + 1]));
            i += 2;
        } else {
            out.push(tokens[i].to_string());
            i += 1;
        }
    }
    out.join(" ")
}

fn is_single_letter(token: &str) -> bool {
    let mut chars = token.chars();
    matches!((chars.next(), chars.next()), (Some(c), None) if c.is_ascii_lowercase())
}

fn strip_non_letters(s: &str) -> String {
    s.chars()
        .filter(|c| c.is_ascii_lowercase() || *c == ' ')
        .collect()
}

fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn test_whitespace_only() {
        assert_eq!(normalize("   \t  "), "");
    }

    #[test]
    fn test_no_letters() {
        assert_eq!(normalize("123 !?"), "");
    }

    #[test]
    fn test_plain_name() {
        assert_eq!(normalize("George Orwell"), "george orwell");
    }

    #[test]
    fn test_dotted_initials() {
        assert_eq!(normalize("J.K. Rowling"), "jk rowling");
    }

    #[test]
    fn test_comma_form_with_initials() {
        assert_eq!(normalize("Rowling, J. K."), "jk rowling");
    }

    #[test]
    fn test_comma_form_plain() {
        assert_eq!(normalize("Lee, Harper"), "harper lee");
    }

    #[test]
    fn test_diacritics_stripped() {
        assert_eq!(normalize("Émile Zola"), "emile zola");
        assert_eq!(normalize("Gabriel García Márquez"), "gabriel garcia marquez");
    }

    #[test]
    fn test_whitespace_collapsed() {
        assert_eq!(normalize("  Harper   Lee  "), "harper lee");
    }

    #[test]
    fn test_apostrophe_replaced() {
        assert_eq!(normalize("Flann O'Brien"), "flann o brien");
    }

    #[test]
    fn test_three_dotted_initials() {
        // J.R.R. -> "j r r" -> first pair merges, scan advances past it.
        assert_eq!(normalize("J.R.R. Tolkien"), "jr r tolkien");
    }

    #[test]
    fn test_merge_is_non_overlapping() {
        assert_eq!(merge_initials("a b c"), "ab c");
        assert_eq!(merge_initials("a b c d"), "ab cd");
        assert_eq!(merge_initials("a b rowling c d"), "ab rowling cd");
    }

    #[test]
    fn test_merge_leaves_words_alone() {
        assert_eq!(merge_initials("george orwell"), "george orwell");
        assert_eq!(merge_initials("f scott fitzgerald"), "f scott fitzgerald");
    }

    #[test]
    fn test_no_comma_never_reordered() {
        assert_eq!(normalize("Harper Lee"), "harper lee");
        assert_eq!(normalize("F. Scott Fitzgerald"), "f scott fitzgerald");
    }

    #[test]
    fn test_multiple_commas_pass_through() {
        // Three comma parts: no reordering, commas stripped later.
        assert_eq!(normalize("a, b, c"), "a b c");
    }

    #[test]
    fn test_reorder_comma_form_step() {
        assert_eq!(reorder_comma_form("rowling, j k"), "j k rowling");
        assert_eq!(reorder_comma_form("no comma here"), "no comma here");
        assert_eq!(reorder_comma_form("x, y, z"), "x, y, z");
    }

    #[test]
    fn test_strip_diacritics_step() {
        assert_eq!(strip_diacritics("éàçñü"), "eacnu");
    }

    #[test]
    fn test_idempotence() {
        for raw in [
            "",
            "J.K. Rowling",
            "Rowling, J. K.",
            "George Orwell",
            "Émile Zola",
            "  Harper   Lee  ",
            "J.R.R. Tolkien",
            "Flann O'Brien",
        ] {
            let once = normalize(raw);
            assert_eq!(normalize(&once), once, "not idempotent for {:?}", raw);
        }
    }

    #[test]
    fn test_variants_share_a_key() {
        let variants = [
            "J.K. Rowling",
            "Rowling, J. K.",
            "j k rowling",
            "JK ROWLING",
            "J. K.   Rowling",
        ];
        for v in variants {
            assert_eq!(normalize(v), "jk rowling", "variant {:?}", v);
        }
    }

    #[test]
    fn test_distinct_names_keep_distinct_keys() {
        assert_ne!(normalize("George Orwell"), normalize("Harper Lee"));
        assert_ne!(normalize("J.K. Rowling"), normalize("J.R.R. Tolkien"));
    }
}
