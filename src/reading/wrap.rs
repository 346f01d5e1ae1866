//! Fixed-width reflow for the revealed prefix of a stream.
//!
//! Single pass over the characters with no look-ahead. A line is closed at an
//! explicit newline, or at the first space that arrives once the line already
//! holds `max_chars_per_line` characters. The word that crosses the width
//! therefore stays on its line, and a line can run past the width by up to
//! one word. Re-running on a growing prefix never moves an earlier break.

/// Reflows `text`, breaking at the first space past `max_chars_per_line` characters.
///
/// The space a line is broken at is dropped. A final newline does not produce
/// a trailing empty line.
pub fn wrap_text(text: &str, max_chars_per_line: usize) -> String {
    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for c in text.chars() {
        if c == '\n' || (c == ' ' && current_len >= max_chars_per_line) {
            lines.push(std::mem::take(&mut current));
            current_len = 0;
        } else {
            current.push(c);
            current_len += 1;
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Every kept space sits before the width: breaks only follow full lines.
    fn assert_spaces_within_width(wrapped: &str, width: usize) {
        for line in wrapped.split('\n') {
            for (index, c) in line.chars().enumerate() {
                assert!(
                    c != ' ' || index < width,
                    "space at column {} of {:?} (limit {})",
                    index,
                    line,
                    width
                );
            }
        }
    }

    #[test]
    fn test_short_text_untouched() {
        assert_eq!(wrap_text("hello world", 50), "hello world");
    }

    #[test]
    fn test_empty_text() {
        assert_eq!(wrap_text("", 10), "");
    }

    #[test]
    fn test_breaks_at_first_space_after_width() {
        assert_eq!(wrap_text("aaaa bbbb cccc", 9), "aaaa bbbb\ncccc");
        assert_eq!(wrap_text("aaaa bbbb cccc", 4), "aaaa\nbbbb\ncccc");
    }

    #[test]
    fn test_word_crossing_width_stays_on_line() {
        assert_eq!(wrap_text("abc defgh ij", 5), "abc defgh\nij");
        assert_eq!(wrap_text("ab cd", 5), "ab cd");
        assert_eq!(wrap_text("ab cde", 2), "ab\ncde");
    }

    #[test]
    fn test_prose_at_width_twenty() {
        let text =
            "First Citizen: Before we proceed any further, hear me speak. All: Speak, speak.";
        assert_eq!(
            wrap_text(text, 20),
            "First Citizen: Before\nwe proceed any further,\nhear me speak. All: Speak,\nspeak."
        );
    }

    #[test]
    fn test_explicit_newlines() {
        assert_eq!(wrap_text("ab\ncd ef", 5), "ab\ncd ef");
        assert_eq!(wrap_text("ab\n\ncd", 5), "ab\n\ncd");
        assert_eq!(
            wrap_text(
                "First Citizen:\nBefore we proceed any further, hear me speak.",
                12
            ),
            "First Citizen:\nBefore we proceed\nany further,\nhear me speak."
        );
    }

    #[test]
    fn test_trailing_newline_dropped() {
        assert_eq!(wrap_text("ab\n", 5), "ab");
        assert_eq!(wrap_text("\n\n", 5), "\n");
    }

    #[test]
    fn test_long_run_not_split() {
        assert_eq!(
            wrap_text("tiny extraordinarily tiny", 6),
            "tiny extraordinarily\ntiny"
        );
    }

    #[test]
    fn test_consecutive_spaces() {
        assert_eq!(wrap_text("a  b", 10), "a  b");
        // Only the space at the break is dropped
        assert_eq!(wrap_text("a  b", 1), "a\n b");
    }

    #[test]
    fn test_zero_width_breaks_at_every_space() {
        assert_eq!(wrap_text("a b", 0), "a\nb");
    }

    #[test]
    fn test_counts_chars_not_bytes() {
        assert_eq!(wrap_text("ünï cödé", 8), "ünï cödé");
        assert_eq!(wrap_text("ünï cödé", 3), "ünï\ncödé");
    }

    #[test]
    fn test_spaces_never_past_width() {
        let corpus = [
            "First Citizen:\nBefore we proceed any further, hear me speak.\n\nAll:\nSpeak, speak.",
            "a b c d e f g h i j k l m n o p q r s t u v w x y z",
            "supercalifragilisticexpialidocious is a word that is long",
            "   spaced    out     text   with    gaps   ",
            "tab\tseparated\ttext stays\ttogether as one run",
        ];
        for width in [0, 1, 3, 7, 12, 20, 55] {
            for text in corpus {
                assert_spaces_within_width(&wrap_text(text, width), width);
            }
        }
    }

    #[test]
    fn test_non_space_content_preserved() {
        let text = "First Citizen:\nBefore we proceed any further, hear me speak.";
        let wrapped = wrap_text(text, 12);
        let squash = |s: &str| s.chars().filter(|c| !c.is_whitespace()).collect::<String>();
        assert_eq!(squash(&wrapped), squash(text));
    }

    #[test]
    fn test_growing_prefix_is_stable() {
        let text = "one two three four five six seven eight nine ten";
        let full = wrap_text(text, 14);
        for end in 0..=text.len() {
            assert!(full.starts_with(&wrap_text(&text[..end], 14)));
        }
    }
}
