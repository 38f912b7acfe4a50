use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub const ELLIPSIS: char = '…';

/// The number of terminal columns `text` occupies.
pub fn width(text: &str) -> usize {
    return UnicodeWidthStr::width(text);
}

pub fn char_width(ch: char) -> usize {
    return UnicodeWidthChar::width(ch).unwrap_or(0);
}

/// Cut `text` to at most `max` columns, ending with an ellipsis when anything was dropped.
pub fn truncate(text: &str, max: usize) -> String {
    if width(text) <= max {
        return text.to_string();
    }

    if max == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;

    for ch in text.chars() {
        let w = char_width(ch);

        if used + w + 1 > max {
            break;
        }

        out.push(ch);
        used += w;
    }

    out.push(ELLIPSIS);
    return out;
}

/// Greedy word wrap to `max` columns. Words longer than a line are split.
pub fn wrap(text: &str, max: usize) -> Vec<String> {
    let mut lines = Vec::new();

    if max == 0 {
        return lines;
    }

    for paragraph in text.split('\n') {
        let mut line = String::new();
        let mut line_width = 0;

        for word in paragraph.split_whitespace() {
            let word_width = width(word);

            if line_width > 0 && line_width + 1 + word_width > max {
                lines.push(std::mem::take(&mut line));
                line_width = 0;
            }

            if word_width > max {
                for ch in word.chars() {
                    let w = char_width(ch);

                    if line_width + w > max {
                        lines.push(std::mem::take(&mut line));
                        line_width = 0;
                    }

                    line.push(ch);
                    line_width += w;
                }

                continue;
            }

            if line_width > 0 {
                line.push(' ');
                line_width += 1;
            }

            line.push_str(word);
            line_width += word_width;
        }

        lines.push(line);
    }

    return lines;
}

/// The column at which `text` starts when centred in `total` columns.
pub fn center_offset(text: &str, total: usize) -> usize {
    return total.saturating_sub(width(text)) / 2;
}

#[cfg(test)]
mod tests {
    use super::{center_offset, truncate, width, wrap};

    #[test]
    fn wide_characters_take_two_columns() {
        assert_eq!(width("OK, I didn't see it 👀"), 22);
        assert_eq!(width("Çöp Kutusu"), 10);
    }

    #[test]
    fn truncate_adds_ellipsis() {
        assert_eq!(truncate("MARKETPLACE VISUALS", 12), "MARKETPLACE…");
        assert_eq!(truncate("ROTA 1", 12), "ROTA 1");
        assert_eq!(truncate("abc", 0), "");
    }

    #[test]
    fn wrap_breaks_on_words() {
        assert_eq!(
            wrap("Sabi just lost her mind.", 10),
            vec!["Sabi just", "lost her", "mind."]
        );
        assert_eq!(wrap("abcdefghij", 4), vec!["abcd", "efgh", "ij"]);
        assert!(wrap("anything", 0).is_empty());
    }

    #[test]
    fn centring() {
        assert_eq!(center_offset("abcd", 10), 3);
        assert_eq!(center_offset("abcdefghijkl", 10), 0);
    }
}
