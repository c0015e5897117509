//! Terminal output sanitization
//!
//! History lines are arbitrary user input and can carry escape sequences (pasted colored output,
//! `printf '\e[2J'`, title-setting OSC strings). Drawing them verbatim would let a history entry
//! move the cursor or repaint the picker, so entries pass through [`strip_ansi_codes`] before they
//! reach the renderer. The selected command itself is printed untouched.

const ESC: char = '\x1b';
const BEL: char = '\x07';

/// Strips ANSI escape sequences and control characters from a string
///
/// Removes CSI sequences (`ESC [ ... letter`), OSC sequences (`ESC ] ... BEL` or `ESC ] ... ESC \`)
/// and every other control character except tab.
///
/// # Examples
///
/// ```
/// use history_picker::utils::terminal::strip_ansi_codes;
///
/// let text = "echo \x1b[31mred\x1b[0m";
/// assert_eq!(strip_ansi_codes(text), "echo red");
/// ```
pub fn strip_ansi_codes(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch == ESC {
            match chars.peek() {
                Some('[') => {
                    chars.next();
                    // Skip until the final byte of the CSI sequence
                    for next_ch in chars.by_ref() {
                        if next_ch.is_ascii_alphabetic() {
                            break;
                        }
                    }
                }
                Some(']') => {
                    chars.next();
                    // OSC runs until BEL or the string terminator ESC \
                    while let Some(next_ch) = chars.next() {
                        if next_ch == BEL {
                            break;
                        }
                        if next_ch == ESC && chars.peek() == Some(&'\\') {
                            chars.next();
                            break;
                        }
                    }
                }
                _ => {}
            }
            continue;
        }

        if ch.is_control() && ch != '\t' {
            continue;
        }

        result.push(ch);
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_ansi_codes_color() {
        let text = "\x1b[31mRed text\x1b[0m normal";
        assert_eq!(strip_ansi_codes(text), "Red text normal");
    }

    #[test]
    fn test_strip_ansi_codes_cursor_movement() {
        let text = "printf \x1b[2J\x1b[H cleared";
        assert_eq!(strip_ansi_codes(text), "printf  cleared");
    }

    #[test]
    fn test_strip_ansi_codes_osc_title() {
        assert_eq!(strip_ansi_codes("a\x1b]0;title\x07b"), "ab");
        assert_eq!(strip_ansi_codes("a\x1b]0;title\x1b\\b"), "ab");
    }

    #[test]
    fn test_strip_ansi_codes_control_chars() {
        assert_eq!(strip_ansi_codes("Alert! \x07\x08"), "Alert! ");
        assert_eq!(strip_ansi_codes("a\rb\nc"), "abc");
    }

    #[test]
    fn test_strip_ansi_codes_keeps_tab() {
        assert_eq!(strip_ansi_codes("cut -d\t-f1"), "cut -d\t-f1");
    }

    #[test]
    fn test_strip_ansi_codes_plain_and_unicode() {
        assert_eq!(strip_ansi_codes("git commit -m 'ok 👍'"), "git commit -m 'ok 👍'");
        assert_eq!(strip_ansi_codes(""), "");
    }

    #[test]
    fn test_strip_ansi_codes_trailing_escape() {
        assert_eq!(strip_ansi_codes("ls\x1b"), "ls");
    }
}
