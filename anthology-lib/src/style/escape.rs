//! Escaping of raw selector strings into CSS identifier form.

/// Escape a raw selector string so it can be embedded in a CSS selector,
/// following the `CSS.escape` algorithm: identifier-safe characters pass
/// through, a leading digit (or a digit after a single leading `-`) is
/// hex-escaped, and everything else gets a backslash prefix.
///
/// Pure and total; escaping an already identifier-safe string is a no-op.
pub fn escape(raw: &str) -> String {
    let chars: Vec<char> = raw.chars().collect();
    let mut out = String::with_capacity(raw.len());

    for (index, &ch) in chars.iter().enumerate() {
        match ch {
            '\u{0}' => out.push('\u{FFFD}'),
            '\u{1}'..='\u{1f}' | '\u{7f}' => push_hex_escape(&mut out, ch),
            '0'..='9' if index == 0 => push_hex_escape(&mut out, ch),
            '0'..='9' if index == 1 && chars[0] == '-' => push_hex_escape(&mut out, ch),
            '-' if chars.len() == 1 => {
                out.push('\\');
                out.push('-');
            }
            _ if ch >= '\u{80}' || ch == '-' || ch == '_' || ch.is_ascii_alphanumeric() => {
                out.push(ch);
            }
            _ => {
                out.push('\\');
                out.push(ch);
            }
        }
    }

    out
}

/// Emit a code-point escape, e.g. `\31 ` for '1'. The trailing space
/// terminates the escape so a following hex digit is not swallowed.
fn push_hex_escape(out: &mut String, ch: char) {
    out.push('\\');
    out.push_str(&format!("{:x}", ch as u32));
    out.push(' ');
}
