use std::io::{self, Write};

/// Writes `s` with `\` and newline escaped, as required on `# HELP` lines.
#[inline]
pub fn write_escaped_help<W: Write + ?Sized>(w: &mut W, s: &str) -> io::Result<()> {
    write_escaped(w, s, false)
}

/// Writes `s` with `\`, `"` and newline escaped, as required inside
/// a quoted label value.
#[inline]
pub fn write_escaped_label_value<W: Write + ?Sized>(w: &mut W, s: &str) -> io::Result<()> {
    write_escaped(w, s, true)
}

// Copies unescaped runs straight to the sink. Every input byte is looked at
// exactly once, so an inserted backslash is never escaped again.
fn write_escaped<W: Write + ?Sized>(w: &mut W, s: &str, quotes: bool) -> io::Result<()> {
    let bytes = s.as_bytes();
    let mut start = 0;

    for (i, &b) in bytes.iter().enumerate() {
        let escaped: &[u8] = match b {
            b'\\' => b"\\\\",
            b'\n' => b"\\n",
            b'"' if quotes => b"\\\"",
            _ => continue,
        };
        w.write_all(&bytes[start..i])?;
        w.write_all(escaped)?;
        start = i + 1;
    }

    w.write_all(&bytes[start..])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn help(s: &str) -> String {
        let mut buf = Vec::new();
        write_escaped_help(&mut buf, s).unwrap();
        String::from_utf8(buf).unwrap()
    }

    fn label_value(s: &str) -> String {
        let mut buf = Vec::new();
        write_escaped_label_value(&mut buf, s).unwrap();
        String::from_utf8(buf).unwrap()
    }

    // Inverse of the escaping above; `quotes` selects the label value rules.
    fn unescape(s: &str, quotes: bool) -> String {
        let mut out = String::new();
        let mut chars = s.chars();
        while let Some(c) = chars.next() {
            if c != '\\' {
                out.push(c);
                continue;
            }
            match chars.next() {
                Some('\\') => out.push('\\'),
                Some('n') => out.push('\n'),
                Some('"') if quotes => out.push('"'),
                other => panic!("unexpected escape sequence \\{:?} in {:?}", other, s),
            }
        }
        out
    }

    #[test]
    fn test_escape_help() {
        #[rustfmt::skip]
        let tests = [
            ("",                     ""),
            ("plain text",           "plain text"),
            ("count\nof requests",   "count\\nof requests"),
            ("C:\\temp",             "C:\\\\temp"),
            ("\\n",                  "\\\\n"),
            ("say \"hi\"",           "say \"hi\""),
            ("\n\n",                 "\\n\\n"),
            ("ünïcode\n",            "ünïcode\\n"),
        ];

        for (input, expected) in &tests {
            assert_eq!(*expected, help(input), "while escaping {:?}", input);
        }
    }

    #[test]
    fn test_escape_label_value() {
        #[rustfmt::skip]
        let tests = [
            ("",              ""),
            ("/a\"b",         "/a\\\"b"),
            ("path\\to",      "path\\\\to"),
            ("line1\nline2",  "line1\\nline2"),
            ("\\\"",          "\\\\\\\""),
            ("\"\\n\"",       "\\\"\\\\n\\\""),
        ];

        for (input, expected) in &tests {
            assert_eq!(*expected, label_value(input), "while escaping {:?}", input);
        }
    }

    #[test]
    fn test_escape_round_trip() {
        let inputs = [
            "",
            "nothing special",
            "\\",
            "\\\\n",
            "\"quoted\"",
            "trailing backslash\\",
            "mixed \\ \" \n end",
            "\n\"\\\n",
        ];

        for input in &inputs {
            assert_eq!(*input, unescape(&label_value(input), true));
            assert_eq!(*input, unescape(&help(input), false));
        }
    }

    #[test]
    fn test_help_keeps_quotes() {
        let escaped = help("a \"b\"\\");
        assert_eq!("a \"b\"\\\\", escaped);
        assert_eq!("a \"b\"\\", unescape(&escaped, false));
    }
}
