/// Normalizes SDL source one line at a time.
///
/// For every line this strips `#` comments, directive usages (`@name` plus an
/// optional argument list) and the contents of string literals, then collapses
/// runs of whitespace into single spaces. String literals are kept as an empty
/// `""` so that default values stay well-formed; their contents are dropped so
/// braces, `#` or keywords inside descriptions can never be mistaken for
/// schema structure.
///
/// Block strings (`"""`) and directive argument lists may span several lines,
/// so the normalizer carries that state from one line to the next. Feed it the
/// lines of a document in order.
#[derive(Clone, Debug, Default)]
pub struct LineNormalizer {
    directive_paren_depth: usize,
    in_block_string: bool,
}
impl LineNormalizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Normalizes one line. Returns `None` when nothing meaningful remains.
    pub fn normalize_line(&mut self, line: &str) -> Option<String> {
        let chars: Vec<char> = line.chars().collect();
        let mut out = NormalizedLine::default();
        let mut i = 0;

        while i < chars.len() {
            if self.in_block_string {
                if starts_with_at(&chars, i, "\\\"\"\"") {
                    i += 4;
                } else if starts_with_at(&chars, i, "\"\"\"") {
                    self.in_block_string = false;
                    i += 3;
                } else {
                    i += 1;
                }
                continue;
            }

            let ch = chars[i];
            if self.directive_paren_depth > 0 {
                match ch {
                    '#' => break,
                    '"' if starts_with_at(&chars, i, "\"\"\"") => {
                        self.in_block_string = true;
                        i += 3;
                    },
                    '"' => i = skip_string_literal(&chars, i),
                    '(' => {
                        self.directive_paren_depth += 1;
                        i += 1;
                    },
                    ')' => {
                        self.directive_paren_depth -= 1;
                        out.separate();
                        i += 1;
                    },
                    _ => i += 1,
                }
                continue;
            }

            match ch {
                '#' => break,

                '"' if starts_with_at(&chars, i, "\"\"\"") => {
                    self.in_block_string = true;
                    out.push_str("\"\"");
                    i += 3;
                },

                '"' => {
                    out.push_str("\"\"");
                    i = skip_string_literal(&chars, i);
                },

                '@' => {
                    i += 1;
                    while i < chars.len() && is_name_char(chars[i]) {
                        i += 1;
                    }
                    let mut lookahead = i;
                    while lookahead < chars.len() && chars[lookahead].is_whitespace() {
                        lookahead += 1;
                    }
                    if lookahead < chars.len() && chars[lookahead] == '(' {
                        self.directive_paren_depth = 1;
                        i = lookahead + 1;
                    }
                    out.separate();
                },

                ch if ch.is_whitespace() => {
                    out.separate();
                    i += 1;
                },

                ch => {
                    out.push(ch);
                    i += 1;
                },
            }
        }

        out.finish()
    }
}

#[derive(Default)]
struct NormalizedLine {
    pending_space: bool,
    text: String,
}
impl NormalizedLine {
    fn finish(self) -> Option<String> {
        if self.text.is_empty() {
            None
        } else {
            Some(self.text)
        }
    }

    fn push(&mut self, ch: char) {
        if self.pending_space && !self.text.is_empty() {
            self.text.push(' ');
        }
        self.pending_space = false;
        self.text.push(ch);
    }

    fn push_str(&mut self, s: &str) {
        for ch in s.chars() {
            self.push(ch);
        }
    }

    fn separate(&mut self) {
        self.pending_space = true;
    }
}

fn is_name_char(ch: char) -> bool {
    ch == '_' || ch.is_ascii_alphanumeric()
}

/// Returns the index just past the closing quote of the string literal that
/// opens at `start`, or the end of the line for an unterminated literal.
fn skip_string_literal(chars: &[char], start: usize) -> usize {
    let mut i = start + 1;
    while i < chars.len() {
        match chars[i] {
            '\\' => i += 2,
            '"' => return i + 1,
            _ => i += 1,
        }
    }
    chars.len()
}

fn starts_with_at(chars: &[char], index: usize, pattern: &str) -> bool {
    let mut i = index;
    for expected in pattern.chars() {
        if chars.get(i) != Some(&expected) {
            return false;
        }
        i += 1;
    }
    true
}
