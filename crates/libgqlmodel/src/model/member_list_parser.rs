use crate::ModelBuildError;
use crate::model::ArgumentDeclaration;
use crate::model::FieldDeclaration;
use crate::types::TypeAnnotation;

type Result<T> = std::result::Result<T, ModelBuildError>;

/// Cursor over the normalized text found between the braces of a declaration.
///
/// Descriptions have already been reduced to `""` by the tokenizer; they are
/// skipped along with commas wherever a member may start.
pub(crate) struct MemberListParser<'a> {
    entity_name: &'a str,
    pos: usize,
    text: &'a str,
}
impl<'a> MemberListParser<'a> {
    fn bump(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.pos += ch.len_utf8();
        Some(ch)
    }

    fn error(&self, detail: impl Into<String>) -> ModelBuildError {
        ModelBuildError::MalformedEntityBody {
            entity_name: self.entity_name.to_string(),
            detail: detail.into(),
        }
    }

    fn expect_char(&mut self, expected: char) -> Result<()> {
        self.skip_whitespace();
        match self.bump() {
            Some(ch) if ch == expected => Ok(()),
            Some(ch) => Err(self.error(format!(
                "expected `{expected}` but found `{ch}` at offset {}",
                self.pos - ch.len_utf8(),
            ))),
            None => Err(self.error(format!(
                "expected `{expected}` but reached the end of the body",
            ))),
        }
    }

    fn is_at_end(&self) -> bool {
        self.pos >= self.text.len()
    }

    pub(crate) fn new(entity_name: &'a str, text: &'a str) -> Self {
        Self {
            entity_name,
            pos: 0,
            text,
        }
    }

    fn parse_arguments(&mut self) -> Result<Vec<ArgumentDeclaration>> {
        self.expect_char('(')?;
        let mut arguments = vec![];
        loop {
            self.skip_separators()?;
            match self.peek() {
                Some(')') => {
                    self.bump();
                    return Ok(arguments);
                },
                None => return Err(self.error("unterminated argument list")),
                Some(_) => (),
            }

            let name = self.parse_name()?.to_string();
            self.expect_char(':')?;
            let type_annotation = self.parse_type()?;
            self.skip_whitespace();
            if self.peek() == Some('=') {
                self.bump();
                self.skip_default_value()?;
            }
            arguments.push(ArgumentDeclaration {
                name,
                type_annotation,
            });
        }
    }

    /// Parses the value names of an `enum` body.
    pub(crate) fn parse_enum_values(mut self) -> Result<Vec<String>> {
        let mut values = vec![];
        loop {
            self.skip_separators()?;
            if self.is_at_end() {
                return Ok(values);
            }
            values.push(self.parse_name()?.to_string());
        }
    }

    /// Parses the fields of a `type`, `input` or `interface` body.
    pub(crate) fn parse_fields(mut self) -> Result<Vec<FieldDeclaration>> {
        let mut fields = vec![];
        loop {
            self.skip_separators()?;
            if self.is_at_end() {
                return Ok(fields);
            }

            let raw_name = self.parse_name()?.to_string();
            self.skip_whitespace();
            let arguments =
                if self.peek() == Some('(') {
                    self.parse_arguments()?
                } else {
                    vec![]
                };
            self.expect_char(':')?;
            let type_annotation = self.parse_type()?;
            // Input fields may carry a default value.
            self.skip_whitespace();
            if self.peek() == Some('=') {
                self.bump();
                self.skip_default_value()?;
            }
            fields.push(FieldDeclaration {
                arguments,
                raw_name,
                type_annotation,
            });
        }
    }

    fn parse_name(&mut self) -> Result<&'a str> {
        self.skip_whitespace();
        let start = self.pos;
        match self.peek() {
            Some(ch) if ch == '_' || ch.is_ascii_alphabetic() => {
                self.bump();
            },
            Some(ch) => return Err(self.error(format!(
                "expected a name but found `{ch}` at offset {start}",
            ))),
            None => return Err(self.error(
                "expected a name but reached the end of the body",
            )),
        }
        while let Some(ch) = self.peek() {
            if ch != '_' && !ch.is_ascii_alphanumeric() {
                break;
            }
            self.bump();
        }
        Ok(&self.text[start..self.pos])
    }

    fn parse_type(&mut self) -> Result<TypeAnnotation> {
        self.skip_whitespace();
        let annotation =
            if self.peek() == Some('[') {
                self.bump();
                let inner = self.parse_type()?;
                self.expect_char(']')?;
                let nullable = !self.skip_non_null_marker();
                TypeAnnotation::list(inner, nullable)
            } else {
                let name = self.parse_name()?.to_string();
                let nullable = !self.skip_non_null_marker();
                TypeAnnotation::named(name, nullable)
            };
        Ok(annotation)
    }

    fn peek(&self) -> Option<char> {
        self.text[self.pos..].chars().next()
    }

    /// Skips over a default value: a string, a (possibly nested) list, or a
    /// single bare token such as a number or an enum value.
    fn skip_default_value(&mut self) -> Result<()> {
        self.skip_whitespace();
        match self.peek() {
            Some('"') => self.skip_string(),
            Some('[') => {
                self.bump();
                let mut depth = 1;
                while depth > 0 {
                    match self.peek() {
                        Some('"') => self.skip_string()?,
                        Some('[') => {
                            self.bump();
                            depth += 1;
                        },
                        Some(']') => {
                            self.bump();
                            depth -= 1;
                        },
                        Some(_) => {
                            self.bump();
                        },
                        None => return Err(self.error(
                            "unterminated list in a default value",
                        )),
                    }
                }
                Ok(())
            },
            Some(_) => {
                while let Some(ch) = self.peek() {
                    if ch.is_whitespace() || matches!(ch, ',' | ')') {
                        break;
                    }
                    self.bump();
                }
                Ok(())
            },
            None => Err(self.error("missing default value after `=`")),
        }
    }

    fn skip_non_null_marker(&mut self) -> bool {
        self.skip_whitespace();
        if self.peek() == Some('!') {
            self.bump();
            true
        } else {
            false
        }
    }

    /// Skips whitespace, commas and descriptions.
    fn skip_separators(&mut self) -> Result<()> {
        loop {
            self.skip_whitespace();
            match self.peek() {
                Some(',') => {
                    self.bump();
                },
                Some('"') => self.skip_string()?,
                _ => return Ok(()),
            }
        }
    }

    fn skip_string(&mut self) -> Result<()> {
        self.bump();
        let mut escaped = false;
        while let Some(ch) = self.bump() {
            match ch {
                '\\' if !escaped => escaped = true,
                '"' if !escaped => return Ok(()),
                _ => escaped = false,
            }
        }
        Err(self.error("unterminated string"))
    }

    fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(char::is_whitespace) {
            self.bump();
        }
    }
}
