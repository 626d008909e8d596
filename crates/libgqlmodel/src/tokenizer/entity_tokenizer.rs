use crate::file_reader;
use crate::tokenizer::LineNormalizer;
use crate::tokenizer::patterns;
use std::io::BufRead;
use std::io::Cursor;
use std::path::Path;

/// Lazily yields one normalized text block per top-level SDL declaration, in
/// source order.
///
/// Normalized lines are accumulated into a buffer until it contains a complete
/// declaration. The earliest complete declaration is then sliced off the front
/// of the buffer and yielded; whatever follows it stays buffered for the next
/// call to [`Iterator::next()`]. Text that sits outside of any recognized
/// declaration (`schema { ... }` blocks, directive definitions, bodiless
/// types) is discarded.
///
/// The sequence is finite and can not be restarted.
pub struct EntityTokenizer<R: BufRead> {
    buffer: String,
    exhausted: bool,
    lines: std::io::Lines<R>,
    normalizer: LineNormalizer,
}
impl<R: BufRead> EntityTokenizer<R> {
    pub fn new(reader: R) -> Self {
        Self {
            buffer: String::new(),
            exhausted: false,
            lines: reader.lines(),
            normalizer: LineNormalizer::new(),
        }
    }

    fn next_line(&mut self) {
        match self.lines.next() {
            Some(Ok(line)) => {
                if let Some(normalized) = self.normalizer.normalize_line(&line) {
                    log::trace!("Normalized schema line: `{normalized}`");
                    if !self.buffer.is_empty() {
                        self.buffer.push(' ');
                    }
                    self.buffer.push_str(normalized.as_str());
                }
            },

            Some(Err(err)) => {
                log::warn!(
                    "Stopped reading schema input after a read error: {err}"
                );
                self.exhausted = true;
            },

            None => self.exhausted = true,
        }
    }

    /// Slices the earliest complete declaration off the front of the buffer.
    ///
    /// When `flush` is set no further input will arrive, so declarations
    /// without a closing delimiter are taken as they stand.
    fn take_block(&mut self, flush: bool) -> Option<String> {
        let found = patterns::earliest_declaration(&self.buffer)?;
        let prefix = &self.buffer[..found.start];

        if patterns::has_unclosed_brace(prefix) {
            // The match sits inside a body that has not been closed yet.
            if flush {
                log::debug!(
                    "Discarding unterminated schema text: `{}`",
                    self.buffer,
                );
                self.buffer.clear();
            }
            return None;
        }

        if !flush
            && !found.is_self_delimited()
            && self.buffer[found.end..].trim().is_empty() {
            return None;
        }

        if !prefix.trim().is_empty() {
            log::debug!(
                "Discarding schema text outside of any declaration: `{}`",
                prefix.trim(),
            );
        }

        let block = self.buffer[found.start..found.end].trim().to_string();
        let remainder = self.buffer[found.end..].trim_start().to_string();
        self.buffer = remainder;

        log::trace!("Tokenized schema entity: `{block}`");
        Some(block)
    }
}
impl EntityTokenizer<Cursor<String>> {
    /// Tokenizes a schema file.
    ///
    /// A missing or unreadable file yields an empty sequence rather than an
    /// error: "no entities" is the contract callers must handle.
    pub fn from_path<P: AsRef<Path>>(file_path: P) -> Self {
        let content = match file_reader::read_schema_file(file_path.as_ref()) {
            Ok(content) => content,
            Err(err) => {
                log::warn!(
                    "No schema entities loaded from {:?}: {err}",
                    err.file_path(),
                );
                String::new()
            },
        };
        Self::new(Cursor::new(content))
    }

    pub fn from_schema_str(content: impl Into<String>) -> Self {
        Self::new(Cursor::new(content.into()))
    }
}
impl<R: BufRead> Iterator for EntityTokenizer<R> {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(block) = self.take_block(self.exhausted) {
                return Some(block);
            }

            if self.exhausted {
                if !self.buffer.trim().is_empty() {
                    log::debug!(
                        "Discarding trailing schema text: `{}`",
                        self.buffer.trim(),
                    );
                    self.buffer.clear();
                }
                return None;
            }

            self.next_line();
        }
    }
}
