use crate::error::{Result, SignatureError};

/// Byte cursor over a descriptor/signature string.
///
/// Descriptors and signatures are ASCII apart from identifier characters, and
/// every structural character is a single byte, so byte-level scanning is safe
/// as long as identifiers are only ever split at structural bytes.
pub(crate) struct Cursor<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    pub(crate) fn peek(&self) -> Option<u8> {
        self.input.as_bytes().get(self.pos).copied()
    }

    pub(crate) fn bump(&mut self) -> Option<u8> {
        let b = self.peek()?;
        self.pos += 1;
        Some(b)
    }

    /// Consume `b` if it is next; report whether it was consumed.
    pub(crate) fn eat(&mut self, b: u8) -> bool {
        if self.peek() == Some(b) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    pub(crate) fn expect(&mut self, b: u8) -> Result<()> {
        if self.eat(b) {
            Ok(())
        } else {
            Err(self.malformed())
        }
    }

    /// Consume and return the (possibly empty) run of bytes before the first
    /// byte for which `stop` returns true, or before end of input.
    pub(crate) fn take_until(&mut self, stop: impl Fn(u8) -> bool) -> &'a str {
        let start = self.pos;
        while let Some(b) = self.peek() {
            if stop(b) {
                break;
            }
            self.pos += 1;
        }
        &self.input[start..self.pos]
    }

    pub(crate) fn is_at_end(&self) -> bool {
        self.pos >= self.input.len()
    }

    pub(crate) fn malformed(&self) -> SignatureError {
        SignatureError::Malformed {
            input: self.input.to_string(),
            offset: self.pos,
        }
    }

    /// The whole input must have been consumed.
    pub(crate) fn finish(self) -> Result<()> {
        if self.is_at_end() {
            Ok(())
        } else {
            Err(SignatureError::Trailing {
                input: self.input.to_string(),
                offset: self.pos,
            })
        }
    }
}
