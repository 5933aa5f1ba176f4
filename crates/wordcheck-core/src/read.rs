// Reading one-word-per-line text
//
// Lines end in "\n", "\r" or "\r\n". Empty lines carry no word and are
// skipped everywhere, so a word's byte offset is always the first byte of a
// non-empty line.

use std::io::{self, BufRead};

use crate::WordListError;

/// Pull-based reader of words from line-oriented text, tracking the byte
/// offset of each word it returns.
#[derive(Debug)]
pub struct WordReader<R> {
    reader: R,
    /// Byte offset of the next unread byte, relative to the start of the text.
    position: u64,
    /// Number of lines consumed so far.
    line: usize,
    buf: Vec<u8>,
}

impl<R: BufRead> WordReader<R> {
    /// Read from the start of the text.
    pub fn new(reader: R) -> Self {
        Self::at_position(reader, 0)
    }

    /// Read from a reader already positioned at byte `position`.
    pub fn at_position(reader: R, position: u64) -> Self {
        Self {
            reader,
            position,
            line: 0,
            buf: Vec::new(),
        }
    }

    /// Byte offset of the next unread byte.
    pub fn position(&self) -> u64 {
        self.position
    }

    /// Read the next word together with the byte offset its line starts at.
    ///
    /// Returns `Ok(None)` at end of input.
    pub fn next_word(&mut self) -> Result<Option<(u64, String)>, WordListError> {
        let Some(start) = self.next_line()? else {
            return Ok(None);
        };
        let bytes = std::mem::take(&mut self.buf);
        match String::from_utf8(bytes) {
            Ok(word) => Ok(Some((start, word))),
            Err(_) => Err(WordListError::InvalidEncoding { line: self.line }),
        }
    }

    /// Skip up to `count` words without decoding them.
    ///
    /// Returns the number of words actually skipped, which is less than
    /// `count` only when the input ran out.
    pub fn skip_words(&mut self, count: usize) -> Result<usize, WordListError> {
        for skipped in 0..count {
            if self.next_line()?.is_none() {
                return Ok(skipped);
            }
        }
        Ok(count)
    }

    /// Consume the reader, returning the underlying source.
    pub fn into_inner(self) -> R {
        self.reader
    }

    /// Advance to the next non-empty line, leaving its bytes in `buf`.
    /// Returns the offset the line starts at.
    fn next_line(&mut self) -> Result<Option<u64>, WordListError> {
        loop {
            let start = self.position;
            let Some(consumed) = read_line(&mut self.reader, &mut self.buf)? else {
                return Ok(None);
            };
            self.position += consumed;
            self.line += 1;
            if !self.buf.is_empty() {
                return Ok(Some(start));
            }
        }
    }
}

/// Read all words from `reader`, skipping empty lines.
pub fn read_words<R: BufRead>(reader: R) -> Result<Vec<String>, WordListError> {
    let mut words = Vec::new();
    let mut reader = WordReader::new(reader);
    while let Some((_, word)) = reader.next_word()? {
        words.push(word);
    }
    Ok(words)
}

/// Read one line into `buf` (without its terminator).
///
/// Returns the number of bytes consumed including the terminator, or `None`
/// at end of input.
fn read_line<R: BufRead>(reader: &mut R, buf: &mut Vec<u8>) -> io::Result<Option<u64>> {
    buf.clear();
    let mut consumed: u64 = 0;
    loop {
        let available = reader.fill_buf()?;
        if available.is_empty() {
            return Ok((consumed > 0).then_some(consumed));
        }
        match available.iter().position(|&b| b == b'\n' || b == b'\r') {
            Some(i) => {
                let terminator = available[i];
                buf.extend_from_slice(&available[..i]);
                reader.consume(i + 1);
                consumed += i as u64 + 1;
                if terminator == b'\r' && reader.fill_buf()?.first() == Some(&b'\n') {
                    reader.consume(1);
                    consumed += 1;
                }
                return Ok(Some(consumed));
            }
            None => {
                let len = available.len();
                buf.extend_from_slice(available);
                reader.consume(len);
                consumed += len as u64;
            }
        }
    }
}
