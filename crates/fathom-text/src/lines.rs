//! Line splitting for the reader entry points.
//!
//! A line ends at `\n`, `\r\n` or a lone `\r`. Bytes that are not valid
//! UTF-8 are decoded to U+FFFD rather than failing the read, so badly
//! encoded text is analyzed as far as it can be. Only errors from the
//! underlying reader are returned.

use std::collections::VecDeque;
use std::io::{self, BufRead};

/// Iterator over the lines of a reader, without their terminators.
#[derive(Debug)]
pub struct LossyLines<R> {
    reader: R,
    buf: Vec<u8>,
    pending: VecDeque<String>,
    lossy: usize,
}

impl<R: BufRead> LossyLines<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buf: Vec::new(),
            pending: VecDeque::new(),
            lossy: 0,
        }
    }

    /// Number of `\n`-terminated chunks that contained invalid UTF-8.
    pub fn lossy_chunks(&self) -> usize {
        self.lossy
    }

    fn fill(&mut self) -> io::Result<bool> {
        self.buf.clear();
        if self.reader.read_until(b'\n', &mut self.buf)? == 0 {
            return Ok(false);
        }

        let decoded = String::from_utf8_lossy(&self.buf);
        if std::str::from_utf8(&self.buf).is_err() {
            self.lossy += 1;
        }

        let mut chunk: &str = &decoded;
        chunk = chunk.strip_suffix('\n').unwrap_or(chunk);
        // either half of "\r\n", or a lone final "\r"
        chunk = chunk.strip_suffix('\r').unwrap_or(chunk);
        self.pending.extend(chunk.split('\r').map(str::to_string));
        Ok(true)
    }
}

impl<R: BufRead> Iterator for LossyLines<R> {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(line) = self.pending.pop_front() {
                return Some(Ok(line));
            }
            match self.fill() {
                Ok(true) => continue,
                Ok(false) => return None,
                Err(err) => return Some(Err(err)),
            }
        }
    }
}
