/// Cursor over the lines of a status block. Continuation handling pulls
/// lines through [LineCursor::peek] and [LineCursor::advance] without
/// going back to the main walk.
#[derive(Debug)]
pub struct LineCursor<'a> {
    lines: Vec<&'a str>,
    pos: usize,
}

impl<'a> LineCursor<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            lines: split_lines(text),
            pos: 0,
        }
    }

    /// Take the current line and move past it.
    pub fn next_line(&mut self) -> Option<&'a str> {
        let line = self.peek()?;
        self.pos += 1;
        Some(line)
    }

    pub fn peek(&self) -> Option<&'a str> {
        self.lines.get(self.pos).copied()
    }

    pub fn advance(&mut self) {
        if self.pos < self.lines.len() {
            self.pos += 1;
        }
    }

    pub fn position(&self) -> usize {
        self.pos
    }
}

/// Split on `\n`, `\r\n` or a bare `\r`. A trailing terminator does not
/// start an extra empty line.
fn split_lines(text: &str) -> Vec<&str> {
    let mut lines: Vec<&str> = text
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .flat_map(|line| line.split('\r'))
        .collect();
    if lines.last() == Some(&"") {
        lines.pop();
    }
    lines
}
