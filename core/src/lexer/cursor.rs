/// Character-level reader over the source string.
///
/// `ch` is the character at `pos`, or `None` once the input is exhausted.
/// `read_pos` always points just past `ch`.
pub struct Cursor<'src> {
    source: &'src str,
    pos: usize,
    read_pos: usize,
    ch: Option<char>,
}

impl<'src> Cursor<'src> {
    pub fn new(source: &'src str) -> Self {
        let mut cursor = Self {
            source,
            pos: 0,
            read_pos: 0,
            ch: None,
        };
        cursor.advance();
        cursor
    }

    /// Current byte position in the source.
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// The character under the cursor.
    pub fn current(&self) -> Option<char> {
        self.ch
    }

    /// Peek at the character after the current one without advancing.
    pub fn peek(&self) -> Option<char> {
        self.source.get(self.read_pos..)?.chars().next()
    }

    /// Move onto the next character. Once at the end this is a no-op.
    pub fn advance(&mut self) {
        if self.read_pos > self.source.len() {
            return;
        }
        self.pos = self.read_pos;
        self.ch = self.source[self.pos..].chars().next();
        self.read_pos = self.pos + self.ch.map_or(1, char::len_utf8);
    }

    /// Advance while `pred` holds for the current character.
    pub fn eat_while(&mut self, pred: impl Fn(char) -> bool) {
        while self.ch.is_some_and(&pred) {
            self.advance();
        }
    }

    /// Return a slice of the source from `start` to the current position.
    pub fn slice_from(&self, start: usize) -> &'src str {
        &self.source[start..self.pos]
    }

    /// Whether the cursor has reached the end.
    pub fn is_at_end(&self) -> bool {
        self.ch.is_none()
    }
}
