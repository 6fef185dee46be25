/// A read cursor over the argument region of a single token.
///
/// For attached arguments (`-p5`, `--param=5`) the cursor covers whatever
/// trails the option name, for separate arguments (`-p 5`) it covers the
/// following token.  Cursors only ever move forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor<'s> {
    rest: &'s str,
}

impl<'s> Cursor<'s> {
    /// Creates a cursor positioned at the start of `s`.
    pub fn new(s: &'s str) -> Cursor<'s> {
        Cursor { rest: s }
    }

    /// Looks at the next character without consuming it.
    #[inline]
    pub fn peek(&self) -> Option<char> {
        self.rest.chars().next()
    }

    /// Consumes the next character if it equals `expected`.
    pub fn eat(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.rest = &self.rest[expected.len_utf8()..];
            true
        } else {
            false
        }
    }

    /// Returns `true` once every character was consumed.
    #[inline]
    pub fn is_end(&self) -> bool {
        self.rest.is_empty()
    }

    /// Returns the unconsumed part without moving.
    pub fn rest(&self) -> &'s str {
        self.rest
    }

    /// Consumes everything that is left.
    pub fn take_rest(&mut self) -> &'s str {
        std::mem::take(&mut self.rest)
    }

    /// Consumes characters as long as `f` accepts them and returns them.
    pub fn eat_while<F: FnMut(char) -> bool>(&mut self, mut f: F) -> &'s str {
        let end = self
            .rest
            .char_indices()
            .find(|&(_, c)| !f(c))
            .map_or(self.rest.len(), |(idx, _)| idx);
        let (taken, rest) = self.rest.split_at(end);
        self.rest = rest;
        taken
    }

    /// Scans a signed decimal integer (`[+-]?[0-9]+`).
    ///
    /// A sign is only consumed if a digit follows it.  Returns `None` if no
    /// literal starts here or if it does not fit into an `i64`, in which case
    /// nothing or only the digits are consumed.
    pub fn scan_int(&mut self) -> Option<i64> {
        let start = self.rest;
        let mut probe = *self;
        if !probe.eat('+') {
            probe.eat('-');
        }
        if !probe.peek().is_some_and(|c| c.is_ascii_digit()) {
            return None;
        }
        probe.eat_while(|c| c.is_ascii_digit());
        let literal = &start[..start.len() - probe.rest.len()];
        *self = probe;
        literal.parse().ok()
    }

    /// Scans an unsigned decimal integer (`[0-9]+`).
    pub fn scan_uint(&mut self) -> Option<u64> {
        if !self.peek().is_some_and(|c| c.is_ascii_digit()) {
            return None;
        }
        self.eat_while(|c| c.is_ascii_digit()).parse().ok()
    }

    /// Scans a decimal floating point literal.
    ///
    /// Accepted are an optional sign, digits with an optional fraction (or a
    /// fraction alone) and an optional exponent: `5`, `-2.5`, `.5`, `3.`,
    /// `1e-3`.  The exponent is only consumed if it is complete.
    pub fn scan_float(&mut self) -> Option<f64> {
        let start = self.rest;
        let mut probe = *self;
        if !probe.eat('+') {
            probe.eat('-');
        }
        let int_digits = probe.eat_while(|c| c.is_ascii_digit()).len();
        let mut frac_digits = 0;
        if probe.eat('.') {
            frac_digits = probe.eat_while(|c| c.is_ascii_digit()).len();
        }
        if int_digits == 0 && frac_digits == 0 {
            return None;
        }
        let mut exp = probe;
        if exp.eat('e') || exp.eat('E') {
            if !exp.eat('+') {
                exp.eat('-');
            }
            if !exp.eat_while(|c| c.is_ascii_digit()).is_empty() {
                probe = exp;
            }
        }
        let literal = &start[..start.len() - probe.rest.len()];
        *self = probe;
        literal.parse().ok()
    }
}

impl Iterator for Cursor<'_> {
    type Item = char;

    fn next(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.rest = &self.rest[ch.len_utf8()..];
        Some(ch)
    }
}
