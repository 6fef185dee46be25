use crate::cursor::Cursor;
use crate::error::{ArgError, OptionName, ParseError};

/// A single invocation of an option handler.
///
/// This is what a [`Handler::Raw`](crate::Handler::Raw) function gets to see:
/// the cursor over the option's argument region, the name the option was
/// invoked with and a way to report errors.  The typed handlers use the same
/// extractors internally.
///
/// All extractors follow the same rules:
///
/// * For long options the argument has to be introduced by `=`
///   (`--param=5`).  Short options take the argument as is (`-p5`).
/// * The whole argument region must be consumed.  Trailing characters after
///   a valid value are an error, they are never silently dropped.
/// * On failure the error is recorded against the option and `None` (or
///   `false`) is returned.  Parsing of the command line continues.
pub struct Invocation<'a, 's> {
    cursor: &'a mut Cursor<'s>,
    short: Option<char>,
    long: &'static str,
    long_form: bool,
    errors: &'a mut Vec<ParseError>,
}

impl<'a, 's> Invocation<'a, 's> {
    pub(crate) fn new(
        cursor: &'a mut Cursor<'s>,
        short: Option<char>,
        long: &'static str,
        long_form: bool,
        errors: &'a mut Vec<ParseError>,
    ) -> Invocation<'a, 's> {
        Invocation {
            cursor,
            short,
            long,
            long_form,
            errors,
        }
    }

    /// Was the option invoked by its long name?
    pub fn is_long(&self) -> bool {
        self.long_form
    }

    /// The option name as it was invoked.
    pub fn option_name(&self) -> OptionName {
        match (self.long_form, self.short) {
            (false, Some(c)) => OptionName::Short(c),
            _ => OptionName::Long(self.long.to_string()),
        }
    }

    /// Returns `true` if nothing is left in the argument region.
    ///
    /// For long options this means nothing, not even `=`, follows the name.
    pub fn is_empty(&self) -> bool {
        self.cursor.is_end()
    }

    /// Direct access to the argument cursor.
    pub fn cursor(&mut self) -> &mut Cursor<'s> {
        &mut *self.cursor
    }

    /// Records an error against this option.
    pub fn error<E: Into<ArgError>>(&mut self, error: E) {
        self.errors.push(ParseError::Argument {
            option: self.option_name(),
            error: error.into(),
        });
    }

    /// Consumes the `=` that separates a long option from its argument.
    ///
    /// Short options need no separator so this always succeeds for them.
    pub fn check_separator(&mut self) -> bool {
        if !self.long_form || self.cursor.eat('=') {
            true
        } else {
            self.error(ArgError::MissingSeparator);
            false
        }
    }

    /// Checks that the option was given without argument.
    pub fn no_arg(&mut self) -> bool {
        if self.cursor.is_end() {
            true
        } else {
            self.error(ArgError::UnexpectedArgument);
            false
        }
    }

    /// Extracts a signed integer argument (`-p-5`, `--param=+5`).
    pub fn int_arg(&mut self) -> Option<i64> {
        if !self.check_separator() {
            return None;
        }
        let value = self.cursor.scan_int().filter(|_| self.cursor.is_end());
        self.expect(value, ArgError::Integer)
    }

    /// Extracts an unsigned integer argument (`-p5`, `--param=5`).
    pub fn uint_arg(&mut self) -> Option<u64> {
        if !self.check_separator() {
            return None;
        }
        let value = self.cursor.scan_uint().filter(|_| self.cursor.is_end());
        self.expect(value, ArgError::UnsignedInteger)
    }

    /// Extracts a floating point argument (`-p2.5`, `--param=1e-3`).
    pub fn float_arg(&mut self) -> Option<f64> {
        if !self.check_separator() {
            return None;
        }
        let value = self.cursor.scan_float().filter(|_| self.cursor.is_end());
        self.expect(value, ArgError::Float)
    }

    /// Extracts a string argument.  Empty strings are rejected.
    pub fn string_arg(&mut self) -> Option<String> {
        if !self.check_separator() {
            return None;
        }
        let value = self.cursor.take_rest();
        let value = (!value.is_empty()).then(|| value.to_string());
        self.expect(value, ArgError::EmptyString)
    }

    /// Extracts a boolean argument.
    ///
    /// Accepted are `yes`, `y`, `true`, `1` and `no`, `n`, `false`, `0`.
    /// Matching is case-sensitive.
    pub fn bool_arg(&mut self) -> Option<bool> {
        if !self.check_separator() {
            return None;
        }
        let value = match self.cursor.take_rest() {
            "yes" | "y" | "true" | "1" => Some(true),
            "no" | "n" | "false" | "0" => Some(false),
            _ => None,
        };
        self.expect(value, ArgError::Bool)
    }

    /// Extracts a single character argument.
    pub fn char_arg(&mut self) -> Option<char> {
        if !self.check_separator() {
            return None;
        }
        let value = self.cursor.next().filter(|_| self.cursor.is_end());
        self.expect(value, ArgError::Char)
    }

    fn expect<V>(&mut self, value: Option<V>, error: ArgError) -> Option<V> {
        if value.is_none() {
            self.error(error);
        }
        value
    }
}
