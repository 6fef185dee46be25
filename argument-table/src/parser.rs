use std::ffi::OsString;
use std::fmt;

use crate::cursor::Cursor;
use crate::error::ParseError;
use crate::invocation::Invocation;
use crate::option::{ArgMode, OptionSpec, Registry, Resolution};

/// Receives diagnostics when error printing is enabled.
///
/// Any `FnMut(&ParseError)` closure is a sink.  The default sink is
/// [`Stderr`].
pub trait Sink {
    /// Called once for every recorded error, in the order they were found.
    fn emit(&mut self, error: &ParseError);
}

impl<F: FnMut(&ParseError)> Sink for F {
    fn emit(&mut self, error: &ParseError) {
        self(error)
    }
}

/// Writes every diagnostic as a line to stderr.
#[derive(Debug, Default, Clone, Copy)]
pub struct Stderr;

impl Sink for Stderr {
    fn emit(&mut self, error: &ParseError) {
        eprintln!("{}", error);
    }
}

/// Parser behavior flags.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Flag {
    /// When set, a bare `--` makes all following arguments file names.
    ///
    /// **Default:** flag is set
    HandleDoubleDash,
    /// When set, required arguments of short options can be passed as the
    /// next argument (`-p 5`) if nothing is attached to the option.
    ///
    /// **Default:** flag is set
    SeparateArguments,
}

impl Flag {
    fn as_u8(self) -> u8 {
        match self {
            Flag::HandleDoubleDash => 1,
            Flag::SeparateArguments => 2,
        }
    }
}

/// A table driven command line parser.
///
/// The parser walks a command line once, collects positional arguments as
/// file names and dispatches every option to the handler registered in the
/// option table.  Errors do not stop the parser: they are recorded (and
/// printed to the [`Sink`] if requested) and parsing continues with the next
/// argument so that all problems of a command line can be reported at once.
///
/// The same parser can be used for any number of [`parse`](Self::parse)
/// calls.  Every call starts from a clean state.
pub struct Parser<'r, T> {
    registry: Registry<'r, T>,
    files: Vec<String>,
    errors: Vec<ParseError>,
    emitted: usize,
    print_errors: bool,
    flags: u8,
    sink: Box<dyn Sink + 'r>,
}

impl<T> fmt::Debug for Parser<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Parser")
            .field("registry", &self.registry)
            .field("files", &self.files)
            .field("errors", &self.errors)
            .finish()
    }
}

impl<'r, T> Parser<'r, T> {
    /// Creates a parser for the given option table.
    pub fn new(options: &'r [OptionSpec<T>]) -> Parser<'r, T> {
        Parser {
            registry: Registry::new(options),
            files: Vec::new(),
            errors: Vec::new(),
            emitted: 0,
            print_errors: false,
            flags: Flag::HandleDoubleDash.as_u8() | Flag::SeparateArguments.as_u8(),
            sink: Box::new(Stderr),
        }
    }

    /// Replaces the sink diagnostics are printed to.
    pub fn with_sink<S: Sink + 'r>(mut self, sink: S) -> Parser<'r, T> {
        self.sink = Box::new(sink);
        self
    }

    /// Returns the option table.
    pub fn registry(&self) -> Registry<'r, T> {
        self.registry
    }

    /// Check if a parsing [`Flag`] is currently set.
    #[inline]
    pub fn get_flag(&self, flag: Flag) -> bool {
        self.flags & flag.as_u8() != 0
    }

    /// Sets or unsets a parsing [`Flag`].
    #[inline]
    pub fn set_flag(&mut self, flag: Flag, yes: bool) {
        if yes {
            self.flags |= flag.as_u8();
        } else {
            self.flags &= !flag.as_u8();
        }
    }

    /// Parses the command line of the current process.
    ///
    /// The program name is skipped.
    pub fn parse_env(&mut self, target: &mut T, print_errors: bool) {
        self.parse(target, std::env::args_os().skip(1), print_errors)
    }

    /// Parses a command line.
    ///
    /// The arguments must not include the program name.  Recognized options
    /// are dispatched to their handlers which receive `target`, everything
    /// else ends up in [`files`](Self::files).  If `print_errors` is set, all
    /// errors are passed to the sink as they are found.
    ///
    /// Afterwards check [`had_error`](Self::had_error) to decide if the
    /// command line was acceptable.
    pub fn parse<I>(&mut self, target: &mut T, args: I, print_errors: bool)
    where
        I: IntoIterator,
        I::Item: Into<OsString>,
    {
        self.files.clear();
        self.errors.clear();
        self.emitted = 0;
        self.print_errors = print_errors;

        let args: Vec<Result<String, OsString>> =
            args.into_iter().map(|arg| arg.into().into_string()).collect();
        let mut files_only = false;
        let mut idx = 0;

        while idx < args.len() {
            let arg = match args[idx] {
                Ok(ref arg) => arg.as_str(),
                Err(ref raw) => {
                    self.errors.push(ParseError::InvalidUnicode(raw.clone()));
                    self.flush();
                    idx += 1;
                    continue;
                }
            };

            if files_only || !arg.starts_with('-') {
                log::trace!("file name {:?}", arg);
                self.files.push(arg.to_string());
            } else if arg == "--" {
                if self.get_flag(Flag::HandleDoubleDash) {
                    log::trace!("end of options");
                    files_only = true;
                } else {
                    self.files.push(arg.to_string());
                }
            } else if let Some(body) = arg.strip_prefix("--") {
                self.long_option(target, body);
            } else {
                let next = args.get(idx + 1).and_then(|next| next.as_deref().ok());
                if self.short_options(target, &arg[1..], next) {
                    idx += 1;
                }
            }

            self.flush();
            idx += 1;
        }
    }

    /// Handles `--name` and `--name=value`.
    fn long_option(&mut self, target: &mut T, body: &str) {
        let mut cursor = Cursor::new(body);
        let name = cursor.eat_while(|c| c.is_ascii_alphanumeric() || c == '-');
        match self.registry.resolve_long(name) {
            Resolution::Found(opt) => {
                log::trace!("option --{} resolved to --{}", name, opt.long());
                self.invoke(target, opt, &mut cursor, true);
            }
            Resolution::NotFound => {
                self.errors.push(ParseError::UnknownLong(name.to_string()));
            }
            Resolution::Ambiguous(candidates) => {
                self.errors.push(ParseError::Ambiguous {
                    name: name.to_string(),
                    candidates,
                });
            }
        }
    }

    /// Handles a cluster of short options (`-a`, `-abc`, `-p5`, `-p 5`).
    ///
    /// Returns `true` if the next argument was consumed as option argument.
    fn short_options<'s>(
        &mut self,
        target: &mut T,
        cluster: &'s str,
        next: Option<&'s str>,
    ) -> bool {
        let errors_before = self.errors.len();
        let mut cursor = Cursor::new(cluster);
        let mut combined = false;
        let mut consumed_next = false;

        while let Some(c) = cursor.next() {
            match self.registry.find_short(c) {
                Some(opt) if !combined || opt.mode() == ArgMode::None => {
                    if opt.mode() == ArgMode::Required
                        && cursor.is_end()
                        && self.get_flag(Flag::SeparateArguments)
                    {
                        if let Some(value) = next.filter(|value| !value.starts_with('-')) {
                            log::trace!("option -{} takes separate argument {:?}", c, value);
                            cursor = Cursor::new(value);
                            consumed_next = true;
                        }
                    }
                    self.invoke(target, opt, &mut cursor, false);
                    if opt.mode() == ArgMode::None {
                        combined = true;
                    }
                }
                Some(_) => self.errors.push(ParseError::MustBeSeparate(c)),
                None => self.errors.push(ParseError::UnknownShort(c)),
            }

            if self.errors.len() > errors_before || !combined || cursor.is_end() {
                break;
            }
        }

        consumed_next
    }

    fn invoke(&mut self, target: &mut T, opt: &OptionSpec<T>, cursor: &mut Cursor<'_>, long: bool) {
        let mut inv = Invocation::new(cursor, opt.short(), opt.long(), long, &mut self.errors);
        opt.handler().call(opt.mode(), target, &mut inv);
    }

    /// Passes errors recorded since the last flush on to the log and sink.
    fn flush(&mut self) {
        for error in &self.errors[self.emitted..] {
            log::debug!("{}", error);
            if self.print_errors {
                self.sink.emit(error);
            }
        }
        self.emitted = self.errors.len();
    }

    /// The positional arguments of the last parse in command line order.
    pub fn files(&self) -> &[String] {
        &self.files
    }

    /// All errors of the last parse in the order they were found.
    pub fn errors(&self) -> &[ParseError] {
        &self.errors
    }

    /// Returns `true` if the last parse found any error.
    #[inline]
    pub fn had_error(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Renders the collected file names for debugging.
    pub fn status(&self) -> String {
        let mut rv = String::from("file names:\n");
        for file in &self.files {
            rv.push_str("  ");
            rv.push_str(file);
            rv.push('\n');
        }
        rv.push('\n');
        rv
    }
}
