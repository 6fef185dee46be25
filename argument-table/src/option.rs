use std::fmt;

use crate::invocation::Invocation;

/// How an option takes its argument.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ArgMode {
    /// The option never takes an argument (`-v`, `--verbose`).
    ///
    /// Only options of this mode can be combined into clusters (`-abc`).
    None,
    /// The argument may be attached (`-p5`, `--param=5`) but is never taken
    /// from the following token.
    Optional,
    /// The argument is attached (`-p5`, `--param=5`) or, for the short form
    /// only, given as the following token (`-p 5`).
    Required,
}

/// The function invoked for a recognized option.
///
/// Every variant except [`Handler::Raw`] extracts and validates an argument
/// of the given kind before the function is called.  If extraction fails the
/// error is recorded and the function is not called.
///
/// [`Handler::Raw`] hands the [`Invocation`] itself to the function which
/// can then pick an extractor on its own.  This is how truly optional
/// arguments are implemented:
///
/// ```
/// # use argument_table::Invocation;
/// # struct Config { progress: Option<f64> }
/// fn progress(cfg: &mut Config, inv: &mut Invocation<'_, '_>) {
///     if inv.is_empty() {
///         cfg.progress = Some(0.5);
///     } else if let Some(delay) = inv.float_arg() {
///         cfg.progress = Some(delay);
///     }
/// }
/// ```
pub enum Handler<T> {
    /// An option without argument.
    Flag(fn(&mut T)),
    Int(fn(&mut T, i64)),
    UInt(fn(&mut T, u64)),
    Float(fn(&mut T, f64)),
    Bool(fn(&mut T, bool)),
    Char(fn(&mut T, char)),
    String(fn(&mut T, String)),
    /// Full access to the argument cursor and error reporting.
    Raw(fn(&mut T, &mut Invocation<'_, '_>)),
}

impl<T> Handler<T> {
    /// Runs the handler for one resolved option.
    pub(crate) fn call(&self, mode: ArgMode, target: &mut T, inv: &mut Invocation<'_, '_>) {
        match *self {
            Handler::Flag(f) => {
                // short flags without argument share their token with the cluster
                if (mode == ArgMode::None && !inv.is_long()) || inv.no_arg() {
                    f(target);
                }
            }
            Handler::Int(f) => {
                if let Some(value) = inv.int_arg() {
                    f(target, value);
                }
            }
            Handler::UInt(f) => {
                if let Some(value) = inv.uint_arg() {
                    f(target, value);
                }
            }
            Handler::Float(f) => {
                if let Some(value) = inv.float_arg() {
                    f(target, value);
                }
            }
            Handler::Bool(f) => {
                if let Some(value) = inv.bool_arg() {
                    f(target, value);
                }
            }
            Handler::Char(f) => {
                if let Some(value) = inv.char_arg() {
                    f(target, value);
                }
            }
            Handler::String(f) => {
                if let Some(value) = inv.string_arg() {
                    f(target, value);
                }
            }
            Handler::Raw(f) => f(target, inv),
        }
    }

    fn kind(&self) -> &'static str {
        match self {
            Handler::Flag(_) => "flag",
            Handler::Int(_) => "int",
            Handler::UInt(_) => "uint",
            Handler::Float(_) => "float",
            Handler::Bool(_) => "bool",
            Handler::Char(_) => "char",
            Handler::String(_) => "string",
            Handler::Raw(_) => "raw",
        }
    }
}

impl<T> Clone for Handler<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Handler<T> {}

impl<T> fmt::Debug for Handler<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Handler::{}", self.kind())
    }
}

/// Describes a single option the parser recognizes.
///
/// Option tables are usually built as constants:
///
/// ```
/// use argument_table::{ArgMode, Handler, OptionSpec};
///
/// #[derive(Default)]
/// struct Config {
///     verbose: bool,
///     page: i64,
/// }
///
/// const OPTIONS: &[OptionSpec<Config>] = &[
///     OptionSpec::new(Some('v'), "verbose", ArgMode::None, Handler::Flag(|c| c.verbose = true)),
///     OptionSpec::new(Some('p'), "page", ArgMode::Required, Handler::Int(|c, v| c.page = v)),
/// ];
/// ```
pub struct OptionSpec<T> {
    short: Option<char>,
    long: &'static str,
    mode: ArgMode,
    handler: Handler<T>,
}

impl<T> OptionSpec<T> {
    /// Creates a new option descriptor.
    ///
    /// The long name must not be empty.  Options without short form pass
    /// `None` as short name.
    pub const fn new(
        short: Option<char>,
        long: &'static str,
        mode: ArgMode,
        handler: Handler<T>,
    ) -> OptionSpec<T> {
        OptionSpec {
            short,
            long,
            mode,
            handler,
        }
    }

    /// The single character name, if the option has one.
    pub fn short(&self) -> Option<char> {
        self.short
    }

    /// The long name without the leading dashes.
    pub fn long(&self) -> &'static str {
        self.long
    }

    pub fn mode(&self) -> ArgMode {
        self.mode
    }

    pub fn handler(&self) -> &Handler<T> {
        &self.handler
    }
}

impl<T> fmt::Debug for OptionSpec<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OptionSpec")
            .field("short", &self.short)
            .field("long", &self.long)
            .field("mode", &self.mode)
            .field("handler", &self.handler)
            .finish()
    }
}

/// The result of looking up a long option name.
pub enum Resolution<'r, T> {
    /// Exactly one option matched, or the name matched an option exactly.
    Found(&'r OptionSpec<T>),
    /// No option starts with the given name.
    NotFound,
    /// The abbreviation matched several options.  Holds all of their names
    /// in table order.
    Ambiguous(Vec<&'static str>),
}

impl<T> fmt::Debug for Resolution<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Resolution::Found(opt) => f.debug_tuple("Found").field(opt).finish(),
            Resolution::NotFound => f.write_str("NotFound"),
            Resolution::Ambiguous(names) => f.debug_tuple("Ambiguous").field(names).finish(),
        }
    }
}

impl<T> Clone for Resolution<'_, T> {
    fn clone(&self) -> Self {
        match self {
            Resolution::Found(opt) => Resolution::Found(*opt),
            Resolution::NotFound => Resolution::NotFound,
            Resolution::Ambiguous(names) => Resolution::Ambiguous(names.clone()),
        }
    }
}

/// A read-only table of options.
///
/// Lookups never modify the table.  The order of the table matters for
/// short options (first match wins) and for the order in which ambiguous
/// candidates are listed.
pub struct Registry<'r, T> {
    options: &'r [OptionSpec<T>],
}

impl<T> fmt::Debug for Registry<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.options.iter().map(|opt| opt.long)).finish()
    }
}

impl<T> Clone for Registry<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Registry<'_, T> {}

impl<'r, T> Registry<'r, T> {
    /// Wraps an option table.
    ///
    /// In debug builds this asserts that long names are non-empty and unique
    /// and that no short name is registered twice.
    pub fn new(options: &'r [OptionSpec<T>]) -> Registry<'r, T> {
        debug_assert!(
            options.iter().all(|opt| !opt.long.is_empty()),
            "long option names must not be empty"
        );
        debug_assert!(
            options.iter().enumerate().all(|(idx, opt)| {
                options[..idx].iter().all(|prev| {
                    prev.long != opt.long && (opt.short.is_none() || prev.short != opt.short)
                })
            }),
            "option names must be unique"
        );
        Registry { options }
    }

    /// Returns all options in table order.
    pub fn options(&self) -> &'r [OptionSpec<T>] {
        self.options
    }

    /// Finds the option with the given single character name.
    pub fn find_short(&self, c: char) -> Option<&'r OptionSpec<T>> {
        self.options.iter().find(|opt| opt.short == Some(c))
    }

    /// Resolves a possibly abbreviated long option name.
    ///
    /// An exact match always wins.  Otherwise the name must be a prefix of
    /// exactly one registered name.  Comparison is case-sensitive.
    pub fn resolve_long(&self, name: &str) -> Resolution<'r, T> {
        let mut matches = Vec::new();
        for opt in self.options {
            if opt.long == name {
                return Resolution::Found(opt);
            }
            if opt.long.starts_with(name) {
                matches.push(opt);
            }
        }
        match matches.len() {
            0 => Resolution::NotFound,
            1 => Resolution::Found(matches[0]),
            _ => Resolution::Ambiguous(matches.iter().map(|opt| opt.long).collect()),
        }
    }
}
