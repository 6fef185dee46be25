//! This crate implements a table driven parser for command lines following
//! getopt conventions with GNU style long options.
//!
//! Instead of pulling parameters one by one, you describe all options in a
//! table up front.  Every [`OptionSpec`] names an option, says how it takes
//! its argument ([`ArgMode`]) and carries a [`Handler`] that receives the
//! already validated value.  The [`Parser`] then walks the command line,
//! calls the handlers and collects everything else as file names.
//!
//! # Example
//!
//! ```
//! use argument_table::{ArgMode, Handler, OptionSpec, Parser};
//!
//! #[derive(Default)]
//! struct Config {
//!     verbose: bool,
//!     page: i64,
//!     output: Option<String>,
//! }
//!
//! const OPTIONS: &[OptionSpec<Config>] = &[
//!     OptionSpec::new(Some('v'), "verbose", ArgMode::None, Handler::Flag(|c| c.verbose = true)),
//!     OptionSpec::new(Some('p'), "page", ArgMode::Required, Handler::Int(|c, v| c.page = v)),
//!     OptionSpec::new(Some('o'), "output", ArgMode::Required, Handler::String(|c, v| c.output = Some(v))),
//! ];
//!
//! let mut config = Config::default();
//! let mut parser = Parser::new(OPTIONS);
//! parser.parse(&mut config, ["-v", "-p", "5", "--out=x.svg", "input.dvi"], true);
//!
//! assert!(!parser.had_error());
//! assert!(config.verbose);
//! assert_eq!(config.page, 5);
//! assert_eq!(config.output.as_deref(), Some("x.svg"));
//! assert_eq!(parser.files(), ["input.dvi"]);
//! ```
//!
//! # Behavior
//!
//! * Arguments not starting with `-` are file names.  After a bare `--` all
//!   arguments are file names, even if they start with `-`.  This can be
//!   disabled by un-setting [`Flag::HandleDoubleDash`].
//! * Long options are written `--name` or `--name=value`.  The name may be
//!   abbreviated as long as the abbreviation is unique (`--out` for
//!   `--output`).  An exact match always wins, so `--version` works even if
//!   `--versions` exists too.
//! * Short options take their argument attached (`-p5`).  If an option with
//!   [`ArgMode::Required`] stands alone and the next argument does not start
//!   with `-`, that argument is used instead (`-p 5`).  This can be disabled
//!   by un-setting [`Flag::SeparateArguments`].
//! * Short options without argument can be combined (`-abc`).  An option
//!   that takes an argument can only come first in such a cluster
//!   (`-pabc` passes `abc` to `-p`); later in the cluster it is an error.
//! * Values are validated strictly: `--page=5x` is an error, not `5`.
//!
//! # Error Handling
//!
//! The parser never stops at the first problem.  All errors are recorded
//! as [`ParseError`]s, optionally printed to a [`Sink`] as they are found,
//! and parsing continues with the next argument.  After parsing,
//! [`Parser::had_error`] tells if anything went wrong and
//! [`Parser::errors`] lists the individual problems.  The rendered errors
//! look like this:
//!
//! ```text
//! unknown option --colour
//! option --ver is ambiguous (verbose, version)
//! option -p must be given separately
//! option --page: integer value expected
//! ```
mod cursor;
mod error;
mod invocation;
mod option;
mod parser;

pub use self::cursor::Cursor;
pub use self::error::{ArgError, ErrorKind, OptionName, ParseError};
pub use self::invocation::Invocation;
pub use self::option::{ArgMode, Handler, OptionSpec, Registry, Resolution};
pub use self::parser::{Flag, Parser, Sink, Stderr};
