use std::cell::RefCell;
use std::ffi::OsString;

use argument_table::{
    ArgError, ArgMode, ErrorKind, Handler, Invocation, OptionName, OptionSpec, ParseError, Parser,
};

#[derive(Default)]
struct Settings {
    count: Option<i64>,
    name: Option<String>,
    quiet: bool,
    zoom: Option<f64>,
}

fn zoom(s: &mut Settings, inv: &mut Invocation<'_, '_>) {
    if let Some(value) = inv.float_arg() {
        if value > 0.0 {
            s.zoom = Some(value);
        } else {
            inv.error("zoom factor must be positive");
        }
    }
}

const OPTIONS: &[OptionSpec<Settings>] = &[
    OptionSpec::new(Some('n'), "count", ArgMode::Required, Handler::Int(|s, v| s.count = Some(v))),
    OptionSpec::new(Some('s'), "name", ArgMode::Required, Handler::String(|s, v| s.name = Some(v))),
    OptionSpec::new(Some('q'), "quiet", ArgMode::None, Handler::Flag(|s| s.quiet = true)),
    OptionSpec::new(Some('z'), "zoom", ArgMode::Required, Handler::Raw(zoom)),
];

#[test]
fn test_trailing_garbage_is_rejected() {
    let mut settings = Settings::default();
    let mut parser = Parser::new(OPTIONS);
    parser.parse(&mut settings, ["--count=5x"], false);
    assert!(parser.had_error());
    assert_eq!(settings.count, None);
    assert_eq!(
        parser.errors(),
        [ParseError::Argument {
            option: OptionName::Long("count".into()),
            error: ArgError::Integer,
        }]
    );
    assert_eq!(parser.errors()[0].kind(), ErrorKind::TypeMismatch);
    assert_eq!(
        parser.errors()[0].to_string(),
        "option --count: integer value expected"
    );
}

#[test]
fn test_missing_separator() {
    let mut settings = Settings::default();
    let mut parser = Parser::new(OPTIONS);
    parser.parse(&mut settings, ["--count+5", "--count"], false);
    assert_eq!(settings.count, None);
    assert!(parser.files().is_empty());
    assert_eq!(parser.errors().len(), 2);
    assert_eq!(parser.errors()[0].kind(), ErrorKind::MissingSeparator);
    assert_eq!(parser.errors()[0].to_string(), "option --count: '=' expected");
    assert_eq!(parser.errors()[1].to_string(), "option --count: '=' expected");

    // digits belong to the option name
    parser.parse(&mut settings, ["--count5"], false);
    assert_eq!(settings.count, None);
    assert!(parser.files().is_empty());
    assert_eq!(parser.errors(), [ParseError::UnknownLong("count5".into())]);
}

#[test]
fn test_unexpected_argument_for_long_flag() {
    let mut settings = Settings::default();
    let mut parser = Parser::new(OPTIONS);
    parser.parse(&mut settings, ["--quiet=yes"], false);
    assert!(!settings.quiet);
    assert_eq!(parser.errors()[0].kind(), ErrorKind::UnexpectedArgument);
    assert_eq!(
        parser.errors()[0].to_string(),
        "option --quiet: no argument expected"
    );
}

#[test]
fn test_unexpected_argument_for_short_flag_with_argument_mode() {
    const VERBOSE: &[OptionSpec<u32>] = &[
        OptionSpec::new(Some('v'), "verbose", ArgMode::Optional, Handler::Flag(|n| *n += 1)),
        OptionSpec::new(Some('q'), "quiet", ArgMode::None, Handler::Flag(|n| *n += 10)),
    ];

    let mut level = 0;
    let mut parser = Parser::new(VERBOSE);
    parser.parse(&mut level, ["-vXYZ"], false);
    assert_eq!(level, 0);
    assert_eq!(
        parser.errors(),
        [ParseError::Argument {
            option: OptionName::Short('v'),
            error: ArgError::UnexpectedArgument,
        }]
    );
    assert_eq!(parser.errors()[0].to_string(), "option -v: no argument expected");

    parser.parse(&mut level, ["-v", "-q"], false);
    assert!(!parser.had_error());
    assert_eq!(level, 11);

    // plain flags still combine
    parser.parse(&mut level, ["-qq"], false);
    assert!(!parser.had_error());
    assert_eq!(level, 31);
}

#[test]
fn test_empty_string_argument() {
    let mut settings = Settings::default();
    let mut parser = Parser::new(OPTIONS);
    parser.parse(&mut settings, ["--name=", "-s"], false);
    assert_eq!(settings.name, None);
    let rendered: Vec<_> = parser.errors().iter().map(|e| e.to_string()).collect();
    assert_eq!(
        rendered,
        vec![
            "option --name: string argument expected",
            "option -s: string argument expected",
        ]
    );
    assert!(parser
        .errors()
        .iter()
        .all(|e| e.kind() == ErrorKind::EmptyStringArgument));
}

#[test]
fn test_unknown_options() {
    let mut settings = Settings::default();
    let mut parser = Parser::new(OPTIONS);
    parser.parse(&mut settings, ["--colour", "-x", "-qy"], false);
    assert!(settings.quiet);
    assert_eq!(
        parser.errors(),
        [
            ParseError::UnknownLong("colour".into()),
            ParseError::UnknownShort('x'),
            ParseError::UnknownShort('y'),
        ]
    );
    assert_eq!(parser.errors()[0].to_string(), "unknown option --colour");
    assert_eq!(parser.errors()[1].to_string(), "unknown option -x");
    assert!(parser
        .errors()
        .iter()
        .all(|e| e.kind() == ErrorKind::UnknownOption));
}

#[test]
fn test_errors_accumulate() {
    let mut settings = Settings::default();
    let mut parser = Parser::new(OPTIONS);
    parser.parse(
        &mut settings,
        ["--count=x", "a.dvi", "--bogus", "-qn", "-n7", "b.dvi"],
        false,
    );
    assert!(parser.had_error());
    assert_eq!(parser.errors().len(), 3);
    assert_eq!(parser.errors()[2], ParseError::MustBeSeparate('n'));
    // later valid options and files are still processed
    assert!(settings.quiet);
    assert_eq!(settings.count, Some(7));
    assert_eq!(parser.files(), ["a.dvi", "b.dvi"]);
}

#[test]
fn test_custom_handler_error() {
    let mut settings = Settings::default();
    let mut parser = Parser::new(OPTIONS);
    parser.parse(&mut settings, ["-z-1", "--zoom=2.5"], false);
    assert_eq!(settings.zoom, Some(2.5));
    assert_eq!(parser.errors().len(), 1);
    assert_eq!(parser.errors()[0].kind(), ErrorKind::Custom);
    assert_eq!(parser.errors()[0].option(), Some(&OptionName::Short('z')));
    assert_eq!(
        parser.errors()[0].to_string(),
        "option -z: zoom factor must be positive"
    );
}

#[test]
fn test_sink_receives_diagnostics_in_order() {
    let lines = RefCell::new(Vec::new());
    let mut settings = Settings::default();
    let mut parser = Parser::new(OPTIONS)
        .with_sink(|error: &ParseError| lines.borrow_mut().push(error.to_string()));
    parser.parse(&mut settings, ["--nam", "-w", "--count=1.5"], true);
    drop(parser);
    assert_eq!(
        lines.into_inner(),
        vec![
            "option --name: '=' expected",
            "unknown option -w",
            "option --count: integer value expected",
        ]
    );
}

#[test]
fn test_sink_silent_without_print_errors() {
    let lines = RefCell::new(Vec::new());
    let mut settings = Settings::default();
    let mut parser = Parser::new(OPTIONS)
        .with_sink(|error: &ParseError| lines.borrow_mut().push(error.to_string()));
    parser.parse(&mut settings, ["--bogus"], false);
    assert!(parser.had_error());
    drop(parser);
    assert!(lines.into_inner().is_empty());
}

#[cfg(unix)]
#[test]
fn test_invalid_unicode_argument() {
    use std::os::unix::ffi::OsStringExt;

    let invalid = OsString::from_vec(vec![0xff, 0xff]);
    let mut settings = Settings::default();
    let mut parser = Parser::new(OPTIONS);
    parser.parse(
        &mut settings,
        [OsString::from("-n"), invalid.clone(), OsString::from("x")],
        false,
    );
    assert_eq!(
        parser.errors(),
        [
            ParseError::Argument {
                option: OptionName::Short('n'),
                error: ArgError::Integer,
            },
            ParseError::InvalidUnicode(invalid),
        ]
    );
    assert_eq!(parser.errors()[1].kind(), ErrorKind::InvalidUnicode);
    assert_eq!(parser.files(), ["x"]);
}
