//! A converter style command line with typed options and error printing.
//!
//! Try `cargo run --example convert -- --page=3 -z 1.5 --col=no input.dvi`
//! or `RUST_LOG=trace cargo run --example convert -- -vx --ver`.
use argument_table::{ArgMode, Handler, Invocation, OptionSpec, Parser};

const USAGE: &str = "convert [OPTIONS] file...";
const HELP: &str = "convert
A small example of argument-table

USAGE:
    !!USAGE!!

OPTIONS:
    -p, --page=<NUMBER>       first page to convert
    -o, --output=<PATTERN>    output file name pattern
    -z, --zoom=<FACTOR>       zoom factor
    -c, --color=<BOOL>        enable colors
    -P, --progress[=<DELAY>]  show progress
    -v, --verbose             more output
    -h, --help                prints the help\
";

#[derive(Debug)]
struct Config {
    page: u64,
    output: Option<String>,
    zoom: f64,
    color: bool,
    progress: Option<f64>,
    verbose: bool,
    help: bool,
}

impl Default for Config {
    fn default() -> Config {
        Config {
            page: 1,
            output: None,
            zoom: 1.0,
            color: true,
            progress: None,
            verbose: false,
            help: false,
        }
    }
}

fn progress(cfg: &mut Config, inv: &mut Invocation<'_, '_>) {
    if inv.is_empty() {
        cfg.progress = Some(0.5);
    } else if let Some(delay) = inv.float_arg() {
        cfg.progress = Some(delay);
    }
}

fn zoom(cfg: &mut Config, inv: &mut Invocation<'_, '_>) {
    if let Some(factor) = inv.float_arg() {
        if factor > 0.0 {
            cfg.zoom = factor;
        } else {
            inv.error("zoom factor must be positive");
        }
    }
}

const OPTIONS: &[OptionSpec<Config>] = &[
    OptionSpec::new(Some('p'), "page", ArgMode::Required, Handler::UInt(|c, v| c.page = v)),
    OptionSpec::new(
        Some('o'),
        "output",
        ArgMode::Required,
        Handler::String(|c, v| c.output = Some(v)),
    ),
    OptionSpec::new(Some('z'), "zoom", ArgMode::Required, Handler::Raw(zoom)),
    OptionSpec::new(Some('c'), "color", ArgMode::Required, Handler::Bool(|c, v| c.color = v)),
    OptionSpec::new(Some('P'), "progress", ArgMode::Optional, Handler::Raw(progress)),
    OptionSpec::new(Some('v'), "verbose", ArgMode::None, Handler::Flag(|c| c.verbose = true)),
    OptionSpec::new(None, "version", ArgMode::None, Handler::Flag(|_| println!("convert 0.0.1"))),
    OptionSpec::new(Some('h'), "help", ArgMode::None, Handler::Flag(|c| c.help = true)),
];

fn main() {
    env_logger::init();

    let mut config = Config::default();
    let mut parser = Parser::new(OPTIONS);
    parser.parse_env(&mut config, true);

    if parser.had_error() {
        eprintln!("usage: {}", USAGE);
        std::process::exit(1);
    }

    if config.help {
        println!("{}", HELP.replace("!!USAGE!!", USAGE));
        return;
    }

    if parser.files().is_empty() {
        println!("{}", USAGE);
        return;
    }

    if config.verbose {
        println!("{:#?}", config);
        print!("{}", parser.status());
    }
    for file in parser.files() {
        println!("Convert {} starting at page {}", file, config.page);
    }
}
