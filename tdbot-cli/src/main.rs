// Command-line interface for tdbot's Markdown conversion
//
// The bot converts every outgoing Markdown message into a TDLib formattedText before sending it.
// This binary runs that same conversion offline so a message can be checked before the bot sends it.
//
// Usage:
//  tdmd <input> [--message] [--pretty] [-o <file>]          - Convert to TDLib JSON (default)
//  tdmd convert <input> [--message] [--pretty] [-o <file>]  - Same as above (explicit)
//  tdmd inspect <input> [<view>]                            - Show the tree or the entity table
//
// <input> is a path, or "-" for stdin.
//
// Global options:
//  --config <path>        Layer a tdbot.toml over the defaults (./tdbot.toml is picked up if present)
//  --offset-unit <unit>   utf16 (default), chars or bytes
//  --debug                Debug logging on stderr

use clap::{Arg, ArgAction, Command, ValueHint};
use std::fs;
use std::io::{self, Read};
use tdbot_cli::{logging, views};
use tdbot_config::{Loader, TdbotConfig};
use tdbot_markdown::tdlib::InputMessageText;
use tdbot_markdown::{FormattedText, ParserOptions, RichTextConverter};
use tracing::{debug, info};

const SUBCOMMANDS: &[&str] = &["convert", "inspect", "help"];
const OFFSET_UNITS: &[&str] = &["utf16", "chars", "bytes"];

fn build_cli() -> Command {
    Command::new("tdmd")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Preview how tdbot turns Markdown into TDLib formatted text")
        .long_about(
            "tdmd runs tdbot's Markdown conversion outside the bot.\n\n\
            Commands:\n  \
            - convert: Print the TDLib JSON the bot would send\n  \
            - inspect: Show the parsed tree or a table of entities\n\n\
            Examples:\n  \
            tdmd message.md                       # formattedText JSON on stdout\n  \
            tdmd message.md --message --pretty    # inputMessageText, indented\n  \
            echo '**hi**' | tdmd inspect -        # entity table for stdin\n  \
            tdmd inspect message.md ast           # parsed Markdown tree",
        )
        .arg_required_else_help(true)
        .subcommand_required(false)
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to a tdbot.toml configuration file")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .arg(
            Arg::new("offset-unit")
                .long("offset-unit")
                .value_name("UNIT")
                .help("Unit entity offsets are counted in")
                .value_parser(clap::builder::PossibleValuesParser::new(OFFSET_UNITS))
                .global(true),
        )
        .arg(
            Arg::new("debug")
                .long("debug")
                .help("Enable debug logging")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(
            Command::new("convert")
                .about("Convert Markdown to TDLib JSON (default command)")
                .arg(
                    Arg::new("input")
                        .help("Input file path, or - for stdin")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("message")
                        .long("message")
                        .help("Wrap the result in inputMessageText")
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("enable-link-preview")
                        .long("enable-link-preview")
                        .help("With --message, leave link previews enabled")
                        .requires("message")
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("pretty")
                        .long("pretty")
                        .help("Indent the JSON output")
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .help("Output file path (defaults to stdout)")
                        .value_hint(ValueHint::FilePath),
                ),
        )
        .subcommand(
            Command::new("inspect")
                .about("Inspect the conversion of a Markdown file")
                .arg(
                    Arg::new("input")
                        .help("Input file path, or - for stdin")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("view")
                        .help("What to show. Defaults to 'entities'")
                        .required(false)
                        .value_parser(clap::builder::PossibleValuesParser::new(
                            views::AVAILABLE_VIEWS,
                        ))
                        .index(2)
                        .value_hint(ValueHint::Other),
                ),
        )
}

/// When the first argument looks like an input rather than a subcommand, insert `convert`.
fn with_default_subcommand(args: &[String]) -> Option<Vec<String>> {
    let first = args.get(1)?;
    if (first.starts_with('-') && first != "-") || SUBCOMMANDS.contains(&first.as_str()) {
        return None;
    }
    let mut new_args = vec![args[0].clone(), "convert".to_string()];
    new_args.extend_from_slice(&args[1..]);
    Some(new_args)
}

fn main() {
    let args: Vec<String> = std::env::args().collect();

    let cli = build_cli();
    let matches = match cli.clone().try_get_matches_from(&args) {
        Ok(m) => m,
        Err(e) => match with_default_subcommand(&args) {
            Some(new_args) => match cli.try_get_matches_from(&new_args) {
                Ok(m) => m,
                Err(e2) => e2.exit(),
            },
            None => e.exit(),
        },
    };

    let config = load_cli_config(
        matches.get_one::<String>("config").map(|s| s.as_str()),
        matches.get_one::<String>("offset-unit").map(|s| s.as_str()),
    );
    logging::init(config.log.level, matches.get_flag("debug"));
    debug!(?config, "configuration loaded");

    match matches.subcommand() {
        Some(("convert", sub_matches)) => {
            let input = sub_matches
                .get_one::<String>("input")
                .expect("input is required");
            let output = sub_matches.get_one::<String>("output").map(|s| s.as_str());
            let options = ConvertFlags {
                message: sub_matches.get_flag("message"),
                link_preview: sub_matches.get_flag("enable-link-preview"),
                pretty: sub_matches.get_flag("pretty"),
            };
            handle_convert_command(input, output, options, &config);
        }
        Some(("inspect", sub_matches)) => {
            let input = sub_matches
                .get_one::<String>("input")
                .expect("input is required");
            let view = sub_matches
                .get_one::<String>("view")
                .map(|s| s.as_str())
                .unwrap_or(views::DEFAULT_VIEW);
            handle_inspect_command(input, view, &config);
        }
        _ => {
            eprintln!("Unknown subcommand. Use --help for usage information.");
            std::process::exit(1);
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct ConvertFlags {
    message: bool,
    link_preview: bool,
    pretty: bool,
}

/// Handle the convert command
fn handle_convert_command(
    input: &str,
    output: Option<&str>,
    flags: ConvertFlags,
    config: &TdbotConfig,
) {
    let source = read_source(input);
    let converter = RichTextConverter::with_options(ParserOptions::from(&config.markdown))
        .offset_unit(config.markdown.offset_unit);
    let formatted: FormattedText = converter.convert(&source).into();

    let json = if flags.message {
        let message = InputMessageText::new(formatted).with_link_preview(flags.link_preview);
        to_json(&message, flags.pretty)
    } else {
        to_json(&formatted, flags.pretty)
    };

    match output {
        Some(path) => {
            fs::write(path, json + "\n").unwrap_or_else(|e| {
                eprintln!("Error writing file '{path}': {e}");
                std::process::exit(1);
            });
            info!(path, "wrote converted message");
        }
        None => println!("{json}"),
    }
}

/// Handle the inspect command
fn handle_inspect_command(input: &str, view: &str, config: &TdbotConfig) {
    let source = read_source(input);
    let options = ParserOptions::from(&config.markdown);

    let output = views::execute_view(&source, view, &options, config.markdown.offset_unit)
        .unwrap_or_else(|e| {
            eprintln!("Inspect error: {e}");
            std::process::exit(1);
        });

    print!("{output}");
}

fn to_json<T: serde::Serialize>(value: &T, pretty: bool) -> String {
    let result = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };
    result.unwrap_or_else(|e| {
        eprintln!("Serialization error: {e}");
        std::process::exit(1);
    })
}

fn read_source(input: &str) -> String {
    if input == "-" {
        let mut source = String::new();
        io::stdin().read_to_string(&mut source).unwrap_or_else(|e| {
            eprintln!("Error reading stdin: {e}");
            std::process::exit(1);
        });
        return source;
    }
    fs::read_to_string(input).unwrap_or_else(|e| {
        eprintln!("Error reading file '{input}': {e}");
        std::process::exit(1);
    })
}

fn load_cli_config(explicit_path: Option<&str>, offset_unit: Option<&str>) -> TdbotConfig {
    let loader = Loader::new().with_local_file();
    let loader = if let Some(path) = explicit_path {
        loader.with_file(path)
    } else {
        loader
    };
    let loader = match offset_unit {
        Some(unit) => loader.with_offset_unit(unit).unwrap_or_else(|err| {
            eprintln!("Invalid --offset-unit: {err}");
            std::process::exit(1);
        }),
        None => loader,
    };

    loader.build().unwrap_or_else(|err| {
        eprintln!("Failed to load configuration: {err}");
        std::process::exit(1);
    })
}
