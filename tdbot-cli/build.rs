use clap::{Arg, ArgAction, Command, ValueHint};
use clap_complete::{generate_to, shells::*};
use std::env;
use std::io::Error;

// Mirror of the views from src/views.rs
// We need to duplicate this here since build scripts can't access src/ modules
const AVAILABLE_VIEWS: &[&str] = &["entities", "ast", "json"];
const OFFSET_UNITS: &[&str] = &["utf16", "chars", "bytes"];

fn main() -> Result<(), Error> {
    let outdir = match env::var_os("OUT_DIR") {
        None => return Ok(()),
        Some(outdir) => outdir,
    };

    let input = || {
        Arg::new("input")
            .help("Input file path, or - for stdin")
            .required(true)
            .index(1)
            .value_hint(ValueHint::FilePath)
    };

    let mut cmd = Command::new("tdmd")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Preview how tdbot turns Markdown into TDLib formatted text")
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .long("config")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .arg(
            Arg::new("offset-unit")
                .long("offset-unit")
                .value_parser(clap::builder::PossibleValuesParser::new(OFFSET_UNITS))
                .global(true),
        )
        .arg(
            Arg::new("debug")
                .long("debug")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(
            Command::new("convert")
                .arg(input())
                .arg(Arg::new("message").long("message").action(ArgAction::SetTrue))
                .arg(
                    Arg::new("enable-link-preview")
                        .long("enable-link-preview")
                        .action(ArgAction::SetTrue),
                )
                .arg(Arg::new("pretty").long("pretty").action(ArgAction::SetTrue))
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .value_hint(ValueHint::FilePath),
                ),
        )
        .subcommand(
            Command::new("inspect").arg(input()).arg(
                Arg::new("view")
                    .value_parser(clap::builder::PossibleValuesParser::new(AVAILABLE_VIEWS))
                    .index(2)
                    .value_hint(ValueHint::Other),
            ),
        );

    // Generate completions for bash
    generate_to(Bash, &mut cmd, "tdmd", &outdir)?;

    // Generate completions for zsh
    generate_to(Zsh, &mut cmd, "tdmd", &outdir)?;

    // Generate completions for fish
    generate_to(Fish, &mut cmd, "tdmd", &outdir)?;

    println!("cargo:warning=Shell completions generated in {outdir:?}");

    Ok(())
}
