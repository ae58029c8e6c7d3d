use crate::CLAP_STYLING;
use clap::{arg, command};

pub(crate) fn command_argument_builder() -> clap::Command {
    clap::Command::new("netsketch")
        .version(env!("CARGO_PKG_VERSION"))
        .bin_name("netsketch")
        .styles(CLAP_STYLING)
        .arg(arg!(-q --"quiet" "Suppress banner and non-essential output").required(false))
        .arg(
            arg!(-v --"verbose" "Log every pipeline stage to stderr")
                .required(false)
                .global(true),
        )
        .subcommand_required(false)
        .subcommand(
            command!("parse")
                .about("Turn a plain-language topology description into diagram text")
                .arg(
                    arg!([PROMPT])
                        .required(false)
                        .help("The description to parse (read from stdin when omitted)"),
                )
                .arg(
                    arg!(-f --"format" <FORMAT>)
                        .required(false)
                        .help("Output format: mermaid, plantuml, json")
                        .value_parser(["mermaid", "plantuml", "json"])
                        .default_value("mermaid"),
                )
                .arg(
                    arg!(-t --"tables" <PATH>)
                        .required(false)
                        .help("Vocabulary/connector tables file (default: ~/.config/netsketch/tables.json if present)")
                        .value_parser(clap::value_parser!(std::path::PathBuf)),
                )
                .arg(
                    arg!(--"title" <TEXT>)
                        .required(false)
                        .help("Diagram title (plantuml only)"),
                )
                .arg(
                    arg!(--"with-note")
                        .required(false)
                        .help("Attach the prompt to the diagram as a note (plantuml only)")
                        .action(clap::ArgAction::SetTrue),
                ),
        )
        .subcommand(
            command!("build")
                .about("Build a diagram from explicit connections or a template")
                .arg(
                    arg!(-T --"template" <NAME>)
                        .required(false)
                        .help("Start from a named template (see `netsketch templates`)"),
                )
                .arg(
                    arg!(-c --"connection" <SPEC>)
                        .required(false)
                        .help("DEVICE,PROTOCOL,DIRECTION,DEVICE[,PORT]; DIRECTION is left-right, right-left or bidirectional")
                        .action(clap::ArgAction::Append),
                )
                .arg(
                    arg!(-f --"format" <FORMAT>)
                        .required(false)
                        .help("Output format: plantuml, mermaid, json")
                        .value_parser(["plantuml", "mermaid", "json"])
                        .default_value("plantuml"),
                )
                .arg(
                    arg!(--"title" <TEXT>)
                        .required(false)
                        .help("Diagram title (plantuml only)"),
                )
                .arg(
                    arg!(--"note" <TEXT>)
                        .required(false)
                        .help("Free-text note added to the diagram (plantuml only)"),
                ),
        )
        .subcommand(command!("templates").about("List the built-in topology templates"))
        .subcommand(
            command!("devices")
                .about("List the device catalog used by the builder")
                .arg(
                    arg!(-s --"search" <TEXT>)
                        .required(false)
                        .help("Only show devices whose name contains TEXT"),
                ),
        )
        .subcommand(
            command!("init")
                .about("Writes the default vocabulary and connector tables for editing")
                .arg(
                    arg!([PATH])
                        .required(false)
                        .help("Directory to store the tables file in")
                        .default_value("~/.config/netsketch/"),
                )
                .arg(
                    arg!(-f --"force")
                        .help("Overwrite an existing tables file without asking.")
                        .required(false),
                ),
        )
}
