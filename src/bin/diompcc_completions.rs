use std::{io, path::PathBuf};

use clap::{Command, Parser, ValueEnum, ValueHint};
use clap_complete::{Shell, generate};
use diompcc::KNOWN_CONDUITS;

/// Which binary to generate completions for
#[derive(Clone, Debug, ValueEnum)]
enum BinName {
    Diompcc,
    Init,
}

/// Generate shell completions for diompcc tools
#[derive(Parser, Debug)]
#[command(
    name = "diompcc-completions",
    about = "Generate shell completions for diompcc tools",
    version
)]
struct CompletionArgs {
    /// Shell to generate completions for
    #[arg(long, value_enum)]
    shell: Shell,

    /// Binary to generate completions for
    #[arg(long, value_enum, default_value = "diompcc")]
    bin: BinName,
}

/// Build the clap Command for diompcc
///
/// diompcc has no long options of its own: `-conduit=NAME` is a single
/// token that shells cannot complete as a flag, so it is described in the
/// help text and every positional completes as a file path.
fn build_diompcc_cmd() -> Command {
    Command::new("diompcc")
        .about("Compile and link a diomp program with clang++")
        .arg(
            clap::Arg::new("source_file")
                .help("Primary source file")
                .required(true)
                .value_hint(ValueHint::FilePath)
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            clap::Arg::new("compiler_args")
                .help(format!(
                    "Arguments forwarded to the compiler; -conduit=NAME selects the GASNet conduit ({})",
                    KNOWN_CONDUITS.join(", ")
                ))
                .num_args(..)
                .trailing_var_arg(true)
                .allow_hyphen_values(true)
                .value_hint(ValueHint::FilePath),
        )
}

/// Build the clap Command for diompcc-init
fn build_diompcc_init_cmd() -> Command {
    Command::new("diompcc-init")
        .about("Detect the C++ compiler and generate a diompcc configuration")
        .arg(
            clap::Arg::new("output")
                .short('o')
                .long("output")
                .help("Output path for the generated config file")
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            clap::Arg::new("dry-run")
                .long("dry-run")
                .help("Print detected configuration without writing to disk")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("compiler")
                .long("compiler")
                .help("Compiler to record instead of the detected clang++")
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            clap::Arg::new("conduit")
                .long("conduit")
                .help("Conduit used when -conduit= is not given"),
        )
        .arg(
            clap::Arg::new("link-flag")
                .short('L')
                .long("link-flag")
                .help("Extra flag appended after the fixed link line")
                .action(clap::ArgAction::Append)
                .allow_hyphen_values(true),
        )
        .arg(
            clap::Arg::new("log-level")
                .long("log-level")
                .help("Log level recorded in the config"),
        )
}

fn main() {
    let args = CompletionArgs::parse();

    let mut cmd = match args.bin {
        BinName::Diompcc => build_diompcc_cmd(),
        BinName::Init => build_diompcc_init_cmd(),
    };

    let bin_name = cmd.get_name().to_string();
    generate(args.shell, &mut cmd, &bin_name, &mut io::stdout());
}
