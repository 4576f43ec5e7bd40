use std::{path::PathBuf, process::Command};

use clap::Parser;
use diompcc::{
    arg_parser::Conduit,
    config::DiompConfig,
    diagnostics::{print_missing_tool_error, print_warning},
    error::Error,
    utils::{expand_tilde, find_compiler},
};

/// CLI arguments for diompcc-init
#[derive(Parser, Debug)]
#[command(
    name = "diompcc-init",
    about = "Detect the C++ compiler and generate a diompcc configuration",
    version
)]
struct InitArgs {
    /// Output path for the generated config file
    #[arg(short = 'o', long, default_value = "~/.diomp/config.toml")]
    output: String,

    /// Print detected configuration without writing to disk
    #[arg(long)]
    dry_run: bool,

    /// Compiler to record instead of the detected `clang++`
    #[arg(long)]
    compiler: Option<PathBuf>,

    /// Conduit used when `-conduit=` is not given
    #[arg(long, default_value = "ibv")]
    conduit: String,

    /// Extra flag appended after the fixed link line (repeatable)
    #[arg(short = 'L', long = "link-flag", allow_hyphen_values = true)]
    link_flags: Vec<String>,

    /// Log level recorded in the config (0 = error ... 4 = trace)
    #[arg(long, default_value_t = 0)]
    log_level: u8,
}

fn compiler_version(compiler: &PathBuf) -> Option<String> {
    let output = Command::new(compiler).arg("--version").output().ok()?;
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .next()
        .map(|line| line.trim().to_string())
}

fn main() -> Result<(), Error> {
    let args = InitArgs::parse();

    let requested = args.compiler.clone().unwrap_or_else(|| PathBuf::from("clang++"));
    eprintln!("Detecting C++ compiler ({})...", requested.display());
    let compiler = match find_compiler(&requested) {
        Ok(path) => path,
        Err(err) => {
            print_missing_tool_error(&requested.display().to_string());
            return Err(err);
        }
    };
    eprintln!("  Found: {}", compiler.display());
    match compiler_version(&compiler) {
        Some(version) => eprintln!("  Version: {}", version),
        None => print_warning("could not query the compiler version"),
    }

    let conduit = Conduit::new(args.conduit.as_str());
    if !conduit.is_known() {
        print_warning(&format!(
            "`{}` is not a stock GASNet conduit; make sure lib{}.a is on the link path",
            conduit,
            conduit.library_name()
        ));
    }

    let config = DiompConfig::default()
        .with_compiler_filepath(&compiler)
        .with_default_conduit(conduit.name())
        .with_extra_link_flags(args.link_flags.clone())
        .with_log_level(args.log_level);

    eprintln!();
    eprintln!("=== Configuration Summary ===");
    eprintln!("compiler        : {}", config.compiler_filepath().display());
    eprintln!("default conduit : {}", config.default_conduit());
    eprintln!("conduit library : {}", config.default_conduit().library_name());
    eprintln!("extra link flags: {}", config.extra_link_flags().join(" "));

    if args.dry_run {
        eprintln!();
        eprintln!("=== Generated config.toml (dry run) ===");
        print!("{}", config.to_toml_string()?);
        return Ok(());
    }

    let output_path = expand_tilde(&args.output);
    config.store_path(&output_path)?;

    eprintln!();
    eprintln!("Config written to: {}", output_path.display());
    eprintln!("To customize, edit: {}", output_path.display());

    Ok(())
}
