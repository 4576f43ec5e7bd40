use std::{env, ffi::OsString, process};

use diompcc::{
    config::DiompConfig,
    diagnostics::{print_warning, report_error},
    error::Error,
    utils::{init_tracing, verbosity_from_env},
};

fn diompcc_main() -> Result<i32, Error> {
    // Skip the first argument; arguments need not be valid UTF-8
    let args: Vec<OsString> = env::args_os().skip(1).collect();
    if args.is_empty() {
        return Err(Error::Usage);
    }

    let config = DiompConfig::load()?;

    // Set log level
    if let Err(err) = init_tracing(verbosity_from_env(config.log_level())) {
        print_warning(&err.to_string());
    }

    diompcc::run(&args, &config)
}

fn main() {
    match diompcc_main() {
        Ok(code) => process::exit(code),
        Err(Error::Usage) => {
            println!("{}", Error::Usage);
            process::exit(Error::Usage.exit_code());
        }
        Err(err) => {
            report_error(&err);
            process::exit(err.exit_code());
        }
    }
}
