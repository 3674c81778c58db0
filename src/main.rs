use std::{env, ffi::OsString, io, process};

use cttx::cli;

fn main() {
    env_logger::init();

    let args: Vec<OsString> = env::args_os().collect();

    let mut stdout = io::stdout().lock();
    if let Err(error) = cli::run(&args, &mut stdout) {
        eprintln!("{}", error);
        process::exit(error.exit_code());
    }
}
