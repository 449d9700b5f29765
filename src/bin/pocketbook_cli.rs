use std::{env, path::PathBuf, process};

use pocketbook::cli::shell;

const USAGE: &str = "\
pocketbook_cli [OPTIONS]

Options:
  --data-dir <PATH>  Store profiles and settings under PATH instead of ~/.pocketbook
  --version          Print version information and exit
  --help             Print this help and exit";

fn main() {
    let mut data_dir: Option<PathBuf> = None;
    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--version" => {
                println!("pocketbook {}", env!("CARGO_PKG_VERSION"));
                return;
            }
            "--help" => {
                println!("{USAGE}");
                return;
            }
            "--data-dir" => match args.next() {
                Some(path) => data_dir = Some(PathBuf::from(path)),
                None => {
                    eprintln!("--data-dir requires a path");
                    process::exit(2);
                }
            },
            other => {
                eprintln!("unknown argument: {other}");
                eprintln!("{USAGE}");
                process::exit(2);
            }
        }
    }

    pocketbook::init();

    if let Err(err) = shell::run(data_dir) {
        eprintln!("pocketbook: {err}");
        process::exit(1);
    }
}
