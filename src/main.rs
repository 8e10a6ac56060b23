use clap::Parser;

mod archiver;
mod cli;
mod error;
mod install;
mod list;
mod resolve;
mod restore;
mod utils;

fn main() {
    let cli = match cli::Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // clap renders help/version on stdout, bad options on stderr
            let code = if e.use_stderr() { 1 } else { 0 };
            let _ = e.print();
            std::process::exit(code);
        }
    };
    if let Err(e) = cli.run() {
        eprintln!("error: {e:#}");
        let code = e
            .downcast_ref::<error::Error>()
            .map(error::Error::exit_code)
            .unwrap_or(1);
        std::process::exit(code);
    }
}
