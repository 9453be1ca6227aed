use clap::error::ErrorKind;
use clap::Parser;
use ngx_conf::cli::{Cli, Commands};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::SUCCESS,
                _ => ExitCode::from(3),
            };
        }
    };

    let code = match cli.command {
        Commands::Parse(args) => ngx_conf::cli::parse::run(&args),
        Commands::Build(args) => ngx_conf::cli::build::run(&args),
        Commands::Lex(args) => ngx_conf::cli::lex::run(&args),
        Commands::Format(args) => ngx_conf::cli::format::run(&args),
        Commands::Minify(args) => ngx_conf::cli::minify::run(&args),
    };
    ExitCode::from(code)
}
