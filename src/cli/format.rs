use super::report_error;
use crate::output::write_output;
use ngx_conf_parser::{build, parse_file, BuildOptions, ParseOptions, Status};
use std::path::PathBuf;

#[derive(clap::Args)]
pub struct Args {
    /// Path to a configuration file
    #[arg(value_name = "PATH")]
    pub path: PathBuf,

    /// Spaces per nesting level
    #[arg(long, value_name = "N", default_value_t = 4)]
    pub indent: usize,

    /// Indent with tabs instead of spaces
    #[arg(long)]
    pub tabs: bool,

    /// Write the result to FILE instead of stdout
    #[arg(long, value_name = "FILE")]
    pub out: Option<PathBuf>,
}

pub fn run(args: &Args) -> u8 {
    let options = ParseOptions {
        single: true,
        comments: true,
        ..ParseOptions::default()
    };
    let payload = match parse_file(&args.path, &options) {
        Ok(payload) => payload,
        Err(e) => {
            report_error(&format!("{}: {}", args.path.display(), e));
            return 2;
        }
    };
    if payload.status == Status::Failed {
        for error in &payload.errors {
            report_error(&format!(
                "{}:{} {}",
                error.file.display(),
                error.line.map(|l| l.to_string()).unwrap_or_default(),
                error.error
            ));
        }
        return 1;
    }

    let build_options = BuildOptions {
        indent: args.indent,
        tabs: args.tabs,
        ..BuildOptions::default()
    };
    let text = build(&payload.config[0].parsed, &build_options);
    if let Err(e) = write_output(args.out.as_deref(), &text) {
        report_error(&e.to_string());
        return 2;
    }
    0
}
