use super::report_error;
use crate::output::write_json;
use ngx_conf_parser::lex_file;
use std::path::PathBuf;

#[derive(clap::Args)]
pub struct Args {
    /// Path to a configuration file
    #[arg(value_name = "PATH")]
    pub path: PathBuf,

    /// Emit [value, line] pairs instead of bare values
    #[arg(long = "line-numbers")]
    pub line_numbers: bool,

    /// Write the token stream to FILE instead of stdout
    #[arg(long, value_name = "FILE")]
    pub out: Option<PathBuf>,

    /// Pretty-print the JSON with N-space indentation
    #[arg(long, value_name = "N")]
    pub indent: Option<usize>,
}

pub fn run(args: &Args) -> u8 {
    let tokens = match lex_file(&args.path) {
        Ok(tokens) => tokens,
        Err(e) => {
            report_error(&format!("{}: {}", args.path.display(), e));
            return 2;
        }
    };

    let values: Vec<serde_json::Value> = tokens
        .iter()
        .map(|t| {
            if args.line_numbers {
                serde_json::json!([t.text, t.line])
            } else {
                serde_json::json!(t.text)
            }
        })
        .collect();

    if let Err(e) = write_json(&values, args.indent, args.out.as_deref()) {
        report_error(&e.to_string());
        return 2;
    }
    0
}
