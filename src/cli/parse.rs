use super::report_error;
use crate::output::write_json;
use ngx_conf_parser::{parse_file, ParseOptions, Status};
use std::path::PathBuf;

#[derive(clap::Args)]
pub struct Args {
    /// Path to the root configuration file
    #[arg(value_name = "PATH")]
    pub path: PathBuf,

    /// Emit comments as "#" directives in the tree
    #[arg(long = "include-comments")]
    pub include_comments: bool,

    /// Stop at the first error instead of recording it and continuing
    #[arg(long = "no-catch")]
    pub no_catch: bool,

    /// Directive names to drop from the output without validation
    #[arg(long, value_name = "DIR[,DIR...]", value_delimiter = ',')]
    pub ignore: Vec<String>,

    /// Do not expand include directives
    #[arg(long = "single-file")]
    pub single_file: bool,

    /// Attach STRING as a "callback" field on every recorded error
    #[arg(long = "tb-onerror", value_name = "STRING")]
    pub tb_onerror: Option<String>,

    /// Splice all files into one synthetic entry, eliding includes
    #[arg(long)]
    pub combine: bool,

    /// Treat unknown directives as errors
    #[arg(long)]
    pub strict: bool,

    /// Skip context legality checking
    #[arg(long = "no-check-ctx")]
    pub no_check_ctx: bool,

    /// Skip argument arity checking
    #[arg(long = "no-check-args")]
    pub no_check_args: bool,

    /// Write the payload to FILE instead of stdout
    #[arg(long, value_name = "FILE")]
    pub out: Option<PathBuf>,

    /// Pretty-print the JSON with N-space indentation
    #[arg(long, value_name = "N")]
    pub indent: Option<usize>,
}

impl Args {
    fn options(&self) -> ParseOptions {
        ParseOptions {
            catch_errors: !self.no_catch,
            ignore: self.ignore.clone(),
            single: self.single_file,
            strict: self.strict,
            combine: self.combine,
            check_ctx: !self.no_check_ctx,
            check_args: !self.no_check_args,
            comments: self.include_comments,
            ..ParseOptions::default()
        }
    }
}

pub fn run(args: &Args) -> u8 {
    let mut payload = match parse_file(&args.path, &args.options()) {
        Ok(payload) => payload,
        Err(e) => {
            report_error(&format!("{}: {}", args.path.display(), e));
            return 2;
        }
    };

    if let Some(callback) = &args.tb_onerror {
        for error in &mut payload.errors {
            error.callback = Some(callback.clone());
        }
        for config in &mut payload.config {
            for error in &mut config.errors {
                error.callback = Some(callback.clone());
            }
        }
    }

    if let Err(e) = write_json(&payload, args.indent, args.out.as_deref()) {
        report_error(&e.to_string());
        return 2;
    }

    if args.strict && payload.status == Status::Failed {
        1
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser as _;

    #[derive(clap::Parser)]
    struct TestCli {
        #[command(flatten)]
        args: Args,
    }

    #[test]
    fn test_defaults() {
        let cli = TestCli::try_parse_from(["parse", "nginx.conf"]).unwrap();
        let options = cli.args.options();
        assert!(options.catch_errors);
        assert!(!options.single);
        assert!(!options.comments);
        assert!(!options.strict);
        assert!(!options.combine);
        assert!(options.check_ctx);
        assert!(options.check_args);
        assert!(options.ignore.is_empty());
    }

    #[test]
    fn test_all_switches() {
        let cli = TestCli::try_parse_from([
            "parse",
            "nginx.conf",
            "--include-comments",
            "--no-catch",
            "--ignore=ssl_certificate,ssl_certificate_key",
            "--single-file",
            "--tb-onerror",
            "TRACE",
            "--combine",
            "--strict",
            "--no-check-ctx",
            "--no-check-args",
            "--indent",
            "2",
        ])
        .unwrap();
        let options = cli.args.options();
        assert!(!options.catch_errors);
        assert!(options.single);
        assert!(options.comments);
        assert!(options.strict);
        assert!(options.combine);
        assert!(!options.check_ctx);
        assert!(!options.check_args);
        assert_eq!(
            options.ignore,
            vec!["ssl_certificate", "ssl_certificate_key"]
        );
        assert_eq!(cli.args.tb_onerror.as_deref(), Some("TRACE"));
        assert_eq!(cli.args.indent, Some(2));
    }
}
