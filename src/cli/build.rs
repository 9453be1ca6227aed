use super::report_error;
use ngx_conf_parser::{build, build_files, BuildOptions, Payload};
use std::io::Read;
use std::path::PathBuf;

/// Header prepended to every rebuilt file unless `--no-headers` is given.
const BUILD_HEADER: &str = "# This config was rebuilt from its JSON payload by ngx-conf.\n\n";

#[derive(clap::Args)]
pub struct Args {
    /// Directory to write one file per payload entry into
    #[arg(long, value_name = "D", default_value = ".")]
    pub dir: PathBuf,

    /// Spaces per nesting level
    #[arg(long, value_name = "N", default_value_t = 4)]
    pub indent: usize,

    /// Indent with tabs instead of spaces
    #[arg(long)]
    pub tabs: bool,

    /// Do not prepend the generated-by header
    #[arg(long = "no-headers")]
    pub no_headers: bool,

    /// Write the root file to stdout instead of the output directory
    #[arg(long)]
    pub stdout: bool,
}

impl Args {
    fn options(&self) -> BuildOptions {
        BuildOptions {
            indent: self.indent,
            tabs: self.tabs,
            header: if self.no_headers {
                String::new()
            } else {
                BUILD_HEADER.to_string()
            },
            minify: false,
        }
    }
}

pub fn run(args: &Args) -> u8 {
    let mut input = String::new();
    if let Err(e) = std::io::stdin().lock().read_to_string(&mut input) {
        report_error(&format!("reading stdin: {}", e));
        return 2;
    }
    let payload: Payload = match serde_json::from_str(&input) {
        Ok(payload) => payload,
        Err(e) => {
            report_error(&format!("invalid payload: {}", e));
            return 2;
        }
    };

    let options = args.options();
    if args.stdout {
        let Some(root) = payload.root() else {
            report_error("payload contains no files");
            return 2;
        };
        print!("{}", build(&root.parsed, &options));
        return 0;
    }

    match build_files(&payload, &args.dir, &options) {
        Ok(written) => {
            for path in written {
                eprintln!("wrote to {}", path.display());
            }
            0
        }
        Err(e) => {
            report_error(&e.to_string());
            2
        }
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
        let cli = TestCli::try_parse_from(["build"]).unwrap();
        assert_eq!(cli.args.dir, PathBuf::from("."));
        let options = cli.args.options();
        assert_eq!(options.indent, 4);
        assert!(!options.tabs);
        assert_eq!(options.header, BUILD_HEADER);
    }

    #[test]
    fn test_no_headers() {
        let cli = TestCli::try_parse_from(["build", "--no-headers", "--tabs", "--indent", "2"])
            .unwrap();
        let options = cli.args.options();
        assert!(options.header.is_empty());
        assert!(options.tabs);
        assert_eq!(options.indent, 2);
    }
}
