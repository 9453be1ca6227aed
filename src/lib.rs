pub mod cli;
pub mod output;

pub use ngx_conf_parser::{
    analyze, build, build_files, enter_block_ctx, lex_file, lex_string, parse_file, parse_string,
    BuildOptions, Catalog, Context, Directive, FileConfig, ParseOptions, Parser, Payload,
    PayloadError, Status,
};
