//! Directive legality analysis.
//!
//! Validates a single statement against the [`Catalog`] given the block
//! context it appears in. Contexts are a small enum rather than name stacks,
//! so the whole check is a bitwise AND against each catalog variant.
//!
//! Blocks whose contents are freeform key/value pairs (`map`, `geo`,
//! `types`, `charset_map`, `split_clients`, …) map to [`Context::Unknown`],
//! where every statement passes: their "directives" are arbitrary match keys
//! and MIME types, not catalog entries.

use crate::catalog::{
    Catalog, NGX_CONF_1MORE, NGX_CONF_2MORE, NGX_CONF_ANY, NGX_CONF_BLOCK, NGX_CONF_FLAG,
    NGX_CONF_NOARGS, NGX_EVENT_CONF, NGX_HTTP_LIF_CONF, NGX_HTTP_LMT_CONF, NGX_HTTP_LOC_CONF,
    NGX_HTTP_MAIN_CONF, NGX_HTTP_SIF_CONF, NGX_HTTP_SRV_CONF, NGX_HTTP_UPS_CONF,
    NGX_MAIL_MAIN_CONF, NGX_MAIL_SRV_CONF, NGX_MAIN_CONF, NGX_STREAM_MAIN_CONF,
    NGX_STREAM_SRV_CONF, NGX_STREAM_UPS_CONF,
};
use crate::error::DirectiveError;

/// A block context a directive can appear in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Context {
    Main,
    Events,
    Http,
    HttpServer,
    HttpLocation,
    HttpUpstream,
    HttpServerIf,
    HttpLocationIf,
    HttpLimitExcept,
    Mail,
    MailServer,
    Stream,
    StreamServer,
    StreamUpstream,
    /// Inside a block the analyzer has no rules for (freeform contents).
    Unknown,
}

impl Context {
    /// The context bit used to match catalog variants. `Unknown` has no bit.
    pub fn mask(self) -> u32 {
        match self {
            Context::Main => NGX_MAIN_CONF,
            Context::Events => NGX_EVENT_CONF,
            Context::Http => NGX_HTTP_MAIN_CONF,
            Context::HttpServer => NGX_HTTP_SRV_CONF,
            Context::HttpLocation => NGX_HTTP_LOC_CONF,
            Context::HttpUpstream => NGX_HTTP_UPS_CONF,
            Context::HttpServerIf => NGX_HTTP_SIF_CONF,
            Context::HttpLocationIf => NGX_HTTP_LIF_CONF,
            Context::HttpLimitExcept => NGX_HTTP_LMT_CONF,
            Context::Mail => NGX_MAIL_MAIN_CONF,
            Context::MailServer => NGX_MAIL_SRV_CONF,
            Context::Stream => NGX_STREAM_MAIN_CONF,
            Context::StreamServer => NGX_STREAM_SRV_CONF,
            Context::StreamUpstream => NGX_STREAM_UPS_CONF,
            Context::Unknown => 0,
        }
    }

    /// Human-readable context path, `>`-separated.
    pub fn label(self) -> &'static str {
        match self {
            Context::Main => "main",
            Context::Events => "events",
            Context::Http => "http",
            Context::HttpServer => "http>server",
            Context::HttpLocation => "http>location",
            Context::HttpUpstream => "http>upstream",
            Context::HttpServerIf => "http>server>if",
            Context::HttpLocationIf => "http>location>if",
            Context::HttpLimitExcept => "http>limit_except",
            Context::Mail => "mail",
            Context::MailServer => "mail>server",
            Context::Stream => "stream",
            Context::StreamServer => "stream>server",
            Context::StreamUpstream => "stream>upstream",
            Context::Unknown => "?",
        }
    }

    fn is_http(self) -> bool {
        matches!(
            self,
            Context::Http
                | Context::HttpServer
                | Context::HttpLocation
                | Context::HttpUpstream
                | Context::HttpServerIf
                | Context::HttpLocationIf
                | Context::HttpLimitExcept
        )
    }
}

/// The context a block-opening directive pushes for its children.
///
/// `location` does not nest: a location inside a location still yields the
/// `http>location` context, which is how nginx registers location-level
/// directives.
pub fn enter_block_ctx(ctx: Context, name: &str) -> Context {
    if ctx.is_http() && name == "location" {
        return Context::HttpLocation;
    }
    match (ctx, name) {
        (Context::Main, "events") => Context::Events,
        (Context::Main, "http") => Context::Http,
        (Context::Main, "mail") => Context::Mail,
        (Context::Main, "stream") => Context::Stream,
        (Context::Http, "server") => Context::HttpServer,
        (Context::Http, "upstream") => Context::HttpUpstream,
        (Context::HttpServer, "if") => Context::HttpServerIf,
        (Context::HttpLocation, "if") => Context::HttpLocationIf,
        (Context::HttpLocation, "limit_except") => Context::HttpLimitExcept,
        (Context::Mail, "server") => Context::MailServer,
        (Context::Stream, "server") => Context::StreamServer,
        (Context::Stream, "upstream") => Context::StreamUpstream,
        _ => Context::Unknown,
    }
}

/// Checks a single statement against the catalog.
///
/// `is_block` says whether the statement was terminated by `{` rather than
/// `;`. `check_ctx` and `check_args` independently disable the context and
/// arity halves of the check; `strict` turns unknown directive names into
/// errors.
#[allow(clippy::too_many_arguments)]
pub fn analyze(
    name: &str,
    args: &[String],
    is_block: bool,
    line: usize,
    ctx: Context,
    catalog: &Catalog,
    strict: bool,
    check_ctx: bool,
    check_args: bool,
) -> Result<(), DirectiveError> {
    let Some(variants) = catalog.lookup(name) else {
        if strict {
            return Err(DirectiveError::Unknown {
                name: name.to_string(),
                line,
            });
        }
        return Ok(());
    };

    // Freeform block contents are never validated.
    if ctx == Context::Unknown {
        return Ok(());
    }

    let ctx_mask = ctx.mask();
    let n = args.len();
    let mut ctx_matched = false;
    let mut reason: Option<DirectiveError> = None;

    for &mask in variants {
        if check_ctx && mask & ctx_mask == 0 {
            continue;
        }
        ctx_matched = true;

        if mask & NGX_CONF_BLOCK != 0 && !is_block {
            reason = Some(DirectiveError::MissingOpeningBrace {
                name: name.to_string(),
                line,
            });
            continue;
        }
        if mask & NGX_CONF_BLOCK == 0 && is_block {
            reason = Some(DirectiveError::NotTerminatedBySemicolon {
                name: name.to_string(),
                line,
            });
            continue;
        }

        if !check_args {
            return Ok(());
        }

        let arity_ok = (n <= 7 && mask & (NGX_CONF_NOARGS << n) != 0)
            || (mask & NGX_CONF_FLAG != 0 && n == 1 && is_flag_value(&args[0]))
            || (mask & NGX_CONF_ANY != 0)
            || (mask & NGX_CONF_1MORE != 0 && n >= 1)
            || (mask & NGX_CONF_2MORE != 0 && n >= 2);
        if arity_ok {
            return Ok(());
        }

        if mask & NGX_CONF_FLAG != 0 && n == 1 {
            reason = Some(DirectiveError::InvalidFlagValue {
                name: name.to_string(),
                value: args[0].clone(),
                line,
            });
        } else {
            reason = Some(DirectiveError::InvalidArguments {
                name: name.to_string(),
                line,
            });
        }
    }

    if !ctx_matched {
        return Err(DirectiveError::NotAllowedHere {
            name: name.to_string(),
            line,
        });
    }
    Err(reason.unwrap_or(DirectiveError::InvalidArguments {
        name: name.to_string(),
        line,
    }))
}

fn is_flag_value(value: &str) -> bool {
    value.eq_ignore_ascii_case("on") || value.eq_ignore_ascii_case("off")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(
        name: &str,
        args: &[&str],
        is_block: bool,
        ctx: Context,
        strict: bool,
    ) -> Result<(), DirectiveError> {
        let args: Vec<String> = args.iter().map(|s| s.to_string()).collect();
        analyze(
            name,
            &args,
            is_block,
            1,
            ctx,
            crate::catalog::Catalog::standard(),
            strict,
            true,
            true,
        )
    }

    #[test]
    fn test_listen_contexts() {
        assert!(check("listen", &["80"], false, Context::HttpServer, false).is_ok());
        let err = check("listen", &["80"], false, Context::Http, false).unwrap_err();
        assert!(matches!(err, DirectiveError::NotAllowedHere { .. }));
    }

    #[test]
    fn test_state_contexts() {
        // only upstream blocks (http and stream) admit `state`
        assert!(check("state", &["/f"], false, Context::HttpUpstream, false).is_ok());
        assert!(check("state", &["/f"], false, Context::StreamUpstream, false).is_ok());
        for ctx in [
            Context::Main,
            Context::Events,
            Context::Http,
            Context::HttpServer,
            Context::HttpLocation,
            Context::Mail,
            Context::Stream,
            Context::StreamServer,
        ] {
            let err = check("state", &["/f"], false, ctx, false).unwrap_err();
            assert!(
                matches!(err, DirectiveError::NotAllowedHere { .. }),
                "state allowed in {:?}",
                ctx
            );
        }
        // third-party contexts are not validated at all
        assert!(check("state", &["/f"], false, Context::Unknown, true).is_ok());
    }

    #[test]
    fn test_flag_values() {
        for good in ["on", "off", "On", "Off", "ON", "OFF"] {
            assert!(check("accept_mutex", &[good], false, Context::Events, false).is_ok());
        }
        for bad in ["1", "0", "true", "okay", ""] {
            let err = check("accept_mutex", &[bad], false, Context::Events, false).unwrap_err();
            assert!(
                err.to_string().ends_with("it must be \"on\" or \"off\""),
                "value {:?} produced {:?}",
                bad,
                err
            );
        }
    }

    #[test]
    fn test_noargs() {
        assert!(check("break", &[], false, Context::HttpServerIf, false).is_ok());
        let err = check("break", &["x"], false, Context::HttpServerIf, false).unwrap_err();
        assert!(matches!(err, DirectiveError::InvalidArguments { .. }));
    }

    #[test]
    fn test_take1() {
        assert!(check("server_name", &["example.com"], false, Context::HttpServer, false).is_ok());
        let err = check("server_name", &[], false, Context::HttpServer, false).unwrap_err();
        assert!(matches!(err, DirectiveError::InvalidArguments { .. }));
    }

    #[test]
    fn test_one_more() {
        assert!(check("index", &["index.html"], false, Context::Http, false).is_ok());
        assert!(check(
            "index",
            &["index.html", "index.htm", "default.html"],
            false,
            Context::Http,
            false
        )
        .is_ok());
        assert!(check("index", &[], false, Context::Http, false).is_err());
    }

    #[test]
    fn test_block_terminators() {
        let err = check("http", &[], false, Context::Main, false).unwrap_err();
        assert!(err.to_string().contains("has no opening \"{\""));
        assert!(check("http", &[], true, Context::Main, false).is_ok());

        let err = check("listen", &["80"], true, Context::HttpServer, false).unwrap_err();
        assert!(err.to_string().contains("is not terminated by \";\""));
    }

    #[test]
    fn test_unknown_strict() {
        let err = check("flibberty_widget", &["on"], false, Context::Http, true).unwrap_err();
        assert_eq!(err.to_string(), "unknown directive \"flibberty_widget\"");
        assert!(check("flibberty_widget", &["on"], false, Context::Http, false).is_ok());
    }

    #[test]
    fn test_check_switches_disabled() {
        let args = vec!["80".to_string()];
        let catalog = crate::catalog::Catalog::standard();
        // wrong context passes with check_ctx off
        assert!(analyze("listen", &args, false, 1, Context::Http, catalog, false, false, true).is_ok());
        // missing args pass with check_args off
        assert!(analyze("listen", &[], false, 1, Context::HttpServer, catalog, false, true, false).is_ok());
    }

    #[test]
    fn test_enter_block_ctx() {
        assert_eq!(enter_block_ctx(Context::Main, "http"), Context::Http);
        assert_eq!(enter_block_ctx(Context::Http, "server"), Context::HttpServer);
        assert_eq!(
            enter_block_ctx(Context::HttpServer, "location"),
            Context::HttpLocation
        );
        // locations do not nest
        assert_eq!(
            enter_block_ctx(Context::HttpLocation, "location"),
            Context::HttpLocation
        );
        assert_eq!(
            enter_block_ctx(Context::HttpServer, "if"),
            Context::HttpServerIf
        );
        assert_eq!(
            enter_block_ctx(Context::HttpLocation, "limit_except"),
            Context::HttpLimitExcept
        );
        // freeform blocks
        assert_eq!(enter_block_ctx(Context::Http, "map"), Context::Unknown);
        assert_eq!(enter_block_ctx(Context::Http, "types"), Context::Unknown);
    }

    #[test]
    fn test_map_contents_freeform() {
        let ctx = enter_block_ctx(Context::Http, "map");
        for (name, args) in [
            ("default", vec!["0"]),
            ("~^/news", vec!["1"]),
            ("*.example.com", vec!["backend1"]),
            ("hostnames", vec![]),
        ] {
            assert!(check(name, &args, false, ctx, true).is_ok());
        }
    }

    #[test]
    fn test_catalog_totality() {
        // every cataloged directive has at least one accepting triple and at
        // least one rejecting triple
        let catalog = crate::catalog::Catalog::standard();
        let all_ctx = [
            Context::Main,
            Context::Events,
            Context::Http,
            Context::HttpServer,
            Context::HttpLocation,
            Context::HttpUpstream,
            Context::HttpServerIf,
            Context::HttpLocationIf,
            Context::HttpLimitExcept,
            Context::Mail,
            Context::MailServer,
            Context::Stream,
            Context::StreamServer,
            Context::StreamUpstream,
        ];
        for name in catalog.names() {
            let mut accepted = false;
            let mut rejected = false;
            for ctx in all_ctx {
                for n in 0..=8usize {
                    let args: Vec<String> = (0..n).map(|_| "on".to_string()).collect();
                    for is_block in [false, true] {
                        let ok = analyze(
                            name, &args, is_block, 1, ctx, catalog, true, true, true,
                        )
                        .is_ok();
                        accepted |= ok;
                        rejected |= !ok;
                    }
                }
            }
            assert!(accepted, "{} accepts nothing", name);
            assert!(rejected, "{} rejects nothing", name);
        }
    }
}
