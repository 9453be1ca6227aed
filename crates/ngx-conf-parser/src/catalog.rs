//! Static catalog of nginx directives.
//!
//! Each directive maps to one or more variant masks. A mask is a single
//! `u32` combining argument-shape bits (low half) with context bits (high
//! half), mirroring the `NGX_CONF_*` / `NGX_*_CONF` macros in the nginx
//! sources so that legality checking is a bitwise AND.
//!
//! The catalog covers the standard distribution (core, events, http, mail,
//! stream) plus the registered OpenResty Lua extension. Third-party modules
//! can be added at runtime through [`Catalog::register`].

use std::collections::HashMap;
use std::sync::OnceLock;

// ---- argument-shape bits -------------------------------------------------

/// Directive takes no arguments.
pub const NGX_CONF_NOARGS: u32 = 0x0000_0001;
/// Directive takes exactly 1 argument.
pub const NGX_CONF_TAKE1: u32 = 0x0000_0002;
pub const NGX_CONF_TAKE2: u32 = 0x0000_0004;
pub const NGX_CONF_TAKE3: u32 = 0x0000_0008;
pub const NGX_CONF_TAKE4: u32 = 0x0000_0010;
pub const NGX_CONF_TAKE5: u32 = 0x0000_0020;
pub const NGX_CONF_TAKE6: u32 = 0x0000_0040;
pub const NGX_CONF_TAKE7: u32 = 0x0000_0080;
/// Directive opens a `{ ... }` block.
pub const NGX_CONF_BLOCK: u32 = 0x0000_0100;
/// Directive takes a single `on`/`off` argument (case-insensitive).
pub const NGX_CONF_FLAG: u32 = 0x0000_0200;
/// Any number of arguments is accepted.
pub const NGX_CONF_ANY: u32 = 0x0000_0400;
/// One or more arguments.
pub const NGX_CONF_1MORE: u32 = 0x0000_0800;
/// Two or more arguments.
pub const NGX_CONF_2MORE: u32 = 0x0000_1000;

pub const NGX_CONF_TAKE12: u32 = NGX_CONF_TAKE1 | NGX_CONF_TAKE2;
pub const NGX_CONF_TAKE13: u32 = NGX_CONF_TAKE1 | NGX_CONF_TAKE3;
pub const NGX_CONF_TAKE23: u32 = NGX_CONF_TAKE2 | NGX_CONF_TAKE3;
pub const NGX_CONF_TAKE34: u32 = NGX_CONF_TAKE3 | NGX_CONF_TAKE4;
pub const NGX_CONF_TAKE123: u32 = NGX_CONF_TAKE12 | NGX_CONF_TAKE3;
pub const NGX_CONF_TAKE1234: u32 = NGX_CONF_TAKE123 | NGX_CONF_TAKE4;

/// All argument-shape bits; used to split a mask into its halves.
pub const NGX_CONF_ARGS_MASK: u32 = 0x0000_1FFF;

// ---- context bits --------------------------------------------------------

pub const NGX_MAIN_CONF: u32 = 0x0001_0000;
pub const NGX_EVENT_CONF: u32 = 0x0002_0000;
pub const NGX_HTTP_MAIN_CONF: u32 = 0x0004_0000;
pub const NGX_HTTP_SRV_CONF: u32 = 0x0008_0000;
pub const NGX_HTTP_LOC_CONF: u32 = 0x0010_0000;
pub const NGX_HTTP_UPS_CONF: u32 = 0x0020_0000;
pub const NGX_HTTP_SIF_CONF: u32 = 0x0040_0000;
pub const NGX_HTTP_LIF_CONF: u32 = 0x0080_0000;
pub const NGX_HTTP_LMT_CONF: u32 = 0x0100_0000;
pub const NGX_MAIL_MAIN_CONF: u32 = 0x0200_0000;
pub const NGX_MAIL_SRV_CONF: u32 = 0x0400_0000;
pub const NGX_STREAM_MAIN_CONF: u32 = 0x0800_0000;
pub const NGX_STREAM_SRV_CONF: u32 = 0x1000_0000;
pub const NGX_STREAM_UPS_CONF: u32 = 0x2000_0000;

/// Legal in every context where a directive may appear.
pub const NGX_ANY_CONF: u32 = NGX_MAIN_CONF
    | NGX_EVENT_CONF
    | NGX_HTTP_MAIN_CONF
    | NGX_HTTP_SRV_CONF
    | NGX_HTTP_LOC_CONF
    | NGX_HTTP_UPS_CONF
    | NGX_HTTP_SIF_CONF
    | NGX_HTTP_LIF_CONF
    | NGX_HTTP_LMT_CONF
    | NGX_MAIL_MAIN_CONF
    | NGX_MAIL_SRV_CONF
    | NGX_STREAM_MAIN_CONF
    | NGX_STREAM_SRV_CONF
    | NGX_STREAM_UPS_CONF;

// Common context groupings, named after how nginx modules register.
const HTTP_MAIN_SRV_LOC: u32 = NGX_HTTP_MAIN_CONF | NGX_HTTP_SRV_CONF | NGX_HTTP_LOC_CONF;
const HTTP_MAIN_SRV_LOC_LIF: u32 = HTTP_MAIN_SRV_LOC | NGX_HTTP_LIF_CONF;
const HTTP_REWRITE: u32 =
    NGX_HTTP_SRV_CONF | NGX_HTTP_SIF_CONF | NGX_HTTP_LOC_CONF | NGX_HTTP_LIF_CONF;
const MAIL_MAIN_SRV: u32 = NGX_MAIL_MAIN_CONF | NGX_MAIL_SRV_CONF;
const STREAM_MAIN_SRV: u32 = NGX_STREAM_MAIN_CONF | NGX_STREAM_SRV_CONF;
const SSL_HTTP_MAIL_STREAM: u32 =
    NGX_HTTP_MAIN_CONF | NGX_HTTP_SRV_CONF | MAIL_MAIN_SRV | STREAM_MAIN_SRV;

/// Directives of the standard nginx distribution.
static BUILTIN: &[(&str, &[u32])] = &[
    ("absolute_redirect", &[HTTP_MAIN_SRV_LOC | NGX_CONF_FLAG]),
    ("accept_mutex", &[NGX_EVENT_CONF | NGX_CONF_FLAG]),
    ("accept_mutex_delay", &[NGX_EVENT_CONF | NGX_CONF_TAKE1]),
    (
        "access_log",
        &[
            HTTP_MAIN_SRV_LOC_LIF | NGX_HTTP_LMT_CONF | NGX_CONF_1MORE,
            STREAM_MAIN_SRV | NGX_CONF_1MORE,
        ],
    ),
    ("add_after_body", &[HTTP_MAIN_SRV_LOC | NGX_CONF_TAKE1]),
    ("add_before_body", &[HTTP_MAIN_SRV_LOC | NGX_CONF_TAKE1]),
    ("add_header", &[HTTP_MAIN_SRV_LOC_LIF | NGX_CONF_TAKE23]),
    ("add_trailer", &[HTTP_MAIN_SRV_LOC_LIF | NGX_CONF_TAKE23]),
    ("addition_types", &[HTTP_MAIN_SRV_LOC | NGX_CONF_1MORE]),
    ("aio", &[HTTP_MAIN_SRV_LOC | NGX_CONF_TAKE1]),
    ("aio_write", &[HTTP_MAIN_SRV_LOC | NGX_CONF_FLAG]),
    ("alias", &[NGX_HTTP_LOC_CONF | NGX_CONF_TAKE1]),
    (
        "allow",
        &[
            HTTP_MAIN_SRV_LOC | NGX_HTTP_LMT_CONF | NGX_CONF_TAKE1,
            STREAM_MAIN_SRV | NGX_CONF_TAKE1,
        ],
    ),
    ("ancient_browser", &[HTTP_MAIN_SRV_LOC | NGX_CONF_1MORE]),
    ("ancient_browser_value", &[HTTP_MAIN_SRV_LOC | NGX_CONF_TAKE1]),
    (
        "auth_basic",
        &[HTTP_MAIN_SRV_LOC | NGX_HTTP_LMT_CONF | NGX_CONF_TAKE1],
    ),
    (
        "auth_basic_user_file",
        &[HTTP_MAIN_SRV_LOC | NGX_HTTP_LMT_CONF | NGX_CONF_TAKE1],
    ),
    ("auth_http", &[MAIL_MAIN_SRV | NGX_CONF_TAKE1]),
    ("auth_http_header", &[MAIL_MAIN_SRV | NGX_CONF_TAKE2]),
    ("auth_http_pass_client_cert", &[MAIL_MAIN_SRV | NGX_CONF_FLAG]),
    ("auth_http_timeout", &[MAIL_MAIN_SRV | NGX_CONF_TAKE1]),
    ("auth_request", &[HTTP_MAIN_SRV_LOC | NGX_CONF_TAKE1]),
    ("auth_request_set", &[HTTP_MAIN_SRV_LOC | NGX_CONF_TAKE2]),
    ("autoindex", &[HTTP_MAIN_SRV_LOC | NGX_CONF_FLAG]),
    ("autoindex_exact_size", &[HTTP_MAIN_SRV_LOC | NGX_CONF_FLAG]),
    ("autoindex_format", &[HTTP_MAIN_SRV_LOC | NGX_CONF_TAKE1]),
    ("autoindex_localtime", &[HTTP_MAIN_SRV_LOC | NGX_CONF_FLAG]),
    ("break", &[HTTP_REWRITE | NGX_CONF_NOARGS]),
    ("charset", &[HTTP_MAIN_SRV_LOC_LIF | NGX_CONF_TAKE1]),
    (
        "charset_map",
        &[NGX_HTTP_MAIN_CONF | NGX_CONF_BLOCK | NGX_CONF_TAKE2],
    ),
    ("charset_types", &[HTTP_MAIN_SRV_LOC | NGX_CONF_1MORE]),
    ("chunked_transfer_encoding", &[HTTP_MAIN_SRV_LOC | NGX_CONF_FLAG]),
    ("client_body_buffer_size", &[HTTP_MAIN_SRV_LOC | NGX_CONF_TAKE1]),
    ("client_body_in_file_only", &[HTTP_MAIN_SRV_LOC | NGX_CONF_TAKE1]),
    ("client_body_in_single_buffer", &[HTTP_MAIN_SRV_LOC | NGX_CONF_FLAG]),
    ("client_body_temp_path", &[HTTP_MAIN_SRV_LOC | NGX_CONF_TAKE1234]),
    ("client_body_timeout", &[HTTP_MAIN_SRV_LOC | NGX_CONF_TAKE1]),
    (
        "client_header_buffer_size",
        &[NGX_HTTP_MAIN_CONF | NGX_HTTP_SRV_CONF | NGX_CONF_TAKE1],
    ),
    (
        "client_header_timeout",
        &[NGX_HTTP_MAIN_CONF | NGX_HTTP_SRV_CONF | NGX_CONF_TAKE1],
    ),
    ("client_max_body_size", &[HTTP_MAIN_SRV_LOC | NGX_CONF_TAKE1]),
    (
        "connection_pool_size",
        &[NGX_HTTP_MAIN_CONF | NGX_HTTP_SRV_CONF | NGX_CONF_TAKE1],
    ),
    ("create_full_put_path", &[HTTP_MAIN_SRV_LOC | NGX_CONF_FLAG]),
    ("daemon", &[NGX_MAIN_CONF | NGX_CONF_FLAG]),
    ("dav_access", &[HTTP_MAIN_SRV_LOC | NGX_CONF_TAKE123]),
    ("dav_methods", &[HTTP_MAIN_SRV_LOC | NGX_CONF_1MORE]),
    ("debug_connection", &[NGX_EVENT_CONF | NGX_CONF_TAKE1]),
    ("debug_points", &[NGX_MAIN_CONF | NGX_CONF_TAKE1]),
    ("default_type", &[HTTP_MAIN_SRV_LOC | NGX_CONF_TAKE1]),
    (
        "deny",
        &[
            HTTP_MAIN_SRV_LOC | NGX_HTTP_LMT_CONF | NGX_CONF_TAKE1,
            STREAM_MAIN_SRV | NGX_CONF_TAKE1,
        ],
    ),
    ("directio", &[HTTP_MAIN_SRV_LOC | NGX_CONF_TAKE1]),
    ("directio_alignment", &[HTTP_MAIN_SRV_LOC | NGX_CONF_TAKE1]),
    ("disable_symlinks", &[HTTP_MAIN_SRV_LOC | NGX_CONF_TAKE12]),
    ("empty_gif", &[NGX_HTTP_LOC_CONF | NGX_CONF_NOARGS]),
    ("env", &[NGX_MAIN_CONF | NGX_CONF_TAKE1]),
    (
        "error_log",
        &[
            NGX_MAIN_CONF
                | HTTP_MAIN_SRV_LOC
                | MAIL_MAIN_SRV
                | STREAM_MAIN_SRV
                | NGX_CONF_1MORE,
        ],
    ),
    ("error_page", &[HTTP_MAIN_SRV_LOC_LIF | NGX_CONF_2MORE]),
    ("etag", &[HTTP_MAIN_SRV_LOC | NGX_CONF_FLAG]),
    ("events", &[NGX_MAIN_CONF | NGX_CONF_BLOCK | NGX_CONF_NOARGS]),
    ("expires", &[HTTP_MAIN_SRV_LOC_LIF | NGX_CONF_TAKE12]),
    ("fastcgi_bind", &[HTTP_MAIN_SRV_LOC | NGX_CONF_TAKE12]),
    ("fastcgi_buffer_size", &[HTTP_MAIN_SRV_LOC | NGX_CONF_TAKE1]),
    ("fastcgi_buffering", &[HTTP_MAIN_SRV_LOC | NGX_CONF_FLAG]),
    ("fastcgi_buffers", &[HTTP_MAIN_SRV_LOC | NGX_CONF_TAKE2]),
    ("fastcgi_busy_buffers_size", &[HTTP_MAIN_SRV_LOC | NGX_CONF_TAKE1]),
    ("fastcgi_cache", &[HTTP_MAIN_SRV_LOC | NGX_CONF_TAKE1]),
    ("fastcgi_cache_background_update", &[HTTP_MAIN_SRV_LOC | NGX_CONF_FLAG]),
    ("fastcgi_cache_bypass", &[HTTP_MAIN_SRV_LOC | NGX_CONF_1MORE]),
    ("fastcgi_cache_key", &[HTTP_MAIN_SRV_LOC | NGX_CONF_TAKE1]),
    ("fastcgi_cache_lock", &[HTTP_MAIN_SRV_LOC | NGX_CONF_FLAG]),
    ("fastcgi_cache_lock_age", &[HTTP_MAIN_SRV_LOC | NGX_CONF_TAKE1]),
    ("fastcgi_cache_lock_timeout", &[HTTP_MAIN_SRV_LOC | NGX_CONF_TAKE1]),
    ("fastcgi_cache_max_range_offset", &[HTTP_MAIN_SRV_LOC | NGX_CONF_TAKE1]),
    ("fastcgi_cache_methods", &[HTTP_MAIN_SRV_LOC | NGX_CONF_1MORE]),
    ("fastcgi_cache_min_uses", &[HTTP_MAIN_SRV_LOC | NGX_CONF_TAKE1]),
    ("fastcgi_cache_path", &[NGX_HTTP_MAIN_CONF | NGX_CONF_2MORE]),
    ("fastcgi_cache_revalidate", &[HTTP_MAIN_SRV_LOC | NGX_CONF_FLAG]),
    ("fastcgi_cache_use_stale", &[HTTP_MAIN_SRV_LOC | NGX_CONF_1MORE]),
    ("fastcgi_cache_valid", &[HTTP_MAIN_SRV_LOC | NGX_CONF_1MORE]),
    ("fastcgi_connect_timeout", &[HTTP_MAIN_SRV_LOC | NGX_CONF_TAKE1]),
    ("fastcgi_force_ranges", &[HTTP_MAIN_SRV_LOC | NGX_CONF_FLAG]),
    ("fastcgi_hide_header", &[HTTP_MAIN_SRV_LOC | NGX_CONF_TAKE1]),
    ("fastcgi_ignore_client_abort", &[HTTP_MAIN_SRV_LOC | NGX_CONF_FLAG]),
    ("fastcgi_ignore_headers", &[HTTP_MAIN_SRV_LOC | NGX_CONF_1MORE]),
    ("fastcgi_index", &[HTTP_MAIN_SRV_LOC | NGX_CONF_TAKE1]),
    ("fastcgi_intercept_errors", &[HTTP_MAIN_SRV_LOC | NGX_CONF_FLAG]),
    ("fastcgi_keep_conn", &[HTTP_MAIN_SRV_LOC | NGX_CONF_FLAG]),
    ("fastcgi_limit_rate", &[HTTP_MAIN_SRV_LOC | NGX_CONF_TAKE1]),
    ("fastcgi_max_temp_file_size", &[HTTP_MAIN_SRV_LOC | NGX_CONF_TAKE1]),
    ("fastcgi_next_upstream", &[HTTP_MAIN_SRV_LOC | NGX_CONF_1MORE]),
    ("fastcgi_next_upstream_timeout", &[HTTP_MAIN_SRV_LOC | NGX_CONF_TAKE1]),
    ("fastcgi_next_upstream_tries", &[HTTP_MAIN_SRV_LOC | NGX_CONF_TAKE1]),
    ("fastcgi_no_cache", &[HTTP_MAIN_SRV_LOC | NGX_CONF_1MORE]),
    ("fastcgi_param", &[HTTP_MAIN_SRV_LOC | NGX_CONF_TAKE23]),
    (
        "fastcgi_pass",
        &[NGX_HTTP_LOC_CONF | NGX_HTTP_LIF_CONF | NGX_CONF_TAKE1],
    ),
    ("fastcgi_pass_header", &[HTTP_MAIN_SRV_LOC | NGX_CONF_TAKE1]),
    ("fastcgi_pass_request_body", &[HTTP_MAIN_SRV_LOC | NGX_CONF_FLAG]),
    ("fastcgi_pass_request_headers", &[HTTP_MAIN_SRV_LOC | NGX_CONF_FLAG]),
    ("fastcgi_read_timeout", &[HTTP_MAIN_SRV_LOC | NGX_CONF_TAKE1]),
    ("fastcgi_request_buffering", &[HTTP_MAIN_SRV_LOC | NGX_CONF_FLAG]),
    ("fastcgi_send_lowat", &[HTTP_MAIN_SRV_LOC | NGX_CONF_TAKE1]),
    ("fastcgi_send_timeout", &[HTTP_MAIN_SRV_LOC | NGX_CONF_TAKE1]),
    ("fastcgi_split_path_info", &[NGX_HTTP_LOC_CONF | NGX_CONF_TAKE1]),
    ("fastcgi_store", &[HTTP_MAIN_SRV_LOC | NGX_CONF_TAKE1]),
    ("fastcgi_store_access", &[HTTP_MAIN_SRV_LOC | NGX_CONF_TAKE123]),
    ("fastcgi_temp_file_write_size", &[HTTP_MAIN_SRV_LOC | NGX_CONF_TAKE1]),
    ("fastcgi_temp_path", &[HTTP_MAIN_SRV_LOC | NGX_CONF_TAKE1234]),
    ("flv", &[NGX_HTTP_LOC_CONF | NGX_CONF_NOARGS]),
    (
        "geo",
        &[
            NGX_HTTP_MAIN_CONF | NGX_CONF_BLOCK | NGX_CONF_TAKE12,
            NGX_STREAM_MAIN_CONF | NGX_CONF_BLOCK | NGX_CONF_TAKE12,
        ],
    ),
    ("grpc_connect_timeout", &[HTTP_MAIN_SRV_LOC | NGX_CONF_TAKE1]),
    ("grpc_hide_header", &[HTTP_MAIN_SRV_LOC | NGX_CONF_TAKE1]),
    ("grpc_intercept_errors", &[HTTP_MAIN_SRV_LOC | NGX_CONF_FLAG]),
    ("grpc_next_upstream", &[HTTP_MAIN_SRV_LOC | NGX_CONF_1MORE]),
    (
        "grpc_pass",
        &[NGX_HTTP_LOC_CONF | NGX_HTTP_LIF_CONF | NGX_CONF_TAKE1],
    ),
    ("grpc_read_timeout", &[HTTP_MAIN_SRV_LOC | NGX_CONF_TAKE1]),
    ("grpc_send_timeout", &[HTTP_MAIN_SRV_LOC | NGX_CONF_TAKE1]),
    ("grpc_set_header", &[HTTP_MAIN_SRV_LOC | NGX_CONF_TAKE2]),
    ("gunzip", &[HTTP_MAIN_SRV_LOC | NGX_CONF_FLAG]),
    ("gunzip_buffers", &[HTTP_MAIN_SRV_LOC | NGX_CONF_TAKE2]),
    ("gzip", &[HTTP_MAIN_SRV_LOC_LIF | NGX_CONF_FLAG]),
    ("gzip_buffers", &[HTTP_MAIN_SRV_LOC | NGX_CONF_TAKE2]),
    ("gzip_comp_level", &[HTTP_MAIN_SRV_LOC | NGX_CONF_TAKE1]),
    ("gzip_disable", &[HTTP_MAIN_SRV_LOC | NGX_CONF_1MORE]),
    ("gzip_http_version", &[HTTP_MAIN_SRV_LOC | NGX_CONF_TAKE1]),
    ("gzip_min_length", &[HTTP_MAIN_SRV_LOC | NGX_CONF_TAKE1]),
    ("gzip_proxied", &[HTTP_MAIN_SRV_LOC | NGX_CONF_1MORE]),
    ("gzip_static", &[HTTP_MAIN_SRV_LOC | NGX_CONF_TAKE1]),
    ("gzip_types", &[HTTP_MAIN_SRV_LOC | NGX_CONF_1MORE]),
    ("gzip_vary", &[HTTP_MAIN_SRV_LOC | NGX_CONF_FLAG]),
    (
        "hash",
        &[NGX_HTTP_UPS_CONF | NGX_STREAM_UPS_CONF | NGX_CONF_TAKE12],
    ),
    ("http", &[NGX_MAIN_CONF | NGX_CONF_BLOCK | NGX_CONF_NOARGS]),
    (
        "http2",
        &[NGX_HTTP_MAIN_CONF | NGX_HTTP_SRV_CONF | NGX_CONF_FLAG],
    ),
    (
        "http2_chunk_size",
        &[HTTP_MAIN_SRV_LOC | NGX_CONF_TAKE1],
    ),
    (
        "http2_max_concurrent_streams",
        &[NGX_HTTP_MAIN_CONF | NGX_HTTP_SRV_CONF | NGX_CONF_TAKE1],
    ),
    ("http2_push", &[HTTP_MAIN_SRV_LOC | NGX_CONF_TAKE1]),
    ("http2_push_preload", &[HTTP_MAIN_SRV_LOC | NGX_CONF_FLAG]),
    ("http2_recv_buffer_size", &[NGX_HTTP_MAIN_CONF | NGX_CONF_TAKE1]),
    (
        "http3",
        &[NGX_HTTP_MAIN_CONF | NGX_HTTP_SRV_CONF | NGX_CONF_FLAG],
    ),
    (
        "http3_hq",
        &[NGX_HTTP_MAIN_CONF | NGX_HTTP_SRV_CONF | NGX_CONF_FLAG],
    ),
    (
        "http3_max_concurrent_streams",
        &[NGX_HTTP_MAIN_CONF | NGX_HTTP_SRV_CONF | NGX_CONF_TAKE1],
    ),
    (
        "if",
        &[NGX_HTTP_SRV_CONF | NGX_HTTP_LOC_CONF | NGX_CONF_BLOCK | NGX_CONF_1MORE],
    ),
    ("if_modified_since", &[HTTP_MAIN_SRV_LOC | NGX_CONF_TAKE1]),
    (
        "ignore_invalid_headers",
        &[NGX_HTTP_MAIN_CONF | NGX_HTTP_SRV_CONF | NGX_CONF_FLAG],
    ),
    ("image_filter", &[NGX_HTTP_LOC_CONF | NGX_CONF_TAKE123]),
    ("image_filter_buffer", &[HTTP_MAIN_SRV_LOC | NGX_CONF_TAKE1]),
    ("image_filter_interlace", &[HTTP_MAIN_SRV_LOC | NGX_CONF_FLAG]),
    ("image_filter_jpeg_quality", &[HTTP_MAIN_SRV_LOC | NGX_CONF_TAKE1]),
    ("imap_auth", &[MAIL_MAIN_SRV | NGX_CONF_1MORE]),
    ("imap_capabilities", &[MAIL_MAIN_SRV | NGX_CONF_1MORE]),
    ("imap_client_buffer", &[MAIL_MAIN_SRV | NGX_CONF_TAKE1]),
    ("include", &[NGX_ANY_CONF | NGX_CONF_TAKE1]),
    ("index", &[HTTP_MAIN_SRV_LOC | NGX_CONF_1MORE]),
    ("internal", &[NGX_HTTP_LOC_CONF | NGX_CONF_NOARGS]),
    ("ip_hash", &[NGX_HTTP_UPS_CONF | NGX_CONF_NOARGS]),
    ("keepalive", &[NGX_HTTP_UPS_CONF | NGX_CONF_TAKE1]),
    ("keepalive_disable", &[HTTP_MAIN_SRV_LOC | NGX_CONF_TAKE12]),
    (
        "keepalive_requests",
        &[HTTP_MAIN_SRV_LOC | NGX_CONF_TAKE1, NGX_HTTP_UPS_CONF | NGX_CONF_TAKE1],
    ),
    (
        "keepalive_time",
        &[HTTP_MAIN_SRV_LOC | NGX_CONF_TAKE1, NGX_HTTP_UPS_CONF | NGX_CONF_TAKE1],
    ),
    (
        "keepalive_timeout",
        &[HTTP_MAIN_SRV_LOC | NGX_CONF_TAKE12, NGX_HTTP_UPS_CONF | NGX_CONF_TAKE1],
    ),
    (
        "large_client_header_buffers",
        &[NGX_HTTP_MAIN_CONF | NGX_HTTP_SRV_CONF | NGX_CONF_TAKE2],
    ),
    (
        "least_conn",
        &[NGX_HTTP_UPS_CONF | NGX_STREAM_UPS_CONF | NGX_CONF_NOARGS],
    ),
    (
        "least_time",
        &[NGX_HTTP_UPS_CONF | NGX_STREAM_UPS_CONF | NGX_CONF_TAKE12],
    ),
    (
        "limit_conn",
        &[HTTP_MAIN_SRV_LOC | NGX_CONF_TAKE2, STREAM_MAIN_SRV | NGX_CONF_TAKE2],
    ),
    (
        "limit_conn_dry_run",
        &[HTTP_MAIN_SRV_LOC | NGX_CONF_FLAG, STREAM_MAIN_SRV | NGX_CONF_FLAG],
    ),
    (
        "limit_conn_log_level",
        &[HTTP_MAIN_SRV_LOC | NGX_CONF_TAKE1, STREAM_MAIN_SRV | NGX_CONF_TAKE1],
    ),
    ("limit_conn_status", &[HTTP_MAIN_SRV_LOC | NGX_CONF_TAKE1]),
    (
        "limit_conn_zone",
        &[NGX_HTTP_MAIN_CONF | NGX_CONF_TAKE2, NGX_STREAM_MAIN_CONF | NGX_CONF_TAKE2],
    ),
    (
        "limit_except",
        &[NGX_HTTP_LOC_CONF | NGX_CONF_BLOCK | NGX_CONF_1MORE],
    ),
    (
        "limit_rate",
        &[HTTP_REWRITE | NGX_HTTP_MAIN_CONF | NGX_CONF_TAKE1],
    ),
    (
        "limit_rate_after",
        &[HTTP_REWRITE | NGX_HTTP_MAIN_CONF | NGX_CONF_TAKE1],
    ),
    ("limit_req", &[HTTP_MAIN_SRV_LOC | NGX_CONF_TAKE123]),
    ("limit_req_dry_run", &[HTTP_MAIN_SRV_LOC | NGX_CONF_FLAG]),
    ("limit_req_log_level", &[HTTP_MAIN_SRV_LOC | NGX_CONF_TAKE1]),
    ("limit_req_status", &[HTTP_MAIN_SRV_LOC | NGX_CONF_TAKE1]),
    ("limit_req_zone", &[NGX_HTTP_MAIN_CONF | NGX_CONF_TAKE34]),
    ("lingering_close", &[HTTP_MAIN_SRV_LOC | NGX_CONF_TAKE1]),
    ("lingering_time", &[HTTP_MAIN_SRV_LOC | NGX_CONF_TAKE1]),
    ("lingering_timeout", &[HTTP_MAIN_SRV_LOC | NGX_CONF_TAKE1]),
    (
        "listen",
        &[
            NGX_HTTP_SRV_CONF | NGX_CONF_1MORE,
            NGX_MAIL_SRV_CONF | NGX_CONF_1MORE,
            NGX_STREAM_SRV_CONF | NGX_CONF_1MORE,
        ],
    ),
    ("load_module", &[NGX_MAIN_CONF | NGX_CONF_TAKE1]),
    (
        "location",
        &[NGX_HTTP_SRV_CONF | NGX_HTTP_LOC_CONF | NGX_CONF_BLOCK | NGX_CONF_TAKE12],
    ),
    ("lock_file", &[NGX_MAIN_CONF | NGX_CONF_TAKE1]),
    (
        "log_format",
        &[NGX_HTTP_MAIN_CONF | NGX_CONF_2MORE, NGX_STREAM_MAIN_CONF | NGX_CONF_2MORE],
    ),
    ("log_not_found", &[HTTP_MAIN_SRV_LOC | NGX_CONF_FLAG]),
    ("log_subrequest", &[HTTP_MAIN_SRV_LOC | NGX_CONF_FLAG]),
    ("mail", &[NGX_MAIN_CONF | NGX_CONF_BLOCK | NGX_CONF_NOARGS]),
    (
        "map",
        &[
            NGX_HTTP_MAIN_CONF | NGX_CONF_BLOCK | NGX_CONF_TAKE2,
            NGX_STREAM_MAIN_CONF | NGX_CONF_BLOCK | NGX_CONF_TAKE2,
        ],
    ),
    (
        "map_hash_bucket_size",
        &[NGX_HTTP_MAIN_CONF | NGX_CONF_TAKE1, NGX_STREAM_MAIN_CONF | NGX_CONF_TAKE1],
    ),
    (
        "map_hash_max_size",
        &[NGX_HTTP_MAIN_CONF | NGX_CONF_TAKE1, NGX_STREAM_MAIN_CONF | NGX_CONF_TAKE1],
    ),
    ("master_process", &[NGX_MAIN_CONF | NGX_CONF_FLAG]),
    ("max_ranges", &[HTTP_MAIN_SRV_LOC | NGX_CONF_TAKE1]),
    (
        "memcached_pass",
        &[NGX_HTTP_LOC_CONF | NGX_HTTP_LIF_CONF | NGX_CONF_TAKE1],
    ),
    ("memcached_read_timeout", &[HTTP_MAIN_SRV_LOC | NGX_CONF_TAKE1]),
    ("memcached_send_timeout", &[HTTP_MAIN_SRV_LOC | NGX_CONF_TAKE1]),
    (
        "merge_slashes",
        &[NGX_HTTP_MAIN_CONF | NGX_HTTP_SRV_CONF | NGX_CONF_FLAG],
    ),
    ("min_delete_depth", &[HTTP_MAIN_SRV_LOC | NGX_CONF_TAKE1]),
    ("mirror", &[HTTP_MAIN_SRV_LOC | NGX_CONF_TAKE1]),
    ("mirror_request_body", &[HTTP_MAIN_SRV_LOC | NGX_CONF_FLAG]),
    ("modern_browser", &[HTTP_MAIN_SRV_LOC | NGX_CONF_TAKE12]),
    ("modern_browser_value", &[HTTP_MAIN_SRV_LOC | NGX_CONF_TAKE1]),
    ("mp4", &[NGX_HTTP_LOC_CONF | NGX_CONF_NOARGS]),
    ("mp4_buffer_size", &[HTTP_MAIN_SRV_LOC | NGX_CONF_TAKE1]),
    ("mp4_max_buffer_size", &[HTTP_MAIN_SRV_LOC | NGX_CONF_TAKE1]),
    ("msie_padding", &[HTTP_MAIN_SRV_LOC | NGX_CONF_FLAG]),
    ("msie_refresh", &[HTTP_MAIN_SRV_LOC | NGX_CONF_FLAG]),
    ("multi_accept", &[NGX_EVENT_CONF | NGX_CONF_FLAG]),
    ("ntlm", &[NGX_HTTP_UPS_CONF | NGX_CONF_NOARGS]),
    ("open_file_cache", &[HTTP_MAIN_SRV_LOC | NGX_CONF_TAKE12]),
    ("open_file_cache_errors", &[HTTP_MAIN_SRV_LOC | NGX_CONF_FLAG]),
    ("open_file_cache_min_uses", &[HTTP_MAIN_SRV_LOC | NGX_CONF_TAKE1]),
    ("open_file_cache_valid", &[HTTP_MAIN_SRV_LOC | NGX_CONF_TAKE1]),
    ("open_log_file_cache", &[HTTP_MAIN_SRV_LOC | NGX_CONF_TAKE1234]),
    ("output_buffers", &[HTTP_MAIN_SRV_LOC | NGX_CONF_TAKE2]),
    ("override_charset", &[HTTP_MAIN_SRV_LOC_LIF | NGX_CONF_FLAG]),
    ("pcre_jit", &[NGX_MAIN_CONF | NGX_CONF_FLAG]),
    ("pid", &[NGX_MAIN_CONF | NGX_CONF_TAKE1]),
    ("pop3_auth", &[MAIL_MAIN_SRV | NGX_CONF_1MORE]),
    ("pop3_capabilities", &[MAIL_MAIN_SRV | NGX_CONF_1MORE]),
    ("port_in_redirect", &[HTTP_MAIN_SRV_LOC | NGX_CONF_FLAG]),
    ("postpone_output", &[HTTP_MAIN_SRV_LOC | NGX_CONF_TAKE1]),
    ("preread_buffer_size", &[STREAM_MAIN_SRV | NGX_CONF_TAKE1]),
    ("preread_timeout", &[STREAM_MAIN_SRV | NGX_CONF_TAKE1]),
    ("protocol", &[NGX_MAIL_SRV_CONF | NGX_CONF_TAKE1]),
    (
        "proxy_bind",
        &[HTTP_MAIN_SRV_LOC | NGX_CONF_TAKE12, STREAM_MAIN_SRV | NGX_CONF_TAKE12],
    ),
    (
        "proxy_buffer_size",
        &[HTTP_MAIN_SRV_LOC | NGX_CONF_TAKE1, STREAM_MAIN_SRV | NGX_CONF_TAKE1],
    ),
    ("proxy_buffering", &[HTTP_MAIN_SRV_LOC | NGX_CONF_FLAG]),
    ("proxy_buffers", &[HTTP_MAIN_SRV_LOC | NGX_CONF_TAKE2]),
    ("proxy_busy_buffers_size", &[HTTP_MAIN_SRV_LOC | NGX_CONF_TAKE1]),
    ("proxy_cache", &[HTTP_MAIN_SRV_LOC | NGX_CONF_TAKE1]),
    ("proxy_cache_background_update", &[HTTP_MAIN_SRV_LOC | NGX_CONF_FLAG]),
    ("proxy_cache_bypass", &[HTTP_MAIN_SRV_LOC | NGX_CONF_1MORE]),
    ("proxy_cache_convert_head", &[HTTP_MAIN_SRV_LOC | NGX_CONF_FLAG]),
    ("proxy_cache_key", &[HTTP_MAIN_SRV_LOC | NGX_CONF_TAKE1]),
    ("proxy_cache_lock", &[HTTP_MAIN_SRV_LOC | NGX_CONF_FLAG]),
    ("proxy_cache_lock_age", &[HTTP_MAIN_SRV_LOC | NGX_CONF_TAKE1]),
    ("proxy_cache_lock_timeout", &[HTTP_MAIN_SRV_LOC | NGX_CONF_TAKE1]),
    ("proxy_cache_max_range_offset", &[HTTP_MAIN_SRV_LOC | NGX_CONF_TAKE1]),
    ("proxy_cache_methods", &[HTTP_MAIN_SRV_LOC | NGX_CONF_1MORE]),
    ("proxy_cache_min_uses", &[HTTP_MAIN_SRV_LOC | NGX_CONF_TAKE1]),
    ("proxy_cache_path", &[NGX_HTTP_MAIN_CONF | NGX_CONF_2MORE]),
    ("proxy_cache_revalidate", &[HTTP_MAIN_SRV_LOC | NGX_CONF_FLAG]),
    ("proxy_cache_use_stale", &[HTTP_MAIN_SRV_LOC | NGX_CONF_1MORE]),
    ("proxy_cache_valid", &[HTTP_MAIN_SRV_LOC | NGX_CONF_1MORE]),
    (
        "proxy_connect_timeout",
        &[HTTP_MAIN_SRV_LOC | NGX_CONF_TAKE1, STREAM_MAIN_SRV | NGX_CONF_TAKE1],
    ),
    ("proxy_cookie_domain", &[HTTP_MAIN_SRV_LOC | NGX_CONF_TAKE12]),
    ("proxy_cookie_path", &[HTTP_MAIN_SRV_LOC | NGX_CONF_TAKE12]),
    ("proxy_download_rate", &[STREAM_MAIN_SRV | NGX_CONF_TAKE1]),
    ("proxy_force_ranges", &[HTTP_MAIN_SRV_LOC | NGX_CONF_FLAG]),
    ("proxy_headers_hash_bucket_size", &[HTTP_MAIN_SRV_LOC | NGX_CONF_TAKE1]),
    ("proxy_headers_hash_max_size", &[HTTP_MAIN_SRV_LOC | NGX_CONF_TAKE1]),
    ("proxy_hide_header", &[HTTP_MAIN_SRV_LOC | NGX_CONF_TAKE1]),
    ("proxy_http_version", &[HTTP_MAIN_SRV_LOC | NGX_CONF_TAKE1]),
    ("proxy_ignore_client_abort", &[HTTP_MAIN_SRV_LOC | NGX_CONF_FLAG]),
    ("proxy_ignore_headers", &[HTTP_MAIN_SRV_LOC | NGX_CONF_1MORE]),
    ("proxy_intercept_errors", &[HTTP_MAIN_SRV_LOC | NGX_CONF_FLAG]),
    ("proxy_limit_rate", &[HTTP_MAIN_SRV_LOC | NGX_CONF_TAKE1]),
    ("proxy_max_temp_file_size", &[HTTP_MAIN_SRV_LOC | NGX_CONF_TAKE1]),
    ("proxy_method", &[HTTP_MAIN_SRV_LOC | NGX_CONF_TAKE1]),
    (
        "proxy_next_upstream",
        &[HTTP_MAIN_SRV_LOC | NGX_CONF_1MORE, STREAM_MAIN_SRV | NGX_CONF_FLAG],
    ),
    (
        "proxy_next_upstream_timeout",
        &[HTTP_MAIN_SRV_LOC | NGX_CONF_TAKE1, STREAM_MAIN_SRV | NGX_CONF_TAKE1],
    ),
    (
        "proxy_next_upstream_tries",
        &[HTTP_MAIN_SRV_LOC | NGX_CONF_TAKE1, STREAM_MAIN_SRV | NGX_CONF_TAKE1],
    ),
    ("proxy_no_cache", &[HTTP_MAIN_SRV_LOC | NGX_CONF_1MORE]),
    (
        "proxy_pass",
        &[
            NGX_HTTP_LOC_CONF | NGX_HTTP_LIF_CONF | NGX_HTTP_LMT_CONF | NGX_CONF_TAKE1,
            NGX_STREAM_SRV_CONF | NGX_CONF_TAKE1,
        ],
    ),
    ("proxy_pass_header", &[HTTP_MAIN_SRV_LOC | NGX_CONF_TAKE1]),
    ("proxy_pass_request_body", &[HTTP_MAIN_SRV_LOC | NGX_CONF_FLAG]),
    ("proxy_pass_request_headers", &[HTTP_MAIN_SRV_LOC | NGX_CONF_FLAG]),
    ("proxy_protocol", &[STREAM_MAIN_SRV | NGX_CONF_FLAG]),
    ("proxy_protocol_timeout", &[STREAM_MAIN_SRV | NGX_CONF_TAKE1]),
    ("proxy_read_timeout", &[HTTP_MAIN_SRV_LOC | NGX_CONF_TAKE1]),
    ("proxy_redirect", &[HTTP_MAIN_SRV_LOC | NGX_CONF_TAKE12]),
    ("proxy_request_buffering", &[HTTP_MAIN_SRV_LOC | NGX_CONF_FLAG]),
    ("proxy_requests", &[STREAM_MAIN_SRV | NGX_CONF_TAKE1]),
    ("proxy_responses", &[STREAM_MAIN_SRV | NGX_CONF_TAKE1]),
    ("proxy_send_lowat", &[HTTP_MAIN_SRV_LOC | NGX_CONF_TAKE1]),
    ("proxy_send_timeout", &[HTTP_MAIN_SRV_LOC | NGX_CONF_TAKE1]),
    ("proxy_set_body", &[HTTP_MAIN_SRV_LOC | NGX_CONF_TAKE1]),
    ("proxy_set_header", &[HTTP_MAIN_SRV_LOC | NGX_CONF_TAKE2]),
    (
        "proxy_socket_keepalive",
        &[HTTP_MAIN_SRV_LOC | NGX_CONF_FLAG, STREAM_MAIN_SRV | NGX_CONF_FLAG],
    ),
    ("proxy_ssl", &[STREAM_MAIN_SRV | NGX_CONF_FLAG]),
    (
        "proxy_ssl_certificate",
        &[HTTP_MAIN_SRV_LOC | NGX_CONF_TAKE1, STREAM_MAIN_SRV | NGX_CONF_TAKE1],
    ),
    (
        "proxy_ssl_certificate_key",
        &[HTTP_MAIN_SRV_LOC | NGX_CONF_TAKE1, STREAM_MAIN_SRV | NGX_CONF_TAKE1],
    ),
    (
        "proxy_ssl_ciphers",
        &[HTTP_MAIN_SRV_LOC | NGX_CONF_TAKE1, STREAM_MAIN_SRV | NGX_CONF_TAKE1],
    ),
    (
        "proxy_ssl_crl",
        &[HTTP_MAIN_SRV_LOC | NGX_CONF_TAKE1, STREAM_MAIN_SRV | NGX_CONF_TAKE1],
    ),
    (
        "proxy_ssl_name",
        &[HTTP_MAIN_SRV_LOC | NGX_CONF_TAKE1, STREAM_MAIN_SRV | NGX_CONF_TAKE1],
    ),
    (
        "proxy_ssl_password_file",
        &[HTTP_MAIN_SRV_LOC | NGX_CONF_TAKE1, STREAM_MAIN_SRV | NGX_CONF_TAKE1],
    ),
    (
        "proxy_ssl_protocols",
        &[HTTP_MAIN_SRV_LOC | NGX_CONF_1MORE, STREAM_MAIN_SRV | NGX_CONF_1MORE],
    ),
    (
        "proxy_ssl_server_name",
        &[HTTP_MAIN_SRV_LOC | NGX_CONF_FLAG, STREAM_MAIN_SRV | NGX_CONF_FLAG],
    ),
    (
        "proxy_ssl_session_reuse",
        &[HTTP_MAIN_SRV_LOC | NGX_CONF_FLAG, STREAM_MAIN_SRV | NGX_CONF_FLAG],
    ),
    (
        "proxy_ssl_trusted_certificate",
        &[HTTP_MAIN_SRV_LOC | NGX_CONF_TAKE1, STREAM_MAIN_SRV | NGX_CONF_TAKE1],
    ),
    (
        "proxy_ssl_verify",
        &[HTTP_MAIN_SRV_LOC | NGX_CONF_FLAG, STREAM_MAIN_SRV | NGX_CONF_FLAG],
    ),
    (
        "proxy_ssl_verify_depth",
        &[HTTP_MAIN_SRV_LOC | NGX_CONF_TAKE1, STREAM_MAIN_SRV | NGX_CONF_TAKE1],
    ),
    ("proxy_store", &[HTTP_MAIN_SRV_LOC | NGX_CONF_TAKE1]),
    ("proxy_store_access", &[HTTP_MAIN_SRV_LOC | NGX_CONF_TAKE123]),
    ("proxy_temp_file_write_size", &[HTTP_MAIN_SRV_LOC | NGX_CONF_TAKE1]),
    ("proxy_temp_path", &[HTTP_MAIN_SRV_LOC | NGX_CONF_TAKE1234]),
    ("proxy_timeout", &[STREAM_MAIN_SRV | NGX_CONF_TAKE1]),
    ("proxy_upload_rate", &[STREAM_MAIN_SRV | NGX_CONF_TAKE1]),
    (
        "random",
        &[NGX_HTTP_UPS_CONF | NGX_STREAM_UPS_CONF | NGX_CONF_NOARGS | NGX_CONF_TAKE12],
    ),
    ("random_index", &[NGX_HTTP_LOC_CONF | NGX_CONF_FLAG]),
    ("read_ahead", &[HTTP_MAIN_SRV_LOC | NGX_CONF_TAKE1]),
    ("real_ip_header", &[HTTP_MAIN_SRV_LOC | NGX_CONF_TAKE1]),
    ("real_ip_recursive", &[HTTP_MAIN_SRV_LOC | NGX_CONF_FLAG]),
    ("recursive_error_pages", &[HTTP_MAIN_SRV_LOC | NGX_CONF_FLAG]),
    ("referer_hash_bucket_size", &[NGX_HTTP_SRV_CONF | NGX_HTTP_LOC_CONF | NGX_CONF_TAKE1]),
    ("referer_hash_max_size", &[NGX_HTTP_SRV_CONF | NGX_HTTP_LOC_CONF | NGX_CONF_TAKE1]),
    (
        "request_pool_size",
        &[NGX_HTTP_MAIN_CONF | NGX_HTTP_SRV_CONF | NGX_CONF_TAKE1],
    ),
    ("reset_timedout_connection", &[HTTP_MAIN_SRV_LOC | NGX_CONF_FLAG]),
    (
        "resolver",
        &[
            HTTP_MAIN_SRV_LOC | NGX_HTTP_UPS_CONF | NGX_CONF_1MORE,
            MAIL_MAIN_SRV | NGX_CONF_1MORE,
            STREAM_MAIN_SRV | NGX_STREAM_UPS_CONF | NGX_CONF_1MORE,
        ],
    ),
    (
        "resolver_timeout",
        &[
            HTTP_MAIN_SRV_LOC | NGX_HTTP_UPS_CONF | NGX_CONF_TAKE1,
            MAIL_MAIN_SRV | NGX_CONF_TAKE1,
            STREAM_MAIN_SRV | NGX_STREAM_UPS_CONF | NGX_CONF_TAKE1,
        ],
    ),
    (
        "return",
        &[HTTP_REWRITE | NGX_CONF_TAKE12, NGX_STREAM_SRV_CONF | NGX_CONF_TAKE1],
    ),
    ("rewrite", &[HTTP_REWRITE | NGX_CONF_TAKE23]),
    ("rewrite_log", &[HTTP_REWRITE | NGX_HTTP_MAIN_CONF | NGX_CONF_FLAG]),
    ("root", &[HTTP_MAIN_SRV_LOC_LIF | NGX_CONF_TAKE1]),
    ("satisfy", &[HTTP_MAIN_SRV_LOC | NGX_CONF_TAKE1]),
    (
        "scgi_pass",
        &[NGX_HTTP_LOC_CONF | NGX_HTTP_LIF_CONF | NGX_CONF_TAKE1],
    ),
    ("scgi_param", &[HTTP_MAIN_SRV_LOC | NGX_CONF_TAKE23]),
    ("scgi_read_timeout", &[HTTP_MAIN_SRV_LOC | NGX_CONF_TAKE1]),
    ("secure_link", &[HTTP_MAIN_SRV_LOC | NGX_CONF_TAKE1]),
    ("secure_link_md5", &[HTTP_MAIN_SRV_LOC | NGX_CONF_TAKE1]),
    ("secure_link_secret", &[NGX_HTTP_LOC_CONF | NGX_CONF_TAKE1]),
    ("send_lowat", &[HTTP_MAIN_SRV_LOC | NGX_CONF_TAKE1]),
    ("send_timeout", &[HTTP_MAIN_SRV_LOC | NGX_CONF_TAKE1]),
    ("sendfile", &[HTTP_MAIN_SRV_LOC_LIF | NGX_CONF_FLAG]),
    ("sendfile_max_chunk", &[HTTP_MAIN_SRV_LOC | NGX_CONF_TAKE1]),
    (
        "server",
        &[
            NGX_HTTP_MAIN_CONF | NGX_CONF_BLOCK | NGX_CONF_NOARGS,
            NGX_HTTP_UPS_CONF | NGX_CONF_1MORE,
            NGX_MAIL_MAIN_CONF | NGX_CONF_BLOCK | NGX_CONF_NOARGS,
            NGX_STREAM_MAIN_CONF | NGX_CONF_BLOCK | NGX_CONF_NOARGS,
            NGX_STREAM_UPS_CONF | NGX_CONF_1MORE,
        ],
    ),
    (
        "server_name",
        &[NGX_HTTP_SRV_CONF | NGX_CONF_1MORE, MAIL_MAIN_SRV | NGX_CONF_TAKE1],
    ),
    ("server_name_in_redirect", &[HTTP_MAIN_SRV_LOC | NGX_CONF_FLAG]),
    ("server_names_hash_bucket_size", &[NGX_HTTP_MAIN_CONF | NGX_CONF_TAKE1]),
    ("server_names_hash_max_size", &[NGX_HTTP_MAIN_CONF | NGX_CONF_TAKE1]),
    ("server_tokens", &[HTTP_MAIN_SRV_LOC | NGX_CONF_TAKE1]),
    (
        "set",
        &[HTTP_REWRITE | NGX_CONF_TAKE2, NGX_STREAM_SRV_CONF | NGX_CONF_TAKE2],
    ),
    ("set_real_ip_from", &[HTTP_MAIN_SRV_LOC | NGX_CONF_TAKE1]),
    ("slice", &[HTTP_MAIN_SRV_LOC | NGX_CONF_TAKE1]),
    ("smtp_auth", &[MAIL_MAIN_SRV | NGX_CONF_1MORE]),
    ("smtp_capabilities", &[MAIL_MAIN_SRV | NGX_CONF_1MORE]),
    ("smtp_client_buffer", &[MAIL_MAIN_SRV | NGX_CONF_TAKE1]),
    ("smtp_greeting_delay", &[MAIL_MAIN_SRV | NGX_CONF_TAKE1]),
    ("source_charset", &[HTTP_MAIN_SRV_LOC_LIF | NGX_CONF_TAKE1]),
    (
        "split_clients",
        &[
            NGX_HTTP_MAIN_CONF | NGX_CONF_BLOCK | NGX_CONF_TAKE2,
            NGX_STREAM_MAIN_CONF | NGX_CONF_BLOCK | NGX_CONF_TAKE2,
        ],
    ),
    ("ssi", &[HTTP_MAIN_SRV_LOC_LIF | NGX_CONF_FLAG]),
    ("ssi_last_modified", &[HTTP_MAIN_SRV_LOC | NGX_CONF_FLAG]),
    ("ssi_min_file_chunk", &[HTTP_MAIN_SRV_LOC | NGX_CONF_TAKE1]),
    ("ssi_silent_errors", &[HTTP_MAIN_SRV_LOC | NGX_CONF_FLAG]),
    ("ssi_types", &[HTTP_MAIN_SRV_LOC | NGX_CONF_1MORE]),
    ("ssi_value_length", &[HTTP_MAIN_SRV_LOC | NGX_CONF_TAKE1]),
    (
        "ssl",
        &[NGX_HTTP_MAIN_CONF | NGX_HTTP_SRV_CONF | NGX_CONF_FLAG, MAIL_MAIN_SRV | NGX_CONF_FLAG],
    ),
    ("ssl_buffer_size", &[NGX_HTTP_MAIN_CONF | NGX_HTTP_SRV_CONF | NGX_CONF_TAKE1]),
    ("ssl_certificate", &[SSL_HTTP_MAIL_STREAM | NGX_CONF_TAKE1]),
    ("ssl_certificate_key", &[SSL_HTTP_MAIL_STREAM | NGX_CONF_TAKE1]),
    ("ssl_ciphers", &[SSL_HTTP_MAIL_STREAM | NGX_CONF_TAKE1]),
    ("ssl_client_certificate", &[SSL_HTTP_MAIL_STREAM | NGX_CONF_TAKE1]),
    ("ssl_crl", &[SSL_HTTP_MAIL_STREAM | NGX_CONF_TAKE1]),
    ("ssl_dhparam", &[SSL_HTTP_MAIL_STREAM | NGX_CONF_TAKE1]),
    ("ssl_early_data", &[NGX_HTTP_MAIN_CONF | NGX_HTTP_SRV_CONF | NGX_CONF_FLAG]),
    ("ssl_ecdh_curve", &[SSL_HTTP_MAIL_STREAM | NGX_CONF_TAKE1]),
    ("ssl_handshake_timeout", &[STREAM_MAIN_SRV | NGX_CONF_TAKE1]),
    ("ssl_password_file", &[SSL_HTTP_MAIL_STREAM | NGX_CONF_TAKE1]),
    ("ssl_prefer_server_ciphers", &[SSL_HTTP_MAIL_STREAM | NGX_CONF_FLAG]),
    ("ssl_preread", &[STREAM_MAIN_SRV | NGX_CONF_FLAG]),
    ("ssl_protocols", &[SSL_HTTP_MAIL_STREAM | NGX_CONF_1MORE]),
    ("ssl_reject_handshake", &[NGX_HTTP_MAIN_CONF | NGX_HTTP_SRV_CONF | NGX_CONF_FLAG]),
    ("ssl_session_cache", &[SSL_HTTP_MAIL_STREAM | NGX_CONF_TAKE12]),
    ("ssl_session_ticket_key", &[SSL_HTTP_MAIL_STREAM | NGX_CONF_TAKE1]),
    ("ssl_session_tickets", &[SSL_HTTP_MAIL_STREAM | NGX_CONF_FLAG]),
    ("ssl_session_timeout", &[SSL_HTTP_MAIL_STREAM | NGX_CONF_TAKE1]),
    ("ssl_stapling", &[NGX_HTTP_MAIN_CONF | NGX_HTTP_SRV_CONF | NGX_CONF_FLAG]),
    ("ssl_stapling_file", &[NGX_HTTP_MAIN_CONF | NGX_HTTP_SRV_CONF | NGX_CONF_TAKE1]),
    ("ssl_stapling_responder", &[NGX_HTTP_MAIN_CONF | NGX_HTTP_SRV_CONF | NGX_CONF_TAKE1]),
    ("ssl_stapling_verify", &[NGX_HTTP_MAIN_CONF | NGX_HTTP_SRV_CONF | NGX_CONF_FLAG]),
    ("ssl_trusted_certificate", &[SSL_HTTP_MAIL_STREAM | NGX_CONF_TAKE1]),
    ("ssl_verify_client", &[SSL_HTTP_MAIL_STREAM | NGX_CONF_TAKE1]),
    ("ssl_verify_depth", &[SSL_HTTP_MAIL_STREAM | NGX_CONF_TAKE1]),
    ("starttls", &[MAIL_MAIN_SRV | NGX_CONF_TAKE1]),
    (
        "state",
        &[NGX_HTTP_UPS_CONF | NGX_STREAM_UPS_CONF | NGX_CONF_TAKE1],
    ),
    ("stream", &[NGX_MAIN_CONF | NGX_CONF_BLOCK | NGX_CONF_NOARGS]),
    (
        "stub_status",
        &[NGX_HTTP_SRV_CONF | NGX_HTTP_LOC_CONF | NGX_CONF_NOARGS | NGX_CONF_TAKE1],
    ),
    ("sub_filter", &[HTTP_MAIN_SRV_LOC | NGX_CONF_TAKE2]),
    ("sub_filter_last_modified", &[HTTP_MAIN_SRV_LOC | NGX_CONF_FLAG]),
    ("sub_filter_once", &[HTTP_MAIN_SRV_LOC | NGX_CONF_FLAG]),
    ("sub_filter_types", &[HTTP_MAIN_SRV_LOC | NGX_CONF_1MORE]),
    ("subrequest_output_buffer_size", &[HTTP_MAIN_SRV_LOC | NGX_CONF_TAKE1]),
    (
        "tcp_nodelay",
        &[HTTP_MAIN_SRV_LOC | NGX_CONF_FLAG, STREAM_MAIN_SRV | NGX_CONF_FLAG],
    ),
    ("tcp_nopush", &[HTTP_MAIN_SRV_LOC | NGX_CONF_FLAG]),
    ("thread_pool", &[NGX_MAIN_CONF | NGX_CONF_TAKE23]),
    ("timeout", &[MAIL_MAIN_SRV | NGX_CONF_TAKE1]),
    ("timer_resolution", &[NGX_MAIN_CONF | NGX_CONF_TAKE1]),
    (
        "try_files",
        &[NGX_HTTP_SRV_CONF | NGX_HTTP_LOC_CONF | NGX_CONF_2MORE],
    ),
    ("types", &[HTTP_MAIN_SRV_LOC | NGX_CONF_BLOCK | NGX_CONF_NOARGS]),
    ("types_hash_bucket_size", &[HTTP_MAIN_SRV_LOC | NGX_CONF_TAKE1]),
    ("types_hash_max_size", &[HTTP_MAIN_SRV_LOC | NGX_CONF_TAKE1]),
    (
        "underscores_in_headers",
        &[NGX_HTTP_MAIN_CONF | NGX_HTTP_SRV_CONF | NGX_CONF_FLAG],
    ),
    ("uninitialized_variable_warn", &[HTTP_REWRITE | NGX_HTTP_MAIN_CONF | NGX_CONF_FLAG]),
    (
        "upstream",
        &[
            NGX_HTTP_MAIN_CONF | NGX_CONF_BLOCK | NGX_CONF_TAKE1,
            NGX_STREAM_MAIN_CONF | NGX_CONF_BLOCK | NGX_CONF_TAKE1,
        ],
    ),
    ("use", &[NGX_EVENT_CONF | NGX_CONF_TAKE1]),
    ("user", &[NGX_MAIN_CONF | NGX_CONF_TAKE12]),
    ("userid", &[HTTP_MAIN_SRV_LOC | NGX_CONF_TAKE1]),
    ("userid_domain", &[HTTP_MAIN_SRV_LOC | NGX_CONF_TAKE1]),
    ("userid_expires", &[HTTP_MAIN_SRV_LOC | NGX_CONF_TAKE1]),
    ("userid_name", &[HTTP_MAIN_SRV_LOC | NGX_CONF_TAKE1]),
    ("userid_path", &[HTTP_MAIN_SRV_LOC | NGX_CONF_TAKE1]),
    (
        "uwsgi_pass",
        &[NGX_HTTP_LOC_CONF | NGX_HTTP_LIF_CONF | NGX_CONF_TAKE1],
    ),
    ("uwsgi_param", &[HTTP_MAIN_SRV_LOC | NGX_CONF_TAKE23]),
    (
        "valid_referers",
        &[NGX_HTTP_SRV_CONF | NGX_HTTP_LOC_CONF | NGX_CONF_1MORE],
    ),
    ("variables_hash_bucket_size", &[NGX_HTTP_MAIN_CONF | NGX_CONF_TAKE1]),
    ("variables_hash_max_size", &[NGX_HTTP_MAIN_CONF | NGX_CONF_TAKE1]),
    ("worker_aio_requests", &[NGX_EVENT_CONF | NGX_CONF_TAKE1]),
    ("worker_connections", &[NGX_EVENT_CONF | NGX_CONF_TAKE1]),
    ("worker_cpu_affinity", &[NGX_MAIN_CONF | NGX_CONF_1MORE]),
    ("worker_priority", &[NGX_MAIN_CONF | NGX_CONF_TAKE1]),
    ("worker_processes", &[NGX_MAIN_CONF | NGX_CONF_TAKE1]),
    ("worker_rlimit_core", &[NGX_MAIN_CONF | NGX_CONF_TAKE1]),
    ("worker_rlimit_nofile", &[NGX_MAIN_CONF | NGX_CONF_TAKE1]),
    ("worker_shutdown_timeout", &[NGX_MAIN_CONF | NGX_CONF_TAKE1]),
    ("working_directory", &[NGX_MAIN_CONF | NGX_CONF_TAKE1]),
    ("xclient", &[MAIL_MAIN_SRV | NGX_CONF_FLAG]),
    (
        "zone",
        &[NGX_HTTP_UPS_CONF | NGX_STREAM_UPS_CONF | NGX_CONF_TAKE12],
    ),
];

/// OpenResty (lua-nginx-module) directives, registered as an extension on
/// top of the builtin table. The `*_by_lua_block` entries are block openers
/// whose bodies are opaque Lua chunks handled by the special-form lexer.
static LUA_EXTENSION: &[(&str, &[u32])] = &[
    ("access_by_lua_block", &[HTTP_MAIN_SRV_LOC_LIF | NGX_CONF_BLOCK | NGX_CONF_NOARGS]),
    ("access_by_lua_file", &[HTTP_MAIN_SRV_LOC_LIF | NGX_CONF_TAKE1]),
    ("balancer_by_lua_block", &[NGX_HTTP_UPS_CONF | NGX_CONF_BLOCK | NGX_CONF_NOARGS]),
    ("body_filter_by_lua_block", &[HTTP_MAIN_SRV_LOC_LIF | NGX_CONF_BLOCK | NGX_CONF_NOARGS]),
    (
        "content_by_lua_block",
        &[NGX_HTTP_LOC_CONF | NGX_HTTP_LIF_CONF | NGX_CONF_BLOCK | NGX_CONF_NOARGS],
    ),
    (
        "content_by_lua_file",
        &[NGX_HTTP_LOC_CONF | NGX_HTTP_LIF_CONF | NGX_CONF_TAKE1],
    ),
    ("header_filter_by_lua_block", &[HTTP_MAIN_SRV_LOC_LIF | NGX_CONF_BLOCK | NGX_CONF_NOARGS]),
    ("init_by_lua_block", &[NGX_HTTP_MAIN_CONF | NGX_CONF_BLOCK | NGX_CONF_NOARGS]),
    ("init_worker_by_lua_block", &[NGX_HTTP_MAIN_CONF | NGX_CONF_BLOCK | NGX_CONF_NOARGS]),
    ("log_by_lua_block", &[HTTP_MAIN_SRV_LOC_LIF | NGX_CONF_BLOCK | NGX_CONF_NOARGS]),
    ("lua_code_cache", &[HTTP_MAIN_SRV_LOC_LIF | NGX_CONF_FLAG]),
    ("lua_need_request_body", &[HTTP_MAIN_SRV_LOC_LIF | NGX_CONF_FLAG]),
    ("lua_package_cpath", &[NGX_HTTP_MAIN_CONF | NGX_CONF_TAKE1]),
    ("lua_package_path", &[NGX_HTTP_MAIN_CONF | NGX_CONF_TAKE1]),
    ("lua_shared_dict", &[NGX_HTTP_MAIN_CONF | NGX_CONF_TAKE2]),
    ("lua_socket_log_errors", &[HTTP_MAIN_SRV_LOC_LIF | NGX_CONF_FLAG]),
    ("rewrite_by_lua_block", &[HTTP_MAIN_SRV_LOC_LIF | NGX_CONF_BLOCK | NGX_CONF_NOARGS]),
    ("set_by_lua_block", &[HTTP_REWRITE | NGX_CONF_BLOCK | NGX_CONF_TAKE1]),
    ("ssl_certificate_by_lua_block", &[NGX_HTTP_SRV_CONF | NGX_CONF_BLOCK | NGX_CONF_NOARGS]),
    ("ssl_session_fetch_by_lua_block", &[NGX_HTTP_MAIN_CONF | NGX_CONF_BLOCK | NGX_CONF_NOARGS]),
    ("ssl_session_store_by_lua_block", &[NGX_HTTP_MAIN_CONF | NGX_CONF_BLOCK | NGX_CONF_NOARGS]),
];

/// Lookup table from directive name to its legal variants.
#[derive(Debug, Clone)]
pub struct Catalog {
    map: HashMap<String, Vec<u32>>,
}

impl Catalog {
    /// The standard-distribution directives only, without extensions.
    pub fn builtin() -> Self {
        let mut catalog = Catalog {
            map: HashMap::with_capacity(BUILTIN.len() + LUA_EXTENSION.len()),
        };
        for (name, masks) in BUILTIN {
            catalog.register(name, masks);
        }
        catalog
    }

    /// The shared catalog used by default: builtin plus the Lua extension.
    /// Initialized once and safe to share across parse sessions.
    pub fn standard() -> &'static Catalog {
        static STANDARD: OnceLock<Catalog> = OnceLock::new();
        STANDARD.get_or_init(|| {
            let mut catalog = Catalog::builtin();
            for (name, masks) in LUA_EXTENSION {
                catalog.register(name, masks);
            }
            catalog
        })
    }

    /// Registers additional variants for a directive. This is the extension
    /// point for third-party modules; variants accumulate, so a module can
    /// add a new context for an existing name.
    pub fn register(&mut self, name: &str, masks: &[u32]) {
        self.map
            .entry(name.to_string())
            .or_default()
            .extend_from_slice(masks);
    }

    /// All variants registered for `name`, or `None` if unknown.
    pub fn lookup(&self, name: &str) -> Option<&[u32]> {
        self.map.get(name).map(|v| v.as_slice())
    }

    /// Iterator over every registered directive name.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.map.keys().map(|k| k.as_str())
    }

    /// Number of registered directives.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}
