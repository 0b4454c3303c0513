//! Directive builders for the Janus ingress compiler
//!
//! Pure, side-effect-free functions turning the routing model into the
//! literal NGINX directive text spliced into the rendered configuration.
//! Each builder consumes a slice of the model and returns a string or an
//! ordered sequence of statements; concatenation and interpolation into the
//! full document are left entirely to the rendering layer, which calls each
//! builder once per routing entity.
//!
//! Statement order within one location's output is a correctness contract:
//! rewrites, then the forwarded-prefix header, then `proxy_pass`, then the
//! base-href injection. Ordering between different locations is irrelevant,
//! so a render pass may invoke these builders concurrently.
//!
//! # Module Organization
//!
//! - [`location`]: Location selector patterns and proxy-pass blocks
//! - [`auth`]: External-auth locations, response headers, and sign URLs
//! - [`rate_limit`]: Rate limit directive emission
//! - [`upstream`]: Upstream retry-condition merging
//! - [`net`]: Address formatting and resolver directives
//! - [`vars`]: NGINX variable naming
//! - [`buffers`]: Buffer-size value validation

pub mod auth;
pub mod buffers;
pub mod location;
pub mod net;
pub mod rate_limit;
pub mod upstream;
pub mod vars;

pub use auth::{build_auth_location, build_auth_response_headers, build_auth_sign_url};
pub use buffers::is_valid_client_body_buffer_size;
pub use location::{build_location, build_proxy_pass};
pub use net::{build_resolvers, format_ip};
pub use rate_limit::build_rate_limit;
pub use upstream::build_next_upstream;
pub use vars::{build_deny_variable, build_forwarded_for};
