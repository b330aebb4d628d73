#![doc = include_str!("../README.md")]

/// RFC 5536 Article Format
pub mod article;
/// Negotiated server capability set
pub mod capabilities;
/// Contract-enforcing client session
pub mod client;
/// NNTP command builders and response parsers
pub mod commands;
/// Harness configuration
pub mod config;
/// Transport-agnostic line/block framing shared by client, server, and peering
pub mod codec;
/// Error and result types
pub mod error;
/// Probe article identity generation (unique message-ids, dates)
pub mod probe;
/// Loopback peering server
pub mod peering;
/// NNTP response codes and parsed-response types
pub mod response;
/// Test registry and outcome recording
pub mod runner;
/// Server session handling IHAVE/CHECK/TAKETHIS
pub mod server;
/// Cooperative shutdown coordination
pub mod shutdown;
/// RFC 5536 article validation utilities
pub mod validation;
/// Wildmat pattern compilation
pub mod wildmat;

pub use article::{parse_article, parse_headers, Article, ArticleBuilder, Headers};
pub use capabilities::Capabilities;
pub use client::{
    ArticleRef, CheckResult, ClientSession, Credentials, HdrSelector, OverSelector, PostResult,
    SessionState, TakeThisResult,
};
pub use codec::LineCodec;
pub use commands::{DistributionInfo, HdrEntry, ModeratorInfo, XoverEntry};
pub use config::{Config, ServerConfig};
pub use error::{NntpError, Result};
pub use peering::{LoopbackState, PeeringServer};
pub use response::{codes, NntpResponse};
pub use runner::{BoxFuture, LoggingReporter, OutcomeRecorder, Reporter, TestRegistry, TestReport};
pub use server::{PeeringBackend, ServerFeatures, ServerSession};
pub use shutdown::{OutstandingGuard, ShutdownToken};
pub use validation::{
    parse_date, validate_date, validate_message_id, validate_newsgroup_name, ValidationConfig,
};
pub use wildmat::Wildmat;
