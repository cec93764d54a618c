//! qp-decoder - resolves queue message payloads to S3 object paths.
//!
//! A queue-backed ingestion input receives message bodies in one of several
//! shapes and needs a single object path out of each. This crate provides:
//!
//! - [`MessageDecoder`]: validates the configured format once, compiles any
//!   extraction expression once, then decodes payloads with `&self` only
//! - [`PathFilter`]: optional glob filtering of resolved paths
//! - [`DecodeStats`]: lock-free outcome counters shared by workers
//! - [`PayloadReader`]: reads captured payloads from files or stdin
//!
//! # Formats
//!
//! | Format | Path |
//! |--------|------|
//! | `plain` | the payload itself |
//! | `sns` | the `Message` member of an SNS envelope |
//! | `json` | the string selected by a JMESPath expression (required) |
//! | `s3::ObjectCreated` | like `json`, defaulting to `s3://<bucket>/<key>` of the first record |
//!
//! # Example
//!
//! ```
//! use qp_decoder::MessageDecoder;
//! use qp_types::DecoderConfig;
//!
//! let config = DecoderConfig::new("json").with_expression("Foo.Bar");
//! let decoder = MessageDecoder::new(&config).unwrap();
//!
//! let path = decoder.decode(r#"{"Foo":{"Bar":"s3://b/p"}}"#).unwrap();
//! assert_eq!(path, "s3://b/p");
//!
//! // A bad message is an error value, the decoder keeps working
//! assert!(decoder.decode(r#"{"Foo":{}}"#).is_err());
//! ```

pub mod decoder;
pub mod expression;
pub mod filter;
pub mod reader;
pub mod sns;
pub mod stats;

pub use decoder::{MessageDecoder, Resolved};
pub use expression::CompiledExpression;
pub use filter::PathFilter;
pub use reader::{LineMode, PayloadReader};
pub use stats::{DecodeStats, StatsSnapshot};

// Re-export configuration and error types for convenience
pub use qp_error::{ConfigError, ParseError};
pub use qp_types::{DecoderConfig, MessageFormat};
