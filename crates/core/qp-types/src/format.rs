//! Queue message formats.

use qp_error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Built-in expression for [`MessageFormat::S3ObjectCreated`].
///
/// Takes the first record of an S3 event notification and joins
/// `s3:/`, the bucket name and the object key with `/`, which yields
/// `s3://bucket/key`.
pub const S3_OBJECT_CREATED_EXPRESSION: &str =
    "Records[*].join('/',['s3:/', s3.bucket.name, s3.object.key]) | [0]";

/// Supported queue message formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MessageFormat {
    /// The message body is the path itself
    #[serde(rename = "plain")]
    Plain,

    /// SNS notification envelope; the path is the `Message` member
    #[serde(rename = "sns")]
    Sns,

    /// Arbitrary JSON; the path is selected by a user expression
    #[serde(rename = "json")]
    Json,

    /// S3 event notification; like `json` with a built-in default expression
    #[serde(rename = "s3::ObjectCreated")]
    S3ObjectCreated,
}

impl MessageFormat {
    /// All supported formats.
    pub const ALL: [MessageFormat; 4] = [
        MessageFormat::Plain,
        MessageFormat::Sns,
        MessageFormat::Json,
        MessageFormat::S3ObjectCreated,
    ];

    /// Returns the configuration identifier of this format.
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageFormat::Plain => "plain",
            MessageFormat::Sns => "sns",
            MessageFormat::Json => "json",
            MessageFormat::S3ObjectCreated => "s3::ObjectCreated",
        }
    }

    /// Returns true if the format cannot work without a user expression.
    pub fn requires_expression(&self) -> bool {
        matches!(self, MessageFormat::Json)
    }

    /// Returns true if the format evaluates an expression against the payload.
    pub fn uses_expression(&self) -> bool {
        matches!(self, MessageFormat::Json | MessageFormat::S3ObjectCreated)
    }

    /// Returns the expression used when none is configured.
    pub fn default_expression(&self) -> Option<&'static str> {
        match self {
            MessageFormat::S3ObjectCreated => Some(S3_OBJECT_CREATED_EXPRESSION),
            _ => None,
        }
    }
}

impl fmt::Display for MessageFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MessageFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MessageFormat::ALL
            .into_iter()
            .find(|format| format.as_str() == s)
            .ok_or_else(|| ConfigError::UnknownFormat {
                format: s.to_string(),
            })
    }
}
