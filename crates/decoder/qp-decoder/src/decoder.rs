//! MessageDecoder - resolves queue message payloads to object paths.

use crate::expression::CompiledExpression;
use crate::filter::PathFilter;
use crate::sns;
use qp_error::{ConfigError, ParseError};
use qp_types::{DecoderConfig, MessageFormat};
use tracing::{debug, trace, warn};

/// Per-format decoding strategy, fixed at construction.
#[derive(Debug)]
enum Strategy {
    /// Payload is the path
    Plain,

    /// Path is the `Message` member of an SNS envelope
    Sns,

    /// Path is selected from JSON by a compiled expression
    Expression(CompiledExpression),
}

/// Outcome of resolving a payload against the decoder and its path filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolved {
    /// The path passed the filter and should be ingested
    Accepted(String),

    /// The path was decoded but filtered out; acknowledge without ingesting
    Skipped(String),
}

impl Resolved {
    /// Get the resolved path regardless of the filter decision.
    pub fn path(&self) -> &str {
        match self {
            Resolved::Accepted(path) | Resolved::Skipped(path) => path,
        }
    }

    /// Consume and return the resolved path.
    pub fn into_path(self) -> String {
        match self {
            Resolved::Accepted(path) | Resolved::Skipped(path) => path,
        }
    }

    /// Returns true if the path passed the filter.
    pub fn is_accepted(&self) -> bool {
        matches!(self, Resolved::Accepted(_))
    }
}

/// Decoder that turns raw queue message bodies into object paths.
///
/// All configuration is validated and compiled by [`MessageDecoder::new`];
/// afterwards the decoder is read-only and can be shared across worker
/// threads (e.g. in an `Arc`) without locking.
#[derive(Debug)]
pub struct MessageDecoder {
    format: MessageFormat,
    strategy: Strategy,
    filter: PathFilter,
}

impl MessageDecoder {
    /// Creates a new decoder from configuration.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if:
    /// - The format identifier is not supported
    /// - The format is `json` and no expression is given
    /// - The expression fails to compile
    /// - A path filter pattern fails to compile
    pub fn new(config: &DecoderConfig) -> Result<Self, ConfigError> {
        let format: MessageFormat = config.format.parse()?;

        let strategy = match format {
            MessageFormat::Plain | MessageFormat::Sns => {
                if let Some(expression) = config.expression() {
                    warn!(%format, expression, "Ignoring expression, format does not use one");
                }
                if format == MessageFormat::Plain {
                    Strategy::Plain
                } else {
                    Strategy::Sns
                }
            }
            MessageFormat::Json | MessageFormat::S3ObjectCreated => {
                let expression = config
                    .expression()
                    .or_else(|| format.default_expression())
                    .ok_or_else(|| ConfigError::MissingExpression {
                        format: format.to_string(),
                    })?;
                Strategy::Expression(CompiledExpression::compile(format, expression)?)
            }
        };

        let filter = PathFilter::new(&config.path_filters)?;

        debug!(
            %format,
            expression = ?config.expression(),
            path_filters = ?filter.patterns(),
            "Created MessageDecoder"
        );

        Ok(Self {
            format,
            strategy,
            filter,
        })
    }

    /// Get the configured message format.
    pub fn format(&self) -> MessageFormat {
        self.format
    }

    /// Get the expression in effect, if the format uses one.
    pub fn expression(&self) -> Option<&str> {
        match &self.strategy {
            Strategy::Expression(expression) => Some(expression.source()),
            Strategy::Plain | Strategy::Sns => None,
        }
    }

    /// Decode one payload into an object path.
    ///
    /// - `plain`: the payload verbatim (including an empty payload)
    /// - `sns`: the string `Message` member of the envelope, verbatim
    /// - `json` / `s3::ObjectCreated`: the string selected by the expression
    ///
    /// A failure only concerns this payload; the decoder stays usable.
    pub fn decode(&self, payload: &str) -> Result<String, ParseError> {
        let path = match &self.strategy {
            Strategy::Plain => payload.to_string(),
            Strategy::Sns => sns::extract_message(payload)?,
            Strategy::Expression(expression) => {
                let data: serde_json::Value = serde_json::from_str(payload)
                    .map_err(|e| ParseError::InvalidJson(e.to_string()))?;
                expression.evaluate(&data)?
            }
        };

        trace!(format = %self.format, path = %path, "Decoded message");
        Ok(path)
    }

    /// Decode one payload and apply the path filter.
    pub fn resolve(&self, payload: &str) -> Result<Resolved, ParseError> {
        let path = self.decode(payload)?;

        if self.filter.matches(&path) {
            Ok(Resolved::Accepted(path))
        } else {
            debug!(path = %path, "Path does not match any filter, skipping");
            Ok(Resolved::Skipped(path))
        }
    }

    /// Check if a path passes the configured filter.
    pub fn accepts(&self, path: &str) -> bool {
        self.filter.matches(path)
    }
}
