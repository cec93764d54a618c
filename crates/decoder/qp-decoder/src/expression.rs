//! Compiled JMESPath extraction expressions.

use jmespath::{Expression, Variable};
use qp_error::{ConfigError, ParseError};
use qp_types::MessageFormat;
use std::fmt;

/// A JMESPath expression compiled once at configuration time.
///
/// Evaluation only borrows the compiled program, so one instance can be
/// shared by any number of threads decoding messages concurrently.
pub struct CompiledExpression {
    program: Expression<'static>,
    source: String,
}

impl CompiledExpression {
    /// Compile an expression for the given format.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidExpression`] carrying the format, the
    /// expression text and the syntax error if the expression does not parse.
    pub fn compile(format: MessageFormat, source: &str) -> Result<Self, ConfigError> {
        let program = jmespath::compile(source).map_err(|e| ConfigError::InvalidExpression {
            format: format.to_string(),
            expression: source.to_string(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            program,
            source: source.to_string(),
        })
    }

    /// Get the original expression text.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Evaluate against a parsed payload and return the selected string.
    ///
    /// A `null` result (nothing selected) is [`ParseError::NotFound`]; any
    /// other non-string result is [`ParseError::WrongType`].
    pub fn evaluate(&self, data: &serde_json::Value) -> Result<String, ParseError> {
        let result = self
            .program
            .search(data)
            .map_err(|e| ParseError::Evaluation {
                expression: self.source.clone(),
                reason: e.to_string(),
            })?;

        if let Some(path) = result.as_string() {
            return Ok(path.clone());
        }

        if result.is_null() {
            Err(ParseError::NotFound {
                expression: self.source.clone(),
            })
        } else {
            Err(ParseError::WrongType {
                expression: self.source.clone(),
                found: type_name(&result),
            })
        }
    }
}

impl fmt::Debug for CompiledExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompiledExpression")
            .field("source", &self.source)
            .finish_non_exhaustive()
    }
}

/// JMESPath type name of a search result.
fn type_name(value: &Variable) -> &'static str {
    if value.is_null() {
        "null"
    } else if value.is_string() {
        "string"
    } else if value.is_number() {
        "number"
    } else if value.is_boolean() {
        "boolean"
    } else if value.is_array() {
        "array"
    } else if value.is_object() {
        "object"
    } else {
        "expref"
    }
}
