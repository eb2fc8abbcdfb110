//! Configuration for the instrumentation pass.
//!
//! The host passes the plugin entry from its compiler configuration, e.g.
//!
//! ```json
//! { "transform": "labeltrace", "skipInstrumented": true }
//! ```
//!
//! Fields the pass does not know (such as `transform`) are ignored.

use labeltrace_foundation::{Error, ErrorContext, Result};
use serde::{Deserialize, Serialize};

/// Configuration for the instrumentation pass.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PassConfig {
    /// Leave a labeled function alone if it already carries the
    /// `instrument:` marker. Off by default, in which case every match is
    /// wrapped again.
    pub skip_instrumented: bool,
}

impl PassConfig {
    /// Decodes a configuration from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`labeltrace_foundation::ErrorKind::InvalidConfig`] if the text
    /// is not valid JSON or a known field has the wrong type.
    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).map_err(|e| {
            let (line, column) = (e.line(), e.column());
            Error::invalid_config(e.to_string())
                .with_context(ErrorContext::new().with_position(line, column))
        })
    }

    /// Decodes a configuration from an already-parsed JSON value.
    ///
    /// # Errors
    ///
    /// Returns [`labeltrace_foundation::ErrorKind::InvalidConfig`] if a known
    /// field has the wrong type.
    pub fn from_value(value: serde_json::Value) -> Result<Self> {
        serde_json::from_value(value).map_err(|e| Error::invalid_config(e.to_string()))
    }

    /// Encodes this configuration as JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`labeltrace_foundation::ErrorKind::Serialization`] if encoding fails.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| Error::serialization(e.to_string()))
    }

    /// Builder method to enable/disable the already-instrumented guard.
    #[must_use]
    pub fn with_skip_instrumented(mut self, skip: bool) -> Self {
        self.skip_instrumented = skip;
        self
    }
}
