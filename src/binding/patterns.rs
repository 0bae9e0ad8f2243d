//! Compiled step-kind patterns.

use regex::Regex;

use crate::error::ConfigError;

/// How a call token relates to the configured patterns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenClass {
    /// The token is a step kind.
    Step,
    /// The token is the continuation token.
    Continuation,
    /// The token matches neither pattern.
    Unknown,
}

impl TokenClass {
    /// A lowercase label for display.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Step => "step",
            Self::Continuation => "continuation",
            Self::Unknown => "unknown",
        }
    }
}

/// The configured step and continuation fragments, compiled once.
///
/// Fragments are raw alternations such as `given|when|then`; they are embedded
/// in anchored or capturing expressions here and never used bare.
#[derive(Debug, Clone)]
pub struct StepPatterns {
    steps_source: String,
    continuation_source: String,
    step_token: Regex,
    continuation_token: Regex,
    annotation: Regex,
    method_name: Regex,
}

impl StepPatterns {
    /// Compiles the steps and continuation fragments.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] naming the offending field when a
    /// fragment is empty or is not a valid regular expression.
    pub fn new(steps: &str, continuation: &str) -> Result<Self, ConfigError> {
        let step_token = compile("steps_pattern", steps, &format!("^(?:{steps})$"))?;
        let annotation = compile(
            "steps_pattern",
            steps,
            &format!(r"@(?P<kind>{steps})[ \t]+(?P<description>[^\r\n]+)"),
        )?;
        let method_name = compile(
            "steps_pattern",
            steps,
            &format!("^(?P<kind>{steps})_(?P<rest>.+)$"),
        )?;
        let continuation_token = compile(
            "continuation_pattern",
            continuation,
            &format!("^(?:{continuation})$"),
        )?;

        Ok(Self {
            steps_source: steps.to_owned(),
            continuation_source: continuation.to_owned(),
            step_token,
            continuation_token,
            annotation,
            method_name,
        })
    }

    /// The raw steps fragment as configured.
    #[must_use]
    pub fn steps_source(&self) -> &str {
        &self.steps_source
    }

    /// The raw continuation fragment as configured.
    #[must_use]
    pub fn continuation_source(&self) -> &str {
        &self.continuation_source
    }

    /// Whether `token` is, in its entirety, a continuation token.
    #[must_use]
    pub fn is_continuation(&self, token: &str) -> bool {
        self.continuation_token.is_match(token)
    }

    /// Whether `token` is, in its entirety, a step kind.
    #[must_use]
    pub fn is_step(&self, token: &str) -> bool {
        self.step_token.is_match(token)
    }

    /// Classifies a call token. Continuation wins when both patterns match.
    #[must_use]
    pub fn classify(&self, token: &str) -> TokenClass {
        if self.is_continuation(token) {
            TokenClass::Continuation
        } else if self.is_step(token) {
            TokenClass::Step
        } else {
            TokenClass::Unknown
        }
    }

    /// Every `@<kind> <description>` annotation in a documentation text.
    pub(crate) fn annotations<'t>(
        &self,
        doc: &'t str,
    ) -> impl Iterator<Item = (&'t str, &'t str)> {
        self.annotation.captures_iter(doc).filter_map(|caps| {
            let kind = caps.name("kind")?.as_str();
            let description = caps.name("description")?.as_str().trim_end();
            Some((kind, description))
        })
    }

    /// Splits a `<kind>_<rest>` method name into kind and description.
    pub(crate) fn method_name_binding(&self, name: &str) -> Option<(String, String)> {
        let caps = self.method_name.captures(name)?;
        let kind = caps.name("kind")?.as_str().to_owned();
        let rest = caps.name("rest")?.as_str().replace('_', " ");
        Some((kind, rest))
    }
}

/// Compiles an expression built from a configured fragment.
fn compile(field: &str, fragment: &str, expression: &str) -> Result<Regex, ConfigError> {
    if fragment.trim().is_empty() {
        return Err(ConfigError::InvalidValue {
            field: field.to_owned(),
            reason: String::from("pattern must not be empty"),
        });
    }
    Regex::new(expression).map_err(|error| ConfigError::InvalidValue {
        field: field.to_owned(),
        reason: format!("invalid pattern '{fragment}': {error}"),
    })
}
