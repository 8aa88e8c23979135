use crate::constants::DEFAULT_EXPOSE_HEADERS;
use std::collections::HashSet;
use std::ops::Deref;

/// Response headers readable by client scripts, as sent in
/// `Access-Control-Expose-Headers`.
///
/// Always starts with [`DEFAULT_EXPOSE_HEADERS`]; configured entries follow in
/// their given order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExposedHeaders {
    values: Vec<String>,
    header_value: Option<String>,
}

impl Default for ExposedHeaders {
    fn default() -> Self {
        Self::with_defaults(std::iter::empty::<String>())
    }
}

impl ExposedHeaders {
    /// Builds the baseline list followed by `custom`, trimming whitespace,
    /// skipping blanks and dropping case-insensitive duplicates.
    pub fn with_defaults<I, S>(custom: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut seen = HashSet::new();
        let mut values: Vec<String> = Vec::new();

        let baseline = DEFAULT_EXPOSE_HEADERS.iter().map(|name| (*name).to_owned());
        for value in baseline.chain(custom.into_iter().map(Into::into)) {
            let trimmed = value.trim();
            if trimmed.is_empty() {
                continue;
            }

            if seen.insert(trimmed.to_ascii_lowercase()) {
                values.push(trimmed.to_owned());
            }
        }

        let header_value = if values.is_empty() {
            None
        } else {
            Some(values.join(", "))
        };

        Self {
            values,
            header_value,
        }
    }

    /// The serialized header value, joined with `", "`.
    pub fn header_value(&self) -> Option<&str> {
        self.header_value.as_deref()
    }
}

impl Deref for ExposedHeaders {
    type Target = [String];

    fn deref(&self) -> &Self::Target {
        &self.values
    }
}

#[cfg(test)]
#[path = "exposed_headers_test.rs"]
mod exposed_headers_test;
