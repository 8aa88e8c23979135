use crate::constants::origin::WILDCARD;
use crate::options::ConfigError;
use indexmap::IndexSet;
use regex_automata::meta::Regex;
use std::fmt;

const MAX_PATTERN_LENGTH: usize = 2_048;
const MAX_ORIGIN_LENGTH: usize = 4_096;
/// Literal host labels required after the last `*` of a host glob.
const MIN_PARENT_LABELS: usize = 2;
/// What a single `*` in a configured origin expands to: host labels or port digits.
const GLOB_SEGMENT: &str = "[A-Za-z0-9.-]+";

/// Normalized origin allowance of a policy.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Origin {
    /// Every origin is allowed. Never paired with credentials.
    Any,
    List(OriginList),
}

impl Default for Origin {
    fn default() -> Self {
        Self::List(OriginList::default())
    }
}

impl Origin {
    /// Normalizes configured origin entries.
    ///
    /// Entries are trimmed and blank ones skipped. A lone `"*"` anywhere in the
    /// list makes the result [`Origin::Any`]; other entries containing `*` are
    /// compiled as glob patterns, even when the wildcard wins, so that a broken
    /// pattern is always reported.
    pub fn from_entries<I, S>(entries: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut list = OriginList::default();
        let mut any = false;

        for entry in entries {
            let entry = entry.as_ref().trim();
            if entry.is_empty() {
                continue;
            }

            if entry == WILDCARD {
                any = true;
            } else if entry.contains('*') {
                list.push_pattern(OriginPattern::glob(entry)?);
            } else {
                if entry.len() > MAX_ORIGIN_LENGTH {
                    return Err(ConfigError::InvalidOrigin {
                        origin: entry.to_owned(),
                        reason: format!(
                            "length {} exceeds maximum allowed {}",
                            entry.len(),
                            MAX_ORIGIN_LENGTH
                        ),
                    });
                }
                list.exact.insert(entry.to_owned());
            }
        }

        if any {
            Ok(Self::Any)
        } else {
            Ok(Self::List(list))
        }
    }

    pub fn is_any(&self) -> bool {
        matches!(self, Self::Any)
    }

    /// Whether a request carrying `candidate` as its `Origin` is authorized.
    pub fn allows(&self, candidate: &str) -> bool {
        if candidate.len() > MAX_ORIGIN_LENGTH {
            return false;
        }

        match self {
            Self::Any => true,
            Self::List(list) => list.contains(candidate),
        }
    }
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Any => f.write_str(WILDCARD),
            Self::List(list) => {
                let entries = list
                    .exact()
                    .chain(list.patterns().map(OriginPattern::as_str))
                    .collect::<Vec<_>>();
                f.write_str(&entries.join(", "))
            }
        }
    }
}

/// Explicit origins: an exact-match set plus compiled glob patterns.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OriginList {
    exact: IndexSet<String>,
    patterns: Vec<OriginPattern>,
}

impl OriginList {
    pub fn contains(&self, candidate: &str) -> bool {
        self.exact.contains(candidate)
            || self
                .patterns
                .iter()
                .any(|pattern| pattern.matches(candidate))
    }

    pub fn exact(&self) -> impl Iterator<Item = &str> {
        self.exact.iter().map(String::as_str)
    }

    pub fn patterns(&self) -> impl Iterator<Item = &OriginPattern> {
        self.patterns.iter()
    }

    fn push_pattern(&mut self, pattern: OriginPattern) {
        if !self.patterns.contains(&pattern) {
            self.patterns.push(pattern);
        }
    }
}

/// A configured origin containing `*`, e.g. `https://*.example.com`.
///
/// A `*` may stand for host labels in front of a literal parent domain of at
/// least two labels, or for the port. The scheme is always literal.
#[derive(Clone, Debug)]
pub struct OriginPattern {
    source: String,
    regex: Regex,
}

impl OriginPattern {
    pub fn glob(pattern: &str) -> Result<Self, ConfigError> {
        if pattern.len() > MAX_PATTERN_LENGTH {
            return Err(ConfigError::InvalidOriginPattern {
                pattern: pattern.to_owned(),
                reason: format!(
                    "length {} exceeds maximum allowed {}",
                    pattern.len(),
                    MAX_PATTERN_LENGTH
                ),
            });
        }

        check_glob_shape(pattern).map_err(|reason| ConfigError::InvalidOriginPattern {
            pattern: pattern.to_owned(),
            reason,
        })?;

        let body = pattern
            .split('*')
            .map(escape_literal)
            .collect::<Vec<_>>()
            .join(GLOB_SEGMENT);
        let regex = Regex::new(&format!("^{body}$")).map_err(|err| {
            ConfigError::InvalidOriginPattern {
                pattern: pattern.to_owned(),
                reason: err.to_string(),
            }
        })?;

        Ok(Self {
            source: pattern.to_owned(),
            regex,
        })
    }

    pub fn matches(&self, candidate: &str) -> bool {
        self.regex.is_match(candidate.as_bytes())
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }
}

impl PartialEq for OriginPattern {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source
    }
}

impl Eq for OriginPattern {}

fn check_glob_shape(pattern: &str) -> Result<(), String> {
    let Some((scheme, authority)) = pattern.split_once("://") else {
        return Err("expected `scheme://host[:port]`".into());
    };
    if scheme.is_empty() || scheme.contains('*') {
        return Err("the scheme must be literal".into());
    }
    if authority.contains(['/', '@']) {
        return Err("only scheme, host and port are allowed".into());
    }

    let (host, port) = match authority.rsplit_once(':') {
        Some((host, port)) => (host, Some(port)),
        None => (authority, None),
    };
    if let Some(port) = port
        && port != "*"
        && (port.is_empty() || !port.bytes().all(|byte| byte.is_ascii_digit()))
    {
        return Err("the port must be digits or a single `*`".into());
    }
    if host.is_empty() {
        return Err("the host is empty".into());
    }

    if let Some(star) = host.rfind('*') {
        let parent_labels = host[star + 1..]
            .strip_prefix('.')
            .map(|parent| parent.split('.').collect::<Vec<_>>())
            .unwrap_or_default();
        if parent_labels.len() < MIN_PARENT_LABELS
            || parent_labels.iter().any(|label| label.is_empty())
        {
            return Err(format!(
                "a host `*` must be followed by at least {MIN_PARENT_LABELS} literal labels, e.g. `*.example.com`"
            ));
        }
    }

    Ok(())
}

fn escape_literal(segment: &str) -> String {
    let mut escaped = String::with_capacity(segment.len());
    for ch in segment.chars() {
        if matches!(
            ch,
            '\\' | '.' | '+' | '?' | '(' | ')' | '|' | '[' | ']' | '{' | '}' | '^' | '$'
        ) {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}

#[cfg(test)]
#[path = "origin_test.rs"]
mod origin_test;
