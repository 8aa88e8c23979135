use crate::constants::header;
use indexmap::IndexMap;

/// Ordered response headers produced for one request.
///
/// Names are the canonical spellings from [`constants::header`](crate::constants::header);
/// lookups ignore ASCII case.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct HeaderSet {
    headers: IndexMap<&'static str, String>,
}

impl HeaderSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            headers: IndexMap::with_capacity(capacity),
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.headers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.headers.is_empty()
    }

    /// Headers in emission order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        self.headers
            .iter()
            .map(|(name, value)| (*name, value.as_str()))
    }

    pub(crate) fn push(&mut self, name: &'static str, value: String) {
        if name.eq_ignore_ascii_case(header::VARY) {
            self.add_vary(value);
        } else {
            self.headers.insert(name, value);
        }
    }

    pub(crate) fn add_vary<S: Into<String>>(&mut self, value: S) {
        let mut entries: Vec<String> = self
            .headers
            .get(header::VARY)
            .map(|existing| {
                existing
                    .split(',')
                    .map(|part| part.trim().to_string())
                    .filter(|part| !part.is_empty())
                    .collect()
            })
            .unwrap_or_default();

        let incoming = value.into().trim().to_string();
        if !incoming.is_empty() {
            entries.push(incoming);
        }

        if entries.is_empty() {
            self.headers.shift_remove(header::VARY);
            return;
        }

        let mut deduped: Vec<String> = Vec::with_capacity(entries.len());
        for entry in entries {
            if deduped
                .iter()
                .any(|existing| existing.eq_ignore_ascii_case(&entry))
            {
                continue;
            }
            deduped.push(entry);
        }

        self.headers.insert(header::VARY, deduped.join(", "));
    }

    pub(crate) fn extend(&mut self, other: HeaderSet) {
        for (name, value) in other.headers {
            self.push(name, value);
        }
    }
}

impl IntoIterator for HeaderSet {
    type Item = (&'static str, String);
    type IntoIter = indexmap::map::IntoIter<&'static str, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.headers.into_iter()
    }
}

#[cfg(test)]
#[path = "headers_test.rs"]
mod headers_test;
