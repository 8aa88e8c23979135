use origin_gate::HeaderSet;

pub fn header_value<'a>(headers: &'a HeaderSet, name: &str) -> Option<&'a str> {
    headers.get(name)
}

pub fn has_header(headers: &HeaderSet, name: &str) -> bool {
    header_value(headers, name).is_some()
}

pub fn header_pairs(headers: &HeaderSet) -> Vec<(String, String)> {
    headers
        .iter()
        .map(|(name, value)| (name.to_string(), value.to_string()))
        .collect()
}
