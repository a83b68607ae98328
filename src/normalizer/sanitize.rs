use html_escape::decode_html_entities;

/// Resolve numeric and named HTML character references to their literal
/// characters. Nothing else about the input changes.
pub fn sanitize(raw: &str) -> String {
    decode_html_entities(raw).into_owned()
}
