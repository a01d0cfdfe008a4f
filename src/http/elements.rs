//! Structured header value parsing.
//!
//! # Grammar
//! ```text
//! header   = element *( "," element )
//! element  = pair *( ";" pair )
//! pair     = name [ "=" value ]
//! value    = token | quoted-string
//! ```
//!
//! # Design Decisions
//! - Whitespace around names, `=`, values and delimiters is dropped
//! - Quoted values are unquoted and `\x` escapes resolved; delimiters
//!   inside quotes do not split
//! - Empty elements (`a,,b`, blank headers) are dropped, never reported
//! - Parsing never fails; irregular input yields fewer or odder elements

use std::borrow::Cow;
use std::vec;

use hyper::header::{HeaderValue, ValueIter};

/// A `name[=value]` pair, as found at the head of an element or in its
/// `;`-separated parameter list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameValuePair {
    name: String,
    value: Option<String>,
}

impl NameValuePair {
    pub fn new(name: impl Into<String>, value: Option<String>) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// `None` for a bare token, `Some("")` for `name=`.
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }
}

/// One comma-separated unit of a structured header value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderElement {
    pair: NameValuePair,
    params: Vec<NameValuePair>,
}

impl HeaderElement {
    pub fn name(&self) -> &str {
        self.pair.name()
    }

    pub fn value(&self) -> Option<&str> {
        self.pair.value()
    }

    /// Parameters following the leading pair, in header order.
    pub fn params(&self) -> &[NameValuePair] {
        &self.params
    }

    /// First parameter whose name matches case-insensitively.
    pub fn param(&self, name: &str) -> Option<&NameValuePair> {
        self.params
            .iter()
            .find(|p| p.name.eq_ignore_ascii_case(name))
    }
}

/// Which delimiter ended a pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Delimiter {
    Element,
    Param,
    End,
}

struct Cursor<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    fn peek(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    fn at_end(&self) -> bool {
        self.pos >= self.input.len()
    }

    /// Consume a `,` or `;` if one is next.
    fn delimiter(&mut self) -> Delimiter {
        match self.peek() {
            Some(',') => {
                self.bump();
                Delimiter::Element
            }
            Some(';') => {
                self.bump();
                Delimiter::Param
            }
            _ => Delimiter::End,
        }
    }

    fn name(&mut self) -> &'a str {
        let start = self.pos;
        while let Some(c) = self.peek() {
            if matches!(c, '=' | ',' | ';') {
                break;
            }
            self.bump();
        }
        self.input[start..self.pos].trim()
    }

    fn value(&mut self) -> String {
        let mut value = String::new();
        let mut pending_ws = String::new();
        let mut started = false;

        while let Some(c) = self.peek() {
            match c {
                ',' | ';' => break,
                '"' => {
                    self.bump();
                    value.push_str(&pending_ws);
                    pending_ws.clear();
                    started = true;
                    self.quoted(&mut value);
                }
                c if c.is_whitespace() => {
                    self.bump();
                    if started {
                        pending_ws.push(c);
                    }
                }
                c => {
                    self.bump();
                    value.push_str(&pending_ws);
                    pending_ws.clear();
                    started = true;
                    value.push(c);
                }
            }
        }
        value
    }

    /// Copy a quoted string (opening quote already consumed). An
    /// unterminated quote runs to the end of input.
    fn quoted(&mut self, out: &mut String) {
        while let Some(c) = self.bump() {
            match c {
                '"' => return,
                '\\' => {
                    if let Some(escaped) = self.bump() {
                        out.push(escaped);
                    }
                }
                c => out.push(c),
            }
        }
    }

    fn pair(&mut self) -> (NameValuePair, Delimiter) {
        let name = self.name().to_owned();
        let value = if self.peek() == Some('=') {
            self.bump();
            Some(self.value())
        } else {
            None
        };
        (NameValuePair { name, value }, self.delimiter())
    }

    fn element(&mut self) -> Option<HeaderElement> {
        let (pair, mut delimiter) = self.pair();
        let mut params = Vec::new();
        while delimiter == Delimiter::Param {
            let (param, next) = self.pair();
            if !param.name.is_empty() || param.value.is_some() {
                params.push(param);
            }
            delimiter = next;
        }

        if pair.name.is_empty() && pair.value.is_none() {
            return None;
        }
        Some(HeaderElement { pair, params })
    }
}

/// Split one header value into its elements.
pub fn parse_elements(input: &str) -> Vec<HeaderElement> {
    let mut cursor = Cursor::new(input);
    let mut elements = Vec::new();
    while !cursor.at_end() {
        if let Some(element) = cursor.element() {
            elements.push(element);
        }
    }
    elements
}

/// Lazily yields the elements of every occurrence of a header, in header
/// order and left to right within each occurrence.
#[derive(Debug)]
pub struct HeaderElementIter<'a> {
    values: ValueIter<'a, HeaderValue>,
    pending: vec::IntoIter<HeaderElement>,
}

impl<'a> HeaderElementIter<'a> {
    pub fn new(values: ValueIter<'a, HeaderValue>) -> Self {
        Self {
            values,
            pending: Vec::new().into_iter(),
        }
    }
}

impl Iterator for HeaderElementIter<'_> {
    type Item = HeaderElement;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(element) = self.pending.next() {
                return Some(element);
            }
            let value = self.values.next()?;
            self.pending = parse_elements(&header_text(value)).into_iter();
        }
    }
}

/// Header bytes as text. Non-ASCII (obs-text) bytes are replaced rather
/// than rejected.
fn header_text(value: &HeaderValue) -> Cow<'_, str> {
    match value.to_str() {
        Ok(s) => Cow::Borrowed(s),
        Err(_) => String::from_utf8_lossy(value.as_bytes()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hyper::header::HeaderMap;

    fn names(input: &str) -> Vec<String> {
        parse_elements(input)
            .into_iter()
            .map(|e| e.name().to_owned())
            .collect()
    }

    #[test]
    fn splits_on_commas_and_trims() {
        let elements = parse_elements(" timeout = 20 ,  max=5");
        assert_eq!(elements.len(), 2);
        assert_eq!(elements[0].name(), "timeout");
        assert_eq!(elements[0].value(), Some("20"));
        assert_eq!(elements[1].name(), "max");
        assert_eq!(elements[1].value(), Some("5"));
    }

    #[test]
    fn bare_token_has_no_value() {
        let elements = parse_elements("timeout");
        assert_eq!(elements[0].name(), "timeout");
        assert_eq!(elements[0].value(), None);
    }

    #[test]
    fn empty_value_is_present_but_empty() {
        let elements = parse_elements("timeout=");
        assert_eq!(elements[0].value(), Some(""));
    }

    #[test]
    fn params_follow_semicolons() {
        let elements = parse_elements("timeout=5; Foo=bar; baz, max=2");
        assert_eq!(elements.len(), 2);
        let first = &elements[0];
        assert_eq!(first.value(), Some("5"));
        assert_eq!(first.params().len(), 2);
        assert_eq!(first.param("foo").and_then(|p| p.value()), Some("bar"));
        assert_eq!(first.param("BAZ").map(|p| p.value()), Some(None));
        assert_eq!(elements[1].name(), "max");
    }

    #[test]
    fn quoted_values_keep_delimiters() {
        let elements = parse_elements(r#"a="x, y; z", b="say \"hi\"""#);
        assert_eq!(elements.len(), 2);
        assert_eq!(elements[0].value(), Some("x, y; z"));
        assert_eq!(elements[1].value(), Some(r#"say "hi""#));
    }

    #[test]
    fn unterminated_quote_runs_to_end() {
        let elements = parse_elements(r#"a="open, b=1"#);
        assert_eq!(elements.len(), 1);
        assert_eq!(elements[0].value(), Some("open, b=1"));
    }

    #[test]
    fn empty_elements_are_dropped() {
        assert_eq!(names("a,,b, ,c"), vec!["a", "b", "c"]);
        assert!(parse_elements("").is_empty());
        assert!(parse_elements("  ,  ").is_empty());
    }

    #[test]
    fn inner_whitespace_in_tokens_is_kept() {
        let elements = parse_elements("a = one two ");
        assert_eq!(elements[0].value(), Some("one two"));
    }

    #[test]
    fn iterates_across_occurrences_in_order() {
        let mut headers = HeaderMap::new();
        headers.append("keep-alive", HeaderValue::from_static("max=5, a=1"));
        headers.append("keep-alive", HeaderValue::from_static("timeout=7"));

        let collected: Vec<String> =
            HeaderElementIter::new(headers.get_all("keep-alive").iter())
                .map(|e| e.name().to_owned())
                .collect();
        assert_eq!(collected, vec!["max", "a", "timeout"]);
    }

    #[test]
    fn obs_text_does_not_abort_iteration() {
        let mut headers = HeaderMap::new();
        headers.append(
            "keep-alive",
            HeaderValue::from_bytes(b"x=\xff, timeout=3").unwrap(),
        );

        let elements: Vec<HeaderElement> =
            HeaderElementIter::new(headers.get_all("keep-alive").iter()).collect();
        assert_eq!(elements.len(), 2);
        assert_eq!(elements[1].value(), Some("3"));
    }
}
