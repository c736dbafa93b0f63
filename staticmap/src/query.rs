//! Building blocks of the query string.

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

/// Characters HTTP clients escape in the query on their own. The signed URL must be the one
/// which is sent.
const QUERY: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'<')
    .add(b'>')
    .add(b'\'');

/// Separator between attributes and locations inside a single parameter value.
pub(crate) const SEPARATOR: &str = "|";

/// Escape a value so it can be put into the query. Spaces become `+`.
pub(crate) fn escape(value: &str) -> String {
    url::form_urlencoded::byte_serialize(value.as_bytes()).collect()
}

/// Ordered `name:value` attributes of a marker or a path.
#[derive(Default)]
pub(crate) struct Attributes(Vec<(&'static str, String)>);

impl Attributes {
    /// Add attribute, escaping its value. Does nothing if the value is not set.
    pub fn push(&mut self, name: &'static str, value: Option<impl ToString>) {
        if let Some(value) = value {
            self.0.push((name, escape(&value.to_string())));
        }
    }

    /// Add attribute which is a URL. Only characters which are never valid in the query are
    /// escaped, so `:`, `/`, `?` and `=` stay readable for Google.
    pub fn push_url(&mut self, name: &'static str, value: Option<&str>) {
        if let Some(value) = value {
            self.0.push((name, utf8_percent_encode(value, QUERY).to_string()));
        }
    }

    /// `name:value` tokens, sorted by name.
    pub fn into_tokens(mut self) -> Vec<String> {
        self.0.sort_by_key(|(name, _)| *name);
        self.0
            .into_iter()
            .map(|(name, value)| format!("{name}:{value}"))
            .collect()
    }
}

/// Ordered `name=value` query parameters. Values are expected to be escaped already.
#[derive(Default)]
pub(crate) struct Params(Vec<(&'static str, String)>);

impl Params {
    pub fn push(&mut self, name: &'static str, value: String) {
        self.0.push((name, value));
    }

    /// Sort by name. Parameters with the same name keep their order.
    pub fn sorted(mut self) -> Self {
        self.0.sort_by_key(|(name, _)| *name);
        self
    }

    pub fn join(&self) -> String {
        self.0
            .iter()
            .map(|(name, value)| format!("{name}={value}"))
            .collect::<Vec<_>>()
            .join("&")
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escaping_uses_plus_for_spaces() {
        assert_eq!("Washington%2C+DC", escape("Washington, DC"));
        assert_eq!("a%7Cb%3Ac", escape("a|b:c"));
        assert_eq!("0xFF0000FF", escape("0xFF0000FF"));
        assert_eq!("-77.5", escape("-77.5"));
    }

    #[test]
    fn attributes_are_sorted_and_unset_ones_skipped() {
        let mut attributes = Attributes::default();
        attributes.push("size", Some("tiny"));
        attributes.push("color", Some("light blue"));
        attributes.push("label", None::<char>);
        attributes.push_url("icon", Some("http://example.com/a b.png"));

        assert_eq!(
            vec![
                "color:light+blue".to_owned(),
                "icon:http://example.com/a%20b.png".to_owned(),
                "size:tiny".to_owned(),
            ],
            attributes.into_tokens()
        );
    }

    #[test]
    fn urls_keep_their_structure() {
        let mut attributes = Attributes::default();
        attributes.push_url("icon", Some("https://example.com/my icon.png?size=2&q=\"#<x>'"));

        assert_eq!(
            vec!["icon:https://example.com/my%20icon.png?size=2&q=%22%23%3Cx%3E%27".to_owned()],
            attributes.into_tokens()
        );
    }

    #[test]
    fn sorting_params_is_stable() {
        let mut params = Params::default();
        params.push("path", "1".to_owned());
        params.push("markers", "2".to_owned());
        params.push("path", "3".to_owned());
        params.push("center", "4".to_owned());
        params.push("markers", "5".to_owned());

        assert_eq!(
            "center=4&markers=2&markers=5&path=1&path=3",
            params.sorted().join()
        );
    }
}
