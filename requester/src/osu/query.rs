use std::fmt::Display;
use url::form_urlencoded::Serializer;

/// Query of a single api call, `k` first and then the parameters in the order they are pushed
#[derive(Debug, Clone)]
pub struct Query {
    endpoint: &'static str,
    key: String,
    params: Vec<(&'static str, String)>,
}

impl Query {
    pub fn new(endpoint: &'static str, key: &str) -> Self {
        Self {
            endpoint,
            key: key.to_owned(),
            params: Vec::with_capacity(6),
        }
    }

    #[inline]
    pub fn endpoint(&self) -> &'static str {
        self.endpoint
    }

    pub fn push(&mut self, name: &'static str, value: impl Display) -> &mut Self {
        self.params.push((name, value.to_string()));
        self
    }

    pub fn push_flag(&mut self, name: &'static str, value: bool) -> &mut Self {
        self.push(name, value as u8)
    }

    /// `?k=...&name=value...`
    pub fn query_string(&self) -> String {
        self.encode(&self.key)
    }

    /// Same as `query_string` but with the key hidden, for the logs
    pub fn redacted(&self) -> String {
        format!("/{}{}", self.endpoint, self.encode("***"))
    }

    pub fn url(&self, base: &str) -> String {
        format!(
            "{}/{}{}",
            base.trim_end_matches('/'),
            self.endpoint,
            self.query_string()
        )
    }

    fn encode(&self, key: &str) -> String {
        let mut serializer = Serializer::for_suffix(String::from("?"), 1);
        serializer.append_pair("k", key);

        for (name, value) in &self.params {
            serializer.append_pair(name, value);
        }

        serializer.finish()
    }
}
