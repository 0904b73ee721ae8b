use dictionary_api::{entry_url, get_definition};

mod dictionary;
mod dictionary_api;

pub use dictionary::{License, Lookup, NotFound, Phonetic, Word, WordDefinition, WordMeaning};
pub use dictionary_api::{decode, DICTIONARY_API_URL};
pub use reqwest::Url;

#[derive(Debug, thiserror::Error)]
pub enum DictionaryError {
    #[error("{0}")]
    Fetch(reqwest::Error),
    #[error("{0}")]
    Deserialize(serde_json::Error),
    #[error("the response contained no entries")]
    EmptyResponse,
    #[error("{0} cannot be used as a base url")]
    InvalidBaseUrl(String),
    /// URLs resolve `.` and `..` segments, so these words cannot be sent as a path segment.
    #[error("'{0}' cannot be looked up")]
    UnaddressableWord(String),
}

pub struct Dictionary {
    client: reqwest::Client,
    base_url: Url,
    accept_not_found: bool,
}

impl Dictionary {
    /// A dictionary backed by the public dictionaryapi.dev endpoint.
    pub fn new() -> Result<Self, DictionaryError> {
        let base_url = Url::parse(DICTIONARY_API_URL).map_err(|error| {
            DictionaryError::InvalidBaseUrl(format!("{DICTIONARY_API_URL} ({error})"))
        })?;
        Self::with_base_url(base_url)
    }

    /// Looks words up under `base_url` instead of the public endpoint.
    pub fn with_base_url(base_url: Url) -> Result<Self, DictionaryError> {
        if base_url.cannot_be_a_base() {
            return Err(DictionaryError::InvalidBaseUrl(base_url.into()));
        }
        Ok(Self {
            client: reqwest::Client::new(),
            base_url,
            accept_not_found: true,
        })
    }

    /// When disabled, the API's not-found object is reported as a
    /// [`DictionaryError::Deserialize`] like any other unexpected body.
    pub fn accept_not_found(mut self, accept: bool) -> Self {
        self.accept_not_found = accept;
        self
    }

    pub fn entry_url(&self, word: &str) -> Result<Url, DictionaryError> {
        entry_url(&self.base_url, word)
    }

    pub async fn lookup(&self, word: &str) -> Result<Lookup, DictionaryError> {
        get_definition(&self.client, self.entry_url(word)?, self.accept_not_found).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_endpoint() {
        let dict = Dictionary::new().unwrap();
        assert_eq!(
            dict.entry_url("Hello").unwrap().as_str(),
            "https://api.dictionaryapi.dev/api/v2/entries/en/hello"
        );
    }

    #[test]
    fn rejects_base_url_without_path() {
        let url = Url::parse("mailto:someone@example.com").unwrap();
        assert!(matches!(
            Dictionary::with_base_url(url),
            Err(DictionaryError::InvalidBaseUrl(_))
        ));
    }

    #[tokio::test]
    async fn strict_lookup_still_reports_transport_errors() {
        let url = Url::parse("http://127.0.0.1:1/api/v2/entries/en/").unwrap();
        let dict = Dictionary::with_base_url(url).unwrap().accept_not_found(false);
        assert!(matches!(dict.lookup("hello").await, Err(DictionaryError::Fetch(_))));
    }

    #[tokio::test]
    async fn dot_words_fail_before_any_request() {
        let url = Url::parse("http://127.0.0.1:1/api/v2/entries/en/").unwrap();
        let dict = Dictionary::with_base_url(url).unwrap();
        assert!(matches!(
            dict.lookup("..").await,
            Err(DictionaryError::UnaddressableWord(word)) if word == ".."
        ));
    }
}
