// https://dictionaryapi.dev/ - free, no key. Unknown words get a single error
// object (with a 404) instead of the usual array of entries.

use reqwest::Url;
use serde::Deserialize;
use tracing::debug;

use crate::{
    DictionaryError, License, Lookup, NotFound, Phonetic, Word, WordDefinition, WordMeaning,
};

pub const DICTIONARY_API_URL: &'static str =
    "https://api.dictionaryapi.dev/api/v2/entries/en/";

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct ApiWord {
    word: Option<String>,
    phonetic: Option<String>,
    phonetics: Option<Vec<ApiPhonetic>>,
    meanings: Option<Vec<ApiMeaning>>,
    license: Option<ApiLicense>,
    source_urls: Option<Vec<String>>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct ApiPhonetic {
    text: Option<String>,
    audio: Option<String>,
    source_url: Option<String>,
    license: Option<ApiLicense>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ApiLicense {
    name: Option<String>,
    url: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct ApiMeaning {
    part_of_speech: Option<String>,
    definitions: Option<Vec<ApiDefinition>>,
    synonyms: Option<Vec<serde_json::Value>>,
    antonyms: Option<Vec<String>>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ApiDefinition {
    definition: Option<String>,
    example: Option<String>,
    synonyms: Option<Vec<serde_json::Value>>,
    antonyms: Option<Vec<serde_json::Value>>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ApiNotFound {
    title: Option<String>,
    message: Option<String>,
    resolution: Option<String>,
}

/// Empty strings carry no information, the API uses them for "absent".
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|value| !value.is_empty())
}

/// Loosely typed word lists: anything that is not a string is dropped.
fn strings(values: Option<Vec<serde_json::Value>>) -> Vec<String> {
    values
        .unwrap_or_default()
        .into_iter()
        .filter_map(|value| match value {
            serde_json::Value::String(value) => Some(value),
            _ => None,
        })
        .collect()
}

impl From<ApiLicense> for License {
    fn from(license: ApiLicense) -> Self {
        Self {
            name: license.name.unwrap_or_default(),
            url: license.url.unwrap_or_default(),
        }
    }
}

impl From<ApiPhonetic> for Phonetic {
    fn from(phonetic: ApiPhonetic) -> Self {
        Self {
            text: non_empty(phonetic.text),
            audio: non_empty(phonetic.audio),
            source_url: non_empty(phonetic.source_url),
            license: phonetic.license.map(License::from),
        }
    }
}

impl From<ApiDefinition> for WordDefinition {
    fn from(definition: ApiDefinition) -> Self {
        Self {
            definition: definition.definition.unwrap_or_default(),
            example: non_empty(definition.example),
            synonyms: strings(definition.synonyms),
            antonyms: strings(definition.antonyms),
        }
    }
}

impl From<ApiMeaning> for WordMeaning {
    fn from(meaning: ApiMeaning) -> Self {
        Self {
            part_of_speech: meaning.part_of_speech.unwrap_or_default(),
            definitions: meaning
                .definitions
                .unwrap_or_default()
                .into_iter()
                .map(WordDefinition::from)
                .collect(),
            synonyms: strings(meaning.synonyms),
            antonyms: meaning.antonyms.unwrap_or_default(),
        }
    }
}

impl From<ApiWord> for Word {
    fn from(word: ApiWord) -> Self {
        Self {
            word: word.word.unwrap_or_default(),
            phonetic: non_empty(word.phonetic),
            phonetics: word
                .phonetics
                .unwrap_or_default()
                .into_iter()
                .map(Phonetic::from)
                .collect(),
            meanings: word
                .meanings
                .unwrap_or_default()
                .into_iter()
                .map(WordMeaning::from)
                .collect(),
            license: word.license.map(License::from),
            source_urls: word.source_urls.unwrap_or_default(),
        }
    }
}

impl From<ApiNotFound> for NotFound {
    fn from(not_found: ApiNotFound) -> Self {
        Self {
            title: not_found.title.unwrap_or_default(),
            message: not_found.message.unwrap_or_default(),
            resolution: not_found.resolution.unwrap_or_default(),
        }
    }
}

/// Appends the lowercased word to `base_url` as a single percent-encoded path segment.
pub(crate) fn entry_url(base_url: &Url, word: &str) -> Result<Url, DictionaryError> {
    let word = word.to_lowercase();
    // `push` drops these, and their %2E spellings are resolved as dot segments too
    if word == "." || word == ".." {
        return Err(DictionaryError::UnaddressableWord(word));
    }
    let mut url = base_url.clone();
    url.path_segments_mut()
        .map_err(|_| DictionaryError::InvalidBaseUrl(base_url.to_string()))?
        .pop_if_empty()
        .push(&word);
    Ok(url)
}

pub(crate) async fn get_definition(
    client: &reqwest::Client,
    url: Url,
    accept_not_found: bool,
) -> Result<Lookup, DictionaryError> {
    debug!(%url, "requesting definition");
    let res: reqwest::Response = client.get(url).send().await.map_err(DictionaryError::Fetch)?;
    let status = res.status();
    let body = res.bytes().await.map_err(DictionaryError::Fetch)?;
    debug!(%status, bytes = body.len(), "received response");
    decode(&body, accept_not_found)
}

/// Decodes a response body, whatever its status code.
///
/// An array of entries yields the first entry; alternate entries (homographs)
/// are dropped. Anything else is tried as the API's not-found object when
/// `accept_not_found` is set.
pub fn decode(body: &[u8], accept_not_found: bool) -> Result<Lookup, DictionaryError> {
    let error = match serde_json::from_slice::<Vec<ApiWord>>(body) {
        Ok(entries) => {
            return entries
                .into_iter()
                .next()
                .map(|entry| Lookup::Found(entry.into()))
                .ok_or(DictionaryError::EmptyResponse);
        }
        Err(error) => error,
    };
    if !accept_not_found {
        debug!(%error, "response is not a list of entries");
        return Err(DictionaryError::Deserialize(error));
    }
    match decode_not_found(body) {
        Ok(not_found) => Ok(Lookup::NotFound(not_found)),
        Err(error) => {
            debug!(%error, "response matches neither entries nor not-found");
            Err(DictionaryError::Deserialize(error))
        }
    }
}

fn decode_not_found(body: &[u8]) -> serde_json::Result<NotFound> {
    // going through a map keeps derived struct decoding from accepting JSON arrays
    let object: serde_json::Map<String, serde_json::Value> = serde_json::from_slice(body)?;
    ApiNotFound::deserialize(serde_json::Value::Object(object)).map(NotFound::from)
}
