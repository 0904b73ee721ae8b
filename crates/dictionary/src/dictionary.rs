/// The outcome of a single lookup.
#[derive(Debug)]
pub enum Lookup {
    Found(Word),
    NotFound(NotFound),
}

#[derive(Debug)]
pub struct Word {
    pub word: String,
    pub phonetic: Option<String>,
    pub phonetics: Vec<Phonetic>,
    pub meanings: Vec<WordMeaning>,
    pub license: Option<License>,
    pub source_urls: Vec<String>,
}



#[derive(Debug)]
pub struct Phonetic {
    pub text: Option<String>,
    pub audio: Option<String>,
    pub source_url: Option<String>,
    pub license: Option<License>,
}

#[derive(Debug)]
pub struct License {
    pub name: String,
    pub url: String,
}


#[derive(Debug)]
pub struct WordMeaning {
    pub part_of_speech: String,
    pub definitions: Vec<WordDefinition>,
    pub synonyms: Vec<String>,
    pub antonyms: Vec<String>,
}

#[derive(Debug)]
pub struct WordDefinition {
    pub definition: String,
    pub example: Option<String>,
    pub synonyms: Vec<String>,
    pub antonyms: Vec<String>,
}

/// Body the API sends instead of an entry list when it has no entry for a word.
#[derive(Debug)]
pub struct NotFound {
    pub title: String,
    pub message: String,
    pub resolution: String,
}

impl WordMeaning {
    /// Only the first sense is shown in a listing.
    pub fn first_definition(&self) -> Option<&WordDefinition> {
        self.definitions.first()
    }
}
