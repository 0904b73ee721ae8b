use std::fmt::Write;

use dictionary::{Lookup, NotFound, Word};

/// How the part of speech is set off from its definition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Style {
    Bracket,
    Paren,
}

impl Style {
    fn delimiters(self) -> (char, char) {
        match self {
            Style::Bracket => ('[', ']'),
            Style::Paren => ('(', ')'),
        }
    }
}

/// Renders a lookup under the word as it was typed, not as the API spells it.
pub fn render(queried: &str, lookup: &Lookup, style: Style) -> String {
    match lookup {
        Lookup::Found(word) => render_word(queried, word, style),
        Lookup::NotFound(not_found) => render_not_found(queried, not_found),
    }
}

fn render_word(queried: &str, word: &Word, style: Style) -> String {
    let (open, close) = style.delimiters();
    let mut buffer = String::new();
    for meaning in &word.meanings {
        let Some(definition) = meaning.first_definition() else {
            continue;
        };
        // writing to a String cannot fail
        let _ = writeln!(
            buffer,
            "{open}{}{close} {}",
            meaning.part_of_speech, definition.definition
        );
        if let Some(example) = &definition.example {
            let _ = writeln!(buffer, "\tExample: '{example}'");
        }
    }
    format!("{queried}:\n{}", buffer.trim_end())
}

fn render_not_found(queried: &str, not_found: &NotFound) -> String {
    format!("'{queried}' was not found: {}", not_found.resolution)
}
