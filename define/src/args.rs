use clap::{ArgAction, Parser, ValueEnum};
use dictionary::{Url, DICTIONARY_API_URL};

use crate::format::Style;

/// Look up English words on dictionaryapi.dev and print their definitions.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Words to define, looked up in order.
    #[arg(value_name = "WORD", required = true)]
    pub words: Vec<String>,

    /// How the part of speech is marked.
    #[arg(short, long, value_enum, default_value_t = StyleArg::Bracket)]
    pub style: StyleArg,

    /// Treat the "no definitions found" answer as an unexpected response.
    #[arg(long, default_value_t = false)]
    pub strict: bool,

    /// Endpoint the lowercased word is appended to.
    #[arg(long, value_name = "URL", default_value = DICTIONARY_API_URL)]
    pub api_url: Url,

    /// More logging on stderr; repeat for more.
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum StyleArg {
    /// [noun] ...
    Bracket,
    /// (noun) ...
    Paren,
}

impl From<StyleArg> for Style {
    fn from(style: StyleArg) -> Self {
        match style {
            StyleArg::Bracket => Style::Bracket,
            StyleArg::Paren => Style::Paren,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let args = Args::try_parse_from(["define", "Hello"]).unwrap();
        assert_eq!(args.words, vec!["Hello".to_owned()]);
        assert_eq!(args.style, StyleArg::Bracket);
        assert!(!args.strict);
        assert_eq!(args.api_url.as_str(), DICTIONARY_API_URL);
        assert_eq!(args.verbose, 0);
    }

    #[test]
    fn words_keep_their_order() {
        let args = Args::try_parse_from(["define", "-s", "paren", "zebra", "apple", "-vv"]).unwrap();
        assert_eq!(args.words, vec!["zebra".to_owned(), "apple".to_owned()]);
        assert_eq!(args.style, StyleArg::Paren);
        assert_eq!(args.verbose, 2);
    }

    #[test]
    fn words_are_required() {
        let error = Args::try_parse_from(["define"]).unwrap_err();
        assert_eq!(error.kind(), clap::error::ErrorKind::MissingRequiredArgument);
    }
}
