use serde::{Deserialize, Serialize};

/// Slash-command body. Slack sends more fields than this; only `text` is read.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CommandPayload {
    #[serde(default)]
    pub text: Option<String>,
}

impl CommandPayload {
    /// Command text; a missing or null `text` reads as empty.
    pub fn text(&self) -> &str {
        self.text.as_deref().unwrap_or_default()
    }
}

/// `/helloWorld <symbol>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolCommand {
    pub symbol: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupKey {
    Symbol,
    Name,
}

impl LookupKey {
    fn parse(word: &str) -> Option<Self> {
        match word.to_lowercase().as_str() {
            "symbol" => Some(LookupKey::Symbol),
            "name" => Some(LookupKey::Name),
            _ => None,
        }
    }
}

/// `/getToken <name|symbol> <value>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupCommand {
    pub key: LookupKey,
    pub value: String,
}

/// Accepts exactly one word; the symbol is lower-cased.
pub fn parse_symbol_command(text: &str) -> Option<SymbolCommand> {
    let mut words = text.split_whitespace();
    match (words.next(), words.next()) {
        (Some(symbol), None) => Some(SymbolCommand {
            symbol: symbol.to_lowercase(),
        }),
        _ => None,
    }
}

/// Accepts exactly two words, the first being `name` or `symbol` in any case.
pub fn parse_lookup_command(text: &str) -> Option<LookupCommand> {
    let words: Vec<&str> = text.split_whitespace().collect();
    let [key, value] = words.as_slice() else {
        return None;
    };

    Some(LookupCommand {
        key: LookupKey::parse(key)?,
        value: value.to_lowercase(),
    })
}
