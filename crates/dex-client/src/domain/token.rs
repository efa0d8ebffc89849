use {
    primitive_types::H160,
    serde::{Deserialize, Serialize},
    std::collections::HashSet,
};

/// A token ticker symbol. Symbols identify tokens within one chain.
#[derive(
    Clone,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Deserialize,
    Serialize,
    derive_more::Display,
    derive_more::From,
)]
#[serde(transparent)]
pub struct Symbol(String);

impl Symbol {
    pub fn new(symbol: impl Into<String>) -> Self {
        Self(symbol.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Symbol {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct Token {
    pub symbol: Symbol,
    pub address: H160,
    pub decimals: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

impl Token {
    pub fn decimals(&self) -> u32 {
        u32::from(self.decimals)
    }
}

/// The tokens known on one chain.
#[derive(Clone, Debug, Default)]
pub struct TokenList(Vec<Token>);

#[derive(Debug, thiserror::Error)]
#[error("token symbol {0} is listed more than once")]
pub struct DuplicateSymbol(pub Symbol);

impl TokenList {
    pub fn try_new(tokens: Vec<Token>) -> Result<Self, DuplicateSymbol> {
        let mut seen = HashSet::new();
        for token in &tokens {
            if !seen.insert(&token.symbol) {
                return Err(DuplicateSymbol(token.symbol.clone()));
            }
        }
        Ok(Self(tokens))
    }

    /// Finds a token by symbol (case sensitive) or by address (`0x` prefixed,
    /// any case). This is how tokens passed in as query parameters get
    /// resolved.
    pub fn find(&self, symbol_or_address: &str) -> Option<&Token> {
        let address = symbol_or_address.parse::<H160>().ok();
        self.0.iter().find(|token| {
            token.symbol.as_str() == symbol_or_address || Some(token.address) == address
        })
    }

    pub fn iter(&self) -> impl Iterator<Item = &Token> {
        self.0.iter()
    }

    /// Adds a token that was imported by address. Returns `false` if a token
    /// with the same symbol already exists.
    pub fn import(&mut self, token: Token) -> bool {
        if self.0.iter().any(|t| t.symbol == token.symbol) {
            return false;
        }
        self.0.push(token);
        true
    }
}
