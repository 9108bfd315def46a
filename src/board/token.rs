use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, serde::Serialize, serde::Deserialize)]
pub enum Token {
    #[default]
    Empty,
    Yellow,
    Red,
}

impl Token {
    /// The other player's colour. Empty stays empty.
    pub fn opposite(self) -> Token {
        match self {
            Token::Yellow => Token::Red,
            Token::Red => Token::Yellow,
            Token::Empty => Token::Empty,
        }
    }

    pub fn is_empty(self) -> bool {
        self == Token::Empty
    }

    /// Character used by the text grid encoding
    pub fn symbol(self) -> char {
        match self {
            Token::Empty => ' ',
            Token::Yellow => 'Y',
            Token::Red => 'R',
        }
    }

    pub fn from_symbol(symbol: char) -> Option<Token> {
        match symbol {
            ' ' => Some(Token::Empty),
            'Y' => Some(Token::Yellow),
            'R' => Some(Token::Red),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Token::Empty => "Nobody",
            Token::Yellow => "Yellow",
            Token::Red => "Red",
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
