//! Token model: four dictionary-encoded attributes per corpus position.

use crate::error::ConcordError;
use std::fmt;
use std::str::FromStr;

/// Compact identifier for an attribute-value string.
pub type AttrId = u32;

/// Token position within the corpus (0-based).
pub type Pos = u32;

/// A corpus token: four attribute identifiers.
///
/// Field order is stable and part of the data contract; it mirrors the
/// column order of the corpus input format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    /// Surface form.
    pub word: AttrId,
    /// Part-of-speech tag, CLAWS C5 tag set.
    pub c5: AttrId,
    /// Lemma (dictionary head form).
    pub lemma: AttrId,
    /// Part-of-speech tag, simplified tag set.
    pub pos: AttrId,
}

/// One of the four categorical attributes carried by every token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Attribute {
    /// Surface form (`word`).
    Word,
    /// C5 part-of-speech tag (`c5`).
    C5,
    /// Lemma (`lemma`).
    Lemma,
    /// Simplified part-of-speech tag (`pos`).
    Pos,
}

impl Attribute {
    /// All attributes, in token field order.
    pub const ALL: [Attribute; 4] = [
        Attribute::Word,
        Attribute::C5,
        Attribute::Lemma,
        Attribute::Pos,
    ];

    /// Projects this attribute's identifier out of a token.
    #[inline]
    pub fn of(&self, token: &Token) -> AttrId {
        match self {
            Attribute::Word => token.word,
            Attribute::C5 => token.c5,
            Attribute::Lemma => token.lemma,
            Attribute::Pos => token.pos,
        }
    }
}

impl FromStr for Attribute {
    type Err = ConcordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "word" => Ok(Attribute::Word),
            "c5" => Ok(Attribute::C5),
            "lemma" => Ok(Attribute::Lemma),
            "pos" => Ok(Attribute::Pos),
            _ => Err(ConcordError::UnknownAttribute(s.to_string())),
        }
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Attribute::Word => "word",
            Attribute::C5 => "c5",
            Attribute::Lemma => "lemma",
            Attribute::Pos => "pos",
        };
        write!(f, "{}", name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attribute_projection() {
        let token = Token {
            word: 10,
            c5: 11,
            lemma: 12,
            pos: 13,
        };
        assert_eq!(Attribute::Word.of(&token), 10);
        assert_eq!(Attribute::C5.of(&token), 11);
        assert_eq!(Attribute::Lemma.of(&token), 12);
        assert_eq!(Attribute::Pos.of(&token), 13);
    }

    #[test]
    fn test_attribute_from_str() {
        assert_eq!("word".parse::<Attribute>().ok(), Some(Attribute::Word));
        assert_eq!("c5".parse::<Attribute>().ok(), Some(Attribute::C5));
        assert_eq!("lemma".parse::<Attribute>().ok(), Some(Attribute::Lemma));
        assert_eq!("pos".parse::<Attribute>().ok(), Some(Attribute::Pos));
        assert!("tag".parse::<Attribute>().is_err());
    }

    #[test]
    fn test_attribute_display_round_trip() {
        for attr in Attribute::ALL {
            assert_eq!(attr.to_string().parse::<Attribute>().ok(), Some(attr));
        }
    }
}
