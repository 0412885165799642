use std::collections::HashMap;

use unicode_segmentation::UnicodeSegmentation;

use crate::tokenize::Tokenize;

/// How raw text is cut into tokens before interning.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Split {
    Whitespace,
    Graphemes,
}

/// Interns string tokens as dense u32 ids. Ids are shared by every text passed through the same
/// index, so two tokenized sequences can be compared id by id.
pub struct TokenIndex {
    split: Split,
    // TODO: Could optimize this to only store each string once.
    token_to_index: HashMap<String, u32>,
    index_to_token: Vec<String>,
}

impl TokenIndex {
    pub fn new(split: Split) -> Self {
        Self {
            split,
            token_to_index: HashMap::new(),
            index_to_token: Vec::new(),
        }
    }

    pub fn add(&mut self, token: &str) -> u32 {
        if let Some(index) = self.token_to_index.get(token) {
            return *index;
        }
        let index = self.index_to_token.len() as u32;
        self.token_to_index.insert(token.to_string(), index);
        self.index_to_token.push(token.to_string());
        index
    }

    pub fn index(&self, token: &str) -> Option<u32> {
        self.token_to_index.get(token).copied()
    }

    pub fn token(&self, index: u32) -> Option<&str> {
        self.index_to_token.get(index as usize).map(|t| t.as_str())
    }
}

impl Tokenize<u32> for TokenIndex {
    fn tokenize(&mut self, text: &str) -> Vec<u32> {
        match self.split {
            Split::Whitespace => text.split_whitespace().map(|x| self.add(x)).collect(),
            Split::Graphemes => text.graphemes(true).map(|x| self.add(x)).collect(),
        }
    }

    fn get_count(&self) -> usize {
        self.index_to_token.len()
    }
}

#[cfg(test)]
mod tests {
    use crate::tokenize::{Split, TokenIndex, Tokenize};

    #[test]
    fn test_token_index() {
        let mut token_index = TokenIndex::new(Split::Whitespace);
        assert_eq!(token_index.add("hello"), 0);
        assert_eq!(token_index.add("hello"), 0);
        assert_eq!(token_index.add("world"), 1);
        assert_eq!(token_index.index("hello"), Some(0));
        assert_eq!(token_index.token(1), Some("world"));
        assert_eq!(token_index.index("universe"), None);
        assert_eq!(token_index.token(342), None);
    }

    #[test]
    fn test_tokenize_whitespace_shares_ids() {
        let mut token_index = TokenIndex::new(Split::Whitespace);
        let a = token_index.tokenize("the cat sat");
        let b = token_index.tokenize("  the   dog sat ");
        assert_eq!(a, vec![0, 1, 2]);
        assert_eq!(b, vec![0, 3, 2]);
        assert_eq!(token_index.get_count(), 4);
    }

    #[test]
    fn test_tokenize_graphemes() {
        let mut token_index = TokenIndex::new(Split::Graphemes);
        // "e\u{301}" is a single grapheme cluster.
        let tokens = token_index.tokenize("e\u{301}ae\u{301}");
        assert_eq!(tokens, vec![0, 1, 0]);
        assert_eq!(token_index.token(0), Some("e\u{301}"));
    }
}
