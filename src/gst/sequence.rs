// Concatenates the two inputs with their terminators: A + sentinel1 + B + sentinel2.

use crate::error::InvalidInputError;
use crate::graph::tree_graph::Origin;
use crate::gst::token::Token;

/// The shared, read-only token buffer that every edge label points into.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CombinedSequence<T> {
    tokens: Vec<T>,
    boundary: usize,
}

impl<T: Token> CombinedSequence<T> {
    pub fn tokens(&self) -> &[T] {
        &self.tokens
    }

    pub fn get(&self, index: usize) -> T {
        self.tokens[index]
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Length of the first sequence, i.e. the position of the first sentinel.
    pub fn boundary(&self) -> usize {
        self.boundary
    }

    /// Origin of leaves created in phase `index`. The first sentinel still counts as A.
    pub fn origin(&self, index: usize) -> Origin {
        if index > self.boundary {
            Origin::B
        } else {
            Origin::A
        }
    }
}

pub struct SequenceBuilder<T> {
    sentinels: (T, T),
    max_length: Option<usize>,
}

impl<T: Token> Default for SequenceBuilder<T> {
    fn default() -> Self {
        Self::new(T::sentinels())
    }
}

impl<T: Token> SequenceBuilder<T> {
    pub fn new(sentinels: (T, T)) -> Self {
        Self {
            sentinels,
            max_length: None,
        }
    }

    /// Refuse combined sequences longer than `max_length` tokens.
    pub fn with_max_length(mut self, max_length: Option<usize>) -> Self {
        self.max_length = max_length;
        self
    }

    pub fn build(&self, a: &[T], b: &[T]) -> Result<CombinedSequence<T>, InvalidInputError> {
        let (sentinel1, sentinel2) = self.sentinels;
        if sentinel1 == sentinel2 {
            return Err(InvalidInputError::DuplicateSentinels(format!(
                "{:?}",
                sentinel1
            )));
        }
        Self::validate(a, Origin::A, self.sentinels)?;
        Self::validate(b, Origin::B, self.sentinels)?;

        let length = a.len() + b.len() + 2;
        if let Some(max_length) = self.max_length {
            if length > max_length {
                return Err(InvalidInputError::TooLong { length, max_length });
            }
        }

        let mut tokens = Vec::with_capacity(length);
        tokens.extend_from_slice(a);
        tokens.push(sentinel1);
        tokens.extend_from_slice(b);
        tokens.push(sentinel2);
        Ok(CombinedSequence {
            tokens,
            boundary: a.len(),
        })
    }

    fn validate(seq: &[T], origin: Origin, sentinels: (T, T)) -> Result<(), InvalidInputError> {
        let found = seq
            .iter()
            .position(|token| *token == sentinels.0 || *token == sentinels.1);
        match found {
            Some(position) => Err(InvalidInputError::SentinelInSequence {
                origin,
                position,
                sentinel: format!("{:?}", seq[position]),
            }),
            None => Ok(()),
        }
    }
}
