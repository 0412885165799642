pub mod token_index;

pub use self::token_index::{Split, TokenIndex};

pub trait Tokenize<E> {
    fn tokenize(&mut self, text: &str) -> Vec<E>;
    fn get_count(&self) -> usize;
}
