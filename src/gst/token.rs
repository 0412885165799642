// Basic trait for token types that reserve a pair of terminator symbols.

use std::fmt::Debug;

pub trait Token: Copy + Ord + Debug {
    /// Default terminators appended after the first and the second sequence.
    fn sentinels() -> (Self, Self);
}

impl Token for char {
    fn sentinels() -> (Self, Self) {
        ('#', '$')
    }
}

impl Token for u8 {
    fn sentinels() -> (Self, Self) {
        (b'#', b'$')
    }
}

impl Token for u16 {
    fn sentinels() -> (Self, Self) {
        (u16::MAX - 1, u16::MAX)
    }
}

impl Token for u32 {
    fn sentinels() -> (Self, Self) {
        (u32::MAX - 1, u32::MAX)
    }
}

impl Token for usize {
    fn sentinels() -> (Self, Self) {
        (usize::MAX - 1, usize::MAX)
    }
}
