//! Generation layers
//!
//! Each layer is a stateless string transform. The generator picks one per
//! layer number via [`TransformKind::for_layer`].

mod hash;
mod interleave;
mod rotate;
mod xor;

pub use hash::hash_append;
pub use interleave::interleave_symbols;
pub use rotate::rotate;
pub use xor::xor_transform;

use crate::random::RandomSource;

/// Symbols inserted by the interleave layer and recognised by the encoding
/// detector.
pub const SYMBOLS: [char; 12] = ['!', '@', '#', '$', '%', '^', '&', '*', '(', ')', '_', '+'];

/// The four transform kinds, selected by `layer mod 4`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransformKind {
    InterleaveSymbols,
    Rotate,
    HashAppend,
    Xor,
}

impl TransformKind {
    pub fn for_layer(layer: usize) -> Self {
        match layer % 4 {
            0 => TransformKind::InterleaveSymbols,
            1 => TransformKind::Rotate,
            2 => TransformKind::HashAppend,
            _ => TransformKind::Xor,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            TransformKind::InterleaveSymbols => "interleave",
            TransformKind::Rotate => "rotate",
            TransformKind::HashAppend => "hash-append",
            TransformKind::Xor => "xor",
        }
    }

    pub fn apply<R: RandomSource + ?Sized>(&self, input: &str, rng: &R) -> String {
        match self {
            TransformKind::InterleaveSymbols => interleave_symbols(input, rng),
            TransformKind::Rotate => rotate(input, rng),
            TransformKind::HashAppend => hash_append(input),
            TransformKind::Xor => xor_transform(input, rng),
        }
    }
}

/// Applies the transform selected by `layer` to `input`.
pub fn apply_layer<R: RandomSource + ?Sized>(input: &str, layer: usize, rng: &R) -> String {
    TransformKind::for_layer(layer).apply(input, rng)
}
