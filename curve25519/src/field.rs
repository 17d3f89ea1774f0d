//! Arithmetic in the prime field GF(2^255 - 19).

mod element;

pub use element::FieldElement;
