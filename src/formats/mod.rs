//! Text format decoding.
//!
//! Two independent line-oriented decoders share this module: the
//! fixed-column structural record parser ([`pdb`]) and the token-based
//! polygon mesh parser ([`obj`]). Both receive already-retrieved UTF-8
//! text and either return fully built output or a line-numbered error,
//! never partial state.

pub mod obj;
pub mod pdb;
