//! Per-token consumers for host (`CLua`) mode.
//!
//! Each consumer assumes the cursor already sits on a byte consistent with
//! the kind it consumes (the mode driver's `guess_token_type` made that
//! determination); it advances the cursor and records at most one side-hint.

pub mod comment;
pub mod identifier;
pub mod misc;
pub mod number;
pub mod string;
pub mod symbol;
pub mod whitespace;
