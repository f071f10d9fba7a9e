//! Statically initialized lookup tables.
//!
//! Everything here is built exactly once, before use, and never mutated
//! afterwards. The tables are shared by every `Board` and readable from any
//! thread without synchronization. Access goes through the freestanding
//! functions in [`prelude`].
//!
//! [`prelude`]: prelude/index.html

mod boards;
mod magic;
pub mod prelude;
mod zobrist;
