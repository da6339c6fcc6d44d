//! Terminal 2048 (workspace facade crate).
//!
//! Re-exports the member crates as `term_2048::{core,engine,input,term,types}`
//! so the binary, integration tests and benches share one import path.

pub use term_2048_core as core;
pub use term_2048_engine as engine;
pub use term_2048_input as input;
pub use term_2048_term as term;
pub use term_2048_types as types;
