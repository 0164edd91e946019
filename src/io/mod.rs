//! Input sources a `RowStream` can be opened from.
//!
//! This module provides:
//! - `InputProvider`: Trait for anything that can hand out a fresh reader
//! - `FileInput` and `StdinInput` for the usual command-line sources
//! - `InMemorySource` for tests and embedded data

mod input;
mod memory;
mod std_io;

pub use input::InputProvider;
pub use memory::InMemorySource;
pub use std_io::{FileInput, StdinInput};
