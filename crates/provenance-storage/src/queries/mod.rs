//! Query functions over an `IndexedGraph`. The engine takes the lock and delegates here.

pub mod aggregate;
pub mod completion;
pub mod lookup;
pub mod neighbors;
