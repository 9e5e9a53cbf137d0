//! Quote store adapters

mod memory;

pub use memory::InMemoryQuoteStore;
