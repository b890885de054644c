//! Counter persistence boundary.
//!
//! The engine itself never touches storage: drivers read the running
//! play/win counts from a store before each play and write the incremented
//! values back after. Implementations only need plain integers with
//! at-least-once durability between invocations.

use std::collections::HashMap;
use std::io;

/// Key-value store for play/win counters.
pub trait CounterStore {
    /// Read a counter. `Ok(None)` means the key has never been written.
    fn read(&self, key: &str) -> io::Result<Option<u64>>;

    /// Write a counter value.
    fn write(&mut self, key: &str, value: u64) -> io::Result<()>;

    /// Read a counter, seeding it with `default` on first touch so later
    /// reads and increments start from a known value.
    fn read_or_seed(&mut self, key: &str, default: u64) -> io::Result<u64> {
        match self.read(key)? {
            Some(value) => Ok(value),
            None => {
                self.write(key, default)?;
                Ok(default)
            }
        }
    }
}

/// Process-local store for tests and single-run simulations.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCounterStore {
    values: HashMap<String, u64>,
}

impl InMemoryCounterStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CounterStore for InMemoryCounterStore {
    fn read(&self, key: &str) -> io::Result<Option<u64>> {
        Ok(self.values.get(key).copied())
    }

    fn write(&mut self, key: &str, value: u64) -> io::Result<()> {
        self.values.insert(key.to_string(), value);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unwritten_keys_read_as_none() {
        let store = InMemoryCounterStore::new();
        assert_eq!(store.read("play-count").expect("read"), None);
    }

    #[test]
    fn writes_are_readable() {
        let mut store = InMemoryCounterStore::new();
        store.write("win-count", 3).expect("write");
        assert_eq!(store.read("win-count").expect("read"), Some(3));
    }

    #[test]
    fn read_or_seed_writes_the_default_once() {
        let mut store = InMemoryCounterStore::new();
        assert_eq!(store.read_or_seed("play-count", 100).expect("seed"), 100);
        store.write("play-count", 250).expect("write");
        assert_eq!(
            store.read_or_seed("play-count", 100).expect("read"),
            250,
            "seeding must not overwrite an existing value"
        );
    }
}
