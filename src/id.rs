use std::io;

use rand::rngs::{OsRng, SmallRng};
use rand::{RngCore, SeedableRng, TryRngCore};
use uuid::Builder;

/// Source of fresh entity identifiers.
pub trait IdSource {
    fn next_id(&mut self) -> io::Result<String>;
}

/// Random version-4 UUIDs drawn from the operating system's random source.
/// An unavailable random source is reported as an I/O error.
#[derive(Debug, Default, Clone, Copy)]
pub struct OsUuidSource;

impl IdSource for OsUuidSource {
    fn next_id(&mut self) -> io::Result<String> {
        let mut bytes = [0u8; 16];
        OsRng.try_fill_bytes(&mut bytes).map_err(io::Error::other)?;
        Ok(format_uuid(bytes))
    }
}

/// Deterministic version-4 UUIDs from a seeded RNG.
/// Same seed, same sequence.
#[derive(Debug)]
pub struct SeededUuidSource {
    rng: SmallRng,
}

impl SeededUuidSource {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl IdSource for SeededUuidSource {
    fn next_id(&mut self) -> io::Result<String> {
        let mut bytes = [0u8; 16];
        self.rng.fill_bytes(&mut bytes);
        Ok(format_uuid(bytes))
    }
}

/// Stamp version and variant bits onto 128 random bits and render the
/// canonical lowercase hyphenated form.
fn format_uuid(bytes: [u8; 16]) -> String {
    Builder::from_random_bytes(bytes).into_uuid().to_string()
}
