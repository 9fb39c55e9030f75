//! The shared pool of random identifiers.

use crate::result::{Error, Result};
use rand::{TryRngCore, rngs::OsRng};
use tracing::debug;
use uuid::{Builder, Uuid};

/// An ordered, immutable set of identifiers shared by every benchmark case.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct IdentifierPool {
    ids: Box<[Uuid]>,
}

impl IdentifierPool {
    /// Number of identifiers in the pool.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn as_slice(&self) -> &[Uuid] {
        &self.ids
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Uuid> {
        self.ids.iter()
    }

    pub fn get(&self, index: usize) -> Option<&Uuid> {
        self.ids.get(index)
    }
}

impl From<Vec<Uuid>> for IdentifierPool {
    fn from(ids: Vec<Uuid>) -> Self {
        Self {
            ids: ids.into_boxed_slice(),
        }
    }
}

impl<'a> IntoIterator for &'a IdentifierPool {
    type Item = &'a Uuid;
    type IntoIter = std::slice::Iter<'a, Uuid>;

    fn into_iter(self) -> Self::IntoIter {
        self.ids.iter()
    }
}

/// Generate `count` random (version 4) identifiers from the OS random source.
///
/// Any entropy failure fails the whole batch; a partial pool is never returned.
pub fn generate(count: usize) -> Result<IdentifierPool> {
    generate_with(&mut OsRng, count)
}

/// Generate `count` random (version 4) identifiers from `rng`.
pub fn generate_with<R: TryRngCore + ?Sized>(rng: &mut R, count: usize) -> Result<IdentifierPool> {
    let mut ids = Vec::with_capacity(count);
    for _ in 0..count {
        let mut bytes = [0u8; 16];
        rng.try_fill_bytes(&mut bytes)
            .map_err(|e| Error::GenerationError(e.to_string()))?;
        ids.push(Builder::from_random_bytes(bytes).into_uuid());
    }
    debug!(count, "generated identifier pool");
    Ok(IdentifierPool::from(ids))
}
