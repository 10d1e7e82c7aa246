//! Fixed-capacity arena of once-initialized member slots.
//!
//! Slots are grouped in chunks that are allocated on first touch, so a
//! sequence of millions of elements costs one pointer per chunk until its
//! elements are actually visited. Slots are never cleared.

use std::cell::{Cell, OnceCell};

use super::MemberInstance;

const CHUNK: usize = 256;

type Chunk<'ctx> = Box<[OnceCell<MemberInstance<'ctx>>]>;

pub(crate) struct Slots<'ctx> {
    len: usize,
    chunks: Box<[OnceCell<Chunk<'ctx>>]>,
    filled: Cell<usize>,
}

impl<'ctx> Slots<'ctx> {
    pub(crate) fn new(len: usize) -> Self {
        Self {
            len,
            chunks: (0..len.div_ceil(CHUNK)).map(|_| OnceCell::new()).collect(),
            filled: Cell::new(0),
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.len
    }

    /// Number of occupied slots.
    pub(crate) fn filled(&self) -> usize {
        self.filled.get()
    }

    pub(crate) fn get(&self, index: usize) -> Option<&MemberInstance<'ctx>> {
        self.chunks
            .get(index / CHUNK)?
            .get()?
            .get(index % CHUNK)?
            .get()
    }

    /// Store the instance for `index`, which must be vacant.
    pub(crate) fn fill(&self, index: usize, member: MemberInstance<'ctx>) -> &MemberInstance<'ctx> {
        self.ensure_vacant(index);
        let first = (index / CHUNK) * CHUNK;
        let chunk = self.chunks[index / CHUNK].get_or_init(|| {
            let size = (self.len - first).min(CHUNK);
            (0..size).map(|_| OnceCell::new()).collect()
        });
        self.filled.set(self.filled.get() + 1);
        chunk[index % CHUNK].get_or_init(|| member)
    }

    /// Occupied slots in index order.
    pub(crate) fn iter(&self) -> impl Iterator<Item = &MemberInstance<'ctx>> {
        self.chunks
            .iter()
            .filter_map(OnceCell::get)
            .flat_map(|chunk| chunk.iter().filter_map(OnceCell::get))
    }
}
