#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use cryptal_random::EntropySource;

/// Entropy source that replays scripted bytes and counts fetches.
///
/// Panics if asked for more bytes than were scripted, which doubles as an
/// assertion that an operation consumed no entropy.
pub struct ScriptedSource {
    bytes: VecDeque<u8>,
    fetches: Arc<AtomicUsize>,
}

impl ScriptedSource {
    pub fn new(bytes: impl IntoIterator<Item = u8>) -> (Self, Arc<AtomicUsize>) {
        let fetches = Arc::new(AtomicUsize::new(0));
        let source = Self {
            bytes: bytes.into_iter().collect(),
            fetches: Arc::clone(&fetches),
        };

        (source, fetches)
    }

    /// Scripts 32-bit words in the little-endian layout the generator reads.
    pub fn words(words: &[u32]) -> (Self, Arc<AtomicUsize>) {
        Self::new(words.iter().flat_map(|w| w.to_le_bytes()))
    }

    pub fn empty() -> (Self, Arc<AtomicUsize>) {
        Self::new(Vec::new())
    }
}

impl EntropySource for ScriptedSource {
    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.fetches.fetch_add(1, Ordering::SeqCst);

        for b in dest.iter_mut() {
            *b = self.bytes.pop_front().expect("scripted entropy exhausted");
        }
    }

    fn name(&self) -> &'static str {
        "scripted"
    }
}

pub fn fetches(counter: &Arc<AtomicUsize>) -> usize {
    counter.load(Ordering::SeqCst)
}
