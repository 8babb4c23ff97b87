// reveal.rs - One-shot reveal bookkeeping
//
// Targets are watched until their first intersection with the viewport, then
// revealed and dropped. Nothing is ever un-revealed.

/// Intersection ratio at which the observer reports a target.
pub const REVEAL_THRESHOLD: f64 = 0.12;

#[derive(Debug)]
pub struct RevealTracker<K> {
    watched: Vec<K>,
    revealed: usize,
}

impl<K> Default for RevealTracker<K> {
    fn default() -> Self {
        Self { watched: Vec::new(), revealed: 0 }
    }
}

impl<K: PartialEq> RevealTracker<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start watching `key`. Returns false if it was already watched.
    pub fn watch(&mut self, key: K) -> bool {
        if self.watched.contains(&key) { return false; }
        self.watched.push(key);
        true
    }

    /// Feed one observer notification. Returns true exactly once per target:
    /// the first time it is reported intersecting. The target is unwatched at
    /// that moment and only then.
    pub fn intersect(&mut self, key: &K, is_intersecting: bool) -> bool {
        if !is_intersecting { return false; }
        match self.watched.iter().position(|k| k == key) {
            Some(i) => {
                self.watched.swap_remove(i);
                self.revealed += 1;
                true
            }
            None => false,
        }
    }

    pub fn is_watched(&self, key: &K) -> bool {
        self.watched.contains(key)
    }

    pub fn watching(&self) -> usize { self.watched.len() }
    pub fn revealed(&self) -> usize { self.revealed }
}
