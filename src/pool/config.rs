/// Construction parameters of an [`ObjectPool`](super::ObjectPool).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PoolConfig {
    /// Number of instances to pre-build, and the initial size of the ready queue.
    pub capacity: usize,
    /// Build `capacity` instances at construction. When `false` the pool
    /// starts empty and grows on demand.
    pub fill: bool,
}

impl PoolConfig {
    pub const DEFAULT_CAPACITY: usize = 100;

    /// Pre-fills `capacity` instances.
    pub const fn new(capacity: usize) -> Self {
        Self {
            capacity,
            fill: true,
        }
    }

    /// Reserves room for `capacity` instances but builds none up front.
    pub const fn lazy(capacity: usize) -> Self {
        Self {
            capacity,
            fill: false,
        }
    }

    pub const fn with_capacity(self, capacity: usize) -> Self {
        Self { capacity, ..self }
    }

    pub const fn with_fill(self, fill: bool) -> Self {
        Self { fill, ..self }
    }

    /// Number of instances built at construction.
    #[inline]
    pub const fn prefill(&self) -> usize {
        if self.fill { self.capacity } else { 0 }
    }
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_CAPACITY)
    }
}
