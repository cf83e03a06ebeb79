use alloc::collections::VecDeque;
use core::convert::Infallible;
use core::fmt;

use log::{debug, trace};

use super::config::PoolConfig;
use super::factory::Factory;

/// A FIFO queue of ready instances backed by a [`Factory`].
///
/// [`get`](Self::get) hands out the oldest ready instance and only calls the
/// factory when the queue is empty. [`release`](Self::release) appends an
/// instance to the back of the queue.
///
/// Ordering: a released instance comes back from `get` once every instance
/// released before it has been handed out. In particular `release(x)`
/// followed by `get()` returns `x` when the ready queue was empty.
///
/// # Thread Safety
///
/// The pool is not synchronized. Keep it on the thread that drives it.
pub struct ObjectPool<T, F> {
    factory: F,
    ready: VecDeque<T>,
    created: usize,
    /// Instances handed out and not yet released, tracked only to flag
    /// over-release in debug builds.
    #[cfg(debug_assertions)]
    outstanding: usize,
}

impl<T, F> ObjectPool<T, F>
where
    F: Factory<T>,
{
    /// Builds a pool, pre-building `config.capacity` instances when
    /// `config.fill` is set.
    ///
    /// A factory failure during the fill is returned and the partially
    /// filled pool is dropped.
    pub fn try_with_config(factory: F, config: PoolConfig) -> Result<Self, F::Error> {
        let mut pool = Self {
            factory,
            ready: VecDeque::with_capacity(config.capacity),
            created: 0,
            #[cfg(debug_assertions)]
            outstanding: 0,
        };
        pool.try_warm(config.prefill())?;
        Ok(pool)
    }

    /// Hands out the oldest ready instance, or builds one if none is ready.
    ///
    /// A factory failure is returned as is. The pool is left unchanged.
    pub fn try_get(&mut self) -> Result<T, F::Error> {
        let item = match self.ready.pop_front() {
            Some(item) => item,
            None => {
                trace!("pool exhausted, building instance #{}", self.created + 1);
                self.create()?
            }
        };
        #[cfg(debug_assertions)]
        {
            self.outstanding += 1;
        }
        Ok(item)
    }

    /// Builds `count` more instances and queues them.
    ///
    /// Instances built before a factory failure stay queued.
    pub fn try_warm(&mut self, count: usize) -> Result<(), F::Error> {
        self.ready.reserve(count);
        for _ in 0..count {
            let item = self.create()?;
            self.ready.push_back(item);
        }
        Ok(())
    }

    fn create(&mut self) -> Result<T, F::Error> {
        let item = self.factory.create()?;
        self.created += 1;
        Ok(item)
    }
}

impl<T, F> ObjectPool<T, F>
where
    F: Factory<T, Error = Infallible>,
{
    /// Builds a pool with `capacity` pre-built instances.
    pub fn new(factory: F, capacity: usize) -> Self {
        Self::with_config(factory, PoolConfig::new(capacity))
    }

    pub fn with_config(factory: F, config: PoolConfig) -> Self {
        match Self::try_with_config(factory, config) {
            Ok(pool) => pool,
            Err(never) => match never {},
        }
    }

    /// Hands out the oldest ready instance, or builds one if none is ready.
    pub fn get(&mut self) -> T {
        match self.try_get() {
            Ok(item) => item,
            Err(never) => match never {},
        }
    }

    pub fn warm(&mut self, count: usize) {
        match self.try_warm(count) {
            Ok(()) => {}
            Err(never) => match never {},
        }
    }
}

impl<T, F> ObjectPool<T, F> {
    /// Queues `item` for a later [`get`](Self::get).
    ///
    /// The pool does not check where `item` came from. Releasing an instance
    /// that is not checked out, or releasing it twice, grows the ready queue
    /// and can hand the same instance out twice. Debug builds log a warning
    /// when more instances are released than were handed out.
    pub fn release(&mut self, item: T) {
        #[cfg(debug_assertions)]
        {
            match self.outstanding.checked_sub(1) {
                Some(outstanding) => self.outstanding = outstanding,
                None => log::warn!(
                    "released more instances than were handed out, {} now ready",
                    self.ready.len() + 1
                ),
            }
        }
        self.ready.push_back(item);
    }

    /// Number of instances ready to be handed out.
    #[inline]
    pub fn available(&self) -> usize {
        self.ready.len()
    }

    /// Number of instances the factory has built for this pool.
    #[inline]
    pub const fn created(&self) -> usize {
        self.created
    }

    /// Drops every ready instance. Checked-out instances are unaffected.
    pub fn clear(&mut self) {
        debug!("dropping {} pooled instances", self.ready.len());
        self.ready.clear();
    }

    pub const fn factory(&self) -> &F {
        &self.factory
    }

    pub const fn factory_mut(&mut self) -> &mut F {
        &mut self.factory
    }
}

impl<T, F> fmt::Debug for ObjectPool<T, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObjectPool")
            .field("available", &self.ready.len())
            .field("created", &self.created)
            .finish_non_exhaustive()
    }
}
