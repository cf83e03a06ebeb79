use core::convert::Infallible;
use core::hash::Hash;

use hashbrown::HashSet;
use log::debug;

use crate::error::HidingPoolError;

use super::config::PoolConfig;
use super::factory::Factory;
use super::object::ObjectPool;

/// Host callback that takes an instance out of play, for example by moving it
/// far outside the visible area instead of deactivating it.
///
/// Any `FnMut(&mut T)` closure qualifies.
pub trait Hide<T> {
    fn hide(&mut self, item: &mut T);
}

impl<T, H> Hide<T> for H
where
    H: FnMut(&mut T),
{
    #[inline]
    fn hide(&mut self, item: &mut T) {
        self(item)
    }
}

/// Factory wrapper that hides every instance it builds, so everything waiting
/// in the pool is out of play.
#[derive(Debug)]
pub struct HideOnCreate<F, H> {
    factory: F,
    hide: H,
}

impl<F, H> HideOnCreate<F, H> {
    /// The wrapped factory.
    pub const fn factory(&self) -> &F {
        &self.factory
    }

    /// The host's hide callback.
    pub const fn hider(&self) -> &H {
        &self.hide
    }
}

impl<T, F, H> Factory<T> for HideOnCreate<F, H>
where
    F: Factory<T>,
    H: Hide<T>,
{
    type Error = F::Error;

    fn create(&mut self) -> Result<T, F::Error> {
        let mut item = self.factory.create()?;
        self.hide.hide(&mut item);
        Ok(item)
    }
}

/// A pool of host-owned instances addressed by copyable handles (entity ids,
/// scene object keys) that hides instances instead of destroying them.
///
/// Unlike [`ObjectPool`], it remembers which handles are checked out. That
/// lets it reject stray releases and put every active instance back at once
/// with [`clear`](Self::clear).
///
/// Handles are the identity of an instance, so the factory must never build
/// two instances with the same handle. Debug builds assert this when an
/// instance is handed out.
pub struct HidingPool<T, F, H> {
    pool: ObjectPool<T, HideOnCreate<F, H>>,
    active: HashSet<T>,
}

impl<T, F, H> HidingPool<T, F, H>
where
    T: Copy + Eq + Hash,
    F: Factory<T>,
    H: Hide<T>,
{
    pub fn try_new(factory: F, hide: H, config: PoolConfig) -> Result<Self, F::Error> {
        Ok(Self {
            pool: ObjectPool::try_with_config(HideOnCreate { factory, hide }, config)?,
            active: HashSet::with_capacity(config.capacity),
        })
    }

    /// Hands out an instance and marks it active. The caller is expected to
    /// bring it back into play.
    pub fn try_get(&mut self) -> Result<T, F::Error> {
        let item = self.pool.try_get()?;
        let fresh = self.active.insert(item);
        debug_assert!(fresh, "pooled instance handed out while already active");
        Ok(item)
    }

    /// Builds a hidden instance outside the pool's bookkeeping. It is neither
    /// queued nor checked out and belongs to the caller.
    pub fn try_create(&mut self) -> Result<T, F::Error> {
        self.pool.factory_mut().create()
    }
}

impl<T, F, H> HidingPool<T, F, H>
where
    T: Copy + Eq + Hash,
    F: Factory<T, Error = Infallible>,
    H: Hide<T>,
{
    pub fn new(factory: F, hide: H, config: PoolConfig) -> Self {
        match Self::try_new(factory, hide, config) {
            Ok(pool) => pool,
            Err(never) => match never {},
        }
    }

    pub fn get(&mut self) -> T {
        match self.try_get() {
            Ok(item) => item,
            Err(never) => match never {},
        }
    }

    pub fn create(&mut self) -> T {
        match self.try_create() {
            Ok(item) => item,
            Err(never) => match never {},
        }
    }
}

impl<T, F, H> HidingPool<T, F, H>
where
    T: Copy + Eq + Hash,
    H: Hide<T>,
{
    /// Hides an active instance and queues it for reuse.
    pub fn release(&mut self, mut item: T) -> Result<(), HidingPoolError> {
        if !self.active.remove(&item) {
            return Err(HidingPoolError::NotCheckedOut);
        }
        self.pool.factory_mut().hide.hide(&mut item);
        self.pool.release(item);
        Ok(())
    }

    /// Hides and releases every active instance.
    pub fn clear(&mut self) {
        debug!("returning {} active instances to the pool", self.active.len());
        let Self { pool, active } = self;
        for mut item in active.drain() {
            pool.factory_mut().hide.hide(&mut item);
            pool.release(item);
        }
    }

    /// Whether `item` is currently checked out.
    pub fn is_active(&self, item: &T) -> bool {
        self.active.contains(item)
    }

    /// Checked-out instances, in no particular order.
    pub fn active(&self) -> impl Iterator<Item = &T> {
        self.active.iter()
    }

    pub fn active_count(&self) -> usize {
        self.active.len()
    }

    /// Number of hidden instances ready to be handed out.
    pub fn available(&self) -> usize {
        self.pool.available()
    }

    /// Number of instances the factory has built for this pool. Instances
    /// from [`create`](Self::create) are not counted.
    pub fn created(&self) -> usize {
        self.pool.created()
    }

    /// The underlying pool of hidden, ready instances.
    pub const fn pool(&self) -> &ObjectPool<T, HideOnCreate<F, H>> {
        &self.pool
    }
}
