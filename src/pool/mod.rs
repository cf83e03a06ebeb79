//! # Object Pool
//!
//! Queues of pre-built instances that are handed out and taken back instead
//! of being constructed and dropped every frame.
//!
//! - [`Factory`]: the capability a pool calls to manufacture an instance.
//! - [`PoolConfig`]: pre-warm count and fill policy.
//! - [`ObjectPool`]: the generic FIFO pool.
//! - [`HidingPool`]: a pool of host-owned instances that are moved out of the
//!   way by a [`Hide`] callback instead of being deactivated.
//!
//! The pools do not know which instances are checked out. Releasing an
//! instance twice puts it in the ready queue twice; see
//! [`ObjectPool::release`].
//!
//! ```
//! use recycle_collections::pool::{ObjectPool, PoolConfig};
//!
//! let mut pool: ObjectPool<Vec<u8>, _> =
//!     ObjectPool::with_config(|| Vec::with_capacity(1024), PoolConfig::new(2));
//! let mut buffer = pool.get();
//! buffer.extend_from_slice(b"frame");
//! buffer.clear();
//! pool.release(buffer);
//! assert_eq!(pool.available(), 2);
//! assert_eq!(pool.created(), 2);
//! ```

mod config;
mod factory;
mod hiding;
mod object;

pub use config::PoolConfig;
pub use factory::{Factory, TryFromFn};
pub use hiding::{HideOnCreate, HidingPool, Hide};
pub use object::ObjectPool;

#[cfg(test)]
mod tests;
