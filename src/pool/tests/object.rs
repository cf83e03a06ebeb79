extern crate std;

use std::cell::Cell;
use std::vec;
use std::vec::Vec;

use crate::pool::{ObjectPool, PoolConfig, TryFromFn};

#[test]
fn test_filled_pool_serves_prewarmed_instances() {
    let calls = Cell::new(0u32);
    let mut pool: ObjectPool<u32, _> = ObjectPool::new(
        || {
            calls.set(calls.get() + 1);
            calls.get()
        },
        3,
    );
    assert_eq!(calls.get(), 3);
    assert_eq!(pool.available(), 3);

    let handed_out: Vec<_> = (0..3).map(|_| pool.get()).collect();
    assert_eq!(handed_out, vec![1, 2, 3]);
    assert_eq!(calls.get(), 3);

    // capacity + 1 calls the factory exactly once more
    assert_eq!(pool.get(), 4);
    assert_eq!(calls.get(), 4);
    assert_eq!(pool.created(), 4);
}

#[test]
fn test_lazy_pool_starts_empty() {
    let calls = Cell::new(0u32);
    let mut pool: ObjectPool<u32, _> = ObjectPool::with_config(
        || {
            calls.set(calls.get() + 1);
            calls.get()
        },
        PoolConfig::lazy(16),
    );
    assert_eq!(pool.available(), 0);
    assert_eq!(calls.get(), 0);

    assert_eq!(pool.get(), 1);
    assert_eq!(calls.get(), 1);
}

#[test]
fn test_release_then_get_round_trip() {
    let mut pool: ObjectPool<Vec<u8>, _> = ObjectPool::with_config(Vec::new, PoolConfig::lazy(1));
    let mut buffer = pool.get();
    buffer.push(7);
    pool.release(buffer);
    assert_eq!(pool.available(), 1);

    let buffer = pool.get();
    assert_eq!(buffer, vec![7]);
    assert_eq!(pool.created(), 1);
}

#[test]
fn test_ready_queue_is_fifo() {
    let next = Cell::new(0u32);
    let mut pool: ObjectPool<u32, _> = ObjectPool::new(
        || {
            next.set(next.get() + 1);
            next.get()
        },
        2,
    );

    // Pre-warmed instances come out before anything released later
    pool.release(10);
    assert_eq!(pool.get(), 1);
    assert_eq!(pool.get(), 2);
    assert_eq!(pool.get(), 10);
}

#[test]
fn test_over_release_grows_queue() {
    let mut pool: ObjectPool<u32, _> = ObjectPool::new(|| 0, 1);
    let item = pool.get();
    pool.release(item);
    pool.release(item);
    assert_eq!(pool.available(), 2);
    assert_eq!(pool.get(), item);
    assert_eq!(pool.get(), item);
    assert_eq!(pool.created(), 1);
}

#[test]
fn test_factory_failure_propagates() {
    let fail = Cell::new(false);
    let mut pool: ObjectPool<u32, _> = ObjectPool::try_with_config(
        TryFromFn(|| if fail.get() { Err("factory down") } else { Ok(5) }),
        PoolConfig::new(1),
    )
    .unwrap();

    fail.set(true);
    assert_eq!(pool.try_get(), Ok(5));
    assert_eq!(pool.try_get(), Err("factory down"));
    assert_eq!(pool.available(), 0);
    assert_eq!(pool.created(), 1);

    fail.set(false);
    assert_eq!(pool.try_get(), Ok(5));
    assert_eq!(pool.created(), 2);
}

#[test]
fn test_fill_failure_is_returned() {
    let built = Cell::new(0u32);
    let result = ObjectPool::<u32, _>::try_with_config(
        TryFromFn(|| {
            built.set(built.get() + 1);
            if built.get() > 2 { Err(built.get()) } else { Ok(built.get()) }
        }),
        PoolConfig::new(4),
    );
    assert_eq!(result.err(), Some(3));
}

#[test]
fn test_warm_and_clear() {
    let mut pool: ObjectPool<u32, _> = ObjectPool::with_config(|| 1, PoolConfig::lazy(4));
    pool.warm(4);
    assert_eq!(pool.available(), 4);
    assert_eq!(pool.created(), 4);

    pool.clear();
    assert_eq!(pool.available(), 0);
    pool.get();
    assert_eq!(pool.created(), 5);
}

#[test]
fn test_config() {
    let config = PoolConfig::default();
    assert_eq!(config.capacity, PoolConfig::DEFAULT_CAPACITY);
    assert!(config.fill);
    assert_eq!(config.prefill(), 100);

    let config = config.with_capacity(8).with_fill(false);
    assert_eq!(config, PoolConfig::lazy(8));
    assert_eq!(config.prefill(), 0);
}
