use core::convert::Infallible;

/// Builds the instances of a pool.
///
/// Any `FnMut() -> T` closure is an infallible factory. Wrap a closure
/// returning `Result<T, E>` in [`TryFromFn`] to get a fallible one whose
/// errors reach the caller of [`ObjectPool::try_get`](super::ObjectPool::try_get).
///
/// The pool never asks the factory to destroy instances; dropping them is
/// the owner's business.
pub trait Factory<T> {
    type Error;

    /// Manufactures one new instance.
    fn create(&mut self) -> Result<T, Self::Error>;
}

impl<T, F> Factory<T> for F
where
    F: FnMut() -> T,
{
    type Error = Infallible;

    #[inline]
    fn create(&mut self) -> Result<T, Infallible> {
        Ok(self())
    }
}

/// Adapts a fallible closure into a [`Factory`].
#[derive(Debug, Clone, Copy)]
pub struct TryFromFn<F>(pub F);

impl<T, E, F> Factory<T> for TryFromFn<F>
where
    F: FnMut() -> Result<T, E>,
{
    type Error = E;

    #[inline]
    fn create(&mut self) -> Result<T, E> {
        (self.0)()
    }
}
