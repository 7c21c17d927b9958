//! Lock used by the session registry, backed by `std` or `spin`.

#[cfg(feature = "std")]
type Inner<T> = std::sync::Mutex<T>;
#[cfg(feature = "std")]
pub type Guard<'a, T> = std::sync::MutexGuard<'a, T>;

#[cfg(all(not(feature = "std"), feature = "alloc"))]
type Inner<T> = spin::Mutex<T>;
#[cfg(all(not(feature = "std"), feature = "alloc"))]
pub type Guard<'a, T> = spin::MutexGuard<'a, T>;

pub struct Lock<T>(Inner<T>);

impl<T> Lock<T> {
    pub const fn new(value: T) -> Self {
        Self(Inner::new(value))
    }

    /// A poisoned lock is recovered: round actions commit only after their
    /// last fallible step, so a panicking holder never leaves a torn round.
    #[cfg(feature = "std")]
    pub fn lock(&self) -> Guard<'_, T> {
        self.0
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    #[cfg(all(not(feature = "std"), feature = "alloc"))]
    pub fn lock(&self) -> Guard<'_, T> {
        self.0.lock()
    }
}
