//! Exclusive ownership of a device shared between tasks.
//!
//! The tone player and the sound level analyzer have no locking of their own.
//! When more than one task needs one of them, park it in a [`Shared`] and hand
//! out [`Handle`]s: every operation then runs under the mutex.

use core::ops::{Deref, DerefMut};
use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_sync::mutex::{Mutex, MutexGuard, TryLockError};

pub struct Shared<M: RawMutex, T> {
    t: Mutex<M, Option<T>>,
}

impl<M: RawMutex, T> Shared<M, T> {
    pub const fn new() -> Self {
        Self {
            t: Mutex::new(None),
        }
    }

    /// Install the owned device and return the first handle to it.
    ///
    /// Fails, giving `t` back, if the slot is already in use.
    pub fn initialize(&self, t: T) -> Result<Handle<'_, M, T>, T> {
        match self.t.try_lock() {
            Ok(mut guard) if guard.is_none() => {
                guard.replace(t);
                Ok(Handle { handle: &self.t })
            }
            _ => Err(t),
        }
    }
}

impl<M: RawMutex, T> Default for Shared<M, T> {
    fn default() -> Self {
        Self::new()
    }
}

pub struct Handle<'a, M: RawMutex, T> {
    handle: &'a Mutex<M, Option<T>>,
}

impl<'a, M: RawMutex, T> Clone for Handle<'a, M, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, M: RawMutex, T> Copy for Handle<'a, M, T> {}

pub struct HandleGuard<'a, M: RawMutex, T> {
    guard: MutexGuard<'a, M, Option<T>>,
}

impl<'a, M: RawMutex, T> Handle<'a, M, T> {
    pub async fn lock(&self) -> HandleGuard<'a, M, T> {
        HandleGuard {
            guard: self.handle.lock().await,
        }
    }

    pub fn try_lock(&self) -> Result<HandleGuard<'a, M, T>, TryLockError> {
        let guard = self.handle.try_lock()?;
        Ok(HandleGuard { guard })
    }
}

impl<'a, M: RawMutex, T> Deref for HandleGuard<'a, M, T> {
    type Target = T;
    fn deref(&self) -> &Self::Target {
        match self.guard.deref() {
            Some(t) => t,
            // Handles only exist once `initialize` stored a value, which is never removed.
            None => unreachable!(),
        }
    }
}

impl<'a, M: RawMutex, T> DerefMut for HandleGuard<'a, M, T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        match self.guard.deref_mut() {
            Some(t) => t,
            None => unreachable!(),
        }
    }
}
