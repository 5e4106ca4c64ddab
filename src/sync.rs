//! Abstracts over `std::sync` and `loom::sync`, so the Queue can be model
//! checked by loom without changing any of its Code

#[cfg(loom)]
pub(crate) use loom::sync::{Condvar, Mutex, MutexGuard};

#[cfg(not(loom))]
pub(crate) use std::sync::{Condvar, Mutex, MutexGuard};

use std::sync::LockResult;

/// Unwraps the Guard from a possibly poisoned Lock-Result.
///
/// No user supplied Code ever runs while one of our Locks is held, so a
/// panic in another Thread can never leave the protected State half updated
/// and the Guard is therefore always safe to keep using
#[inline]
pub(crate) fn unpoison<G>(result: LockResult<G>) -> G {
    result.unwrap_or_else(|poisoned| poisoned.into_inner())
}
