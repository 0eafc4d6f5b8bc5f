//! Macros for working with the container lock
//!
//! `CameraListRefresher` keeps its `cam-list` container behind a `std::sync::RwLock`. These
//! macros hand back that lock's guard even after a panic poisoned it, logging a warning.


/// Unconditionally retrieves a lock guard
///
/// Clients should prefer to use `do_read` or `do_write`.
#[macro_export]
macro_rules! _unwrap_lock {
    ($lock:expr, $op:ident) => ({
        use log::warn;
        $lock.$op()
            .unwrap_or_else(|err| {
                warn!("a lock is poisoned");
                err.into_inner()
            })
    })
}


/// Unconditionally retrieves a read guard from a `RwLock`
///
/// A warning is emitted if the `RwLock` is poisoned.
#[macro_export]
macro_rules! do_read {
    ($lock:expr) => ({
        use $crate::_unwrap_lock;
        _unwrap_lock!($lock, read)
    })
}


/// Unconditionally retrieves the write guard from a `RwLock`
///
/// A warning is emitted if the `RwLock` is poisoned.
#[macro_export]
macro_rules! do_write {
    ($lock:expr) => ({
        use $crate::_unwrap_lock;
        _unwrap_lock!($lock, write)
    })
}
