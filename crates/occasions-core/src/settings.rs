//! Global library settings.
//!
//! [`Settings`] holds the optional **evaluation date** — the date the
//! engine treats as "today" when deciding whether an occurrence has
//! already passed.  It is a process-wide singleton accessed via a
//! `std::sync::OnceLock`.
//!
//! When no evaluation date is set, callers fall back to the local
//! wall-clock date, re-read on every resolution.  Tests and batch jobs
//! (e.g. precomputing next year's reminder schedule) pin the date here.
//!
//! Thread safety: the evaluation date is stored behind a `Mutex` so that
//! it can be changed from any thread.  Each test that changes the
//! evaluation date should restore it when done.

use std::sync::{Mutex, OnceLock};

/// Process-wide settings used by the occasions-rs engine.
///
/// Currently the only setting is the evaluation date, stored as a serial
/// number (days since the epoch used by `occasions_time::Date`:
/// serial 1 = January 1, 1900).
pub struct Settings {
    evaluation_date: Mutex<Option<i32>>,
}

static INSTANCE: OnceLock<Settings> = OnceLock::new();

impl Settings {
    /// Return a reference to the global singleton.
    pub fn instance() -> &'static Settings {
        INSTANCE.get_or_init(|| Settings {
            evaluation_date: Mutex::new(None),
        })
    }

    /// Return the pinned evaluation date serial, or `None` if resolution
    /// should use the wall clock.
    pub fn evaluation_date_serial(&self) -> Option<i32> {
        *self
            .evaluation_date
            .lock()
            .expect("Settings mutex poisoned")
    }

    /// Pin the evaluation date to a serial number.
    pub fn set_evaluation_date_serial(&self, serial: i32) {
        *self
            .evaluation_date
            .lock()
            .expect("Settings mutex poisoned") = Some(serial);
    }

    /// Clear the evaluation date, resetting it to "use today".
    pub fn reset_evaluation_date(&self) {
        *self
            .evaluation_date
            .lock()
            .expect("Settings mutex poisoned") = None;
    }
}
