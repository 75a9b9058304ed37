// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the crate. Constants are organized by category.
//!
//! # Categories
//!
//! - **Toast**: Display duration and preemption floor
//! - **Queue**: Pending-toast queue capacity bounds
//! - **Scheduling**: Tick cadence driving timer expiry
//! - **Diagnostics**: Event buffer capacity bounds

// ==========================================================================
// Toast Defaults
// ==========================================================================

/// Default visible lifetime of a toast, in milliseconds.
pub const DEFAULT_TOAST_DURATION_MS: u64 = 5000;

/// Hard floor for the remaining lifetime of a preempted toast, in
/// milliseconds. A toast resumed after preemption is never shown for less
/// than this.
pub const MIN_REMAINING_MS: u64 = 1000;

// ==========================================================================
// Queue Defaults
// ==========================================================================

/// Default number of pending toasts held while one is displayed.
pub const DEFAULT_MAX_QUEUE_SIZE: usize = 5;

/// Minimum allowed queue capacity.
pub const MIN_MAX_QUEUE_SIZE: usize = 1;

/// Maximum allowed queue capacity.
pub const MAX_MAX_QUEUE_SIZE: usize = 32;

/// Whether a toast whose message matches one already tracked is dropped.
pub const DEFAULT_PREVENT_DUPLICATES: bool = true;

// ==========================================================================
// Scheduling Defaults
// ==========================================================================

/// Cadence of the tick subscription that detects dismissal-timer expiry,
/// in milliseconds.
pub const TICK_INTERVAL_MS: u64 = 100;

// ==========================================================================
// Diagnostics Defaults
// ==========================================================================

/// Default capacity of the diagnostics event ring buffer.
pub const DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY: usize = 1000;

/// Minimum diagnostics buffer capacity.
pub const MIN_DIAGNOSTICS_BUFFER_CAPACITY: usize = 100;

/// Maximum diagnostics buffer capacity.
pub const MAX_DIAGNOSTICS_BUFFER_CAPACITY: usize = 5000;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    // Toast validation
    assert!(MIN_REMAINING_MS > 0);
    assert!(DEFAULT_TOAST_DURATION_MS >= MIN_REMAINING_MS);

    // Queue validation
    assert!(MIN_MAX_QUEUE_SIZE > 0);
    assert!(MAX_MAX_QUEUE_SIZE >= MIN_MAX_QUEUE_SIZE);
    assert!(DEFAULT_MAX_QUEUE_SIZE >= MIN_MAX_QUEUE_SIZE);
    assert!(DEFAULT_MAX_QUEUE_SIZE <= MAX_MAX_QUEUE_SIZE);

    // Scheduling validation
    assert!(TICK_INTERVAL_MS > 0);
    assert!(TICK_INTERVAL_MS < MIN_REMAINING_MS);

    // Diagnostics validation
    assert!(MIN_DIAGNOSTICS_BUFFER_CAPACITY > 0);
    assert!(MAX_DIAGNOSTICS_BUFFER_CAPACITY >= MIN_DIAGNOSTICS_BUFFER_CAPACITY);
    assert!(DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY >= MIN_DIAGNOSTICS_BUFFER_CAPACITY);
    assert!(DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY <= MAX_DIAGNOSTICS_BUFFER_CAPACITY);
};
