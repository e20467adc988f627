//! Shared client state: session, theme, and notification queue.
//!
//! ARCHITECTURE
//! ============
//! Each module owns one process-wide concern held in a Leptos signal and
//! provided through context by the application shell. Pages and components
//! read the signals; mutations go through the owning module's operations.

pub mod session;
pub mod theme;
pub mod toast;
