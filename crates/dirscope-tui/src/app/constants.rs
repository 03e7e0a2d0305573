//! Application constants.

/// Number of items to move when pressing Page Up/Down.
pub const PAGE_SIZE: usize = 10;

/// Event loop tick interval in milliseconds.
pub const TICK_INTERVAL_MS: u64 = 100;

/// Maximum number of notifications kept on screen.
pub const MAX_NOTIFICATIONS: usize = 5;
