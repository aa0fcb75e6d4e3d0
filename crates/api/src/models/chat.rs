//! Chat statistics shape.

use serde::{Deserialize, Serialize};

/// Aggregate chat statistics for the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatStats {
    /// Number of chats held.
    pub total_chats: u32,
    /// Total time spent chatting, in seconds.
    pub total_time: u32,
    /// Mean chat length, in seconds.
    pub average_duration: u32,
}
