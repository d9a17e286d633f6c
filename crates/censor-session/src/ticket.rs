use serde::{Deserialize, Serialize};

/// Sequence number handed out when a detection request starts. A response
/// may only be applied while its ticket is still the latest one issued.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RequestTicket {
    sequence: u64,
}

impl RequestTicket {
    pub(crate) fn new(sequence: u64) -> Self {
        Self { sequence }
    }

    pub fn sequence(&self) -> u64 {
        self.sequence
    }
}
