// Sale status tags. Statuses arrive as free-form tags from the data source;
// anything not listed here is carried through verbatim.

/// Payment confirmed and the sale is final.
pub const SALE_STATUS_COMPLETED: &str = "completed";

/// Approved by the payment platform, awaiting settlement.
pub const SALE_STATUS_APPROVED: &str = "approved";

/// Created but not yet confirmed.
pub const SALE_STATUS_PENDING: &str = "pending";

/// Reversed or refunded. Excluded from the leaderboard.
pub const SALE_STATUS_CANCELLED: &str = "cancelled";
