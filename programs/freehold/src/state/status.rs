use anchor_lang::prelude::*;

/// Per-property status and visibility, written by the owner or by a
/// collaborator holding the "update-status" permission. The governance
/// module drives this record when it approves pending listings.
///
/// Status strings are free-form; the registry only ever writes "pending"
/// itself, at registration.
#[account]
pub struct PropertyStatus {
    /// The property this status belongs to
    pub property_id: u64,
    /// Current status label (max 32 bytes)
    pub status: [u8; 32],
    /// Whether the listing is publicly visible
    pub visibility: bool,
    /// Height of the last overwrite
    pub last_updated: u64,
    /// PDA bump seed
    pub bump: u8,
}

impl PropertyStatus {
    /// Status every property carries from registration until an authorized
    /// actor overwrites it.
    pub const PENDING: &'static str = "pending";

    pub const MAX_STATUS_LEN: usize = 32;

    pub const SIZE: usize = 8 +  // discriminator
        8 +                      // property_id
        32 +                     // status
        1 +                      // visibility
        8 +                      // last_updated
        1;                       // bump
}
