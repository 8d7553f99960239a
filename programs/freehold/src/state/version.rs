use anchor_lang::prelude::*;

/// One valuation snapshot in a property's append-only history, keyed by the
/// owner-chosen version number. Written only by `register_new_version`,
/// which overwrites the property's live value in the same transaction.
#[account]
pub struct ValuationVersion {
    /// The property this snapshot belongs to
    pub property_id: u64,
    /// Owner-chosen version number
    pub version: u64,
    /// The valuation recorded by this snapshot
    pub updated_value: u64,
    /// Free-form notes (max 256 bytes)
    pub notes: [u8; 256],
    /// Height at which the snapshot was recorded
    pub recorded_at: u64,
    /// PDA bump seed
    pub bump: u8,
}

impl ValuationVersion {
    pub const MAX_NOTES_LEN: usize = 256;

    pub const SIZE: usize = 8 +  // discriminator
        8 +                      // property_id
        8 +                      // version
        8 +                      // updated_value
        256 +                    // notes
        8 +                      // recorded_at
        1;                       // bump
}
