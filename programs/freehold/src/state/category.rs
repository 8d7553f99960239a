use anchor_lang::prelude::*;

/// Per-property classification: one category label and a bounded tag list.
/// Owner-only; `add_category` overwrites the whole record.
#[account]
pub struct PropertyCategory {
    /// The property this classification belongs to
    pub property_id: u64,
    /// Category label (max 32 bytes)
    pub category: [u8; 32],
    /// Search tags, at most 10 of at most 20 bytes each
    pub tags: Vec<String>,
    /// PDA bump seed
    pub bump: u8,
}

impl PropertyCategory {
    pub const MAX_CATEGORY_LEN: usize = 32;
    pub const MAX_TAGS: usize = 10;
    pub const MAX_TAG_LEN: usize = 20;

    pub const SIZE: usize = 8 +  // discriminator
        8 +                      // property_id
        32 +                     // category
        4 + Self::MAX_TAGS * (4 + Self::MAX_TAG_LEN) + // tags
        1;                       // bump

    pub fn tags_within_bounds(tags: &[String]) -> bool {
        tags.len() <= Self::MAX_TAGS && tags.iter().all(|t| t.len() <= Self::MAX_TAG_LEN)
    }
}
