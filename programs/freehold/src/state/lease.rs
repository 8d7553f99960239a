use anchor_lang::prelude::*;

/// Time-bounded occupancy right for one (property, lessee) pair.
///
/// Expiry is evaluated lazily at read time: nothing ever clears the stored
/// `active` flag when the height passes `expires_at`, so an expired lease
/// still holds `active: true` in storage while `is_active_at` reads false.
#[account]
pub struct Lease {
    /// The property under lease
    pub property_id: u64,
    /// The lessee's wallet
    pub lessee: Pubkey,
    /// Last height at which the lease is still active
    pub expires_at: u64,
    /// Free-form lease terms (max 256 bytes)
    pub terms: [u8; 256],
    /// Set at grant time; never cleared by the passage of height
    pub active: bool,
    /// Height at which the lease was granted
    pub granted_at: u64,
    /// PDA bump seed
    pub bump: u8,
}

impl Lease {
    pub const MAX_TERMS_LEN: usize = 256;

    pub const SIZE: usize = 8 +  // discriminator
        8 +                      // property_id
        32 +                     // lessee
        8 +                      // expires_at
        256 +                    // terms
        1 +                      // active
        8 +                      // granted_at
        1;                       // bump

    /// Read-time liveness: the stored flag is necessary but not sufficient.
    pub fn is_active_at(&self, height: u64) -> bool {
        self.active && self.expires_at >= height
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::str_to_fixed;

    fn lease_expiring_at(expires_at: u64) -> Lease {
        Lease {
            property_id: 1,
            lessee: Pubkey::new_unique(),
            expires_at,
            terms: str_to_fixed("12 month residential"),
            active: true,
            granted_at: 5,
            bump: 255,
        }
    }

    #[test]
    fn active_until_and_including_expiry_height() {
        let lease = lease_expiring_at(105);
        assert!(lease.is_active_at(5));
        assert!(lease.is_active_at(104));
        assert!(lease.is_active_at(105));
        assert!(!lease.is_active_at(106));
    }

    #[test]
    fn expiry_never_touches_the_stored_flag() {
        let lease = lease_expiring_at(105);
        assert!(!lease.is_active_at(200));
        // Storage still says active; only the predicate says otherwise
        assert!(lease.active);
    }

    #[test]
    fn cleared_flag_overrides_any_height() {
        let mut lease = lease_expiring_at(105);
        lease.active = false;
        assert!(!lease.is_active_at(5));
        assert!(!lease.is_active_at(105));
    }
}
