use anchor_lang::prelude::*;

// =============================================================================
// REVENUE SHARE LEDGER
// =============================================================================
//
// Entitlement percentages only. The dividend distributor reads these records
// together with the property's value and rental income to compute payouts;
// it also owns `total_received` bookkeeping. Note that the registry does not
// check that percentages across participants of one property sum to 100 or
// less — the distributor is the component that has to reconcile the total.
// =============================================================================

/// Revenue entitlement of one participant in one property.
#[account]
pub struct RevenueShare {
    /// The property this entitlement applies to
    pub property_id: u64,
    /// The entitled participant's wallet
    pub participant: Pubkey,
    /// Entitlement in whole percent, 0-100
    pub percentage: u8,
    /// Cumulative amount credited by the dividend distributor.
    /// Reset to zero whenever the entitlement is re-set.
    pub total_received: u64,
    /// PDA bump seed
    pub bump: u8,
}

impl RevenueShare {
    pub const MAX_PERCENTAGE: u8 = 100;

    pub const SIZE: usize = 8 +  // discriminator
        8 +                      // property_id
        32 +                     // participant
        1 +                      // percentage
        8 +                      // total_received
        1;                       // bump

    pub fn valid_percentage(percentage: u8) -> bool {
        percentage <= Self::MAX_PERCENTAGE
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn boundary_values() {
        assert!(RevenueShare::valid_percentage(0));
        assert!(RevenueShare::valid_percentage(100));
        assert!(!RevenueShare::valid_percentage(101));
    }

    proptest! {
        #[test]
        fn validity_matches_the_bound(percentage in any::<u8>()) {
            prop_assert_eq!(
                RevenueShare::valid_percentage(percentage),
                percentage <= 100
            );
        }
    }

    #[test]
    fn per_record_validation_ignores_the_cross_participant_sum() {
        // Two 60% entitlements on the same property are each individually
        // valid; reconciling the 120% total is the distributor's problem.
        let property_id = 1;
        let first = RevenueShare {
            property_id,
            participant: Pubkey::new_unique(),
            percentage: 60,
            total_received: 0,
            bump: 255,
        };
        let second = RevenueShare {
            property_id,
            participant: Pubkey::new_unique(),
            percentage: 60,
            total_received: 0,
            bump: 255,
        };
        assert!(RevenueShare::valid_percentage(first.percentage));
        assert!(RevenueShare::valid_percentage(second.percentage));
        assert!(first.percentage + second.percentage > 100);
    }
}
