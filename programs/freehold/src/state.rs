use anchor_lang::prelude::*;

// =============================================================================
// FREEHOLD STATE - Property Registry
// =============================================================================
//
// Authoritative ledger of real-estate assets for a fractional-ownership
// platform. The registry stores facts and permission state only; the
// components that compute value transfers (dividend distributor, governance,
// marketplace, oracle feeds) read and write through these records.
// =============================================================================

pub mod category;
pub mod collaborator;
pub mod lease;
pub mod revenue;
pub mod status;
pub mod version;

pub use category::*;
pub use collaborator::*;
pub use lease::*;
pub use revenue::*;
pub use status::*;
pub use version::*;

/// Registry singleton: issues property ids and carries the logical clock.
///
/// Every mutating instruction takes this account writable, which both
/// serializes all mutations and lets the instruction stamp records with the
/// current height before advancing it.
#[account]
pub struct Registry {
    /// Next property id to be issued; starts at 1, never reused
    pub next_property_id: u64,
    /// Logical height, advanced by one on every successful mutation.
    /// Read paths never move it.
    pub height: u64,
    /// Total properties ever registered (deactivation does not decrement)
    pub total_properties: u64,
    /// PDA bump seed
    pub bump: u8,
}

impl Registry {
    pub const SIZE: usize = 8 +  // discriminator
        8 +                      // next_property_id
        8 +                      // height
        8 +                      // total_properties
        1;                       // bump

    /// Issue the next property id. Strictly increasing, no failure mode.
    pub fn allocate_property_id(&mut self) -> u64 {
        let id = self.next_property_id;
        self.next_property_id += 1;
        id
    }

    /// Advance the logical clock by one height.
    pub fn advance(&mut self) {
        self.height += 1;
    }
}

/// Property lifecycle. `Deactivated` is terminal: no instruction maps it
/// back to `Active`.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum PropertyState {
    Active,
    Deactivated,
}

/// Primary record of a registered real-estate asset.
///
/// Exclusively owned by `owner`; secondary records (status, category,
/// collaborator grants, revenue shares, leases, valuation history) hang off
/// the id and survive deactivation for audit.
#[account]
pub struct Property {
    /// Unique id issued by the registry
    pub id: u64,
    /// The wallet that owns this property record
    pub owner: Pubkey,
    /// Height at which the property was registered
    pub created_at: u64,
    /// Street address (max 64 bytes)
    pub address: [u8; 64],
    /// Current valuation; kept in step with the valuation history
    pub value: u64,
    /// Rental income per period, written by the oracle feed through `update`
    pub rental_income: u64,
    /// Free-form description (max 500 bytes)
    pub description: [u8; 500],
    /// Lifecycle state
    pub state: PropertyState,
    /// PDA bump seed
    pub bump: u8,
}

impl Property {
    pub const MAX_ADDRESS_LEN: usize = 64;
    pub const MAX_DESCRIPTION_LEN: usize = 500;

    pub const SIZE: usize = 8 +  // discriminator
        8 +                      // id
        32 +                     // owner
        8 +                      // created_at
        64 +                     // address
        8 +                      // value
        8 +                      // rental_income
        500 +                    // description
        1 +                      // state
        1;                       // bump

    /// Registration-time validation: positive value, description in bounds.
    pub fn listing_valid(value: u64, description: &str) -> bool {
        value > 0 && description.len() <= Self::MAX_DESCRIPTION_LEN
    }

    /// Ownership check exposed to readers (marketplace, verification surface).
    pub fn is_owned_by(&self, identity: &Pubkey) -> bool {
        self.owner == *identity
    }

    pub fn is_active(&self) -> bool {
        matches!(self.state, PropertyState::Active)
    }

    /// Terminal transition. There is no way back.
    pub fn deactivate(&mut self) {
        self.state = PropertyState::Deactivated;
    }
}

/// Merge-patch for `update_property`: each field is independently present or
/// absent, so "unset" is never confused with "set to default". Absent fields
/// retain their prior value.
#[derive(AnchorSerialize, AnchorDeserialize, Clone)]
pub struct PropertyPatch {
    pub address: Option<String>,
    pub value: Option<u64>,
    pub rental_income: Option<u64>,
    pub description: Option<String>,
}

impl PropertyPatch {
    pub fn apply_to(&self, property: &mut Property) {
        if let Some(address) = &self.address {
            property.address = str_to_fixed(address);
        }
        if let Some(value) = self.value {
            property.value = value;
        }
        if let Some(rental_income) = self.rental_income {
            property.rental_income = rental_income;
        }
        if let Some(description) = &self.description {
            property.description = str_to_fixed(description);
        }
    }
}

/// Copy a string into a zero-padded fixed byte array, truncating at capacity.
pub fn str_to_fixed<const N: usize>(s: &str) -> [u8; N] {
    let mut bytes = [0u8; N];
    let slice = s.as_bytes();
    let len = slice.len().min(N);
    bytes[..len].copy_from_slice(&slice[..len]);
    bytes
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fresh_registry() -> Registry {
        Registry {
            next_property_id: 1,
            height: 1,
            total_properties: 0,
            bump: 255,
        }
    }

    fn sample_property(owner: Pubkey) -> Property {
        Property {
            id: 1,
            owner,
            created_at: 1,
            address: str_to_fixed("123 Main St"),
            value: 1_000_000,
            rental_income: 5_000,
            description: str_to_fixed("desc"),
            state: PropertyState::Active,
            bump: 255,
        }
    }

    #[test]
    fn ids_are_strictly_increasing_from_one() {
        let mut registry = fresh_registry();
        assert_eq!(registry.allocate_property_id(), 1);
        assert_eq!(registry.allocate_property_id(), 2);
        assert_eq!(registry.allocate_property_id(), 3);
        assert_eq!(registry.next_property_id, 4);
    }

    #[test]
    fn allocation_is_independent_of_deactivation() {
        let mut registry = fresh_registry();
        let first = registry.allocate_property_id();
        let mut property = sample_property(Pubkey::new_unique());
        property.id = first;
        property.deactivate();
        // A deactivated property never frees its id
        assert_eq!(registry.allocate_property_id(), first + 1);
    }

    #[test]
    fn height_advances_by_one() {
        let mut registry = fresh_registry();
        registry.advance();
        registry.advance();
        assert_eq!(registry.height, 3);
    }

    #[test]
    fn listing_validation_rejects_zero_value() {
        assert!(!Property::listing_valid(0, "desc"));
        assert!(Property::listing_valid(1, "desc"));
    }

    #[test]
    fn listing_validation_bounds_description() {
        let at_limit = "d".repeat(Property::MAX_DESCRIPTION_LEN);
        let over_limit = "d".repeat(Property::MAX_DESCRIPTION_LEN + 1);
        assert!(Property::listing_valid(1, &at_limit));
        assert!(!Property::listing_valid(1, &over_limit));
    }

    #[test]
    fn patch_applies_only_present_fields() {
        let owner = Pubkey::new_unique();
        let mut property = sample_property(owner);

        let patch = PropertyPatch {
            address: None,
            value: Some(2_000_000),
            rental_income: None,
            description: Some("renovated".to_string()),
        };
        patch.apply_to(&mut property);

        assert_eq!(property.value, 2_000_000);
        assert_eq!(property.rental_income, 5_000);
        assert_eq!(property.address, str_to_fixed::<64>("123 Main St"));
        assert_eq!(&property.description[..], &str_to_fixed::<500>("renovated")[..]);
    }

    #[test]
    fn empty_patch_changes_nothing() {
        let owner = Pubkey::new_unique();
        let mut property = sample_property(owner);
        let before_value = property.value;
        let before_income = property.rental_income;

        let patch = PropertyPatch {
            address: None,
            value: None,
            rental_income: None,
            description: None,
        };
        patch.apply_to(&mut property);

        assert_eq!(property.value, before_value);
        assert_eq!(property.rental_income, before_income);
    }

    #[test]
    fn deactivation_is_terminal() {
        let mut property = sample_property(Pubkey::new_unique());
        assert!(property.is_active());
        property.deactivate();
        assert_eq!(property.state, PropertyState::Deactivated);
        // Idempotent: a second deactivation leaves it deactivated
        property.deactivate();
        assert!(!property.is_active());
    }

    #[test]
    fn ownership_check_matches_exact_key() {
        let owner = Pubkey::new_unique();
        let property = sample_property(owner);
        assert!(property.is_owned_by(&owner));
        assert!(!property.is_owned_by(&Pubkey::new_unique()));
    }

    #[test]
    fn fixed_conversion_truncates_at_capacity() {
        let converted: [u8; 4] = str_to_fixed("abcdef");
        assert_eq!(&converted, b"abcd");
        let padded: [u8; 8] = str_to_fixed("ab");
        assert_eq!(&padded[..2], b"ab");
        assert_eq!(&padded[2..], &[0u8; 6]);
    }
}
