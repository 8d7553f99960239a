use std::collections::BTreeSet;

use anchor_lang::prelude::*;

use crate::state::Property;

// =============================================================================
// COLLABORATOR GRANTS
// =============================================================================
//
// Delegated, per-property permission sets. A grant never conveys ownership:
// owner-gated operations stay owner-gated no matter what permissions a
// collaborator holds. The one permission the registry itself interprets is
// "update-status"; everything else in the set is opaque to this program and
// consumed by outside components (e.g. the marketplace consults grants
// before permitting trades).
// =============================================================================

/// Permission that allows a collaborator to overwrite the property's status
/// record on behalf of the owner.
pub const PERM_UPDATE_STATUS: &str = "update-status";

/// Account-space bounds for the permission set.
pub const MAX_PERMISSIONS: usize = 16;
pub const MAX_PERMISSION_LEN: usize = 32;

/// Delegated permission grant for one (property, collaborator) pair.
/// `add_collaborator` overwrites the whole record on re-grant.
#[account]
pub struct Collaborator {
    /// The property this grant applies to
    pub property_id: u64,
    /// The collaborator's wallet
    pub collaborator: Pubkey,
    /// Free-form role label (max 32 bytes)
    pub role: [u8; 32],
    /// Permission strings. An ordered set: duplicates collapse, adding an
    /// existing permission is a no-op, and serialization order is
    /// deterministic.
    pub permissions: BTreeSet<String>,
    /// Height at which the grant was (last) written
    pub added_at: u64,
    /// PDA bump seed
    pub bump: u8,
}

impl Collaborator {
    pub const SIZE: usize = 8 +  // discriminator
        8 +                      // property_id
        32 +                     // collaborator
        32 +                     // role
        4 + MAX_PERMISSIONS * (4 + MAX_PERMISSION_LEN) + // permissions
        8 +                      // added_at
        1;                       // bump

    /// Set membership, not a list scan.
    pub fn has_permission(&self, permission: &str) -> bool {
        self.permissions.contains(permission)
    }

    pub fn permissions_within_bounds(permissions: &[String]) -> bool {
        permissions.len() <= MAX_PERMISSIONS
            && permissions.iter().all(|p| p.len() <= MAX_PERMISSION_LEN)
    }
}

/// Authorization rule for the status path: the owner may always write; a
/// collaborator only with an explicit "update-status" grant on this property.
pub fn can_update_status(
    property: &Property,
    caller: &Pubkey,
    grant: Option<&Collaborator>,
) -> bool {
    if property.is_owned_by(caller) {
        return true;
    }
    match grant {
        Some(grant) => {
            grant.property_id == property.id
                && grant.collaborator == *caller
                && grant.has_permission(PERM_UPDATE_STATUS)
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{str_to_fixed, PropertyState};

    fn grant_for(property_id: u64, collaborator: Pubkey, permissions: &[&str]) -> Collaborator {
        Collaborator {
            property_id,
            collaborator,
            role: str_to_fixed("manager"),
            permissions: permissions.iter().map(|p| p.to_string()).collect(),
            added_at: 1,
            bump: 255,
        }
    }

    fn property_owned_by(owner: Pubkey) -> Property {
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
    fn membership_is_exact() {
        let grant = grant_for(1, Pubkey::new_unique(), &[PERM_UPDATE_STATUS, "view-docs"]);
        assert!(grant.has_permission("update-status"));
        assert!(grant.has_permission("view-docs"));
        assert!(!grant.has_permission("update-statu"));
        assert!(!grant.has_permission("transfer"));
    }

    #[test]
    fn duplicate_permissions_collapse() {
        let grant = grant_for(
            1,
            Pubkey::new_unique(),
            &[PERM_UPDATE_STATUS, PERM_UPDATE_STATUS, PERM_UPDATE_STATUS],
        );
        assert_eq!(grant.permissions.len(), 1);
        assert!(grant.has_permission(PERM_UPDATE_STATUS));
    }

    #[test]
    fn owner_is_always_authorized_for_status() {
        let owner = Pubkey::new_unique();
        let property = property_owned_by(owner);
        assert!(can_update_status(&property, &owner, None));
    }

    #[test]
    fn collaborator_needs_the_status_permission() {
        let owner = Pubkey::new_unique();
        let collaborator = Pubkey::new_unique();
        let property = property_owned_by(owner);

        let with_permission = grant_for(1, collaborator, &[PERM_UPDATE_STATUS]);
        assert!(can_update_status(&property, &collaborator, Some(&with_permission)));

        let without_permission = grant_for(1, collaborator, &["view-docs"]);
        assert!(!can_update_status(&property, &collaborator, Some(&without_permission)));
    }

    #[test]
    fn stranger_without_grant_is_rejected() {
        let property = property_owned_by(Pubkey::new_unique());
        assert!(!can_update_status(&property, &Pubkey::new_unique(), None));
    }

    #[test]
    fn grant_for_another_property_does_not_carry_over() {
        let owner = Pubkey::new_unique();
        let collaborator = Pubkey::new_unique();
        let property = property_owned_by(owner);

        let other_property_grant = grant_for(2, collaborator, &[PERM_UPDATE_STATUS]);
        assert!(!can_update_status(&property, &collaborator, Some(&other_property_grant)));
    }

    #[test]
    fn someone_elses_grant_does_not_authorize_the_caller() {
        let owner = Pubkey::new_unique();
        let caller = Pubkey::new_unique();
        let property = property_owned_by(owner);

        let grant = grant_for(1, Pubkey::new_unique(), &[PERM_UPDATE_STATUS]);
        assert!(!can_update_status(&property, &caller, Some(&grant)));
    }

    #[test]
    fn permission_bounds() {
        let ok: Vec<String> = (0..MAX_PERMISSIONS).map(|i| format!("perm-{i}")).collect();
        assert!(Collaborator::permissions_within_bounds(&ok));

        let too_many: Vec<String> = (0..MAX_PERMISSIONS + 1).map(|i| format!("perm-{i}")).collect();
        assert!(!Collaborator::permissions_within_bounds(&too_many));

        let too_long = vec!["p".repeat(MAX_PERMISSION_LEN + 1)];
        assert!(!Collaborator::permissions_within_bounds(&too_long));
    }
}
