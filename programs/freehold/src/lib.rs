use anchor_lang::prelude::*;

pub mod errors;
pub mod instructions;
pub mod state;

use instructions::*;
use state::PropertyPatch;

declare_id!("Fg6PaFpoGXkYsidMpWTK6W2BeZ7FEfcYkg476zPFsLnS");

#[program]
pub mod freehold {
    use super::*;

    // === Registry Lifecycle ===

    /// Create the registry singleton: id allocator and logical height clock
    pub fn initialize(ctx: Context<Initialize>) -> Result<()> {
        instructions::initialize::handler(ctx)
    }

    // === Property Management ===

    /// Register a new property; issues the next id and creates the initial
    /// "pending" status record
    pub fn register_property(
        ctx: Context<RegisterProperty>,
        params: RegisterPropertyParams,
    ) -> Result<()> {
        instructions::register_property::handler(ctx, params)
    }

    /// Merge-patch the property's mutable details; absent fields keep their
    /// prior value
    pub fn update_property(
        ctx: Context<UpdateProperty>,
        property_id: u64,
        patch: PropertyPatch,
    ) -> Result<()> {
        instructions::update_property::handler(ctx, property_id, patch)
    }

    /// Replace the recorded owner (registry fact only, no token movement)
    pub fn transfer_ownership(
        ctx: Context<TransferOwnership>,
        property_id: u64,
        new_owner: Pubkey,
    ) -> Result<()> {
        instructions::transfer_ownership::handler(ctx, property_id, new_owner)
    }

    /// Mark the property deactivated; terminal and irreversible
    pub fn deactivate_property(
        ctx: Context<DeactivateProperty>,
        property_id: u64,
    ) -> Result<()> {
        instructions::deactivate_property::handler(ctx, property_id)
    }

    /// Append a valuation snapshot and overwrite the live value atomically
    pub fn register_new_version(
        ctx: Context<RegisterNewVersion>,
        property_id: u64,
        new_value: u64,
        version: u64,
        notes: String,
    ) -> Result<()> {
        instructions::register_new_version::handler(ctx, property_id, new_value, version, notes)
    }

    // === Delegation & Status ===

    /// Grant (or overwrite) a collaborator's role and permission set
    pub fn add_collaborator(
        ctx: Context<AddCollaborator>,
        property_id: u64,
        collaborator: Pubkey,
        role: String,
        permissions: Vec<String>,
    ) -> Result<()> {
        instructions::add_collaborator::handler(ctx, property_id, collaborator, role, permissions)
    }

    /// Overwrite the status record; owner, or collaborator holding
    /// "update-status"
    pub fn update_status(
        ctx: Context<UpdateStatus>,
        property_id: u64,
        new_status: String,
        visibility: bool,
    ) -> Result<()> {
        instructions::update_status::handler(ctx, property_id, new_status, visibility)
    }

    // === Classification ===

    /// Set (or overwrite) the property's category and tags
    pub fn add_category(
        ctx: Context<AddCategory>,
        property_id: u64,
        category: String,
        tags: Vec<String>,
    ) -> Result<()> {
        instructions::add_category::handler(ctx, property_id, category, tags)
    }

    // === Revenue & Leasing ===

    /// Set a participant's revenue entitlement percentage
    pub fn set_revenue_share(
        ctx: Context<SetRevenueShare>,
        property_id: u64,
        participant: Pubkey,
        percentage: u8,
    ) -> Result<()> {
        instructions::set_revenue_share::handler(ctx, property_id, participant, percentage)
    }

    /// Grant (or overwrite) a lease expiring `duration` heights from now
    pub fn grant_lease(
        ctx: Context<GrantLease>,
        property_id: u64,
        lessee: Pubkey,
        duration: u64,
        terms: String,
    ) -> Result<()> {
        instructions::grant_lease::handler(ctx, property_id, lessee, duration, terms)
    }
}
