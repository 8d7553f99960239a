use anchor_lang::prelude::*;

use crate::errors::RegistryError;
use crate::state::{can_update_status, str_to_fixed, Collaborator, Property, PropertyStatus, Registry};

// =============================================================================
// UPDATE STATUS INSTRUCTION
// =============================================================================
//
// The one operation a non-owner can perform: a collaborator whose grant
// contains "update-status" may overwrite the status record. The grant
// account is optional — the owner needs none, and a missing or foreign
// grant simply fails the authorization check.
// =============================================================================

#[derive(Accounts)]
#[instruction(property_id: u64)]
pub struct UpdateStatus<'info> {
    pub caller: Signer<'info>,

    #[account(
        mut,
        seeds = [b"registry"],
        bump = registry.bump,
    )]
    pub registry: Account<'info, Registry>,

    #[account(
        constraint = property.id == property_id @ RegistryError::NotFound,
    )]
    pub property: Account<'info, Property>,

    #[account(
        mut,
        seeds = [b"status", &property_id.to_le_bytes()],
        bump = status.bump,
    )]
    pub status: Account<'info, PropertyStatus>,

    /// The caller's grant on this property, required only when the caller
    /// is not the owner
    pub grant: Option<Account<'info, Collaborator>>,
}

pub fn handler(
    ctx: Context<UpdateStatus>,
    property_id: u64,
    new_status: String,
    visibility: bool,
) -> Result<()> {
    let caller = ctx.accounts.caller.key();
    require!(
        can_update_status(&ctx.accounts.property, &caller, ctx.accounts.grant.as_deref()),
        RegistryError::Unauthorized
    );

    let registry = &mut ctx.accounts.registry;
    let status = &mut ctx.accounts.status;
    let height = registry.height;

    status.status = str_to_fixed(&new_status);
    status.visibility = visibility;
    status.last_updated = height;

    registry.advance();

    msg!(
        "Status of property #{} set to '{}' (visible: {}) by {}",
        property_id,
        new_status,
        visibility,
        caller
    );

    Ok(())
}
