use anchor_lang::prelude::*;

use crate::errors::RegistryError;
use crate::state::{str_to_fixed, Collaborator, Property, Registry};

// =============================================================================
// ADD COLLABORATOR INSTRUCTION
// =============================================================================
//
// Owner-only delegation. Re-granting overwrites the whole record, so the
// permission set after this call is exactly the set passed in — revoking a
// single permission is a re-grant without it.
// =============================================================================

#[derive(Accounts)]
#[instruction(property_id: u64, collaborator: Pubkey)]
pub struct AddCollaborator<'info> {
    #[account(mut)]
    pub owner: Signer<'info>,

    #[account(
        mut,
        seeds = [b"registry"],
        bump = registry.bump,
    )]
    pub registry: Account<'info, Registry>,

    #[account(
        constraint = property.id == property_id @ RegistryError::NotFound,
        constraint = property.owner == owner.key() @ RegistryError::Unauthorized,
    )]
    pub property: Account<'info, Property>,

    #[account(
        init_if_needed,
        payer = owner,
        space = Collaborator::SIZE,
        seeds = [
            b"collaborator".as_ref(),
            property_id.to_le_bytes().as_ref(),
            collaborator.as_ref()
        ],
        bump,
    )]
    pub grant: Account<'info, Collaborator>,

    pub system_program: Program<'info, System>,
}

pub fn handler(
    ctx: Context<AddCollaborator>,
    property_id: u64,
    collaborator: Pubkey,
    role: String,
    permissions: Vec<String>,
) -> Result<()> {
    require!(
        Collaborator::permissions_within_bounds(&permissions),
        RegistryError::InvalidParams
    );

    let registry = &mut ctx.accounts.registry;
    let grant = &mut ctx.accounts.grant;
    let height = registry.height;

    grant.property_id = property_id;
    grant.collaborator = collaborator;
    grant.role = str_to_fixed(&role);
    // Duplicate strings collapse into the set
    grant.permissions = permissions.into_iter().collect();
    grant.added_at = height;
    grant.bump = ctx.bumps.grant;

    registry.advance();

    msg!(
        "Granted {} role '{}' on property #{} ({} permissions)",
        collaborator,
        role,
        property_id,
        grant.permissions.len()
    );

    Ok(())
}
