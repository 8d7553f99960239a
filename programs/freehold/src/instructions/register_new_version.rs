use anchor_lang::prelude::*;

use crate::errors::RegistryError;
use crate::state::{str_to_fixed, Property, Registry, ValuationVersion};

// =============================================================================
// REGISTER NEW VERSION INSTRUCTION
// =============================================================================
//
// Appends a valuation snapshot and overwrites the property's live value in
// the same transaction — a detail query and a history query issued against
// the resulting state always agree.
// =============================================================================

#[derive(Accounts)]
#[instruction(property_id: u64, new_value: u64, version: u64)]
pub struct RegisterNewVersion<'info> {
    #[account(mut)]
    pub owner: Signer<'info>,

    #[account(
        mut,
        seeds = [b"registry"],
        bump = registry.bump,
    )]
    pub registry: Account<'info, Registry>,

    #[account(
        mut,
        constraint = property.id == property_id @ RegistryError::NotFound,
        constraint = property.owner == owner.key() @ RegistryError::Unauthorized,
    )]
    pub property: Account<'info, Property>,

    #[account(
        init_if_needed,
        payer = owner,
        space = ValuationVersion::SIZE,
        seeds = [
            b"version".as_ref(),
            property_id.to_le_bytes().as_ref(),
            version.to_le_bytes().as_ref()
        ],
        bump,
    )]
    pub entry: Account<'info, ValuationVersion>,

    pub system_program: Program<'info, System>,
}

pub fn handler(
    ctx: Context<RegisterNewVersion>,
    property_id: u64,
    new_value: u64,
    version: u64,
    notes: String,
) -> Result<()> {
    let registry = &mut ctx.accounts.registry;
    let property = &mut ctx.accounts.property;
    let entry = &mut ctx.accounts.entry;
    let height = registry.height;

    entry.property_id = property_id;
    entry.version = version;
    entry.updated_value = new_value;
    entry.notes = str_to_fixed(&notes);
    entry.recorded_at = height;
    entry.bump = ctx.bumps.entry;

    // The history entry and the live value move together
    property.value = new_value;

    registry.advance();

    msg!(
        "Recorded valuation version {} for property #{} (value: {})",
        version,
        property_id,
        new_value
    );

    Ok(())
}
