use anchor_lang::prelude::*;

use crate::errors::RegistryError;
use crate::state::{Property, Registry};

#[derive(Accounts)]
#[instruction(property_id: u64)]
pub struct DeactivateProperty<'info> {
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
}

pub fn handler(ctx: Context<DeactivateProperty>, property_id: u64) -> Result<()> {
    let registry = &mut ctx.accounts.registry;
    let property = &mut ctx.accounts.property;

    // Terminal: no instruction reactivates a property. Secondary records
    // (status, grants, shares, leases, history) are retained for audit.
    property.deactivate();
    registry.advance();

    msg!("Deactivated property #{}", property_id);

    Ok(())
}
