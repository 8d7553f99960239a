use anchor_lang::prelude::*;

use crate::errors::RegistryError;
use crate::state::{Property, Registry};

// Registry-level ownership only. Externally-issued ownership tokens are the
// marketplace's concern; this instruction moves no balances.

#[derive(Accounts)]
#[instruction(property_id: u64)]
pub struct TransferOwnership<'info> {
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

pub fn handler(ctx: Context<TransferOwnership>, property_id: u64, new_owner: Pubkey) -> Result<()> {
    let registry = &mut ctx.accounts.registry;
    let property = &mut ctx.accounts.property;

    let previous_owner = property.owner;
    property.owner = new_owner;
    registry.advance();

    msg!(
        "Transferred property #{} from {} to {}",
        property_id,
        previous_owner,
        new_owner
    );

    Ok(())
}
