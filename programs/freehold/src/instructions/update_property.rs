use anchor_lang::prelude::*;

use crate::errors::RegistryError;
use crate::state::{Property, PropertyPatch, Registry};

#[derive(Accounts)]
#[instruction(property_id: u64)]
pub struct UpdateProperty<'info> {
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

pub fn handler(ctx: Context<UpdateProperty>, property_id: u64, patch: PropertyPatch) -> Result<()> {
    let registry = &mut ctx.accounts.registry;
    let property = &mut ctx.accounts.property;

    patch.apply_to(property);
    registry.advance();

    msg!("Updated property #{} (value: {})", property_id, property.value);

    Ok(())
}
