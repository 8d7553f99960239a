use anchor_lang::prelude::*;

use crate::errors::RegistryError;
use crate::state::{str_to_fixed, Lease, Property, Registry};

#[derive(Accounts)]
#[instruction(property_id: u64, lessee: Pubkey)]
pub struct GrantLease<'info> {
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
        space = Lease::SIZE,
        seeds = [
            b"lease".as_ref(),
            property_id.to_le_bytes().as_ref(),
            lessee.as_ref()
        ],
        bump,
    )]
    pub lease: Account<'info, Lease>,

    pub system_program: Program<'info, System>,
}

pub fn handler(
    ctx: Context<GrantLease>,
    property_id: u64,
    lessee: Pubkey,
    duration: u64,
    terms: String,
) -> Result<()> {
    let registry = &mut ctx.accounts.registry;
    let lease = &mut ctx.accounts.lease;
    let height = registry.height;

    lease.property_id = property_id;
    lease.lessee = lessee;
    lease.expires_at = height + duration;
    lease.terms = str_to_fixed(&terms);
    // Never cleared by the passage of height; expiry is a read-time predicate
    lease.active = true;
    lease.granted_at = height;
    lease.bump = ctx.bumps.lease;

    registry.advance();

    msg!(
        "Leased property #{} to {} until height {}",
        property_id,
        lessee,
        lease.expires_at
    );

    Ok(())
}
