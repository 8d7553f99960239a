use anchor_lang::prelude::*;

use crate::errors::RegistryError;
use crate::state::{Property, Registry, RevenueShare};

// No cross-participant sum check here: entitlements for distinct
// participants on one property may jointly exceed 100%. The dividend
// distributor reconciles totals when it computes payouts.

#[derive(Accounts)]
#[instruction(property_id: u64, participant: Pubkey)]
pub struct SetRevenueShare<'info> {
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
        space = RevenueShare::SIZE,
        seeds = [
            b"revenue_share".as_ref(),
            property_id.to_le_bytes().as_ref(),
            participant.as_ref()
        ],
        bump,
    )]
    pub share: Account<'info, RevenueShare>,

    pub system_program: Program<'info, System>,
}

pub fn handler(
    ctx: Context<SetRevenueShare>,
    property_id: u64,
    participant: Pubkey,
    percentage: u8,
) -> Result<()> {
    require!(
        RevenueShare::valid_percentage(percentage),
        RegistryError::InvalidPercentage
    );

    let registry = &mut ctx.accounts.registry;
    let share = &mut ctx.accounts.share;

    share.property_id = property_id;
    share.participant = participant;
    share.percentage = percentage;
    // Overwrite semantics: a re-set entitlement starts its bookkeeping over
    share.total_received = 0;
    share.bump = ctx.bumps.share;

    registry.advance();

    msg!(
        "Set revenue share of {} on property #{} to {}%",
        participant,
        property_id,
        percentage
    );

    Ok(())
}
