use anchor_lang::prelude::*;

use crate::errors::RegistryError;
use crate::state::{str_to_fixed, Property, PropertyState, PropertyStatus, Registry};

// =============================================================================
// REGISTER PROPERTY INSTRUCTION
// =============================================================================
//
// Entry point of every asset's lifecycle. Allocates a fresh id, creates the
// primary record and its initial "pending" status in one transaction, and
// advances the registry clock. The governance module later approves the
// pending listing by overwriting the status record.
// =============================================================================

#[derive(AnchorSerialize, AnchorDeserialize)]
pub struct RegisterPropertyParams {
    /// Street address (max 64 bytes, truncated beyond that)
    pub address: String,
    /// Initial valuation, must be positive
    pub value: u64,
    /// Expected rental income per period
    pub rental_income: u64,
    /// Free-form description, rejected beyond 500 bytes
    pub description: String,
}

#[derive(Accounts)]
pub struct RegisterProperty<'info> {
    #[account(mut)]
    pub owner: Signer<'info>,

    #[account(
        mut,
        seeds = [b"registry"],
        bump = registry.bump,
    )]
    pub registry: Account<'info, Registry>,

    #[account(
        init,
        payer = owner,
        space = Property::SIZE,
        seeds = [b"property", &registry.next_property_id.to_le_bytes()],
        bump,
    )]
    pub property: Account<'info, Property>,

    #[account(
        init,
        payer = owner,
        space = PropertyStatus::SIZE,
        seeds = [b"status".as_ref(), registry.next_property_id.to_le_bytes().as_ref()],
        bump,
    )]
    pub status: Account<'info, PropertyStatus>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<RegisterProperty>, params: RegisterPropertyParams) -> Result<()> {
    require!(
        Property::listing_valid(params.value, &params.description),
        RegistryError::InvalidParams
    );

    let registry = &mut ctx.accounts.registry;
    let property = &mut ctx.accounts.property;
    let status = &mut ctx.accounts.status;
    let height = registry.height;

    // A freshly issued id can never point at an occupied slot
    require!(property.id == 0, RegistryError::AlreadyRegistered);

    let id = registry.allocate_property_id();

    property.id = id;
    property.owner = ctx.accounts.owner.key();
    property.created_at = height;
    property.address = str_to_fixed(&params.address);
    property.value = params.value;
    property.rental_income = params.rental_income;
    property.description = str_to_fixed(&params.description);
    property.state = PropertyState::Active;
    property.bump = ctx.bumps.property;

    status.property_id = id;
    status.status = str_to_fixed(PropertyStatus::PENDING);
    status.visibility = true;
    status.last_updated = height;
    status.bump = ctx.bumps.status;

    registry.total_properties += 1;
    registry.advance();

    msg!(
        "Registered property #{} at {} (value: {}, owner: {})",
        id,
        params.address,
        params.value,
        ctx.accounts.owner.key()
    );

    Ok(())
}
