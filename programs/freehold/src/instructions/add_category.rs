use anchor_lang::prelude::*;

use crate::errors::RegistryError;
use crate::state::{str_to_fixed, Property, PropertyCategory, Registry};

#[derive(Accounts)]
#[instruction(property_id: u64)]
pub struct AddCategory<'info> {
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
        space = PropertyCategory::SIZE,
        seeds = [b"category", &property_id.to_le_bytes()],
        bump,
    )]
    pub record: Account<'info, PropertyCategory>,

    pub system_program: Program<'info, System>,
}

pub fn handler(
    ctx: Context<AddCategory>,
    property_id: u64,
    category: String,
    tags: Vec<String>,
) -> Result<()> {
    require!(
        PropertyCategory::tags_within_bounds(&tags),
        RegistryError::InvalidParams
    );

    let registry = &mut ctx.accounts.registry;
    let record = &mut ctx.accounts.record;

    record.property_id = property_id;
    record.category = str_to_fixed(&category);
    record.tags = tags;
    record.bump = ctx.bumps.record;

    registry.advance();

    msg!(
        "Categorized property #{} as '{}' ({} tags)",
        property_id,
        category,
        record.tags.len()
    );

    Ok(())
}
