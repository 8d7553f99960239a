use anchor_lang::prelude::*;

use crate::state::Registry;

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(mut)]
    pub payer: Signer<'info>,

    #[account(
        init,
        payer = payer,
        space = Registry::SIZE,
        seeds = [b"registry"],
        bump,
    )]
    pub registry: Account<'info, Registry>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<Initialize>) -> Result<()> {
    let registry = &mut ctx.accounts.registry;

    registry.next_property_id = 1;
    registry.height = 1;
    registry.total_properties = 0;
    registry.bump = ctx.bumps.registry;

    msg!("Initialized property registry at height {}", registry.height);

    Ok(())
}
