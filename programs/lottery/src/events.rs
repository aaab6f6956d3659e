use anchor_lang::prelude::*;

#[event]
pub struct LotteryCreated {
    pub lottery: Pubkey,
    pub authority: Pubkey,
    pub oracle: Pubkey,
    pub ticket_price: u64,
}

#[event]
pub struct TicketPurchased {
    pub lottery: Pubkey,
    pub ticket: Pubkey,
    pub submitter: Pubkey,
    pub index: u32,
}

#[event]
pub struct WinnerPicked {
    pub lottery: Pubkey,
    pub winner_index: u32,
}

#[event]
pub struct PrizePaid {
    pub lottery: Pubkey,
    pub winner: Pubkey,
    pub amount: u64,
}
