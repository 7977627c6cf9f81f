use soroban_sdk::{panic_with_error, Env};

use crate::{
    errors::{AuctionError, ValidationError},
    types::*,
};

/// All quantities are i128 but only non-negative values are meaningful;
/// negative inputs would corrupt escrow accounting or trap settlement.
pub fn validate_bid_inputs(env: &Env, amount: i128, price: i128, escrow: i128) {
    if amount <= 0 {
        panic_with_error!(env, ValidationError::BidAmountMustBePositive);
    }

    if price < 0 {
        panic_with_error!(env, ValidationError::BidPriceCannotBeNegative);
    }

    if escrow < 0 {
        panic_with_error!(env, ValidationError::EscrowCannotBeNegative);
    }
}

pub fn validate_auction_params(env: &Env, amount: i128, duration: u64) {
    if amount <= 0 {
        panic_with_error!(env, ValidationError::AuctionAmountMustBePositive);
    }

    if duration == 0 {
        panic_with_error!(env, ValidationError::DurationMustBeGreaterThanZero);
    }
}

impl Auction {
    pub fn is_settled(&self) -> bool {
        // Check if the auction status is "Settled"
        self.status == AuctionStatus::Settled
    }

    /// A bid is accepted strictly before `end_time` and only while Open.
    pub fn check_can_bid(&self, env: &Env) {
        if self.is_settled() {
            panic_with_error!(env, AuctionError::AuctionAlreadySettled);
        }

        let current_time = env.ledger().timestamp();
        if current_time >= self.end_time {
            panic_with_error!(env, AuctionError::AuctionEnded);
        }
    }

    /// Settlement is allowed from `end_time` onward (non-strict), once.
    pub fn check_can_end(&self, env: &Env) {
        if self.is_settled() {
            panic_with_error!(env, AuctionError::AuctionAlreadySettled);
        }

        let current_time = env.ledger().timestamp();
        if current_time < self.end_time {
            panic_with_error!(env, AuctionError::AuctionNotYetEnded);
        }
    }

    /// Escrow withdrawal only opens up once the auction has been settled,
    /// since settlement deducts pay-as-bid proceeds from locked funds.
    pub fn check_can_withdraw(&self, env: &Env) {
        if !self.is_settled() {
            panic_with_error!(env, AuctionError::AuctionNotYetEnded);
        }
    }
}
