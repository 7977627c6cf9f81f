use soroban_sdk::{panic_with_error, Address, Env};

use crate::{distribution, errors::BidError, types::*};

/// Payment tokens a bid must escrow: `amount * price / PRICE_SCALE`,
/// truncating. Never floating point.
pub fn required_escrow(amount: i128, price: i128) -> i128 {
    amount * price / PRICE_SCALE
}

/// Lock the attached escrow for a new bid. The full attached amount is
/// retained as locked, including any overpayment above the required minimum.
pub fn lock_funds(
    env: &Env,
    payment_token: &Address,
    bidder: &Address,
    amount: i128,
    price: i128,
    escrow: i128,
) {
    if escrow < required_escrow(amount, price) {
        panic_with_error!(env, BidError::InsufficientFunds);
    }

    distribution::transfer_to_contract(env, payment_token, bidder, &escrow);
}

/// Release the caller's unspent escrow for `auction`: find the first bid of
/// `caller` with funds still locked, zero it, and return the released amount.
/// Fails when the caller has no bid with locked funds left.
pub fn release_funds(
    env: &Env,
    auction: &mut Auction,
    payment_token: &Address,
    caller: &Address,
) -> i128 {
    for index in 0..auction.bids.len() {
        let mut bid = auction.bids.get_unchecked(index);
        if bid.bidder == *caller && bid.locked_amount > 0 {
            let released = bid.locked_amount;
            bid.locked_amount = 0;
            auction.bids.set(index, bid);

            distribution::transfer_from_contract(env, payment_token, caller, &released);
            return released;
        }
    }

    panic_with_error!(env, BidError::BidNotFound)
}
