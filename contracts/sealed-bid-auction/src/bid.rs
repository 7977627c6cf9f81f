use soroban_sdk::{Address, Env};

use crate::{checks, escrow, types::*};

/// Record a new bid against an open auction: validate inputs and timing,
/// lock the attached escrow, and insert the bid into the ranked ledger.
pub fn record_bid(
    env: &Env,
    auction_data: &mut Auction,
    payment_token: &Address,
    bidder: Address,
    amount: i128,
    price: i128,
    attached: i128,
) {
    // Reject non-positive quantities and negative prices or escrow
    checks::validate_bid_inputs(env, amount, price, attached);

    // Check the auction still accepts bids
    auction_data.check_can_bid(env);

    // Escrow the attached payment tokens
    escrow::lock_funds(env, payment_token, &bidder, amount, price, attached);

    let bid = Bid {
        bidder,
        amount,
        price,
        locked_amount: attached,
    };

    insert_ranked(auction_data, bid);
}

/// Insert into the ledger sorted on write: bids are kept in descending price
/// order, and a bid tying an existing price lands after it, so submission
/// order is preserved among equal prices. Settlement never re-sorts.
fn insert_ranked(auction_data: &mut Auction, bid: Bid) {
    for index in 0..auction_data.bids.len() {
        let existing = auction_data.bids.get_unchecked(index);
        if existing.price < bid.price {
            auction_data.bids.insert(index, bid);
            return;
        }
    }

    auction_data.bids.push_back(bid);
}
