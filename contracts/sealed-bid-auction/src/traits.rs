use crate::types::*;
use soroban_sdk::{Address, Env};

/// Interface for the sealed-bid auction contract.
pub trait SealedBidAuctionTrait {
    /// One-shot setup: the privileged owner account and the payment token
    /// used for bid escrow.
    fn initialize(env: Env, owner: Address, payment_token: Address);

    /// Open a timed auction selling `amount` of `token`. Owner only; the
    /// contract must already hold at least `amount` of `token`.
    fn start_auction(env: Env, caller: Address, token: Address, amount: i128, duration: u64);

    /// Submit a sealed bid of `amount` tokens at fixed-point unit `price`,
    /// escrowing `escrow` payment tokens. Non-owner only.
    fn place_bid(
        env: Env,
        bidder: Address,
        auction_id: u32,
        amount: i128,
        price: i128,
        escrow: i128,
    );

    /// Settle an expired auction: allocate remaining supply to bids in
    /// descending price order, pay-as-bid. Owner only, once per auction.
    fn end_auction(env: Env, caller: Address, auction_id: u32);

    /// Reclaim the caller's unspent escrow after settlement.
    fn withdraw_bid(env: Env, caller: Address, auction_id: u32);

    fn get_auction(env: Env, auction_id: u32) -> Option<Auction>;

    fn get_bid(env: Env, auction_id: u32, index: u32) -> Bid;

    fn get_bid_count(env: Env, auction_id: u32) -> u32;

    fn auction_count(env: Env) -> u32;
}
