use soroban_sdk::{contracttype, Address, Vec};

/// Unit prices are fixed-point integers with 18 implied decimal places:
/// a `price` of `PRICE_SCALE` means 1.0 payment token per auctioned token.
pub const PRICE_SCALE: i128 = 1_000_000_000_000_000_000;

#[contracttype]
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Auction {
    pub id: u32,
    pub token: Address,   // the fungible token being sold
    pub end_time: u64,    // immutable after creation
    pub amount: i128,     // remaining unallocated supply; only settlement lowers it
    pub bids: Vec<Bid>,   // kept in descending-price order, stable for ties
    pub status: AuctionStatus,
}

#[contracttype]
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Bid {
    pub bidder: Address,
    pub amount: i128,        // quantity of the auctioned token requested
    pub price: i128,         // unit price, PRICE_SCALE fixed-point
    pub locked_amount: i128, // payment tokens escrowed; zeroed on withdrawal
}

#[contracttype]
#[derive(Clone, Eq, PartialEq, Debug)]
pub enum AuctionStatus {
    Open,
    Settled,
}
