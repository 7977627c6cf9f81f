use soroban_sdk::{contracttype, symbol_short, Address, Symbol};

// Symbol representing auction start events.
pub const START: Symbol = symbol_short!("START");

// Symbol representing bid events.
pub const BID: Symbol = symbol_short!("BID");

// Symbol representing settlement events.
pub const SETTLE: Symbol = symbol_short!("SETTLE");

// Symbol representing escrow withdrawal events.
pub const WITHDRAW: Symbol = symbol_short!("WITHDRAW");

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuctionStarted {
    pub auction_id: u32,
    pub token: Address,
    pub amount: i128,
    pub end_time: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BidPlaced {
    pub auction_id: u32,
    pub bidder: Address,
    pub amount: i128,
    pub price: i128,
    pub locked_amount: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuctionSettled {
    pub auction_id: u32,
    pub amount_sold: i128,
    pub proceeds: i128,
    pub timestamp: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BidWithdrawn {
    pub auction_id: u32,
    pub bidder: Address,
    pub amount: i128,
}
