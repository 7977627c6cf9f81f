use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum AccessError {
    NotOwner = 101,
    OwnerCannotParticipate = 102,
    AlreadyInitialized = 103,
    NotInitialized = 104,
}

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum AuctionError {
    InvalidAuctionId = 201,
    AuctionEnded = 202,
    AuctionNotYetEnded = 203,
    AuctionAlreadySettled = 204,
    InsufficientTokensInContract = 205,
}

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum BidError {
    InsufficientFunds = 301,
    BidIndexOutOfBounds = 302,
    BidNotFound = 303,
}

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ValidationError {
    BidAmountMustBePositive = 401,
    BidPriceCannotBeNegative = 402,
    EscrowCannotBeNegative = 403,
    AuctionAmountMustBePositive = 404,
    DurationMustBeGreaterThanZero = 405,
}
