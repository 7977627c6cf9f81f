use crate::bid::record_bid;
use crate::errors::{AccessError, AuctionError, BidError};
use crate::event::{self, AuctionSettled, AuctionStarted, BidPlaced, BidWithdrawn};
use crate::traits::SealedBidAuctionTrait;
use crate::{checks, distribution, escrow, types::*};
use soroban_sdk::{
    contract, contractimpl, contracttype, panic_with_error, Address, Env, IntoVal, Val, Vec,
};

#[contract]
pub struct SealedBidAuctionContract;

/// Enum representing keys used to store contract data in Soroban storage.
#[contracttype]
#[derive(Clone)]
enum DataKey {
    Owner,         // Key for storing the privileged owner account
    PaymentToken,  // Key for storing the escrow payment token
    TotalAuctions, // Key for storing total number of auctions ever created
    Auction(u32),  // Key for storing a specific Auction by its sequential ID
}

#[contractimpl]
impl SealedBidAuctionTrait for SealedBidAuctionContract {
    /// Stores the owner account and the payment token used for escrow.
    /// Callable exactly once.
    fn initialize(env: Env, owner: Address, payment_token: Address) {
        if env.storage().instance().has(&DataKey::Owner) {
            panic_with_error!(&env, AccessError::AlreadyInitialized);
        }

        owner.require_auth();

        env.storage().instance().set(&DataKey::Owner, &owner);
        env.storage()
            .instance()
            .set(&DataKey::PaymentToken, &payment_token);
    }

    /// Opens a new auction selling `amount` of `token` over `duration` seconds.
    fn start_auction(env: Env, caller: Address, token: Address, amount: i128, duration: u64) {
        caller.require_auth();
        Self::_require_owner(&env, &caller);

        checks::validate_auction_params(&env, amount, duration);

        // The supply on offer must already sit in the contract
        if distribution::contract_balance(&env, &token) < amount {
            panic_with_error!(&env, AuctionError::InsufficientTokensInContract);
        }

        let auction_id = Self::_get_total_auctions(&env);
        let end_time = env.ledger().timestamp() + duration;

        let auction = Auction {
            id: auction_id,
            token: token.clone(),
            end_time,
            amount,
            bids: Vec::new(&env),
            status: AuctionStatus::Open,
        };

        // Persist auction data and bump the counter
        Self::_save_auction(&env, auction_id, &auction);
        Self::_save_total_auctions(&env, &(auction_id + 1));

        env.events().publish(
            (event::START, caller),
            AuctionStarted {
                auction_id,
                token,
                amount,
                end_time,
            },
        );
    }

    /// Places a sealed bid on an open auction, escrowing `escrow` payment
    /// tokens against it.
    fn place_bid(
        env: Env,
        bidder: Address,
        auction_id: u32,
        amount: i128,
        price: i128,
        escrow: i128,
    ) {
        bidder.require_auth();

        // The owner may not bid in its own auctions
        if bidder == Self::_get_owner(&env) {
            panic_with_error!(&env, AccessError::OwnerCannotParticipate);
        }

        let mut auction_data = Self::_get_auction_or_panic(&env, auction_id);
        let payment_token = Self::_get_payment_token(&env);

        // Validate, lock funds, and insert into the ranked ledger
        record_bid(
            &env,
            &mut auction_data,
            &payment_token,
            bidder.clone(),
            amount,
            price,
            escrow,
        );

        Self::_save_auction(&env, auction_id, &auction_data);

        env.events().publish(
            (event::BID, bidder.clone()),
            BidPlaced {
                auction_id,
                bidder,
                amount,
                price,
                locked_amount: escrow,
            },
        );
    }

    /// Settles an expired auction: walks the ranked bids, filling each from
    /// the remaining supply until it runs out, pay-as-bid.
    fn end_auction(env: Env, caller: Address, auction_id: u32) {
        caller.require_auth();
        Self::_require_owner(&env, &caller);

        let mut auction_data = Self::_get_auction_or_panic(&env, auction_id);

        auction_data.check_can_end(&env);

        let payment_token = Self::_get_payment_token(&env);

        let mut remaining = auction_data.amount;
        let mut proceeds: i128 = 0;

        for index in 0..auction_data.bids.len() {
            if remaining == 0 {
                break;
            }

            let mut bid = auction_data.bids.get_unchecked(index);
            let fill = bid.amount.min(remaining);
            if fill == 0 {
                continue;
            }

            // Deliver tokens, charge the bidder's own price for the filled
            // amount, and leave the rest of their escrow withdrawable
            distribution::transfer_from_contract(&env, &auction_data.token, &bid.bidder, &fill);

            let paid = escrow::required_escrow(fill, bid.price);
            bid.locked_amount -= paid;
            auction_data.bids.set(index, bid);

            proceeds += paid;
            remaining -= fill;
        }

        let amount_sold = auction_data.amount - remaining;
        if proceeds > 0 {
            distribution::transfer_from_contract(&env, &payment_token, &caller, &proceeds);
        }

        auction_data.amount = remaining;
        auction_data.status = AuctionStatus::Settled;

        Self::_save_auction(&env, auction_id, &auction_data);

        env.events().publish(
            (event::SETTLE, caller),
            AuctionSettled {
                auction_id,
                amount_sold,
                proceeds,
                timestamp: env.ledger().timestamp(),
            },
        );
    }

    /// Returns the caller's unspent escrow for a settled auction.
    fn withdraw_bid(env: Env, caller: Address, auction_id: u32) {
        caller.require_auth();

        let mut auction_data = Self::_get_auction_or_panic(&env, auction_id);

        auction_data.check_can_withdraw(&env);

        let payment_token = Self::_get_payment_token(&env);
        let released = escrow::release_funds(&env, &mut auction_data, &payment_token, &caller);

        Self::_save_auction(&env, auction_id, &auction_data);

        env.events().publish(
            (event::WITHDRAW, caller.clone()),
            BidWithdrawn {
                auction_id,
                bidder: caller,
                amount: released,
            },
        );
    }

    fn get_auction(env: Env, auction_id: u32) -> Option<Auction> {
        Self::_get_auction(&env, auction_id)
    }

    fn get_bid(env: Env, auction_id: u32, index: u32) -> Bid {
        let auction_data = Self::_get_auction_or_panic(&env, auction_id);

        match auction_data.bids.get(index) {
            Some(bid) => bid,
            None => panic_with_error!(&env, BidError::BidIndexOutOfBounds),
        }
    }

    fn get_bid_count(env: Env, auction_id: u32) -> u32 {
        Self::_get_auction_or_panic(&env, auction_id).bids.len()
    }

    fn auction_count(env: Env) -> u32 {
        Self::_get_total_auctions(&env)
    }
}

impl SealedBidAuctionContract {
    /// Internal helper to fetch an auction from storage.
    fn _get_auction(env: &Env, auction_id: u32) -> Option<Auction> {
        env.storage()
            .instance()
            .get::<Val, Auction>(&DataKey::Auction(auction_id).into_val(env))
    }

    /// Internal helper to fetch an auction that must exist.
    fn _get_auction_or_panic(env: &Env, auction_id: u32) -> Auction {
        match Self::_get_auction(env, auction_id) {
            Some(auction_data) => auction_data,
            None => panic_with_error!(env, AuctionError::InvalidAuctionId),
        }
    }

    /// Internal helper to save an auction to storage.
    fn _save_auction(env: &Env, auction_id: u32, auction: &Auction) {
        env.storage()
            .instance()
            .set::<Val, Auction>(&DataKey::Auction(auction_id).into_val(env), auction);
    }

    /// Internal helper to get total number of auctions ever created.
    fn _get_total_auctions(env: &Env) -> u32 {
        env.storage()
            .instance()
            .get::<Val, u32>(&DataKey::TotalAuctions.into_val(env))
            .unwrap_or(0) // Default to 0 if no auction exists
    }

    /// Internal helper to save total number of auctions to storage.
    fn _save_total_auctions(env: &Env, total_auctions: &u32) {
        env.storage()
            .instance()
            .set::<Val, u32>(&DataKey::TotalAuctions.into_val(env), total_auctions);
    }

    /// Internal helper to load the stored owner account.
    fn _get_owner(env: &Env) -> Address {
        match env.storage().instance().get(&DataKey::Owner) {
            Some(owner) => owner,
            None => panic_with_error!(env, AccessError::NotInitialized),
        }
    }

    /// Internal helper to load the stored payment token.
    fn _get_payment_token(env: &Env) -> Address {
        match env.storage().instance().get(&DataKey::PaymentToken) {
            Some(token) => token,
            None => panic_with_error!(env, AccessError::NotInitialized),
        }
    }

    /// Internal helper restricting privileged entry points to the owner.
    fn _require_owner(env: &Env, caller: &Address) {
        if *caller != Self::_get_owner(env) {
            panic_with_error!(env, AccessError::NotOwner);
        }
    }
}
