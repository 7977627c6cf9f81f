#![no_std]

pub mod auction;
pub mod bid;
pub mod checks;
pub mod distribution;
pub mod errors;
pub mod escrow;
pub mod event;
pub mod traits;
pub mod types;
