use soroban_sdk::{Address, Env, Vec};

use crate::types::{Auction, Bid, DataKey, PaymentCurrency};

const DAY_IN_LEDGERS: u32 = 17280; // ~5 second block time
const PERSISTENT_TTL_AMOUNT: u32 = 90 * DAY_IN_LEDGERS;
const PERSISTENT_TTL_THRESHOLD: u32 = PERSISTENT_TTL_AMOUNT - DAY_IN_LEDGERS;

// ========== Initialization / roles ==========

pub fn has_admin(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Admin)
}

pub fn get_admin(env: &Env) -> Address {
    env.storage().instance().get(&DataKey::Admin).unwrap()
}

pub fn set_admin(env: &Env, admin: &Address) {
    env.storage().instance().set(&DataKey::Admin, admin);
}

pub fn get_factory(env: &Env) -> Address {
    env.storage().instance().get(&DataKey::Factory).unwrap()
}

pub fn set_factory(env: &Env, factory: &Address) {
    env.storage().instance().set(&DataKey::Factory, factory);
}

pub fn get_relay(env: &Env) -> Option<Address> {
    env.storage().instance().get(&DataKey::Relay)
}

pub fn set_relay(env: &Env, relay: &Address) {
    env.storage().instance().set(&DataKey::Relay, relay);
}

pub fn get_native_token(env: &Env) -> Address {
    env.storage().instance().get(&DataKey::NativeToken).unwrap()
}

pub fn set_native_token(env: &Env, token: &Address) {
    env.storage().instance().set(&DataKey::NativeToken, token);
}

pub fn get_price_feed(env: &Env) -> Address {
    env.storage().instance().get(&DataKey::PriceFeed).unwrap()
}

pub fn set_price_feed(env: &Env, feed: &Address) {
    env.storage().instance().set(&DataKey::PriceFeed, feed);
}

// ========== Fee configuration ==========

pub fn get_fee_recipient(env: &Env) -> Address {
    env.storage().instance().get(&DataKey::FeeRecipient).unwrap()
}

pub fn set_fee_recipient(env: &Env, recipient: &Address) {
    env.storage().instance().set(&DataKey::FeeRecipient, recipient);
}

pub fn get_fee_pct(env: &Env) -> u32 {
    env.storage().instance().get(&DataKey::FeePct).unwrap_or(0)
}

pub fn set_fee_pct(env: &Env, pct: u32) {
    env.storage().instance().set(&DataKey::FeePct, &pct);
}

pub fn get_accrued_fees(env: &Env, currency: &PaymentCurrency) -> i128 {
    let key = DataKey::AccruedFees(currency.clone());
    env.storage().persistent().get(&key).unwrap_or(0)
}

pub fn set_accrued_fees(env: &Env, currency: &PaymentCurrency, amount: i128) {
    let key = DataKey::AccruedFees(currency.clone());
    env.storage().persistent().set(&key, &amount);
    env.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
}

// ========== Auction records ==========

pub fn get_auction_counter(env: &Env) -> u64 {
    env.storage().instance().get(&DataKey::AuctionCounter).unwrap_or(0)
}

pub fn increment_auction_counter(env: &Env) -> u64 {
    let counter = get_auction_counter(env) + 1;
    env.storage().instance().set(&DataKey::AuctionCounter, &counter);
    counter
}

pub fn get_auction(env: &Env, auction_id: u64) -> Option<Auction> {
    let key = DataKey::Auction(auction_id);
    let auction = env.storage().persistent().get::<_, Auction>(&key);
    if auction.is_some() {
        env.storage()
            .persistent()
            .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
    }
    auction
}

pub fn save_auction(env: &Env, auction: &Auction) {
    let key = DataKey::Auction(auction.auction_id);
    env.storage().persistent().set(&key, auction);
    env.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
}

pub fn get_bid_history(env: &Env, auction_id: u64) -> Vec<Bid> {
    let key = DataKey::BidHistory(auction_id);
    env.storage().persistent().get(&key).unwrap_or(Vec::new(env))
}

pub fn add_bid_to_history(env: &Env, auction_id: u64, bid: Bid) {
    let key = DataKey::BidHistory(auction_id);
    let mut history = get_bid_history(env, auction_id);
    history.push_back(bid);
    env.storage().persistent().set(&key, &history);
    env.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
}
