use soroban_sdk::{contracttype, Address, Env};

use crate::types::PaymentCurrency;

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuctionCreatedEvent {
    pub auction_id: u64,
    pub seller: Address,
    pub nft_contract: Address,
    pub token_id: u32,
    pub starting_price: i128,
    pub currency: PaymentCurrency,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BidPlacedEvent {
    pub auction_id: u64,
    pub bidder: Address,
    pub amount: i128,
    pub currency: PaymentCurrency,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuctionEndedEvent {
    pub auction_id: u64,
    pub winner: Option<Address>,
    pub amount: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuctionCancelledEvent {
    pub auction_id: u64,
    pub seller: Address,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FundsWithdrawnEvent {
    pub auction_id: u64,
    pub seller: Address,
    pub proceeds: i128,
    pub fee: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AdminFeesWithdrawnEvent {
    pub currency: PaymentCurrency,
    pub recipient: Address,
    pub amount: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FeeConfigUpdatedEvent {
    pub fee_recipient: Address,
    pub fee_pct: u32,
}

pub fn emit_auction_created(
    env: &Env,
    auction_id: u64,
    seller: Address,
    nft_contract: Address,
    token_id: u32,
    starting_price: i128,
    currency: PaymentCurrency,
) {
    let event = AuctionCreatedEvent {
        auction_id,
        seller: seller.clone(),
        nft_contract,
        token_id,
        starting_price,
        currency,
    };
    env.events().publish(("auction_created", auction_id, seller), event);
}

pub fn emit_bid_placed(
    env: &Env,
    auction_id: u64,
    bidder: Address,
    amount: i128,
    currency: PaymentCurrency,
) {
    let event = BidPlacedEvent { auction_id, bidder: bidder.clone(), amount, currency };
    env.events().publish(("bid_placed", auction_id, bidder), event);
}

pub fn emit_auction_ended(env: &Env, auction_id: u64, winner: Option<Address>, amount: i128) {
    let event = AuctionEndedEvent { auction_id, winner, amount };
    env.events().publish(("auction_ended", auction_id), event);
}

pub fn emit_auction_cancelled(env: &Env, auction_id: u64, seller: Address) {
    let event = AuctionCancelledEvent { auction_id, seller: seller.clone() };
    env.events().publish(("auction_cancelled", auction_id, seller), event);
}

pub fn emit_funds_withdrawn(env: &Env, auction_id: u64, seller: Address, proceeds: i128, fee: i128) {
    let event = FundsWithdrawnEvent { auction_id, seller: seller.clone(), proceeds, fee };
    env.events().publish(("funds_withdrawn", auction_id, seller), event);
}

pub fn emit_admin_fees_withdrawn(
    env: &Env,
    currency: PaymentCurrency,
    recipient: Address,
    amount: i128,
) {
    let event = AdminFeesWithdrawnEvent { currency, recipient: recipient.clone(), amount };
    env.events().publish(("admin_fees_withdrawn", recipient), event);
}

pub fn emit_fee_config_updated(env: &Env, fee_recipient: Address, fee_pct: u32) {
    let event = FeeConfigUpdatedEvent { fee_recipient: fee_recipient.clone(), fee_pct };
    env.events().publish(("fee_config_updated", fee_recipient), event);
}
