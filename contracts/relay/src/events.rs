use soroban_sdk::{contracttype, Address, Env};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BidRelayedEvent {
    pub destination_domain: u32,
    pub nonce: u64,
    pub auction: Address,
    pub auction_id: u64,
    pub bidder: Address,
    pub amount: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BidDeliveredEvent {
    pub source_domain: u32,
    pub nonce: u64,
    pub auction: Address,
    pub auction_id: u64,
    pub bidder: Address,
    pub amount: i128,
}

/// A redelivery of an already-applied message. Deliberate no-op, logged so
/// couriers can observe the discard.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DuplicateDiscardedEvent {
    pub source_domain: u32,
    pub nonce: u64,
}

/// A relayed bid that failed the auction's own validation. Observable but
/// not retried; the message counts as consumed.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RelayedBidRejectedEvent {
    pub source_domain: u32,
    pub nonce: u64,
    pub auction: Address,
    pub auction_id: u64,
}

pub fn emit_bid_relayed(
    env: &Env,
    destination_domain: u32,
    nonce: u64,
    auction: Address,
    auction_id: u64,
    bidder: Address,
    amount: i128,
) {
    let event = BidRelayedEvent {
        destination_domain,
        nonce,
        auction,
        auction_id,
        bidder: bidder.clone(),
        amount,
    };
    env.events().publish(("bid_relayed", destination_domain, nonce), event);
}

pub fn emit_bid_delivered(
    env: &Env,
    source_domain: u32,
    nonce: u64,
    auction: Address,
    auction_id: u64,
    bidder: Address,
    amount: i128,
) {
    let event = BidDeliveredEvent {
        source_domain,
        nonce,
        auction,
        auction_id,
        bidder,
        amount,
    };
    env.events().publish(("bid_delivered", source_domain, nonce), event);
}

pub fn emit_duplicate_discarded(env: &Env, source_domain: u32, nonce: u64) {
    let event = DuplicateDiscardedEvent { source_domain, nonce };
    env.events().publish(("duplicate_discarded", source_domain, nonce), event);
}

pub fn emit_relayed_bid_rejected(
    env: &Env,
    source_domain: u32,
    nonce: u64,
    auction: Address,
    auction_id: u64,
) {
    let event = RelayedBidRejectedEvent { source_domain, nonce, auction, auction_id };
    env.events().publish(("relayed_bid_rejected", source_domain, nonce), event);
}
