use soroban_sdk::{contracttype, Address};

/// A bid intent in flight between execution domains. `nonce` is unique and
/// monotonically assigned per (source, destination) pair; the receiving side
/// deduplicates on `(source_domain, nonce)`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RelayMessage {
    pub source_domain: u32,
    pub destination_domain: u32,
    pub auction: Address,
    pub auction_id: u64,
    pub bidder: Address,
    pub amount: i128,
    pub nonce: u64,
}

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Admin,
    LocalDomain,
    Operator,
    OutNonce(u32),
    Outbox(u32, u64),
    Seen(u32, u64),
    HighestSeen(u32),
}
