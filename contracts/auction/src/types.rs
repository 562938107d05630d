use soroban_sdk::{contracttype, Address};

/// Lifecycle of a single sale. Transitions are one-way: Pending -> Active ->
/// Ended or Cancelled. Terminal records are kept for audit, never deleted.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum AuctionStatus {
    Pending = 0,
    Active = 1,
    Ended = 2,
    Cancelled = 3,
}

/// Payment medium for an auction. `Native` resolves to the Stellar Asset
/// Contract of the native asset configured at initialization; both arms go
/// through the same token transfer interface.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum PaymentCurrency {
    Native,
    Token(Address),
}

/// One auction record. The field layout is append-only across implementation
/// versions: fields are never reordered or retyped, new ones go at the end.
#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct Auction {
    pub auction_id: u64,
    pub nft_contract: Address,
    pub token_id: u32,
    pub seller: Address,
    pub starting_price: i128,
    pub buyout_price: Option<i128>,
    pub start_time: u64,
    pub end_time: u64,
    pub currency: PaymentCurrency,
    pub min_increment_pct: u32,
    pub status: AuctionStatus,
    pub highest_bid: i128,
    pub highest_bidder: Option<Address>,
    /// Who escrowed the current highest bid: the bidder itself for local
    /// bids, the relay contract for relayed bids. Refunds go here.
    pub funder: Option<Address>,
    pub funds_withdrawn: bool,
    /// Fee percent snapshotted at creation. Later `set_fee_pct` calls do not
    /// change the split of sales already opened.
    pub fee_pct: u32,
}

#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct Bid {
    pub bidder: Address,
    pub amount: i128,
    pub timestamp: u64,
}

/// Reply shape of the price feed's `latest_price`. Informational only,
/// never gates a bid.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PriceInfo {
    pub value: i128,
    pub timestamp: u64,
}

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Admin,
    Factory,
    Relay,
    NativeToken,
    PriceFeed,
    FeeRecipient,
    FeePct,
    AccruedFees(PaymentCurrency),
    AuctionCounter,
    Auction(u64),
    BidHistory(u64),
}
