use soroban_sdk::contracterror;

/// Error codes for the auction instance contract.
/// Uses codes starting at 100 to avoid conflicts with the factory and relay.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    /// Contract has already been initialized
    AlreadyInitialized = 100,
    /// Contract has not been initialized
    NotInitialized = 101,
    /// Caller does not have the required role
    Unauthorized = 102,
    /// Auction id not found on this instance
    AuctionNotFound = 103,
    /// end_time <= start_time, or start_time in the past
    InvalidTimes = 104,
    /// Starting price must be positive
    InvalidStartingPrice = 105,
    /// Buyout price below starting price
    InvalidBuyoutPrice = 106,
    /// Minimum increment percent outside [0, 100]
    InvalidIncrement = 107,
    /// Fee percent outside [0, 100]
    InvalidFeePct = 108,
    /// Auction is terminal or outside its bidding window
    AuctionNotActive = 109,
    /// end_time has not been reached yet
    AuctionNotEnded = 110,
    /// Cancellation refused because a bid exists
    CannotCancelWithBids = 111,
    /// First bid below the starting price
    BidBelowStartingPrice = 112,
    /// Bid below the minimum increment over the highest bid
    BidTooLow = 113,
    /// Auction ended without any bid
    NoBidsPlaced = 114,
    /// Seller proceeds were already withdrawn
    AlreadyWithdrawn = 115,
    /// Token transfer failed; the whole operation is rolled back
    TransferFailed = 116,
    /// NFT custody transfer failed; the whole operation is rolled back
    AssetTransferFailed = 117,
    /// No relay endpoint configured for this instance
    RelayNotConfigured = 118,
    /// Price feed call failed or returned malformed data
    PriceFeedUnavailable = 119,
}
