use soroban_sdk::contracterror;

/// Error codes for the relay contract.
/// Uses codes starting at 300 to avoid conflicts with auction and factory.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    /// Contract has already been initialized
    AlreadyInitialized = 300,
    /// Contract has not been initialized
    NotInitialized = 301,
    /// Caller is not the configured operator or admin
    Unauthorized = 302,
    /// Message addressed to a different domain than this endpoint
    WrongDomain = 303,
    /// Relayed amount must be positive
    InvalidAmount = 304,
    /// No outbox entry for that destination and nonce
    MessageNotFound = 305,
}
