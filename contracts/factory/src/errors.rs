use soroban_sdk::contracterror;

/// Error codes for the factory contract.
/// Uses codes starting at 200 to avoid conflicts with instances and relay.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    /// Contract has already been initialized
    AlreadyInitialized = 200,
    /// Contract has not been initialized
    NotInitialized = 201,
    /// Caller is not the factory admin
    Unauthorized = 202,
    /// Implementation version must be at least 1
    InvalidVersion = 203,
    /// New implementation version must be greater than the current one
    UpgradeIncompatible = 204,
    /// An instance rejected the implementation swap
    UpgradeFailed = 205,
    /// Address was not deployed by this factory
    InstanceNotFound = 206,
}
