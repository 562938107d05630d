use soroban_sdk::{contracttype, Address, BytesN};

/// Storage keys for the factory contract
#[contracttype]
#[derive(Clone)]
pub enum StorageKey {
    Admin,
    Initialized,
    Implementation,
    NativeToken,
    PriceFeed,
    InstanceCounter,
    Instance(Address),
    InstanceById(u64),
}

/// Payment medium accepted by a deployed auction instance. Mirrors the
/// instance contract's encoding so values pass through unchanged.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum PaymentCurrency {
    Native,
    Token(Address),
}

/// The implementation every new instance is bound to. Versions only move
/// forward; the instance state schema is append-only across them.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Implementation {
    pub wasm_hash: BytesN<32>,
    pub version: u32,
}

/// One deployed auction instance. Only addresses recorded here are ever
/// handed back to callers; nothing externally supplied is trusted.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InstanceRecord {
    pub registry_id: u64,
    pub address: Address,
    pub seller: Address,
    pub version: u32,
    pub deployed_at: u64,
}
