use soroban_sdk::{Address, Env, Vec};

use crate::types::{Implementation, InstanceRecord, StorageKey};

const DAY_IN_LEDGERS: u32 = 17280; // ~5 second block time
const PERSISTENT_TTL_AMOUNT: u32 = 90 * DAY_IN_LEDGERS;
const PERSISTENT_TTL_THRESHOLD: u32 = PERSISTENT_TTL_AMOUNT - DAY_IN_LEDGERS;

// ========== Initialization ==========

pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&StorageKey::Initialized)
}

pub fn set_initialized(env: &Env) {
    env.storage().instance().set(&StorageKey::Initialized, &true);
}

// ========== Admin ==========

pub fn get_admin(env: &Env) -> Address {
    env.storage().instance().get(&StorageKey::Admin).unwrap()
}

pub fn set_admin(env: &Env, admin: &Address) {
    env.storage().instance().set(&StorageKey::Admin, admin);
}

// ========== Implementation ==========

pub fn get_implementation(env: &Env) -> Implementation {
    env.storage().instance().get(&StorageKey::Implementation).unwrap()
}

pub fn set_implementation(env: &Env, implementation: &Implementation) {
    env.storage()
        .instance()
        .set(&StorageKey::Implementation, implementation);
}

// ========== Collaborators ==========

pub fn get_native_token(env: &Env) -> Address {
    env.storage().instance().get(&StorageKey::NativeToken).unwrap()
}

pub fn set_native_token(env: &Env, token: &Address) {
    env.storage().instance().set(&StorageKey::NativeToken, token);
}

pub fn get_price_feed(env: &Env) -> Address {
    env.storage().instance().get(&StorageKey::PriceFeed).unwrap()
}

pub fn set_price_feed(env: &Env, feed: &Address) {
    env.storage().instance().set(&StorageKey::PriceFeed, feed);
}

// ========== Instance registry ==========

pub fn get_instance_counter(env: &Env) -> u64 {
    env.storage().instance().get(&StorageKey::InstanceCounter).unwrap_or(0)
}

pub fn increment_instance_counter(env: &Env) -> u64 {
    let counter = get_instance_counter(env) + 1;
    env.storage().instance().set(&StorageKey::InstanceCounter, &counter);
    counter
}

pub fn get_instance(env: &Env, address: &Address) -> Option<InstanceRecord> {
    let key = StorageKey::Instance(address.clone());
    let record = env.storage().persistent().get::<_, InstanceRecord>(&key);
    if record.is_some() {
        env.storage()
            .persistent()
            .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
    }
    record
}

pub fn get_instance_by_id(env: &Env, registry_id: u64) -> Option<InstanceRecord> {
    let key = StorageKey::InstanceById(registry_id);
    let record = env.storage().persistent().get::<_, InstanceRecord>(&key);
    if record.is_some() {
        env.storage()
            .persistent()
            .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
    }
    record
}

pub fn set_instance(env: &Env, record: &InstanceRecord) {
    let key = StorageKey::Instance(record.address.clone());
    env.storage().persistent().set(&key, record);
    env.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);

    let id_key = StorageKey::InstanceById(record.registry_id);
    env.storage().persistent().set(&id_key, record);
    env.storage()
        .persistent()
        .extend_ttl(&id_key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
}

pub fn list_instances(env: &Env) -> Vec<Address> {
    let counter = get_instance_counter(env);
    let mut instances = Vec::new(env);
    for id in 1..=counter {
        if let Some(record) = get_instance_by_id(env, id) {
            instances.push_back(record.address);
        }
    }
    instances
}
