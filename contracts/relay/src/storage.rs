use soroban_sdk::{Address, Env};

use crate::types::{DataKey, RelayMessage};

const DAY_IN_LEDGERS: u32 = 17280; // ~5 second block time
const PERSISTENT_TTL_AMOUNT: u32 = 90 * DAY_IN_LEDGERS;
const PERSISTENT_TTL_THRESHOLD: u32 = PERSISTENT_TTL_AMOUNT - DAY_IN_LEDGERS;

// ========== Roles / configuration ==========

pub fn has_admin(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Admin)
}

pub fn get_admin(env: &Env) -> Address {
    env.storage().instance().get(&DataKey::Admin).unwrap()
}

pub fn set_admin(env: &Env, admin: &Address) {
    env.storage().instance().set(&DataKey::Admin, admin);
}

pub fn get_local_domain(env: &Env) -> u32 {
    env.storage().instance().get(&DataKey::LocalDomain).unwrap()
}

pub fn set_local_domain(env: &Env, domain: u32) {
    env.storage().instance().set(&DataKey::LocalDomain, &domain);
}

pub fn get_operator(env: &Env) -> Address {
    env.storage().instance().get(&DataKey::Operator).unwrap()
}

pub fn set_operator(env: &Env, operator: &Address) {
    env.storage().instance().set(&DataKey::Operator, operator);
}

// ========== Outbound ==========

pub fn get_out_nonce(env: &Env, destination: u32) -> u64 {
    env.storage().instance().get(&DataKey::OutNonce(destination)).unwrap_or(0)
}

pub fn increment_out_nonce(env: &Env, destination: u32) -> u64 {
    let nonce = get_out_nonce(env, destination) + 1;
    env.storage().instance().set(&DataKey::OutNonce(destination), &nonce);
    nonce
}

pub fn get_outbox(env: &Env, destination: u32, nonce: u64) -> Option<RelayMessage> {
    let key = DataKey::Outbox(destination, nonce);
    let message = env.storage().persistent().get::<_, RelayMessage>(&key);
    if message.is_some() {
        env.storage()
            .persistent()
            .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
    }
    message
}

pub fn set_outbox(env: &Env, message: &RelayMessage) {
    let key = DataKey::Outbox(message.destination_domain, message.nonce);
    env.storage().persistent().set(&key, message);
    env.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
}

// ========== Inbound replay tracking ==========

pub fn is_seen(env: &Env, source: u32, nonce: u64) -> bool {
    env.storage().persistent().has(&DataKey::Seen(source, nonce))
}

pub fn mark_seen(env: &Env, source: u32, nonce: u64) {
    let key = DataKey::Seen(source, nonce);
    env.storage().persistent().set(&key, &true);
    env.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
}

pub fn remove_seen(env: &Env, source: u32, nonce: u64) {
    env.storage().persistent().remove(&DataKey::Seen(source, nonce));
}

pub fn get_highest_seen(env: &Env, source: u32) -> u64 {
    env.storage().instance().get(&DataKey::HighestSeen(source)).unwrap_or(0)
}

pub fn set_highest_seen(env: &Env, source: u32, nonce: u64) {
    env.storage().instance().set(&DataKey::HighestSeen(source), &nonce);
}
