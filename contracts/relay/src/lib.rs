#![no_std]

mod errors;
mod events;
mod storage;
mod types;

use soroban_sdk::{
    auth::{ContractContext, InvokerContractAuthEntry, SubContractInvocation},
    contract, contractimpl, vec, Address, Env, IntoVal, Symbol, Val, Vec,
};

pub use errors::Error;
pub use types::RelayMessage;

/// Replay entries older than this many nonces behind the per-source high-water
/// mark are pruned and their nonces treated as duplicates. One eviction per
/// insert keeps the replay set bounded per source domain.
const REPLAY_WINDOW: u64 = 1024;

#[contract]
pub struct BidRelay;

#[contractimpl]
impl BidRelay {
    /// One-time setup. `operator` is the courier identity allowed to deliver
    /// inbound messages on this domain.
    pub fn initialize(
        env: Env,
        admin: Address,
        local_domain: u32,
        operator: Address,
    ) -> Result<(), Error> {
        if storage::has_admin(&env) {
            return Err(Error::AlreadyInitialized);
        }
        admin.require_auth();
        storage::set_admin(&env, &admin);
        storage::set_local_domain(&env, local_domain);
        storage::set_operator(&env, &operator);
        Ok(())
    }

    pub fn set_operator(env: Env, admin: Address, operator: Address) -> Result<(), Error> {
        Self::require_initialized(&env)?;
        admin.require_auth();
        if admin != storage::get_admin(&env) {
            return Err(Error::Unauthorized);
        }
        storage::set_operator(&env, &operator);
        Ok(())
    }

    /// Sender side. Wraps a bid intent, assigns the next nonce for the
    /// destination, and parks it in the outbox for the courier to pick up.
    /// Fire-and-forget: nothing here waits for, or can cancel, delivery.
    pub fn send_bid(
        env: Env,
        bidder: Address,
        destination_domain: u32,
        auction: Address,
        auction_id: u64,
        amount: i128,
    ) -> Result<u64, Error> {
        Self::require_initialized(&env)?;
        bidder.require_auth();

        if amount <= 0 {
            return Err(Error::InvalidAmount);
        }
        let local_domain = storage::get_local_domain(&env);
        if destination_domain == local_domain {
            return Err(Error::WrongDomain);
        }

        let nonce = storage::increment_out_nonce(&env, destination_domain);
        let message = RelayMessage {
            source_domain: local_domain,
            destination_domain,
            auction: auction.clone(),
            auction_id,
            bidder: bidder.clone(),
            amount,
            nonce,
        };
        storage::set_outbox(&env, &message);

        events::emit_bid_relayed(&env, destination_domain, nonce, auction, auction_id, bidder, amount);
        Ok(nonce)
    }

    /// Receiver side. Applies the contained bid through the auction's own
    /// validation path, at most once per `(source_domain, nonce)` no matter
    /// how often the courier retries. Duplicates and bids the auction rejects
    /// both return Ok: the first is a silent discard, the second is consumed
    /// and logged, neither is retried here.
    pub fn deliver(env: Env, operator: Address, message: RelayMessage) -> Result<(), Error> {
        Self::require_initialized(&env)?;
        operator.require_auth();
        if operator != storage::get_operator(&env) {
            return Err(Error::Unauthorized);
        }
        if message.destination_domain != storage::get_local_domain(&env) {
            return Err(Error::WrongDomain);
        }

        let source = message.source_domain;
        let nonce = message.nonce;
        let highest = storage::get_highest_seen(&env, source);

        let aged_out = highest >= REPLAY_WINDOW && nonce <= highest - REPLAY_WINDOW;
        if aged_out || storage::is_seen(&env, source, nonce) {
            events::emit_duplicate_discarded(&env, source, nonce);
            return Ok(());
        }

        // Record before applying so a redelivery of this exact message can
        // never apply twice.
        storage::mark_seen(&env, source, nonce);
        if nonce > highest {
            storage::set_highest_seen(&env, source, nonce);
        }
        if nonce > REPLAY_WINDOW {
            storage::remove_seen(&env, source, nonce - REPLAY_WINDOW);
        }

        Self::apply_bid(&env, &message);
        Ok(())
    }

    // ========== VIEWS ==========

    pub fn get_local_domain(env: Env) -> Result<u32, Error> {
        Self::require_initialized(&env)?;
        Ok(storage::get_local_domain(&env))
    }

    /// The nonce the next outbound message to `destination_domain` will get.
    pub fn next_nonce(env: Env, destination_domain: u32) -> u64 {
        storage::get_out_nonce(&env, destination_domain) + 1
    }

    pub fn has_seen(env: Env, source_domain: u32, nonce: u64) -> bool {
        storage::is_seen(&env, source_domain, nonce)
    }

    pub fn get_outbox(env: Env, destination_domain: u32, nonce: u64) -> Result<RelayMessage, Error> {
        storage::get_outbox(&env, destination_domain, nonce).ok_or(Error::MessageNotFound)
    }

    // ========== INTERNAL ==========

    fn require_initialized(env: &Env) -> Result<(), Error> {
        if !storage::has_admin(env) {
            return Err(Error::NotInitialized);
        }
        Ok(())
    }

    /// Hands the bid to the auction instance. The relay escrows the amount
    /// from its own pre-funded balance, so it pre-authorizes the token pull
    /// the auction will perform against it.
    fn apply_bid(env: &Env, message: &RelayMessage) {
        let token = env.try_invoke_contract::<Address, soroban_sdk::Error>(
            &message.auction,
            &Symbol::new(env, "get_payment_token"),
            vec![env, message.auction_id.into_val(env)],
        );
        let token = match token {
            Ok(Ok(token)) => token,
            _ => {
                events::emit_relayed_bid_rejected(
                    env,
                    message.source_domain,
                    message.nonce,
                    message.auction.clone(),
                    message.auction_id,
                );
                return;
            }
        };

        let transfer_args: Vec<Val> = vec![
            env,
            env.current_contract_address().into_val(env),
            message.auction.into_val(env),
            message.amount.into_val(env),
        ];
        env.authorize_as_current_contract(vec![
            env,
            InvokerContractAuthEntry::Contract(SubContractInvocation {
                context: ContractContext {
                    contract: token,
                    fn_name: Symbol::new(env, "transfer"),
                    args: transfer_args,
                },
                sub_invocations: vec![env],
            }),
        ]);

        let res = env.try_invoke_contract::<(), soroban_sdk::Error>(
            &message.auction,
            &Symbol::new(env, "relay_bid"),
            vec![
                env,
                message.auction_id.into_val(env),
                message.bidder.into_val(env),
                message.amount.into_val(env),
            ],
        );
        match res {
            Ok(_) => events::emit_bid_delivered(
                env,
                message.source_domain,
                message.nonce,
                message.auction.clone(),
                message.auction_id,
                message.bidder.clone(),
                message.amount,
            ),
            Err(_) => events::emit_relayed_bid_rejected(
                env,
                message.source_domain,
                message.nonce,
                message.auction.clone(),
                message.auction_id,
            ),
        }
    }
}
