#![no_std]

mod errors;
mod events;
mod storage;
mod types;

use soroban_sdk::{
    contract, contractimpl, vec, Address, BytesN, Env, IntoVal, Symbol, Vec,
};

pub use errors::Error;
use types::{Implementation, InstanceRecord, PaymentCurrency};

#[contract]
pub struct AuctionFactory;

#[contractimpl]
impl AuctionFactory {
    // ========== INITIALIZATION ==========

    /// One-time setup with the initial auction implementation and the
    /// collaborators every instance is wired to.
    pub fn initialize(
        env: Env,
        admin: Address,
        auction_wasm_hash: BytesN<32>,
        version: u32,
        native_token: Address,
        price_feed: Address,
    ) -> Result<(), Error> {
        if storage::is_initialized(&env) {
            return Err(Error::AlreadyInitialized);
        }
        admin.require_auth();

        if version == 0 {
            return Err(Error::InvalidVersion);
        }

        storage::set_initialized(&env);
        storage::set_admin(&env, &admin);
        storage::set_implementation(&env, &Implementation { wasm_hash: auction_wasm_hash, version });
        storage::set_native_token(&env, &native_token);
        storage::set_price_feed(&env, &price_feed);

        events::emit_factory_initialized(&env, admin, version);
        Ok(())
    }

    // ========== INSTANCE DEPLOYMENT ==========

    /// Deploys a fresh auction instance bound to the current implementation,
    /// initializes it, and opens the seller's auction on it (instance-local
    /// id sequence starts at 1). Returns the new instance address.
    #[allow(clippy::too_many_arguments)]
    pub fn create_auction(
        env: Env,
        seller: Address,
        salt: BytesN<32>,
        nft_contract: Address,
        token_id: u32,
        starting_price: i128,
        buyout_price: Option<i128>,
        start_time: u64,
        end_time: u64,
        currency: PaymentCurrency,
        min_increment_pct: u32,
    ) -> Result<Address, Error> {
        Self::require_initialized(&env)?;
        seller.require_auth();

        let implementation = storage::get_implementation(&env);
        let instance = env
            .deployer()
            .with_current_contract(salt)
            .deploy_v2(implementation.wasm_hash.clone(), ());

        Self::call_instance_init(&env, &instance);
        Self::call_instance_create_auction(
            &env,
            &instance,
            &seller,
            &nft_contract,
            token_id,
            starting_price,
            buyout_price,
            start_time,
            end_time,
            &currency,
            min_increment_pct,
        );

        let registry_id = storage::increment_instance_counter(&env);
        let record = InstanceRecord {
            registry_id,
            address: instance.clone(),
            seller: seller.clone(),
            version: implementation.version,
            deployed_at: env.ledger().timestamp(),
        };
        storage::set_instance(&env, &record);

        events::emit_auction_instance_created(
            &env,
            instance.clone(),
            seller,
            registry_id,
            implementation.version,
        );
        Ok(instance)
    }

    // ========== IMPLEMENTATION MANAGEMENT ==========

    /// Registers the implementation new deployments bind to. Versions only
    /// move forward.
    pub fn set_implementation(
        env: Env,
        admin: Address,
        new_wasm_hash: BytesN<32>,
        new_version: u32,
    ) -> Result<(), Error> {
        Self::require_initialized(&env)?;
        Self::require_admin(&env, &admin)?;
        Self::require_newer_version(&env, new_version)?;

        storage::set_implementation(&env, &Implementation { wasm_hash: new_wasm_hash, version: new_version });
        events::emit_implementation_updated(&env, new_version);
        Ok(())
    }

    /// Repoints every tracked instance to the new implementation. A single
    /// failing instance aborts the call with `UpgradeFailed`, and the host
    /// rolls back the whole invocation frame, earlier swaps included, so the
    /// set never ends up on mixed versions. Instance auction records are
    /// never rewritten.
    pub fn upgrade_all_auctions(
        env: Env,
        admin: Address,
        new_wasm_hash: BytesN<32>,
        new_version: u32,
    ) -> Result<(), Error> {
        Self::require_initialized(&env)?;
        Self::require_admin(&env, &admin)?;
        Self::require_newer_version(&env, new_version)?;

        let counter = storage::get_instance_counter(&env);
        for registry_id in 1..=counter {
            if let Some(mut record) = storage::get_instance_by_id(&env, registry_id) {
                let res = env.try_invoke_contract::<(), soroban_sdk::Error>(
                    &record.address,
                    &Symbol::new(&env, "upgrade"),
                    vec![&env, new_wasm_hash.into_val(&env)],
                );
                if res.is_err() {
                    return Err(Error::UpgradeFailed);
                }
                record.version = new_version;
                storage::set_instance(&env, &record);
            }
        }

        storage::set_implementation(&env, &Implementation { wasm_hash: new_wasm_hash, version: new_version });
        events::emit_instances_upgraded(&env, new_version, counter);
        Ok(())
    }

    // ========== VIEWS ==========

    pub fn get_admin(env: Env) -> Result<Address, Error> {
        Self::require_initialized(&env)?;
        Ok(storage::get_admin(&env))
    }

    pub fn get_implementation(env: Env) -> Result<Implementation, Error> {
        Self::require_initialized(&env)?;
        Ok(storage::get_implementation(&env))
    }

    pub fn get_instance(env: Env, address: Address) -> Result<InstanceRecord, Error> {
        storage::get_instance(&env, &address).ok_or(Error::InstanceNotFound)
    }

    pub fn get_instance_by_id(env: Env, registry_id: u64) -> Result<InstanceRecord, Error> {
        storage::get_instance_by_id(&env, registry_id).ok_or(Error::InstanceNotFound)
    }

    /// True only for addresses this factory deployed itself.
    pub fn is_instance(env: Env, address: Address) -> bool {
        storage::get_instance(&env, &address).is_some()
    }

    pub fn list_instances(env: Env) -> Vec<Address> {
        storage::list_instances(&env)
    }

    pub fn get_instance_count(env: Env) -> u64 {
        storage::get_instance_counter(&env)
    }

    // ========== INTERNAL HELPERS ==========

    fn require_initialized(env: &Env) -> Result<(), Error> {
        if !storage::is_initialized(env) {
            return Err(Error::NotInitialized);
        }
        Ok(())
    }

    fn require_admin(env: &Env, admin: &Address) -> Result<(), Error> {
        admin.require_auth();
        let stored_admin = storage::get_admin(env);
        if *admin != stored_admin {
            return Err(Error::Unauthorized);
        }
        Ok(())
    }

    fn require_newer_version(env: &Env, new_version: u32) -> Result<(), Error> {
        let current = storage::get_implementation(env);
        if new_version <= current.version {
            return Err(Error::UpgradeIncompatible);
        }
        Ok(())
    }

    /// Initialize the freshly deployed instance: the factory's admin owns it,
    /// the factory itself is its upgrade authority.
    fn call_instance_init(env: &Env, instance: &Address) {
        let init_fn = Symbol::new(env, "initialize");
        let args: Vec<soroban_sdk::Val> = vec![
            env,
            storage::get_admin(env).into_val(env),
            env.current_contract_address().into_val(env),
            storage::get_native_token(env).into_val(env),
            storage::get_price_feed(env).into_val(env),
        ];
        env.invoke_contract::<()>(instance, &init_fn, args);
    }

    #[allow(clippy::too_many_arguments)]
    fn call_instance_create_auction(
        env: &Env,
        instance: &Address,
        seller: &Address,
        nft_contract: &Address,
        token_id: u32,
        starting_price: i128,
        buyout_price: Option<i128>,
        start_time: u64,
        end_time: u64,
        currency: &PaymentCurrency,
        min_increment_pct: u32,
    ) {
        let create_fn = Symbol::new(env, "create_auction");
        let args: Vec<soroban_sdk::Val> = vec![
            env,
            seller.into_val(env),
            nft_contract.into_val(env),
            token_id.into_val(env),
            starting_price.into_val(env),
            buyout_price.into_val(env),
            start_time.into_val(env),
            end_time.into_val(env),
            currency.into_val(env),
            min_increment_pct.into_val(env),
        ];
        let _: u64 = env.invoke_contract(instance, &create_fn, args);
    }
}
