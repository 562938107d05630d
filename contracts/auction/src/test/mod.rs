pub mod bidding_test;

use soroban_sdk::{
    contract, contractimpl, contracttype,
    testutils::{Address as _, Ledger, LedgerInfo},
    token, Address, Env,
};

use crate::types::{PaymentCurrency, PriceInfo};
use crate::{AuctionContract, AuctionContractClient};

// 7 decimal places, the native asset's convention.
pub const ONE: i128 = 10_000_000;
pub const STARTING_PRICE: i128 = ONE;
pub const BUYOUT_PRICE: i128 = 5 * ONE;
pub const MIN_INCREMENT_PCT: u32 = 5;
pub const AUCTION_DURATION: u64 = 7 * 24 * 60 * 60;
pub const START_DELAY: u64 = 60;

#[contracttype]
#[derive(Clone)]
pub enum NftKey {
    Owner(u32),
}

/// Stand-in for the external asset registry: unique items with a
/// `transfer(from, to, token_id)` / `owner_of` surface.
#[contract]
pub struct MockNft;

#[contractimpl]
impl MockNft {
    pub fn mint(env: Env, to: Address, token_id: u32) {
        env.storage().persistent().set(&NftKey::Owner(token_id), &to);
    }

    pub fn transfer(env: Env, from: Address, to: Address, token_id: u32) {
        from.require_auth();
        let owner: Address = env.storage().persistent().get(&NftKey::Owner(token_id)).unwrap();
        if owner != from {
            panic!("not the owner");
        }
        env.storage().persistent().set(&NftKey::Owner(token_id), &to);
    }

    pub fn owner_of(env: Env, token_id: u32) -> Address {
        env.storage().persistent().get(&NftKey::Owner(token_id)).unwrap()
    }
}

#[contract]
pub struct MockPriceFeed;

#[contractimpl]
impl MockPriceFeed {
    pub fn latest_price(env: Env) -> PriceInfo {
        PriceInfo { value: 2000 * ONE, timestamp: env.ledger().timestamp() }
    }
}

pub struct Fixture {
    pub env: Env,
    pub client: AuctionContractClient<'static>,
    pub contract: Address,
    pub admin: Address,
    pub seller: Address,
    pub bidder1: Address,
    pub bidder2: Address,
    pub fee_recipient: Address,
    pub nft: MockNftClient<'static>,
    pub nft_address: Address,
    pub native: token::TokenClient<'static>,
    pub native_admin: token::StellarAssetClient<'static>,
    pub native_address: Address,
    pub alt: token::TokenClient<'static>,
    pub alt_admin: token::StellarAssetClient<'static>,
    pub alt_address: Address,
}

pub fn setup_test() -> Fixture {
    let env = Env::default();
    env.mock_all_auths();

    env.ledger().set(LedgerInfo {
        timestamp: 1000,
        protocol_version: 23,
        sequence_number: 1,
        network_id: Default::default(),
        base_reserve: 10,
        min_temp_entry_ttl: 100,
        min_persistent_entry_ttl: 100,
        max_entry_ttl: 3110400,
    });

    let contract = env.register(AuctionContract, ());
    let client = AuctionContractClient::new(&env, &contract);

    let admin = Address::generate(&env);
    let seller = Address::generate(&env);
    let bidder1 = Address::generate(&env);
    let bidder2 = Address::generate(&env);
    let fee_recipient = Address::generate(&env);
    let factory = Address::generate(&env);

    let token_admin = Address::generate(&env);
    let native_contract = env.register_stellar_asset_contract_v2(token_admin.clone());
    let native_address = native_contract.address();
    let native = token::TokenClient::new(&env, &native_address);
    let native_admin = token::StellarAssetClient::new(&env, &native_address);

    let alt_contract = env.register_stellar_asset_contract_v2(token_admin);
    let alt_address = alt_contract.address();
    let alt = token::TokenClient::new(&env, &alt_address);
    let alt_admin = token::StellarAssetClient::new(&env, &alt_address);

    native_admin.mint(&bidder1, &(1000 * ONE));
    native_admin.mint(&bidder2, &(1000 * ONE));
    alt_admin.mint(&bidder1, &(1000 * ONE));
    alt_admin.mint(&bidder2, &(1000 * ONE));

    let nft_address = env.register(MockNft, ());
    let nft = MockNftClient::new(&env, &nft_address);

    let price_feed = env.register(MockPriceFeed, ());

    client.initialize(&admin, &factory, &native_address, &price_feed);
    client.set_fee_recipient(&admin, &fee_recipient);

    Fixture {
        env,
        client,
        contract,
        admin,
        seller,
        bidder1,
        bidder2,
        fee_recipient,
        nft,
        nft_address,
        native,
        native_admin,
        native_address,
        alt,
        alt_admin,
        alt_address,
    }
}

pub fn advance_ledger(env: &Env, seconds: u64) {
    env.ledger().set(LedgerInfo {
        timestamp: env.ledger().timestamp() + seconds,
        protocol_version: 23,
        sequence_number: env.ledger().sequence(),
        network_id: Default::default(),
        base_reserve: 10,
        min_temp_entry_ttl: 100,
        min_persistent_entry_ttl: 100,
        max_entry_ttl: 3110400,
    });
}

impl Fixture {
    /// Mints an NFT to the seller and opens a native-currency auction on it:
    /// starting 1.0, buyout 5.0, 5% increment, starting in 60 seconds.
    pub fn create_default_auction(&self, token_id: u32) -> u64 {
        self.create_auction_with(token_id, PaymentCurrency::Native, Some(BUYOUT_PRICE))
    }

    pub fn create_auction_with(
        &self,
        token_id: u32,
        currency: PaymentCurrency,
        buyout_price: Option<i128>,
    ) -> u64 {
        self.nft.mint(&self.seller, &token_id);
        let now = self.env.ledger().timestamp();
        self.client.create_auction(
            &self.seller,
            &self.nft_address,
            &token_id,
            &STARTING_PRICE,
            &buyout_price,
            &(now + START_DELAY),
            &(now + START_DELAY + AUCTION_DURATION),
            &currency,
            &MIN_INCREMENT_PCT,
        )
    }

    /// Same as `create_default_auction`, but already inside the bid window.
    pub fn open_default_auction(&self, token_id: u32) -> u64 {
        let auction_id = self.create_default_auction(token_id);
        advance_ledger(&self.env, START_DELAY);
        auction_id
    }
}
