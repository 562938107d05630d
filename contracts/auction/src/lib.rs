#![no_std]

mod admin;
mod errors;
mod events;
mod storage;
mod types;

use soroban_sdk::{
    contract, contractimpl, token, vec, Address, BytesN, Env, IntoVal, Symbol, Vec,
};

pub use errors::Error;
use types::{Auction, AuctionStatus, Bid, PaymentCurrency, PriceInfo};

#[contract]
pub struct AuctionContract;

#[contractimpl]
impl AuctionContract {
    /// One-time setup. Deployed and initialized atomically by the factory,
    /// so no auth is required here; the first caller wins the slot.
    pub fn initialize(
        env: Env,
        admin: Address,
        factory: Address,
        native_token: Address,
        price_feed: Address,
    ) -> Result<(), Error> {
        if storage::has_admin(&env) {
            return Err(Error::AlreadyInitialized);
        }
        storage::set_admin(&env, &admin);
        storage::set_factory(&env, &factory);
        storage::set_native_token(&env, &native_token);
        storage::set_price_feed(&env, &price_feed);
        storage::set_fee_recipient(&env, &admin);
        storage::set_fee_pct(&env, 0);
        Ok(())
    }

    /// Opens a new sale. The NFT moves into contract custody here and stays
    /// until the auction ends or is cancelled.
    pub fn create_auction(
        env: Env,
        seller: Address,
        nft_contract: Address,
        token_id: u32,
        starting_price: i128,
        buyout_price: Option<i128>,
        start_time: u64,
        end_time: u64,
        currency: PaymentCurrency,
        min_increment_pct: u32,
    ) -> Result<u64, Error> {
        Self::require_initialized(&env)?;
        seller.require_auth();

        if starting_price <= 0 {
            return Err(Error::InvalidStartingPrice);
        }
        let now = env.ledger().timestamp();
        if end_time <= start_time || start_time < now {
            return Err(Error::InvalidTimes);
        }
        if let Some(buyout) = buyout_price {
            if buyout < starting_price {
                return Err(Error::InvalidBuyoutPrice);
            }
        }
        if min_increment_pct > 100 {
            return Err(Error::InvalidIncrement);
        }

        transfer_asset(&env, &nft_contract, &seller, &env.current_contract_address(), token_id)?;

        let auction_id = storage::increment_auction_counter(&env);
        let auction = Auction {
            auction_id,
            nft_contract: nft_contract.clone(),
            token_id,
            seller: seller.clone(),
            starting_price,
            buyout_price,
            start_time,
            end_time,
            currency: currency.clone(),
            min_increment_pct,
            status: AuctionStatus::Pending,
            highest_bid: 0,
            highest_bidder: None,
            funder: None,
            funds_withdrawn: false,
            fee_pct: storage::get_fee_pct(&env),
        };
        storage::save_auction(&env, &auction);

        events::emit_auction_created(
            &env,
            auction_id,
            seller,
            nft_contract,
            token_id,
            starting_price,
            currency,
        );
        Ok(auction_id)
    }

    /// Local bid. The bidder escrows the amount itself.
    pub fn bid(env: Env, auction_id: u64, bidder: Address, amount: i128) -> Result<(), Error> {
        bidder.require_auth();
        Self::place_bid_inner(&env, auction_id, bidder.clone(), bidder, amount)
    }

    /// Remote-origin bid applied by the configured relay. Runs the exact
    /// validation path of a local bid; the relay escrows the amount from its
    /// own balance and receives any later refund.
    pub fn relay_bid(env: Env, auction_id: u64, bidder: Address, amount: i128) -> Result<(), Error> {
        let relay = storage::get_relay(&env).ok_or(Error::RelayNotConfigured)?;
        relay.require_auth();
        Self::place_bid_inner(&env, auction_id, bidder, relay, amount)
    }

    /// Closes an auction whose end time has passed. Callable by anyone.
    pub fn end_auction(env: Env, auction_id: u64) -> Result<(), Error> {
        let mut auction = storage::get_auction(&env, auction_id).ok_or(Error::AuctionNotFound)?;

        if is_terminal(&auction) {
            return Err(Error::AuctionNotActive);
        }
        if env.ledger().timestamp() < auction.end_time {
            return Err(Error::AuctionNotEnded);
        }

        let contract = env.current_contract_address();
        match &auction.highest_bidder {
            Some(winner) => {
                // Winning bid stays in custody until withdraw_funds.
                transfer_asset(&env, &auction.nft_contract, &contract, winner, auction.token_id)?;
            }
            None => {
                transfer_asset(
                    &env,
                    &auction.nft_contract,
                    &contract,
                    &auction.seller,
                    auction.token_id,
                )?;
            }
        }

        auction.status = AuctionStatus::Ended;
        storage::save_auction(&env, &auction);
        events::emit_auction_ended(&env, auction_id, auction.highest_bidder, auction.highest_bid);
        Ok(())
    }

    /// Seller-only, and only while no bid has been placed.
    pub fn cancel_auction(env: Env, auction_id: u64, seller: Address) -> Result<(), Error> {
        seller.require_auth();

        let mut auction = storage::get_auction(&env, auction_id).ok_or(Error::AuctionNotFound)?;
        if auction.seller != seller {
            return Err(Error::Unauthorized);
        }
        if is_terminal(&auction) {
            return Err(Error::AuctionNotActive);
        }
        if auction.highest_bidder.is_some() {
            return Err(Error::CannotCancelWithBids);
        }

        transfer_asset(
            &env,
            &auction.nft_contract,
            &env.current_contract_address(),
            &auction.seller,
            auction.token_id,
        )?;

        auction.status = AuctionStatus::Cancelled;
        storage::save_auction(&env, &auction);
        events::emit_auction_cancelled(&env, auction_id, seller);
        Ok(())
    }

    /// Pays the seller their proceeds (highest bid minus fee) once the sale
    /// has ended. The fee share accrues per currency until swept by
    /// `withdraw_admin_fees`. Second call fails.
    pub fn withdraw_funds(env: Env, auction_id: u64, seller: Address) -> Result<(), Error> {
        seller.require_auth();

        let mut auction = storage::get_auction(&env, auction_id).ok_or(Error::AuctionNotFound)?;
        if auction.seller != seller {
            return Err(Error::Unauthorized);
        }
        if auction.status != AuctionStatus::Ended {
            return Err(Error::AuctionNotEnded);
        }
        if auction.funds_withdrawn {
            return Err(Error::AlreadyWithdrawn);
        }
        if auction.highest_bidder.is_none() {
            return Err(Error::NoBidsPlaced);
        }

        // The pct snapshotted when the auction was opened, not the live one.
        let fee = auction.highest_bid * auction.fee_pct as i128 / 100;
        let proceeds = auction.highest_bid - fee;

        push_payment(&env, &auction.currency, &auction.seller, proceeds)?;

        if fee > 0 {
            let accrued = storage::get_accrued_fees(&env, &auction.currency);
            storage::set_accrued_fees(&env, &auction.currency, accrued + fee);
        }

        auction.funds_withdrawn = true;
        storage::save_auction(&env, &auction);
        events::emit_funds_withdrawn(&env, auction_id, seller, proceeds, fee);
        Ok(())
    }

    /// Sweeps accrued fees for one currency to the fee recipient. Callable by
    /// the admin or by the fee recipient itself; a zero balance is a no-op.
    pub fn withdraw_admin_fees(
        env: Env,
        caller: Address,
        currency: PaymentCurrency,
    ) -> Result<(), Error> {
        caller.require_auth();

        let admin = storage::get_admin(&env);
        let recipient = storage::get_fee_recipient(&env);
        if caller != admin && caller != recipient {
            return Err(Error::Unauthorized);
        }

        let amount = storage::get_accrued_fees(&env, &currency);
        if amount == 0 {
            return Ok(());
        }

        push_payment(&env, &currency, &recipient, amount)?;
        storage::set_accrued_fees(&env, &currency, 0);
        events::emit_admin_fees_withdrawn(&env, currency, recipient, amount);
        Ok(())
    }

    // ========== CONFIGURATION ==========

    pub fn set_fee_recipient(env: Env, caller: Address, recipient: Address) -> Result<(), Error> {
        admin::require_admin(&env, &caller)?;
        storage::set_fee_recipient(&env, &recipient);
        events::emit_fee_config_updated(&env, recipient, storage::get_fee_pct(&env));
        Ok(())
    }

    pub fn set_fee_pct(env: Env, caller: Address, pct: u32) -> Result<(), Error> {
        admin::require_admin(&env, &caller)?;
        if pct > 100 {
            return Err(Error::InvalidFeePct);
        }
        storage::set_fee_pct(&env, pct);
        events::emit_fee_config_updated(&env, storage::get_fee_recipient(&env), pct);
        Ok(())
    }

    pub fn set_relay(env: Env, caller: Address, relay: Address) -> Result<(), Error> {
        admin::require_admin(&env, &caller)?;
        storage::set_relay(&env, &relay);
        Ok(())
    }

    /// Repoints this instance to a new implementation. Factory-only. Auction
    /// records live in persistent storage with an append-only layout and
    /// survive the swap untouched.
    pub fn upgrade(env: Env, new_wasm_hash: BytesN<32>) -> Result<(), Error> {
        Self::require_initialized(&env)?;
        let factory = storage::get_factory(&env);
        factory.require_auth();
        env.deployer().update_current_contract_wasm(new_wasm_hash);
        Ok(())
    }

    // ========== VIEWS ==========

    pub fn get_auction(env: Env, auction_id: u64) -> Result<Auction, Error> {
        storage::get_auction(&env, auction_id).ok_or(Error::AuctionNotFound)
    }

    pub fn get_bid_history(env: Env, auction_id: u64) -> Result<Vec<Bid>, Error> {
        if storage::get_auction(&env, auction_id).is_none() {
            return Err(Error::AuctionNotFound);
        }
        Ok(storage::get_bid_history(&env, auction_id))
    }

    pub fn get_highest_bid(env: Env, auction_id: u64) -> Result<(Option<Address>, i128), Error> {
        let auction = storage::get_auction(&env, auction_id).ok_or(Error::AuctionNotFound)?;
        Ok((auction.highest_bidder, auction.highest_bid))
    }

    pub fn get_payment_token(env: Env, auction_id: u64) -> Result<Address, Error> {
        let auction = storage::get_auction(&env, auction_id).ok_or(Error::AuctionNotFound)?;
        Ok(resolve_token(&env, &auction.currency))
    }

    pub fn get_accrued_fees(env: Env, currency: PaymentCurrency) -> i128 {
        storage::get_accrued_fees(&env, &currency)
    }

    pub fn get_fee_recipient(env: Env) -> Result<Address, Error> {
        Self::require_initialized(&env)?;
        Ok(storage::get_fee_recipient(&env))
    }

    pub fn get_fee_pct(env: Env) -> u32 {
        storage::get_fee_pct(&env)
    }

    /// Read-only conversion-rate lookup, passed through to the price feed.
    pub fn get_price_info(env: Env) -> Result<PriceInfo, Error> {
        let feed = storage::get_price_feed(&env);
        let res = env.try_invoke_contract::<PriceInfo, soroban_sdk::Error>(
            &feed,
            &Symbol::new(&env, "latest_price"),
            vec![&env],
        );
        match res {
            Ok(Ok(info)) => Ok(info),
            _ => Err(Error::PriceFeedUnavailable),
        }
    }

    // ========== INTERNAL ==========

    fn require_initialized(env: &Env) -> Result<(), Error> {
        if !storage::has_admin(env) {
            return Err(Error::NotInitialized);
        }
        Ok(())
    }

    /// Shared bid path for local and relayed bids. `funder` is the address
    /// the amount is pulled from and refunds are pushed to.
    fn place_bid_inner(
        env: &Env,
        auction_id: u64,
        bidder: Address,
        funder: Address,
        amount: i128,
    ) -> Result<(), Error> {
        let mut auction = storage::get_auction(env, auction_id).ok_or(Error::AuctionNotFound)?;

        if is_terminal(&auction) {
            return Err(Error::AuctionNotActive);
        }
        let now = env.ledger().timestamp();
        if now < auction.start_time || now >= auction.end_time {
            return Err(Error::AuctionNotActive);
        }
        if auction.status == AuctionStatus::Pending {
            auction.status = AuctionStatus::Active;
        }

        // Integer floor; a bid exactly at the threshold is accepted.
        match &auction.highest_bidder {
            None => {
                if amount < auction.starting_price {
                    return Err(Error::BidBelowStartingPrice);
                }
            }
            Some(_) => {
                let required = auction.highest_bid * (100 + auction.min_increment_pct as i128) / 100;
                if amount < required {
                    return Err(Error::BidTooLow);
                }
            }
        }

        let contract = env.current_contract_address();
        pull_payment(env, &auction.currency, &funder, amount)?;
        if let Some(previous_funder) = &auction.funder {
            push_payment(env, &auction.currency, previous_funder, auction.highest_bid)?;
        }

        auction.highest_bid = amount;
        auction.highest_bidder = Some(bidder.clone());
        auction.funder = Some(funder);

        storage::add_bid_to_history(
            env,
            auction_id,
            Bid { bidder: bidder.clone(), amount, timestamp: now },
        );

        // The configured deadline stays on the record for audit even when a
        // buyout closes the sale early.
        let buyout_hit = matches!(auction.buyout_price, Some(buyout) if amount >= buyout);
        if buyout_hit {
            transfer_asset(env, &auction.nft_contract, &contract, &bidder, auction.token_id)?;
            auction.status = AuctionStatus::Ended;
        }

        storage::save_auction(env, &auction);
        events::emit_bid_placed(env, auction_id, bidder.clone(), amount, auction.currency.clone());
        if buyout_hit {
            events::emit_auction_ended(env, auction_id, Some(bidder), amount);
        }
        Ok(())
    }
}

fn is_terminal(auction: &Auction) -> bool {
    auction.status == AuctionStatus::Ended || auction.status == AuctionStatus::Cancelled
}

fn resolve_token(env: &Env, currency: &PaymentCurrency) -> Address {
    match currency {
        PaymentCurrency::Native => storage::get_native_token(env),
        PaymentCurrency::Token(addr) => addr.clone(),
    }
}

/// Pulls `amount` of `currency` from `from` into contract custody. A failed
/// transfer fails the enclosing operation; the host rolls everything back.
fn pull_payment(
    env: &Env,
    currency: &PaymentCurrency,
    from: &Address,
    amount: i128,
) -> Result<(), Error> {
    let client = token::TokenClient::new(env, &resolve_token(env, currency));
    if client.try_transfer(from, &env.current_contract_address(), &amount).is_err() {
        return Err(Error::TransferFailed);
    }
    Ok(())
}

/// Pushes `amount` of `currency` out of custody to `to`.
fn push_payment(
    env: &Env,
    currency: &PaymentCurrency,
    to: &Address,
    amount: i128,
) -> Result<(), Error> {
    let client = token::TokenClient::new(env, &resolve_token(env, currency));
    if client.try_transfer(&env.current_contract_address(), to, &amount).is_err() {
        return Err(Error::TransferFailed);
    }
    Ok(())
}

/// Custody move on the external NFT contract: `transfer(from, to, token_id)`.
fn transfer_asset(
    env: &Env,
    nft_contract: &Address,
    from: &Address,
    to: &Address,
    token_id: u32,
) -> Result<(), Error> {
    let res = env.try_invoke_contract::<(), soroban_sdk::Error>(
        nft_contract,
        &Symbol::new(env, "transfer"),
        vec![
            env,
            from.into_val(env),
            to.into_val(env),
            token_id.into_val(env),
        ],
    );
    if res.is_err() {
        return Err(Error::AssetTransferFailed);
    }
    Ok(())
}

#[cfg(test)]
mod test;
