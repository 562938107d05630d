use soroban_sdk::testutils::Address as _;
use soroban_sdk::Address;

use crate::test::{advance_ledger, setup_test, AUCTION_DURATION, BUYOUT_PRICE, ONE};
use crate::types::{AuctionStatus, PaymentCurrency};
use crate::Error;

#[test]
fn test_bid_before_start_fails() {
    let fx = setup_test();
    let auction_id = fx.create_default_auction(1);

    let result = fx.client.try_bid(&auction_id, &fx.bidder1, &(11 * ONE / 10));
    assert_eq!(result, Err(Ok(Error::AuctionNotActive)));
}

#[test]
fn test_first_valid_bid() {
    let fx = setup_test();
    let auction_id = fx.open_default_auction(1);

    let amount = 11 * ONE / 10; // 1.1
    fx.client.bid(&auction_id, &fx.bidder1, &amount);

    let auction = fx.client.get_auction(&auction_id);
    assert_eq!(auction.highest_bidder, Some(fx.bidder1.clone()));
    assert_eq!(auction.highest_bid, amount);
    assert_eq!(auction.status, AuctionStatus::Active);

    // Custody holds exactly the highest bid.
    assert_eq!(fx.native.balance(&fx.contract), amount);
}

#[test]
fn test_bid_below_starting_price_fails() {
    let fx = setup_test();
    let auction_id = fx.open_default_auction(1);

    let result = fx.client.try_bid(&auction_id, &fx.bidder1, &(9 * ONE / 10));
    assert_eq!(result, Err(Ok(Error::BidBelowStartingPrice)));
    assert_eq!(fx.native.balance(&fx.contract), 0);
}

#[test]
fn test_increment_scenario_with_exact_refund() {
    let fx = setup_test();
    let auction_id = fx.open_default_auction(1);

    let bidder1_initial = fx.native.balance(&fx.bidder1);

    // 1.1 accepted.
    fx.client.bid(&auction_id, &fx.bidder1, &11_000_000);

    // 1.11 is below the 5% increment over 1.1.
    let result = fx.client.try_bid(&auction_id, &fx.bidder2, &11_100_000);
    assert_eq!(result, Err(Ok(Error::BidTooLow)));

    // 1.2 accepted; bidder1 gets exactly 1.1 back.
    fx.client.bid(&auction_id, &fx.bidder2, &12_000_000);
    assert_eq!(fx.native.balance(&fx.bidder1), bidder1_initial);
    assert_eq!(fx.native.balance(&fx.contract), 12_000_000);

    let auction = fx.client.get_auction(&auction_id);
    assert_eq!(auction.highest_bidder, Some(fx.bidder2.clone()));
    assert_eq!(auction.highest_bid, 12_000_000);
}

#[test]
fn test_bid_exactly_at_increment_threshold_accepted() {
    let fx = setup_test();
    let auction_id = fx.open_default_auction(1);

    fx.client.bid(&auction_id, &fx.bidder1, &11_000_000);
    // floor(11_000_000 * 105 / 100) = 11_550_000
    fx.client.bid(&auction_id, &fx.bidder2, &11_550_000);

    let auction = fx.client.get_auction(&auction_id);
    assert_eq!(auction.highest_bid, 11_550_000);
}

#[test]
fn test_bid_one_unit_below_threshold_rejected() {
    let fx = setup_test();
    let auction_id = fx.open_default_auction(1);

    fx.client.bid(&auction_id, &fx.bidder1, &11_000_000);
    let result = fx.client.try_bid(&auction_id, &fx.bidder2, &11_549_999);
    assert_eq!(result, Err(Ok(Error::BidTooLow)));
}

#[test]
fn test_highest_bid_is_monotonic() {
    let fx = setup_test();
    let auction_id = fx.open_default_auction(1);

    let mut previous = 0i128;
    for amount in [10_000_000i128, 10_500_000, 11_025_000, 12_000_000] {
        let bidder = if previous == 0 { &fx.bidder1 } else { &fx.bidder2 };
        fx.client.bid(&auction_id, bidder, &amount);
        let (_, highest) = fx.client.get_highest_bid(&auction_id);
        assert!(highest >= previous);
        assert_eq!(fx.native.balance(&fx.contract), highest);
        previous = highest;
    }
}

#[test]
fn test_buyout_ends_auction_before_deadline() {
    let fx = setup_test();
    let auction_id = fx.open_default_auction(1);

    fx.client.bid(&auction_id, &fx.bidder1, &BUYOUT_PRICE);

    let auction = fx.client.get_auction(&auction_id);
    assert_eq!(auction.status, AuctionStatus::Ended);
    // The record keeps the configured deadline, not the early close time.
    assert_eq!(auction.end_time, fx.env.ledger().timestamp() + AUCTION_DURATION);
    assert_eq!(fx.nft.owner_of(&1), fx.bidder1);
    // Winning bid stays in custody until the seller withdraws.
    assert_eq!(fx.native.balance(&fx.contract), BUYOUT_PRICE);

    // Terminal states accept no further bids.
    let result = fx.client.try_bid(&auction_id, &fx.bidder2, &(6 * ONE));
    assert_eq!(result, Err(Ok(Error::AuctionNotActive)));
}

#[test]
fn test_bid_above_buyout_also_triggers_buyout() {
    let fx = setup_test();
    let auction_id = fx.open_default_auction(1);

    fx.client.bid(&auction_id, &fx.bidder1, &(BUYOUT_PRICE + ONE));
    let auction = fx.client.get_auction(&auction_id);
    assert_eq!(auction.status, AuctionStatus::Ended);
    assert_eq!(fx.nft.owner_of(&1), fx.bidder1);
}

#[test]
fn test_bid_after_deadline_fails() {
    let fx = setup_test();
    let auction_id = fx.open_default_auction(1);

    advance_ledger(&fx.env, AUCTION_DURATION + 1);
    let result = fx.client.try_bid(&auction_id, &fx.bidder1, &(2 * ONE));
    assert_eq!(result, Err(Ok(Error::AuctionNotActive)));
}

#[test]
fn test_bid_without_funds_fails_atomically() {
    let fx = setup_test();
    let auction_id = fx.open_default_auction(1);

    let pauper = Address::generate(&fx.env);
    let result = fx.client.try_bid(&auction_id, &pauper, &(2 * ONE));
    assert_eq!(result, Err(Ok(Error::TransferFailed)));

    // Nothing changed.
    let auction = fx.client.get_auction(&auction_id);
    assert_eq!(auction.highest_bidder, None);
    assert_eq!(fx.native.balance(&fx.contract), 0);
}

#[test]
fn test_token_currency_bids_and_refunds() {
    let fx = setup_test();
    let auction_id =
        fx.create_auction_with(1, PaymentCurrency::Token(fx.alt_address.clone()), None);
    advance_ledger(&fx.env, 60);

    let bidder1_initial = fx.alt.balance(&fx.bidder1);
    fx.client.bid(&auction_id, &fx.bidder1, &(12 * ONE / 10));
    assert_eq!(fx.alt.balance(&fx.contract), 12 * ONE / 10);
    assert_eq!(fx.native.balance(&fx.contract), 0);

    fx.client.bid(&auction_id, &fx.bidder2, &(15 * ONE / 10));
    assert_eq!(fx.alt.balance(&fx.bidder1), bidder1_initial);
    assert_eq!(fx.alt.balance(&fx.contract), 15 * ONE / 10);
}

#[test]
fn test_bid_history_is_appended() {
    let fx = setup_test();
    let auction_id = fx.open_default_auction(1);

    fx.client.bid(&auction_id, &fx.bidder1, &11_000_000);
    fx.client.bid(&auction_id, &fx.bidder2, &12_000_000);

    let history = fx.client.get_bid_history(&auction_id);
    assert_eq!(history.len(), 2);
    assert_eq!(history.get(0).unwrap().amount, 11_000_000);
    assert_eq!(history.get(1).unwrap().amount, 12_000_000);
}

#[test]
fn test_relay_bid_requires_configured_relay() {
    let fx = setup_test();
    let auction_id = fx.open_default_auction(1);

    let remote_bidder = Address::generate(&fx.env);
    let result = fx.client.try_relay_bid(&auction_id, &remote_bidder, &(2 * ONE));
    assert_eq!(result, Err(Ok(Error::RelayNotConfigured)));
}

#[test]
fn test_relay_bid_escrows_from_relay_and_refunds_relay() {
    let fx = setup_test();
    let auction_id = fx.open_default_auction(1);

    // The relay endpoint holds the bridged funds on this domain.
    let relay = Address::generate(&fx.env);
    fx.native_admin.mint(&relay, &(100 * ONE));
    fx.client.set_relay(&fx.admin, &relay);

    let remote_bidder = Address::generate(&fx.env);
    fx.client.relay_bid(&auction_id, &remote_bidder, &(2 * ONE));

    let auction = fx.client.get_auction(&auction_id);
    assert_eq!(auction.highest_bidder, Some(remote_bidder.clone()));
    assert_eq!(fx.native.balance(&relay), 98 * ONE);
    assert_eq!(fx.native.balance(&fx.contract), 2 * ONE);

    // A local outbid refunds the relay, not the remote bidder.
    fx.client.bid(&auction_id, &fx.bidder1, &(3 * ONE));
    assert_eq!(fx.native.balance(&relay), 100 * ONE);
    assert_eq!(fx.native.balance(&fx.contract), 3 * ONE);
}

#[test]
fn test_relay_bid_uses_local_validation() {
    let fx = setup_test();
    let auction_id = fx.open_default_auction(1);

    let relay = Address::generate(&fx.env);
    fx.native_admin.mint(&relay, &(100 * ONE));
    fx.client.set_relay(&fx.admin, &relay);

    fx.client.bid(&auction_id, &fx.bidder1, &(2 * ONE));

    // A stale remote bid fails exactly like a local one would.
    let remote_bidder = Address::generate(&fx.env);
    let result = fx.client.try_relay_bid(&auction_id, &remote_bidder, &(2 * ONE));
    assert_eq!(result, Err(Ok(Error::BidTooLow)));
}
