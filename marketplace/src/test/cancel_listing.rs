#![cfg(test)]

use super::{MarketplaceTest, TOKEN_ID};
use crate::events::MarketplaceEvent;
use crate::types::Error;
use soroban_sdk::testutils::Events;
use soroban_sdk::{Address, IntoVal, Val, Vec};

#[test]
fn test_cancel_listing_clears_listing() {
    let test: MarketplaceTest = MarketplaceTest::setup();
    test.list_default();

    test.marketplace_client
        .cancel_listing(&test.seller, &test.nft_client.address, &TOKEN_ID);

    assert!(test
        .marketplace_client
        .get_listing(&test.nft_client.address, &TOKEN_ID)
        .is_none());
}

#[test]
fn test_cancel_listing_publishes_event() {
    let test: MarketplaceTest = MarketplaceTest::setup();
    test.list_default();

    test.marketplace_client
        .cancel_listing(&test.seller, &test.nft_client.address, &TOKEN_ID);

    let event_expected: (Address, Vec<Val>, Val) = (
        test.marketplace_client.address.clone(),
        (MarketplaceEvent::ItemCanceled(
            test.seller.clone(),
            test.nft_client.address.clone(),
            TOKEN_ID,
        )
        .name(),)
            .into_val(&test.env),
        (
            test.seller.clone(),
            test.nft_client.address.clone(),
            TOKEN_ID,
        )
            .into_val(&test.env),
    );

    assert!(
        test.env.events().all().contains(event_expected),
        "item canceled event not present"
    );
}

#[test]
fn test_cancel_listing_exclusively_for_owners() {
    let test: MarketplaceTest = MarketplaceTest::setup();
    test.list_default();

    let res = test.marketplace_client.try_cancel_listing(
        &test.buyer,
        &test.nft_client.address,
        &TOKEN_ID,
    );
    assert_eq!(res, Err(Ok(Error::NotOwner)));
}

#[test]
fn test_cancel_listing_rejects_unlisted_token() {
    let test: MarketplaceTest = MarketplaceTest::setup();

    let res = test.marketplace_client.try_cancel_listing(
        &test.seller,
        &test.nft_client.address,
        &TOKEN_ID,
    );
    assert_eq!(res, Err(Ok(Error::NotListed)));
}
