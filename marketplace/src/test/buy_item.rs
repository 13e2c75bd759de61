#![cfg(test)]

use super::{MarketplaceTest, PRICE, TOKEN_ID};
use crate::events::MarketplaceEvent;
use crate::types::Error;
use soroban_sdk::testutils::Events;
use soroban_sdk::{Address, IntoVal, Val, Vec};

#[test]
fn test_buy_item_transfers_token_and_credits_proceeds() {
    let test: MarketplaceTest = MarketplaceTest::setup();
    test.list_default();

    test.marketplace_client
        .buy_item(&test.buyer, &test.nft_client.address, &TOKEN_ID, &PRICE);

    assert_eq!(test.nft_client.owner_of(&TOKEN_ID), test.buyer);
    assert_eq!(test.marketplace_client.get_proceeds(&test.seller), PRICE);
    assert!(test
        .marketplace_client
        .get_listing(&test.nft_client.address, &TOKEN_ID)
        .is_none());

    assert_eq!(
        test.token_client.balance(&test.buyer),
        10_000_0000000 - PRICE
    );
    assert_eq!(
        test.token_client.balance(&test.marketplace_client.address),
        PRICE
    );
}

#[test]
fn test_buy_item_publishes_event() {
    let test: MarketplaceTest = MarketplaceTest::setup();
    test.list_default();

    test.marketplace_client
        .buy_item(&test.buyer, &test.nft_client.address, &TOKEN_ID, &PRICE);

    let event_expected: (Address, Vec<Val>, Val) = (
        test.marketplace_client.address.clone(),
        (MarketplaceEvent::ItemBought(
            test.buyer.clone(),
            test.nft_client.address.clone(),
            TOKEN_ID,
            PRICE,
        )
        .name(),)
            .into_val(&test.env),
        (
            test.buyer.clone(),
            test.nft_client.address.clone(),
            TOKEN_ID,
            PRICE,
        )
            .into_val(&test.env),
    );

    assert!(
        test.env.events().all().contains(event_expected),
        "item bought event not present"
    );
}

#[test]
fn test_buy_item_rejects_unlisted_token() {
    let test: MarketplaceTest = MarketplaceTest::setup();

    let res = test.marketplace_client.try_buy_item(
        &test.buyer,
        &test.nft_client.address,
        &TOKEN_ID,
        &PRICE,
    );
    assert_eq!(res, Err(Ok(Error::NotListed)));
}

#[test]
fn test_buy_item_rejects_underpayment() {
    let test: MarketplaceTest = MarketplaceTest::setup();
    test.list_default();

    let res = test.marketplace_client.try_buy_item(
        &test.buyer,
        &test.nft_client.address,
        &TOKEN_ID,
        &(PRICE - 1),
    );
    assert_eq!(res, Err(Ok(Error::PriceNotMet)));

    // Nothing moved
    assert_eq!(test.nft_client.owner_of(&TOKEN_ID), test.seller);
    assert_eq!(test.marketplace_client.get_proceeds(&test.seller), 0);
}

#[test]
fn test_buy_item_credits_overpayment_in_full() {
    let test: MarketplaceTest = MarketplaceTest::setup();
    test.list_default();
    let paid: i128 = PRICE * 2;

    test.marketplace_client
        .buy_item(&test.buyer, &test.nft_client.address, &TOKEN_ID, &paid);

    // The event still carries the listed price
    let event_expected: (Address, Vec<Val>, Val) = (
        test.marketplace_client.address.clone(),
        (MarketplaceEvent::ItemBought(
            test.buyer.clone(),
            test.nft_client.address.clone(),
            TOKEN_ID,
            PRICE,
        )
        .name(),)
            .into_val(&test.env),
        (
            test.buyer.clone(),
            test.nft_client.address.clone(),
            TOKEN_ID,
            PRICE,
        )
            .into_val(&test.env),
    );
    assert!(
        test.env.events().all().contains(event_expected),
        "item bought event not present"
    );

    assert_eq!(test.marketplace_client.get_proceeds(&test.seller), paid);
}

#[test]
fn test_buy_item_accumulates_proceeds_across_sales() {
    let test: MarketplaceTest = MarketplaceTest::setup();
    test.list_default();

    // A second token from the same seller, listed at a different price
    let second_id: u64 = test.nft_client.mint(&test.seller);
    test.nft_client
        .approve(&test.seller, &test.marketplace_client.address, &second_id);
    let second_price: i128 = PRICE * 3;
    test.marketplace_client.list_item(
        &test.seller,
        &test.nft_client.address,
        &second_id,
        &second_price,
    );

    test.marketplace_client
        .buy_item(&test.buyer, &test.nft_client.address, &TOKEN_ID, &PRICE);
    test.marketplace_client.buy_item(
        &test.buyer,
        &test.nft_client.address,
        &second_id,
        &second_price,
    );

    assert_eq!(
        test.marketplace_client.get_proceeds(&test.seller),
        PRICE + second_price
    );

    let withdrawn: i128 = test.marketplace_client.withdraw_proceeds(&test.seller);
    assert_eq!(withdrawn, PRICE + second_price);
    assert_eq!(
        test.token_client.balance(&test.seller),
        PRICE + second_price
    );
    assert_eq!(test.marketplace_client.get_proceeds(&test.seller), 0);
}
