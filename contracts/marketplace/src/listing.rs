use soroban_sdk::{Address, Env};

use crate::admin::{calculate_fee, require_not_blacklisted};
use crate::custody::{
    check_attached_value, escrow_asset, pull_payment, release_asset, require_holding,
};
use crate::errors::Error;
use crate::events::*;
use crate::settlement::settle;
use crate::storage::*;
use crate::types::{AssetKind, Listing, PayToken};

pub fn create_listing(
    e: &Env,
    seller: Address,
    asset: Address,
    asset_id: u64,
    kind: AssetKind,
    price: i128,
    pay_token: PayToken,
) -> Result<u64, Error> {
    seller.require_auth();

    let mut config = get_config(e).ok_or(Error::NotInitialized)?;
    require_not_blacklisted(e, &seller)?;

    if price <= 0 || kind.quantity() == 0 {
        return Err(Error::InvalidParameter);
    }

    require_holding(e, &seller, &asset, asset_id, &kind)?;

    let listing_id = next_listing_id(e);
    let listing = Listing {
        id: listing_id,
        asset: asset.clone(),
        asset_id,
        kind,
        price,
        pay_token: pay_token.clone(),
        seller: seller.clone(),
        is_active: true,
        created_at: e.ledger().timestamp(),
    };
    set_listing(e, &listing);

    config.total_active_listings += 1;
    config.updated_at = e.ledger().timestamp();
    set_config(e, &config);

    escrow_asset(e, &seller, &asset, asset_id, &kind);

    ListingCreatedEventData {
        seller,
        listing_id,
        asset,
        asset_id,
        quantity: kind.quantity(),
        price,
        pay_token,
    }
    .publish(e);

    extend_instance_ttl(e);
    Ok(listing_id)
}

pub fn cancel_listing(e: &Env, seller: Address, listing_id: u64) -> Result<(), Error> {
    seller.require_auth();

    let mut config = get_config(e).ok_or(Error::NotInitialized)?;
    let mut listing = get_listing(e, listing_id).ok_or(Error::ListingNotFound)?;

    if !listing.is_active {
        return Err(Error::InvalidParameter);
    }
    if listing.seller != seller {
        return Err(Error::Unauthorized);
    }

    listing.is_active = false;
    set_listing(e, &listing);

    config.total_active_listings -= 1;
    config.updated_at = e.ledger().timestamp();
    set_config(e, &config);

    release_asset(e, &listing.seller, &listing.asset, listing.asset_id, &listing.kind);

    ListingCancelledEventData { seller, listing_id }.publish(e);

    extend_instance_ttl(e);
    Ok(())
}

/// Buy a listing outright.
///
/// For native payment `native_value` must equal the price plus the buy fee;
/// for token payment it must be zero and the buyer must have approved the hub
/// for that total.
pub fn buy(e: &Env, buyer: Address, listing_id: u64, native_value: i128) -> Result<(), Error> {
    buyer.require_auth();

    let mut config = get_config(e).ok_or(Error::NotInitialized)?;
    let mut listing = get_listing(e, listing_id).ok_or(Error::ListingNotFound)?;

    if !listing.is_active {
        return Err(Error::InvalidParameter);
    }
    require_not_blacklisted(e, &buyer)?;
    if buyer == listing.seller {
        return Err(Error::InvalidParameter);
    }

    let buy_fee = calculate_fee(listing.price, config.buy_fee_bps)?;
    let total = listing
        .price
        .checked_add(buy_fee)
        .ok_or(Error::ArithmeticOverflow)?;
    check_attached_value(&listing.pay_token, total, native_value)?;

    // The listing is closed before any value or asset moves.
    listing.is_active = false;
    set_listing(e, &listing);

    config.total_active_listings -= 1;
    config.updated_at = e.ledger().timestamp();
    set_config(e, &config);

    pull_payment(e, &buyer, &listing.pay_token, total)?;
    let split = settle(
        e,
        &config,
        &listing.pay_token,
        &listing.seller,
        listing.price,
        buy_fee,
    )?;
    release_asset(e, &buyer, &listing.asset, listing.asset_id, &listing.kind);

    ListingSoldEventData {
        buyer,
        listing_id,
        seller: listing.seller,
        price: listing.price,
        buy_fee,
        seller_proceeds: split.seller_proceeds,
        treasury_total: split.treasury_total,
    }
    .publish(e);

    extend_instance_ttl(e);
    Ok(())
}
