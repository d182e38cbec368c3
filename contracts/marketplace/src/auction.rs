use soroban_sdk::{Address, Env};

use crate::admin::require_not_blacklisted;
use crate::custody::{
    check_attached_value, escrow_asset, pull_payment, push_payment, release_asset,
    require_holding,
};
use crate::errors::Error;
use crate::events::*;
use crate::settlement::settle;
use crate::storage::*;
use crate::types::{AssetKind, Auction, AuctionStatus, BidEscrow, PayToken};

pub fn create_auction(
    e: &Env,
    seller: Address,
    asset: Address,
    asset_id: u64,
    kind: AssetKind,
    initial_price: i128,
    min_bid_increment: i128,
    end_time: u64,
    pay_token: PayToken,
) -> Result<u64, Error> {
    seller.require_auth();

    let mut config = get_config(e).ok_or(Error::NotInitialized)?;
    require_not_blacklisted(e, &seller)?;

    let now = e.ledger().timestamp();
    if end_time <= now {
        return Err(Error::InvalidParameter);
    }
    if initial_price <= 0 || min_bid_increment <= 0 || kind.quantity() == 0 {
        return Err(Error::InvalidParameter);
    }

    require_holding(e, &seller, &asset, asset_id, &kind)?;

    let auction_id = next_auction_id(e);
    let auction = Auction {
        id: auction_id,
        asset: asset.clone(),
        asset_id,
        kind,
        initial_price,
        min_bid_increment,
        end_time,
        pay_token,
        seller: seller.clone(),
        highest_bidder: None,
        highest_bid: 0,
        status: AuctionStatus::Active,
        asset_claimed: false,
        proceeds_claimed: false,
        created_at: now,
    };
    set_auction(e, &auction);

    config.total_active_auctions += 1;
    config.updated_at = now;
    set_config(e, &config);

    escrow_asset(e, &seller, &asset, asset_id, &kind);

    AuctionCreatedEventData {
        seller,
        auction_id,
        asset,
        asset_id,
        quantity: kind.quantity(),
        initial_price,
        end_time,
    }
    .publish(e);

    extend_instance_ttl(e);
    Ok(auction_id)
}

/// Cancel an auction that has not received a bid while bidding is still open.
pub fn cancel_auction(e: &Env, seller: Address, auction_id: u64) -> Result<(), Error> {
    seller.require_auth();

    let mut config = get_config(e).ok_or(Error::NotInitialized)?;
    let mut auction = get_auction(e, auction_id).ok_or(Error::AuctionNotFound)?;

    if auction.seller != seller {
        return Err(Error::Unauthorized);
    }
    if auction.status != AuctionStatus::Active || auction.highest_bidder.is_some() {
        return Err(Error::InvalidParameter);
    }
    // Past the deadline the seller reclaims through `claim_nft`.
    if e.ledger().timestamp() >= auction.end_time {
        return Err(Error::AuctionEnded);
    }

    auction.status = AuctionStatus::Cancelled;
    set_auction(e, &auction);

    config.total_active_auctions -= 1;
    config.updated_at = e.ledger().timestamp();
    set_config(e, &config);

    release_asset(e, &seller, &auction.asset, auction.asset_id, &auction.kind);

    AuctionCancelledEventData { seller, auction_id }.publish(e);

    extend_instance_ttl(e);
    Ok(())
}

/// Smallest amount the next bid must reach.
pub fn min_next_bid(auction: &Auction) -> Result<i128, Error> {
    match auction.highest_bidder {
        None => Ok(auction.initial_price),
        Some(_) => auction
            .highest_bid
            .checked_add(auction.min_bid_increment)
            .ok_or(Error::ArithmeticOverflow),
    }
}

/// Place a bid that becomes the new highest bid.
///
/// The outbid bidder's escrow stays in the hub and is refunded through
/// [`claim_token`] once the auction has ended. A bidder returning after being
/// outbid gets their stale escrow back in the same call, so the escrow of the
/// highest bidder always equals the highest bid.
pub fn bid(
    e: &Env,
    bidder: Address,
    auction_id: u64,
    amount: i128,
    native_value: i128,
) -> Result<(), Error> {
    bidder.require_auth();

    get_config(e).ok_or(Error::NotInitialized)?;
    let mut auction = get_auction(e, auction_id).ok_or(Error::AuctionNotFound)?;

    if auction.status != AuctionStatus::Active {
        return Err(Error::InvalidParameter);
    }
    if e.ledger().timestamp() >= auction.end_time {
        return Err(Error::AuctionEnded);
    }
    require_not_blacklisted(e, &bidder)?;
    if bidder == auction.seller || auction.highest_bidder.as_ref() == Some(&bidder) {
        return Err(Error::InvalidParameter);
    }
    if amount < min_next_bid(&auction)? {
        return Err(Error::BidTooLow);
    }
    check_attached_value(&auction.pay_token, amount, native_value)?;

    let stale = get_bid_escrow(e, auction_id, &bidder)
        .map(|escrow| escrow.amount)
        .unwrap_or(0);

    set_bid_escrow(
        e,
        auction_id,
        &bidder,
        &BidEscrow {
            amount,
            claimed: false,
        },
    );
    auction.highest_bid = amount;
    auction.highest_bidder = Some(bidder.clone());
    set_auction(e, &auction);

    pull_payment(e, &bidder, &auction.pay_token, amount)?;
    push_payment(e, &bidder, &auction.pay_token, stale)?;

    BidPlacedEventData {
        bidder,
        auction_id,
        amount,
    }
    .publish(e);

    extend_instance_ttl(e);
    Ok(())
}

/// Release the auctioned asset after the deadline.
///
/// The highest bidder receives it. An auction that ended without bids
/// returns it to the seller.
pub fn claim_nft(e: &Env, caller: Address, auction_id: u64) -> Result<(), Error> {
    caller.require_auth();

    let mut config = get_config(e).ok_or(Error::NotInitialized)?;
    let mut auction = get_auction(e, auction_id).ok_or(Error::AuctionNotFound)?;

    if auction.status == AuctionStatus::Cancelled || auction.asset_claimed {
        return Err(Error::InvalidParameter);
    }
    if e.ledger().timestamp() < auction.end_time {
        return Err(Error::AuctionNotEnded);
    }
    require_not_blacklisted(e, &caller)?;

    let entitled = match &auction.highest_bidder {
        Some(winner) => *winner == caller,
        None => auction.seller == caller,
    };
    if !entitled {
        return Err(Error::Unauthorized);
    }

    auction.asset_claimed = true;
    if auction.proceeds_claimed || auction.highest_bidder.is_none() {
        auction.status = AuctionStatus::Settled;
    }
    set_auction(e, &auction);

    config.total_active_auctions -= 1;
    config.updated_at = e.ledger().timestamp();
    set_config(e, &config);

    release_asset(e, &caller, &auction.asset, auction.asset_id, &auction.kind);

    AssetClaimedEventData {
        recipient: caller,
        auction_id,
    }
    .publish(e);

    extend_instance_ttl(e);
    Ok(())
}

/// Claim funds held for an ended auction.
///
/// Called by the seller or the winner, this pays the winning bid out to the
/// seller and treasury. Called by anyone else, it refunds that caller's
/// escrow in full.
pub fn claim_token(e: &Env, caller: Address, auction_id: u64) -> Result<(), Error> {
    caller.require_auth();

    let config = get_config(e).ok_or(Error::NotInitialized)?;
    let mut auction = get_auction(e, auction_id).ok_or(Error::AuctionNotFound)?;

    if auction.status == AuctionStatus::Cancelled {
        return Err(Error::InvalidParameter);
    }
    if e.ledger().timestamp() < auction.end_time {
        return Err(Error::AuctionNotEnded);
    }
    require_not_blacklisted(e, &caller)?;

    let is_winner = auction.highest_bidder.as_ref() == Some(&caller);
    if caller == auction.seller || is_winner {
        let winner = auction
            .highest_bidder
            .clone()
            .ok_or(Error::InvalidParameter)?;
        if auction.proceeds_claimed {
            return Err(Error::InvalidParameter);
        }

        let mut escrow = get_bid_escrow(e, auction_id, &winner).ok_or(Error::InvalidParameter)?;
        escrow.claimed = true;
        set_bid_escrow(e, auction_id, &winner, &escrow);

        auction.proceeds_claimed = true;
        if auction.asset_claimed {
            auction.status = AuctionStatus::Settled;
        }
        set_auction(e, &auction);

        let split = settle(
            e,
            &config,
            &auction.pay_token,
            &auction.seller,
            auction.highest_bid,
            0,
        )?;

        ProceedsSettledEventData {
            seller: auction.seller,
            auction_id,
            amount: auction.highest_bid,
            seller_proceeds: split.seller_proceeds,
            sell_fee: split.sell_fee,
        }
        .publish(e);
    } else {
        let mut escrow = get_bid_escrow(e, auction_id, &caller).ok_or(Error::InvalidParameter)?;
        if escrow.claimed || escrow.amount == 0 {
            return Err(Error::InvalidParameter);
        }

        let amount = escrow.amount;
        escrow.claimed = true;
        set_bid_escrow(e, auction_id, &caller, &escrow);

        push_payment(e, &caller, &auction.pay_token, amount)?;

        BidRefundedEventData {
            bidder: caller,
            auction_id,
            amount,
        }
        .publish(e);
    }

    extend_instance_ttl(e);
    Ok(())
}
