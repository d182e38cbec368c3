#![no_std]

mod admin;
mod auction;
mod custody;
mod errors;
mod events;
mod listing;
mod settlement;
mod storage;
mod types;

#[cfg(test)]
mod test;

use soroban_sdk::{contract, contractimpl, Address, BytesN, Env};

pub use crate::custody::{MultiToken, MultiTokenClient, NonFungible, NonFungibleClient};
pub use crate::errors::Error;
pub use crate::types::*;

use crate::admin::*;
use crate::events::*;
use crate::storage::*;

// ============================================================================
// Contract
// ============================================================================

/// MarketX NFT Hub
///
/// Custodies single-copy and multi-copy assets for sellers and releases them
/// to a buyer or an auction winner once payment, in the native asset or a
/// fungible token, has been collected. Buy and sell fees go to the treasury.
///
/// Every entry point takes the acting account explicitly and requires its
/// authorization. All storage writes of an operation happen before the hub
/// calls any asset or token contract.
#[contract]
pub struct MarketplaceHub;

#[contractimpl]
impl MarketplaceHub {
    // ========================================================================
    // INITIALIZATION
    // ========================================================================

    /// Initialize the hub. Can only run once.
    ///
    /// # Arguments
    /// * `admin` - Address that will have admin privileges
    /// * `treasury` - Address receiving all fees
    /// * `native_token` - Native asset contract used for native payments
    ///
    /// # Errors
    /// * `Error::AlreadyInitialized` - If the contract has already been initialized
    /// * `Error::InvalidInitialization` - If `admin` or `treasury` is the zero account
    pub fn initialize(
        e: &Env,
        admin: Address,
        treasury: Address,
        native_token: Address,
    ) -> Result<(), Error> {
        admin.require_auth();

        if is_initialized(e) {
            return Err(Error::AlreadyInitialized);
        }

        if is_zero_address(e, &admin) || is_zero_address(e, &treasury) {
            return Err(Error::InvalidInitialization);
        }

        let config = MarketplaceConfig {
            admin: admin.clone(),
            treasury: treasury.clone(),
            native_token,
            buy_fee_bps: 0,
            sell_fee_bps: 0,
            total_active_listings: 0,
            total_active_auctions: 0,
            updated_at: e.ledger().timestamp(),
        };

        set_config(e, &config);
        set_initialized(e);
        extend_instance_ttl(e);

        InitializedEventData { admin, treasury }.publish(e);

        Ok(())
    }

    // ========================================================================
    // ADMINISTRATION
    // ========================================================================

    /// Set the treasury (admin only)
    pub fn set_treasury(e: &Env, admin: Address, treasury: Address) -> Result<(), Error> {
        let mut config = require_admin(e, &admin)?;
        require_non_zero(e, &treasury)?;

        config.treasury = treasury.clone();
        config.updated_at = e.ledger().timestamp();
        set_config(e, &config);

        TreasuryUpdatedEventData { admin, treasury }.publish(e);

        extend_instance_ttl(e);
        Ok(())
    }

    /// Set the buyer-side fee in basis points (admin only)
    ///
    /// # Errors
    /// * `Error::InvalidParameter` - If `new_rate` exceeds 10000
    pub fn set_buy_fee(e: &Env, admin: Address, new_rate: u32) -> Result<(), Error> {
        let mut config = require_admin(e, &admin)?;
        validate_fee_bps(new_rate)?;

        config.buy_fee_bps = new_rate;
        config.updated_at = e.ledger().timestamp();
        set_config(e, &config);

        BuyFeeUpdatedEventData { admin, new_rate }.publish(e);

        extend_instance_ttl(e);
        Ok(())
    }

    /// Set the seller-side fee in basis points (admin only)
    ///
    /// # Errors
    /// * `Error::InvalidParameter` - If `new_rate` exceeds 10000
    pub fn set_sell_fee(e: &Env, admin: Address, new_rate: u32) -> Result<(), Error> {
        let mut config = require_admin(e, &admin)?;
        validate_fee_bps(new_rate)?;

        config.sell_fee_bps = new_rate;
        config.updated_at = e.ledger().timestamp();
        set_config(e, &config);

        SellFeeUpdatedEventData { admin, new_rate }.publish(e);

        extend_instance_ttl(e);
        Ok(())
    }

    /// Blacklist a user (admin only)
    pub fn block_user(e: &Env, admin: Address, user: Address) -> Result<(), Error> {
        require_admin(e, &admin)?;
        require_non_zero(e, &user)?;

        set_blacklisted(e, &user, true);

        UserBlockedEventData { user }.publish(e);

        extend_instance_ttl(e);
        Ok(())
    }

    /// Remove a user from the blacklist (admin only)
    pub fn unblock_user(e: &Env, admin: Address, user: Address) -> Result<(), Error> {
        require_admin(e, &admin)?;
        require_non_zero(e, &user)?;

        set_blacklisted(e, &user, false);

        UserUnblockedEventData { user }.publish(e);

        extend_instance_ttl(e);
        Ok(())
    }

    /// Hand the admin role to `new_admin` (admin only)
    pub fn transfer_admin(e: &Env, admin: Address, new_admin: Address) -> Result<(), Error> {
        let mut config = require_admin(e, &admin)?;
        require_non_zero(e, &new_admin)?;

        config.admin = new_admin.clone();
        config.updated_at = e.ledger().timestamp();
        set_config(e, &config);

        AdminTransferredEventData {
            previous_admin: admin,
            new_admin,
        }
        .publish(e);

        extend_instance_ttl(e);
        Ok(())
    }

    /// Replace the contract code with an uploaded Wasm (admin only).
    ///
    /// Storage, balances and escrow are kept; the new code takes effect
    /// after this invocation.
    pub fn upgrade(e: &Env, admin: Address, new_wasm_hash: BytesN<32>) -> Result<(), Error> {
        require_admin(e, &admin)?;

        ContractUpgradedEventData {
            admin,
            new_wasm_hash: new_wasm_hash.clone(),
        }
        .publish(e);

        extend_instance_ttl(e);
        e.deployer().update_current_contract_wasm(new_wasm_hash);
        Ok(())
    }

    // ========================================================================
    // FIXED-PRICE LISTINGS
    // ========================================================================

    /// List a single-copy asset. The seller must have approved the hub for
    /// `asset_id` beforehand.
    ///
    /// # Returns
    /// * Listing ID if successful
    pub fn list_single(
        e: &Env,
        seller: Address,
        asset: Address,
        asset_id: u64,
        price: i128,
        pay_token: PayToken,
    ) -> Result<u64, Error> {
        listing::create_listing(e, seller, asset, asset_id, AssetKind::Single, price, pay_token)
    }

    /// List `quantity` copies of a multi-copy asset for one lump-sum `price`.
    /// The seller must have approved the hub as operator beforehand.
    pub fn list_multi(
        e: &Env,
        seller: Address,
        asset: Address,
        asset_id: u64,
        price: i128,
        pay_token: PayToken,
        quantity: u64,
    ) -> Result<u64, Error> {
        listing::create_listing(
            e,
            seller,
            asset,
            asset_id,
            AssetKind::Multi(quantity),
            price,
            pay_token,
        )
    }

    /// Cancel a listing and return the asset (seller only)
    pub fn cancel_listing(e: &Env, seller: Address, listing_id: u64) -> Result<(), Error> {
        listing::cancel_listing(e, seller, listing_id)
    }

    /// Buy a listing.
    ///
    /// # Arguments
    /// * `native_value` - Native amount attached to the purchase; must equal
    ///   price plus buy fee for native listings and zero otherwise
    pub fn buy(e: &Env, buyer: Address, listing_id: u64, native_value: i128) -> Result<(), Error> {
        listing::buy(e, buyer, listing_id, native_value)
    }

    // ========================================================================
    // AUCTIONS
    // ========================================================================

    /// Start an auction for a single-copy asset
    ///
    /// # Arguments
    /// * `initial_price` - Minimum first bid
    /// * `min_bid_increment` - Minimum raise over the highest bid
    /// * `end_time` - Ledger timestamp at which bidding closes
    pub fn init_single_auction(
        e: &Env,
        seller: Address,
        asset: Address,
        asset_id: u64,
        initial_price: i128,
        min_bid_increment: i128,
        end_time: u64,
        pay_token: PayToken,
    ) -> Result<u64, Error> {
        auction::create_auction(
            e,
            seller,
            asset,
            asset_id,
            AssetKind::Single,
            initial_price,
            min_bid_increment,
            end_time,
            pay_token,
        )
    }

    /// Start an auction for `quantity` copies of a multi-copy asset
    pub fn init_multi_auction(
        e: &Env,
        seller: Address,
        asset: Address,
        asset_id: u64,
        initial_price: i128,
        min_bid_increment: i128,
        end_time: u64,
        pay_token: PayToken,
        quantity: u64,
    ) -> Result<u64, Error> {
        auction::create_auction(
            e,
            seller,
            asset,
            asset_id,
            AssetKind::Multi(quantity),
            initial_price,
            min_bid_increment,
            end_time,
            pay_token,
        )
    }

    /// Cancel an auction that has no bids (seller only)
    pub fn cancel_auction(e: &Env, seller: Address, auction_id: u64) -> Result<(), Error> {
        auction::cancel_auction(e, seller, auction_id)
    }

    /// Bid on an auction
    ///
    /// # Arguments
    /// * `amount` - Bid amount, at least the value of `get_min_next_bid`
    /// * `native_value` - Must equal `amount` for native auctions and zero otherwise
    pub fn bid(
        e: &Env,
        bidder: Address,
        auction_id: u64,
        amount: i128,
        native_value: i128,
    ) -> Result<(), Error> {
        auction::bid(e, bidder, auction_id, amount, native_value)
    }

    /// Claim the auctioned asset after the deadline (winner, or seller when
    /// there were no bids)
    pub fn claim_nft(e: &Env, caller: Address, auction_id: u64) -> Result<(), Error> {
        auction::claim_nft(e, caller, auction_id)
    }

    /// Claim funds after the deadline: pays out the winning bid when called by
    /// the seller or winner, refunds the caller's escrow otherwise
    pub fn claim_token(e: &Env, caller: Address, auction_id: u64) -> Result<(), Error> {
        auction::claim_token(e, caller, auction_id)
    }

    // ========================================================================
    // VIEWS
    // ========================================================================

    /// Get marketplace configuration
    pub fn get_config(e: &Env) -> Result<MarketplaceConfig, Error> {
        get_config(e).ok_or(Error::NotInitialized)
    }

    pub fn get_admin(e: &Env) -> Result<Address, Error> {
        Ok(get_config(e).ok_or(Error::NotInitialized)?.admin)
    }

    pub fn get_treasury(e: &Env) -> Result<Address, Error> {
        Ok(get_config(e).ok_or(Error::NotInitialized)?.treasury)
    }

    pub fn get_buy_fee(e: &Env) -> Result<u32, Error> {
        Ok(get_config(e).ok_or(Error::NotInitialized)?.buy_fee_bps)
    }

    pub fn get_sell_fee(e: &Env) -> Result<u32, Error> {
        Ok(get_config(e).ok_or(Error::NotInitialized)?.sell_fee_bps)
    }

    pub fn is_blacklisted(e: &Env, user: Address) -> bool {
        is_blacklisted(e, &user)
    }

    /// Fee breakdown for `price` under the current rates
    pub fn quote_fees(e: &Env, price: i128) -> Result<FeeQuote, Error> {
        let config = get_config(e).ok_or(Error::NotInitialized)?;
        if price <= 0 {
            return Err(Error::InvalidParameter);
        }
        quote(&config, price)
    }

    /// Number of listings currently holding an asset in escrow
    pub fn total_active_listings(e: &Env) -> Result<u64, Error> {
        Ok(get_config(e).ok_or(Error::NotInitialized)?.total_active_listings)
    }

    /// Number of auctions currently holding an asset in escrow
    pub fn total_active_auctions(e: &Env) -> Result<u64, Error> {
        Ok(get_config(e).ok_or(Error::NotInitialized)?.total_active_auctions)
    }

    /// Number of listings ever created
    pub fn get_listing_count(e: &Env) -> u64 {
        get_listing_count(e)
    }

    /// Number of auctions ever created
    pub fn get_auction_count(e: &Env) -> u64 {
        get_auction_count(e)
    }

    pub fn get_listing(e: &Env, listing_id: u64) -> Result<Listing, Error> {
        get_listing(e, listing_id).ok_or(Error::ListingNotFound)
    }

    pub fn get_auction(e: &Env, auction_id: u64) -> Result<Auction, Error> {
        get_auction(e, auction_id).ok_or(Error::AuctionNotFound)
    }

    /// Escrow held for `bidder` in an auction; zero and unclaimed if they never bid
    pub fn get_bid_escrow(e: &Env, auction_id: u64, bidder: Address) -> Result<BidEscrow, Error> {
        if get_auction(e, auction_id).is_none() {
            return Err(Error::AuctionNotFound);
        }
        Ok(get_bid_escrow(e, auction_id, &bidder).unwrap_or(BidEscrow {
            amount: 0,
            claimed: false,
        }))
    }

    /// Smallest bid the auction currently accepts
    pub fn get_min_next_bid(e: &Env, auction_id: u64) -> Result<i128, Error> {
        let auction = get_auction(e, auction_id).ok_or(Error::AuctionNotFound)?;
        auction::min_next_bid(&auction)
    }
}
