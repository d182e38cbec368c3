use soroban_sdk::{Address, Env};

use crate::types::{
    Auction, BidEscrow, Listing, MarketplaceConfig, StorageKey, INSTANCE_TTL_AMOUNT,
    INSTANCE_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT, PERSISTENT_TTL_THRESHOLD,
};

// ============================================================================
// INITIALIZATION STORAGE
// ============================================================================

/// Check if contract is initialized
pub fn is_initialized(e: &Env) -> bool {
    e.storage()
        .instance()
        .get::<_, bool>(&StorageKey::Initialized)
        .unwrap_or(false)
}

/// Mark contract as initialized
pub fn set_initialized(e: &Env) {
    e.storage()
        .instance()
        .set(&StorageKey::Initialized, &true);
}

/// Extend the TTL of instance storage.
pub fn extend_instance_ttl(e: &Env) {
    e.storage()
        .instance()
        .extend_ttl(INSTANCE_TTL_THRESHOLD, INSTANCE_TTL_AMOUNT);
}

// ============================================================================
// CONFIG STORAGE
// ============================================================================

/// Get marketplace configuration
pub fn get_config(e: &Env) -> Option<MarketplaceConfig> {
    let key = StorageKey::Config;
    let config = e.storage().persistent().get::<_, MarketplaceConfig>(&key);
    if config.is_some() {
        e.storage()
            .persistent()
            .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
    }
    config
}

/// Set marketplace configuration
pub fn set_config(e: &Env, config: &MarketplaceConfig) {
    let key = StorageKey::Config;
    e.storage().persistent().set(&key, config);
    e.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
}

// ============================================================================
// BLACKLIST STORAGE
// ============================================================================

pub fn is_blacklisted(e: &Env, user: &Address) -> bool {
    e.storage()
        .persistent()
        .get::<_, bool>(&StorageKey::Blacklisted(user.clone()))
        .unwrap_or(false)
}

pub fn set_blacklisted(e: &Env, user: &Address, blocked: bool) {
    let key = StorageKey::Blacklisted(user.clone());
    if blocked {
        e.storage().persistent().set(&key, &true);
        e.storage()
            .persistent()
            .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
    } else {
        e.storage().persistent().remove(&key);
    }
}

// ============================================================================
// LISTING STORAGE
// ============================================================================

/// Get listing by ID
pub fn get_listing(e: &Env, listing_id: u64) -> Option<Listing> {
    let key = StorageKey::Listing(listing_id);
    let listing = e.storage().persistent().get::<_, Listing>(&key);
    if listing.is_some() {
        e.storage()
            .persistent()
            .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
    }
    listing
}

/// Set listing
pub fn set_listing(e: &Env, listing: &Listing) {
    let key = StorageKey::Listing(listing.id);
    e.storage().persistent().set(&key, listing);
    e.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
}

/// Number of listings ever created, which is also the next listing ID
pub fn get_listing_count(e: &Env) -> u64 {
    e.storage()
        .persistent()
        .get::<_, u64>(&StorageKey::ListingCounter)
        .unwrap_or(0)
}

/// Reserve the next listing ID
pub fn next_listing_id(e: &Env) -> u64 {
    let key = StorageKey::ListingCounter;
    let id = get_listing_count(e);
    e.storage().persistent().set(&key, &(id + 1));
    e.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
    id
}

// ============================================================================
// AUCTION STORAGE
// ============================================================================

/// Get auction by ID
pub fn get_auction(e: &Env, auction_id: u64) -> Option<Auction> {
    let key = StorageKey::Auction(auction_id);
    let auction = e.storage().persistent().get::<_, Auction>(&key);
    if auction.is_some() {
        e.storage()
            .persistent()
            .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
    }
    auction
}

/// Set auction
pub fn set_auction(e: &Env, auction: &Auction) {
    let key = StorageKey::Auction(auction.id);
    e.storage().persistent().set(&key, auction);
    e.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
}

/// Number of auctions ever created, which is also the next auction ID
pub fn get_auction_count(e: &Env) -> u64 {
    e.storage()
        .persistent()
        .get::<_, u64>(&StorageKey::AuctionCounter)
        .unwrap_or(0)
}

/// Reserve the next auction ID
pub fn next_auction_id(e: &Env) -> u64 {
    let key = StorageKey::AuctionCounter;
    let id = get_auction_count(e);
    e.storage().persistent().set(&key, &(id + 1));
    e.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
    id
}

// ============================================================================
// BID ESCROW STORAGE
// ============================================================================

/// Get a bidder's escrow for an auction, if they ever bid
pub fn get_bid_escrow(e: &Env, auction_id: u64, bidder: &Address) -> Option<BidEscrow> {
    let key = StorageKey::BidEscrow(auction_id, bidder.clone());
    let escrow = e.storage().persistent().get::<_, BidEscrow>(&key);
    if escrow.is_some() {
        e.storage()
            .persistent()
            .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
    }
    escrow
}

pub fn set_bid_escrow(e: &Env, auction_id: u64, bidder: &Address, escrow: &BidEscrow) {
    let key = StorageKey::BidEscrow(auction_id, bidder.clone());
    e.storage().persistent().set(&key, escrow);
    e.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
}
