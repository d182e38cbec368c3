use soroban_sdk::{contracttype, Address};

/// Storage keys for the MarketX hub contract.
#[contracttype]
#[derive(Clone)]
pub enum StorageKey {
    /// Initialization flag
    Initialized,
    /// Marketplace configuration
    Config,
    /// Blacklist membership by address
    Blacklisted(Address),
    /// Listing data by ID
    Listing(u64),
    /// Next listing ID
    ListingCounter,
    /// Auction data by ID
    Auction(u64),
    /// Next auction ID
    AuctionCounter,
    /// Bid escrow by (auction ID, bidder)
    BidEscrow(u64, Address),
}

/// Kind of asset held in escrow.
///
/// `Single` is a one-of-one token moved by ownership transfer. `Multi` carries
/// the number of copies moved by balance transfer.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum AssetKind {
    Single,
    Multi(u64),
}

impl AssetKind {
    pub fn quantity(&self) -> u64 {
        match self {
            AssetKind::Single => 1,
            AssetKind::Multi(quantity) => *quantity,
        }
    }
}

/// How a listing or auction is paid for.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum PayToken {
    /// The network's native asset, attached to the call as `native_value`
    Native,
    /// A fungible token pulled through a prior allowance
    Token(Address),
}

/// Auction lifecycle status.
///
/// Whether bidding is still open is decided by `end_time`, not by status.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum AuctionStatus {
    /// Accepting bids until `end_time`, then claimable
    Active = 0,
    /// Cancelled by the seller before any bid
    Cancelled = 1,
    /// Asset and proceeds have both left escrow
    Settled = 2,
}

/// Fixed-price listing of an escrowed asset quantity
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Listing {
    /// Sequential listing identifier
    pub id: u64,
    /// Asset contract address
    pub asset: Address,
    /// Token ID within the asset contract
    pub asset_id: u64,
    /// Single copy or number of copies
    pub kind: AssetKind,
    /// Lump-sum price for the whole quantity
    pub price: i128,
    /// Payment currency
    pub pay_token: PayToken,
    /// Seller's address
    pub seller: Address,
    /// False once bought or cancelled
    pub is_active: bool,
    /// Creation timestamp
    pub created_at: u64,
}

/// Time-boxed auction of an escrowed asset quantity
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Auction {
    pub id: u64,
    pub asset: Address,
    pub asset_id: u64,
    pub kind: AssetKind,
    /// Minimum amount of the first bid
    pub initial_price: i128,
    /// Minimum raise over the current highest bid
    pub min_bid_increment: i128,
    /// Bids are accepted while `now < end_time`
    pub end_time: u64,
    pub pay_token: PayToken,
    pub seller: Address,
    pub highest_bidder: Option<Address>,
    pub highest_bid: i128,
    pub status: AuctionStatus,
    pub asset_claimed: bool,
    pub proceeds_claimed: bool,
    pub created_at: u64,
}

/// Value held by the hub for one bidder in one auction
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BidEscrow {
    pub amount: i128,
    pub claimed: bool,
}

/// Fee breakdown for a price under the current rates
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FeeQuote {
    pub buy_fee: i128,
    pub sell_fee: i128,
    /// What a buyer pays for a listing at this price
    pub buyer_total: i128,
    pub seller_proceeds: i128,
    pub treasury_total: i128,
}

/// Marketplace configuration
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MarketplaceConfig {
    /// Administrator with access to the setters
    pub admin: Address,
    /// Receives every buy and sell fee
    pub treasury: Address,
    /// Native asset contract used for `PayToken::Native`
    pub native_token: Address,
    /// Buyer-side fee in basis points
    pub buy_fee_bps: u32,
    /// Seller-side fee in basis points
    pub sell_fee_bps: u32,
    /// Listings currently holding an asset in escrow
    pub total_active_listings: u64,
    /// Auctions currently holding an asset in escrow
    pub total_active_auctions: u64,
    /// Timestamp of last configuration update
    pub updated_at: u64,
}

/// Strkey of the all-zero ed25519 account, treated as the null address.
pub const ZERO_ACCOUNT: &str = "GAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAWHF";

/// Maximum basis points for fees
pub const MAX_FEE_BPS: u32 = 10_000; // 100%

/// Number of ledgers in a day (assuming ~5 second block time)
pub const DAY_IN_LEDGERS: u32 = 17280;

/// TTL extension amount for instance storage (30 days)
pub const INSTANCE_TTL_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;

/// TTL threshold before extending instance storage (29 days)
pub const INSTANCE_TTL_THRESHOLD: u32 = INSTANCE_TTL_AMOUNT - DAY_IN_LEDGERS;

/// TTL extension amount for persistent storage (90 days)
pub const PERSISTENT_TTL_AMOUNT: u32 = 90 * DAY_IN_LEDGERS;

/// TTL threshold for persistent storage
pub const PERSISTENT_TTL_THRESHOLD: u32 = PERSISTENT_TTL_AMOUNT - DAY_IN_LEDGERS;
