use soroban_sdk::{contractevent, Address, BytesN};

use crate::types::PayToken;

/// Event emitted when the hub is initialized
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InitializedEventData {
    #[topic]
    pub admin: Address,
    pub treasury: Address,
}

/// Event emitted when the treasury changes
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TreasuryUpdatedEventData {
    #[topic]
    pub admin: Address,
    pub treasury: Address,
}

/// Event emitted when the buy fee rate changes
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BuyFeeUpdatedEventData {
    #[topic]
    pub admin: Address,
    pub new_rate: u32,
}

/// Event emitted when the sell fee rate changes
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SellFeeUpdatedEventData {
    #[topic]
    pub admin: Address,
    pub new_rate: u32,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UserBlockedEventData {
    #[topic]
    pub user: Address,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UserUnblockedEventData {
    #[topic]
    pub user: Address,
}

/// Event emitted when the contract code is replaced
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ContractUpgradedEventData {
    #[topic]
    pub admin: Address,
    pub new_wasm_hash: BytesN<32>,
}

/// Event emitted when the admin role moves to a new address
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AdminTransferredEventData {
    #[topic]
    pub previous_admin: Address,
    #[topic]
    pub new_admin: Address,
}

/// Event emitted when an asset is listed at a fixed price
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ListingCreatedEventData {
    #[topic]
    pub seller: Address,
    #[topic]
    pub listing_id: u64,
    pub asset: Address,
    pub asset_id: u64,
    pub quantity: u64,
    pub price: i128,
    pub pay_token: PayToken,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ListingCancelledEventData {
    #[topic]
    pub seller: Address,
    #[topic]
    pub listing_id: u64,
}

/// Event emitted when a listing is bought
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ListingSoldEventData {
    #[topic]
    pub buyer: Address,
    #[topic]
    pub listing_id: u64,
    pub seller: Address,
    pub price: i128,
    pub buy_fee: i128,
    pub seller_proceeds: i128,
    pub treasury_total: i128,
}

/// Event emitted when an auction is created
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuctionCreatedEventData {
    #[topic]
    pub seller: Address,
    #[topic]
    pub auction_id: u64,
    pub asset: Address,
    pub asset_id: u64,
    pub quantity: u64,
    pub initial_price: i128,
    pub end_time: u64,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuctionCancelledEventData {
    #[topic]
    pub seller: Address,
    #[topic]
    pub auction_id: u64,
}

/// Event emitted when a bid becomes the highest bid
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BidPlacedEventData {
    #[topic]
    pub bidder: Address,
    #[topic]
    pub auction_id: u64,
    pub amount: i128,
}

/// Event emitted when the auctioned asset leaves escrow
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AssetClaimedEventData {
    #[topic]
    pub recipient: Address,
    #[topic]
    pub auction_id: u64,
}

/// Event emitted when the winning bid is paid out to seller and treasury
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProceedsSettledEventData {
    #[topic]
    pub seller: Address,
    #[topic]
    pub auction_id: u64,
    pub amount: i128,
    pub seller_proceeds: i128,
    pub sell_fee: i128,
}

/// Event emitted when an outbid bidder takes their escrow back
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BidRefundedEventData {
    #[topic]
    pub bidder: Address,
    #[topic]
    pub auction_id: u64,
    pub amount: i128,
}
