use soroban_sdk::contracterror;

/// Error codes for the MarketX hub contract.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    /// Contract has not been initialized
    NotInitialized = 1,
    /// Contract has already been initialized
    AlreadyInitialized = 2,
    /// Initialization with the zero account as admin or treasury
    InvalidInitialization = 3,
    /// Caller lacks the admin role or does not own the record
    Unauthorized = 4,
    /// Zero address, zero amount, or record in the wrong lifecycle state
    InvalidParameter = 5,
    /// Attached or pulled value does not match the amount due
    InsufficientBalance = 6,
    /// Caller is blacklisted
    BlacklistedCaller = 7,
    /// No listing with this ID
    ListingNotFound = 8,
    /// No auction with this ID
    AuctionNotFound = 9,
    /// Bidding window has closed
    AuctionEnded = 10,
    /// Auction is still accepting bids
    AuctionNotEnded = 11,
    /// Bid is below the minimum next bid
    BidTooLow = 12,
    /// Fee or amount arithmetic overflowed
    ArithmeticOverflow = 13,
}
