//! Fee & access policy: administrator checks, blacklist and fee math.

use soroban_sdk::{Address, Env, String};

use crate::errors::Error;
use crate::storage::{get_config, is_blacklisted};
use crate::types::{FeeQuote, MarketplaceConfig, MAX_FEE_BPS, ZERO_ACCOUNT};

/// Load the configuration and check that `admin` holds the admin role.
///
/// Authorization is required from `admin` before the role comparison, so an
/// unauthenticated caller cannot probe who the admin is.
pub fn require_admin(e: &Env, admin: &Address) -> Result<MarketplaceConfig, Error> {
    admin.require_auth();
    let config = get_config(e).ok_or(Error::NotInitialized)?;
    if *admin != config.admin {
        return Err(Error::Unauthorized);
    }
    Ok(config)
}

pub fn require_not_blacklisted(e: &Env, user: &Address) -> Result<(), Error> {
    if is_blacklisted(e, user) {
        return Err(Error::BlacklistedCaller);
    }
    Ok(())
}

pub fn is_zero_address(e: &Env, addr: &Address) -> bool {
    *addr == Address::from_string(&String::from_str(e, ZERO_ACCOUNT))
}

pub fn require_non_zero(e: &Env, addr: &Address) -> Result<(), Error> {
    if is_zero_address(e, addr) {
        return Err(Error::InvalidParameter);
    }
    Ok(())
}

pub fn validate_fee_bps(bps: u32) -> Result<(), Error> {
    if bps > MAX_FEE_BPS {
        return Err(Error::InvalidParameter);
    }
    Ok(())
}

/// Fee on `amount` at `bps`, rounded toward zero.
pub fn calculate_fee(amount: i128, bps: u32) -> Result<i128, Error> {
    amount
        .checked_mul(bps as i128)
        .ok_or(Error::ArithmeticOverflow)?
        .checked_div(MAX_FEE_BPS as i128)
        .ok_or(Error::ArithmeticOverflow)
}

/// Full breakdown of what every party pays or receives for `price`.
pub fn quote(config: &MarketplaceConfig, price: i128) -> Result<FeeQuote, Error> {
    let buy_fee = calculate_fee(price, config.buy_fee_bps)?;
    let sell_fee = calculate_fee(price, config.sell_fee_bps)?;

    Ok(FeeQuote {
        buy_fee,
        sell_fee,
        buyer_total: price.checked_add(buy_fee).ok_or(Error::ArithmeticOverflow)?,
        seller_proceeds: price - sell_fee,
        treasury_total: buy_fee.checked_add(sell_fee).ok_or(Error::ArithmeticOverflow)?,
    })
}
