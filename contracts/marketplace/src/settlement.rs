use soroban_sdk::{log, Address, Env};

use crate::admin::calculate_fee;
use crate::custody::push_payment;
use crate::errors::Error;
use crate::types::{MarketplaceConfig, PayToken};

/// How a settled payment was divided.
pub struct Split {
    pub seller_proceeds: i128,
    pub sell_fee: i128,
    pub treasury_total: i128,
}

/// Pay out a sale whose funds are already held by the hub.
///
/// `price` is charged the sell fee at the rate currently in force; the
/// seller receives `price - sell_fee`. `buy_fee` was collected from the
/// buyer on top of the price and goes to the treasury together with the
/// sell fee. Rounding remainders stay with the seller.
pub fn settle(
    e: &Env,
    config: &MarketplaceConfig,
    pay_token: &PayToken,
    seller: &Address,
    price: i128,
    buy_fee: i128,
) -> Result<Split, Error> {
    let sell_fee = calculate_fee(price, config.sell_fee_bps)?;
    let seller_proceeds = price - sell_fee;
    let treasury_total = buy_fee
        .checked_add(sell_fee)
        .ok_or(Error::ArithmeticOverflow)?;

    log!(
        e,
        "settle: price {}, seller {}, treasury {}",
        price,
        seller_proceeds,
        treasury_total
    );

    push_payment(e, seller, pay_token, seller_proceeds)?;
    push_payment(e, &config.treasury, pay_token, treasury_total)?;

    Ok(Split {
        seller_proceeds,
        sell_fee,
        treasury_total,
    })
}
