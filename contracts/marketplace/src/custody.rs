//! Asset custody adapter.
//!
//! Every call into another contract made by the hub goes through this module:
//! moving single-copy and multi-copy assets in and out of escrow, and pulling
//! or pushing payment in the native asset or a fungible token. Callers must
//! finish their own storage writes before calling in here.

use soroban_sdk::{contractclient, token, Address, Env};

use crate::errors::Error;
use crate::storage::get_config;
use crate::types::{AssetKind, PayToken};

/// Interface of a single-copy asset contract.
#[contractclient(name = "NonFungibleClient")]
pub trait NonFungible {
    fn owner_of(env: Env, token_id: u64) -> Address;
    fn transfer(env: Env, from: Address, to: Address, token_id: u64);
    /// Moves `token_id` on behalf of its owner; `spender` must be approved.
    fn transfer_from(env: Env, spender: Address, from: Address, to: Address, token_id: u64);
}

/// Interface of a multi-copy asset contract.
#[contractclient(name = "MultiTokenClient")]
pub trait MultiToken {
    fn balance_of(env: Env, account: Address, id: u64) -> u64;
    fn transfer(env: Env, from: Address, to: Address, id: u64, amount: u64);
    /// Moves `amount` copies on behalf of `from`; `spender` must be an approved operator.
    fn transfer_from(env: Env, spender: Address, from: Address, to: Address, id: u64, amount: u64);
}

/// Check that `owner` holds the asset quantity about to be escrowed.
pub fn require_holding(
    e: &Env,
    owner: &Address,
    asset: &Address,
    asset_id: u64,
    kind: &AssetKind,
) -> Result<(), Error> {
    let held = match kind {
        AssetKind::Single => NonFungibleClient::new(e, asset).owner_of(&asset_id) == *owner,
        AssetKind::Multi(quantity) => {
            MultiTokenClient::new(e, asset).balance_of(owner, &asset_id) >= *quantity
        }
    };
    if !held {
        return Err(Error::InvalidParameter);
    }
    Ok(())
}

/// Take custody of an asset from its owner. The owner must have approved the hub.
pub fn escrow_asset(e: &Env, owner: &Address, asset: &Address, asset_id: u64, kind: &AssetKind) {
    let hub = e.current_contract_address();
    match kind {
        AssetKind::Single => {
            NonFungibleClient::new(e, asset).transfer_from(&hub, owner, &hub, &asset_id);
        }
        AssetKind::Multi(quantity) => {
            MultiTokenClient::new(e, asset).transfer_from(&hub, owner, &hub, &asset_id, quantity);
        }
    }
}

/// Hand an escrowed asset to `to`.
pub fn release_asset(e: &Env, to: &Address, asset: &Address, asset_id: u64, kind: &AssetKind) {
    let hub = e.current_contract_address();
    match kind {
        AssetKind::Single => {
            NonFungibleClient::new(e, asset).transfer(&hub, to, &asset_id);
        }
        AssetKind::Multi(quantity) => {
            MultiTokenClient::new(e, asset).transfer(&hub, to, &asset_id, quantity);
        }
    }
}

/// Check the value attached to a call against the amount due.
///
/// Native payment must attach exactly `amount`; token payment must attach
/// nothing. There is no change given for overpayment.
pub fn check_attached_value(
    pay_token: &PayToken,
    amount: i128,
    native_value: i128,
) -> Result<(), Error> {
    let expected = match pay_token {
        PayToken::Native => amount,
        PayToken::Token(_) => 0,
    };
    if native_value != expected {
        return Err(Error::InsufficientBalance);
    }
    Ok(())
}

/// Collect `amount` from `payer` into the hub.
///
/// The attached value must already have been checked with
/// [`check_attached_value`].
pub fn pull_payment(
    e: &Env,
    payer: &Address,
    pay_token: &PayToken,
    amount: i128,
) -> Result<(), Error> {
    if amount == 0 {
        return Ok(());
    }
    let hub = e.current_contract_address();
    match pay_token {
        PayToken::Native => {
            let native = native_token(e)?;
            token::Client::new(e, &native).transfer(payer, &hub, &amount);
        }
        PayToken::Token(token_address) => {
            token::Client::new(e, token_address).transfer_from(&hub, payer, &hub, &amount);
        }
    }
    Ok(())
}

/// Send `amount` held by the hub to `to`.
pub fn push_payment(e: &Env, to: &Address, pay_token: &PayToken, amount: i128) -> Result<(), Error> {
    if amount == 0 {
        return Ok(());
    }
    let token_address = match pay_token {
        PayToken::Native => native_token(e)?,
        PayToken::Token(token_address) => token_address.clone(),
    };
    token::Client::new(e, &token_address).transfer(&e.current_contract_address(), to, &amount);
    Ok(())
}

fn native_token(e: &Env) -> Result<Address, Error> {
    Ok(get_config(e).ok_or(Error::NotInitialized)?.native_token)
}
