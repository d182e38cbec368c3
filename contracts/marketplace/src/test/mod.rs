
use crate::{MarketplaceHub, MarketplaceHubClient, PayToken, ZERO_ACCOUNT};
use mocks::multi::{MockMultiToken, MockMultiTokenClient};
use mocks::nft::{MockNft, MockNftClient};
use soroban_sdk::{
    testutils::{Address as _, Ledger},
    token, Address, Env, String,
};

/// One whole unit of a 7-decimal Stellar asset.
pub const ONE: i128 = 10_000_000;

pub const STARTING_BALANCE: i128 = 1_000 * ONE;

pub struct TestSetup {
    pub env: Env,
    pub client: MarketplaceHubClient<'static>,
    pub admin: Address,
    pub treasury: Address,
    pub seller: Address,
    pub buyer: Address,
    pub bidder: Address,
    pub native: token::TokenClient<'static>,
    pub pay: token::TokenClient<'static>,
    pub nft: MockNftClient<'static>,
    pub multi: MockMultiTokenClient<'static>,
}

impl TestSetup {
    pub fn pay_token(&self) -> PayToken {
        PayToken::Token(self.pay.address.clone())
    }

    /// Mint `token_id` to the seller and approve the hub for it.
    pub fn mint_nft(&self, token_id: u64) {
        self.nft.mint(&self.seller, &token_id);
        self.nft.approve(&self.seller, &self.client.address, &token_id);
    }

    /// Mint copies to the seller and make the hub an operator.
    pub fn mint_copies(&self, id: u64, amount: u64) {
        self.multi.mint(&self.seller, &id, &amount);
        self.multi
            .set_approval_for_all(&self.seller, &self.client.address, &true);
    }

    pub fn list_nft(&self, token_id: u64, price: i128, pay_token: &PayToken) -> u64 {
        self.mint_nft(token_id);
        self.client
            .list_single(&self.seller, &self.nft.address, &token_id, &price, pay_token)
    }

    /// Let the hub pull up to `amount` of the payment token from `owner`.
    pub fn approve_payment(&self, owner: &Address, amount: i128) {
        let live_until = self.env.ledger().sequence() + 1_000;
        self.pay
            .approve(owner, &self.client.address, &amount, &live_until);
    }

    pub fn now(&self) -> u64 {
        self.env.ledger().timestamp()
    }
}

pub fn setup_test() -> TestSetup {
    let env = Env::default();
    env.mock_all_auths();

    let contract_id = env.register(MarketplaceHub, ());
    let client = MarketplaceHubClient::new(&env, &contract_id);

    let admin = Address::generate(&env);
    let treasury = Address::generate(&env);
    let seller = Address::generate(&env);
    let buyer = Address::generate(&env);
    let bidder = Address::generate(&env);

    let native_contract = env.register_stellar_asset_contract_v2(Address::generate(&env));
    let native = token::TokenClient::new(&env, &native_contract.address());
    let native_sac = token::StellarAssetClient::new(&env, &native_contract.address());

    let pay_contract = env.register_stellar_asset_contract_v2(Address::generate(&env));
    let pay = token::TokenClient::new(&env, &pay_contract.address());
    let pay_sac = token::StellarAssetClient::new(&env, &pay_contract.address());

    for account in [&seller, &buyer, &bidder] {
        native_sac.mint(account, &STARTING_BALANCE);
        pay_sac.mint(account, &STARTING_BALANCE);
    }

    let nft = MockNftClient::new(&env, &env.register(MockNft, ()));
    let multi = MockMultiTokenClient::new(&env, &env.register(MockMultiToken, ()));

    client.initialize(&admin, &treasury, &native_contract.address());

    TestSetup {
        env,
        client,
        admin,
        treasury,
        seller,
        buyer,
        bidder,
        native,
        pay,
        nft,
        multi,
    }
}

pub fn zero_address(env: &Env) -> Address {
    Address::from_string(&String::from_str(env, ZERO_ACCOUNT))
}

pub fn advance_ledger(env: &Env, seconds: u64) {
    env.ledger().with_mut(|li| {
        li.timestamp += seconds;
        li.sequence_number += 1;
    });
}
