use super::*;

/// Sale data of a single lot.
#[derive(Debug, Serialize, SchemaType, Clone, Copy, PartialEq, Eq)]
pub struct LotInfo {
    /// Tokens of the lot minted so far.
    pub supply: ContractTokenAmount,
    /// Tokens minted while no extra price was set, counted against
    /// `MAX_MINT_WITHOUT_EXTRA_INFO`.
    pub capped_minted: ContractTokenAmount,
    /// Price per token overriding the base price.
    pub extra_price: Option<AssetAmount>,
}

/// The state for each address.
#[derive(Serial, DeserialWithState, Deletable)]
#[concordium(state_parameter = "S")]
pub struct AddressState<S: HasStateApi> {
    /// Number of tokens owned per lot.
    pub balances: StateMap<ContractTokenId, ContractTokenAmount, S>,
    /// The address which are currently enabled as operators for this address.
    pub operators: StateSet<Address, S>,
}

/// The contract state.
#[derive(Serial, DeserialWithState)]
#[concordium(state_parameter = "S")]
pub struct State<S: HasStateApi> {
    /// Name of the collection.
    pub name: String,
    /// Base URL of the token metadata.
    pub uri: String,
    /// Asset buyers pay with.
    pub payment_token: Cis2Asset,
    /// Asset airdropped to buyers.
    pub reward_token: Cis2Asset,
    /// Account receiving the royalty of every sale.
    pub royalty_wallet: AccountAddress,
    /// Royalty share of every sale.
    pub royalty: Percentage,
    /// Price per token of lots without an extra price.
    pub base_price: AssetAmount,
    /// Reward airdropped per minted token.
    pub airdrop_rate: AssetAmount,
    /// Current lot. Grows by one with every mint.
    pub token_id: ContractTokenId,
    /// Payment asset kept for the contract owner.
    pub treasury: AssetAmount,
    /// Sale data per lot.
    pub lots: StateMap<ContractTokenId, LotInfo, S>,
    /// The state for each address.
    pub holders: StateMap<Address, AddressState<S>, S>,
}

#[derive(Serialize, SchemaType)]
pub struct InitParams {
    /// Name of the collection.
    pub name: String,
    /// Base URL of the token metadata.
    pub uri: String,
    /// Asset buyers pay with.
    pub payment_token: Cis2Asset,
    /// Account receiving the royalty of every sale.
    pub royalty_wallet: AccountAddress,
    /// Asset airdropped to buyers.
    pub reward_token: Cis2Asset,
    /// Price per token of lots without an extra price.
    pub base_price: AssetAmount,
    /// Reward airdropped per minted token.
    pub airdrop_rate: AssetAmount,
}

/// The parameter for the contract function `mint`.
#[derive(Serialize, SchemaType, Clone, Copy)]
pub struct MintParams {
    /// Lot to mint from. Must not be ahead of the current lot.
    pub token_id: ContractTokenId,
    /// Number of tokens to mint.
    pub quantity: ContractTokenAmount,
}

/// The parameter for the contract function `setExtraInfo`.
#[derive(Serialize, SchemaType, Clone, Copy)]
pub struct SetExtraInfoParams {
    pub token_id: ContractTokenId,
    /// New price per token of the lot.
    pub price: AssetAmount,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq, SchemaType)]
pub enum UpdateInternalValueParams {
    Uri(String),
    RoyaltyWallet(AccountAddress),
    BasePrice(AssetAmount),
    AirdropRate(AssetAmount),
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, SchemaType)]
pub enum ViewInternalValueParams {
    Uri,
    RoyaltyWallet,
    Royalty,
    BasePrice,
    AirdropRate,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq, SchemaType)]
pub enum ViewInternalValueResult {
    Uri(String),
    RoyaltyWallet(AccountAddress),
    Royalty(Percentage),
    BasePrice(AssetAmount),
    AirdropRate(AssetAmount),
}

/// Sale configuration together with its running totals.
#[derive(Debug, Serialize, SchemaType, PartialEq, Eq)]
pub struct ViewSale {
    pub name: String,
    pub uri: String,
    pub payment_token: Cis2Asset,
    pub reward_token: Cis2Asset,
    pub royalty_wallet: AccountAddress,
    pub royalty: Percentage,
    pub base_price: AssetAmount,
    pub airdrop_rate: AssetAmount,
    pub token_id: ContractTokenId,
    pub treasury: AssetAmount,
}
