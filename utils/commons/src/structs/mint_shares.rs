use super::*;

/// Money flow of a single mint call, in asset amounts.
#[derive(SchemaType, Serialize, Eq, PartialEq, Debug, Clone, Copy)]
pub struct MintShares {
    /// Payment asset pulled from the minter.
    pub payment: AssetAmount,
    /// Part of `payment` forwarded to the royalty wallet.
    pub royalty: AssetAmount,
    /// Part of `payment` kept in the treasury.
    pub treasury: AssetAmount,
    /// Reward asset airdropped to the minter.
    pub airdrop: AssetAmount,
}
