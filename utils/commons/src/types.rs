use super::*;

pub type ContractResult<A> = Result<A, ContractError>;

/// Contract token ID type.
/// Lots are numbered by a counter, so a `u32` token ID is enough.
pub type ContractTokenId = TokenIdU32;

/// Contract token amount type.
pub type ContractTokenAmount = TokenAmountU64;

/// Token ID type of the external payment and reward assets. Kept as a vector
/// so any CIS-2 token ID can be addressed.
pub type AssetTokenId = TokenIdVec;

/// Amount of an external asset, a fixed-point number with
/// [`ASSET_DECIMALS`](crate::ASSET_DECIMALS) decimals.
pub type AssetAmount = TokenAmountU128;

/// Wrapping the custom errors in a type with CIS2 errors.
pub type ContractError = Cis2Error<CustomContractError>;

pub type TransferParameter = TransferParams<ContractTokenId, ContractTokenAmount>;

pub type AssetTransferParameter = TransferParams<AssetTokenId, AssetAmount>;

/// Parameter type for the CIS-2 function `balanceOf` specialized to the subset
/// of TokenIDs used by this contract.
pub type ContractBalanceOfQueryParams = BalanceOfQueryParams<ContractTokenId>;

/// Response type for the CIS-2 function `balanceOf` specialized to the subset
/// of TokenAmounts used by this contract.
pub type ContractBalanceOfQueryResponse = BalanceOfQueryResponse<ContractTokenAmount>;

/// `balanceOf` query sent to an external asset contract.
pub type AssetBalanceOfQueryParams = BalanceOfQueryParams<AssetTokenId>;

/// `balanceOf` response of an external asset contract.
pub type AssetBalanceOfQueryResponse = BalanceOfQueryResponse<AssetAmount>;

/// Parameter type for the CIS-2 function `tokenMetadata`.
pub type ContractTokenMetadataQueryParams = TokenMetadataQueryParams<ContractTokenId>;
