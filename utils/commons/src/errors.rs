use super::*;

/// The custom errors the contract can produce.
#[derive(Serialize, Debug, PartialEq, Eq, Reject, SchemaType)]
pub enum CustomContractError {
    /// Failed parsing the parameter (Error code: -1).
    #[from(ParseError)]
    ParseParams,
    /// Failed logging: Log is full (Error code: -2).
    LogFull,
    /// Failed logging: Log is malformed (Error code: -3).
    LogMalformed,
    /// Failed to invoke a contract (Error code: -4).
    InvokeContractError,
    /// Invoked contract returned an unexpected value (Error code: -5).
    Incompatible,
    /// Arithmetic overflow while pricing a mint (Error code: -6).
    Overflow,
    /// Only account addresses can mint tokens (Error code: -7).
    OnlyAccountAddress,
    /// Mint quantity must be greater than zero (Error code: -8).
    InvalidQuantity,
    /// Reward reserve of the contract cannot cover the airdrop,
    /// "not enough balance to mint" (Error code: -9).
    InsufficientRewardSupply,
    /// Balance or operator allowance of the minter on the payment asset cannot
    /// cover the price, "Insufficient balance" (Error code: -10).
    InsufficientPaymentFunds,
    /// Lot has no extra price set and the quantity would exceed the mint cap,
    /// "cannot mint more" (Error code: -11).
    MintCapExceeded,
    /// Tokens received from a contract that is neither the payment nor the
    /// reward asset (Error code: -12).
    UnsupportedAsset,
    /// Payment and reward token are the same asset (Error code: -13).
    IdenticalAssets,
}

/// Mapping the logging errors to CustomContractError.
impl From<LogError> for CustomContractError {
    fn from(le: LogError) -> Self {
        match le {
            LogError::Full => Self::LogFull,
            LogError::Malformed => Self::LogMalformed,
        }
    }
}

/// Mapping errors related to contract invocations to CustomContractError.
impl<T> From<CallContractError<T>> for CustomContractError {
    fn from(_cce: CallContractError<T>) -> Self {
        Self::InvokeContractError
    }
}

/// Mapping errors of read-only queries to CustomContractError.
impl<R> From<ContractReadError<R>> for CustomContractError {
    fn from(cre: ContractReadError<R>) -> Self {
        match cre {
            ContractReadError::Call(_) => Self::InvokeContractError,
            ContractReadError::Compatibility | ContractReadError::Parse => Self::Incompatible,
        }
    }
}

/// Mapping CustomContractError to ContractError
impl From<CustomContractError> for ContractError {
    fn from(c: CustomContractError) -> Self {
        Cis2Error::Custom(c)
    }
}

/// Failure of a read-only query to another contract.
#[derive(Debug)]
pub enum ContractReadError<R> {
    /// The call itself failed.
    Call(CallContractError<R>),
    /// The contract returned no value.
    Compatibility,
    /// The returned value could not be parsed.
    Parse,
}

#[concordium_cfg_test]
mod tests {
    use super::*;

    #[concordium_test]
    fn test_read_errors_map_to_custom_errors() {
        let call: ContractReadError<()> = ContractReadError::Call(CallContractError::Trap);
        claim_eq!(
            CustomContractError::from(call),
            CustomContractError::InvokeContractError
        );
        claim_eq!(
            CustomContractError::from(ContractReadError::<()>::Parse),
            CustomContractError::Incompatible
        );
        claim_eq!(
            ContractError::from(CustomContractError::MintCapExceeded),
            Cis2Error::Custom(CustomContractError::MintCapExceeded)
        );
    }
}
