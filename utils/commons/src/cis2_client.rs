use super::*;

/// Calls to external CIS-2 token contracts holding the payment and reward
/// assets.
pub trait HostCis2Ext<S>: HasHost<S> {
    /// Balance of `address` in the given asset.
    fn cis2_balance_of(
        &self,
        asset: &Cis2Asset,
        address: Address,
    ) -> Result<AssetAmount, ContractReadError<Self::ReturnValueType>> {
        let params = AssetBalanceOfQueryParams {
            queries: vec![BalanceOfQuery {
                token_id: asset.id.clone(),
                address,
            }],
        };

        let mut result = self
            .invoke_contract_read_only(
                &asset.contract,
                &params,
                EntrypointName::new_unchecked("balanceOf"),
                Amount::zero(),
            )
            .map_err(ContractReadError::Call)?
            .ok_or(ContractReadError::Compatibility)?;

        let response =
            AssetBalanceOfQueryResponse::deserial(&mut result).map_err(|_| ContractReadError::Parse)?;

        response.0.first().copied().ok_or(ContractReadError::Parse)
    }

    /// Check whether `address` is an operator of `owner` in the asset contract.
    fn cis2_operator_of(
        &self,
        asset: &Cis2Asset,
        owner: Address,
        address: Address,
    ) -> Result<bool, ContractReadError<Self::ReturnValueType>> {
        let params = OperatorOfQueryParams {
            queries: vec![OperatorOfQuery { owner, address }],
        };

        let mut result = self
            .invoke_contract_read_only(
                &asset.contract,
                &params,
                EntrypointName::new_unchecked("operatorOf"),
                Amount::zero(),
            )
            .map_err(ContractReadError::Call)?
            .ok_or(ContractReadError::Compatibility)?;

        let response =
            OperatorOfQueryResponse::deserial(&mut result).map_err(|_| ContractReadError::Parse)?;

        response.0.first().copied().ok_or(ContractReadError::Parse)
    }

    /// Transfer `amount` of the asset. Requires `from` to be this contract or
    /// to have made this contract its operator.
    fn cis2_transfer(
        &mut self,
        asset: &Cis2Asset,
        from: Address,
        to: Receiver,
        amount: AssetAmount,
    ) -> Result<(), CallContractError<Self::ReturnValueType>> {
        let transfer = Transfer {
            token_id: asset.id.clone(),
            amount,
            from,
            to,
            data: AdditionalData::empty(),
        };

        self.invoke_contract(
            &asset.contract,
            &AssetTransferParameter::from(vec![transfer]),
            EntrypointName::new_unchecked("transfer"),
            Amount::zero(),
        )?;

        Ok(())
    }
}

impl<S, H: HasHost<S>> HostCis2Ext<S> for H {}
