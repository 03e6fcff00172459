use super::*;

/// Initialize the sale with no lots sold.
///
/// It rejects if:
/// - Fails to parse parameter.
/// - The payment and the reward token are the same asset.
#[init(contract = "GallNft", parameter = "InitParams")]
fn init<S: HasStateApi>(
    ctx: &impl HasInitContext,
    state_builder: &mut StateBuilder<S>,
) -> InitResult<State<S>> {
    // Parse the parameter.
    let params: InitParams = ctx.parameter_cursor().get()?;

    // Reward reserve and proceeds must not share a balance.
    ensure!(
        params.payment_token != params.reward_token,
        CustomContractError::IdenticalAssets.into()
    );

    // Construct the initial contract state.
    Ok(State::new(state_builder, params))
}

/// Mint tokens of a lot to the sender, who pays for them with the payment
/// asset and receives the reward asset.
///
/// Out of the payment, the royalty share is forwarded to the royalty wallet
/// and the rest is kept in the treasury. The current lot moves on by one.
/// Logs a `Mint` event, a `TokenMetadata` event for the first tokens of a lot
/// and a `Sale` event.
///
/// It rejects if:
/// - Fails to parse parameter.
/// - The sender is a contract.
/// - The quantity is zero.
/// - The lot is ahead of the current lot.
/// - The reward reserve of this contract cannot cover the airdrop.
/// - The sender has not made this contract an operator in the payment token
///   contract or cannot cover the price.
/// - The lot has no extra price and the mint cap would be exceeded.
/// - Any of the asset transfers fails.
/// - Fails to log events.
#[receive(
    contract = "GallNft",
    name = "mint",
    parameter = "MintParams",
    mutable,
    enable_logger
)]
fn mint<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &mut impl HasHost<State<S>, StateApiType = S>,
    logger: &mut impl HasLogger,
) -> ContractResult<()> {
    // Parse the parameter.
    let MintParams { token_id, quantity } = ctx.parameter_cursor().get()?;

    let buyer = match ctx.sender() {
        Address::Account(account) => account,
        Address::Contract(_) => bail!(CustomContractError::OnlyAccountAddress.into()),
    };
    ensure!(quantity.0 > 0, CustomContractError::InvalidQuantity.into());

    let self_address = Address::Contract(ctx.self_address());
    let state = host.state();
    state.ensure_mintable_lot(&token_id)?;

    let shares = calc_mint_shares(
        state.effective_price(&token_id),
        state.airdrop_rate,
        quantity,
        state.royalty,
    )
    .ok_or(CustomContractError::Overflow)?;
    let payment_token = state.payment_token.clone();
    let reward_token = state.reward_token.clone();
    let royalty_wallet = state.royalty_wallet;
    let uri = state.uri.clone();

    let reserve = host
        .cis2_balance_of(&reward_token, self_address)
        .map_err(CustomContractError::from)?;
    ensure!(
        reserve.0 >= shares.airdrop.0,
        CustomContractError::InsufficientRewardSupply.into()
    );

    if shares.payment.0 > 0 {
        let approved = host
            .cis2_operator_of(&payment_token, Address::Account(buyer), self_address)
            .map_err(CustomContractError::from)?;
        let balance = host
            .cis2_balance_of(&payment_token, Address::Account(buyer))
            .map_err(CustomContractError::from)?;
        ensure!(
            approved && balance.0 >= shares.payment.0,
            CustomContractError::InsufficientPaymentFunds.into()
        );
    }

    host.state().ensure_mint_cap(&token_id, quantity)?;

    let (state, state_builder) = host.state_and_builder();
    let first_mint = state.record_mint(
        &Address::Account(buyer),
        &token_id,
        quantity,
        shares.treasury,
        state_builder,
    )?;

    if shares.payment.0 > 0 {
        host.cis2_transfer(
            &payment_token,
            Address::Account(buyer),
            Receiver::from_contract(
                ctx.self_address(),
                OwnedEntrypointName::new_unchecked(ON_RECEIVING_CIS2.into()),
            ),
            shares.payment,
        )?;
    }

    if shares.royalty.0 > 0 {
        host.cis2_transfer(
            &payment_token,
            self_address,
            Receiver::from_account(royalty_wallet),
            shares.royalty,
        )?;
    }

    if shares.airdrop.0 > 0 {
        host.cis2_transfer(
            &reward_token,
            self_address,
            Receiver::from_account(buyer),
            shares.airdrop,
        )?;
    }

    // Event for minted NFT.
    logger.log(&Cis2Event::Mint(MintEvent {
        token_id,
        amount: quantity,
        owner: Address::Account(buyer),
    }))?;

    // Metadata URL for the NFT.
    if first_mint {
        logger.log(&token_metadata_event(&uri, token_id))?;
    }

    logger.log(&CustomEvent::Sale(SaleEvent {
        buyer,
        token_id,
        quantity,
        payment: shares.payment,
        royalty: shares.royalty,
        airdrop: shares.airdrop,
    }))?;

    Ok(())
}

/// Set the price per token of a lot, replacing the base price for it and
/// lifting its mint cap. Can only be called by the contract owner.
/// Logs an `ExtraInfo` event.
///
/// It rejects if:
/// - The sender is not the contract owner.
/// - Fails to parse parameter.
/// - Fails to log event.
#[receive(
    contract = "GallNft",
    name = "setExtraInfo",
    parameter = "SetExtraInfoParams",
    mutable,
    enable_logger
)]
fn set_extra_info<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &mut impl HasHost<State<S>, StateApiType = S>,
    logger: &mut impl HasLogger,
) -> ContractResult<()> {
    ensure!(
        ctx.sender().matches_account(&ctx.owner()),
        ContractError::Unauthorized
    );

    // Parse the parameter.
    let params: SetExtraInfoParams = ctx.parameter_cursor().get()?;

    let from = host
        .state_mut()
        .set_extra_info(&params.token_id, params.price);

    logger.log(&CustomEvent::ExtraInfo(ExtraInfoEvent {
        token_id: params.token_id,
        from,
        to: params.price,
    }))?;

    Ok(())
}

/// Send the whole payment asset balance of this contract to the contract
/// owner, sale proceeds and direct deposits alike, and reset the treasury.
/// Logs a `Withdraw` event. An empty balance is left as is.
///
/// It rejects if:
/// - The sender is not the contract owner.
/// - The balance query or the transfer of the payment asset fails.
/// - Fails to log event.
#[receive(contract = "GallNft", name = "withdraw", mutable, enable_logger)]
fn withdraw<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &mut impl HasHost<State<S>, StateApiType = S>,
    logger: &mut impl HasLogger,
) -> ContractResult<()> {
    let owner = ctx.owner();
    ensure!(
        ctx.sender().matches_account(&owner),
        ContractError::Unauthorized
    );

    let self_address = Address::Contract(ctx.self_address());
    let payment_token = host.state().payment_token.clone();
    let amount = host
        .cis2_balance_of(&payment_token, self_address)
        .map_err(CustomContractError::from)?;

    host.state_mut().take_treasury();
    if amount.0 == 0 {
        return Ok(());
    }

    host.cis2_transfer(
        &payment_token,
        self_address,
        Receiver::from_account(owner),
        amount,
    )?;

    logger.log(&CustomEvent::Withdraw(WithdrawEvent { owner, amount }))?;

    Ok(())
}

/// Execute a list of token transfers, in the order of the list.
///
/// Logs a `Transfer` event for each transfer in the list.
/// Produces an action which sends a message to each contract which are the
/// receiver of a transfer.
///
/// It rejects if:
/// - It fails to parse the parameter.
/// - Any of the transfers fail to be executed, which could be if:
///     - The `token_id` does not exist.
///     - The sender is not the owner of the token, or an operator for this
///       specific `token_id` and `from` address.
///     - The token is not owned by the `from`.
/// - Fails to log event.
/// - Any of the messages sent to contracts receiving a transfer choose to
///   reject.
#[receive(
    contract = "GallNft",
    name = "transfer",
    parameter = "TransferParameter",
    mutable,
    enable_logger
)]
fn transfer<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &mut impl HasHost<State<S>, StateApiType = S>,
    logger: &mut impl HasLogger,
) -> ContractResult<()> {
    // Parse the parameter.
    let TransferParams(transfers): TransferParameter = ctx.parameter_cursor().get()?;
    // Get the sender who invoked this contract function.
    let sender = ctx.sender();

    for transfer in transfers {
        let (state, state_builder) = host.state_and_builder();
        // Authenticate the sender for this transfer
        ensure!(
            transfer.from == sender || state.is_operator(&transfer.from, &sender),
            ContractError::Unauthorized
        );

        let to_address = transfer.to.address();
        // Update the contract state
        state.transfer(&transfer, state_builder)?;

        // Log transfer event
        logger.log(&Cis2Event::Transfer(TransferEvent {
            token_id: transfer.token_id,
            amount: transfer.amount,
            from: transfer.from,
            to: to_address,
        }))?;

        // If the receiver is a contract, we add sending it a message to the list of
        // actions.
        if let Receiver::Contract(address, entrypoint_name) = transfer.to {
            let parameter = OnReceivingCis2Params {
                token_id: transfer.token_id,
                amount: transfer.amount,
                from: transfer.from,
                data: transfer.data,
            };

            host.invoke_contract(
                &address,
                &parameter,
                entrypoint_name.as_entrypoint_name(),
                Amount::zero(),
            )?;
        }
    }
    Ok(())
}

/// Enable or disable addresses as operators of the sender address.
/// Logs an `UpdateOperator` event.
///
/// It rejects if:
/// - It fails to parse the parameter.
/// - Fails to log event.
#[receive(
    contract = "GallNft",
    name = "updateOperator",
    parameter = "UpdateOperatorParams",
    mutable,
    enable_logger
)]
fn update_operator<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &mut impl HasHost<State<S>, StateApiType = S>,
    logger: &mut impl HasLogger,
) -> ContractResult<()> {
    // Parse the parameter.
    let UpdateOperatorParams(params) = ctx.parameter_cursor().get()?;
    // Get the sender who invoked this contract function.
    let sender = ctx.sender();

    let (state, state_builder) = host.state_and_builder();
    for param in params {
        // Update the operator in the state.
        match param.update {
            OperatorUpdate::Add => state.add_operator(&sender, &param.operator, state_builder),
            OperatorUpdate::Remove => state.remove_operator(&sender, &param.operator),
        }

        // Log the appropriate event
        logger.log(
            &Cis2Event::<ContractTokenId, ContractTokenAmount>::UpdateOperator(
                UpdateOperatorEvent {
                    owner: sender,
                    operator: param.operator,
                    update: param.update,
                },
            ),
        )?;
    }

    Ok(())
}

/// Takes a list of queries. Each query is an owner address and some address to
/// check as an operator of the owner address.
///
/// It rejects if:
/// - It fails to parse the parameter.
#[receive(
    contract = "GallNft",
    name = "operatorOf",
    parameter = "OperatorOfQueryParams",
    return_value = "OperatorOfQueryResponse"
)]
fn operator_of<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<OperatorOfQueryResponse> {
    // Parse the parameter.
    let params: OperatorOfQueryParams = ctx.parameter_cursor().get()?;
    // Build the response.
    let state = host.state();
    let response: Vec<bool> = params
        .queries
        .iter()
        .map(|query| state.is_operator(&query.owner, &query.address))
        .collect();

    Ok(OperatorOfQueryResponse::from(response))
}

/// Get the balance of given token IDs and addresses.
///
/// It rejects if:
/// - It fails to parse the parameter.
/// - Any of the queried `token_id` does not exist.
#[receive(
    contract = "GallNft",
    name = "balanceOf",
    parameter = "ContractBalanceOfQueryParams",
    return_value = "ContractBalanceOfQueryResponse"
)]
fn balance_of<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<ContractBalanceOfQueryResponse> {
    // Parse the parameter.
    let params: ContractBalanceOfQueryParams = ctx.parameter_cursor().get()?;
    // Build the response.
    let mut response = Vec::with_capacity(params.queries.len());
    let state = host.state();
    for query in params.queries {
        // Query the state for balance.
        let amount = state.balance(&query.token_id, &query.address)?;
        response.push(amount);
    }

    Ok(ContractBalanceOfQueryResponse::from(response))
}

/// Get the token metadata URLs of a list of token IDs.
/// The URL is the token ID encoded as hex appended to the collection URI.
///
/// It rejects if:
/// - It fails to parse the parameter.
/// - Any of the queried `token_id` does not exist.
#[receive(
    contract = "GallNft",
    name = "tokenMetadata",
    parameter = "ContractTokenMetadataQueryParams",
    return_value = "TokenMetadataQueryResponse"
)]
fn token_metadata<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<TokenMetadataQueryResponse> {
    // Parse the parameter.
    let params: ContractTokenMetadataQueryParams = ctx.parameter_cursor().get()?;
    // Build the response.
    let mut response = Vec::with_capacity(params.queries.len());
    let state = host.state();
    for token_id in params.queries {
        ensure!(state.contains_token(&token_id), ContractError::InvalidTokenId);

        response.push(MetadataUrl {
            url: build_token_metadata_url(&state.uri, &token_id),
            hash: None,
        });
    }

    Ok(TokenMetadataQueryResponse::from(response))
}

/// Get the supported standards or addresses for a implementation given list
/// of standard identifiers.
///
/// It rejects if:
/// - It fails to parse the parameter.
#[receive(
    contract = "GallNft",
    name = "supports",
    parameter = "SupportsQueryParams",
    return_value = "SupportsQueryResponse"
)]
fn supports<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    _host: &impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<SupportsQueryResponse> {
    // Parse the parameter.
    let params: SupportsQueryParams = ctx.parameter_cursor().get()?;

    // Build the response.
    let mut response = Vec::with_capacity(params.queries.len());
    for std_id in params.queries {
        if SUPPORTS_STANDARDS.contains(&std_id.as_standard_identifier()) {
            response.push(SupportResult::Support);
        } else {
            response.push(SupportResult::NoSupport);
        }
    }

    Ok(SupportsQueryResponse::from(response))
}

/// Accept payment and reward tokens sent to this contract.
///
/// It rejects if:
/// - The sender is neither the payment nor the reward token contract.
/// - It fails to parse the parameter.
#[receive(
    contract = "GallNft",
    name = "onReceivingCIS2",
    parameter = "OnReceivingCis2Params<AssetTokenId, AssetAmount>"
)]
fn on_receiving_cis2<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<()> {
    let state = host.state();
    let sender = ctx.sender();
    ensure!(
        state.payment_token.is_issued_by(&sender) || state.reward_token.is_issued_by(&sender),
        CustomContractError::UnsupportedAsset.into()
    );

    let _params: OnReceivingCis2Params<AssetTokenId, AssetAmount> =
        ctx.parameter_cursor().get()?;

    Ok(())
}

/// Function to update internal values. This includes:
/// - Uri. Base URL of the token metadata.
/// - RoyaltyWallet. Account that receives the royalty of every sale.
/// - BasePrice. Price per token of lots without an extra price.
/// - AirdropRate. Reward airdropped per minted token.
///
///  It rejects if:
///  - The sender is not the contract owner.
///  - Fails to parse `UpdateInternalValueParams` parameters.
#[receive(
    mutable,
    contract = "GallNft",
    name = "updateInternalValue",
    parameter = "UpdateInternalValueParams"
)]
fn update_internal_value<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &mut impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<()> {
    if !ctx.sender().matches_account(&ctx.owner()) {
        return Err(ContractError::Unauthorized);
    }

    let params = UpdateInternalValueParams::deserial(&mut ctx.parameter_cursor())?;
    host.state_mut().update_internal_value(params);

    Ok(())
}

#[receive(
    contract = "GallNft",
    name = "viewInternalValue",
    parameter = "ViewInternalValueParams",
    return_value = "ViewInternalValueResult"
)]
fn view_internal_value<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<ViewInternalValueResult> {
    let params = ViewInternalValueParams::deserial(&mut ctx.parameter_cursor())?;
    Ok(host.state().view_internal_value(params))
}

/// View the current lot.
#[receive(contract = "GallNft", name = "tokenId", return_value = "ContractTokenId")]
fn view_token_id<S: HasStateApi>(
    _ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<ContractTokenId> {
    Ok(host.state().token_id)
}

/// View the price per token a lot is currently sold at.
#[receive(
    contract = "GallNft",
    name = "effectivePrice",
    parameter = "ContractTokenId",
    return_value = "AssetAmount"
)]
fn effective_price<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<AssetAmount> {
    let token_id: ContractTokenId = ctx.parameter_cursor().get()?;
    Ok(host.state().effective_price(&token_id))
}

/// View the sale data of a lot.
///
/// It rejects if:
/// - It fails to parse the parameter.
/// - The lot has neither been minted from nor given an extra price.
#[receive(
    contract = "GallNft",
    name = "viewLot",
    parameter = "ContractTokenId",
    return_value = "LotInfo"
)]
fn view_lot<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<LotInfo> {
    let token_id: ContractTokenId = ctx.parameter_cursor().get()?;
    let lot = host
        .state()
        .lots
        .get(&token_id)
        .map(|lot| *lot)
        .ok_or(ContractError::InvalidTokenId)?;

    Ok(lot)
}

/// View the sale configuration, the current lot and the treasury.
#[receive(contract = "GallNft", name = "viewSale", return_value = "ViewSale")]
fn view_sale<S: HasStateApi>(
    _ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<ViewSale> {
    Ok(host.state().view())
}

#[concordium_cfg_test]
mod tests {
    use super::*;
    use commons::test::*;
    use std::{cell::RefCell, rc::Rc};
    use test_infrastructure::*;

    const ACCOUNT_0: AccountAddress = AccountAddress([0u8; 32]);
    const ADDRESS_0: Address = Address::Account(ACCOUNT_0);
    const ACCOUNT_1: AccountAddress = AccountAddress([1u8; 32]);
    const ADDRESS_1: Address = Address::Account(ACCOUNT_1);
    const ROYALTY_ACCOUNT: AccountAddress = AccountAddress([2u8; 32]);
    const ROYALTY_ADDRESS: Address = Address::Account(ROYALTY_ACCOUNT);

    const SELF_CONTRACT: ContractAddress = ContractAddress {
        index: 1,
        subindex: 0,
    };
    const SELF_ADDRESS: Address = Address::Contract(SELF_CONTRACT);
    const PAYMENT_CONTRACT: ContractAddress = ContractAddress {
        index: 10,
        subindex: 0,
    };
    const REWARD_CONTRACT: ContractAddress = ContractAddress {
        index: 11,
        subindex: 0,
    };

    /// Asset transfer as seen by a mocked asset contract.
    #[derive(Debug, PartialEq, Eq)]
    struct AssetTransfer {
        contract: ContractAddress,
        from: Address,
        to: Address,
        amount: AssetAmount,
    }

    type Transfers = Rc<RefCell<Vec<AssetTransfer>>>;

    fn units(n: u128) -> AssetAmount {
        whole_units(n).expect_report("Amount is expected to fit")
    }

    fn token(id: u32) -> ContractTokenId {
        TokenIdU32(id)
    }

    fn init_params() -> InitParams {
        InitParams {
            name: String::from("GALL"),
            uri: String::from("ipfs://gall/"),
            payment_token: Cis2Asset::new(PAYMENT_CONTRACT, TokenIdVec(vec![])),
            royalty_wallet: ROYALTY_ACCOUNT,
            reward_token: Cis2Asset::new(REWARD_CONTRACT, TokenIdVec(vec![])),
            base_price: units(15),
            airdrop_rate: units(10),
        }
    }

    fn new_host() -> TestHost<State<TestStateApi>> {
        let mut state_builder = TestStateBuilder::new();
        let state = State::new(&mut state_builder, init_params());
        TestHost::new(state, state_builder)
    }

    fn receive_ctx<'a>(sender: Address, parameter: &'a [u8]) -> TestReceiveContext<'a> {
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(sender);
        ctx.set_owner(ACCOUNT_0);
        ctx.set_self_address(SELF_CONTRACT);
        ctx.set_parameter(parameter);
        ctx
    }

    /// Balances of an asset contract: `initial` for `holder`, moved by every
    /// transfer recorded so far.
    fn balance_mock(
        contract: ContractAddress,
        holder: Address,
        initial: AssetAmount,
        transfers: &Transfers,
    ) -> MockFn<State<TestStateApi>> {
        let transfers = transfers.clone();
        parse_and_map_mock::<AssetBalanceOfQueryParams, _, _>(move |params| {
            let transfers = transfers.borrow();
            let balances: Vec<AssetAmount> = params
                .queries
                .iter()
                .map(|query| {
                    let start = if query.address == holder { initial.0 } else { 0 };
                    let moved = |matches: &dyn Fn(&AssetTransfer) -> bool| -> u128 {
                        transfers
                            .iter()
                            .filter(|transfer| transfer.contract == contract && matches(transfer))
                            .map(|transfer| transfer.amount.0)
                            .sum()
                    };
                    let received = moved(&|transfer| transfer.to == query.address);
                    let sent = moved(&|transfer| transfer.from == query.address);
                    AssetAmount::from((start + received).saturating_sub(sent))
                })
                .collect();
            Some(AssetBalanceOfQueryResponse::from(balances))
        })
    }

    fn transfer_mock(
        contract: ContractAddress,
        transfers: &Transfers,
    ) -> MockFn<State<TestStateApi>> {
        let transfers = transfers.clone();
        parse_and_record_mock::<AssetTransferParameter, _>(
            move |TransferParams(params)| {
                for transfer in params {
                    transfers.borrow_mut().push(AssetTransfer {
                        contract,
                        from: transfer.from,
                        to: transfer.to.address(),
                        amount: transfer.amount,
                    });
                }
            },
            (),
        )
    }

    /// Mock the payment and reward token contracts. The buyer `ADDRESS_1` holds
    /// `buyer_balance` of the payment asset, this contract holds `reserve` of
    /// the reward asset.
    fn setup_assets(
        host: &mut TestHost<State<TestStateApi>>,
        buyer_balance: AssetAmount,
        reserve: AssetAmount,
        approved: bool,
    ) -> Transfers {
        let transfers = Rc::new(RefCell::new(Vec::new()));

        host.setup_mock_entrypoint(
            PAYMENT_CONTRACT,
            OwnedEntrypointName::new_unchecked("balanceOf".into()),
            balance_mock(PAYMENT_CONTRACT, ADDRESS_1, buyer_balance, &transfers),
        );
        host.setup_mock_entrypoint(
            PAYMENT_CONTRACT,
            OwnedEntrypointName::new_unchecked("operatorOf".into()),
            parse_and_map_mock::<OperatorOfQueryParams, _, _>(move |params| {
                let response = params
                    .queries
                    .iter()
                    .map(|query| {
                        approved && query.owner == ADDRESS_1 && query.address == SELF_ADDRESS
                    })
                    .collect::<Vec<bool>>();
                Some(OperatorOfQueryResponse::from(response))
            }),
        );
        host.setup_mock_entrypoint(
            PAYMENT_CONTRACT,
            OwnedEntrypointName::new_unchecked("transfer".into()),
            transfer_mock(PAYMENT_CONTRACT, &transfers),
        );
        host.setup_mock_entrypoint(
            REWARD_CONTRACT,
            OwnedEntrypointName::new_unchecked("balanceOf".into()),
            balance_mock(REWARD_CONTRACT, SELF_ADDRESS, reserve, &transfers),
        );
        host.setup_mock_entrypoint(
            REWARD_CONTRACT,
            OwnedEntrypointName::new_unchecked("transfer".into()),
            transfer_mock(REWARD_CONTRACT, &transfers),
        );

        transfers
    }

    fn mint_as(
        sender: Address,
        host: &mut TestHost<State<TestStateApi>>,
        logger: &mut TestLogger,
        token_id: ContractTokenId,
        quantity: u64,
    ) -> ContractResult<()> {
        let parameter_bytes = to_bytes(&MintParams {
            token_id,
            quantity: ContractTokenAmount::from(quantity),
        });
        let ctx = receive_ctx(sender, &parameter_bytes);
        mint(&ctx, host, logger)
    }

    fn set_extra_info_as(
        sender: Address,
        host: &mut TestHost<State<TestStateApi>>,
        logger: &mut TestLogger,
        token_id: ContractTokenId,
        price: AssetAmount,
    ) -> ContractResult<()> {
        let parameter_bytes = to_bytes(&SetExtraInfoParams { token_id, price });
        let ctx = receive_ctx(sender, &parameter_bytes);
        set_extra_info(&ctx, host, logger)
    }

    fn withdraw_as(
        sender: Address,
        host: &mut TestHost<State<TestStateApi>>,
        logger: &mut TestLogger,
    ) -> ContractResult<()> {
        let ctx = receive_ctx(sender, &[]);
        withdraw(&ctx, host, logger)
    }

    /// Test helper function which creates a contract state where `ADDRESS_0`
    /// owns `quantity` tokens of the first lot.
    fn host_with_tokens(quantity: u64) -> TestHost<State<TestStateApi>> {
        let mut state_builder = TestStateBuilder::new();
        let mut state = State::new(&mut state_builder, init_params());
        state
            .record_mint(
                &ADDRESS_0,
                &token(0),
                ContractTokenAmount::from(quantity),
                AssetAmount::from(0),
                &mut state_builder,
            )
            .expect_report("Failed to mint token 0");
        TestHost::new(state, state_builder)
    }

    /// Test initialization succeeds.
    #[concordium_test]
    fn test_init() {
        // Setup the context
        let parameter_bytes = to_bytes(&init_params());
        let mut ctx = TestInitContext::empty();
        ctx.set_init_origin(ACCOUNT_0);
        ctx.set_parameter(&parameter_bytes);
        let mut builder = TestStateBuilder::new();

        // Call the contract function.
        let result = init(&ctx, &mut builder);

        // Check the result
        let state = result.expect_report("Contract initialization failed");

        // Check the state
        claim_eq!(state.token_id, token(0));
        claim_eq!(state.treasury, AssetAmount::from(0));
        claim_eq!(state.royalty, Percentage::from_percent(5));
        claim_eq!(state.base_price, units(15));
        claim_eq!(state.royalty_wallet, ROYALTY_ACCOUNT);
        claim!(!state.contains_token(&token(0)), "No lot should be minted");
    }

    /// Test initialization fails when payment and reward are the same asset.
    #[concordium_test]
    fn test_init_identical_assets() {
        let mut params = init_params();
        params.reward_token = params.payment_token.clone();
        let parameter_bytes = to_bytes(&params);
        let mut ctx = TestInitContext::empty();
        ctx.set_init_origin(ACCOUNT_0);
        ctx.set_parameter(&parameter_bytes);
        let mut builder = TestStateBuilder::new();

        let result = init(&ctx, &mut builder);

        claim!(result.is_err(), "Expected to fail");

        // Another token of the same contract is a different asset.
        let mut params = init_params();
        params.reward_token = Cis2Asset::new(PAYMENT_CONTRACT, TokenIdVec(vec![1]));
        let parameter_bytes = to_bytes(&params);
        ctx.set_parameter(&parameter_bytes);

        claim!(init(&ctx, &mut builder).is_ok(), "Results in rejection");
    }

    /// Test minting pays for the tokens, forwards the royalty, airdrops the
    /// reward and logs the appropriate events.
    #[concordium_test]
    fn test_mint() {
        let mut logger = TestLogger::init();
        let mut host = new_host();
        let transfers = setup_assets(&mut host, units(1_500), units(1_000), true);

        // Call the contract function.
        let result = mint_as(ADDRESS_1, &mut host, &mut logger, token(0), 100);

        // Check the result
        claim!(result.is_ok(), "Results in rejection");

        // Check the state
        let balance = host
            .state()
            .balance(&token(0), &ADDRESS_1)
            .expect_report("Token is expected to exist");
        claim_eq!(balance, ContractTokenAmount::from(100));
        claim_eq!(host.state().token_id, token(1));
        claim_eq!(host.state().treasury, units(1_425));
        claim_eq!(
            host.state().lot(&token(0)),
            LotInfo {
                supply: ContractTokenAmount::from(100),
                capped_minted: ContractTokenAmount::from(100),
                extra_price: None,
            }
        );

        // Check the asset transfers
        claim_eq!(
            *transfers.borrow(),
            vec![
                AssetTransfer {
                    contract: PAYMENT_CONTRACT,
                    from: ADDRESS_1,
                    to: SELF_ADDRESS,
                    amount: units(1_500),
                },
                AssetTransfer {
                    contract: PAYMENT_CONTRACT,
                    from: SELF_ADDRESS,
                    to: ROYALTY_ADDRESS,
                    amount: units(75),
                },
                AssetTransfer {
                    contract: REWARD_CONTRACT,
                    from: SELF_ADDRESS,
                    to: ADDRESS_1,
                    amount: units(1_000),
                },
            ]
        );

        // Check the logs
        claim_eq!(logger.logs.len(), 3, "Three events should be logged");
        claim_eq!(
            logger.logs[0],
            to_bytes(&Cis2Event::Mint(MintEvent {
                token_id: token(0),
                amount: ContractTokenAmount::from(100),
                owner: ADDRESS_1,
            }))
        );
        claim_eq!(
            logger.logs[1],
            to_bytes(&token_metadata_event("ipfs://gall/", token(0)))
        );
        claim_eq!(
            logger.logs[2],
            to_bytes(&CustomEvent::Sale(SaleEvent {
                buyer: ACCOUNT_1,
                token_id: token(0),
                quantity: ContractTokenAmount::from(100),
                payment: units(1_500),
                royalty: units(75),
                airdrop: units(1_000),
            }))
        );
    }

    /// Test the lot counter moves by one per mint, whatever the quantity, and
    /// earlier lots stay mintable.
    #[concordium_test]
    fn test_mint_advances_lot_once_per_call() {
        let mut logger = TestLogger::init();
        let mut host = new_host();
        setup_assets(&mut host, units(10_000), units(10_000), true);

        claim!(mint_as(ADDRESS_1, &mut host, &mut logger, token(0), 7).is_ok());
        claim_eq!(host.state().token_id, token(1));

        claim!(mint_as(ADDRESS_1, &mut host, &mut logger, token(0), 1).is_ok());
        claim_eq!(host.state().token_id, token(2));

        let balance = host
            .state()
            .balance(&token(0), &ADDRESS_1)
            .expect_report("Token is expected to exist");
        claim_eq!(balance, ContractTokenAmount::from(8));

        // Metadata is only logged for the first tokens of a lot.
        let metadata = to_bytes(&token_metadata_event("ipfs://gall/", token(0)));
        claim_eq!(
            logger.logs.iter().filter(|log| **log == metadata).count(),
            1
        );
    }

    /// Test minting fails without changing anything when the reward reserve
    /// cannot cover the airdrop.
    #[concordium_test]
    fn test_mint_insufficient_reward_supply() {
        let mut logger = TestLogger::init();
        let mut host = new_host();
        let transfers = setup_assets(&mut host, units(1_500), units(999), true);

        let result = mint_as(ADDRESS_1, &mut host, &mut logger, token(0), 100);

        let err = result.expect_err_report("Expected to fail");
        claim_eq!(
            err,
            ContractError::from(CustomContractError::InsufficientRewardSupply)
        );
        claim_eq!(host.state().token_id, token(0));
        claim_eq!(host.state().treasury, AssetAmount::from(0));
        claim!(!host.state().contains_token(&token(0)));
        claim!(transfers.borrow().is_empty(), "No transfer expected");
        claim!(logger.logs.is_empty(), "No event expected");
    }

    /// Test minting fails when the reward token contract cannot be queried.
    #[concordium_test]
    fn test_mint_reward_contract_failure() {
        let mut logger = TestLogger::init();
        let mut host = new_host();
        let transfers = setup_assets(&mut host, units(1_500), units(1_000), true);
        host.setup_mock_entrypoint(
            REWARD_CONTRACT,
            OwnedEntrypointName::new_unchecked("balanceOf".into()),
            failing_mock(),
        );

        let result = mint_as(ADDRESS_1, &mut host, &mut logger, token(0), 100);

        let err = result.expect_err_report("Expected to fail");
        claim_eq!(
            err,
            ContractError::from(CustomContractError::InvokeContractError)
        );
        claim_eq!(host.state().token_id, token(0));
        claim!(transfers.borrow().is_empty(), "No transfer expected");
    }

    /// Test minting fails when an asset contract rejects one of the transfers.
    #[concordium_test]
    fn test_mint_asset_transfer_failure() {
        for contract in [PAYMENT_CONTRACT, REWARD_CONTRACT].iter() {
            let mut logger = TestLogger::init();
            let mut host = new_host();
            setup_assets(&mut host, units(1_500), units(1_000), true);
            host.setup_mock_entrypoint(
                *contract,
                OwnedEntrypointName::new_unchecked("transfer".into()),
                failing_mock(),
            );

            let result = mint_as(ADDRESS_1, &mut host, &mut logger, token(0), 100);

            let err = result.expect_err_report("Expected to fail");
            claim_eq!(
                err,
                ContractError::from(CustomContractError::InvokeContractError)
            );
            claim!(logger.logs.is_empty(), "No event expected");
        }
    }

    /// Test minting fails when the buyer cannot cover the price.
    #[concordium_test]
    fn test_mint_insufficient_payment_balance() {
        let mut logger = TestLogger::init();
        let mut host = new_host();
        let transfers = setup_assets(&mut host, units(1_499), units(1_000), true);

        let result = mint_as(ADDRESS_1, &mut host, &mut logger, token(0), 100);

        let err = result.expect_err_report("Expected to fail");
        claim_eq!(
            err,
            ContractError::from(CustomContractError::InsufficientPaymentFunds)
        );
        claim_eq!(host.state().token_id, token(0));
        claim!(transfers.borrow().is_empty(), "No transfer expected");
    }

    /// Test minting fails when the buyer has not made this contract an
    /// operator in the payment token contract.
    #[concordium_test]
    fn test_mint_payment_not_approved() {
        let mut logger = TestLogger::init();
        let mut host = new_host();
        let transfers = setup_assets(&mut host, units(1_500), units(1_000), false);

        let result = mint_as(ADDRESS_1, &mut host, &mut logger, token(0), 100);

        let err = result.expect_err_report("Expected to fail");
        claim_eq!(
            err,
            ContractError::from(CustomContractError::InsufficientPaymentFunds)
        );
        claim!(transfers.borrow().is_empty(), "No transfer expected");
    }

    /// Test the mint cap holds within one call and across calls.
    #[concordium_test]
    fn test_mint_cap_without_extra_info() {
        let mut logger = TestLogger::init();
        let mut host = new_host();
        let transfers = setup_assets(&mut host, units(10_000), units(10_000), true);

        let err = mint_as(ADDRESS_1, &mut host, &mut logger, token(0), 101)
            .expect_err_report("Expected to fail");
        claim_eq!(err, ContractError::from(CustomContractError::MintCapExceeded));

        claim!(mint_as(ADDRESS_1, &mut host, &mut logger, token(0), 60).is_ok());
        let err = mint_as(ADDRESS_1, &mut host, &mut logger, token(0), 41)
            .expect_err_report("Expected to fail");
        claim_eq!(err, ContractError::from(CustomContractError::MintCapExceeded));
        claim!(mint_as(ADDRESS_1, &mut host, &mut logger, token(0), 40).is_ok());

        claim_eq!(
            host.state().lot(&token(0)).capped_minted,
            ContractTokenAmount::from(100)
        );
        claim_eq!(host.state().token_id, token(2));
        claim_eq!(transfers.borrow().len(), 6);
    }

    /// Test the full sale: a lot minted up to its cap, an extra price lifting
    /// the cap of that same lot and the royalty on the following sale.
    #[concordium_test]
    fn test_sale_scenario() {
        let mut logger = TestLogger::init();
        let mut host = new_host();
        let transfers = setup_assets(&mut host, units(5_000), units(5_000), true);

        claim!(mint_as(ADDRESS_1, &mut host, &mut logger, token(0), 100).is_ok());
        claim_eq!(host.state().token_id, token(1));

        let err = mint_as(ADDRESS_1, &mut host, &mut logger, token(0), 150)
            .expect_err_report("Expected to fail");
        claim_eq!(err, ContractError::from(CustomContractError::MintCapExceeded));
        claim_eq!(transfers.borrow().len(), 3);
        claim_eq!(host.state().token_id, token(1));

        claim!(
            set_extra_info_as(ADDRESS_0, &mut host, &mut logger, token(0), units(20)).is_ok(),
            "Results in rejection"
        );
        claim_eq!(host.state().effective_price(&token(0)), units(20));

        claim!(mint_as(ADDRESS_1, &mut host, &mut logger, token(0), 150).is_ok());
        claim_eq!(host.state().token_id, token(2));

        let transfers = transfers.borrow();
        claim_eq!(transfers.len(), 6);
        claim_eq!(transfers[3].amount, units(3_000));
        claim_eq!(
            transfers[4],
            AssetTransfer {
                contract: PAYMENT_CONTRACT,
                from: SELF_ADDRESS,
                to: ROYALTY_ADDRESS,
                amount: units(150),
            }
        );
        claim_eq!(transfers[5].amount, units(1_500));
        claim_eq!(host.state().treasury, units(1_425 + 2_850));

        let balance = host
            .state()
            .balance(&token(0), &ADDRESS_1)
            .expect_report("Token is expected to exist");
        claim_eq!(balance, ContractTokenAmount::from(250));
        claim_eq!(
            host.state().lot(&token(0)),
            LotInfo {
                supply: ContractTokenAmount::from(250),
                capped_minted: ContractTokenAmount::from(100),
                extra_price: Some(units(20)),
            }
        );
    }

    /// Test a lot with a zero extra price is minted without any payment.
    #[concordium_test]
    fn test_mint_free_lot() {
        let mut logger = TestLogger::init();
        let mut host = new_host();
        let transfers = setup_assets(&mut host, AssetAmount::from(0), units(100), false);

        claim!(
            set_extra_info_as(ADDRESS_0, &mut host, &mut logger, token(0), AssetAmount::from(0))
                .is_ok()
        );
        claim!(mint_as(ADDRESS_1, &mut host, &mut logger, token(0), 10).is_ok());

        claim_eq!(
            *transfers.borrow(),
            vec![AssetTransfer {
                contract: REWARD_CONTRACT,
                from: SELF_ADDRESS,
                to: ADDRESS_1,
                amount: units(100),
            }]
        );
        claim_eq!(host.state().treasury, AssetAmount::from(0));
    }

    /// Test the parameter checks of minting.
    #[concordium_test]
    fn test_mint_invalid_requests() {
        let mut logger = TestLogger::init();
        let mut host = new_host();
        setup_assets(&mut host, units(1_500), units(1_000), true);

        let err = mint_as(ADDRESS_1, &mut host, &mut logger, token(5), 1)
            .expect_err_report("Expected to fail");
        claim_eq!(err, ContractError::InvalidTokenId);

        let err = mint_as(ADDRESS_1, &mut host, &mut logger, token(0), 0)
            .expect_err_report("Expected to fail");
        claim_eq!(err, ContractError::from(CustomContractError::InvalidQuantity));

        let err = mint_as(SELF_ADDRESS, &mut host, &mut logger, token(0), 1)
            .expect_err_report("Expected to fail");
        claim_eq!(
            err,
            ContractError::from(CustomContractError::OnlyAccountAddress)
        );
        claim!(logger.logs.is_empty(), "No event expected");
    }

    /// Test setting the extra price logs the previous and the new price.
    #[concordium_test]
    fn test_set_extra_info() {
        let mut logger = TestLogger::init();
        let mut host = new_host();

        // Lots ahead of the current one can be priced as well.
        claim!(set_extra_info_as(ADDRESS_0, &mut host, &mut logger, token(3), units(20)).is_ok());
        claim!(set_extra_info_as(ADDRESS_0, &mut host, &mut logger, token(3), units(25)).is_ok());

        claim_eq!(host.state().effective_price(&token(3)), units(25));
        claim_eq!(host.state().effective_price(&token(0)), units(15));
        claim_eq!(
            logger.logs,
            vec![
                to_bytes(&CustomEvent::ExtraInfo(ExtraInfoEvent {
                    token_id: token(3),
                    from: None,
                    to: units(20),
                })),
                to_bytes(&CustomEvent::ExtraInfo(ExtraInfoEvent {
                    token_id: token(3),
                    from: Some(units(20)),
                    to: units(25),
                })),
            ]
        );
    }

    /// Test only the owner can set extra prices.
    #[concordium_test]
    fn test_set_extra_info_not_authorized() {
        let mut logger = TestLogger::init();
        let mut host = new_host();

        let err = set_extra_info_as(ADDRESS_1, &mut host, &mut logger, token(0), units(20))
            .expect_err_report("Expected to fail");

        claim_eq!(err, ContractError::Unauthorized);
        claim_eq!(host.state().lot(&token(0)).extra_price, None);
        claim!(logger.logs.is_empty(), "No event expected");
    }

    /// Test withdrawing sends the whole treasury to the owner once.
    #[concordium_test]
    fn test_withdraw() {
        let mut logger = TestLogger::init();
        let mut host = new_host();
        let transfers = setup_assets(&mut host, units(1_500), units(1_000), true);
        claim!(mint_as(ADDRESS_1, &mut host, &mut logger, token(0), 100).is_ok());
        let mut logger = TestLogger::init();

        claim!(withdraw_as(ADDRESS_0, &mut host, &mut logger).is_ok());

        claim_eq!(host.state().treasury, AssetAmount::from(0));
        claim_eq!(transfers.borrow().len(), 4);
        claim_eq!(
            transfers.borrow()[3],
            AssetTransfer {
                contract: PAYMENT_CONTRACT,
                from: SELF_ADDRESS,
                to: ADDRESS_0,
                amount: units(1_425),
            }
        );
        claim_eq!(
            logger.logs,
            vec![to_bytes(&CustomEvent::Withdraw(WithdrawEvent {
                owner: ACCOUNT_0,
                amount: units(1_425),
            }))]
        );

        // Nothing left to withdraw.
        claim!(withdraw_as(ADDRESS_0, &mut host, &mut logger).is_ok());
        claim_eq!(transfers.borrow().len(), 4);
        claim_eq!(logger.logs.len(), 1);
    }

    /// Test withdrawing also sweeps payment tokens deposited outside a mint.
    #[concordium_test]
    fn test_withdraw_direct_deposit() {
        let mut logger = TestLogger::init();
        let mut host = new_host();
        let transfers = setup_assets(&mut host, units(1_500), units(1_000), true);

        // Payment tokens sent straight to this contract.
        let parameter_bytes = to_bytes(&OnReceivingCis2Params {
            token_id: TokenIdVec(vec![]),
            amount: units(500),
            from: ADDRESS_1,
            data: AdditionalData::empty(),
        });
        let ctx = receive_ctx(Address::Contract(PAYMENT_CONTRACT), &parameter_bytes);
        claim!(on_receiving_cis2(&ctx, &host).is_ok());
        transfers.borrow_mut().push(AssetTransfer {
            contract: PAYMENT_CONTRACT,
            from: ADDRESS_1,
            to: SELF_ADDRESS,
            amount: units(500),
        });
        claim_eq!(host.state().treasury, AssetAmount::from(0));

        claim!(withdraw_as(ADDRESS_0, &mut host, &mut logger).is_ok());

        claim_eq!(transfers.borrow().len(), 2);
        claim_eq!(
            transfers.borrow()[1],
            AssetTransfer {
                contract: PAYMENT_CONTRACT,
                from: SELF_ADDRESS,
                to: ADDRESS_0,
                amount: units(500),
            }
        );

        // Proceeds and a later deposit go out together.
        claim!(mint_as(ADDRESS_1, &mut host, &mut logger, token(0), 10).is_ok());
        transfers.borrow_mut().push(AssetTransfer {
            contract: PAYMENT_CONTRACT,
            from: ADDRESS_1,
            to: SELF_ADDRESS,
            amount: units(7),
        });
        let mut logger = TestLogger::init();
        claim!(withdraw_as(ADDRESS_0, &mut host, &mut logger).is_ok());

        // 150 paid, 7.5 royalty, 7 deposited.
        let swept = AssetAmount::from(149_500_000_000_000_000_000);
        claim_eq!(transfers.borrow().last().map(|transfer| transfer.amount), Some(swept));
        claim_eq!(host.state().treasury, AssetAmount::from(0));
        claim_eq!(
            logger.logs,
            vec![to_bytes(&CustomEvent::Withdraw(WithdrawEvent {
                owner: ACCOUNT_0,
                amount: swept,
            }))]
        );
    }

    /// Test only the owner can withdraw.
    #[concordium_test]
    fn test_withdraw_not_authorized() {
        let mut logger = TestLogger::init();
        let mut host = new_host();
        let transfers = setup_assets(&mut host, units(1_500), units(1_000), true);
        claim!(mint_as(ADDRESS_1, &mut host, &mut logger, token(0), 100).is_ok());

        let err = withdraw_as(ADDRESS_1, &mut host, &mut logger)
            .expect_err_report("Expected to fail");

        claim_eq!(err, ContractError::Unauthorized);
        claim_eq!(host.state().treasury, units(1_425));
        claim_eq!(transfers.borrow().len(), 3);
    }

    /// Test transfer succeeds, when `from` is the sender.
    #[concordium_test]
    fn test_transfer_account() {
        let quantity_1 = ContractTokenAmount::from(1);

        // and parameter.
        let transfer = Transfer {
            token_id: token(0),
            from: ADDRESS_0,
            to: Receiver::from_account(ACCOUNT_1),
            amount: quantity_1,
            data: AdditionalData::empty(),
        };
        let parameter = TransferParams(vec![transfer]);
        let parameter_bytes = to_bytes(&parameter);
        let ctx = receive_ctx(ADDRESS_0, &parameter_bytes);

        let mut logger = TestLogger::init();
        let mut host = host_with_tokens(1);

        // Call the contract function.
        let result: ContractResult<()> = self::transfer(&ctx, &mut host, &mut logger);
        // Check the result.
        claim!(result.is_ok(), "Results in rejection");

        // Check the state.
        let balance0 = host
            .state()
            .balance(&token(0), &ADDRESS_0)
            .expect_report("Token is expected to exist");
        let balance1 = host
            .state()
            .balance(&token(0), &ADDRESS_1)
            .expect_report("Token is expected to exist");
        claim_eq!(balance0, ContractTokenAmount::from(0));
        claim_eq!(balance1, quantity_1);

        // Check the logs.
        claim_eq!(logger.logs.len(), 1, "Only one event should be logged");
        claim_eq!(
            logger.logs[0],
            to_bytes(&Cis2Event::Transfer(TransferEvent {
                from: ADDRESS_0,
                to: ADDRESS_1,
                token_id: token(0),
                amount: quantity_1,
            })),
            "Incorrect event emitted"
        )
    }

    /// Test transfer token fails, when sender is neither the owner or an
    /// operator of the owner.
    #[concordium_test]
    fn test_transfer_not_authorized() {
        let transfer = Transfer {
            token_id: token(0),
            from: ADDRESS_0,
            amount: ContractTokenAmount::from(1),
            to: Receiver::from_account(ACCOUNT_1),
            data: AdditionalData::empty(),
        };
        let parameter_bytes = to_bytes(&TransferParams(vec![transfer]));
        let ctx = receive_ctx(ADDRESS_1, &parameter_bytes);

        let mut logger = TestLogger::init();
        let mut host = host_with_tokens(1);

        // Call the contract function.
        let result: ContractResult<()> = self::transfer(&ctx, &mut host, &mut logger);
        // Check the result.
        let err = result.expect_err_report("Expected to fail");
        claim_eq!(
            err,
            ContractError::Unauthorized,
            "Error is expected to be Unauthorized"
        )
    }

    /// Test transfer fails when the owner has too few tokens.
    #[concordium_test]
    fn test_transfer_insufficient_funds() {
        let transfer = Transfer {
            token_id: token(0),
            from: ADDRESS_0,
            amount: ContractTokenAmount::from(2),
            to: Receiver::from_account(ACCOUNT_1),
            data: AdditionalData::empty(),
        };
        let parameter_bytes = to_bytes(&TransferParams(vec![transfer]));
        let ctx = receive_ctx(ADDRESS_0, &parameter_bytes);

        let mut logger = TestLogger::init();
        let mut host = host_with_tokens(1);

        let result: ContractResult<()> = self::transfer(&ctx, &mut host, &mut logger);

        let err = result.expect_err_report("Expected to fail");
        claim_eq!(err, ContractError::InsufficientFunds);
    }

    /// Test transfer succeeds when sender is not the owner, but is an operator
    /// of the owner.
    #[concordium_test]
    fn test_operator_transfer() {
        let quantity_2 = ContractTokenAmount::from(2);

        let transfer = Transfer {
            from: ADDRESS_0,
            to: Receiver::from_account(ACCOUNT_1),
            token_id: token(0),
            amount: quantity_2,
            data: AdditionalData::empty(),
        };
        let parameter_bytes = to_bytes(&TransferParams::from(vec![transfer]));
        let ctx = receive_ctx(ADDRESS_1, &parameter_bytes);

        let mut logger = TestLogger::init();
        let mut host = host_with_tokens(3);
        let (state, state_builder) = host.state_and_builder();
        state.add_operator(&ADDRESS_0, &ADDRESS_1, state_builder);

        // Call the contract function.
        let result: ContractResult<()> = self::transfer(&ctx, &mut host, &mut logger);

        // Check the result.
        claim!(result.is_ok(), "Results in rejection");

        // Check the state.
        let balance0 = host
            .state()
            .balance(&token(0), &ADDRESS_0)
            .expect_report("Token is expected to exist");
        let balance1 = host
            .state()
            .balance(&token(0), &ADDRESS_1)
            .expect_report("Token is expected to exist");
        claim_eq!(balance0, ContractTokenAmount::from(1));
        claim_eq!(balance1, quantity_2);
    }

    /// Test adding an operator succeeds and the appropriate event is logged.
    #[concordium_test]
    fn test_add_operator() {
        // and parameter.
        let update = UpdateOperator {
            update: OperatorUpdate::Add,
            operator: ADDRESS_1,
        };
        let parameter_bytes = to_bytes(&UpdateOperatorParams(vec![update]));
        let ctx = receive_ctx(ADDRESS_0, &parameter_bytes);

        let mut logger = TestLogger::init();
        let mut host = new_host();

        // Call the contract function.
        let result: ContractResult<()> = update_operator(&ctx, &mut host, &mut logger);

        // Check the result.
        claim!(result.is_ok(), "Results in rejection");

        // Check the state.
        let is_operator = host.state().is_operator(&ADDRESS_0, &ADDRESS_1);
        claim!(is_operator, "Account should be an operator");

        // Query the operator.
        let query = OperatorOfQueryParams {
            queries: vec![
                OperatorOfQuery {
                    owner: ADDRESS_0,
                    address: ADDRESS_1,
                },
                OperatorOfQuery {
                    owner: ADDRESS_1,
                    address: ADDRESS_0,
                },
            ],
        };
        let parameter_bytes = to_bytes(&query);
        let ctx = receive_ctx(ADDRESS_0, &parameter_bytes);
        let response = operator_of(&ctx, &host).expect_report("Query failed");
        claim_eq!(
            to_bytes(&response),
            to_bytes(&OperatorOfQueryResponse::from(vec![true, false]))
        );

        // Check the logs.
        claim_eq!(logger.logs.len(), 1, "One event should be logged");
        claim_eq!(
            logger.logs[0],
            to_bytes(
                &Cis2Event::<ContractTokenId, ContractTokenAmount>::UpdateOperator(
                    UpdateOperatorEvent {
                        owner: ADDRESS_0,
                        operator: ADDRESS_1,
                        update: OperatorUpdate::Add,
                    }
                )
            ),
            "Incorrect event emitted"
        )
    }

    /// Test balances can only be queried for minted lots.
    #[concordium_test]
    fn test_balance_of() {
        let host = host_with_tokens(3);

        let query = ContractBalanceOfQueryParams {
            queries: vec![
                BalanceOfQuery {
                    token_id: token(0),
                    address: ADDRESS_0,
                },
                BalanceOfQuery {
                    token_id: token(0),
                    address: ADDRESS_1,
                },
            ],
        };
        let parameter_bytes = to_bytes(&query);
        let ctx = receive_ctx(ADDRESS_1, &parameter_bytes);
        let response = balance_of(&ctx, &host).expect_report("Query failed");
        claim_eq!(
            to_bytes(&response),
            to_bytes(&ContractBalanceOfQueryResponse::from(vec![
                ContractTokenAmount::from(3),
                ContractTokenAmount::from(0)
            ]))
        );

        let query = ContractBalanceOfQueryParams {
            queries: vec![BalanceOfQuery {
                token_id: token(1),
                address: ADDRESS_0,
            }],
        };
        let parameter_bytes = to_bytes(&query);
        let ctx = receive_ctx(ADDRESS_1, &parameter_bytes);
        let err = balance_of(&ctx, &host).expect_err_report("Expected to fail");
        claim_eq!(err, ContractError::InvalidTokenId);
    }

    /// Test the metadata URL is the collection URI with the hex token ID.
    #[concordium_test]
    fn test_token_metadata() {
        let host = host_with_tokens(1);

        let query = ContractTokenMetadataQueryParams {
            queries: vec![token(0)],
        };
        let parameter_bytes = to_bytes(&query);
        let ctx = receive_ctx(ADDRESS_1, &parameter_bytes);
        let response = token_metadata(&ctx, &host).expect_report("Query failed");
        claim_eq!(
            to_bytes(&response),
            to_bytes(&TokenMetadataQueryResponse::from(vec![MetadataUrl {
                url: String::from("ipfs://gall/00000000"),
                hash: None,
            }]))
        );

        let query = ContractTokenMetadataQueryParams {
            queries: vec![token(1)],
        };
        let parameter_bytes = to_bytes(&query);
        let ctx = receive_ctx(ADDRESS_1, &parameter_bytes);
        let err = token_metadata(&ctx, &host).expect_err_report("Expected to fail");
        claim_eq!(err, ContractError::InvalidTokenId);
    }

    /// Test the contract reports support for CIS-0 and CIS-2 only.
    #[concordium_test]
    fn test_supports() {
        let host = new_host();

        let query = SupportsQueryParams {
            queries: vec![
                StandardIdentifierOwned::new_unchecked(String::from("CIS-0")),
                StandardIdentifierOwned::new_unchecked(String::from("CIS-2")),
                StandardIdentifierOwned::new_unchecked(String::from("CIS-1")),
            ],
        };
        let parameter_bytes = to_bytes(&query);
        let ctx = receive_ctx(ADDRESS_1, &parameter_bytes);
        let response = supports(&ctx, &host).expect_report("Query failed");
        claim_eq!(
            to_bytes(&response),
            to_bytes(&SupportsQueryResponse::from(vec![
                SupportResult::Support,
                SupportResult::Support,
                SupportResult::NoSupport,
            ]))
        );
    }

    /// Test only the payment and reward tokens are accepted.
    #[concordium_test]
    fn test_on_receiving_cis2() {
        let host = new_host();
        let parameter_bytes = to_bytes(&OnReceivingCis2Params {
            token_id: TokenIdVec(vec![]),
            amount: units(1),
            from: ADDRESS_1,
            data: AdditionalData::empty(),
        });

        let ctx = receive_ctx(Address::Contract(PAYMENT_CONTRACT), &parameter_bytes);
        claim!(on_receiving_cis2(&ctx, &host).is_ok());

        let ctx = receive_ctx(Address::Contract(REWARD_CONTRACT), &parameter_bytes);
        claim!(on_receiving_cis2(&ctx, &host).is_ok());

        let unknown = ContractAddress {
            index: 99,
            subindex: 0,
        };
        let ctx = receive_ctx(Address::Contract(unknown), &parameter_bytes);
        let err = on_receiving_cis2(&ctx, &host).expect_err_report("Expected to fail");
        claim_eq!(err, ContractError::from(CustomContractError::UnsupportedAsset));
    }

    /// Test the owner can update internal values and anyone can view them.
    #[concordium_test]
    fn test_internal_values() {
        let mut host = new_host();

        let parameter_bytes = to_bytes(&UpdateInternalValueParams::BasePrice(units(30)));
        let ctx = receive_ctx(ADDRESS_1, &parameter_bytes);
        let err = update_internal_value(&ctx, &mut host).expect_err_report("Expected to fail");
        claim_eq!(err, ContractError::Unauthorized);

        let ctx = receive_ctx(ADDRESS_0, &parameter_bytes);
        claim!(update_internal_value(&ctx, &mut host).is_ok());

        let parameter_bytes = to_bytes(&UpdateInternalValueParams::Uri(String::from(
            "https://gall.example/",
        )));
        let ctx = receive_ctx(ADDRESS_0, &parameter_bytes);
        claim!(update_internal_value(&ctx, &mut host).is_ok());

        let parameter_bytes = to_bytes(&ViewInternalValueParams::BasePrice);
        let ctx = receive_ctx(ADDRESS_1, &parameter_bytes);
        claim_eq!(
            view_internal_value(&ctx, &host),
            Ok(ViewInternalValueResult::BasePrice(units(30)))
        );

        let parameter_bytes = to_bytes(&ViewInternalValueParams::Royalty);
        let ctx = receive_ctx(ADDRESS_1, &parameter_bytes);
        claim_eq!(
            view_internal_value(&ctx, &host),
            Ok(ViewInternalValueResult::Royalty(Percentage::from_percent(5)))
        );

        claim_eq!(host.state().uri, "https://gall.example/");
        claim_eq!(host.state().effective_price(&token(0)), units(30));
    }

    /// Test the read only views of the sale.
    #[concordium_test]
    fn test_views() {
        let mut logger = TestLogger::init();
        let mut host = new_host();
        setup_assets(&mut host, units(1_500), units(1_000), true);
        claim!(mint_as(ADDRESS_1, &mut host, &mut logger, token(0), 2).is_ok());

        let ctx = receive_ctx(ADDRESS_1, &[]);
        claim_eq!(view_token_id(&ctx, &host), Ok(token(1)));

        let sale = view_sale(&ctx, &host).expect_report("Query failed");
        claim_eq!(sale.token_id, token(1));
        claim_eq!(
            sale.treasury,
            AssetAmount::from(28_500_000_000_000_000_000)
        );
        claim_eq!(sale.payment_token, Cis2Asset::new(PAYMENT_CONTRACT, TokenIdVec(vec![])));

        let parameter_bytes = to_bytes(&token(1));
        let ctx = receive_ctx(ADDRESS_1, &parameter_bytes);
        claim_eq!(effective_price(&ctx, &host), Ok(units(15)));
        let err = view_lot(&ctx, &host).expect_err_report("Expected to fail");
        claim_eq!(err, ContractError::InvalidTokenId);

        let parameter_bytes = to_bytes(&token(0));
        let ctx = receive_ctx(ADDRESS_1, &parameter_bytes);
        claim_eq!(
            view_lot(&ctx, &host),
            Ok(LotInfo {
                supply: ContractTokenAmount::from(2),
                capped_minted: ContractTokenAmount::from(2),
                extra_price: None,
            })
        );
    }
}
