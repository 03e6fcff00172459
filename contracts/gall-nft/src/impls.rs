use super::*;

impl LotInfo {
    fn new() -> Self {
        Self {
            supply: 0.into(),
            capped_minted: 0.into(),
            extra_price: None,
        }
    }
}

impl<S: HasStateApi> AddressState<S> {
    fn empty(state_builder: &mut StateBuilder<S>) -> Self {
        Self {
            balances: state_builder.new_map(),
            operators: state_builder.new_set(),
        }
    }

    fn balance(&self, token_id: &ContractTokenId) -> ContractTokenAmount {
        self.balances.get(token_id).map_or(0.into(), |balance| *balance)
    }

    fn credit(
        &mut self,
        token_id: &ContractTokenId,
        amount: ContractTokenAmount,
    ) -> ContractResult<()> {
        let balance = self
            .balance(token_id)
            .0
            .checked_add(amount.0)
            .ok_or(CustomContractError::Overflow)?;
        self.balances.insert(*token_id, balance.into());
        Ok(())
    }
}

// Functions for creating, updating and querying the contract state.
impl<S: HasStateApi> State<S> {
    /// Creates a new state with no lots sold.
    pub fn new(state_builder: &mut StateBuilder<S>, params: InitParams) -> Self {
        State {
            name: params.name,
            uri: params.uri,
            payment_token: params.payment_token,
            reward_token: params.reward_token,
            royalty_wallet: params.royalty_wallet,
            royalty: Percentage::from_percent(ROYALTY_PERCENT),
            base_price: params.base_price,
            airdrop_rate: params.airdrop_rate,
            token_id: TokenIdU32(0),
            treasury: 0.into(),
            lots: state_builder.new_map(),
            holders: state_builder.new_map(),
        }
    }

    /// Check that tokens of the lot have been minted.
    #[inline(always)]
    pub fn contains_token(&self, token_id: &ContractTokenId) -> bool {
        self.lots
            .get(token_id)
            .map_or(false, |lot| lot.supply.0 > 0)
    }

    /// Sale data of a lot, empty for lots never touched.
    pub fn lot(&self, token_id: &ContractTokenId) -> LotInfo {
        self.lots.get(token_id).map_or_else(LotInfo::new, |lot| *lot)
    }

    /// Price per token of a lot: its extra price if set, the base price
    /// otherwise.
    pub fn effective_price(&self, token_id: &ContractTokenId) -> AssetAmount {
        self.lot(token_id).extra_price.unwrap_or(self.base_price)
    }

    /// Lots can be minted up to the current one.
    pub fn ensure_mintable_lot(&self, token_id: &ContractTokenId) -> ContractResult<()> {
        ensure!(token_id.0 <= self.token_id.0, ContractError::InvalidTokenId);
        Ok(())
    }

    /// Results in an error if the lot has no extra price and minting
    /// `quantity` more tokens would go over `MAX_MINT_WITHOUT_EXTRA_INFO`.
    pub fn ensure_mint_cap(
        &self,
        token_id: &ContractTokenId,
        quantity: ContractTokenAmount,
    ) -> ContractResult<()> {
        let lot = self.lot(token_id);
        if lot.extra_price.is_some() {
            return Ok(());
        }

        let minted = lot
            .capped_minted
            .0
            .checked_add(quantity.0)
            .ok_or(CustomContractError::Overflow)?;
        ensure!(
            minted <= MAX_MINT_WITHOUT_EXTRA_INFO,
            CustomContractError::MintCapExceeded.into()
        );
        Ok(())
    }

    /// Record a sale of `quantity` tokens of a lot to `owner` and advance the
    /// current lot. The treasury share of the payment is added to the
    /// treasury.
    ///
    /// Returns whether these are the first tokens minted from the lot.
    pub fn record_mint(
        &mut self,
        owner: &Address,
        token_id: &ContractTokenId,
        quantity: ContractTokenAmount,
        treasury: AssetAmount,
        state_builder: &mut StateBuilder<S>,
    ) -> ContractResult<bool> {
        let mut lot = self.lot(token_id);
        let first_mint = lot.supply.0 == 0;

        lot.supply = lot
            .supply
            .0
            .checked_add(quantity.0)
            .ok_or(CustomContractError::Overflow)?
            .into();
        if lot.extra_price.is_none() {
            lot.capped_minted = lot
                .capped_minted
                .0
                .checked_add(quantity.0)
                .ok_or(CustomContractError::Overflow)?
                .into();
        }

        let next_token_id = self
            .token_id
            .0
            .checked_add(1)
            .ok_or(CustomContractError::Overflow)?;
        let treasury = self
            .treasury
            .0
            .checked_add(treasury.0)
            .ok_or(CustomContractError::Overflow)?;

        self.holders
            .entry(*owner)
            .or_insert_with(|| AddressState::empty(state_builder))
            .credit(token_id, quantity)?;
        self.lots.insert(*token_id, lot);
        self.token_id = TokenIdU32(next_token_id);
        self.treasury = treasury.into();

        Ok(first_mint)
    }

    /// Set the extra price of a lot, returning the previous one.
    pub fn set_extra_info(
        &mut self,
        token_id: &ContractTokenId,
        price: AssetAmount,
    ) -> Option<AssetAmount> {
        let mut lot = self.lot(token_id);
        let previous = lot.extra_price.replace(price);
        self.lots.insert(*token_id, lot);
        previous
    }

    /// Empty the treasury, returning what it held.
    pub fn take_treasury(&mut self) -> AssetAmount {
        core::mem::replace(&mut self.treasury, 0.into())
    }

    /// Get the current balance of a given token ID for a given address.
    /// Results in an error if the token ID does not exist in the state.
    pub fn balance(
        &self,
        token_id: &ContractTokenId,
        address: &Address,
    ) -> ContractResult<ContractTokenAmount> {
        ensure!(self.contains_token(token_id), ContractError::InvalidTokenId);

        Ok(self
            .holders
            .get(address)
            .map_or(0.into(), |address_state| address_state.balance(token_id)))
    }

    /// Check if a given address is an operator of a given owner address.
    pub fn is_operator(&self, owner: &Address, address: &Address) -> bool {
        self.holders
            .get(owner)
            .map(|address_state| address_state.operators.contains(address))
            .unwrap_or(false)
    }

    /// Update the state with a transfer of some token.
    /// Results in an error if the token ID does not exist in the state or if
    /// the from address have insufficient tokens to do the transfer.
    pub fn transfer(
        &mut self,
        transfer: &Transfer<ContractTokenId, ContractTokenAmount>,
        state_builder: &mut StateBuilder<S>,
    ) -> ContractResult<()> {
        ensure!(
            self.contains_token(&transfer.token_id),
            ContractError::InvalidTokenId
        );

        // A zero transfer does not modify the state.
        if transfer.amount.0 == 0 {
            return Ok(());
        }

        {
            let mut from_state = self
                .holders
                .get_mut(&transfer.from)
                .ok_or(ContractError::InsufficientFunds)?;
            let balance = from_state.balance(&transfer.token_id);
            ensure!(
                balance.0 >= transfer.amount.0,
                ContractError::InsufficientFunds
            );
            from_state
                .balances
                .insert(transfer.token_id, (balance.0 - transfer.amount.0).into());
        }

        self.holders
            .entry(transfer.to.address())
            .or_insert_with(|| AddressState::empty(state_builder))
            .credit(&transfer.token_id, transfer.amount)
    }

    /// Update the state adding a new operator for a given address.
    /// Succeeds even if the `operator` is already an operator for the
    /// `address`.
    pub fn add_operator(
        &mut self,
        owner: &Address,
        operator: &Address,
        state_builder: &mut StateBuilder<S>,
    ) {
        let mut owner_address_state = self
            .holders
            .entry(*owner)
            .or_insert_with(|| AddressState::empty(state_builder));
        owner_address_state.operators.insert(*operator);
    }

    /// Update the state removing an operator for a given address.
    /// Succeeds even if the `operator` is _not_ an operator for the `address`.
    pub fn remove_operator(&mut self, owner: &Address, operator: &Address) {
        self.holders
            .get_mut(owner)
            .map(|mut address_state| address_state.operators.remove(operator));
    }

    pub fn update_internal_value(&mut self, params: UpdateInternalValueParams) {
        match params {
            UpdateInternalValueParams::Uri(uri) => self.uri = uri,
            UpdateInternalValueParams::RoyaltyWallet(account) => self.royalty_wallet = account,
            UpdateInternalValueParams::BasePrice(price) => self.base_price = price,
            UpdateInternalValueParams::AirdropRate(rate) => self.airdrop_rate = rate,
        }
    }

    pub fn view_internal_value(&self, params: ViewInternalValueParams) -> ViewInternalValueResult {
        match params {
            ViewInternalValueParams::Uri => ViewInternalValueResult::Uri(self.uri.clone()),
            ViewInternalValueParams::RoyaltyWallet => {
                ViewInternalValueResult::RoyaltyWallet(self.royalty_wallet)
            }
            ViewInternalValueParams::Royalty => ViewInternalValueResult::Royalty(self.royalty),
            ViewInternalValueParams::BasePrice => {
                ViewInternalValueResult::BasePrice(self.base_price)
            }
            ViewInternalValueParams::AirdropRate => {
                ViewInternalValueResult::AirdropRate(self.airdrop_rate)
            }
        }
    }

    pub fn view(&self) -> ViewSale {
        ViewSale {
            name: self.name.clone(),
            uri: self.uri.clone(),
            payment_token: self.payment_token.clone(),
            reward_token: self.reward_token.clone(),
            royalty_wallet: self.royalty_wallet,
            royalty: self.royalty,
            base_price: self.base_price,
            airdrop_rate: self.airdrop_rate,
            token_id: self.token_id,
            treasury: self.treasury,
        }
    }
}
