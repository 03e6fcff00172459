use super::*;

/// An untagged event of a lot being sold.
#[derive(Debug, Serialize, SchemaType)]
pub struct SaleEvent {
    /// Account that minted the tokens.
    pub buyer: AccountAddress,
    /// Lot the tokens were minted from.
    pub token_id: ContractTokenId,
    /// Number of tokens minted.
    pub quantity: ContractTokenAmount,
    /// Payment asset paid by the buyer.
    pub payment: AssetAmount,
    /// Part of the payment forwarded to the royalty wallet.
    pub royalty: AssetAmount,
    /// Reward asset airdropped to the buyer.
    pub airdrop: AssetAmount,
}

/// An untagged event of the extra price of a lot being set.
#[derive(Debug, Serialize, SchemaType)]
pub struct ExtraInfoEvent {
    pub token_id: ContractTokenId,
    /// Previous extra price, if any.
    pub from: Option<AssetAmount>,
    /// New extra price.
    pub to: AssetAmount,
}

/// An untagged event of the treasury being withdrawn.
#[derive(Debug, Serialize, SchemaType)]
pub struct WithdrawEvent {
    pub owner: AccountAddress,
    pub amount: AssetAmount,
}

/// Tagged Custom event to be serialized for the event log.
#[derive(Debug)]
pub enum CustomEvent {
    Sale(SaleEvent),
    ExtraInfo(ExtraInfoEvent),
    Withdraw(WithdrawEvent),
}

impl Serial for CustomEvent {
    fn serial<W: Write>(&self, out: &mut W) -> Result<(), W::Err> {
        match self {
            CustomEvent::Sale(event) => {
                out.write_u8(SALE_TAG)?;
                event.serial(out)
            }
            CustomEvent::ExtraInfo(event) => {
                out.write_u8(EXTRA_INFO_TAG)?;
                event.serial(out)
            }
            CustomEvent::Withdraw(event) => {
                out.write_u8(WITHDRAW_TAG)?;
                event.serial(out)
            }
        }
    }
}

impl Deserial for CustomEvent {
    fn deserial<R: Read>(source: &mut R) -> ParseResult<Self> {
        let tag = source.read_u8()?;
        match tag {
            SALE_TAG => SaleEvent::deserial(source).map(CustomEvent::Sale),
            EXTRA_INFO_TAG => ExtraInfoEvent::deserial(source).map(CustomEvent::ExtraInfo),
            WITHDRAW_TAG => WithdrawEvent::deserial(source).map(CustomEvent::Withdraw),
            _ => Err(ParseError::default()),
        }
    }
}
