use super::*;

/// Amount of `units` whole tokens of an asset with [`ASSET_DECIMALS`]
/// decimals. Returns `None` on overflow.
pub fn whole_units(units: u128) -> Option<AssetAmount> {
    10u128
        .checked_pow(ASSET_DECIMALS)
        .and_then(|one| units.checked_mul(one))
        .map(AssetAmount::from)
}

/// Split the money flow of minting `quantity` tokens at `price` each.
///
/// The royalty is cut from the payment, the rest goes to the treasury. The
/// airdrop is paid in the reward asset at `airdrop_rate` per token.
/// Returns `None` if any of the amounts overflows.
pub fn calc_mint_shares(
    price: AssetAmount,
    airdrop_rate: AssetAmount,
    quantity: ContractTokenAmount,
    royalty: Percentage,
) -> Option<MintShares> {
    let quantity = quantity.0 as u128;
    let payment = price.0.checked_mul(quantity)?;
    let royalty = royalty.of(AssetAmount::from(payment))?;
    let treasury = payment.checked_sub(royalty.0)?;
    let airdrop = airdrop_rate.0.checked_mul(quantity)?;

    Some(MintShares {
        payment: AssetAmount::from(payment),
        royalty,
        treasury: AssetAmount::from(treasury),
        airdrop: AssetAmount::from(airdrop),
    })
}

#[concordium_cfg_test]
mod tests {
    use super::*;

    fn units(n: u128) -> AssetAmount {
        whole_units(n).unwrap()
    }

    #[concordium_test]
    fn test_mint_shares() {
        let shares = calc_mint_shares(
            units(20),
            units(10),
            ContractTokenAmount::from(150),
            Percentage::from_percent(5),
        );

        claim_eq!(
            shares,
            Some(MintShares {
                payment: units(3_000),
                royalty: units(150),
                treasury: units(2_850),
                airdrop: units(1_500),
            })
        );
    }

    #[concordium_test]
    fn test_mint_shares_free_lot() {
        let shares = calc_mint_shares(
            AssetAmount::from(0),
            units(10),
            ContractTokenAmount::from(3),
            Percentage::from_percent(5),
        )
        .unwrap();

        claim_eq!(shares.payment, AssetAmount::from(0));
        claim_eq!(shares.royalty, AssetAmount::from(0));
        claim_eq!(shares.treasury, AssetAmount::from(0));
        claim_eq!(shares.airdrop, units(30));
    }

    #[concordium_test]
    fn test_mint_shares_overflow() {
        let shares = calc_mint_shares(
            AssetAmount::from(u128::MAX),
            units(1),
            ContractTokenAmount::from(2),
            Percentage::from_percent(5),
        );
        claim_eq!(shares, None);

        // Payment fits, royalty scaling does not
        let shares = calc_mint_shares(
            AssetAmount::from(u128::MAX / 2),
            units(1),
            ContractTokenAmount::from(1),
            Percentage::from_percent(5),
        );
        claim_eq!(shares, None);
    }

    #[concordium_test]
    fn test_whole_units() {
        claim_eq!(whole_units(0), Some(AssetAmount::from(0)));
        claim_eq!(
            whole_units(15),
            Some(AssetAmount::from(15_000_000_000_000_000_000))
        );
        claim_eq!(whole_units(u128::MAX), None);
    }
}
