use super::*;

/// Percentage with micro-percent precision (`100%` is `100_000_000`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, SchemaType)]
pub struct Percentage(u64);

const HUNDRED_PERCENT: u128 = 100_000_000;

impl Percentage {
    pub fn from_micro_percent(micro_percent: u64) -> Self {
        Self(micro_percent)
    }

    pub fn from_percent(percent: u64) -> Self {
        Self(percent * 1_000_000)
    }

    /// Share of `amount` this percentage stands for, rounded down.
    /// Returns `None` on overflow.
    pub fn of(&self, amount: AssetAmount) -> Option<AssetAmount> {
        amount
            .0
            .checked_mul(self.0 as u128)
            .map(|scaled| AssetAmount::from(scaled / HUNDRED_PERCENT))
    }
}

#[concordium_cfg_test]
mod tests {
    use super::*;

    #[concordium_test]
    fn test_percentage_of_amount() {
        let five = Percentage::from_percent(5);

        claim_eq!(five, Percentage::from_micro_percent(5_000_000));
        claim_eq!(
            five.of(AssetAmount::from(3_000)),
            Some(AssetAmount::from(150))
        );
        // Rounded down
        claim_eq!(five.of(AssetAmount::from(19)), Some(AssetAmount::from(0)));
        claim_eq!(
            Percentage::from_micro_percent(2_500_000).of(AssetAmount::from(1_000)),
            Some(AssetAmount::from(25))
        );
        claim_eq!(five.of(AssetAmount::from(u128::MAX)), None);
    }
}
