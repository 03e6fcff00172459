/// Tag for the Custom Sale event.
pub const SALE_TAG: u8 = u8::MAX - 5;

/// Tag for the Custom Extra Info event.
pub const EXTRA_INFO_TAG: u8 = u8::MAX - 6;

/// Tag for the Custom Withdraw event.
pub const WITHDRAW_TAG: u8 = u8::MAX - 7;

/// Number of decimals of the payment and reward asset amounts.
pub const ASSET_DECIMALS: u32 = 18;

/// Name of the CIS-2 receive hook every asset contract calls back into.
pub const ON_RECEIVING_CIS2: &str = "onReceivingCIS2";
