use super::*;

/// Number of tokens of a lot that can be minted as long as the owner has not
/// set an extra price for it.
pub const MAX_MINT_WITHOUT_EXTRA_INFO: u64 = 100;

/// Share of every sale paid to the royalty wallet, in percent.
pub const ROYALTY_PERCENT: u64 = 5;

/// The standards this contract supports.
pub const SUPPORTS_STANDARDS: [StandardIdentifier<'static>; 2] =
    [CIS0_STANDARD_IDENTIFIER, CIS2_STANDARD_IDENTIFIER];
