use super::*;

/// A fungible token held in an external CIS-2 contract, used as payment or
/// reward asset.
#[derive(Debug, Serialize, SchemaType, PartialEq, Eq, Clone)]
pub struct Cis2Asset {
    /// Address of the CIS-2 contract.
    pub contract: ContractAddress,
    /// Token ID of the asset within the contract.
    pub id: AssetTokenId,
}

impl Cis2Asset {
    pub fn new(contract: ContractAddress, id: AssetTokenId) -> Self {
        Self { contract, id }
    }

    /// Check whether `address` is the contract of this asset.
    pub fn is_issued_by(&self, address: &Address) -> bool {
        matches!(address, Address::Contract(contract) if *contract == self.contract)
    }
}
