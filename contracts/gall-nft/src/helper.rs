use super::*;

/// Build a string from the metadata base URL appended with the token ID
/// encoded as hex.
pub fn build_token_metadata_url(uri: &str, token_id: &ContractTokenId) -> String {
    let mut token_metadata_url = String::from(uri);
    push_token_id(&mut token_metadata_url, token_id);
    token_metadata_url
}

pub fn push_token_id(string: &mut String, token_id: &ContractTokenId) {
    for byte in token_id.0.to_le_bytes().iter() {
        string.push(bits_to_hex_char(byte >> 4));
        string.push(bits_to_hex_char(byte & 0xF));
    }
}

pub fn bits_to_hex_char(bits: u8) -> char {
    match bits & 0xF {
        0x0..=0x9 => (bits + b'0') as char,
        0xA..=0xF => (bits - 10 + b'a') as char,
        _ => unreachable!(),
    }
}

pub fn token_metadata_event(
    uri: &str,
    token_id: ContractTokenId,
) -> Cis2Event<ContractTokenId, ContractTokenAmount> {
    Cis2Event::TokenMetadata(TokenMetadataEvent {
        token_id,
        metadata_url: MetadataUrl {
            url: build_token_metadata_url(uri, &token_id),
            hash: None,
        },
    })
}

#[concordium_cfg_test]
mod tests {
    use super::*;

    #[concordium_test]
    fn token_id_formatting() {
        claim_eq!(
            build_token_metadata_url("ipfs://gall/", &TokenIdU32(0)),
            "ipfs://gall/00000000"
        );
        claim_eq!(
            build_token_metadata_url("ipfs://gall/", &TokenIdU32(1)),
            "ipfs://gall/01000000"
        );
        claim_eq!(
            build_token_metadata_url("", &TokenIdU32(0xAB_01CD)),
            "cd01ab00"
        );
    }
}
