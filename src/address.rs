use {solana_pubkey::Pubkey, std::str::FromStr};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AddressError {
    #[error("Wallet address is empty")]
    Empty,
    #[error("Invalid address: {0}")]
    Invalid(String),
}

/// Trim and validate a submitted wallet address
///
/// Returns the trimmed address when it parses as a base58 public key.
pub fn parse_address(input: &str) -> Result<String, AddressError> {
    let address = input.trim();
    if address.is_empty() {
        return Err(AddressError::Empty);
    }

    Pubkey::from_str(address).map_err(|e| AddressError::Invalid(e.to_string()))?;
    Ok(address.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_address_is_trimmed() {
        let address = parse_address("  11111111111111111111111111111111 \n").unwrap();
        assert_eq!(address, "11111111111111111111111111111111");
    }

    #[test]
    fn test_empty_address() {
        assert_eq!(parse_address(""), Err(AddressError::Empty));
        assert_eq!(parse_address("   "), Err(AddressError::Empty));
    }

    #[test]
    fn test_invalid_address() {
        assert!(matches!(parse_address("not-a-wallet"), Err(AddressError::Invalid(_))));
        // '0' is not in the base58 alphabet
        assert!(matches!(
            parse_address("0000000000000000000000000000000000000000000"),
            Err(AddressError::Invalid(_))
        ));
    }
}
