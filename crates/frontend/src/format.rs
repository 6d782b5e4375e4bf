//! Display helpers

/// Abbreviate a wallet address for display: `UQabcd...uvwxyz`.
/// Short addresses come back unchanged.
pub fn format_address(address: &str) -> String {
    if address.len() <= 20 {
        return address.to_string();
    }
    format!("{}...{}", &address[..6], &address[address.len() - 6..])
}

/// Render a TON amount with two decimal places and unit
pub fn format_ton(amount: f64) -> String {
    format!("{amount:.2} TON")
}

/// Render a USD amount with two decimal places and unit
pub fn format_usd(amount: f64) -> String {
    format!("${amount:.2}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn abbreviates_long_addresses() {
        let address = "UQAbCdEfGhIjKlMnOpQrStUvWxYz012345678901234567";
        assert_eq!(format_address(address), "UQAbCd...234567");
    }

    #[test]
    fn keeps_short_addresses() {
        assert_eq!(format_address("UQshort"), "UQshort");
        assert_eq!(format_address(""), "");
    }

    #[test]
    fn formats_amounts() {
        assert_eq!(format_ton(12.5), "12.50 TON");
        assert_eq!(format_usd(0.0), "$0.00");
    }
}
