/// The coins the bot can currently answer about, in the order they are
/// announced to the user. Identifiers match the upstream ticker path
/// segments exactly.
pub const AVAILABLE_COINS: [&str; 10] = [
    "bitcoin",
    "ethereum",
    "ripple",
    "bitcoin-cash",
    "cardano",
    "stellar",
    "neo",
    "litecoin",
    "eos",
    "nem",
];

/// Exact, case-sensitive membership check.
pub fn is_available(coin: &str) -> bool {
    AVAILABLE_COINS.contains(&coin)
}

/// Comma-joined listing used by both the greeting and the apology, so the
/// announced set can never drift from the allow-list.
pub fn listing() -> String {
    AVAILABLE_COINS.join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn membership_is_exact_and_case_sensitive() {
        assert!(is_available("bitcoin"));
        assert!(is_available("bitcoin-cash"));
        assert!(!is_available("Bitcoin"));
        assert!(!is_available("BITCOIN"));
        assert!(!is_available("dogecoin"));
        assert!(!is_available(""));
    }

    #[test]
    fn listing_preserves_declared_order() {
        assert_eq!(
            listing(),
            "bitcoin, ethereum, ripple, bitcoin-cash, cardano, stellar, neo, litecoin, eos, nem"
        );
    }
}
