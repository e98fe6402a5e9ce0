//! Shape checks mirroring the client's account and card constraints.
//!
//! The client's `AccountNumber` and `MaskedCardNumber` types enforce the
//! same rules. Keeping them in sync guarantees every fixture converts into
//! client domain types without error.
//!
//! # Validation Rules
//!
//! - Account numbers are exactly ten ASCII digits.
//! - Masked card numbers hide every digit except the last four, e.g.
//!   `**** **** **** 4532`.

/// Required length of an account number.
pub const ACCOUNT_NUMBER_LEN: usize = 10;

/// Number of trailing card digits allowed to stay visible.
pub const VISIBLE_CARD_DIGITS: usize = 4;

/// Returns `true` when `value` is a ten-digit account number.
///
/// # Examples
///
/// ```
/// use fixture_data::is_valid_account_number;
///
/// assert!(is_valid_account_number("0123456789"));
/// assert!(!is_valid_account_number("012345678"));
/// assert!(!is_valid_account_number("01234S6789"));
/// ```
#[must_use]
pub fn is_valid_account_number(value: &str) -> bool {
    value.len() == ACCOUNT_NUMBER_LEN && value.chars().all(|c| c.is_ascii_digit())
}

/// Returns `true` when `value` shows at most its last four digits.
///
/// # Examples
///
/// ```
/// use fixture_data::is_masked_card_number;
///
/// assert!(is_masked_card_number("**** **** **** 4532"));
/// assert!(!is_masked_card_number("4532 1111 2222 4532"));
/// ```
#[must_use]
pub fn is_masked_card_number(value: &str) -> bool {
    let digits = value.chars().filter(char::is_ascii_digit).count();
    let masked = value.chars().filter(|c| *c == '*').count();
    let trailing_digits = value
        .chars()
        .rev()
        .take_while(char::is_ascii_digit)
        .count();

    digits == VISIBLE_CARD_DIGITS
        && trailing_digits == VISIBLE_CARD_DIGITS
        && masked > 0
        && value
            .chars()
            .all(|c| c.is_ascii_digit() || c == '*' || c == ' ')
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("0000000000", true)]
    #[case("9876543210", true)]
    #[case("", false)]
    #[case("12345678901", false)]
    #[case("12345 6789", false)]
    fn account_number_rules(#[case] value: &str, #[case] expected: bool) {
        assert_eq!(is_valid_account_number(value), expected);
    }

    #[rstest]
    #[case("**** **** **** 4532", true)]
    #[case("************8810", true)]
    #[case("**** **** 1234 4532", false)]
    #[case("**** **** **** 453", false)]
    #[case("**** **** **** 45x2", false)]
    #[case("1234", false)]
    fn masked_card_rules(#[case] value: &str, #[case] expected: bool) {
        assert_eq!(is_masked_card_number(value), expected);
    }
}
