//! As-you-type masks for the date and phone inputs.

/// Keeps the digits of `input` and lays them out as `DD/MM/YYYY`.
///
/// Slashes appear as soon as a group is complete, so `"12"` becomes `"12/"`.
pub fn mask_date(input: &str) -> String {
    let digits: String = input.chars().filter(char::is_ascii_digit).take(8).collect();
    let mut masked = digits.clone();
    if digits.len() >= 2 {
        masked = format!("{}/{}", &digits[..2], &digits[2..]);
    }
    if digits.len() >= 4 {
        masked = format!("{}/{}", &masked[..5], &digits[4..]);
    }
    masked
}

/// Formats a Brazilian phone number: `(00) 0000-0000` for landlines and
/// `(00) 00000-0000` for mobiles.
pub fn mask_phone(input: &str) -> String {
    let digits: String = input.chars().filter(char::is_ascii_digit).take(11).collect();
    if digits.len() <= 2 {
        return digits;
    }
    let (area, rest) = digits.split_at(2);
    let split = if digits.len() <= 10 { 4 } else { 5 };
    if rest.len() > split {
        format!("({area}) {}-{}", &rest[..split], &rest[split..])
    } else {
        format!("({area}) {rest}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn date_mask_grows_with_input() {
        assert_eq!(mask_date("1"), "1");
        assert_eq!(mask_date("12"), "12/");
        assert_eq!(mask_date("123"), "12/3");
        assert_eq!(mask_date("1205"), "12/05/");
        assert_eq!(mask_date("12051980"), "12/05/1980");
        assert_eq!(mask_date("12/05/19801"), "12/05/1980");
        assert_eq!(mask_date("ab"), "");
    }

    #[test]
    fn phone_mask_for_landline_and_mobile() {
        assert_eq!(mask_phone("11"), "11");
        assert_eq!(mask_phone("113"), "(11) 3");
        assert_eq!(mask_phone("1123456789"), "(11) 2345-6789");
        assert_eq!(mask_phone("11912345678"), "(11) 91234-5678");
        assert_eq!(mask_phone("(11) 91234-56789"), "(11) 91234-5678");
    }
}
