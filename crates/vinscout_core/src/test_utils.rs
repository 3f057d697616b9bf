use crate::vin::{CHECK_DIGIT_POSITION, check_digit};

/// Replaces the 9th character of a 17-character body with its computed
/// check digit.
pub fn with_check_digit(body: &str) -> String {
    let expected = check_digit(body).expect("body must be 17 mappable characters");
    body.chars()
        .enumerate()
        .map(|(i, c)| if i == CHECK_DIGIT_POSITION { expected } else { c })
        .collect()
}
