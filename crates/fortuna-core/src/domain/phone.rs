/// Strips every character that is not an ASCII digit or `+`, preserving
/// relative order.
pub fn clean_phone_input(value: &str) -> String {
    value
        .chars()
        .filter(|ch| ch.is_ascii_digit() || *ch == '+')
        .collect()
}

/// Normalizes free-form user input into the canonical 11-digit national
/// form (`79xxxxxxxxx`). Recognized shapes: `79xxxxxxxxx`, `9xxxxxxxxx`,
/// `+79xxxxxxxxx`, `89xxxxxxxxx`. Anything else, including a `+` anywhere
/// but the leading position, yields `None`.
pub fn normalize_phone(value: &str) -> Option<String> {
    let cleaned = clean_phone_input(value);

    if let Some(digits) = cleaned.strip_prefix('+') {
        if digits.len() == 11
            && digits.starts_with("79")
            && digits.bytes().all(|b| b.is_ascii_digit())
        {
            return Some(digits.to_string());
        }
        return None;
    }

    // A stray internal `+` survives cleaning and fails this check.
    if !cleaned.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    if cleaned.len() == 11 && cleaned.starts_with("79") {
        return Some(cleaned);
    }
    if cleaned.len() == 10 && cleaned.starts_with('9') {
        return Some(format!("7{cleaned}"));
    }
    if cleaned.len() == 11 && cleaned.starts_with("89") {
        return Some(format!("7{}", &cleaned[1..]));
    }
    None
}
