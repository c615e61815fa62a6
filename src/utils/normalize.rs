/// Lowercase and trim an email address
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Strip hyphens and spaces from a phone number. Empty input yields `None`.
pub fn format_phone_number(phone: Option<&str>) -> Option<String> {
    let phone = phone.filter(|p| !p.is_empty())?;
    Some(phone.chars().filter(|c| *c != '-' && *c != ' ').collect::<String>().trim().to_string())
}
