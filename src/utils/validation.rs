/// Extract the domain part of an email address
/// the address must contain exactly one '@'
pub fn extract_domain(email: &str) -> Option<&str> {
    let mut parts = email.split('@');
    parts.next()?;
    let domain = parts.next()?;
    match parts.next() {
        Some(_) => None,
        None => Some(domain),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_domain() {
        assert_eq!(extract_domain("john@company.com"), Some("company.com"));
        assert_eq!(extract_domain("john@"), Some(""));
        assert_eq!(extract_domain("@company.com"), Some("company.com"));
    }

    #[test]
    fn test_extract_domain_invalid() {
        assert_eq!(extract_domain("john"), None);
        assert_eq!(extract_domain(""), None);
        assert_eq!(extract_domain("john@x@company.com"), None);
    }
}
