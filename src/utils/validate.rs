use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Z|a-z]{2,}$").expect("Invalid email regex")
});

pub fn validate_email(email: &str) -> Result<(), &'static str> {
    // 邮箱格式校验：必须包含 @ 和 .
    if !EMAIL_RE.is_match(email) {
        return Err("Email format is invalid");
    }
    Ok(())
}

pub fn validate_name(name: &str) -> Result<(), &'static str> {
    // 名称长度校验：2 <= x <= 100
    let len = name.trim().chars().count();
    if len < 2 || len > 100 {
        return Err("Name must be between 2 and 100 characters");
    }
    Ok(())
}

pub fn validate_password(password: &str) -> Result<(), &'static str> {
    // 密码最短长度校验
    if password.len() < 6 {
        return Err("Password must be at least 6 characters long");
    }
    Ok(())
}

pub fn validate_bio(bio: &str) -> Result<(), &'static str> {
    if bio.chars().count() > 500 {
        return Err("Bio must not exceed 500 characters");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_email() {
        assert!(validate_email("user@example.com").is_ok());
        assert!(validate_email("first.last+tag@sub.domain.org").is_ok());
    }

    #[test]
    fn test_invalid_email() {
        assert!(validate_email("no-at-sign").is_err());
        assert!(validate_email("user@nodot").is_err());
        assert!(validate_email("@example.com").is_err());
    }

    #[test]
    fn test_name_bounds() {
        assert!(validate_name("Ed").is_ok());
        assert!(validate_name("A").is_err());
        assert!(validate_name(&"x".repeat(101)).is_err());
    }

    #[test]
    fn test_password_length() {
        assert!(validate_password("secret").is_ok());
        assert!(validate_password("short").is_err());
    }

    #[test]
    fn test_bio_limit() {
        assert!(validate_bio("").is_ok());
        assert!(validate_bio(&"b".repeat(501)).is_err());
    }
}
