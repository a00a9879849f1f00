use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};

use crate::errors::{LmsError, Result};

/// 解析作业截止时间
///
/// 依次尝试 RFC 3339、无时区的日期时间、纯日期三种写法，
/// 无时区的输入按 UTC 处理。
pub fn parse_due_date(input: &str) -> Result<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Ok(dt.with_timezone(&Utc));
    }

    for format in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(input, format) {
            return Ok(naive.and_utc());
        }
    }

    if let Ok(date) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
        return Ok(date.and_time(NaiveTime::MIN).and_utc());
    }

    Err(LmsError::date_parse(format!("无法解析日期时间: {input}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rfc3339() {
        let dt = parse_due_date("2026-01-15T10:00:00Z").unwrap();
        assert_eq!(dt.timestamp(), 1768471200);
    }

    #[test]
    fn test_rfc3339_with_offset() {
        let with_offset = parse_due_date("2026-01-15T12:00:00+02:00").unwrap();
        let utc = parse_due_date("2026-01-15T10:00:00Z").unwrap();
        assert_eq!(with_offset, utc);
    }

    #[test]
    fn test_naive_datetime() {
        let dt = parse_due_date("2026-01-15T10:00:00").unwrap();
        assert_eq!(dt.timestamp(), 1768471200);
    }

    #[test]
    fn test_date_only() {
        let dt = parse_due_date("2026-01-15").unwrap();
        assert_eq!(dt.to_rfc3339(), "2026-01-15T00:00:00+00:00");
    }

    #[test]
    fn test_garbage_rejected() {
        assert!(parse_due_date("not-a-date").is_err());
        assert!(parse_due_date("2026-13-45").is_err());
    }
}
