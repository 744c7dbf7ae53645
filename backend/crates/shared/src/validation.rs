//! Request Validation
//!
//! Schema-based structural validation of incoming payloads.
//!
//! A [`Schema`] only inspects a payload; [`validate`] hands the very same
//! value back on success, so callers never work on a coerced copy. Failures
//! are returned as data ([`ValidationError`]) and never panic.
//!
//! ## Examples
//! ```rust
//! use kernel::validation::{Rules, email, non_empty, validate};
//!
//! #[derive(Debug)]
//! struct Signup {
//!     email: String,
//!     name: String,
//! }
//!
//! let schema = Rules::new()
//!     .field(|s: &Signup| s.email.as_str(), email("email"))
//!     .field(|s: &Signup| s.name.as_str(), non_empty("name"));
//!
//! let ok = validate(Signup { email: "a@b.co".into(), name: "Ada".into() }, &schema);
//! assert!(ok.is_ok());
//!
//! let err = validate(Signup { email: "nope".into(), name: "Ada".into() }, &schema);
//! assert_eq!(err.unwrap_err().error, "email: Invalid email address");
//! ```

use serde::Serialize;
use thiserror::Error;

/// スキーマが理由を返さずに失敗した場合のメッセージ
pub const DEFAULT_ERROR_MESSAGE: &str = "Invalid input";

/// メールアドレスの最大長（RFC 5321）
const EMAIL_MAX_LENGTH: usize = 254;

/// [`Schema::safe_parse`] の結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SafeParse {
    Success,
    Failure(String),
}

/// ペイロードを消費せずに検査できるスキーマ
pub trait Schema<T: ?Sized> {
    fn safe_parse(&self, payload: &T) -> SafeParse;
}

impl<T, F> Schema<T> for F
where
    T: ?Sized,
    F: Fn(&T) -> Result<(), String>,
{
    fn safe_parse(&self, payload: &T) -> SafeParse {
        match self(payload) {
            Ok(()) => SafeParse::Success,
            Err(message) => SafeParse::Failure(message),
        }
    }
}

/// 不正なペイロードに対するエラー記述子
///
/// `{"error": "..."}` としてシリアライズされる。メッセージは空にならない。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Error)]
#[error("{error}")]
pub struct ValidationError {
    pub error: String,
}

impl ValidationError {
    pub fn new(message: impl Into<String>) -> Self {
        let message = message.into();
        let error = if message.trim().is_empty() {
            DEFAULT_ERROR_MESSAGE.to_string()
        } else {
            message
        };
        Self { error }
    }
}

/// `payload` を `schema` で検証する
///
/// ## Returns
/// * `Ok(payload)` - 受け取ったペイロードをそのまま返す（コピーや変換はしない）
/// * `Err(ValidationError)` - 最初に失敗したルールのメッセージ
pub fn validate<T, S>(payload: T, schema: &S) -> Result<T, ValidationError>
where
    S: Schema<T> + ?Sized,
{
    match schema.safe_parse(&payload) {
        SafeParse::Success => Ok(payload),
        SafeParse::Failure(message) => Err(ValidationError::new(message)),
    }
}

type BoxedRule<T> = Box<dyn Fn(&T) -> Result<(), String> + Send + Sync>;

/// 順序付きルール一覧（最初に失敗したルールが採用される）
pub struct Rules<T> {
    rules: Vec<BoxedRule<T>>,
}

impl<T: 'static> Rules<T> {
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// ペイロード全体に対するルールを追加
    pub fn rule<F>(mut self, rule: F) -> Self
    where
        F: Fn(&T) -> Result<(), String> + Send + Sync + 'static,
    {
        self.rules.push(Box::new(rule));
        self
    }

    /// `get` で取り出したフィールドに対するルールを追加
    pub fn field<V, G, C>(self, get: G, check: C) -> Self
    where
        V: ?Sized + 'static,
        G: Fn(&T) -> &V + Send + Sync + 'static,
        C: Fn(&V) -> Result<(), String> + Send + Sync + 'static,
    {
        self.rule(move |payload: &T| check(get(payload)))
    }
}

impl<T: 'static> Default for Rules<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Schema<T> for Rules<T> {
    fn safe_parse(&self, payload: &T) -> SafeParse {
        for rule in &self.rules {
            if let Err(message) = rule(payload) {
                return SafeParse::Failure(message);
            }
        }
        SafeParse::Success
    }
}

// ============================================================================
// Field rules
// ============================================================================

/// 空白以外の文字を含むこと
pub fn non_empty(field: &'static str) -> impl Fn(&str) -> Result<(), String> + Send + Sync {
    move |value: &str| {
        if value.trim().is_empty() {
            Err(format!("{field}: Required"))
        } else {
            Ok(())
        }
    }
}

/// `max` 文字以下であること
pub fn max_len(
    field: &'static str,
    max: usize,
) -> impl Fn(&str) -> Result<(), String> + Send + Sync {
    move |value: &str| {
        if value.chars().count() > max {
            Err(format!("{field}: Must be at most {max} characters"))
        } else {
            Ok(())
        }
    }
}

/// メールアドレスの形式であること
pub fn email(field: &'static str) -> impl Fn(&str) -> Result<(), String> + Send + Sync {
    move |value: &str| {
        if is_valid_email(value.trim()) {
            Ok(())
        } else {
            Err(format!("{field}: Invalid email address"))
        }
    }
}

/// ホスト付きの `http` / `https` 絶対 URL であること
pub fn http_url(field: &'static str) -> impl Fn(&str) -> Result<(), String> + Send + Sync {
    move |value: &str| match url::Url::parse(value) {
        Ok(parsed)
            if matches!(parsed.scheme(), "http" | "https") && parsed.host_str().is_some() =>
        {
            Ok(())
        }
        _ => Err(format!("{field}: Invalid URL")),
    }
}

fn is_valid_email(email: &str) -> bool {
    if email.is_empty() || email.len() > EMAIL_MAX_LENGTH {
        return false;
    }

    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    if local.is_empty() || local.len() > 64 || local.chars().any(char::is_whitespace) {
        return false;
    }

    if domain.is_empty() || !domain.contains('.') {
        return false;
    }

    // Also rejects a second '@'
    if !domain
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '.' || c == '-')
    {
        return false;
    }

    !(domain.starts_with('.')
        || domain.ends_with('.')
        || domain.starts_with('-')
        || domain.ends_with('-'))
}

// ============================================================================
// Axum conversions (feature-gated)
// ============================================================================

#[cfg(feature = "axum")]
impl axum::response::IntoResponse for ValidationError {
    fn into_response(self) -> axum::response::Response {
        (axum::http::StatusCode::BAD_REQUEST, axum::Json(self)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Transfer {
        email: String,
        memo: String,
    }

    fn transfer_schema() -> Rules<Transfer> {
        Rules::new()
            .field(|t: &Transfer| t.email.as_str(), email("email"))
            .field(|t: &Transfer| t.memo.as_str(), non_empty("memo"))
            .field(|t: &Transfer| t.memo.as_str(), max_len("memo", 10))
    }

    fn transfer(email: &str, memo: &str) -> Transfer {
        Transfer {
            email: email.to_string(),
            memo: memo.to_string(),
        }
    }

    #[test]
    fn test_valid_payload_is_returned_unchanged() {
        let payload = transfer("ada@example.com", "rent");
        let validated = validate(payload.clone(), &transfer_schema()).unwrap();
        assert_eq!(validated, payload);
    }

    #[test]
    fn test_revalidation_is_idempotent() {
        let schema = transfer_schema();
        let once = validate(transfer("ada@example.com", "rent"), &schema).unwrap();
        let twice = validate(once.clone(), &schema).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_first_failing_rule_wins() {
        let err = validate(transfer("not-an-email", ""), &transfer_schema()).unwrap_err();
        assert_eq!(err.error, "email: Invalid email address");

        let err = validate(transfer("ada@example.com", "   "), &transfer_schema()).unwrap_err();
        assert_eq!(err.error, "memo: Required");

        let err =
            validate(transfer("ada@example.com", "groceries!!"), &transfer_schema()).unwrap_err();
        assert_eq!(err.error, "memo: Must be at most 10 characters");
    }

    #[test]
    fn test_closure_schema() {
        let positive = |n: &i64| {
            if *n > 0 {
                Ok(())
            } else {
                Err("amount must be positive".to_string())
            }
        };
        assert_eq!(validate(5_i64, &positive), Ok(5));
        assert_eq!(
            validate(-1_i64, &positive).unwrap_err().error,
            "amount must be positive"
        );
    }

    #[test]
    fn test_empty_failure_message_is_replaced() {
        let silent = |_: &u8| -> Result<(), String> { Err(String::new()) };
        let err = validate(1_u8, &silent).unwrap_err();
        assert_eq!(err.error, DEFAULT_ERROR_MESSAGE);
    }

    #[test]
    fn test_email_rule() {
        let check = email("email");
        assert!(check("user@example.com").is_ok());
        assert!(check("user.name+tag@example.co.jp").is_ok());
        assert!(check("").is_err());
        assert!(check("userexample.com").is_err());
        assert!(check("user@").is_err());
        assert!(check("@example.com").is_err());
        assert!(check("user@@example.com").is_err());
        assert!(check("user@example").is_err());
        assert!(check("user@-example.com").is_err());
    }

    #[test]
    fn test_http_url_rule() {
        let check = http_url("resetUrl");
        assert!(check("https://moneyger.app/reset-password?token=abc").is_ok());
        assert!(check("http://localhost:3000/reset-password").is_ok());
        assert!(check("ftp://moneyger.app/file").is_err());
        assert!(check("/reset-password").is_err());
        assert!(check("not a url").is_err());
    }

    #[test]
    fn test_validation_error_serializes_as_error_object() {
        let json = serde_json::to_string(&ValidationError::new("email: Required")).unwrap();
        assert_eq!(json, r#"{"error":"email: Required"}"#);
    }
}
