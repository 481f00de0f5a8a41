//! Unit tests for [`gemini_client::mask_token`].
//!
//! API keys are masked for safe logging: first 7 chars + `***` + last 4 chars.
//! Keys of length ≤ 11 are fully masked as `***`.

use gemini_client::mask_token;

/// **Test: Short or empty tokens are fully masked.**
#[test]
fn mask_token_short_returns_all_star() {
    assert_eq!(mask_token(""), "***");
    assert_eq!(mask_token("a"), "***");
    assert_eq!(mask_token("AIzaSy123"), "***");
    assert_eq!(mask_token("AIzaSy12345"), "***");
}

/// **Test: Long tokens show first 7 and last 4 characters.**
#[test]
fn mask_token_long_shows_head_and_tail() {
    assert_eq!(mask_token("AIzaSyabcdefghijklmnop"), "AIzaSya***mnop");
    assert_eq!(mask_token("AIzaSy123456"), "AIzaSy1***3456");
}

/// **Test: Typical Gemini key format keeps the prefix and a 14-char mask.**
#[test]
fn mask_token_typical_gemini_key() {
    let key = "AIzaSyD-1234567890abcdefghijklmnopqrs";
    let masked = mask_token(key);
    assert!(masked.starts_with("AIzaSyD"));
    assert!(masked.ends_with("pqrs"));
    assert_eq!(masked.len(), 7 + 3 + 4);
}

/// **Test: Multi-byte characters never split a char boundary.**
#[test]
fn mask_token_multibyte_is_safe() {
    let masked = mask_token("ключключключключ");
    assert!(masked.contains("***"));
}
