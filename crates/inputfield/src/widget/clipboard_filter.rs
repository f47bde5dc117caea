//! Admission of pasted text.

use super::events::RejectReason;
use super::limiter::CharacterLimiter;
use super::mode::ActiveMode;
use super::numeric::is_numeric_string;
use super::policy::{Ipv4Policy, PasteValidation};
use super::validator::is_valid_ipv4;

/// Decide whether `candidate` may replace the buffer.
///
/// `buffer` is the logical value before the paste. Under the legacy IPv4
/// policy it, not the candidate, is what gets validated.
pub fn check_clipboard_content(
    candidate: &str,
    buffer: &str,
    mode: ActiveMode<'_>,
    limiter: &CharacterLimiter,
    policy: &Ipv4Policy,
) -> Result<(), RejectReason> {
    let candidate_len = candidate.chars().count();

    match mode {
        ActiveMode::Default => {
            if limiter.is_at_limit(candidate_len, mode) {
                return Err(RejectReason::AtLimit);
            }
        }
        ActiveMode::Numeric(_) => {
            if limiter.is_at_limit(candidate_len, mode) {
                return Err(RejectReason::AtLimit);
            }
            if !is_numeric_string(candidate) {
                return Err(RejectReason::NotNumeric);
            }
        }
        ActiveMode::Ipv4 => {
            let subject = match policy.paste {
                PasteValidation::LiveBuffer => buffer,
                PasteValidation::Candidate => candidate,
            };
            if !is_valid_ipv4(subject) {
                return Err(RejectReason::InvalidAddress);
            }
        }
    }

    Ok(())
}

/// Boolean form of [`check_clipboard_content`].
pub fn is_clipboard_content_acceptable(
    candidate: &str,
    buffer: &str,
    mode: ActiveMode<'_>,
    limiter: &CharacterLimiter,
    policy: &Ipv4Policy,
) -> bool {
    check_clipboard_content(candidate, buffer, mode, limiter, policy).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widget::mode::NumericConfig;

    #[test]
    fn test_default_mode_limit() {
        let limiter = CharacterLimiter::new(5);
        let policy = Ipv4Policy::default();
        let check = |s: &str| check_clipboard_content(s, "", ActiveMode::Default, &limiter, &policy);

        assert_eq!(check("abcd"), Ok(()));
        assert_eq!(check("abcde"), Err(RejectReason::AtLimit));
        // Exact-equality semantics: longer content passes.
        assert_eq!(check("abcdef"), Ok(()));
    }

    #[test]
    fn test_default_mode_counts_chars() {
        let limiter = CharacterLimiter::new(3);
        let policy = Ipv4Policy::default();
        assert!(is_clipboard_content_acceptable(
            "€€",
            "",
            ActiveMode::Default,
            &limiter,
            &policy
        ));
    }

    #[test]
    fn test_numeric_mode() {
        let cfg = NumericConfig::default();
        let mode = ActiveMode::Numeric(&cfg);
        let limiter = CharacterLimiter::default();
        let policy = Ipv4Policy::default();

        assert!(is_clipboard_content_acceptable("123.45", "", mode, &limiter, &policy));
        assert_eq!(
            check_clipboard_content("abc", "", mode, &limiter, &policy),
            Err(RejectReason::NotNumeric)
        );
        assert_eq!(
            check_clipboard_content("12 €", "", mode, &limiter, &policy),
            Err(RejectReason::NotNumeric)
        );
    }

    #[test]
    fn test_ipv4_legacy_checks_live_buffer() {
        let limiter = CharacterLimiter::default();
        let policy = Ipv4Policy::legacy();

        assert!(is_clipboard_content_acceptable(
            "garbage",
            "10.0.0.1",
            ActiveMode::Ipv4,
            &limiter,
            &policy
        ));
        assert!(!is_clipboard_content_acceptable(
            "10.0.0.1",
            "",
            ActiveMode::Ipv4,
            &limiter,
            &policy
        ));
    }

    #[test]
    fn test_ipv4_corrected_checks_candidate() {
        let limiter = CharacterLimiter::default();
        let policy = Ipv4Policy::corrected();

        assert!(is_clipboard_content_acceptable(
            "10.0.0.1",
            "",
            ActiveMode::Ipv4,
            &limiter,
            &policy
        ));
        assert_eq!(
            check_clipboard_content("garbage", "10.0.0.1", ActiveMode::Ipv4, &limiter, &policy),
            Err(RejectReason::InvalidAddress)
        );
    }
}
