/// Result of checking a promo code. Neither outcome changes the cart total.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromoOutcome {
    Accepted,
    Rejected,
}

/// Compares `entered` against the configured code, ignoring case and surrounding whitespace.
pub fn check_promo_code(entered: &str, valid_code: &str) -> PromoOutcome {
    if entered.trim().eq_ignore_ascii_case(valid_code.trim()) && !entered.trim().is_empty() {
        PromoOutcome::Accepted
    } else {
        PromoOutcome::Rejected
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_any_case() {
        for code in ["SAVE10", "save10", "Save10", " save10 "] {
            assert_eq!(check_promo_code(code, "SAVE10"), PromoOutcome::Accepted);
        }
    }

    #[test]
    fn rejects_everything_else() {
        for code in ["", "   ", "SAVE20", "SAVE 10", "NEWUSER20"] {
            assert_eq!(check_promo_code(code, "SAVE10"), PromoOutcome::Rejected);
        }
    }
}
