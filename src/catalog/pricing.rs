//! Price presentation
//!
//! Prices are stored as whole VND. Vietnamese visitors see that amount as is;
//! everyone else sees it divided by a fixed rate and shown in USD. Nothing
//! here changes the stored integer.

use super::types::Language;

/// Fixed presentation rate between VND and USD
pub const VND_PER_USD: u64 = 25_000;

/// A price ready for display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Money {
    Vnd(u64),
    Usd { cents: u64 },
}

impl std::fmt::Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            // 150.000 ₫
            Money::Vnd(amount) => write!(f, "{} ₫", group_thousands(*amount, '.')),
            // $1,234.56
            Money::Usd { cents } => write!(
                f,
                "${}.{:02}",
                group_thousands(cents / 100, ','),
                cents % 100
            ),
        }
    }
}

/// Convert a stored VND price into the currency shown for `lang`
pub fn display_price(price: u64, lang: Language) -> Money {
    match lang {
        Language::Vi => Money::Vnd(price),
        Language::En => {
            // round half up to the nearest cent; u128 so no stored price overflows
            let cents = (u128::from(price) * 100 + u128::from(VND_PER_USD / 2))
                / u128::from(VND_PER_USD);
            Money::Usd {
                cents: u64::try_from(cents).unwrap_or(u64::MAX),
            }
        }
    }
}

/// Format a stored VND price for `lang`
pub fn format_price(price: u64, lang: Language) -> String {
    display_price(price, lang).to_string()
}

/// Format an amount in VND regardless of language (admin totals)
pub fn format_vnd(amount: u64) -> String {
    Money::Vnd(amount).to_string()
}

fn group_thousands(value: u64, separator: char) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vietnamese_price_is_raw_vnd() {
        assert_eq!(format_price(150_000, Language::Vi), "150.000 ₫");
        assert_eq!(format_price(1_250_000, Language::Vi), "1.250.000 ₫");
        assert_eq!(format_price(0, Language::Vi), "0 ₫");
        assert_eq!(format_price(999, Language::Vi), "999 ₫");
    }

    #[test]
    fn test_english_price_is_converted_to_usd() {
        assert_eq!(format_price(150_000, Language::En), "$6.00");
        assert_eq!(format_price(180_000, Language::En), "$7.20");
        assert_eq!(format_price(40_000_000, Language::En), "$1,600.00");
        // 100_001 / 25_000 = 4.00004 -> $4.00
        assert_eq!(format_price(100_001, Language::En), "$4.00");
    }

    #[test]
    fn test_usd_cents_round_half_up() {
        // 125 VND is exactly half a cent
        assert_eq!(display_price(125, Language::En), Money::Usd { cents: 1 });
        assert_eq!(display_price(124, Language::En), Money::Usd { cents: 0 });
    }

    #[test]
    fn test_huge_price_converts_without_overflow() {
        assert_eq!(
            display_price(200_000_000_000_000_000, Language::En),
            Money::Usd {
                cents: 800_000_000_000_000
            }
        );
        assert_eq!(
            format_price(u64::MAX, Language::En),
            "$737,869,762,948,382.06"
        );
    }

    #[test]
    fn test_switching_language_keeps_stored_price() {
        let price = 250_000;
        let vi = format_price(price, Language::Vi);
        let en = format_price(price, Language::En);
        assert_ne!(vi, en);
        assert_eq!(en, "$10.00");
        assert_eq!(format_price(price, Language::Vi), vi);
    }

    #[test]
    fn test_format_vnd() {
        assert_eq!(format_vnd(1_830_000), "1.830.000 ₫");
    }
}
