use crate::CellValue;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormatKind {
    #[default]
    Plain,
    /// `$` followed by the amount with thousands separators; empty stays empty.
    Currency,
    /// Like `Currency`, but a zero amount renders blank too.
    CurrencyOrBlank,
}

impl FormatKind {
    pub fn format(self, value: &CellValue) -> String {
        match (self, value) {
            (Self::Currency, CellValue::Number(n)) => format_currency(*n),
            (Self::CurrencyOrBlank, CellValue::Number(n)) if *n == 0.0 => String::new(),
            (Self::CurrencyOrBlank, CellValue::Number(n)) => format_currency(*n),
            _ => value.to_string(),
        }
    }
}

/// Up to three fraction digits, trailing zeros dropped.
fn format_currency(amount: f64) -> String {
    let sign = if amount < 0.0 { "-" } else { "" };
    let fixed = format!("{:.3}", amount.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let frac_part = frac_part.trim_end_matches('0');

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, digit) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    if frac_part.is_empty() {
        format!("{sign}${grouped}")
    } else {
        format!("{sign}${grouped}.{frac_part}")
    }
}
