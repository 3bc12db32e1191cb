use rust_decimal::Decimal;

/// Decomposition of one line item: tax-inclusive unit price split into net
/// price, tax amount, and extended total.
///
/// Stored prices already include tax, so the split is
/// `net = gross / (1 + rate)`, `tax = net * rate`. The divisor is at least 1
/// because rates are non-negative, so the division cannot blow up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineAmounts {
    /// Unit price excluding tax.
    pub unit_net: Decimal,
    /// Tax on one unit.
    pub unit_tax: Decimal,
    /// `(unit_net + unit_tax) * quantity`.
    pub line_total: Decimal,
}

impl LineAmounts {
    /// Split a tax-inclusive unit price at the given percentage rate and
    /// extend by quantity. Full precision throughout; rounding happens only
    /// in [`format_amount`] at display time.
    pub fn compute(unit_price_incl_tax: Decimal, tax_rate_percent: Decimal, quantity: u32) -> Self {
        let rate = tax_rate_percent / Decimal::ONE_HUNDRED;
        let unit_net = unit_price_incl_tax / (Decimal::ONE + rate);
        let unit_tax = unit_net * rate;
        let line_total = (unit_net + unit_tax) * Decimal::from(quantity);
        Self {
            unit_net,
            unit_tax,
            line_total,
        }
    }
}

/// Running document totals, accumulated at full precision.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DocumentTotals {
    /// Sum of line totals (tax included).
    pub total_cost: Decimal,
    /// Sum of per-unit tax times quantity.
    pub total_tax: Decimal,
}

impl DocumentTotals {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one computed line into the totals.
    pub fn add_line(&mut self, amounts: &LineAmounts, quantity: u32) {
        self.total_cost += amounts.line_total;
        self.total_tax += amounts.unit_tax * Decimal::from(quantity);
    }

    /// Total payable minus total tax.
    pub fn net_total(&self) -> Decimal {
        self.total_cost - self.total_tax
    }
}

/// Format a monetary amount for display: `"$ "` prefix, banker's rounding to
/// two decimals, thousands separators — matching the store frontend's
/// `$ {value:,.2f}` output.
pub fn format_amount(amount: Decimal) -> String {
    // round_dp leaves at most two decimals; pad to exactly two below.
    let s = amount.round_dp(2).to_string();
    let (int_part, frac) = s.split_once('.').unwrap_or((s.as_str(), ""));
    let frac_part = format!("{frac:0<2}");
    let (sign, digits) = match int_part.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", int_part),
    };
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    format!("$ {sign}{grouped}.{frac_part}")
}
