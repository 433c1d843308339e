use crate::models::{BudgetSummary, CategorySpending};

fn group_thousands(value: u64) -> String {
    let digits = value.to_string().chars().rev().collect::<Vec<char>>();
    let mut out = Vec::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.iter().enumerate() {
        if i > 0 && i % 3 == 0 {
            out.push('.');
        }
        out.push(*ch);
    }
    out.into_iter().rev().collect()
}

/// Whole rupiah with `.` grouping: `Rp 1.200.000`, `-Rp 350.000`.
pub fn format_rupiah(amount: f64) -> String {
    if !amount.is_finite() {
        return "Rp 0".to_string();
    }
    let rounded = amount.round();
    let sign = if rounded < 0.0 { "-" } else { "" };
    format!("{}Rp {}", sign, group_thousands(rounded.abs() as u64))
}

/// What the budget progress bar shows for a server summary.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BudgetProgress {
    pub budget: f64,
    pub spent: f64,
    pub remaining: f64,
    pub percent_used: i64,
}

impl BudgetProgress {
    pub fn from_summary(summary: &BudgetSummary) -> Self {
        let remaining = summary
            .remaining
            .unwrap_or(summary.budget - summary.spent);
        let percent_used = if summary.budget > 0.0 {
            (summary.spent / summary.budget * 100.0).round() as i64
        } else {
            0
        };

        Self {
            budget: summary.budget,
            spent: summary.spent,
            remaining,
            percent_used,
        }
    }

    /// Width of the bar in percent; the label keeps the real value.
    pub fn bar_width(&self) -> i64 {
        self.percent_used.clamp(0, 100)
    }

    pub fn over_budget(&self) -> bool {
        self.remaining < 0.0
    }
}

/// Legend rows for the per-category breakdown: name, amount, share in
/// whole percent.
pub fn category_shares(series: &[CategorySpending]) -> Vec<(String, f64, i64)> {
    let sum: f64 = series.iter().map(|s| s.value.max(0.0)).sum();
    series
        .iter()
        .map(|s| {
            let share = if sum > 0.0 {
                (s.value.max(0.0) / sum * 100.0).round() as i64
            } else {
                0
            };
            (s.name.clone(), s.value, share)
        })
        .collect()
}

/// Bar height in percent of the largest value in the series.
pub fn relative_width(value: f64, max: f64) -> i64 {
    if max <= 0.0 || value <= 0.0 {
        return 0;
    }
    ((value / max) * 100.0).round().clamp(0.0, 100.0) as i64
}
