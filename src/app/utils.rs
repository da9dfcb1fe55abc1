use rust_decimal::Decimal;

const RUPEE: &str = "₹ ";

/// Groups an integer digit string the Indian way: `1,23,45,678`.
fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();

    format!("{},{}", groups.join(","), tail)
}

fn format_amount(negative: bool, unsigned: &str) -> String {
    let (integer, fraction) = unsigned.split_once('.').unwrap_or((unsigned, "00"));
    let sign = if negative { "-" } else { "" };
    format!("{}{}{}.{}", sign, RUPEE, group_indian(integer), fraction)
}

pub fn format_currency(value: f64) -> String {
    if !value.is_finite() {
        return format!("{}0.00", RUPEE);
    }

    let unsigned = format!("{:.2}", value.abs());
    let negative = value < 0.0 && unsigned != "0.00";
    format_amount(negative, &unsigned)
}

pub fn format_decimal(value: Decimal) -> String {
    let rounded = value.round_dp(2);
    let unsigned = format!("{:.2}", rounded.abs());
    format_amount(rounded.is_sign_negative() && !rounded.is_zero(), &unsigned)
}
