use chrono::NaiveDate;

/// Formats an amount as Indian-locale INR with no fraction digits,
/// e.g. `250000.0` -> `"₹2,50,000"`.
pub fn format_currency(amount: f64) -> String {
    let negative = amount < 0.0;
    let rounded = amount.abs().round() as u64;
    let grouped = group_indian(&rounded.to_string());
    if negative {
        format!("-₹{}", grouped)
    } else {
        format!("₹{}", grouped)
    }
}

// Indian digit grouping: last three digits, then groups of two.
fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }
    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut i = head.len();
    while i > 2 {
        groups.push(&head[i - 2..i]);
        i -= 2;
    }
    groups.push(&head[..i]);
    groups.reverse();
    format!("{},{}", groups.join(","), tail)
}

/// Formats an ISO date (`2024-06-15`) as `15 Jun 2024`.
/// Inputs that do not parse are returned unchanged.
pub fn format_date(date: &str) -> String {
    match NaiveDate::parse_from_str(date, "%Y-%m-%d") {
        Ok(d) => d.format("%-d %b %Y").to_string(),
        Err(_) => date.to_string(),
    }
}
