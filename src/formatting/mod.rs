// Format number with thousands separator
pub fn format_number_with_commas(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::with_capacity(s.len() + s.len() / 3);

    for (i, c) in s.chars().enumerate() {
        if i > 0 && (s.len() - i) % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }

    result
}

// Success rate as a percentage with one decimal, e.g. "66.7%"
pub fn format_success_rate(successes: u32, total: u32) -> String {
    if total == 0 {
        return "0.0%".to_string();
    }
    format!("{:.1}%", successes as f64 / total as f64 * 100.0)
}

// Leading 16 chars of a digest for console display
pub fn short_hash(hash: &str) -> String {
    match hash.get(..16) {
        Some(prefix) if hash.len() > 16 => format!("{}...", prefix),
        _ => hash.to_string(),
    }
}

pub fn rule(width: usize) -> String {
    "=".repeat(width)
}

pub fn thin_rule(width: usize) -> String {
    "-".repeat(width)
}
