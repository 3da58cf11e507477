use crate::validation::Size;

pub fn toppings_text(count: usize) -> String {
    match count {
        0 => "no toppings".to_string(),
        1 => "1 topping".to_string(),
        n => format!("{n} toppings"),
    }
}

/// Success banner. Uses the name as typed, not trimmed.
pub fn summary_message(full_name: &str, size: Size, topping_count: usize) -> String {
    format!(
        "Thank you for your order, {full_name}! Your {} pizza with {} is on the way.",
        size.text(),
        toppings_text(topping_count)
    )
}
