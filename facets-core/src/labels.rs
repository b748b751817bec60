/// Capitalize the first character of a string, leaving the rest untouched
pub fn capitalize_first_letter(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Format a TAG identifier for display: dashes become spaces and every word is capitalized
pub fn format_tag_name(tag: &str) -> String {
    tag.replace('-', " ")
        .split(' ')
        .map(capitalize_first_letter)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Format a company type such as `for_profit` as `For profit`
pub fn format_profit_label(company_type: &str) -> String {
    capitalize_first_letter(&company_type.replace('_', " "))
}

/// Lowercased foundation name, as used in maturity filter values
pub fn foundation_label(foundation: &str) -> String {
    foundation.trim().to_lowercase()
}

/// Maturity value selecting items that are not foundation projects
pub fn non_foundation_value(foundation: &str) -> String {
    format!("non-{}", foundation_label(foundation))
}
