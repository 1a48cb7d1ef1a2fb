//! Shared string casing functions.
//!
//! Database identifiers arrive in whatever casing the schema author used
//! (`first_name`, `dateCreated`, `Users`); these helpers normalize them
//! into the casings the naming conventions hand out.

/// Convert a string to UPPER_SNAKE_CASE (e.g., "dateCreated" -> "DATE_CREATED")
pub fn to_upper_snake_case(s: &str) -> String {
    to_snake_case(s).to_uppercase()
}

/// Convert a string to PascalCase (e.g., "first_name" -> "FirstName")
pub fn to_pascal_case(s: &str) -> String {
    to_snake_case(s)
        .split('_')
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                None => String::new(),
                Some(c) => c.to_uppercase().chain(chars).collect(),
            }
        })
        .collect()
}

/// Convert a string to snake_case (e.g., "dateCreated" -> "date_created")
pub fn to_snake_case(s: &str) -> String {
    let mut result = String::new();
    let mut prev_lower = false;
    for c in s.chars() {
        if c.is_uppercase() {
            if prev_lower {
                result.push('_');
            }
            prev_lower = false;
            result.extend(c.to_lowercase());
        } else {
            prev_lower = c.is_lowercase() || c.is_ascii_digit();
            result.push(c);
        }
    }
    result.replace('-', "_")
}
