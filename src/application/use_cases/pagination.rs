pub const MAX_PAGE_SIZE: i64 = 100;
pub const DEFAULT_PAGE_SIZE: i64 = 20;

pub fn validate_page(skip: i64, limit: i64) -> Result<(), String> {
    if skip < 0 {
        return Err("Skip cannot be negative".to_string());
    }

    if !(1..=MAX_PAGE_SIZE).contains(&limit) {
        return Err(format!("Limit must be between 1 and {}", MAX_PAGE_SIZE));
    }

    Ok(())
}

/// Converts an in-process cap into a store query limit. Caps beyond `i64`
/// saturate instead of wrapping negative.
pub fn query_limit(cap: usize) -> i64 {
    i64::try_from(cap).unwrap_or(i64::MAX)
}
