//! College search box filtering

use super::types::College;

/// Case-insensitive substring search over name, district and programs.
///
/// A blank query returns every college. Result order follows input order.
pub fn filter_colleges(colleges: &[College], query: &str) -> Vec<College> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return colleges.to_vec();
    }

    colleges
        .iter()
        .filter(|c| {
            c.name.to_lowercase().contains(&needle)
                || c.district.to_lowercase().contains(&needle)
                || c.programs.join(" ").to_lowercase().contains(&needle)
        })
        .cloned()
        .collect()
}
