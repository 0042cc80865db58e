//! Role → file variant policy.
//!
//! Every image has a first capture (`_1`); lures also have a second (`_2`)
//! that must be fetched alongside it. Roles are matched case-insensitively.

/// Roles that fetch more than the first variant.
const ROLE_VARIANTS: &[(&str, &[u8])] = &[("lure", &[1, 2])];

/// Variants for any role not listed in [`ROLE_VARIANTS`].
const DEFAULT_VARIANTS: &[u8] = &[1];

/// Variant numbers to fetch for `role`, in fetch order.
pub fn variants_for_role(role: &str) -> &'static [u8] {
    let role = role.trim();
    ROLE_VARIANTS
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(role))
        .map(|(_, variants)| *variants)
        .unwrap_or(DEFAULT_VARIANTS)
}

/// File-name suffix for a variant, e.g. `_2`.
pub fn suffix(variant: u8) -> String {
    format!("_{variant}")
}
