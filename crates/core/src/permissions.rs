//! Well-known instance permission names.
//!
//! Permissions are granted per instance and carried in the access token.

pub const MAINTENANCE_JOBS_VIEW: &str = "MAINTENANCE_JOBS:VIEW";
pub const MAINTENANCE_JOBS_EDIT_ASSET_QUANTITY: &str = "MAINTENANCE_JOBS:EDIT:ASSET_QUANTITY";
pub const ASSETS_VIEW: &str = "ASSETS:VIEW";

/// Whether `required` appears in the granted permission list.
pub fn has_permission<S: AsRef<str>>(granted: &[S], required: &str) -> bool {
    granted.iter().any(|p| p.as_ref() == required)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_match_is_required() {
        let granted = vec![MAINTENANCE_JOBS_VIEW.to_string()];
        assert!(has_permission(&granted, MAINTENANCE_JOBS_VIEW));
        assert!(!has_permission(&granted, MAINTENANCE_JOBS_EDIT_ASSET_QUANTITY));
        assert!(!has_permission(&granted, "MAINTENANCE_JOBS"));
    }

    #[test]
    fn empty_grant_list_denies() {
        let granted: Vec<String> = Vec::new();
        assert!(!has_permission(&granted, ASSETS_VIEW));
    }
}
