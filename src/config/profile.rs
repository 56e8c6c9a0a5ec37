pub fn resolve_profile(requested: Option<&str>, configured: Option<&str>) -> Option<String> {
    [requested, configured]
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|name| !name.is_empty())
        .map(ToOwned::to_owned)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_name_wins_over_settings() {
        assert_eq!(
            resolve_profile(Some(" Night "), Some("Day")).as_deref(),
            Some("Night")
        );
    }

    #[test]
    fn blank_names_fall_through() {
        assert_eq!(resolve_profile(Some("  "), Some("Day")).as_deref(), Some("Day"));
        assert_eq!(resolve_profile(None, Some("")), None);
    }
}
