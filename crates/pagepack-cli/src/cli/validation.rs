/// Parse and validate a profile name.
///
/// Profile names are table keys in `pagepack.toml`, so they are limited to
/// letters, digits, `-` and `_`.
///
/// # Examples
///
/// Valid names: production, ci, staging-eu, local_2
/// Invalid names: "", "prod.eu", "my profile"
///
/// # Errors
///
/// Returns an error message if the name is invalid.
pub fn parse_profile(s: &str) -> Result<String, String> {
    if s.is_empty() {
        return Err("Profile name cannot be empty".to_string());
    }

    if let Some(c) = s
        .chars()
        .find(|c| !c.is_alphanumeric() && *c != '-' && *c != '_')
    {
        return Err(format!(
            "Profile name can only contain letters, numbers, '-' or '_': '{s}' contains '{c}'"
        ));
    }

    Ok(s.to_string())
}
