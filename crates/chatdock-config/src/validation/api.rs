use crate::schema::ChatdockConfig;

use super::helpers::validate_range;

/// Validate endpoint and transport settings.
pub(crate) fn validate_api(errors: &mut Vec<String>, config: &ChatdockConfig) {
    let api = &config.api;
    validate_range(errors, "api.max_tokens", api.max_tokens, 1, 8192);
    validate_range(
        errors,
        "api.connect_timeout_secs",
        api.connect_timeout_secs,
        1,
        600,
    );
    validate_range(errors, "api.timeout_secs", api.timeout_secs, 1, 600);

    if !(api.base_url.starts_with("http://") || api.base_url.starts_with("https://")) {
        errors.push(format!(
            "api.base_url = {:?} must start with http:// or https://",
            api.base_url
        ));
    }
}
