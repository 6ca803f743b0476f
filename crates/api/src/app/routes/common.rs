use guildbank_core::ProfileId;

use crate::app::errors;

/// Parse a path id, mapping failure onto the standard validation response.
pub fn parse_id(raw: &str) -> Result<ProfileId, axum::response::Response> {
    raw.parse().map_err(errors::domain_error_to_response)
}

/// Parse an id carried in a request body, naming the offending field.
pub fn parse_body_id(
    raw: &str,
    field: &'static str,
) -> Result<ProfileId, axum::response::Response> {
    raw.parse::<ProfileId>()
        .map_err(|_| errors::json_field_error(field, "must be a valid profile id"))
}
