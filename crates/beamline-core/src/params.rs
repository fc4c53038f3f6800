// ─────────────────────────────────────────────────────────────────────
// SCPN Fusion Core — User Parameters
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! User parameter string parsing.
//!
//! Format: whitespace-separated `key:value` tokens, e.g. `"colour:blue n:3"`.
//! Tokens without a `:` or with an empty key are skipped; a repeated key
//! keeps its last value.

use beamline_types::constants::{COLOUR_KEY, DEFAULT_COLOUR};
use std::collections::BTreeMap;

pub type UserParameters = BTreeMap<String, String>;

pub fn parse_user_parameters(params: &str) -> UserParameters {
    let mut map = UserParameters::new();
    for token in params.split_whitespace() {
        let Some((key, value)) = token.split_once(':') else {
            tracing::debug!(token, "ignoring user parameter without ':'");
            continue;
        };
        if key.is_empty() {
            tracing::debug!(token, "ignoring user parameter with empty key");
            continue;
        }
        map.insert(key.to_string(), value.to_string());
    }
    map
}

/// Colour tag for visualisation; `"rectangularbend"` unless overridden.
pub fn resolve_colour(params: &UserParameters) -> String {
    params
        .get(COLOUR_KEY)
        .cloned()
        .unwrap_or_else(|| DEFAULT_COLOUR.to_string())
}
