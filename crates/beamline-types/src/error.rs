// ─────────────────────────────────────────────────────────────────────
// SCPN Fusion Core — Beamline Errors
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BeamlineError {
    #[error("Component '{component}': container volume '{container}' not found in geometry")]
    MissingContainer { component: String, container: String },

    #[error("Container volume '{container}' matched {count} volumes, expected exactly one")]
    DuplicateContainer { container: String, count: usize },

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Geometry error: {0}")]
    Geometry(String),

    #[error("Placement error: {0}")]
    Placement(String),

    #[error("Field construction error: {0}")]
    FieldConstruction(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type BeamlineResult<T> = Result<T, BeamlineError>;
