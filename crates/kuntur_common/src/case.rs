//! Case model for the Kuntur case store.
//!
//! Wire names keep the UPC intake vocabulary (`id_caso`,
//! `id_alarma`, ...); Rust-side names stay English. The persisted document
//! is a single JSON array of these records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::CaseError;

/// Prefix for generated case identifiers
pub const CASE_ID_PREFIX: &str = "CASO-";

/// A recorded security incident report linked to an alarm.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Case {
    /// Generated identifier, `CASO-NNNN`. Immutable after creation.
    #[serde(rename = "id_caso")]
    pub case_id: String,
    /// External alert that triggered this report. Not validated against
    /// any alert store.
    #[serde(rename = "id_alarma")]
    pub alarm_id: String,
    #[serde(rename = "nombre_agente")]
    pub agent_name: String,
    #[serde(rename = "cedula_agente")]
    pub agent_id_number: String,
    #[serde(rename = "nombre_victima")]
    pub victim_name: String,
    #[serde(rename = "cedula_victima")]
    pub victim_id_number: String,
    #[serde(rename = "informe_policial")]
    pub police_report: String,
    /// Set at creation. Immutable after creation.
    #[serde(rename = "fecha_creacion")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "estado")]
    pub status: CaseStatus,
    /// Absent until the first update.
    #[serde(
        rename = "fecha_actualizacion",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Case {
    /// Numeric suffix of a `CASO-NNNN` identifier, if well formed.
    pub fn id_suffix(case_id: &str) -> Option<u32> {
        case_id.strip_prefix(CASE_ID_PREFIX)?.parse().ok()
    }

    /// Format an identifier from its numeric suffix.
    pub fn format_id(suffix: u32) -> String {
        format!("{}{:04}", CASE_ID_PREFIX, suffix)
    }
}

/// Case lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum CaseStatus {
    #[default]
    #[serde(rename = "Abierto")]
    Open,
    #[serde(rename = "En Proceso")]
    InProgress,
    #[serde(rename = "Cerrado")]
    Closed,
}

impl CaseStatus {
    /// Wire representation, as stored in `estado`.
    pub fn as_str(&self) -> &'static str {
        match self {
            CaseStatus::Open => "Abierto",
            CaseStatus::InProgress => "En Proceso",
            CaseStatus::Closed => "Cerrado",
        }
    }
}

impl std::str::FromStr for CaseStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "abierto" | "open" => Ok(CaseStatus::Open),
            "en proceso" | "en-proceso" | "in-progress" => Ok(CaseStatus::InProgress),
            "cerrado" | "closed" => Ok(CaseStatus::Closed),
            other => Err(format!("estado desconocido: {}", other)),
        }
    }
}

/// Fields accepted when opening a case.
///
/// All six are required non-empty, but they arrive as options so a missing
/// key can be rejected by name instead of failing generic deserialization.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewCase {
    #[serde(rename = "id_alarma", default)]
    pub alarm_id: Option<String>,
    #[serde(rename = "nombre_agente", default)]
    pub agent_name: Option<String>,
    #[serde(rename = "cedula_agente", default)]
    pub agent_id_number: Option<String>,
    #[serde(rename = "nombre_victima", default)]
    pub victim_name: Option<String>,
    #[serde(rename = "cedula_victima", default)]
    pub victim_id_number: Option<String>,
    #[serde(rename = "informe_policial", default)]
    pub police_report: Option<String>,
}

impl NewCase {
    /// Check every required field, in declaration order. The error carries
    /// the wire name of the first missing or empty field.
    pub fn validate(&self) -> Result<(), CaseError> {
        for (value, wire_name) in self.required_fields() {
            match value {
                Some(v) if !v.trim().is_empty() => {}
                _ => return Err(CaseError::MissingField(wire_name.to_string())),
            }
        }
        Ok(())
    }

    fn required_fields(&self) -> [(&Option<String>, &'static str); 6] {
        [
            (&self.alarm_id, "id_alarma"),
            (&self.agent_name, "nombre_agente"),
            (&self.agent_id_number, "cedula_agente"),
            (&self.victim_name, "nombre_victima"),
            (&self.victim_id_number, "cedula_victima"),
            (&self.police_report, "informe_policial"),
        ]
    }

    /// Build the stored record. Callers validate first; a field that still
    /// turns out missing becomes an empty string rather than a panic.
    pub(crate) fn into_case(self, case_id: String, created_at: DateTime<Utc>) -> Case {
        Case {
            case_id,
            alarm_id: self.alarm_id.unwrap_or_default(),
            agent_name: self.agent_name.unwrap_or_default(),
            agent_id_number: self.agent_id_number.unwrap_or_default(),
            victim_name: self.victim_name.unwrap_or_default(),
            victim_id_number: self.victim_id_number.unwrap_or_default(),
            police_report: self.police_report.unwrap_or_default(),
            created_at,
            status: CaseStatus::default(),
            updated_at: None,
        }
    }
}

/// Partial update for an existing case.
///
/// `id_caso` and `fecha_creacion` are not representable here, so
/// caller-supplied values for them are dropped at deserialization.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CaseUpdate {
    #[serde(rename = "id_alarma", default, skip_serializing_if = "Option::is_none")]
    pub alarm_id: Option<String>,
    #[serde(rename = "nombre_agente", default, skip_serializing_if = "Option::is_none")]
    pub agent_name: Option<String>,
    #[serde(rename = "cedula_agente", default, skip_serializing_if = "Option::is_none")]
    pub agent_id_number: Option<String>,
    #[serde(rename = "nombre_victima", default, skip_serializing_if = "Option::is_none")]
    pub victim_name: Option<String>,
    #[serde(rename = "cedula_victima", default, skip_serializing_if = "Option::is_none")]
    pub victim_id_number: Option<String>,
    #[serde(rename = "informe_policial", default, skip_serializing_if = "Option::is_none")]
    pub police_report: Option<String>,
    #[serde(rename = "estado", default, skip_serializing_if = "Option::is_none")]
    pub status: Option<CaseStatus>,
}

impl CaseUpdate {
    /// Overwrite the supplied fields on `case`, leaving the rest untouched.
    pub(crate) fn apply(&self, case: &mut Case) {
        if let Some(v) = &self.alarm_id {
            case.alarm_id = v.clone();
        }
        if let Some(v) = &self.agent_name {
            case.agent_name = v.clone();
        }
        if let Some(v) = &self.agent_id_number {
            case.agent_id_number = v.clone();
        }
        if let Some(v) = &self.victim_name {
            case.victim_name = v.clone();
        }
        if let Some(v) = &self.victim_id_number {
            case.victim_id_number = v.clone();
        }
        if let Some(v) = &self.police_report {
            case.police_report = v.clone();
        }
        if let Some(s) = self.status {
            case.status = s;
        }
    }
}

/// Exact-match listing filters. When both are present a case must match
/// both (AND semantics).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CaseFilter {
    #[serde(rename = "id_caso", default, skip_serializing_if = "Option::is_none")]
    pub case_id: Option<String>,
    #[serde(rename = "id_alarma", default, skip_serializing_if = "Option::is_none")]
    pub alarm_id: Option<String>,
}

impl CaseFilter {
    pub fn by_case_id(case_id: impl Into<String>) -> Self {
        Self {
            case_id: Some(case_id.into()),
            alarm_id: None,
        }
    }

    pub fn by_alarm_id(alarm_id: impl Into<String>) -> Self {
        Self {
            case_id: None,
            alarm_id: Some(alarm_id.into()),
        }
    }

    pub fn matches(&self, case: &Case) -> bool {
        self.case_id.as_ref().map_or(true, |id| *id == case.case_id)
            && self.alarm_id.as_ref().map_or(true, |id| *id == case.alarm_id)
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn full_draft() -> NewCase {
        NewCase {
            alarm_id: Some("AL23072504".to_string()),
            agent_name: Some("Juan Pérez".to_string()),
            agent_id_number: Some("1723456789".to_string()),
            victim_name: Some("María López".to_string()),
            victim_id_number: Some("1712345678".to_string()),
            police_report: Some("Robo a local comercial".to_string()),
        }
    }

    #[test]
    fn test_id_suffix_round_trip() {
        assert_eq!(Case::format_id(7), "CASO-0007");
        assert_eq!(Case::id_suffix("CASO-0007"), Some(7));
        assert_eq!(Case::id_suffix("CASO-0123"), Some(123));
        assert_eq!(Case::id_suffix("ALERTA-0001"), None);
        assert_eq!(Case::id_suffix("CASO-abc"), None);
    }

    #[test]
    fn test_wire_names() {
        let case = full_draft().into_case(Case::format_id(1), Utc::now());
        let json = serde_json::to_value(&case).unwrap();

        assert_eq!(json["id_caso"], "CASO-0001");
        assert_eq!(json["id_alarma"], "AL23072504");
        assert_eq!(json["nombre_agente"], "Juan Pérez");
        assert_eq!(json["estado"], "Abierto");
        assert!(json.get("fecha_creacion").is_some());
        // No update yet: the field must be absent, not null
        assert!(json.get("fecha_actualizacion").is_none());
    }

    #[test]
    fn test_validate_reports_first_missing_field() {
        let mut draft = full_draft();
        draft.agent_name = None;
        draft.victim_name = Some("   ".to_string());

        match draft.validate() {
            Err(CaseError::MissingField(field)) => assert_eq!(field, "nombre_agente"),
            other => panic!("expected MissingField, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_rejects_empty_string() {
        let mut draft = full_draft();
        draft.police_report = Some(String::new());

        match draft.validate() {
            Err(CaseError::MissingField(field)) => assert_eq!(field, "informe_policial"),
            other => panic!("expected MissingField, got {:?}", other),
        }
    }

    #[test]
    fn test_update_payload_discards_immutable_fields() {
        let update: CaseUpdate = serde_json::from_str(
            r#"{
                "id_caso": "CASO-9999",
                "fecha_creacion": "1999-01-01T00:00:00Z",
                "informe_policial": "Ampliación del informe"
            }"#,
        )
        .unwrap();

        let mut case = full_draft().into_case(Case::format_id(1), Utc::now());
        let created = case.created_at;
        update.apply(&mut case);

        assert_eq!(case.case_id, "CASO-0001");
        assert_eq!(case.created_at, created);
        assert_eq!(case.police_report, "Ampliación del informe");
    }

    #[test]
    fn test_status_strings() {
        assert_eq!(CaseStatus::Open.as_str(), "Abierto");
        assert_eq!("en-proceso".parse::<CaseStatus>(), Ok(CaseStatus::InProgress));
        assert_eq!("Cerrado".parse::<CaseStatus>(), Ok(CaseStatus::Closed));
        assert!("archivado".parse::<CaseStatus>().is_err());
    }

    #[test]
    fn test_filter_and_semantics() {
        let mut case = full_draft().into_case(Case::format_id(1), Utc::now());
        case.alarm_id = "A1".to_string();

        assert!(CaseFilter::default().matches(&case));
        assert!(CaseFilter::by_alarm_id("A1").matches(&case));
        assert!(!CaseFilter::by_alarm_id("A2").matches(&case));

        let both = CaseFilter {
            case_id: Some("CASO-0001".to_string()),
            alarm_id: Some("A2".to_string()),
        };
        assert!(!both.matches(&case));
    }
}
