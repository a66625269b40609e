use super::*;
use crate::model::ReactionSummary;

fn response() -> ExperimentResponse {
    ExperimentResponse {
        observation: "Fizzing".to_string(),
        result: "Salt and water".to_string(),
        timestamp: "2024-03-02T12:30:00Z".to_string(),
        ..ExperimentResponse::default()
    }
}

#[test]
fn draft_gets_fresh_id_and_default_safety() {
    let a = Finding::draft("New Finding").expect("draft");
    let b = Finding::draft("New Finding").expect("draft");

    assert_ne!(a.id, b.id);
    let hex = a.id.as_str().strip_prefix("finding_").expect("prefix");
    assert_eq!(hex.len(), 16);
    assert!(hex.chars().all(|c| c.is_ascii_hexdigit()));
    assert_eq!(a.safety, "Standard lab safety");
    assert!(a.updated_at.is_none());
}

#[test]
fn experiment_title_prefers_reaction_name() {
    let mut resp = response();
    resp.reaction = Some(ReactionSummary {
        name: "Neutralization".to_string(),
        ..ReactionSummary::default()
    });
    let chems = vec!["HCl".to_string(), "NaOH".to_string()];

    let f = Finding::from_experiment(LabKind::Chemistry, &chems, &[], &resp).expect("finding");
    assert_eq!(f.title, "Chemistry Experiment: Neutralization");
    assert_eq!(f.notes, "Experimental run - mixed chemicals in Chemistry lab");
    assert_eq!(f.observations, "Fizzing");
    assert_eq!(f.conclusion, "Salt and water");
    assert_eq!(f.created_at, "2024-03-02T12:30:00Z");
    assert_eq!(f.lab, "Chemistry");
}

#[test]
fn experiment_title_falls_back_to_first_chemical() {
    let chems = vec!["Zinc".to_string()];
    let f = Finding::from_experiment(LabKind::Physics, &chems, &[], &response()).expect("finding");
    assert_eq!(f.title, "Physics Experiment: Zinc");

    let f = Finding::from_experiment(LabKind::Biology, &[], &[], &response()).expect("finding");
    assert_eq!(f.title, "Biology Experiment: Unknown mixture");
}

#[test]
fn experiment_notes_list_tools_and_tool_notes() {
    let mut resp = response();
    resp.tool_notes = vec!["Bunsen burner heated the mix".to_string()];
    resp.safety = "Wear gloves".to_string();
    let tools = vec!["Bunsen Burner".to_string(), "Thermometer".to_string()];

    let f = Finding::from_experiment(LabKind::Chemistry, &["HCl".to_string()], &tools, &resp)
        .expect("finding");
    assert_eq!(
        f.notes,
        "Experimental run - mixed chemicals in Chemistry lab using Bunsen Burner, Thermometer\n- Bunsen burner heated the mix"
    );
    assert_eq!(f.safety, "Wear gloves");
    assert_eq!(f.tools, tools);
}

#[test]
fn unparseable_timestamp_uses_now() {
    let mut resp = response();
    resp.timestamp = "yesterday".to_string();
    let f = Finding::from_experiment(LabKind::Chemistry, &[], &[], &resp).expect("finding");
    assert_ne!(f.created_at, "yesterday");
    assert!(OffsetDateTime::parse(&f.created_at, &Rfc3339).is_ok());
}

#[test]
fn patch_replaces_only_given_fields() {
    let mut f = Finding::with_id(FindingId::from("f1"), "Old", "2024-01-01T00:00:00Z".into());
    f.notes = "keep".to_string();

    let patch = FindingPatch {
        title: Some("New".to_string()),
        chemicals: Some(vec!["Cu".to_string()]),
        ..FindingPatch::default()
    };
    assert!(!patch.is_empty());
    f.apply_patch(patch, "2024-02-01T00:00:00Z".to_string());

    assert_eq!(f.title, "New");
    assert_eq!(f.notes, "keep");
    assert_eq!(f.chemicals, vec!["Cu"]);
    assert_eq!(f.created_at, "2024-01-01T00:00:00Z");
    assert_eq!(f.updated_at.as_deref(), Some("2024-02-01T00:00:00Z"));
}

#[test]
fn stored_finding_tolerates_missing_optional_fields() {
    let f: Finding = serde_json::from_str(
        r#"{"id":"f1","title":"Bare","created_at":"2024-01-01T00:00:00Z"}"#,
    )
    .expect("parse");
    assert!(f.notes.is_empty());
    assert!(f.chemicals.is_empty());
    assert!(f.measurements.is_none());
}

#[test]
fn lenient_response_fields() {
    let resp: ExperimentResponse = serde_json::from_value(serde_json::json!({
        "observation": "Glows",
        "safety": 7,
        "measurements": { "temperature_c": 31.5, "ph": 7.0, "rate": 2.5, "heat_level": 3 },
        "toolNotes": ["stirred"],
        "extra": { "ignored": true },
    }))
    .expect("parse");
    assert_eq!(resp.safety, "7");
    assert_eq!(resp.tool_notes, vec!["stirred"]);
    let m = resp.measurements.expect("measurements");
    assert_eq!(m.rate, "2.5");
    assert_eq!(m.heat_level, 3);
}
