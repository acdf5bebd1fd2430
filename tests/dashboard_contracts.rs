use serde_json::json;
use tempfile::TempDir;
use teamscore_lib::analysis::rounding::RoundingMode;
use teamscore_lib::commands::dashboard::build_dashboard;
use teamscore_lib::commands::members::list_members;
use teamscore_lib::commands::settings::{get_settings, load_effective_scoring_settings, save_settings};
use teamscore_lib::models::project::ProjectScores;
use teamscore_lib::{build_timeline, weighted_average, InputPolicy, ScoringError, ScoringSettings};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn create_data_dir() -> (TempDir, String) {
    let temp_dir = tempfile::tempdir().expect("create temp dir");
    let data_dir = temp_dir.path().to_string_lossy().to_string();
    (temp_dir, data_dir)
}

fn project_fixture() -> ProjectScores {
    serde_json::from_value(json!({
        "project": {
            "id": 7,
            "name": "Mobile app launch",
            "document_url": "https://docs.example.com/mobile"
        },
        "members": [
            { "id": 1, "name": "Yamada", "role": "PM", "email": "yamada@example.com" },
            { "id": 2, "name": "Sato", "role": "PL" },
            { "id": 3, "name": "Suzuki", "role": "Member" }
        ],
        "histories": {
            "1": [
                { "id": 10, "member_id": 1, "score": 90, "created_at": "2024-11-08T09:00:00" }
            ],
            "2": [
                { "id": 11, "member_id": 2, "score": 80, "comment": "solid design", "created_at": "2024-11-08T10:00:00" }
            ],
            "3": [
                { "id": 12, "member_id": 3, "score": 70, "created_at": "2024-11-08T11:00:00.123456" }
            ]
        }
    }))
    .expect("fixture deserializes")
}

#[test]
fn dashboard_contract_matches_weighted_scenario() {
    init_logging();
    let (_tmp, data_dir) = create_data_dir();

    let dashboard = build_dashboard(&data_dir, &project_fixture()).expect("build dashboard");

    assert_eq!(dashboard.weighted_average, Some(81.7));
    assert_eq!(dashboard.last_updated.as_deref(), Some("2024-11-08T11:00:00.123456"));
    assert_eq!(dashboard.timeline.len(), 1);
    assert_eq!(dashboard.timeline[0].date, "2024-11-08");
    assert_eq!(dashboard.timeline[0].weighted_average, 81.7);

    let serialized = serde_json::to_value(&dashboard).expect("serialize dashboard");
    assert_eq!(serialized["project"]["name"], json!("Mobile app launch"));
    assert_eq!(serialized["members_summary"][1]["weight"], json!(3));
    assert_eq!(serialized["members_summary"][1]["latest_comment"], json!("solid design"));
    assert_eq!(serialized["timeline"][0]["weighted_average"], json!(81.7));
}

#[test]
fn settings_round_trip_and_merge_partial_updates() {
    init_logging();
    let (_tmp, data_dir) = create_data_dir();

    let initial = get_settings(&data_dir).expect("load settings");
    assert_eq!(initial["inputPolicy"], json!("reject"));
    assert_eq!(initial["rounding"], json!("half_away_from_zero"));

    let saved = save_settings(&data_dir, json!({ "rounding": "half_even" })).expect("save settings");
    assert_eq!(saved["rounding"], json!("half_even"));
    assert_eq!(saved["inputPolicy"], initial["inputPolicy"]);

    let effective = load_effective_scoring_settings(&data_dir).expect("effective settings");
    assert_eq!(
        effective,
        ScoringSettings {
            input_policy: InputPolicy::Reject,
            rounding: RoundingMode::HalfEven,
        }
    );
}

#[test]
fn building_a_dashboard_leaves_the_data_dir_untouched() {
    init_logging();
    let (tmp, data_dir) = create_data_dir();

    build_dashboard(&data_dir, &project_fixture()).expect("build dashboard");

    let entries = std::fs::read_dir(tmp.path()).expect("read data dir").count();
    assert_eq!(entries, 0);
}

#[test]
fn stored_settings_are_read_back_without_rewrite() {
    init_logging();
    let (tmp, data_dir) = create_data_dir();
    let settings_dir = tmp.path().join(".teamscore");
    std::fs::create_dir_all(&settings_dir).expect("create settings dir");
    let raw = r#"{ "inputPolicy": "clamp" }"#;
    std::fs::write(settings_dir.join("settings.json"), raw).expect("write settings");

    let effective = load_effective_scoring_settings(&data_dir).expect("effective settings");
    assert_eq!(effective.input_policy, InputPolicy::Clamp);
    assert_eq!(effective.rounding, RoundingMode::HalfAwayFromZero);

    let on_disk = std::fs::read_to_string(settings_dir.join("settings.json")).expect("read settings");
    assert_eq!(on_disk, raw);
}

#[test]
fn clamp_policy_from_settings_accepts_malformed_records() {
    init_logging();
    let (_tmp, data_dir) = create_data_dir();
    save_settings(&data_dir, json!({ "inputPolicy": "clamp" })).expect("save settings");

    let mut input = project_fixture();
    input.members[2].role = "Intern".to_string();
    if let Some(records) = input.histories.get_mut(&1) {
        records[0].score = 130;
    }

    // (100*2 + 80*3 + 70*1) / 6 = 85.0
    let dashboard = build_dashboard(&data_dir, &input).expect("build dashboard");
    assert_eq!(dashboard.weighted_average, Some(85.0));
    assert_eq!(dashboard.members_summary[0].latest_score, Some(100));
    assert_eq!(dashboard.members_summary[2].weight, 1);
}

#[test]
fn reject_policy_surfaces_validation_failures() {
    init_logging();
    let mut input = project_fixture();
    input.members[0].role = "Director".to_string();

    let err = weighted_average(&input.members, &input.histories).expect_err("unknown role");
    assert!(matches!(err, ScoringError::UnknownRole { member_id: 1, .. }));

    let err = build_timeline(&input.members, &input.histories).expect_err("unknown role");
    assert!(err.to_string().contains("Director"));
}

#[test]
fn member_list_contract_includes_unscored_members() {
    init_logging();
    let mut input = project_fixture();
    input.histories.remove(&3);

    let listed = list_members(&input, ScoringSettings::default()).expect("list members");
    let serialized = serde_json::to_value(&listed).expect("serialize members");

    assert_eq!(serialized[0]["email"], json!("yamada@example.com"));
    assert_eq!(serialized[0]["latest_score"], json!(90));
    assert_eq!(serialized[2]["latest_score"], json!(null));
    assert_eq!(serialized[2]["latest_score_at"], json!(null));
}
