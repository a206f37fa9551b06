use std::fs;

use hfpef::{execute, evaluate, CliError, Config, FormKind, Invocation, OutputMode, Report};
use hfpef_type::{InputError, ParseMode};
use pretty_assertions::assert_eq;
use serde_json::Value;

fn pairs(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn invocation(form: FormKind) -> Invocation {
    Invocation {
        form,
        input: None,
        set: Vec::new(),
        format: OutputMode::Json,
        mode: ParseMode::Lenient,
    }
}

#[test]
fn json_report_for_the_worked_example() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("patient.json");
    fs::write(
        &path,
        r#"{
            "age": 65, "hf2pef_score": 6, "bmi": 28.5,
            "e_e_medial": 15.2, "e_e_lateral": 12.8,
            "pasp": 42, "mean_ecv": 28.5, "lv_longitudinal_strain": -16.2,
            "diabetes": true, "hypertension": true
        }"#,
    )
    .unwrap();

    let out = execute(&Invocation {
        input: Some(path),
        mode: ParseMode::Strict,
        ..invocation(FormKind::Diagnostic)
    })
    .unwrap();
    let json: Value = serde_json::from_str(&out).unwrap();
    assert_eq!(json["kind"], "diagnostic");
    assert_eq!(json["category"], "Moderate");
    assert!((json["score"].as_f64().unwrap() - tests::WORKED_EXAMPLE_SCORE).abs() < 1e-9);
    assert_eq!(
        json["recommendations"][0],
        "Cardiology consultation recommended"
    );
    assert_eq!(json["breakdown"]["contributions"].as_array().unwrap().len(), 9);
}

#[test]
fn text_report_for_pairs_only() {
    let out = execute(&Invocation {
        set: pairs(&["mean_ecv=33", "lv_strain=-11", "age=80", "diabetes=yes"]),
        format: OutputMode::Text,
        ..invocation(FormKind::Prognostic)
    })
    .unwrap();
    // 25 + 20 + 20 + 10
    assert!(out.starts_with("Prognostic Risk Assessment\n"), "{out}");
    assert!(out.contains("Risk Score: 75/100"), "{out}");
    assert!(out.contains("High Risk"));
    assert!(out.contains("  - Intensive heart failure management"));
}

#[test]
fn treatment_json_lists_rules_in_order() {
    let report = evaluate(
        FormKind::Treatment,
        Some(r#"{"baseline_ecv": 35, "baseline_pasp": 50, "symptom_score": 80, "exercise_capacity": 200}"#),
        &[],
        ParseMode::Strict,
    )
    .unwrap();
    let out = hfpef::render::render(&report, OutputMode::Json).unwrap();
    let json: Value = serde_json::from_str(&out).unwrap();
    let rules: Vec<&str> = json["recommendations"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["rule"].as_str().unwrap())
        .collect();
    assert_eq!(
        rules,
        vec![
            "raas_inhibition",
            "volume_management",
            "anti_fibrotic",
            "symptom_management",
            "exercise_training",
        ]
    );
}

#[test]
fn stable_regimen_gets_no_advice() {
    let out = execute(&Invocation {
        set: pairs(&[
            "ace_arb=true",
            "beta_blocker=true",
            "diuretic=true",
            "mra=true",
            "baseline_pasp=20",
        ]),
        format: OutputMode::Text,
        ..invocation(FormKind::Treatment)
    })
    .unwrap();
    assert!(out.contains("No changes suggested"), "{out}");

    let report = evaluate(FormKind::Treatment, None, &[], ParseMode::Strict).unwrap();
    let Report::Treatment { recommendations } = report else {
        panic!("expected a treatment report")
    };
    assert!(recommendations.is_empty());
}

#[test]
fn strict_runs_fail_on_bad_text() {
    let err = execute(&Invocation {
        set: pairs(&["pasp=high"]),
        mode: ParseMode::Strict,
        ..invocation(FormKind::Diagnostic)
    })
    .unwrap_err();
    assert!(matches!(
        err,
        CliError::Input(InputError::InvalidNumber { ref field, .. }) if field == "pasp"
    ));

    let err = execute(&Invocation {
        set: pairs(&["heart_rate=70"]),
        mode: ParseMode::Strict,
        ..invocation(FormKind::Diagnostic)
    })
    .unwrap_err();
    assert!(matches!(
        err,
        CliError::Input(InputError::UnknownField { form: "diagnostic", .. })
    ));

    let err = execute(&Invocation {
        set: pairs(&["pasp"]),
        ..invocation(FormKind::Diagnostic)
    })
    .unwrap_err();
    assert!(matches!(err, CliError::Input(InputError::MalformedPair(_))));
}

#[test]
fn malformed_json_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.json");
    fs::write(&path, "{ \"age\": ").unwrap();
    let err = execute(&Invocation {
        input: Some(path),
        ..invocation(FormKind::Diagnostic)
    })
    .unwrap_err();
    assert!(matches!(err, CliError::Json(_)));
}

#[test]
fn config_file_supplies_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("hfpef.toml");
    fs::write(&path, "format = \"json\"\nstrict = true\nlog_level = \"debug\"\n").unwrap();

    let config = Config::load(Some(path.as_path())).unwrap();
    assert_eq!(
        config,
        Config {
            format: OutputMode::Json,
            strict: true,
            log_level: Some("debug".to_string()),
        }
    );

    let mut config = config;
    config
        .apply_env_overrides(|var| (var == "HFPEF_FORMAT").then(|| "text".to_string()))
        .unwrap();
    assert_eq!(config.format, OutputMode::Text);
    assert!(config.strict);
}

#[test]
fn config_errors_name_the_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("hfpef.toml");
    fs::write(&path, "colour = \"red\"\n").unwrap();
    let err = Config::load(Some(path.as_path())).unwrap_err();
    assert!(err.to_string().contains("hfpef.toml"), "{err}");

    let missing = dir.path().join("missing.toml");
    assert!(Config::load(Some(missing.as_path())).is_err());
}
