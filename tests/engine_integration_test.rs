use solid_kata::principles::{self, KNOWN_PRINCIPLES};
use solid_kata::{DemoEngine, DemoReport};

#[tokio::test]
async fn test_end_to_end_run_covers_all_principles() {
    let demos = principles::build(&[], "Ana").unwrap();
    let engine = DemoEngine::new(demos);

    let reports = engine.run().await.unwrap();

    assert_eq!(reports.len(), KNOWN_PRINCIPLES.len());
    let names: Vec<&str> = reports.iter().map(|r| r.principle.as_str()).collect();
    assert_eq!(names, KNOWN_PRINCIPLES.to_vec());

    // Every demonstration produced observable output.
    for report in &reports {
        assert!(!report.lines.is_empty(), "{} produced no lines", report.principle);
    }
}

#[tokio::test]
async fn test_headline_assertions_hold_across_the_run() {
    let demos = principles::build(&[], "Ana").unwrap();
    let reports = DemoEngine::new(demos).run().await.unwrap();

    let find = |principle: &str| -> &DemoReport {
        reports.iter().find(|r| r.principle == principle).unwrap()
    };

    // The legacy blood check is deliberately inverted, the contract-based
    // approvers pass every submitted exam.
    let ocp = find("ocp");
    assert!(ocp
        .lines
        .iter()
        .any(|l| l == "legacy check rejected the blood exam"));
    assert!(ocp.lines.iter().any(|l| l == "Blood Exam Approved"));
    assert!(ocp.lines.iter().any(|l| l == "RayX Exam Approved"));

    // Only the seller earns commission.
    let isp = find("isp");
    let commissions = isp
        .lines
        .iter()
        .filter(|l| *l == "Generating Commission")
        .count();
    assert_eq!(commissions, 1);

    // The study line follows the configured student name.
    let lsp = find("lsp");
    assert!(lsp.lines.iter().any(|l| l == "Ana is studying"));
    assert!(lsp.lines.iter().any(|l| l == "Ana is studying and searching"));
}

#[tokio::test]
async fn test_student_name_flows_from_config_to_output() {
    let demos = principles::build(&["lsp".to_string()], "Rui").unwrap();
    let reports = DemoEngine::new(demos).run().await.unwrap();

    assert_eq!(reports.len(), 1);
    assert!(reports[0].lines.iter().any(|l| l == "Rui is studying"));
}

#[tokio::test]
async fn test_transcript_reports_serialize_and_restore() {
    let demos = principles::build(&["srp".to_string()], "Ana").unwrap();
    let reports = DemoEngine::new(demos).run().await.unwrap();

    let temp_dir = tempfile::TempDir::new().unwrap();
    let path = temp_dir.path().join("transcript.json");
    std::fs::write(&path, serde_json::to_string_pretty(&reports).unwrap()).unwrap();

    let restored: Vec<DemoReport> =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(restored.len(), 1);
    assert_eq!(restored[0].principle, "srp");
    assert_eq!(restored[0].lines, reports[0].lines);
}
