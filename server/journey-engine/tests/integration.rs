//! Integration tests for the journey engine.

use journey_engine::{run, BusinessValue, Complexity, EngineInput, RiskLevel, SourceFile};

fn fixture_input() -> EngineInput {
  let json = r#"{
    "files": [
      {"path": "src/math/vector.rs", "content": "pub fn add(a: f64, b: f64) -> f64 { a + b }", "size": 44},
      {"path": "README.md", "content": "Vector maths crate", "size": 18}
    ],
    "journeys": [
      {
        "name": "User Login and Authentication",
        "description": "User logs into the application using email and password",
        "steps": [
          "User navigates to login page",
          "User enters email and password",
          "User clicks login button"
        ]
      },
      {
        "name": "FAQ Page",
        "description": "Read the help articles",
        "steps": ["Open the help center"]
      }
    ]
  }"#;
  serde_json::from_str(json).unwrap()
}

fn checkout_repo() -> Vec<SourceFile> {
  let mut files = Vec::new();
  for i in 0..25 {
    let content = format!(
      "import {{ api }} from './api{i}';\nimport cart from 'cart-lib-{i}';\nexport function checkout{i}() {{\n  if (cart && api) {{ return checkout; }}\n  for (const item of cart) {{ total += item.price > 0 ? item.price : 0; }}\n}}\n"
    );
    files.push(SourceFile {
      path: format!("src/checkout/step{i}.ts"),
      size: content.len() as u64,
      content,
    });
  }
  files.push(SourceFile {
    path: "src/unrelated/theme.css".into(),
    content: "body { color: red; }".into(),
    size: 20,
  });
  files
}

#[test]
fn login_journey_without_matching_files_is_medium_risk() {
  let input = fixture_input();
  let out = run(&input.files, &input.journeys).unwrap();

  let login = &out.journey_risks[0];
  assert_eq!(login.business_value, BusinessValue::High);
  assert!(login.complexity_analysis.files_involved.is_empty());
  assert!(login.complexity_analysis.dependencies.is_empty());
  assert_eq!(login.complexity_analysis.lines_of_code, 0);
  assert_eq!(login.complexity_analysis.cyclomatic_complexity, 0);
  assert_eq!(login.complexity, Complexity::Low);
  assert_eq!(login.risk_level, RiskLevel::Medium);
  assert!(login
    .reasoning
    .starts_with("High business value: Journey involves critical business functions (authentication, login)"));
  assert!(login.reasoning.contains("MEDIUM RISK:"));
  assert!(login.reasoning.ends_with(
    "Complexity Details: 0 files involved, 0 lines of code, 0 dependencies, cyclomatic complexity of 0."
  ));
}

#[test]
fn help_and_faq_journey_is_low_value() {
  let input = fixture_input();
  let out = run(&input.files, &input.journeys).unwrap();

  let faq = &out.journey_risks[1];
  assert_eq!(faq.business_value, BusinessValue::Low);
  assert!(faq
    .reasoning
    .starts_with("Low business value: Journey involves non-critical functions (help, faq)"));
  assert_eq!(faq.risk_level, RiskLevel::Low);
}

#[test]
fn checkout_journey_links_capped_ranked_files() {
  let files = checkout_repo();
  let journeys = vec![journey_engine::Journey {
    name: "Checkout".into(),
    description: "Pay for the cart".into(),
    steps: vec!["Review cart".into(), "Confirm checkout".into()],
  }];
  let out = run(&files, &journeys).unwrap();
  let result = &out.journey_risks[0];
  let analysis = &result.complexity_analysis;

  assert_eq!(analysis.files_involved.len(), 20);
  assert!(!analysis
    .files_involved
    .iter()
    .any(|p| p.contains("unrelated")));
  // All checkout files score equally, so input order is kept.
  assert_eq!(analysis.files_involved[0], "src/checkout/step0.ts");
  assert_eq!(analysis.files_involved[19], "src/checkout/step19.ts");

  // 2 imports per file, all distinct across 20 files.
  assert_eq!(analysis.dependencies.len(), 40);
  // 6 non-blank lines per file (the closing brace counts).
  assert_eq!(analysis.lines_of_code, 20 * 6);
  // if( + && + for( + ternary per file.
  assert_eq!(analysis.cyclomatic_complexity, 20 * 4);

  // files 3 + loc 0 + deps 3 + cyclomatic 2 = 8
  assert_eq!(result.complexity, Complexity::High);
  assert_eq!(result.business_value, BusinessValue::High);
  assert_eq!(result.risk_level, RiskLevel::Critical);
}

#[test]
fn summary_counts_sum_to_total() {
  let mut input = fixture_input();
  input.files = checkout_repo();
  input.journeys.push(journey_engine::Journey {
    name: "Checkout".into(),
    description: "Pay for the cart".into(),
    steps: vec!["Confirm checkout".into()],
  });
  let out = run(&input.files, &input.journeys).unwrap();
  let s = out.summary;
  assert_eq!(s.total_journeys, 3);
  assert_eq!(s.high_risk + s.medium_risk + s.low_risk, s.total_journeys);
}

#[test]
fn output_json_uses_camel_case_contract() {
  let input = fixture_input();
  let out = run(&input.files, &input.journeys).unwrap();
  let value = serde_json::to_value(&out).unwrap();

  let first = &value["journeyRisks"][0];
  assert_eq!(first["businessValue"], "high");
  assert_eq!(first["riskLevel"], "medium");
  assert_eq!(first["complexity"], "low");
  assert_eq!(first["complexityAnalysis"]["filesInvolved"], serde_json::json!([]));
  assert_eq!(first["complexityAnalysis"]["linesOfCode"], 0);
  assert_eq!(first["journey"]["name"], "User Login and Authentication");
  assert_eq!(value["summary"]["totalJourneys"], 2);
  assert_eq!(value["summary"]["mediumRisk"], 1);
  assert_eq!(value["summary"]["lowRisk"], 1);
}

#[test]
fn deterministic_output_across_runs() {
  let files = checkout_repo();
  let input = fixture_input();
  let a = serde_json::to_string(&run(&files, &input.journeys).unwrap()).unwrap();
  let b = serde_json::to_string(&run(&files, &input.journeys).unwrap()).unwrap();
  assert_eq!(a, b, "Same inputs must produce identical JSON output");
}

#[test]
fn unknown_fields_are_ignored_and_size_is_optional() {
  let json = r#"{
    "files": [{"path": "a.ts", "content": "x", "extra": true}],
    "journeys": [{"name": "n", "description": "d", "steps": ["s"], "priority": 3}]
  }"#;
  let input: EngineInput = serde_json::from_str(json).unwrap();
  assert_eq!(input.files[0].size, 0);
  assert!(run(&input.files, &input.journeys).is_ok());
}
