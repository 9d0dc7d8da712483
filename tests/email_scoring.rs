use phishguard::enums::verdict::Verdict;
use phishguard::services::email_analyzer::EmailAnalyzer;
use phishguard::structs::config::email_rules_config::EmailRulesConfig;
use crate::common::email_analyzer;

const MISMATCHED_REPLY_TO: &str = "From: service@shop.example
Reply-To: help@other.example
Subject: Notice

Dear Customer,

This is urgent. Please review http://shop.example/review today.

Thanks
";

#[test]
fn each_signal_contributes_its_documented_weight() {
    let result = email_analyzer().analyze(MISMATCHED_REPLY_TO);

    // mismatch 15 + greeting 10 + urgency 10 + one link 5
    assert_eq!(result.risk_score, 40);
    assert_eq!(result.verdict, Verdict::HighRisk);
    assert_eq!(result.patterns_found, vec!["urgency: 1 instances".to_string()]);
    assert_eq!(result.links_found, vec!["http://shop.example/review".to_string()]);
    assert_eq!(
        result.findings,
        vec![
            "urgency: 1 instances".to_string(),
            "Found 1 URLs in email".to_string(),
            "From and Reply-To addresses don't match".to_string(),
            "Generic greeting used".to_string(),
        ]
    );
    assert_eq!(result.email_hash.len(), 16);
}

#[test]
fn ordinary_correspondence_is_clean() {
    let email = "From: alice@example.com\nTo: bob@example.com\nSubject: Lunch\n\nHi Bob,\nSee you at noon.\nAlice\n";
    let result = email_analyzer().analyze(email);

    assert_eq!(result.risk_score, 0);
    assert_eq!(result.verdict, Verdict::Clean);
    assert!(result.findings.is_empty());
    assert!(result.patterns_found.is_empty());
}

#[test]
fn crlf_headers_with_identical_values_do_not_mismatch() {
    let email = "From: a@x.com\r\nReply-To: a@x.com\r\n\r\nhello";
    let result = email_analyzer().analyze(email);
    assert_eq!(result.risk_score, 0);
}

#[test]
fn hash_depends_only_on_content() {
    let analyzer = email_analyzer();
    let a = analyzer.analyze("same text");
    let b = analyzer.analyze("same text");
    let c = analyzer.analyze("other text");

    assert_eq!(a.email_hash, b.email_hash);
    assert_ne!(a.email_hash, c.email_hash);
}

#[test]
fn verdict_bands_follow_email_thresholds() {
    let analyzer = email_analyzer();

    // two links: 10
    assert_eq!(analyzer.analyze("www.a.io www.b.io").verdict, Verdict::Clean);
    // invoice + payment: 20
    assert_eq!(analyzer.analyze("invoice and payment").verdict, Verdict::Suspicious);
    // 3 financial + greeting: 40
    assert_eq!(
        analyzer.analyze("Dear User, invoice, payment, refund").verdict,
        Verdict::HighRisk
    );
}

#[test]
fn greeting_check_can_be_disabled_by_config() {
    let rules = EmailRulesConfig {
        greetings: Vec::new(),
        ..EmailRulesConfig::default()
    };
    let analyzer = EmailAnalyzer::new(&rules).unwrap();
    assert_eq!(analyzer.analyze("Dear Customer,").risk_score, 0);
}

#[test]
fn serialized_result_exposes_email_fields() {
    let result = email_analyzer().analyze(MISMATCHED_REPLY_TO);
    let value = serde_json::to_value(&result).unwrap();

    assert_eq!(value["verdict"], "HIGH RISK");
    assert_eq!(value["risk_score"], 40);
    assert!(value["email_hash"].is_string());
    assert_eq!(value["links_found"][0], "http://shop.example/review");
    assert_eq!(value["patterns_found"][0], "urgency: 1 instances");
}
