use riskscan::analyzer::parser::ResponseParser;
use riskscan::models::NO_RECOMMENDATIONS;
use riskscan::{ContentType, RiskLevel};
use serde_json::json;

fn body(content: &str) -> String {
    json!({ "choices": [{ "message": { "role": "assistant", "content": content } }] }).to_string()
}

#[test]
fn test_typical_phishing_reply() {
    let reply = "\
This email shows several signs of phishing and should be treated as HIGH RISK.

Key concerns:
- The sender domain does not match the bank's official domain
- The message creates false urgency

Recommendations:
• Do not click any links
• Report the message to your IT team";

    let result = ResponseParser::parse(&body(reply), ContentType::Email, "Urgent: verify now").unwrap();

    assert_eq!(result.risk_level, RiskLevel::High);
    assert_eq!(
        result.recommendations,
        vec![
            "The sender domain does not match the bank's official domain",
            "The message creates false urgency",
            "Do not click any links",
            "Report the message to your IT team",
        ]
    );
    assert_eq!(result.analysis, reply);
}

#[test]
fn test_numbered_lists_are_not_recommendations() {
    let reply = "Low risk.\n1. Keep software updated\n2. Use a password manager";
    let result = ResponseParser::parse(&body(reply), ContentType::Image, "screenshot").unwrap();

    assert_eq!(result.risk_level, RiskLevel::Low);
    assert_eq!(result.recommendations, vec![NO_RECOMMENDATIONS]);
}

#[test]
fn test_only_first_choice_is_used() {
    let body = json!({
        "choices": [
            { "message": { "content": "medium risk\n- first" } },
            { "message": { "content": "high risk\n- second" } }
        ]
    })
    .to_string();

    let result = ResponseParser::parse(&body, ContentType::Email, "mail").unwrap();
    assert_eq!(result.risk_level, RiskLevel::Medium);
    assert_eq!(result.recommendations, vec!["first"]);
}

#[test]
fn test_null_content_is_malformed() {
    let body = json!({ "choices": [{ "message": { "content": null } }] }).to_string();
    assert!(ResponseParser::parse(&body, ContentType::Email, "mail").is_err());
}

#[test]
fn test_empty_choices_is_malformed() {
    let body = json!({ "choices": [] }).to_string();
    assert!(ResponseParser::parse(&body, ContentType::Email, "mail").is_err());
}
