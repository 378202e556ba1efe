//! Integration tests for the FAQ responder and `heroline ask`

use super::helpers::{run_heroline, stdout_of, temp_fixture};
use heroline::faq::Responder;

#[test]
fn ask_answers_why_hire_for_configured_owner() {
    let (_temp_dir, config) = temp_fixture("highlight.toml");
    let output = run_heroline(&config, &["ask", "Why", "should", "I", "hire", "you?"]);

    assert!(output.status.success());
    insta::assert_snapshot!(stdout_of(&output).trim_end(), @r"
    Why work with Max:

      - Consistent, recognized performance
      - Measurable impact in production systems
      - Comfortable from ML models to deployed APIs
      - Always learning
    ");
}

#[test]
fn ask_falls_back_to_menu() {
    let (_temp_dir, config) = temp_fixture("highlight.toml");
    let output = run_heroline(&config, &["ask", "zzz"]);

    assert!(output.status.success());
    assert!(stdout_of(&output).starts_with("I can tell you about Max's:"));
}

#[test]
fn every_builtin_topic_is_reachable() {
    let responder = Responder::builtin("Max");
    let cases = [
        ("Tell me about your work", "experience"),
        ("What is your tech stack?", "skills"),
        ("Do you write Python?", "python"),
        ("Do you do machine learning?", "machine-learning"),
        ("Show me a project", "projects"),
        ("Any awards?", "achievements"),
        ("Which degree do you have?", "education"),
        ("Why should we hire you?", "why-hire"),
        ("How can I contact you?", "contact"),
        ("Where do you live?", "location"),
        ("Are you looking for a new role?", "availability"),
        ("Do you know AWS?", "cloud"),
        ("Tell me about Bosch", "employer"),
        ("Do you use Django?", "frameworks"),
        ("hey there", "greeting"),
        ("thank you!", "thanks"),
    ];

    for (question, topic) in cases {
        let rule = responder.find_rule(question);
        assert_eq!(rule.map(|r| r.topic), Some(topic), "question: {}", question);
        assert!(responder.respond(question).contains("Max"));
    }
}

#[test]
fn job_questions_answer_experience_first() {
    let responder = Responder::builtin("Max");
    let rule = responder.find_rule("Are you looking for a job?");
    assert_eq!(rule.map(|r| r.topic), Some("experience"));
}
