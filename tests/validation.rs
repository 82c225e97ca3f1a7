use std::sync::LazyLock;

use newsletter_kit::telemetry::{get_subscriber, init_subscriber};
use newsletter_kit::{validate, Candidate, RejectReason};
use serde_json::json;

static TRACING: LazyLock<()> = LazyLock::new(|| {
    let default_filter_level = "debug".to_string();
    let subscriber_name = "test".to_string();
    match std::env::var("TEST_LOG") {
        Ok(_) => {
            let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::stdout);
            init_subscriber(subscriber);
        }
        Err(_) => {
            let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::sink);
            init_subscriber(subscriber);
        }
    }
});

fn setup() {
    LazyLock::force(&TRACING);
}

#[test]
fn known_good_addresses_are_accepted_and_normalized() {
    setup();
    let fixtures = [
        ("test@example.com", "test@example.com"),
        ("user.name@domain.co.uk", "user.name@domain.co.uk"),
        ("firstname+lastname@example.com", "firstname+lastname@example.com"),
        ("  a@b.com  ", "a@b.com"),
        ("A@B.COM", "a@b.com"),
    ];

    for (candidate, expected) in fixtures {
        let result = validate(candidate);
        let email = result
            .email()
            .unwrap_or_else(|| panic!("{candidate:?} was rejected: {:?}", result.reason()));
        assert_eq!(email.as_ref(), expected, "normalizing {candidate:?}");
    }
}

#[test]
fn known_bad_addresses_are_rejected_with_the_exact_reason() {
    setup();
    let fixtures = [
        ("invalid-email", RejectReason::MissingOrMultipleAt),
        ("a@b@c.com", RejectReason::MissingOrMultipleAt),
        ("@example.com", RejectReason::EmptyLocalOrDomain),
        ("test@", RejectReason::EmptyLocalOrDomain),
        ("test..test@example.com", RejectReason::InvalidLocalPart),
        (".test@example.com", RejectReason::InvalidLocalPart),
        ("test.@example.com", RejectReason::InvalidLocalPart),
        ("test@example", RejectReason::InvalidDomain),
        ("test@example.c", RejectReason::InvalidDomain),
        ("test@example.c0m", RejectReason::InvalidDomain),
        ("test@exa\tmple.com", RejectReason::InvalidCharacters),
        ("te st@example.com", RejectReason::InvalidCharacters),
        ("", RejectReason::EmptyOrWrongType),
        ("   ", RejectReason::EmptyOrWrongType),
    ];

    for (candidate, expected) in fixtures {
        assert_eq!(
            validate(candidate).reason(),
            Some(expected),
            "classifying {candidate:?}"
        );
    }
}

#[test]
fn validation_is_total_over_arbitrary_json_values() {
    setup();
    let bodies = [
        json!(null),
        json!(42),
        json!(1.5),
        json!(true),
        json!(["test@example.com"]),
        json!({"email": "test@example.com"}),
    ];

    for value in bodies {
        let result = validate(Candidate::from(value.clone()));
        assert_eq!(
            result.reason(),
            Some(RejectReason::EmptyOrWrongType),
            "classifying {value}"
        );
    }
}

#[test]
fn normalization_is_idempotent_for_accepted_candidates() {
    setup();
    let candidates = [
        "test@example.com",
        "  MiXeD.CaSe+Tag@Example.Co.UK  ",
        "firstname+lastname@example.com",
    ];

    for candidate in candidates {
        let first = validate(candidate).into_result().expect("fixture is valid");
        let second = validate(first.as_ref())
            .into_result()
            .expect("normalized form must re-validate");
        assert_eq!(first, second, "re-normalizing {candidate:?}");
    }
}

#[test]
fn case_and_whitespace_do_not_affect_the_normalized_form() {
    setup();
    let a = validate("A@B.COM").into_result().expect("valid");
    let b = validate("a@b.com").into_result().expect("valid");
    let c = validate("  a@b.com  ").into_result().expect("valid");
    assert_eq!(a, b);
    assert_eq!(b, c);
}

#[test]
fn a_subscription_body_flows_from_json_to_a_verdict() {
    setup();

    #[derive(serde::Deserialize)]
    struct SubscribeBody {
        #[serde(default)]
        email: Candidate,
    }

    let cases: [(&str, Option<RejectReason>); 5] = [
        (r#"{"email": "Ursula@Example.com"}"#, None),
        (r#"{"email": null}"#, Some(RejectReason::EmptyOrWrongType)),
        (r#"{"email": 42}"#, Some(RejectReason::EmptyOrWrongType)),
        (r#"{}"#, Some(RejectReason::EmptyOrWrongType)),
        (
            r#"{"email": "not-an-email"}"#,
            Some(RejectReason::MissingOrMultipleAt),
        ),
    ];

    for (body, expected) in cases {
        let parsed: SubscribeBody = serde_json::from_str(body).expect("body is valid JSON");
        assert_eq!(validate(parsed.email).reason(), expected, "body {body}");
    }
}

#[test]
fn accepted_emails_serialize_transparently_for_storage() {
    setup();
    let email = validate("Ursula@Example.com")
        .into_result()
        .expect("valid");
    assert_eq!(
        serde_json::to_value(&email).expect("serializes"),
        json!("ursula@example.com")
    );
}
