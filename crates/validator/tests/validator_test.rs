//! End-to-end aggregation tests against realistic entities.

use chrono::{DateTime, Duration, TimeZone, Utc};
use fieldval::prelude::*;
use pretty_assertions::assert_eq;

// ============================================================================
// ENTITIES
// ============================================================================

struct User {
    first_name: String,
    last_name: String,
    email: String,
    password: String,
    age: i64,
}

impl Validatable for User {
    fn validations(&self) -> Evaluations {
        vec![
            required("FirstName", self.first_name.as_str()),
            required("LastName", self.last_name.as_str()),
            min_length("FirstName", &self.first_name, 2),
            min_length("LastName", &self.last_name, 2),
            required("Email", self.email.as_str()),
            email("Email", &self.email),
            required("Password", self.password.as_str()),
            min_length("Password", &self.password, 8),
            required("Age", self.age),
            between("Age", self.age, 18, 100),
        ]
    }
}

struct Business {
    title: String,
    description: String,
    founded_at: DateTime<Utc>,
}

impl Business {
    fn window() -> (DateTime<Utc>, DateTime<Utc>) {
        let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        (start, start + Duration::days(1))
    }
}

impl Validatable for Business {
    fn validations(&self) -> Evaluations {
        let (min, max) = Self::window();
        vec![
            required("Title", self.title.as_str()),
            required("Description", self.description.as_str()),
            required("FoundedAt", self.founded_at),
            min_length("Title", &self.title, 3),
            max_length("Title", &self.title, 100),
            min_length("Description", &self.description, 10),
            max_length("Description", &self.description, 1000),
            date_greater_than("FoundedAt", self.founded_at, min),
            date_less_than("FoundedAt", self.founded_at, max),
        ]
    }
}

fn valid_user() -> User {
    User {
        first_name: "John".into(),
        last_name: "Doe".into(),
        email: "john@example.com".into(),
        password: "supersecret".into(),
        age: 30,
    }
}

// ============================================================================
// AGGREGATION
// ============================================================================

#[test]
fn valid_user_passes() {
    assert!(Validator::new().validate(&valid_user()).is_ok());
}

#[test]
fn invalid_user_collects_every_violation_in_order() {
    let user = User {
        first_name: String::new(),
        last_name: "Doe".into(),
        email: "not-an-email".into(),
        password: "short".into(),
        age: 17,
    };

    let errors = Validator::new().validate(&user).unwrap_err();

    let collected: Vec<(&str, &str)> = errors
        .iter()
        .map(|e| (e.field.as_ref(), e.message_key.as_ref()))
        .collect();

    assert_eq!(
        collected,
        vec![
            ("FirstName", "validation.required"),
            ("FirstName", "validation.min_length"),
            ("Email", "validation.email"),
            ("Password", "validation.min_length"),
            ("Age", "validation.between"),
        ]
    );
}

#[test]
fn collection_display_joins_keys_with_semicolons() {
    let user = User {
        email: "bad".into(),
        age: 10,
        ..valid_user()
    };

    let errors = Validator::new().validate(&user).unwrap_err();
    assert_eq!(errors.to_string(), "validation.email; validation.between");
}

#[test]
fn business_date_window() {
    let (min, _) = Business::window();

    let ok = Business {
        title: "Acme Corp".into(),
        description: "We make everything".into(),
        founded_at: min + Duration::hours(12),
    };
    assert!(Validator::new().validate(&ok).is_ok());

    let too_early = Business {
        founded_at: min - Duration::hours(1),
        ..ok
    };
    let errors = Validator::new().validate(&too_early).unwrap_err();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors.errors()[0].message_key, keys::DATE_GREATER_THAN);
}

#[test]
fn validator_instance_is_reusable_across_entities() {
    let validator = Validator::new();

    let bad = User {
        age: 5,
        ..valid_user()
    };
    assert_eq!(validator.validate(&bad).unwrap_err().len(), 1);

    // No stale state: the same instance passes a clean entity afterwards.
    assert!(validator.validate(&valid_user()).is_ok());
}

#[test]
fn errors_translate_with_defaults() {
    let user = User {
        first_name: String::new(),
        ..valid_user()
    };

    let errors = Validator::new().validate(&user).unwrap_err();
    let translator = Translator::new();

    let rendered: Vec<String> = errors.iter().map(|e| translator.translate(e)).collect();
    assert_eq!(
        rendered,
        vec![
            "FirstName alanı zorunludur",
            "FirstName en az 2 karakter olmalıdır",
        ]
    );
}

#[test]
fn errors_serialize_for_api_responses() {
    let user = User {
        age: 17,
        ..valid_user()
    };

    let errors = Validator::new().validate(&user).unwrap_err();
    let json = errors.errors()[0].to_json_value();

    assert_eq!(json["field"], "Age");
    assert_eq!(json["message_key"], "validation.between");
    assert_eq!(json["params"]["Min"], 18);
    assert_eq!(json["params"]["Max"], 100);
    assert_eq!(json["current_value"], 17);
}
