//! Basic usage: rules, aggregation, and translation.
//!
//! Run with: `cargo run --example basic_usage`

use fieldval::prelude::*;

struct User {
    first_name: String,
    email: String,
    password: String,
    age: i64,
}

impl Validatable for User {
    fn validations(&self) -> Evaluations {
        vec![
            required("FirstName", self.first_name.as_str()),
            min_length("FirstName", &self.first_name, 2),
            required("Email", self.email.as_str()),
            email("Email", &self.email),
            required("Password", self.password.as_str()),
            min_length("Password", &self.password, 8),
            between("Age", self.age, 18, 100),
        ]
    }
}

fn main() {
    let user = User {
        first_name: "J".into(),
        email: "not-an-email".into(),
        password: "hunter2".into(),
        age: 16,
    };

    let validator = Validator::new();
    let Err(errors) = validator.validate(&user) else {
        println!("user is valid");
        return;
    };

    println!("{} violation(s): {errors}", errors.len());

    // Default (Turkish) messages.
    let translator = Translator::new();
    for error in &errors {
        println!("  - {}", translator.translate(error));
    }

    // Custom English messages; untranslated keys fall back to themselves.
    let english = Translator::with_messages([
        (keys::REQUIRED, "The {{Field}} field is required"),
        (keys::MIN_LENGTH, "{{Field}} must be at least {{Min}} characters"),
        (keys::EMAIL, "{{Field}} must be a valid email address"),
        (keys::BETWEEN, "{{Field}} must be between {{Min}} and {{Max}}"),
    ])
    .expect("static templates parse");

    for error in &errors {
        println!("  - {}", english.translate(error));
    }
}
