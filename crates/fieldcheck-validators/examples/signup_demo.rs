//! Signup form validation demo
//!
//! Run with `RUST_LOG=fieldcheck_core=trace` to see the engine's traces.
//!
//! Copyright (c) 2026 Fieldcheck Team
//! Licensed under the Apache-2.0 license

use fieldcheck_core::{
    run, run_with_config, Base, MessageCatalog, Messages, Plugin, PluginEntry, Plugins,
    ValidationConfig, Validate, Validators,
};
use fieldcheck_validators::{custom, max, min, min_length, required};
use tracing_subscriber::EnvFilter;

struct Signup {
    username: String,
    password: String,
    confirm: String,
    age: i64,
    strict: bool,
}

impl Validate for Signup {
    fn is_strict(&self) -> bool {
        self.strict
    }

    fn validators(&self) -> Validators<'_> {
        Validators::from([
            (
                "username".to_string(),
                vec![required(&self.username), min_length(&self.username, 3)],
            ),
            ("age".to_string(), vec![min(self.age, 10), max(self.age, 120)]),
        ])
    }

    fn messages(&self) -> Messages {
        Messages::from([("username".to_string(), vec!["用户名必须存在".to_string()])])
    }

    fn plugins(&self) -> Plugins<'_> {
        vec![Plugin::new(move || {
            PluginEntry::new(
                "confirm",
                vec![custom(move || self.password == self.confirm, "$name 与密码不一致")],
                vec![],
            )
        })]
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Fieldcheck Signup Demo ===\n");

    let mut signup = Signup {
        username: String::new(),
        password: "hunter2".to_string(),
        confirm: "hunter3".to_string(),
        age: 9,
        strict: false,
    };

    println!("--- Lenient run ---");
    let (report, ok) = run(&signup);
    println!("ok = {}", ok);
    print!("{}", report);
    println!("json = {}", serde_json::to_string_pretty(&report)?);

    println!("\n--- Strict run ---");
    signup.strict = true;
    let (report, ok) = run(&signup);
    println!("ok = {}", ok);
    print!("{}", report);

    println!("\n--- Config with message catalog ---");
    let catalog = MessageCatalog::from_json_str(r#"{"username": ["", "username is too short"]}"#)?;
    let username = "ab";
    let config = ValidationConfig::lenient()
        .with_validators("username", vec![required(username), min_length(username, 3)])
        .with_message_catalog(catalog);
    let (report, _) = run_with_config(&Base, config);
    print!("{}", report);

    println!("\n--- Valid signup ---");
    let valid = Signup {
        username: "xiaoming".to_string(),
        password: "hunter2".to_string(),
        confirm: "hunter2".to_string(),
        age: 18,
        strict: true,
    };
    match valid.validate() {
        Ok(()) => println!("Valid!"),
        Err(report) => print!("{}", report),
    }

    Ok(())
}
