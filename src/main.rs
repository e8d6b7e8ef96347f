//! Username Registry - availability checking demo
//!
//! Checks usernames against the registry, suggests alternatives for taken
//! ones and reports which taken username was requested most.

use std::env;
use std::process;
use tracing_subscriber::EnvFilter;
use username_registry::{
    AvailabilityStatus, Result, ServiceConfig, SessionReport, UsernameResult, UsernameService,
};

fn main() -> Result<()> {
    // Initialize the library
    if let Err(e) = username_registry::init() {
        eprintln!("❌ Failed to initialize: {}", e);
        process::exit(1);
    }
    init_logging();

    let args: Vec<String> = env::args().skip(1).collect();

    if args.iter().any(|a| a == "--help" || a == "-h") {
        print_help();
        return Ok(());
    }

    if let Some(unknown) = args.iter().find(|a| a.starts_with('-') && a.as_str() != "--json") {
        eprintln!("❌ Unknown option: {}", unknown);
        eprintln!();
        print_help();
        process::exit(1);
    }

    let json = args.iter().any(|a| a == "--json");
    let usernames: Vec<String> = args.into_iter().filter(|a| a != "--json").collect();

    let service = match build_service() {
        Ok(service) => service,
        Err(e) => {
            eprintln!("{}", e.user_message());
            process::exit(1);
        }
    };

    if usernames.is_empty() && !json {
        run_demo(&service);
    } else if usernames.is_empty() {
        print_json(&service, &demo_usernames())?;
    } else if json {
        print_json(&service, &usernames)?;
    } else {
        run_checks(&service, &usernames);
    }

    Ok(())
}

/// Log to stderr, filtered by `RUST_LOG` (default `warn`)
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn build_service() -> Result<UsernameService> {
    let config = ServiceConfig::from_env()?;
    tracing::debug!(?config, "Service configuration loaded");
    UsernameService::with_config(&config)
}

fn demo_usernames() -> Vec<String> {
    ["john_doe", "jane_smith", "admin", "admin"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

/// Walk through the standard scenario with the seeded registry
fn run_demo(service: &UsernameService) {
    // 1. Availability
    println!("Is 'john_doe' available? {}", service.check_availability("john_doe"));
    println!("Is 'jane_smith' available? {}", service.check_availability("jane_smith"));

    // 2. Suggestions
    if !service.check_availability("john_doe") {
        match service.suggest_alternatives("john_doe") {
            Ok(suggestions) => {
                println!("Suggestions for 'john_doe': [{}]", suggestions.join(", "))
            }
            Err(e) => eprintln!("{}", e.user_message()),
        }
    }

    // 3. Popularity
    service.check_availability("admin");
    service.check_availability("admin");
    println!("Most attempted username: {}", service.most_attempted_or_default());
}

fn check_one(service: &UsernameService, username: &str) -> UsernameResult {
    let status = AvailabilityStatus::from(service.check_availability(username));
    let mut result = UsernameResult {
        username: username.to_string(),
        status,
        suggestions: Vec::new(),
        error_message: None,
    };

    if status == AvailabilityStatus::Taken {
        match service.suggest_alternatives(username) {
            Ok(suggestions) => result.suggestions = suggestions,
            Err(e) => result.error_message = Some(e.to_string()),
        }
    }

    result
}

/// Check each username and print results in a readable format
fn run_checks(service: &UsernameService, usernames: &[String]) {
    println!("🔍 Checking username availability...");
    println!("═══════════════════════════════════");
    println!();

    let mut available = 0;
    let mut taken = 0;

    for username in usernames {
        let result = check_one(service, username);
        match result.status {
            AvailabilityStatus::Available => {
                available += 1;
                println!("✅ {} - AVAILABLE", result.username);
            }
            AvailabilityStatus::Taken => {
                taken += 1;
                println!("❌ {} - TAKEN", result.username);
                if !result.suggestions.is_empty() {
                    println!("   💡 Try: {}", result.suggestions.join(", "));
                }
                if let Some(message) = &result.error_message {
                    println!("   ⚠️  {}", message);
                }
            }
        }
    }

    println!();
    println!("📈 Summary:");
    println!("   ✅ Available: {}", available);
    println!("   ❌ Taken: {}", taken);
    println!("   🔥 Most attempted: {}", service.most_attempted_or_default());
}

fn print_json(service: &UsernameService, usernames: &[String]) -> Result<()> {
    let results = usernames
        .iter()
        .map(|username| check_one(service, username))
        .collect();

    let report = SessionReport {
        results,
        most_attempted: service.most_attempted(),
        attempts: service.snapshot(),
    };

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

/// Print help information
fn print_help() {
    println!("🔎 Username Registry - availability checking demo");
    println!("═══════════════════════════════════════════════════");
    println!();
    println!("USAGE:");
    println!("    username-registry [--json] [USERNAME...]");
    println!();
    println!("EXAMPLES:");
    println!("    username-registry                      # Run the built-in demo");
    println!("    username-registry admin jane_smith     # Check specific usernames");
    println!("    username-registry --json admin         # Machine-readable report");
    println!();
    println!("ENVIRONMENT VARIABLES:");
    println!("    USERNAME_SEED_FILE                 JSON object of username -> owner id");
    println!("    USERNAME_SUGGESTIONS               Alternatives per taken name (default: 3)");
    println!("    USERNAME_MAX_SUGGESTION_ATTEMPTS   Suffixes probed before giving up (default: 1000)");
    println!("    RUST_LOG                           Log filter (default: warn)");
}
