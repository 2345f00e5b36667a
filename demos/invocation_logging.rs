//! Invocation logging demonstration.
//!
//! This example shows the round trip of an invocation record:
//! 1. Resolve a service method once
//! 2. Produce tagged requests for individual calls
//! 3. Let observers read the invocation back from each request
//!
//! Run with: `cargo run --example invocation_logging`

use std::sync::Arc;

use invocation_core::{
    Argument, ContextToken, ExtractInvocation, InvocationLogger, InvocationTrail, LoggerConfig,
    Operation, Request, RequestObserver, ServiceMethod,
};

#[derive(Debug)]
struct CoroutineId(u64);

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    println!("=== Invocation Logging Example ===\n");

    let contributors = ServiceMethod::new(
        Operation::new("api::GitHubService", "contributors").with_parameters(["String", "String"]),
        "GET",
        "repos/contributors",
    );
    let repos = ServiceMethod::new(
        Operation::new("api::GitHubService", "repos").with_parameter("String"),
        "GET",
        "users/repos",
    );

    let trail = Arc::new(InvocationTrail::new());
    let observers: Vec<Box<dyn RequestObserver>> = vec![
        Box::new(InvocationLogger::new()),
        Box::new(InvocationLogger::with_config(
            LoggerConfig::default()
                .with_level(tracing::Level::DEBUG)
                .with_arguments(false),
        )),
        Box::new(Arc::clone(&trail)),
    ];

    // Scenario 1: Ordinary calls
    println!("--- Scenario 1: Ordinary calls ---");
    let requests = vec![
        contributors.to_request(
            "https://api.github.com",
            vec![Argument::new("square"), Argument::new("retrofit")],
            None,
        ),
        repos.to_request("https://api.github.com", vec![Argument::new("octocat")], None),
    ];

    // Scenario 2: A call made from a suspending context
    println!("--- Scenario 2: Suspending call ---");
    let suspended = contributors.to_request(
        "https://api.github.com",
        vec![Argument::new("rust-lang"), Argument::new("rust")],
        Some(ContextToken::new(CoroutineId(17))),
    );

    // Scenario 3: A request that no service method produced
    println!("--- Scenario 3: Untagged request ---");
    let untagged = Request::new("GET", "https://api.github.com/rate_limit");

    for request in requests.iter().chain([&suspended, &untagged]) {
        for observer in &observers {
            observer.observe(request);
        }
    }

    if let Some(invocation) = suspended.invocation() {
        let coroutine = invocation
            .execution_context()
            .and_then(|token| token.downcast_ref::<CoroutineId>());
        println!("\nSuspended call {} ran on {:?}", invocation, coroutine);
    }

    println!("\n=== Recorded Invocations ===");
    for (i, invocation) in trail.invocations().iter().enumerate() {
        println!("{}. {}", i + 1, invocation.describe());
    }
}
