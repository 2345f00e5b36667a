use invocation_core::{
    Argument, ContextToken, ErrorKind, ExtractInvocation, Invocation, Operation, Request,
    ServiceMethod,
};

fn method_x() -> Operation {
    Operation::new("app::Service", "methodX").with_parameters(["i32", "&str", "bool"])
}

#[test]
fn round_trip_scenario() {
    let record = Invocation::new(
        method_x(),
        &[Argument::new(1_i32), Argument::new("a"), Argument::new(true)],
    );

    assert_eq!(record.operation(), &method_x());

    let args = record.arguments();
    assert_eq!(args.len(), 3);
    assert_eq!(args[0].downcast_ref::<i32>(), Some(&1));
    assert_eq!(args[1].downcast_ref::<&str>(), Some(&"a"));
    assert_eq!(args[2].downcast_ref::<bool>(), Some(&true));

    assert!(record.execution_context().is_none());

    let described = record.describe();
    assert!(described.contains("methodX"));
    assert!(described.contains("app::Service"));
    assert!(described.contains('1'));
    assert!(described.contains("\"a\""));
    assert!(described.contains("true"));
}

#[test]
fn context_present_scenario() {
    struct Continuation;

    let token = ContextToken::new(Continuation);
    let record = Invocation::with_context(method_x(), &[], Some(token.clone()));

    assert!(record.execution_context().unwrap().ptr_eq(&token));
    assert!(record
        .execution_context()
        .unwrap()
        .downcast_ref::<Continuation>()
        .is_some());
}

#[test]
fn missing_inputs_produce_no_record() {
    let without_operation = Invocation::builder().arguments(&[]).build();
    let without_arguments = Invocation::builder().operation(method_x()).build();

    match without_operation {
        Err(err) => assert_eq!(
            err.kind,
            ErrorKind::InvalidArgument {
                parameter: "operation"
            }
        ),
        Ok(_) => panic!("record built without an operation"),
    }
    match without_arguments {
        Err(err) => assert_eq!(
            err.kind,
            ErrorKind::InvalidArgument {
                parameter: "arguments"
            }
        ),
        Ok(_) => panic!("record built without arguments"),
    }
}

#[test]
fn empty_argument_list_is_a_zero_parameter_call() {
    let record = Invocation::new(Operation::new("Health", "ping"), &[]);
    assert!(record.arguments().is_empty());
}

#[test]
fn defensive_copy_isolates_the_record() {
    let mut args = vec![Argument::new("owner"), Argument::new("repo")];
    let record = Invocation::new(method_x(), &args);

    args.clear();
    args.push(Argument::new("other"));

    assert_eq!(
        format!("{:?}", record.arguments()),
        r#"["owner", "repo"]"#
    );
}

#[test]
fn observers_find_the_record_on_the_request() {
    let method = ServiceMethod::new(
        Operation::new("api::GitHubService", "contributors").with_parameters(["String", "String"]),
        "GET",
        "repos/{owner}/{repo}/contributors",
    );
    let request = method.to_request(
        "https://api.github.com/",
        vec![Argument::new("square"), Argument::new("retrofit")],
        None,
    );

    let invocation = request.invocation().expect("tagged");
    assert_eq!(invocation.operation().simple_type_name(), "GitHubService");
    assert_eq!(invocation.arguments().len(), 2);

    let plain = Request::new("GET", "https://api.github.com/rate_limit");
    assert!(plain.invocation().is_none());
}

#[test]
fn records_are_readable_from_many_threads() {
    use std::sync::Arc;
    use std::thread;

    let record = Arc::new(Invocation::new(
        method_x(),
        &[Argument::new(1_i32), Argument::new("a"), Argument::new(true)],
    ));

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let record = Arc::clone(&record);
            thread::spawn(move || record.describe())
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), record.describe());
    }
}
