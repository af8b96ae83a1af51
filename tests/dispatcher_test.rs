//! End-to-end dispatch cycles: raw argument vector to final outcome.

use std::cell::RefCell;
use std::rc::Rc;

use rsdispatch::{
    Catalog, CommandSpec, DispatchError, Dispatcher, HandlerError, Limits, OptionSpec,
};

fn argv(tokens: &[&str]) -> Vec<String> {
    tokens.iter().map(ToString::to_string).collect()
}

/// Catalog with a `hello` command (no required options) and a `name` option
/// whose handler records each value it receives.
fn hello_catalog(log: Rc<RefCell<Vec<String>>>) -> Catalog {
    let command_log = log.clone();
    Catalog::new()
        .command(
            CommandSpec::new("hello", move |resolved| {
                command_log
                    .borrow_mut()
                    .push(format!("hello:{}", resolved.len()));
                Ok(())
            })
            .optional(["name"]),
        )
        .option(OptionSpec::new("name", 'n', "name").handler(move |value| {
            log.borrow_mut().push(format!("name:{}", value));
            Ok(())
        }))
}

#[test]
fn given_program_token_only_when_dispatch_then_no_args_provided() {
    let catalog = hello_catalog(Rc::new(RefCell::new(Vec::new())));
    let err = Dispatcher::new(&catalog).dispatch(&argv(&["prog"])).unwrap_err();
    assert!(matches!(err, DispatchError::NoArgsProvided));
}

#[test]
fn given_bare_command_when_dispatch_then_handler_gets_empty_option_sequence() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let catalog = hello_catalog(log.clone());

    Dispatcher::new(&catalog)
        .dispatch(&argv(&["prog", "hello"]))
        .unwrap();

    assert_eq!(*log.borrow(), vec!["hello:0"]);
}

#[test]
fn given_short_option_with_value_when_dispatch_then_option_handler_gets_value() {
    rsdispatch::util::testing::init_test_setup();
    let log = Rc::new(RefCell::new(Vec::new()));
    let catalog = hello_catalog(log.clone());

    Dispatcher::new(&catalog)
        .dispatch(&argv(&["prog", "hello", "-n", "Ada"]))
        .unwrap();

    // Command handler first, then option handlers in accumulation order.
    assert_eq!(*log.borrow(), vec!["hello:1", "name:Ada"]);
}

#[test]
fn given_long_option_without_value_when_dispatch_then_option_handler_gets_empty() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let catalog = hello_catalog(log.clone());

    Dispatcher::new(&catalog)
        .dispatch(&argv(&["prog", "hello", "--name"]))
        .unwrap();

    assert_eq!(*log.borrow(), vec!["hello:1", "name:"]);
}

#[test]
fn given_unknown_command_when_dispatch_then_unknown_command() {
    let catalog = hello_catalog(Rc::new(RefCell::new(Vec::new())));
    let err = Dispatcher::new(&catalog)
        .dispatch(&argv(&["prog", "nope"]))
        .unwrap_err();
    assert!(matches!(err, DispatchError::UnknownCommand(t) if t == "nope"));
}

#[test]
fn given_bare_trailing_token_when_dispatch_then_unexpected_argument() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let catalog = hello_catalog(log.clone());

    let err = Dispatcher::new(&catalog)
        .dispatch(&argv(&["prog", "hello", "extra"]))
        .unwrap_err();

    assert!(matches!(err, DispatchError::UnexpectedArgument(t) if t == "extra"));
    // Scan failure aborts before any handler runs.
    assert!(log.borrow().is_empty());
}

#[test]
fn given_same_catalog_when_dispatched_twice_then_outcomes_are_identical() {
    // Arrange: catalog entries are read-only; a match produces a resolved
    // copy, never an in-place mutation.
    let log = Rc::new(RefCell::new(Vec::new()));
    let catalog = hello_catalog(log.clone());
    let dispatcher = Dispatcher::new(&catalog);
    let args = argv(&["prog", "hello", "--name", "Ada"]);

    // Act
    dispatcher.dispatch(&args).unwrap();
    dispatcher.dispatch(&args).unwrap();

    // Assert
    assert_eq!(
        *log.borrow(),
        vec!["hello:1", "name:Ada", "hello:1", "name:Ada"]
    );
}

#[test]
fn given_catalog_at_capacity_when_dispatch_then_accepted() {
    let mut catalog = Catalog::new();
    for i in 0..4 {
        catalog = catalog.command(CommandSpec::new(format!("cmd{}", i), |_| Ok(())));
    }
    let limits = Limits {
        max_commands: 4,
        max_options: 4,
    };

    Dispatcher::new(&catalog)
        .with_limits(limits)
        .dispatch(&argv(&["prog", "cmd0"]))
        .unwrap();
}

#[test]
fn given_catalog_over_capacity_when_dispatch_then_fails_before_parsing() {
    let mut catalog = Catalog::new();
    for i in 0..5 {
        catalog = catalog.command(CommandSpec::new(format!("cmd{}", i), |_| Ok(())));
    }
    let limits = Limits {
        max_commands: 4,
        max_options: 4,
    };

    // Even a token stream that would fail resolution reports the capacity
    // violation first.
    let err = Dispatcher::new(&catalog)
        .with_limits(limits)
        .dispatch(&argv(&["prog", "nope"]))
        .unwrap_err();

    assert!(matches!(
        err,
        DispatchError::TooManyCommands { declared: 5, max: 4 }
    ));
}

#[test]
fn given_option_catalog_over_capacity_when_dispatch_then_too_many_options() {
    let mut catalog = Catalog::new().command(CommandSpec::new("run", |_| Ok(())));
    for i in 0u8..3 {
        catalog = catalog.option(OptionSpec::new(
            format!("o{}", i),
            char::from(b'a' + i),
            format!("opt{}", i),
        ));
    }
    let limits = Limits {
        max_commands: 4,
        max_options: 2,
    };

    let err = Dispatcher::new(&catalog)
        .with_limits(limits)
        .dispatch(&argv(&["prog", "run"]))
        .unwrap_err();

    assert!(matches!(
        err,
        DispatchError::TooManyOptions { count: 3, max: 2 }
    ));
}

#[test]
fn given_failing_command_handler_when_dispatch_then_no_option_handler_runs() {
    let log: Rc<RefCell<Vec<String>>> = Rc::new(RefCell::new(Vec::new()));
    let option_log = log.clone();
    let catalog = Catalog::new()
        .command(CommandSpec::new("run", |_| {
            Err(HandlerError::new("command refused"))
        }))
        .option(OptionSpec::new("verbose", 'v', "verbose").handler(move |_| {
            option_log.borrow_mut().push("verbose".to_string());
            Ok(())
        }));

    let err = Dispatcher::new(&catalog)
        .dispatch(&argv(&["prog", "run", "-v"]))
        .unwrap_err();

    assert!(matches!(err, DispatchError::CommandExecutionFailed(_)));
    assert!(log.borrow().is_empty());
}

#[test]
fn given_custom_marker_when_dispatch_then_marker_governs_option_shape() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let option_log = log.clone();
    let catalog = Catalog::new()
        .command(CommandSpec::new("run", |_| Ok(())))
        .option(OptionSpec::new("name", 'n', "name").handler(move |value| {
            option_log.borrow_mut().push(value.to_string());
            Ok(())
        }));

    Dispatcher::new(&catalog)
        .with_marker('+')
        .dispatch(&argv(&["prog", "run", "++name", "Ada"]))
        .unwrap();

    assert_eq!(*log.borrow(), vec!["Ada"]);
}
