use colored::Colorize;
use rsdispatch::{Catalog, CommandSpec, Dispatcher, OptionSpec, ProcessArgs};
use tracing_subscriber::filter::EnvFilter;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer};

fn main() {
    setup_logging();

    let catalog = demo_catalog();
    if let Err(e) = Dispatcher::new(&catalog).dispatch_from(&ProcessArgs) {
        eprintln!("{}", format!("Error: {}", e).red());
        std::process::exit(e.exit_code());
    }
}

fn demo_catalog() -> Catalog {
    Catalog::new()
        .command(
            CommandSpec::new("hello", |resolved| {
                if !resolved.iter().any(|r| r.name() == "name") {
                    println!("Hello, World!");
                }
                Ok(())
            })
            .optional(["name"]),
        )
        .command(CommandSpec::new("help", |_| {
            println!("usage: rsdispatch <command> [options]");
            println!("commands: hello, help");
            println!("options:  -n, --name <value>");
            Ok(())
        }))
        .option(OptionSpec::new("name", 'n', "name").handler(|value| {
            if value.is_empty() {
                println!("Hello, World!");
            } else {
                println!("Hello, {}!", value);
            }
            Ok(())
        }))
}

fn setup_logging() {
    // Debug tracing is observational only; RUST_LOG governs verbosity.
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_names(false)
        .with_span_events(FmtSpan::ENTER)
        .with_span_events(FmtSpan::CLOSE);

    tracing_subscriber::registry()
        .with(fmt_layer.with_filter(env_filter))
        .init();
}
