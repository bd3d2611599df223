use tracing_subscriber::prelude::*;

// Prefixes events with the emitting module, e.g. `transaction` for echo mismatches.
fn module_tag(event: &tracing::Event<'_>) -> Option<tracing_forest::Tag> {
    let module = event.metadata().target().strip_prefix("alpaca_client::")?;

    Some(
        tracing_forest::Tag::builder()
            .prefix(module)
            .level(*event.metadata().level())
            .build(),
    )
}

#[ctor::ctor]
fn init_test_logging() {
    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::filter::Targets::new()
                .with_target("alpaca_client", tracing::Level::DEBUG),
        )
        .with(tracing_forest::ForestLayer::new(
            tracing_forest::printer::TestCapturePrinter::new(),
            module_tag,
        ))
        .try_init();
}
