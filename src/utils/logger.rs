use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

// RUST_LOG 優先；否則依 verbose 決定本 crate 的層級，其他 crate 只留 warn
fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "recipe_generator=debug,warn"
    } else {
        "recipe_generator=info,warn"
    }
}

/// Logs go to stderr; stdout is reserved for the recipe output.
pub fn init_logger(verbose: bool, format: LogFormat) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));
    let layer = fmt::layer().with_writer(std::io::stderr).with_target(false);

    let registry = tracing_subscriber::registry().with(filter);
    match format {
        LogFormat::Compact => registry.with(layer.compact()).init(),
        LogFormat::Json => registry.with(layer.json()).init(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directive_follows_verbose() {
        assert_eq!(default_directive(true), "recipe_generator=debug,warn");
        assert_eq!(default_directive(false), "recipe_generator=info,warn");
        assert_eq!(LogFormat::default(), LogFormat::Compact);
    }
}
