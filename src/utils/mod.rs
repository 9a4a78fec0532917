pub mod build_info;

use std::sync::Once;

use tracing_subscriber::{filter::Directive, fmt, EnvFilter};

static TRACING_INIT: Once = Once::new();

const DEFAULT_DIRECTIVES: [&str; 2] = ["monthly_budget=info", "budget_core=info"];

/// Initializes the global tracing subscriber on stderr.
///
/// `extra` is an additional filter directive, usually the configured `log_filter`.
/// Only the first call has any effect.
pub fn init_tracing(extra: Option<&str>) {
    TRACING_INIT.call_once(|| {
        let mut filter = EnvFilter::from_default_env();
        for directive in DEFAULT_DIRECTIVES {
            if let Ok(directive) = directive.parse::<Directive>() {
                filter = filter.add_directive(directive);
            }
        }

        let mut rejected = None;
        if let Some(extra) = extra.map(str::trim).filter(|extra| !extra.is_empty()) {
            match extra.parse::<Directive>() {
                Ok(directive) => filter = filter.add_directive(directive),
                Err(err) => rejected = Some((extra.to_string(), err.to_string())),
            }
        }

        fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();

        if let Some((directive, err)) = rejected {
            tracing::warn!(%directive, %err, "ignoring invalid log filter directive");
        }
    });
}
