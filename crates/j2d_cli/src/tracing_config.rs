//! Log output for the `java2dart` binary.
//!
//! ```bash
//! J2D_LOG=debug java2dart src/Main.java
//! J2D_LOG=j2d_compiler=info J2D_LOG_FORMAT=json java2dart -p java2dart.json
//! ```
//!
//! Nothing is installed unless `J2D_LOG` or `RUST_LOG` is set. Output always
//! goes to stderr; stdout carries the translated Dart.

use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter, Registry};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LogFormat {
    Text,
    Json,
}

impl LogFormat {
    fn parse(value: &str) -> Self {
        match value.to_ascii_lowercase().as_str() {
            "json" => LogFormat::Json,
            _ => LogFormat::Text,
        }
    }
}

/// `J2D_LOG` wins over `RUST_LOG`.
fn build_filter() -> EnvFilter {
    match std::env::var("J2D_LOG") {
        Ok(value) => EnvFilter::builder().parse_lossy(value),
        Err(_) => EnvFilter::from_default_env(),
    }
}

pub fn init_tracing() {
    if std::env::var_os("J2D_LOG").is_none() && std::env::var_os("RUST_LOG").is_none() {
        return;
    }
    let filter = build_filter();
    match LogFormat::parse(&std::env::var("J2D_LOG_FORMAT").unwrap_or_default()) {
        LogFormat::Json => {
            let json_layer = fmt::layer().json().with_writer(std::io::stderr);
            Registry::default().with(filter).with(json_layer).init();
        }
        LogFormat::Text => {
            tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
        }
    }
}
