mod macros;

/// Returns the version of the portfolio crates.
pub const fn portfolio_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
