//! Static content embedded into the binary at compile time.

/// Profile content (projects, work experience, skills) as JSON.
///
/// Parsed into a `portfolio_models::profile::Profile` at startup.
pub const PROFILE_JSON: &str = include_str!("../assets/profile.json");
