//! Parse GitHub, GitLab and Bitbucket remote URLs into a normalized
//! [`Repository`] record.
//!
//! ```
//! let repo = git_remote_url::parse_url(
//!     "https://github.com/retr0h/git-url-parse/blob/main/files/file0.json",
//! )?;
//! assert_eq!(repo.provider_name(), "github");
//! assert_eq!(repo.branch(), "main");
//! assert_eq!(repo.path(), "/files/file0.json");
//! # Ok::<(), git_remote_url::ParseError>(())
//! ```

// Allow panic/unwrap/expect in tests (denied globally via Cargo.toml lints)
#![cfg_attr(
    test,
    allow(
        clippy::panic,
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::indexing_slicing
    )
)]

pub mod capture;
pub mod error;
pub mod host;
pub mod logging;
pub mod output;
pub mod parser;
pub mod provider;
pub mod repository;
pub mod user_config;

// Re-export commonly used types
pub use capture::capture_map;
pub use error::ParseError;
pub use host::extract_host;
pub use output::OutputFormat;
pub use parser::{parse_url, RepositoryParser};
pub use provider::{PatternTable, Provider};
pub use repository::Repository;
