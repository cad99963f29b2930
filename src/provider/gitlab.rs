use super::{PatternTable, Provider};
use std::sync::LazyLock;

const HOST_PREFIX: &str = "gitlab.";

/// Self-hosted instances are any `gitlab.*` host, and web URLs may carry a
/// port that stays part of `resource`. `-/` content paths are captured without
/// their leading `/`; legacy `tree|blob` paths keep it.
const SOURCES: &[&str] = &[
    r"^(?P<scheme>https?)://(?P<resource>gitlab\.[^/:@]+(?::\d+)?)/(?P<owner>[^/]+)/(?P<repo>[^/]+)/-/blob/(?P<branch>[^/]+)/(?P<path>.+)$",
    r"^(?P<scheme>https?)://(?P<resource>gitlab\.[^/:@]+(?::\d+)?)/(?P<owner>[^/]+)/(?P<repo>[^/]+)/-/raw/(?P<branch>[^/]+)/(?P<path>.*)$",
    r"^(?P<scheme>https?)://(?P<resource>gitlab\.[^/:@]+(?::\d+)?)/(?P<owner>[^/]+)/(?P<repo>[^/]+)/-/tree/(?P<branch>[^/]+)(?:/(?P<path>.*))?$",
    // pre-`/-/` style content links
    r"^(?P<scheme>https?)://(?P<resource>gitlab\.[^/:@]+(?::\d+)?)/(?P<owner>[^/]+)/(?P<repo>[^/]+)/(?:tree|blob)/(?P<branch>[^/]+)(?P<path>/.*)?$",
    // owner/subgroup[/subgroup...]/repo.git; subgroups are dropped
    r"^(?P<scheme>https?)://(?P<resource>gitlab\.[^/:@]+(?::\d+)?)/(?P<owner>[^/]+)(?P<subgroups>(?:/[^/]+)+)/(?P<repo>[^/]+)\.git$",
    r"^(?P<scheme>https?)://(?P<resource>gitlab\.[^/:@]+(?::\d+)?)/(?P<owner>[^/]+)/(?P<repo>[^/]+?)(?:\.git)?$",
    r"^(?P<scheme>(?:git\+)?ssh)://(?:[^@/]+@)?(?P<resource>gitlab\.[^/:@]+)(?::\d+)?/(?P<owner>[^/]+)/(?P<repo>[^/]+?)(?:\.git)?$",
    r"^(?P<scheme>git)@(?P<resource>gitlab\.[^/:@]+):(?P<owner>[^/]+)/(?P<repo>[^/]+)\.git$",
];

#[expect(
    clippy::expect_used,
    reason = "Pattern sources are compile-time constants covered by tests"
)]
pub(super) static PATTERNS: LazyLock<PatternTable> = LazyLock::new(|| {
    PatternTable::compile(Provider::GitLab, SOURCES)
        .expect("GitLab patterns are valid regex literals")
});

pub(super) fn should_parse(host: &str) -> bool {
    host.len() > HOST_PREFIX.len() && host.starts_with(HOST_PREFIX)
}
