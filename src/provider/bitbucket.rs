use super::{PatternTable, Provider};
use std::sync::LazyLock;

const DEFAULT_HOST: &str = "bitbucket.org";

// `src` and `raw` mark content links; the marker is captured as `type` and
// not stored.
const SOURCES: &[&str] = &[
    r"^(?P<scheme>https?)://(?:[^@/]+@)?(?P<resource>(?:[^/@:.]+\.)*bitbucket\.org)/(?P<owner>[^/]+)/(?P<repo>[^/]+?)(?:\.git)?(?:/(?P<type>src|raw)/(?P<branch>[^/]+)(?:/(?P<path>.*))?)?$",
    r"^(?P<scheme>(?:git\+)?ssh)://(?:[^@/]+@)?(?P<resource>(?:[^/@:.]+\.)*bitbucket\.org)(?::\d+)?/(?P<owner>[^/]+)/(?P<repo>[^/]+?)(?:\.git)?$",
    r"^(?P<scheme>git)@(?P<resource>(?:[^/@:.]+\.)*bitbucket\.org):(?P<owner>[^/]+)/(?P<repo>[^/]+)\.git$",
];

#[expect(
    clippy::expect_used,
    reason = "Pattern sources are compile-time constants covered by tests"
)]
pub(super) static PATTERNS: LazyLock<PatternTable> = LazyLock::new(|| {
    PatternTable::compile(Provider::Bitbucket, SOURCES)
        .expect("Bitbucket patterns are valid regex literals")
});

pub(super) fn should_parse(host: &str) -> bool {
    host == DEFAULT_HOST
        || host
            .strip_suffix(DEFAULT_HOST)
            .is_some_and(|prefix| prefix.ends_with('.'))
}
