use super::{PatternTable, Provider};
use std::sync::LazyLock;

const DEFAULT_HOST: &str = "github.com";
const RAW_HOST: &str = "raw.githubusercontent.com";
const WWW_HOST: &str = "www.github.com";

/// Content paths keep their leading `/`.
const SOURCES: &[&str] = &[
    // https://raw.githubusercontent.com/owner/repo/main/path/to/file
    r"^(?P<scheme>https?)://(?P<resource>raw\.githubusercontent\.com)/(?P<owner>[^/]+)/(?P<repo>[^/]+)/(?P<branch>[^/]+)(?P<path>/.*)$",
    // https://github.com/owner/repo[.git][/tree|blob/branch[/path]]
    r"^(?P<scheme>https?)://(?P<resource>(?:www\.)?github\.com)/(?P<owner>[^/]+)/(?P<repo>[^/]+?)(?:\.git)?(?:/(?:tree|blob)/(?P<branch>[^/]+)(?P<path>/.*)?)?$",
    // ssh://git@github.com[:port]/owner/repo[.git]
    r"^(?P<scheme>(?:git\+)?ssh)://(?:[^@/]+@)?(?P<resource>github\.com)(?::\d+)?/(?P<owner>[^/]+)/(?P<repo>[^/]+?)(?:\.git)?$",
    // git@github.com:owner/repo.git
    r"^(?P<scheme>git)@(?P<resource>github\.com):(?P<owner>[^/]+)/(?P<repo>[^/]+)\.git$",
];

#[expect(
    clippy::expect_used,
    reason = "Pattern sources are compile-time constants covered by tests"
)]
pub(super) static PATTERNS: LazyLock<PatternTable> = LazyLock::new(|| {
    PatternTable::compile(Provider::GitHub, SOURCES)
        .expect("GitHub patterns are valid regex literals")
});

pub(super) fn should_parse(host: &str) -> bool {
    host == DEFAULT_HOST || host == RAW_HOST || host == WWW_HOST
}
