//! Terminal capability detection

use is_terminal::IsTerminal;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalCapabilities {
    pub supports_color: bool,
    pub is_ci: bool,
    /// Running under GitHub Actions, where workflow annotations are understood
    pub is_github_actions: bool,
}

pub fn detect_capabilities() -> TerminalCapabilities {
    detect_capabilities_impl(|key| std::env::var(key).ok(), std::io::stderr().is_terminal())
}

fn detect_capabilities_impl(
    get_env: impl Fn(&str) -> Option<String>,
    is_tty: bool,
) -> TerminalCapabilities {
    let term_is_dumb = get_env("TERM").is_some_and(|t| t.eq_ignore_ascii_case("dumb"));
    let no_color = get_env("NO_COLOR").is_some();
    let is_github_actions = get_env("GITHUB_ACTIONS").is_some_and(|v| v == "true");

    TerminalCapabilities {
        supports_color: is_tty && !term_is_dumb && !no_color,
        is_ci: is_github_actions || is_ci_env(&get_env),
        is_github_actions,
    }
}

fn is_ci_env(get_env: &impl Fn(&str) -> Option<String>) -> bool {
    const KEYS: &[&str] = &["CI", "BUILDKITE", "CIRCLECI", "GITLAB_CI", "JENKINS_HOME"];
    KEYS.iter()
        .any(|key| get_env(key).is_some_and(|v| !v.is_empty() && v != "false" && v != "0"))
}
