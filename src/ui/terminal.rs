//! Terminal capability probing for the console sink.

use is_terminal::IsTerminal;

/// Environment variables that mark a CI runner
const CI_MARKERS: &[&str] = &["CI", "GITHUB_ACTIONS", "GITLAB_CI", "BUILDKITE", "JENKINS_HOME"];

/// Locale variables, in lookup precedence
const LOCALE_VARS: &[&str] = &["LC_ALL", "LC_CTYPE", "LANG"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalCapabilities {
    pub supports_color: bool,
    pub supports_unicode: bool,
    pub is_ci: bool,
}

impl TerminalCapabilities {
    /// Inspect the current process environment and stdout
    pub fn detect() -> Self {
        Self::detect_with(|key| std::env::var(key).ok(), std::io::stdout().is_terminal())
    }

    fn detect_with<E>(var: E, stdout_is_tty: bool) -> Self
    where
        E: Fn(&str) -> Option<String>,
    {
        let dumb = var("TERM").is_some_and(|t| t.eq_ignore_ascii_case("dumb"));
        let color_disabled = ["NO_COLOR", "SCENGEN_NO_COLOR"]
            .iter()
            .any(|k| var(*k).is_some());

        Self {
            supports_color: stdout_is_tty && !dumb && !color_disabled,
            supports_unicode: !dumb && locale_allows_unicode(&var),
            is_ci: CI_MARKERS.iter().any(|k| var(*k).is_some()),
        }
    }
}

/// The first locale variable that is set decides; unset means unicode.
fn locale_allows_unicode<E>(var: &E) -> bool
where
    E: Fn(&str) -> Option<String>,
{
    match LOCALE_VARS.iter().find_map(|k| var(*k)) {
        Some(locale) => !matches!(locale.to_ascii_lowercase().as_str(), "c" | "posix"),
        None => true,
    }
}
