// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Log format resolution
//!
//! Turns user configuration into the `--pretty=format:` string used to
//! query the log. Either a raw custom format is used verbatim, or a
//! format is assembled from per-field display toggles.

use serde::{Deserialize, Serialize};

/// Format used when no custom format is set and no toggles produce output.
///
/// Three lines per record: subject, `[hash] author (email)`, `date (relative)`.
pub const DEFAULT_FORMAT: &str = "%s%n[%h] %cN (%ce)%n%cD (%cr)";

/// Which fields the log listing should emit per record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormatSettings {
    /// Use `custom_format` verbatim instead of the toggles
    pub use_custom_format: bool,
    /// Raw format string, in git placeholder syntax
    pub custom_format: String,
    /// Emit the commit subject line
    pub show_subject: bool,
    /// Emit the abbreviated hash
    pub show_hash: bool,
    /// Emit the committer name
    pub show_author: bool,
    /// Emit the committer email
    pub show_email: bool,
    /// Emit the committer date
    pub show_date: bool,
    /// Emit the relative date
    pub show_relative_date: bool,
}

impl Default for FormatSettings {
    fn default() -> Self {
        Self {
            use_custom_format: false,
            custom_format: DEFAULT_FORMAT.to_string(),
            show_subject: true,
            show_hash: true,
            show_author: true,
            show_email: true,
            show_date: true,
            show_relative_date: true,
        }
    }
}

/// Resolve the configured format into one concrete format string.
///
/// Toggle mode builds up to three logical lines joined by `%n`: the
/// subject, a commit-info line (hash/author/email, space-joined) and a
/// date-info line (date/relative date, space-joined); lines with no
/// enabled component are skipped. Never returns an empty string: an
/// all-off configuration falls back to [`DEFAULT_FORMAT`].
#[must_use]
pub fn resolve(settings: &FormatSettings) -> String {
    if settings.use_custom_format && !settings.custom_format.is_empty() {
        return settings.custom_format.clone();
    }

    let mut lines: Vec<String> = Vec::new();

    if settings.show_subject {
        lines.push("%s".to_string());
    }

    let commit_info = join_enabled(&[
        (settings.show_hash, "[%h]"),
        (settings.show_author, "%cN"),
        (settings.show_email, "(%ce)"),
    ]);
    if !commit_info.is_empty() {
        lines.push(commit_info);
    }

    let date_info = join_enabled(&[
        (settings.show_date, "%cD"),
        (settings.show_relative_date, "(%cr)"),
    ]);
    if !date_info.is_empty() {
        lines.push(date_info);
    }

    let format = lines.join("%n");
    if format.is_empty() {
        DEFAULT_FORMAT.to_string()
    } else {
        format
    }
}

fn join_enabled(tokens: &[(bool, &str)]) -> String {
    tokens
        .iter()
        .filter(|(enabled, _)| *enabled)
        .map(|(_, token)| *token)
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use similar_asserts::assert_eq;

    fn all_off() -> FormatSettings {
        FormatSettings {
            show_subject: false,
            show_hash: false,
            show_author: false,
            show_email: false,
            show_date: false,
            show_relative_date: false,
            ..Default::default()
        }
    }

    #[test]
    fn test_defaults_resolve_to_default_format() {
        assert_eq!(resolve(&FormatSettings::default()), DEFAULT_FORMAT);
    }

    #[test]
    fn test_custom_format_used_verbatim() {
        let settings = FormatSettings {
            use_custom_format: true,
            custom_format: "%H %s".to_string(),
            ..Default::default()
        };
        assert_eq!(resolve(&settings), "%H %s");
    }

    #[test]
    fn test_empty_custom_format_falls_back_to_toggles() {
        let settings = FormatSettings {
            use_custom_format: true,
            custom_format: String::new(),
            ..Default::default()
        };
        assert_eq!(resolve(&settings), DEFAULT_FORMAT);
    }

    #[test]
    fn test_all_toggles_off_falls_back_to_default() {
        assert_eq!(resolve(&all_off()), DEFAULT_FORMAT);
    }

    #[test]
    fn test_subject_hash_date_only() {
        let settings = FormatSettings {
            show_author: false,
            show_email: false,
            show_relative_date: false,
            ..Default::default()
        };
        assert_eq!(resolve(&settings), "%s%n[%h]%n%cD");
    }

    #[test]
    fn test_commit_info_line_single_component() {
        for (field, token) in [("hash", "[%h]"), ("author", "%cN"), ("email", "(%ce)")] {
            let settings = FormatSettings {
                show_subject: false,
                show_hash: field == "hash",
                show_author: field == "author",
                show_email: field == "email",
                show_date: false,
                show_relative_date: false,
                ..Default::default()
            };
            assert_eq!(resolve(&settings), token, "field: {field}");
        }
    }

    #[test]
    fn test_empty_lines_are_skipped() {
        let settings = FormatSettings {
            show_hash: false,
            show_author: false,
            show_email: false,
            ..Default::default()
        };
        assert_eq!(resolve(&settings), "%s%n%cD (%cr)");
    }

    #[test]
    fn test_date_info_joined_with_space() {
        let settings = FormatSettings {
            show_subject: false,
            show_hash: false,
            show_author: false,
            show_email: false,
            ..Default::default()
        };
        assert_eq!(resolve(&settings), "%cD (%cr)");
    }
}

#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    fn settings_strategy() -> impl Strategy<Value = FormatSettings> {
        (
            any::<bool>(),
            "[%a-zA-Z \\[\\]()]{0,30}",
            any::<bool>(),
            any::<bool>(),
            any::<bool>(),
            any::<bool>(),
            any::<bool>(),
            any::<bool>(),
        )
            .prop_map(
                |(use_custom, custom, subject, hash, author, email, date, relative)| {
                    FormatSettings {
                        use_custom_format: use_custom,
                        custom_format: custom,
                        show_subject: subject,
                        show_hash: hash,
                        show_author: author,
                        show_email: email,
                        show_date: date,
                        show_relative_date: relative,
                    }
                },
            )
    }

    proptest! {
        /// Property: the resolved format is never empty
        #[test]
        fn prop_resolved_format_never_empty(settings in settings_strategy()) {
            prop_assert!(!resolve(&settings).is_empty());
        }

        /// Property: with at most one commit-info toggle enabled, the
        /// commit-info line contains only that token
        #[test]
        fn prop_single_commit_info_token(
            hash in any::<bool>(),
            author in any::<bool>(),
            email in any::<bool>(),
        ) {
            prop_assume!(usize::from(hash) + usize::from(author) + usize::from(email) <= 1);

            let settings = FormatSettings {
                show_subject: false,
                show_hash: hash,
                show_author: author,
                show_email: email,
                show_date: false,
                show_relative_date: false,
                ..Default::default()
            };
            let resolved = resolve(&settings);

            if hash {
                prop_assert_eq!(resolved, "[%h]");
            } else if author {
                prop_assert_eq!(resolved, "%cN");
            } else if email {
                prop_assert_eq!(resolved, "(%ce)");
            } else {
                prop_assert_eq!(resolved, DEFAULT_FORMAT);
            }
        }
    }
}
