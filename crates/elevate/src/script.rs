//! Event script parsing for `elevate simulate`.
//!
//! One event per line; blank lines and `#` comments are skipped:
//!
//! ```text
//! key nav ArrowDown
//! key 0 ArrowRight
//! hover 0-1
//! wait 300
//! ```

use std::fmt;
use std::time::Duration;

use elevate_menu::{Key, KeyTarget, ParsePathError, PathId};

/// Script parse error, with the 1-based line it occurred on.
#[derive(Debug, thiserror::Error)]
pub(crate) enum ScriptError {
    #[error("line {line}: unknown event '{event}'")]
    UnknownEvent { line: usize, event: String },

    #[error("line {line}: '{event}' expects {expected}")]
    Arity {
        line: usize,
        event: &'static str,
        expected: &'static str,
    },

    #[error("line {line}: invalid path: {source}")]
    Path {
        line: usize,
        #[source]
        source: ParsePathError,
    },

    #[error("line {line}: unknown key '{key}'")]
    Key { line: usize, key: String },

    #[error("line {line}: invalid duration '{value}'")]
    Duration { line: usize, value: String },
}

/// One scripted event.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum Step {
    Key(KeyTarget, Key),
    Hover(PathId),
    Leave(PathId),
    Click(PathId),
    Arrow(PathId),
    Focus(PathId),
    Blur,
    Toggle,
    Back,
    Wait(Duration),
}

impl Step {
    /// Whether the step only makes sense with the mobile panel.
    pub(crate) fn is_mobile_only(&self) -> bool {
        matches!(self, Self::Toggle | Self::Arrow(_))
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Key(KeyTarget::Nav, key) => write!(f, "key nav {key:?}"),
            Self::Key(KeyTarget::Item(path), key) => write!(f, "key {path} {key:?}"),
            Self::Hover(path) => write!(f, "hover {path}"),
            Self::Leave(path) => write!(f, "leave {path}"),
            Self::Click(path) => write!(f, "click {path}"),
            Self::Arrow(path) => write!(f, "arrow {path}"),
            Self::Focus(path) => write!(f, "focus {path}"),
            Self::Blur => f.write_str("blur"),
            Self::Toggle => f.write_str("toggle"),
            Self::Back => f.write_str("back"),
            Self::Wait(duration) => write!(f, "wait {}", duration.as_millis()),
        }
    }
}

/// Parse a whole script.
pub(crate) fn parse_script(source: &str) -> Result<Vec<Step>, ScriptError> {
    source
        .lines()
        .enumerate()
        .filter_map(|(index, line)| {
            let line_no = index + 1;
            let line = line.split('#').next().unwrap_or_default().trim();
            (!line.is_empty()).then(|| parse_line(line, line_no))
        })
        .collect()
}

fn parse_line(line: &str, line_no: usize) -> Result<Step, ScriptError> {
    let words: Vec<&str> = line.split_whitespace().collect();
    let path = |event: &'static str| -> Result<PathId, ScriptError> {
        match words.as_slice() {
            [_, path] => path.parse().map_err(|source| ScriptError::Path {
                line: line_no,
                source,
            }),
            _ => Err(ScriptError::Arity {
                line: line_no,
                event,
                expected: "a menu path",
            }),
        }
    };
    let bare = |event: &'static str, step: Step| -> Result<Step, ScriptError> {
        if words.len() == 1 {
            Ok(step)
        } else {
            Err(ScriptError::Arity {
                line: line_no,
                event,
                expected: "no arguments",
            })
        }
    };

    match words[0] {
        "key" => parse_key(&words, line_no),
        "hover" => path("hover").map(Step::Hover),
        "leave" => path("leave").map(Step::Leave),
        "click" => path("click").map(Step::Click),
        "arrow" => path("arrow").map(Step::Arrow),
        "focus" => path("focus").map(Step::Focus),
        "blur" => bare("blur", Step::Blur),
        "toggle" => bare("toggle", Step::Toggle),
        "back" => bare("back", Step::Back),
        "wait" => match words.as_slice() {
            [_, ms] => ms
                .parse::<u64>()
                .map(|ms| Step::Wait(Duration::from_millis(ms)))
                .map_err(|_| ScriptError::Duration {
                    line: line_no,
                    value: (*ms).to_owned(),
                }),
            _ => Err(ScriptError::Arity {
                line: line_no,
                event: "wait",
                expected: "milliseconds",
            }),
        },
        other => Err(ScriptError::UnknownEvent {
            line: line_no,
            event: other.to_owned(),
        }),
    }
}

fn parse_key(words: &[&str], line_no: usize) -> Result<Step, ScriptError> {
    let [_, target, key] = words else {
        return Err(ScriptError::Arity {
            line: line_no,
            event: "key",
            expected: "a target and a key",
        });
    };

    let target = if *target == "nav" {
        KeyTarget::Nav
    } else {
        KeyTarget::Item(target.parse().map_err(|source| ScriptError::Path {
            line: line_no,
            source,
        })?)
    };

    // `Key::Other` stands for keys the menu ignores; naming one in a script
    // is almost always a typo.
    let parsed = Key::from_dom_key(key);
    if parsed == Key::Other && *key != "Other" {
        return Err(ScriptError::Key {
            line: line_no,
            key: (*key).to_owned(),
        });
    }

    Ok(Step::Key(target, parsed))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn path(s: &str) -> PathId {
        s.parse().unwrap()
    }

    #[test]
    fn test_parse_all_events() {
        let script = "\
# open the panel
toggle
wait 100

key nav ArrowDown
key 0-1 Escape
hover 0
leave 0   # trailing comment
click 1-0
arrow 1
focus 2
blur
back
";
        assert_eq!(
            parse_script(script).unwrap(),
            vec![
                Step::Toggle,
                Step::Wait(Duration::from_millis(100)),
                Step::Key(KeyTarget::Nav, Key::ArrowDown),
                Step::Key(KeyTarget::Item(path("0-1")), Key::Escape),
                Step::Hover(path("0")),
                Step::Leave(path("0")),
                Step::Click(path("1-0")),
                Step::Arrow(path("1")),
                Step::Focus(path("2")),
                Step::Blur,
                Step::Back,
            ]
        );
    }

    #[test]
    fn test_space_key_name() {
        assert_eq!(
            parse_script("key 0 Space").unwrap(),
            vec![Step::Key(KeyTarget::Item(path("0")), Key::Space)]
        );
    }

    #[test]
    fn test_unknown_event_reports_line() {
        let err = parse_script("blur\n\njump 0").unwrap_err();
        assert_eq!(err.to_string(), "line 3: unknown event 'jump'");
    }

    #[test]
    fn test_arity_errors() {
        let err = parse_script("hover").unwrap_err();
        assert_eq!(err.to_string(), "line 1: 'hover' expects a menu path");

        let err = parse_script("blur 0").unwrap_err();
        assert_eq!(err.to_string(), "line 1: 'blur' expects no arguments");

        let err = parse_script("key nav").unwrap_err();
        assert_eq!(err.to_string(), "line 1: 'key' expects a target and a key");
    }

    #[test]
    fn test_invalid_path_and_key() {
        assert!(matches!(
            parse_script("click 0-x"),
            Err(ScriptError::Path { line: 1, .. })
        ));
        assert!(matches!(
            parse_script("key 0 Enter"),
            Err(ScriptError::Key { line: 1, .. })
        ));
        assert!(matches!(
            parse_script("wait soon"),
            Err(ScriptError::Duration { line: 1, .. })
        ));
    }

    #[test]
    fn test_display_round_trips_through_parser() {
        let step = Step::Key(KeyTarget::Item(path("0-1")), Key::ArrowLeft);
        assert_eq!(step.to_string(), "key 0-1 ArrowLeft");
        assert_eq!(parse_script(&step.to_string()).unwrap(), vec![step]);
    }

    #[test]
    fn test_mobile_only_steps() {
        assert!(Step::Toggle.is_mobile_only());
        assert!(Step::Arrow(path("0")).is_mobile_only());
        assert!(!Step::Back.is_mobile_only());
    }
}
