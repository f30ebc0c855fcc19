//! Tests for command line parsing into a cut plan.

#![allow(clippy::unwrap_used)]

use std::path::Path;

use ffcut::Error;
use ffcut::plan::parse_args;

fn bounds(args: &[&str]) -> Vec<(Option<String>, Option<String>)> {
    parse_args(args)
        .unwrap()
        .ranges()
        .iter()
        .map(|r| {
            (
                r.from.as_ref().map(|v| v.as_str().to_string()),
                r.to.as_ref().map(|v| v.as_str().to_string()),
            )
        })
        .collect()
}

fn some(s: &str) -> Option<String> {
    Some(s.to_string())
}

#[test]
fn test_first_plain_token_is_input_path() {
    let plan = parse_args(["clip.mp4", "0:10-0:20"]).unwrap();
    assert_eq!(plan.input(), Some(Path::new("clip.mp4")));
    assert_eq!(plan.ranges().len(), 1);
}

#[test]
fn test_ranges_keep_command_line_order() {
    assert_eq!(
        bounds(&["clip.mp4", "1:00-1:30", "0:10-0:20", "5-"]),
        vec![
            (some("1:00"), some("1:30")),
            (some("0:10"), some("0:20")),
            (some("5"), None),
        ]
    );
}

#[test]
fn test_all_time_value_shapes_are_accepted() {
    for token in [
        "1-2", "01-02", "1:2-3:4", "01:02-03:04", "1:2:3-4:5:6", "01:02:03-04:05:06", "0:10-",
        "-0:30", "-", "1:15", "00:00:05",
    ] {
        let result = parse_args(["clip.mp4", token]);
        assert!(result.is_ok(), "{token} should be accepted: {result:?}");
    }
}

#[test]
fn test_end_only_range() {
    assert_eq!(bounds(&["clip.mp4", "-0:30"]), vec![(None, some("0:30"))]);
}

#[test]
fn test_two_or_more_dashes_are_rejected() {
    for token in ["1-2-3", "1--2", "0:10-0:20-", "-1-", "1-2-3-4"] {
        let err = parse_args(["clip.mp4", token]).unwrap_err();
        assert!(
            matches!(err, Error::InvalidInterval { token: ref t } if t == token),
            "{token} gave {err:?}"
        );
    }
}

#[test]
fn test_bad_components_name_the_token() {
    for (token, bad) in [
        ("123-4", "123"),
        ("1:2:3:4-5", "1:2:3:4"),
        ("a-5", "a"),
        ("1.5-2", "1.5"),
        ("second.mp4", "second.mp4"),
    ] {
        let err = parse_args(["clip.mp4", token]).unwrap_err();
        assert!(
            matches!(err, Error::InvalidStartTime { ref value, token: ref t } if value == bad && t == token),
            "{token} gave {err:?}"
        );
    }

    let err = parse_args(["clip.mp4", "5-1:2:"]).unwrap_err();
    assert!(matches!(
        err,
        Error::InvalidEndTime { ref value, ref token } if value == "1:2:" && token == "5-1:2:"
    ));
}

#[test]
fn test_empty_interval_is_rejected() {
    let err = parse_args(["clip.mp4", "0:10-0:20", ""]).unwrap_err();
    assert!(
        matches!(err, Error::InvalidStartTime { ref value, ref token } if value.is_empty() && token.is_empty()),
        "empty token gave {err:?}"
    );
    assert_eq!(err.to_string(), "Invalid start time '' of interval: \"\"");
}

#[test]
fn test_error_message_names_offending_token() {
    let err = parse_args(["clip.mp4", "0:10-0:20", "1-2-3"]).unwrap_err();
    assert_eq!(err.to_string(), "Invalid time interval: \"1-2-3\"");
}

#[test]
fn test_flags_long_and_short() {
    let plan = parse_args(["--verbose", "-f", "clip.mp4", "1-2"]).unwrap();
    assert!(plan.verbose());
    assert!(plan.force());
    assert!(!plan.help());
}

#[test]
fn test_combined_short_flags_set_each_flag() {
    let plan = parse_args(["-vf", "clip.mp4", "1-2"]).unwrap();
    assert!(plan.verbose());
    assert!(plan.force());

    let plan = parse_args(["-fv", "clip.mp4", "1-2"]).unwrap();
    assert!(plan.verbose());
    assert!(plan.force());
}

#[test]
fn test_help_flag_and_alias() {
    assert!(parse_args(["-h"]).unwrap().help());
    assert!(parse_args(["--help"]).unwrap().help());
    assert!(parse_args(["-?"]).unwrap().help());
}

#[test]
fn test_flags_may_follow_positional_arguments() {
    let plan = parse_args(["clip.mp4", "1-2", "-v", "3-4", "--force"]).unwrap();
    assert!(plan.verbose());
    assert!(plan.force());
    assert_eq!(plan.ranges().len(), 2);
}

#[test]
fn test_unknown_flags_are_rejected() {
    for token in ["-x", "-vx", "--verb", "--verbose=1", "--Force", "--", "-:30"] {
        let err = parse_args([token, "clip.mp4", "1-2"]).unwrap_err();
        assert!(
            matches!(err, Error::UnknownOption { token: ref t } if t == token),
            "{token} gave {err:?}"
        );
    }
}

#[test]
fn test_unknown_flag_after_input_is_rejected() {
    let err = parse_args(["clip.mp4", "-q"]).unwrap_err();
    assert_eq!(err.to_string(), "Unknown command line option: \"-q\"");
}

#[test]
fn test_dash_digit_tokens_are_not_flags() {
    let plan = parse_args(["clip.mp4", "-5"]).unwrap();
    assert_eq!(plan.ranges().len(), 1);
    assert!(!plan.verbose());
}

#[test]
fn test_empty_plans_are_left_to_the_caller() {
    let plan = parse_args(Vec::<String>::new()).unwrap();
    assert!(plan.input().is_none());
    assert!(plan.ranges().is_empty());

    let plan = parse_args(["clip.mp4"]).unwrap();
    assert!(plan.input().is_some());
    assert!(plan.ranges().is_empty());
}

#[test]
fn test_chronology_is_not_enforced() {
    assert_eq!(
        bounds(&["clip.mp4", "2:00-1:00"]),
        vec![(some("2:00"), some("1:00"))]
    );
}
