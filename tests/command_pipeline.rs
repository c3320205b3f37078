//! Integration tests for the command composition pipeline: submission
//! parsing, class-name recovery, and platform serialization.

use spark_launch::args::{
    parse_submit_args, recover_main_class, submit_flag_registry, SubmitArgsError,
};
use spark_launch::builder::EnvSet;
use spark_launch::launch::usage_error_args;
use spark_launch::render::{quote_for_batch_script, render_unix, render_windows};

fn raw_args(args: Vec<&str>) -> Vec<String> {
    args.into_iter().map(String::from).collect()
}

// =============================================================================
// SUBMISSION PARSER
// =============================================================================

#[test]
fn parse_full_submission_line() {
    let args = raw_args(vec![
        "--master",
        "yarn",
        "--deploy-mode",
        "cluster",
        "--class",
        "com.example.App",
        "app.jar",
        "input.csv",
    ]);
    let parsed = parse_submit_args(&args, &submit_flag_registry()).unwrap();
    assert_eq!(parsed.option_value("--master"), Some("yarn"));
    assert_eq!(parsed.option_value("--deploy-mode"), Some("cluster"));
    assert_eq!(parsed.primary_resource.as_deref(), Some("app.jar"));
    assert_eq!(parsed.app_args, raw_args(vec!["input.csv"]));
}

#[test]
fn parse_rejects_unknown_option_before_resource() {
    let args = raw_args(vec!["--class", "com.example.App", "--does-not-exist"]);
    let err = parse_submit_args(&args, &submit_flag_registry()).unwrap_err();
    assert_eq!(
        err,
        SubmitArgsError::UnrecognizedOption {
            option: "--does-not-exist".to_string()
        }
    );
}

#[test]
fn parse_rejects_missing_trailing_value() {
    let args = raw_args(vec!["--class"]);
    let err = parse_submit_args(&args, &submit_flag_registry()).unwrap_err();
    assert_eq!(
        err,
        SubmitArgsError::MissingOptionValue {
            option: "--class".to_string()
        }
    );
}

// =============================================================================
// RECOVERY AND USAGE-ERROR REBUILD
// =============================================================================

#[test]
fn rejected_list_with_class_flag_rebuilds_in_fixed_order() {
    let args = raw_args(vec!["--class", "Foo", "--does-not-exist"]);
    assert_eq!(
        usage_error_args(&args),
        raw_args(vec!["--class", "Foo", "--usage-error"])
    );
}

#[test]
fn rejected_list_without_class_flag_rebuilds_to_sentinel_only() {
    let args = raw_args(vec!["--does-not-exist"]);
    assert_eq!(usage_error_args(&args), raw_args(vec!["--usage-error"]));
}

#[test]
fn rebuilt_list_always_satisfies_the_grammar() {
    for args in [
        raw_args(vec!["--class", "Foo", "--bogus"]),
        raw_args(vec!["--bogus"]),
        raw_args(vec!["--master"]),
    ] {
        let help = usage_error_args(&args);
        assert!(parse_submit_args(&help, &submit_flag_registry()).is_ok());
    }
}

#[test]
fn recovery_never_fails_on_garbage() {
    let args = raw_args(vec!["--=weird", "", "---", "--class=", "--class"]);
    assert_eq!(recover_main_class(&args), None);
}

// =============================================================================
// SERIALIZATION
// =============================================================================

#[test]
fn unix_identity_law() {
    let cmd = raw_args(vec!["/opt/java/bin/java", "-cp", "conf:jars/*", "Main"]);
    assert_eq!(render_unix(cmd.clone(), &[]), cmd);
}

#[test]
fn unix_env_wrapping_law() {
    let cmd = raw_args(vec!["java", "Main", "arg one"]);
    let env = vec![
        ("K1".to_string(), "v1".to_string()),
        ("K2".to_string(), "v 2".to_string()),
    ];
    let mut expected = raw_args(vec!["env", "K1=v1", "K2=v 2"]);
    expected.extend(cmd.clone());
    assert_eq!(render_unix(cmd, &env), expected);
}

#[test]
fn unix_tokens_survive_nul_framing() {
    let cmd = raw_args(vec!["java", "-Dname=a b", "Main", "spark://host:7077"]);
    let tokens = render_unix(cmd.clone(), &[]);

    let mut stream = Vec::new();
    for token in &tokens {
        assert!(!token.as_bytes().contains(&0));
        stream.extend_from_slice(token.as_bytes());
        stream.push(0);
    }

    let recovered: Vec<String> = stream
        .split(|byte| *byte == 0)
        .filter(|chunk| !chunk.is_empty())
        .map(|chunk| String::from_utf8(chunk.to_vec()).unwrap())
        .collect();
    assert_eq!(recovered, cmd);
}

#[test]
fn windows_line_shape_is_stable() {
    let cmd = raw_args(vec!["java", "-cp", "a;b", "Main", "two words"]);
    let env = vec![("SPARK_HOME".to_string(), "C:\\spark".to_string())];
    assert_eq!(
        render_windows(&cmd, &env),
        "set SPARK_HOME=C:\\spark && java -cp \"a;b\" Main \"two words\" "
    );
}

#[test]
fn windows_doubles_every_embedded_quote() {
    for (input, expected) in [
        ("\"", "\"\"\"\""),
        ("a\"b", "\"a\"\"b\""),
        ("\"a b\"", "\"\"\"a b\"\"\""),
    ] {
        assert_eq!(quote_for_batch_script(input), expected);
    }
}

// =============================================================================
// ENV SET
// =============================================================================

#[test]
fn env_set_keeps_keys_unique_through_the_unix_path() {
    let env = EnvSet::new()
        .set("NAME", "first")
        .set("OTHER", "x")
        .set("NAME", "second")
        .build();
    let cmd = raw_args(vec!["java", "Main"]);
    assert_eq!(
        render_unix(cmd, &env),
        raw_args(vec!["env", "NAME=second", "OTHER=x", "java", "Main"])
    );
}
