//! Exit codes and stream discipline of `fifty_cli::run`.

use serial_test::serial;

fn run(args: &[&str]) -> (i32, String, String) {
    let mut out = Vec::new();
    let mut err = Vec::new();
    let code = fifty_cli::run(args.iter().copied(), &mut out, &mut err);
    (
        code,
        String::from_utf8(out).unwrap(),
        String::from_utf8(err).unwrap(),
    )
}

fn clear_env() {
    for key in [
        "FIFTY_CONFIG",
        "FIFTY_SEED",
        "FIFTY_OPPONENTS",
        "FIFTY_THINK_MS",
        "FIFTY_AI",
    ] {
        unsafe {
            std::env::remove_var(key);
        }
    }
}

#[test]
#[serial]
fn deal_succeeds_with_zero() {
    clear_env();
    let (code, out, err) = run(&["fifty", "deal", "--seed", "42"]);
    assert_eq!(code, 0);
    assert!(out.starts_with("Seed: 42"));
    assert!(err.is_empty());
}

#[test]
#[serial]
fn sim_succeeds_with_zero() {
    clear_env();
    let (code, out, _) = run(&["fifty", "sim", "--games", "5", "--seed", "3"]);
    assert_eq!(code, 0);
    assert!(out.contains("Average turns:"));
}

#[test]
fn help_goes_to_stdout_with_zero() {
    let (code, out, err) = run(&["fifty", "--help"]);
    assert_eq!(code, 0);
    assert!(out.contains("play"));
    assert!(err.is_empty());
}

#[test]
fn unknown_command_is_two_and_lists_commands() {
    let (code, out, err) = run(&["fifty", "shuffle"]);
    assert_eq!(code, 2);
    assert!(out.is_empty());
    for c in ["play", "sim", "deal", "cfg"] {
        assert!(err.contains(&format!("  {}", c)));
    }
}

#[test]
fn out_of_range_opponents_is_two() {
    let (code, _, err) = run(&["fifty", "deal", "--opponents", "4"]);
    assert_eq!(code, 2);
    assert!(!err.is_empty());
}

#[test]
#[serial]
fn bad_config_is_two() {
    clear_env();
    unsafe {
        std::env::set_var("FIFTY_OPPONENTS", "9");
    }
    let (code, out, err) = run(&["fifty", "deal", "--seed", "1"]);
    clear_env();
    assert_eq!(code, 2);
    assert!(out.is_empty());
    assert!(err.starts_with("Error: Configuration error:"), "{}", err);
}

#[test]
fn exit_code_constants() {
    assert_eq!(fifty_cli::exit_code::SUCCESS, 0);
    assert_eq!(fifty_cli::exit_code::ERROR, 2);
    assert_eq!(fifty_cli::exit_code::INTERRUPTED, 130);
}
