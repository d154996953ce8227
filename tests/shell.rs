use tacsyn::main_handler::{Config, Session};
use tacsyn::*;

const SCRIPT: &str = "description: adds two numbers

signature: add : (int, int) -> int

intro: x

switch: 0

intro: x

switch: 0

intro: y

return:

fill: x + 1

finish:
";

fn output(session: Session<Vec<u8>>) -> String {
    String::from_utf8(session.into_output()).unwrap()
}

#[test]
fn commands_are_separated_by_blank_lines() {
    assert_eq!(
        util::split_commands("a: 1\n\nb: 2\nmore\n\n\n"),
        vec!["a: 1", "b: 2\nmore"]
    );
    assert!(util::split_commands("\n\n").is_empty());
}

#[test]
fn pad_str_prefixes_every_line() {
    assert_eq!(util::pad_str("a\nb", "| "), "| a\n| b");
    assert_eq!(util::pad_str("", "# "), "# ");
}

#[test]
fn script_runs_to_completion() {
    let mut session = Session::new(Config::default(), vec![]).unwrap();
    session.script(SCRIPT).unwrap();
    assert!(session.synth.program.complete());

    let out = output(session);
    assert!(out.contains("Initial program"));
    assert!(out.contains("| [0*]"));
    assert!(out.contains("> Options: description"));
    assert!(out.contains("Tactic \"intro\" not allowed for the selected hole"));
    assert!(out.contains("Finished the program"));
    assert!(out.contains(
        "| # adds two numbers\n| def add(x: int, y: int) -> int:\n|     return x + 1"
    ));
}

#[test]
fn script_stops_at_finish() {
    let script = format!("{}\ndescription: never applied\n", SCRIPT);
    let mut session = Session::new(Config::default(), vec![]).unwrap();
    session.script(&script).unwrap();
    let out = output(session);
    assert!(!out.contains("never applied"));
}

#[test]
fn interactive_blocks_end_with_empty_line() {
    let input = "description: adds\ntwo numbers\n\nsignature: f : int -> int\n\n";
    let mut session = Session::new(Config::default(), vec![]).unwrap();
    session.interact(input.as_bytes()).unwrap();

    assert_eq!(
        session.synth.rendered(),
        "# adds\n# two numbers\ndef f([0]: int) -> int:\n    [1*]"
    );
    let out = output(session);
    assert!(out.contains("Added signature"));
    assert!(out.contains("> Options: switch, let, return"));
}

#[test]
fn interactive_input_may_end_without_blank_line() {
    let input = "description: adds two numbers";
    let mut session = Session::new(Config::default(), vec![]).unwrap();
    session.interact(input.as_bytes()).unwrap();
    assert_eq!(session.synth.rendered(), "# adds two numbers\n[0*]");
}

#[test]
fn quiet_mode_prints_only_final_program() {
    let config = Config {
        quiet: true,
        ..Config::default()
    };
    let mut session = Session::new(config, vec![]).unwrap();
    session.script(SCRIPT).unwrap();
    let out = output(session);
    assert!(!out.contains("| [0*]"));
    assert!(out.contains("|     return x + 1"));
}

#[test]
fn tree_view_shows_holes() {
    let config = Config {
        tree: true,
        ..Config::default()
    };
    let mut session = Session::new(config, vec![]).unwrap();
    session.command("description: adds two numbers").unwrap();
    let out = output(session);
    assert!(out.contains("Composite"));
    assert!(out.contains("Hole [0*] {signature}"));
}

#[test]
fn json_export_of_finished_program() {
    let path = std::env::temp_dir().join("tacsyn_shell_test.json");
    let config = Config {
        json: Some(path.clone()),
        ..Config::default()
    };
    let mut session = Session::new(config, vec![]).unwrap();
    session.script(SCRIPT).unwrap();

    let contents = std::fs::read_to_string(&path).unwrap();
    let program: ir::Program = serde_json::from_str(&contents).unwrap();
    assert_eq!(program.root, session.synth.program.root);
    assert!(program.open.is_empty());
    let _ = std::fs::remove_file(path);
}

#[test]
fn run_script_returns_final_program() {
    assert_eq!(
        run_script(&SCRIPT.replacen("intro: x\n\nswitch: 0", "switch: 0", 1)),
        Ok("# adds two numbers\ndef add(x: int, y: int) -> int:\n    return x + 1"
            .to_owned())
    );
    assert_eq!(
        run_script("description: unfinished"),
        Ok("# unfinished\n[0*]".to_owned())
    );
    assert_eq!(
        run_script("intro: x"),
        Err("Tactic \"intro\" not allowed for the selected hole".to_owned())
    );
}
