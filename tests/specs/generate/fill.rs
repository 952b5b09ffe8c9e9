//! Generate specs
//!
//! Verify substitution output and the placeholder status report.

use crate::prelude::*;

#[test]
fn fills_every_defined_placeholder() {
    let temp = Project::empty();
    temp.file("template.txt", "Hello, {{name}}! You are {{age}}.\n");
    temp.file("vars.txt", "name = Alice\nage, 30\n");

    temp.tfill()
        .args(&["generate", "-t", "template.txt", "-d", "vars.txt"])
        .passes()
        .stdout_eq("Hello, Alice! You are 30.\n")
        .stderr_eq("Variables:\n  name → Alice\n  age → 30\n");
}

#[test]
fn undefined_placeholder_stays_literal() {
    let temp = Project::empty();
    temp.file("template.txt", "{{x}}{{y}}");
    temp.file("vars.txt", "x=1");

    temp.tfill()
        .args(&["generate", "-t", "template.txt", "-d", "vars.txt"])
        .passes()
        .stdout_eq("1{{y}}")
        .stderr_eq("Variables:\n  x → 1\n  y (undefined)\n");
}

#[test]
fn key_with_pattern_characters() {
    let temp = Project::empty();
    temp.file("template.txt", "{{a.b}} {{a*b}}");
    temp.file("vars.txt", "a.b=5\na*b=6");

    temp.tfill()
        .args(&["generate", "-t", "template.txt", "-d", "vars.txt", "--no-status"])
        .passes()
        .stdout_eq("5 6");
}

#[test]
fn padded_placeholder_is_not_trimmed() {
    let temp = Project::empty();
    temp.file("template.txt", "{{ name }}");
    temp.file("vars.txt", "name=Alice");

    temp.tfill()
        .args(&["generate", "-t", "template.txt", "-d", "vars.txt"])
        .passes()
        .stdout_eq("{{ name }}")
        .stderr_has(" name  (undefined)");
}

#[test]
fn values_are_not_expanded_again() {
    let temp = Project::empty();
    temp.file("template.txt", "{{a}} {{b}}");
    temp.file("vars.txt", "a = {{b}}\nb = B");

    temp.tfill()
        .args(&["generate", "-t", "template.txt", "-d", "vars.txt", "--no-status"])
        .passes()
        .stdout_eq("{{b}} B");
}

#[test]
fn duplicate_definition_last_wins() {
    let temp = Project::empty();
    temp.file("template.txt", "{{x}}");
    temp.file("vars.txt", "x=1\nx=2");

    temp.tfill()
        .args(&["generate", "-t", "template.txt", "-d", "vars.txt", "--no-status"])
        .passes()
        .stdout_eq("2");
}

#[test]
fn empty_inputs_produce_empty_output() {
    let temp = Project::empty();
    temp.file("template.txt", "");
    temp.file("vars.txt", "");

    temp.tfill()
        .args(&["generate", "-t", "template.txt", "-d", "vars.txt"])
        .passes()
        .stdout_eq("")
        .stderr_eq("");
}

#[test]
fn vars_from_stdin() {
    let temp = Project::empty();
    temp.file("template.txt", "{{greeting}}, world");

    temp.tfill()
        .args(&["generate", "-t", "template.txt", "-d", "-", "--no-status"])
        .stdin("greeting = Hi\n")
        .passes()
        .stdout_eq("Hi, world");
}

#[test]
fn strict_mode_writes_output_then_fails() {
    let temp = Project::empty();
    temp.file("template.txt", "{{x}}{{y}}");
    temp.file("vars.txt", "x=1");

    temp.tfill()
        .args(&["generate", "-t", "template.txt", "-d", "vars.txt", "-o", "out.txt", "--strict"])
        .fails()
        .stdout_has("Wrote out.txt")
        .stderr_has("1 undefined placeholder(s): {{y}}");

    assert_eq!(temp.read("out.txt"), "1{{y}}");
}

#[test]
fn check_reports_without_substituting() {
    let temp = Project::empty();
    temp.file("template.txt", "{{x}}{{y}}");
    temp.file("vars.txt", "x=1");

    temp.tfill()
        .args(&["check", "-t", "template.txt", "-d", "vars.txt"])
        .passes()
        .stdout_eq("x → 1\ny (undefined)\n");
}

#[test]
fn byte_order_marks_are_ignored() {
    let temp = Project::empty();
    temp.file("template.txt", "\u{feff}Hi {{name}}");
    temp.file("vars.txt", "\u{feff}name=Alice\n");

    temp.tfill()
        .args(&["generate", "-t", "template.txt", "-d", "vars.txt", "--no-status"])
        .passes()
        .stdout_eq("Hi Alice");
}
