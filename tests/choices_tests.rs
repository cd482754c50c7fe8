// tests/choices_tests.rs

use std::collections::HashMap;

use choice_conditions::{
    ConditionError, NoVariables, ParseError, ResolvedChoice, Resolver, TagKind, TagSet, resolve,
};

fn resolve_one(label: &str) -> ResolvedChoice {
    let mut diagnostics = Vec::new();
    Resolver::default().resolve_one(0, label, &NoVariables, &mut diagnostics)
}

#[test]
fn test_disabled_choice() {
    let choice = resolve_one("<dis>true</dis>choice");
    assert_eq!(choice.text, "choice");
    assert!(!choice.enabled);
    assert!(!choice.hidden);
}

#[test]
fn test_false_disable_keeps_choice_enabled() {
    let choice = resolve_one("<dis>5 >= (2*8)</dis> choice");
    assert_eq!(choice.text, " choice");
    assert!(choice.enabled);
}

#[test]
fn test_nested_arithmetic_disable() {
    let choice = resolve_one("<dis>(1+2) >= (2*(3-3))</dis> choice");
    assert_eq!(choice.text, " choice");
    assert!(!choice.enabled);
}

#[test]
fn test_hidden_by_variable() {
    let vars: HashMap<usize, f64> = [(3, 90.0)].into_iter().collect();
    let mut diagnostics = Vec::new();
    let choice = Resolver::default().resolve_one(
        0,
        r"<hide>\v[3] == 90</hide>Third choice!",
        &vars,
        &mut diagnostics,
    );
    assert!(choice.hidden);
    assert_eq!(choice.text, "Third choice!");
    assert!(diagnostics.is_empty());
}

#[test]
fn test_plain_choice() {
    let choice = resolve_one("choice");
    assert_eq!(
        choice,
        ResolvedChoice {
            index: 0,
            text: "choice".into(),
            enabled: true,
            hidden: false,
        }
    );
}

#[test]
fn test_empty_condition_is_reported_not_fatal() {
    let resolution =
        Resolver::default().resolve_with_diagnostics(&["<dis></dis>choice"], &NoVariables);
    assert_eq!(resolution.choices.len(), 1);
    assert!(resolution.choices[0].enabled);
    assert_eq!(resolution.choices[0].text, "choice");

    assert_eq!(resolution.diagnostics.len(), 1);
    let diag = &resolution.diagnostics[0];
    assert_eq!(diag.kind, TagKind::Disable);
    assert_eq!(diag.error, ConditionError::Parse(ParseError::EmptyExpression));
}

#[test]
fn test_hidden_choices_are_dropped_and_order_kept() {
    let labels = [
        "<dis>true</dis>First",
        "<hide>true</hide>Second",
        "Third",
        "<hide>false</hide><dis>false</dis>Fourth",
    ];
    let choices = resolve(&labels, &NoVariables);

    let texts: Vec<&str> = choices.iter().map(|c| c.text.as_str()).collect();
    assert_eq!(texts, ["First", "Third", "Fourth"]);
    let indices: Vec<usize> = choices.iter().map(|c| c.index).collect();
    assert_eq!(indices, [0, 2, 3]);
    assert!(!choices[0].enabled);
    assert!(choices[1].enabled);
    assert!(choices.iter().all(|c| !c.hidden));
}

#[test]
fn test_one_bad_condition_does_not_break_the_list() {
    let labels = [
        "<dis>(1 + </dis>Broken",
        "<hide>banana</hide>Also broken",
        "<dis>1 + 1</dis>Not a condition",
        "<dis>true + 1</dis>Type error",
        "<dis>true</dis>Fine",
    ];
    let resolution = Resolver::default().resolve_with_diagnostics(&labels, &NoVariables);

    assert_eq!(resolution.choices.len(), 5);
    assert!(resolution.choices[..4].iter().all(|c| c.enabled));
    assert!(!resolution.choices[4].enabled);

    let errors: Vec<&ConditionError> = resolution.diagnostics.iter().map(|d| &d.error).collect();
    assert_eq!(errors.len(), 4);
    assert!(matches!(
        errors[0],
        ConditionError::Parse(ParseError::UnterminatedParenthesis { .. })
    ));
    assert!(matches!(
        errors[1],
        ConditionError::Parse(ParseError::MalformedExpression(_))
    ));
    assert!(matches!(errors[2], ConditionError::NotACondition(_)));
    assert!(matches!(errors[3], ConditionError::Eval(_)));
    assert_eq!(resolution.diagnostics[1].kind, TagKind::Hide);
    assert_eq!(resolution.diagnostics[1].condition, "banana");
}

#[test]
fn test_plugin_help_examples() {
    let labels = [
        r"<dis> (\v[1] > 0) && (\v[1] < 100) </dis>First choice!",
        r"<dis> (\v[1] > 0) || (\v[2] == (\v[3] + 3) ) </dis>Second choice!",
        r"<dis> (\v[1] == 0) || ((\v[2] > 0) && (\v[3] > 0)) </dis><hide>\v[3] == 90</hide>Third choice!",
    ];

    let vars = vec![0.0, 0.0, 93.0, 90.0];
    let choices = resolve(&labels, &vars);
    assert_eq!(choices.len(), 2);
    assert_eq!(choices[0].text, "First choice!");
    assert!(choices[0].enabled);
    assert_eq!(choices[1].text, "Second choice!");
    assert!(!choices[1].enabled);

    let vars = vec![0.0, 50.0, 0.0, 1.0];
    let choices = resolve(&labels, &vars);
    assert_eq!(choices.len(), 3);
    assert!(!choices[0].enabled);
    assert!(!choices[1].enabled);
    assert!(choices[2].enabled);
}

#[test]
fn test_preview_and_final_passes_agree() {
    let labels = vec![
        "<hide>\\v[1] > 2</hide>Hidden later".to_string(),
        "<dis>\\v[1] > 2</dis>Locked later".to_string(),
        "Always".to_string(),
    ];
    let vars = vec![0.0, 5.0];
    let resolver = Resolver::default();

    let preview = resolver.preview_resolve(&labels, &vars);
    let final_list = resolver.final_resolve(&labels, &vars);
    assert_eq!(preview, ["Locked later", "Always"]);
    let final_texts: Vec<String> = final_list.iter().map(|c| c.text.clone()).collect();
    assert_eq!(preview, final_texts);

    // Input untouched, so a second pass is identical
    assert_eq!(resolver.final_resolve(&labels, &vars), final_list);
    assert_eq!(labels[0], "<hide>\\v[1] > 2</hide>Hidden later");
}

#[test]
fn test_long_form_resolver() {
    let resolver = Resolver::new(TagSet::long_form());
    let choices = resolver.resolve(&["<disable>true</disable>Locked"], &NoVariables);
    assert_eq!(choices[0].text, "Locked");
    assert!(!choices[0].enabled);
    assert_eq!(resolver.tags(), &TagSet::long_form());
}
