//! First-match-wins ordering.
//!
//! The standard tables never let both standard rules match one connection,
//! so these tests build registries and rule sets where they do.

use pretty_assertions::assert_eq;
use tether_tests::prelude::*;

/// A parent type that is both an AI chain and a prompt provider.
fn overlapping_registry() -> Registry {
    RegistryConfig::new()
        .with_type(NodeCategory::AiChain, "chatAgent")
        .with_type(NodeCategory::PromptProvider, "chatAgent")
        .build()
        .unwrap()
}

#[test]
fn test_prompt_rule_wins_when_both_standard_rules_match() {
    // GIVEN a parent in both AI chain and prompt provider, and a memory child
    let registry = overlapping_registry();
    let parent = typed("chatAgent");
    let child = node(NodeKind::MemoryZep);
    let session = Rule::session_id_default();
    assert!(Rule::prompt_default().matches(&registry, &parent, &child));
    assert!(session.matches(&registry, &parent, &child));

    // WHEN dispatched with the standard order
    // THEN only the prompt rule's mutation is observed
    Scenario::new("overlap_standard_order")
        .dispatcher(Dispatcher::new(registry, RuleSet::standard()))
        .connect("chat_agent_to_zep", parent, child, |e| {
            e.fires(PROMPT_DEFAULT_RULE)
                .param(PROMPT_TYPE_PARAM, PROMPT_TYPE_DEFINE)
                .absent(SESSION_ID_TYPE_PARAM)
        })
        .run()
        .unwrap();
}

#[test]
fn test_reversed_order_fires_session_rule_instead() {
    let rules = RuleSet::builder()
        .rule(Rule::session_id_default())
        .rule(Rule::prompt_default())
        .build()
        .unwrap();

    Scenario::new("overlap_reversed_order")
        .dispatcher(Dispatcher::new(overlapping_registry(), rules))
        .connect("chat_agent_to_zep", typed("chatAgent"), node(NodeKind::MemoryZep), |e| {
            e.fires(SESSION_ID_DEFAULT_RULE)
                .param(SESSION_ID_TYPE_PARAM, SESSION_ID_CUSTOM_KEY)
                .absent(PROMPT_TYPE_PARAM)
        })
        .run()
        .unwrap();
}

#[test]
fn test_later_rules_are_never_evaluated() {
    use std::sync::atomic::{AtomicUsize, Ordering};

    static LATE_CALLS: AtomicUsize = AtomicUsize::new(0);

    fn late(_: &Node, child: &mut Node) -> bool {
        LATE_CALLS.fetch_add(1, Ordering::SeqCst);
        child.set_param("late", Value::Bool(true))
    }

    let rules = RuleSet::builder()
        .standard_rules()
        .rule(Rule::new("late", Predicate::Any, Predicate::Any, Mutation::Custom(late)))
        .build()
        .unwrap();
    let dispatcher = Dispatcher::new(Registry::standard(), rules);

    let mut child = node(NodeKind::MemoryBufferWindow);
    let outcome = dispatcher.dispatch(&node(NodeKind::Agent), &mut child);

    assert_eq!(outcome.rule(), Some(PROMPT_DEFAULT_RULE));
    assert_eq!(LATE_CALLS.load(Ordering::SeqCst), 0);
    assert_eq!(child.get_param("late"), None);

    // The catch-all only runs once nothing earlier matches.
    let mut other = typed("n8n-nodes-base.set");
    let outcome = dispatcher.dispatch(&typed("n8n-nodes-base.code"), &mut other);
    assert_eq!(outcome.rule(), Some("late"));
    assert_eq!(LATE_CALLS.load(Ordering::SeqCst), 1);
}

#[test]
fn test_matching_rule_that_changes_nothing_still_stops_evaluation() {
    fn keep(_: &Node, _: &mut Node) -> bool {
        false
    }

    let rules = RuleSet::builder()
        .rule(Rule::new(
            "guard",
            Predicate::InCategory(NodeCategory::AiChain),
            Predicate::Any,
            Mutation::Custom(keep),
        ))
        .standard_rules()
        .build()
        .unwrap();

    Scenario::new("guard_first")
        .dispatcher(Dispatcher::new(Registry::standard(), rules))
        .connect("agent_to_memory", node(NodeKind::Agent), node(NodeKind::MemoryZep), |e| {
            e.fires("guard").applied(false).untouched()
        })
        .run()
        .unwrap();
}

#[test]
fn test_type_is_predicate_rule() {
    // The editor-side table keyed a rule on the start node feeding a chat trigger.
    let rules = RuleSet::builder()
        .rule(Rule::new(
            "start-chat-trigger",
            Predicate::TypeIs("start".into()),
            Predicate::InCategory(NodeCategory::PromptProvider),
            Mutation::set_parameter("public", false),
        ))
        .standard_rules()
        .build()
        .unwrap();

    Scenario::new("start_chat_trigger")
        .dispatcher(Dispatcher::new(Registry::standard(), rules))
        .connect("start_to_chat_trigger", node(NodeKind::Start), node(NodeKind::ChatTrigger), |e| {
            e.fires("start-chat-trigger").param("public", false).only_listed()
        })
        .connect("agent_to_memory", node(NodeKind::Agent), node(NodeKind::MemoryZep), |e| {
            e.fires(PROMPT_DEFAULT_RULE)
        })
        .run()
        .unwrap();
}
