#![cfg(feature = "automaton")]
/// Integration tests for the DFA and NFA simulators
use simplesem::automaton::{DfaDesign, DfaRuleBook, FaRule, NfaDesign, NfaRuleBook};
use simplesem::Error;

fn contains_ab() -> Vec<FaRule> {
    vec![
        FaRule::new(1, 'a', 2),
        FaRule::new(1, 'b', 1),
        FaRule::new(2, 'a', 2),
        FaRule::new(2, 'b', 3),
        FaRule::new(3, 'a', 3),
        FaRule::new(3, 'b', 3),
    ]
}

#[test]
fn test_dfa_design_accepts() {
    let design = DfaDesign::new(1, [3], DfaRuleBook::new(contains_ab()));

    assert!(!design.accepts("a").unwrap());
    assert!(!design.accepts("baa").unwrap());
    assert!(design.accepts("baba").unwrap());
    assert!(design.accepts("baaab").unwrap());
    assert!(!design.accepts("").unwrap());
}

#[test]
fn test_dfa_design_is_reusable() {
    let design = DfaDesign::new(1, [3], DfaRuleBook::new(contains_ab()));

    let mut dfa = design.to_dfa();
    dfa.read_string("ab").unwrap();
    assert!(dfa.accepting());

    // A fresh machine starts over in the start state
    let fresh = design.to_dfa();
    assert_eq!(fresh.current_state(), 1);
    assert!(!fresh.accepting());
}

#[test]
fn test_dfa_rejects_unknown_character() {
    let design = DfaDesign::new(1, [3], DfaRuleBook::new(contains_ab()));

    let err = design.accepts("abx").unwrap_err();
    assert_eq!(
        err,
        Error::NoTransition {
            state: 3,
            character: 'x'
        }
    );
    assert_eq!(err.to_string(), "No transition from state 3 on 'x'");
}

#[test]
fn test_nfa_agrees_with_dfa_on_deterministic_rules() {
    let dfa = DfaDesign::new(1, [3], DfaRuleBook::new(contains_ab()));
    let nfa = NfaDesign::new(1, [3], NfaRuleBook::new(contains_ab()));

    for input in ["", "a", "b", "ab", "ba", "aab", "bbbb", "abab", "babb"] {
        assert_eq!(dfa.accepts(input).unwrap(), nfa.accepts(input), "input {:?}", input);
    }
}

#[test]
fn test_nfa_follows_every_path() {
    // Accepts anything ending in "ab" by guessing where the suffix starts
    let rulebook = NfaRuleBook::new(vec![
        FaRule::new(1, 'a', 1),
        FaRule::new(1, 'b', 1),
        FaRule::new(1, 'a', 2),
        FaRule::new(2, 'b', 3),
    ]);
    let design = NfaDesign::new(1, [3], rulebook);

    assert!(design.accepts("ab"));
    assert!(design.accepts("bbab"));
    assert!(!design.accepts("aba"));
    assert!(!design.accepts("b"));
}
