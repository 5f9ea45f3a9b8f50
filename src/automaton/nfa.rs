use std::collections::BTreeSet;

use super::{FaRule, State};

/// Rule table for a non-deterministic automaton
#[derive(Debug, Clone, Default)]
pub struct NfaRuleBook {
    rules: Vec<FaRule>,
}

impl NfaRuleBook {
    /// Creates a rule book
    pub fn new(rules: Vec<FaRule>) -> Self {
        NfaRuleBook { rules }
    }

    /// Every state reachable from any of `states` on `character`
    pub fn next_states(&self, states: &BTreeSet<State>, character: char) -> BTreeSet<State> {
        states
            .iter()
            .flat_map(|&state| self.follow_rules_for(state, character))
            .collect()
    }

    fn follow_rules_for(&self, state: State, character: char) -> impl Iterator<Item = State> + '_ {
        self.rules
            .iter()
            .filter(move |rule| rule.applies_to(state, character))
            .map(FaRule::follow)
    }
}

/// Running non-deterministic automaton, tracking the set of possible states
#[derive(Debug, Clone)]
pub struct Nfa<'a> {
    current_states: BTreeSet<State>,
    accept_states: &'a BTreeSet<State>,
    rulebook: &'a NfaRuleBook,
}

impl<'a> Nfa<'a> {
    /// Creates an automaton in `current_states`
    pub fn new(
        current_states: BTreeSet<State>,
        accept_states: &'a BTreeSet<State>,
        rulebook: &'a NfaRuleBook,
    ) -> Self {
        Nfa {
            current_states,
            accept_states,
            rulebook,
        }
    }

    /// States the automaton could currently be in
    pub fn current_states(&self) -> &BTreeSet<State> {
        &self.current_states
    }

    /// Whether any possible current state is accepting
    pub fn accepting(&self) -> bool {
        !self.current_states.is_disjoint(self.accept_states)
    }

    /// Consumes one character; paths without a rule die out
    pub fn read_character(&mut self, character: char) {
        self.current_states = self.rulebook.next_states(&self.current_states, character);
    }

    /// Consumes every character of `input`
    pub fn read_string(&mut self, input: &str) {
        for c in input.chars() {
            self.read_character(c);
        }
    }
}

/// Reusable description of an NFA
#[derive(Debug, Clone)]
pub struct NfaDesign {
    start_state: State,
    accept_states: BTreeSet<State>,
    rulebook: NfaRuleBook,
}

impl NfaDesign {
    /// Creates a design
    pub fn new(
        start_state: State,
        accept_states: impl IntoIterator<Item = State>,
        rulebook: NfaRuleBook,
    ) -> Self {
        NfaDesign {
            start_state,
            accept_states: accept_states.into_iter().collect(),
            rulebook,
        }
    }

    /// Fresh automaton in the start state
    pub fn to_nfa(&self) -> Nfa<'_> {
        Nfa::new(
            BTreeSet::from([self.start_state]),
            &self.accept_states,
            &self.rulebook,
        )
    }

    /// Whether some path through the automaton accepts `input`
    pub fn accepts(&self, input: &str) -> bool {
        let mut nfa = self.to_nfa();
        nfa.read_string(input);
        nfa.accepting()
    }
}
