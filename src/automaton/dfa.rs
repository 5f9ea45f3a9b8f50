use std::collections::BTreeSet;

use super::{FaRule, State};
use crate::error::{Error, Result};

/// Rule table for a deterministic automaton
#[derive(Debug, Clone, Default)]
pub struct DfaRuleBook {
    rules: Vec<FaRule>,
}

impl DfaRuleBook {
    /// Creates a rule book
    pub fn new(rules: Vec<FaRule>) -> Self {
        DfaRuleBook { rules }
    }

    /// First rule that applies, scanning in table order
    pub fn rule_for(&self, state: State, character: char) -> Option<&FaRule> {
        self.rules
            .iter()
            .find(|rule| rule.applies_to(state, character))
    }

    /// State reached from `state` on `character`
    pub fn next_state(&self, state: State, character: char) -> Result<State> {
        self.rule_for(state, character)
            .map(FaRule::follow)
            .ok_or(Error::NoTransition { state, character })
    }
}

/// Running deterministic automaton
#[derive(Debug, Clone)]
pub struct Dfa<'a> {
    current_state: State,
    accept_states: &'a BTreeSet<State>,
    rulebook: &'a DfaRuleBook,
}

impl<'a> Dfa<'a> {
    /// Creates an automaton in `current_state`
    pub fn new(
        current_state: State,
        accept_states: &'a BTreeSet<State>,
        rulebook: &'a DfaRuleBook,
    ) -> Self {
        Dfa {
            current_state,
            accept_states,
            rulebook,
        }
    }

    /// Current state
    pub fn current_state(&self) -> State {
        self.current_state
    }

    /// Whether the current state is accepting
    pub fn accepting(&self) -> bool {
        self.accept_states.contains(&self.current_state)
    }

    /// Consumes one character
    pub fn read_character(&mut self, character: char) -> Result<()> {
        self.current_state = self.rulebook.next_state(self.current_state, character)?;
        Ok(())
    }

    /// Consumes every character of `input`
    pub fn read_string(&mut self, input: &str) -> Result<()> {
        input.chars().try_for_each(|c| self.read_character(c))
    }
}

/// Reusable description of a DFA, spawning a fresh machine per input
#[derive(Debug, Clone)]
pub struct DfaDesign {
    start_state: State,
    accept_states: BTreeSet<State>,
    rulebook: DfaRuleBook,
}

impl DfaDesign {
    /// Creates a design
    pub fn new(
        start_state: State,
        accept_states: impl IntoIterator<Item = State>,
        rulebook: DfaRuleBook,
    ) -> Self {
        DfaDesign {
            start_state,
            accept_states: accept_states.into_iter().collect(),
            rulebook,
        }
    }

    /// Fresh automaton in the start state
    pub fn to_dfa(&self) -> Dfa<'_> {
        Dfa::new(self.start_state, &self.accept_states, &self.rulebook)
    }

    /// Whether the automaton ends in an accepting state after reading `input`
    pub fn accepts(&self, input: &str) -> Result<bool> {
        let mut dfa = self.to_dfa();
        dfa.read_string(input)?;
        tracing::trace!(input, state = dfa.current_state(), "dfa finished");
        Ok(dfa.accepting())
    }
}
