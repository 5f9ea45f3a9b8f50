//! Finite automata over a rule table
//!
//! Unrelated to the semantics engine: no shared types, no calls either way.
//! A [`FaRule`] moves from one state to another on a single character;
//! deterministic machines follow the first matching rule, non-deterministic
//! ones follow all of them at once.

mod dfa;
mod nfa;

pub use dfa::{Dfa, DfaDesign, DfaRuleBook};
pub use nfa::{Nfa, NfaDesign, NfaRuleBook};

use std::fmt;

/// Automaton state identifier
pub type State = u32;

/// Single transition: `state --character--> next_state`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaRule {
    /// State the rule leaves from
    pub state: State,
    /// Input character that triggers the rule
    pub character: char,
    /// State the rule moves to
    pub next_state: State,
}

impl FaRule {
    /// Creates a rule
    pub fn new(state: State, character: char, next_state: State) -> Self {
        FaRule {
            state,
            character,
            next_state,
        }
    }

    /// Whether this rule fires in `state` on `character`
    pub fn applies_to(&self, state: State, character: char) -> bool {
        self.state == state && self.character == character
    }

    /// Destination state
    pub fn follow(&self) -> State {
        self.next_state
    }
}

impl fmt::Display for FaRule {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} --{}--> {}", self.state, self.character, self.next_state)
    }
}
