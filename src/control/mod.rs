//! Decision logic: the rule cascade that turns classified sensor states
//! into a pump command.

pub mod decider;
