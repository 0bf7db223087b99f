//! Route classification rules.
//!
//! Rules are declared as JSON (or as `[[rules]]` tables in the config file)
//! and compiled once into a [`RuleSet`]. Classification walks the rules in
//! declaration order and returns the route of the first one that matches.
mod config;
mod set;


pub use config::RouteRuleConfig;
pub use set::{RouteRule, RuleSet};
