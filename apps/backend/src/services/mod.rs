//! Services: the command surface over the domain and the match store.

pub mod match_flow;

pub use match_flow::{parse_pins, parse_roster, CreatedMatch, MatchFlowService, RollAccepted};
