//! Domain Value Objects
//!
//! ## Value Objects
//!
//! | Value Object | Description |
//! |--------------|-------------|
//! | [`FilterRule`] | Substring pattern that suppresses matching events |
//! | [`FilterList`] | Admin rules followed by default rules |
//! | [`FilterDecision`] | Send or suppress outcome of the filter |
//! | [`Event`] | Error event under construction |
//! | [`EventHint`] | Triggering exception attached to an event |

/// Error event value objects
pub mod event;
/// Filter rule value objects
pub mod filter;

pub use event::{Event, EventHint, ExceptionFrame, HintException, LocalizedMessage};
pub use filter::{
    FilterDecision, FilterEntry, FilterList, FilterRule, RuleSource, parse_rule_list,
};
