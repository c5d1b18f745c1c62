//! Derived read-only facts about the host being provisioned.
//!
//! Each fact is resolved at most once per run by dispatching one command
//! and extracting one value from its output. A miss (command failure or
//! no match) yields `None`; the orchestrator decides what to do with an
//! absent fact.

mod adapter;
mod resolver;
mod serial;

pub use adapter::adapter_index;
pub use resolver::resolver_address;
pub use serial::serial_number;
