// browsershell state managers
// Managers handle stateful operations: navigation history, tabs, and the session coordinating both.

pub mod history_tracker;
pub mod session_coordinator;
pub mod tab_registry;
