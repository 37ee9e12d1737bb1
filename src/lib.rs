//! browsershell: a minimal browser shell core.
//!
//! Tab sessions and navigation history for a browser UI to build on: the
//! view layer feeds events through the session coordinator and reads state
//! and load directives back out. No rendering, networking, or persistence of
//! browsing state lives here.
//!
//! Everything is synchronous and single-threaded: each component expects
//! exclusive, serialized access from the thread that owns the session.
//! Callers sharing a session across threads must add their own locking.

pub mod managers;
pub mod services;
pub mod types;

mod indexing;
