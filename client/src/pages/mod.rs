//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`. Fetch logic is generic over `VotingApi` so it can be
//! exercised without a browser.

pub mod act;
pub mod login;
pub mod members;
pub mod vote_control;
pub mod vote_display;
