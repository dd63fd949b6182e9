//! View-model → markup functions. Pure string builders: no I/O, `now`
//! passed in, every feed-provided string routed through `fmt::escape`.

pub mod error;
pub mod pulse;
pub mod today;
