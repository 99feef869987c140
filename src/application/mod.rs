//! Application layer wiring the game stages together.
//!
//! `TicketMachine` issues tickets from a `NumberPicker`, `scoring` ranks them
//! against the draw, and `LottoSession` drives the whole console flow.

pub mod machine;
pub mod scoring;
pub mod session;
