//! Domain model: tickets, winning numbers, ranks and the result tally.

pub mod ports;
pub mod purchase;
pub mod rank;
pub mod tally;
pub mod ticket;
pub mod winning;
