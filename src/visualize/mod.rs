//! Optional graph snapshot rendering.

pub mod plot;
