//! Application layer: the spin session orchestration and prize evaluation.
//!
//! `SpinController` drives one session end to end, merging the event
//! streams of the spinner tasks over a bounded `tokio` channel;
//! `PrizeEngine` turns the final symbol line into a payout.

pub mod controller;
pub mod prize;
pub mod spinner;
