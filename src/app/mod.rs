// Application layer: the intake use case and the HTTP surface in front of it.

pub mod intake;
pub mod web;

pub use intake::IntakeService;
