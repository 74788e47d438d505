pub mod cards;
pub mod cli;
pub mod decision;
pub mod display;
pub mod equity;
pub mod error;
pub mod hand_evaluator;
pub mod improve;
pub mod request;
pub mod sampler;

pub use equity::{simulate, SimulationResult};
pub use error::{SimError, SimResult};
pub use request::SimulationRequest;
