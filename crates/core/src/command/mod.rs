//! Command execution and error classification
//!
//! Every remote operation flows through [`CommandExecutor`]:
//! enrich parameters, invoke, classify, then translate the failure or hand
//! the raw response to a caller-supplied success transform.

pub mod classifier;
pub mod enricher;
pub mod executor;
pub mod ports;
pub mod translator;

pub use classifier::is_error;
pub use enricher::ParameterEnricher;
pub use executor::CommandExecutor;
pub use translator::translate;
