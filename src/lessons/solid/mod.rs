pub mod dependency_inversion;
pub mod interface_segregation;
pub mod liskov;
pub mod open_closed;
pub mod single_responsibility;

pub use dependency_inversion::DependencyInversionLesson;
pub use interface_segregation::InterfaceSegregationLesson;
pub use liskov::LiskovLesson;
pub use open_closed::OpenClosedLesson;
pub use single_responsibility::SingleResponsibilityLesson;
