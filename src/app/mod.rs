/*!
 * Application Module
 * Running application instances and their registry
 */

pub mod instance;
pub mod registry;

pub use instance::{AppDescription, ApplicationInstance};
pub use registry::InstanceRegistry;
