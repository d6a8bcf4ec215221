mod destination;
mod domain_name;
pub mod port;

pub use destination::{Destination, DestinationError};
pub use domain_name::{DomainName, DomainNameError};
pub use port::{Port, PortError};
