use super::{Destination, DomainName};

/// One domain-to-destination mapping. `source` is the unique key within a
/// configuration; uniqueness is kept by the editor on mutation and checked
/// by the config store on load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub source: DomainName,
    pub destination: Destination,
}

impl Entry {
    pub fn new(source: DomainName, destination: Destination) -> Self {
        Self {
            source,
            destination,
        }
    }
}
