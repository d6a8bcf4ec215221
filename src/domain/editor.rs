//! Pure upsert/remove operations over the in-memory entry collection.
//!
//! These functions never touch the filesystem; callers load the entries
//! through `ConfigStore`, transform them here, and persist the result.
//! Each operation builds a fresh sequence instead of mutating matched
//! elements through shared references, which makes the duplicate-update
//! behavior an explicit step rather than an aliasing side effect.

use std::path::Path;

use super::{Destination, DomainName, Entry};

/// Map or remap `source` to a network destination (`host:port`).
pub fn upsert_host(entries: &[Entry], source: &DomainName, host: &str) -> Vec<Entry> {
    upsert(entries, source, Destination::Host(host.to_string()))
}

/// Map or remap `source` to a folder served as static files. The path
/// must already be absolute; resolution happens at the CLI edge.
pub fn upsert_folder(entries: &[Entry], source: &DomainName, folder: &Path) -> Vec<Entry> {
    upsert(entries, source, Destination::Folder(folder.to_path_buf()))
}

/// Replace the destination of every entry whose source matches, keeping
/// its position, or append a new entry when none matches. A collection
/// that already holds duplicates of `source` has all of them updated
/// identically (the loader rejects such files, but callers may pass
/// arbitrary input).
pub fn upsert(entries: &[Entry], source: &DomainName, destination: Destination) -> Vec<Entry> {
    let mut found = false;
    let mut updated: Vec<Entry> = entries
        .iter()
        .map(|entry| {
            if entry.source == *source {
                found = true;
                Entry::new(entry.source.clone(), destination.clone())
            } else {
                entry.clone()
            }
        })
        .collect();

    if !found {
        updated.push(Entry::new(source.clone(), destination));
    }

    updated
}

/// Drop every entry whose source matches, preserving the relative order
/// of the rest. Removing a domain that is not present is a no-op; the
/// caller still persists the (unchanged) result.
pub fn remove(entries: &[Entry], source: &DomainName) -> Vec<Entry> {
    entries
        .iter()
        .filter(|entry| entry.source != *source)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::path::PathBuf;

    use super::*;

    fn domain(name: &str) -> DomainName {
        DomainName::new(name).unwrap()
    }

    fn host_entry(source: &str, host: &str) -> Entry {
        Entry::new(domain(source), Destination::Host(host.to_string()))
    }

    fn folder_entry(source: &str, folder: &str) -> Entry {
        Entry::new(domain(source), Destination::Folder(PathBuf::from(folder)))
    }

    #[test]
    fn test_upsert_appends_to_empty() {
        let entries = upsert_host(&[], &domain("a.test"), "localhost:8080");
        assert_eq!(entries, vec![host_entry("a.test", "localhost:8080")]);
    }

    #[test]
    fn test_upsert_appends_unknown_domain_at_end() {
        let entries = vec![host_entry("a.test", "localhost:8080")];
        let updated = upsert_host(&entries, &domain("b.test"), "localhost:3000");
        assert_eq!(
            updated,
            vec![
                host_entry("a.test", "localhost:8080"),
                host_entry("b.test", "localhost:3000"),
            ]
        );
    }

    #[test]
    fn test_upsert_replaces_in_place() {
        let entries = vec![
            host_entry("a.test", "localhost:8080"),
            host_entry("b.test", "localhost:3000"),
        ];
        let updated = upsert_host(&entries, &domain("a.test"), "localhost:9090");
        assert_eq!(
            updated,
            vec![
                host_entry("a.test", "localhost:9090"),
                host_entry("b.test", "localhost:3000"),
            ]
        );
    }

    #[test]
    fn test_upsert_folder_clears_host() {
        let entries = vec![host_entry("a.test", "localhost:8080")];
        let updated = upsert_folder(&entries, &domain("a.test"), Path::new("/srv/www"));
        assert_eq!(updated, vec![folder_entry("a.test", "/srv/www")]);
    }

    #[test]
    fn test_upsert_host_clears_folder() {
        let entries = vec![folder_entry("a.test", "/srv/www")];
        let updated = upsert_host(&entries, &domain("a.test"), "localhost:8080");
        assert_eq!(updated, vec![host_entry("a.test", "localhost:8080")]);
    }

    #[test]
    fn test_upsert_updates_all_duplicates() {
        let entries = vec![
            host_entry("a.test", "localhost:8080"),
            host_entry("b.test", "localhost:3000"),
            host_entry("a.test", "localhost:8081"),
        ];
        let updated = upsert_host(&entries, &domain("a.test"), "localhost:9090");
        assert_eq!(
            updated,
            vec![
                host_entry("a.test", "localhost:9090"),
                host_entry("b.test", "localhost:3000"),
                host_entry("a.test", "localhost:9090"),
            ]
        );
    }

    #[test]
    fn test_upsert_sequence_keeps_sources_unique() {
        let mut entries = Vec::new();
        entries = upsert_host(&entries, &domain("a.test"), "localhost:8080");
        entries = upsert_folder(&entries, &domain("b.test"), Path::new("/srv/b"));
        entries = upsert_host(&entries, &domain("a.test"), "localhost:9090");
        entries = upsert_folder(&entries, &domain("a.test"), Path::new("/srv/a"));
        entries = upsert_host(&entries, &domain("c.test"), "localhost:3000");

        let sources: Vec<&str> = entries.iter().map(|e| e.source.as_str()).collect();
        let unique: HashSet<&str> = sources.iter().copied().collect();
        assert_eq!(sources.len(), unique.len());
        assert_eq!(sources, vec!["a.test", "b.test", "c.test"]);
        assert_eq!(entries[0], folder_entry("a.test", "/srv/a"));
    }

    #[test]
    fn test_remove_preserves_order() {
        let entries = vec![
            host_entry("a.test", "localhost:8080"),
            host_entry("b.test", "localhost:3000"),
            folder_entry("c.test", "/srv/c"),
        ];
        let updated = remove(&entries, &domain("b.test"));
        assert_eq!(
            updated,
            vec![
                host_entry("a.test", "localhost:8080"),
                folder_entry("c.test", "/srv/c"),
            ]
        );
    }

    #[test]
    fn test_remove_absent_domain_is_identity() {
        let entries = vec![
            host_entry("a.test", "localhost:8080"),
            host_entry("b.test", "localhost:3000"),
        ];
        let updated = remove(&entries, &domain("nonexistent.test"));
        assert_eq!(updated, entries);
    }

    #[test]
    fn test_remove_drops_all_duplicates() {
        let entries = vec![
            host_entry("a.test", "localhost:8080"),
            host_entry("b.test", "localhost:3000"),
            host_entry("a.test", "localhost:8081"),
        ];
        let updated = remove(&entries, &domain("a.test"));
        assert_eq!(updated, vec![host_entry("b.test", "localhost:3000")]);
    }
}
