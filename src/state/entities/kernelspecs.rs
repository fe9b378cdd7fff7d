use compact_str::CompactString;
use rustc_hash::FxHashMap;
use serde::Deserialize;

/// One installed kernelspec, as listed by a kernelspec provider
/// (`jupyter kernelspec list --json` shape).
#[derive(Debug, Clone, Deserialize)]
pub struct KernelspecRecord {
    pub display_name: String,
    pub language: String,
    #[serde(default)]
    pub argv: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct KernelspecEntry {
    spec: KernelspecRecord,
}

#[derive(Debug, Deserialize)]
struct KernelspecListing {
    kernelspecs: FxHashMap<String, KernelspecEntry>,
}

#[derive(Debug, Default)]
pub struct KernelspecsState {
    pub by_name: FxHashMap<CompactString, KernelspecRecord>,
}

impl KernelspecsState {
    /// Replace the known kernelspecs from a JSON listing.
    pub fn load_listing(&mut self, json: &str) -> serde_json::Result<usize> {
        let listing: KernelspecListing = serde_json::from_str(json)?;
        self.by_name = listing
            .kernelspecs
            .into_iter()
            .map(|(name, entry)| (CompactString::new(&name), entry.spec))
            .collect();
        Ok(self.by_name.len())
    }

    pub fn spec(&self, name: &str) -> Option<&KernelspecRecord> {
        self.by_name.get(name)
    }
}
