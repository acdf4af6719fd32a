//! Release catalog resolution
//!
//! The `@minecraft/server` package publishes builds as
//! `MAJOR.MINOR.PATCH-beta.X.Y.Z[-stable]`, where `MAJOR.MINOR.PATCH` is the
//! script API version and `X.Y.Z` the game release it ships with. Only
//! `-stable` builds are valid targets for a plugin.

use std::sync::LazyLock;

use indexmap::IndexMap;
use regex::Regex;
use tracing::{info, trace};

use crate::version::error::RegistryError;
use crate::version::registry::Registry;
use crate::version::triple::VersionTriple;

/// A stable build: `MAJOR.MINOR.PATCH-beta.X.Y.Z-stable`
static STABLE_VERSION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d+\.\d+\.\d+-beta\.\d+\.\d+\.\d+)-stable$").expect("stable version regex")
});

/// A stable build with its `-stable` marker stripped
static REDUCED_VERSION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d+\.\d+\.\d+)-beta\.(\d+\.\d+\.\d+)$").expect("reduced version regex")
});

/// One compatible API release line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseDescriptor {
    /// Raw registry string chosen to represent this release line
    pub original: String,
    /// Script API version (`MAJOR.MINOR.PATCH` before `-beta`)
    pub api_version: VersionTriple,
    /// Minimum compatible game version (`X.Y.Z` after `-beta.`)
    pub release_version: VersionTriple,
}

impl ReleaseDescriptor {
    /// The API version as declared in a behavior pack manifest (e.g. `1.11.0-beta`)
    pub fn pre_release_api_version(&self) -> String {
        format!("{}-beta", self.api_version)
    }
}

/// Release descriptors ordered from newest to oldest API version,
/// holding at most one descriptor per API version
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    releases: Vec<ReleaseDescriptor>,
}

impl Catalog {
    pub fn releases(&self) -> &[ReleaseDescriptor] {
        &self.releases
    }

    pub fn iter(&self) -> impl Iterator<Item = &ReleaseDescriptor> {
        self.releases.iter()
    }

    pub fn len(&self) -> usize {
        self.releases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.releases.is_empty()
    }

    /// The release with the highest API version
    pub fn latest(&self) -> Option<&ReleaseDescriptor> {
        self.releases.first()
    }

    pub fn get(&self, index: usize) -> Option<&ReleaseDescriptor> {
        self.releases.get(index)
    }

    /// Locate the release a `package.json` dependency value refers to.
    ///
    /// Accepts the exact raw string, a range-prefixed value (`^1.11.0`) or any
    /// value whose leading `MAJOR.MINOR.PATCH` matches an API version.
    pub fn position_of_dependency(&self, spec: &str) -> Option<usize> {
        let spec = spec.trim().trim_start_matches(['^', '~', '=']);

        if let Some(index) = self.releases.iter().position(|r| r.original == spec) {
            return Some(index);
        }

        let prefix = spec.split_once('-').map_or(spec, |(prefix, _)| prefix);
        let api_version: VersionTriple = prefix.parse().ok()?;
        self.releases
            .iter()
            .position(|r| r.api_version == api_version)
    }
}

/// Reduce raw published versions (newest first) to a catalog.
///
/// Strings that are not stable builds are skipped. When several stable builds
/// share an API version, the last one in input order represents the line.
pub fn resolve(raw_versions: &[String]) -> Catalog {
    let mut lines: IndexMap<VersionTriple, ReleaseDescriptor> = IndexMap::new();

    for raw in raw_versions {
        let Some(reduced) = STABLE_VERSION_RE
            .captures(raw)
            .and_then(|captures| captures.get(1))
        else {
            trace!("Skipping non-stable version {}", raw);
            continue;
        };

        let Some((api_version, release_version)) = parse_reduced(reduced.as_str()) else {
            trace!("Skipping unparseable version {}", raw);
            continue;
        };

        // Re-inserting keeps the first-seen position and replaces the value
        lines.insert(
            api_version.clone(),
            ReleaseDescriptor {
                original: raw.clone(),
                api_version,
                release_version,
            },
        );
    }

    let mut releases: Vec<ReleaseDescriptor> = lines.into_values().collect();
    releases.sort_by(|a, b| b.api_version.cmp(&a.api_version));

    Catalog { releases }
}

fn parse_reduced(reduced: &str) -> Option<(VersionTriple, VersionTriple)> {
    let captures = REDUCED_VERSION_RE.captures(reduced)?;
    let api_version = captures.get(1)?.as_str().parse().ok()?;
    let release_version = captures.get(2)?.as_str().parse().ok()?;
    Some((api_version, release_version))
}

/// Fetch the published versions of `package_name` and resolve them.
///
/// Registry failures propagate unchanged.
pub async fn fetch_catalog(
    registry: &dyn Registry,
    package_name: &str,
) -> Result<Catalog, RegistryError> {
    let versions = registry.fetch_all_versions(package_name).await?;
    let catalog = resolve(&versions.versions);
    info!(
        "Resolved {} stable release lines from {} published versions of {}",
        catalog.len(),
        versions.versions.len(),
        package_name
    );
    Ok(catalog)
}
