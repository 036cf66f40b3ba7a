use std::collections::BTreeMap;
use std::env;
use std::path::{Path, PathBuf};
use std::sync::{PoisonError, RwLock};
use std::time::SystemTime;

use toml_edit::{Document, Item, Table};

/// The caller's `Cargo.toml`, used to locate a [`syn::Path`] to another
/// `rc_*` crate as seen from the crate invoking a proc-macro.
///
/// # Example
///
/// ```rust
/// # use rc_macro_utils::Manifest;
/// let p: syn::Path = Manifest::shared(|m| m.get_crate_path("rc_codec"));
/// ```
///
/// # Resolution rules
///
/// 1. If the crate is listed in `dependencies` under its own name, return `::crate_name`.
/// 2. If it is listed under another key (`alias = { package = "crate_name" }`),
///    return `::alias`.
/// 3. If the name begins with `rc_` and the umbrella crate `rc_core` is a
///    dependency, return `::rc_core::short_name` (e.g. `rc_codec` -> `::rc_core::codec`).
/// 4. Repeat 1-3 in `dev-dependencies`.
/// 5. Otherwise fall back to `::crate_name`.
///
/// A crate referring to itself should add `extern crate self as crate_name;`
/// to its root so that rule 5 resolves inside the crate as well.
#[derive(Debug)]
pub struct Manifest {
    pub manifest: Document<Box<str>>,
    pub modified_time: SystemTime,
}

const UMBRELLA_NAME: &str = "rc_core";
const CRATE_PREFIX: &str = "rc_";

impl Manifest {
    #[inline(never)]
    fn get_manifest_path() -> PathBuf {
        let dir = env::var_os("CARGO_MANIFEST_DIR")
            .expect("CARGO_MANIFEST_DIR should be auto-defined by cargo.");
        let path = PathBuf::from(dir).join("Cargo.toml");
        assert!(
            path.exists(),
            "Cargo manifest does not exist at path {}",
            path.display(),
        );
        path
    }

    #[inline(never)]
    fn read_manifest(path: &Path) -> Document<Box<str>> {
        let manifest = std::fs::read_to_string(path)
            .unwrap_or_else(|_| panic!("Unable to read cargo manifest: {}", path.display()))
            .into_boxed_str();
        Document::parse(manifest)
            .unwrap_or_else(|_| panic!("Failed to parse cargo manifest: {}", path.display()))
    }

    #[inline]
    fn parse_path(path: &str) -> syn::Path {
        syn::parse_str(path).unwrap()
    }

    // Key of a dependency declared as `key = { package = "name", .. }`.
    fn renamed_key<'t>(deps: &'t Table, name: &str) -> Option<&'t str> {
        deps.iter().find_map(|(key, item)| {
            let package = item.get("package")?.as_str()?;
            (package == name).then_some(key)
        })
    }

    fn find_in_deps(deps: &Table, name: &str) -> Option<syn::Path> {
        if deps.contains_key(name) {
            return Some(Self::parse_path(&format!("::{name}")));
        }
        if let Some(key) = Self::renamed_key(deps, name) {
            return Some(Self::parse_path(&format!("::{key}")));
        }
        let module = name.strip_prefix(CRATE_PREFIX)?;
        let umbrella = if deps.contains_key(UMBRELLA_NAME) {
            UMBRELLA_NAME
        } else {
            Self::renamed_key(deps, UMBRELLA_NAME)?
        };
        Some(Self::parse_path(&format!("::{umbrella}::{module}")))
    }

    /// Return a [`syn::Path`] for the package named `name` as resolved from
    /// the caller's Cargo.toml. See the type documentation for the rules.
    #[inline(never)]
    pub fn get_crate_path(&self, name: &str) -> syn::Path {
        ["dependencies", "dev-dependencies"]
            .into_iter()
            .find_map(|table| match self.manifest.get(table) {
                Some(Item::Table(deps)) => Self::find_in_deps(deps, name),
                _ => None,
            })
            .unwrap_or_else(|| Self::parse_path(&format!("::{name}")))
    }

    /// Run `func` with the [`Manifest`] of the caller's Cargo.toml.
    ///
    /// Manifests are cached per path and reparsed when the file's modified
    /// time changes. Callers should still resolve paths once per macro
    /// invocation and pass them along.
    pub fn shared<R>(func: impl FnOnce(&Self) -> R) -> R {
        static MANIFESTS: RwLock<BTreeMap<PathBuf, Manifest>> = RwLock::new(BTreeMap::new());

        let manifest_path = Self::get_manifest_path();
        let modified_time = std::fs::metadata(&manifest_path)
            .and_then(|metadata| metadata.modified())
            .expect("The Cargo.toml should have a modified time.");

        {
            let manifests = MANIFESTS.read().unwrap_or_else(PoisonError::into_inner);
            if let Some(manifest) = manifests.get(&manifest_path)
                && manifest.modified_time == modified_time
            {
                return func(manifest);
            }
        }

        let manifest = Manifest {
            manifest: Self::read_manifest(&manifest_path),
            modified_time,
        };
        let result = func(&manifest);

        MANIFESTS
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(manifest_path, manifest);

        result
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use super::Manifest;
    use std::time::SystemTime;
    use toml_edit::Document;

    fn path_str(path: &syn::Path) -> String {
        path.segments
            .iter()
            .map(|s| s.ident.to_string())
            .collect::<Vec<_>>()
            .join("::")
    }

    fn manifest(text: &str) -> Manifest {
        Manifest {
            manifest: Document::parse(text.to_string().into_boxed_str()).unwrap(),
            modified_time: SystemTime::UNIX_EPOCH,
        }
    }

    #[test]
    fn direct_dependency() {
        let m = manifest("[dependencies]\nrc_codec = \"0.1\"\n");
        assert_eq!(path_str(&m.get_crate_path("rc_codec")), "rc_codec");
    }

    #[test]
    fn renamed_dependency() {
        let m = manifest("[dependencies]\ncodec = { package = \"rc_codec\", version = \"0.1\" }\n");
        assert_eq!(path_str(&m.get_crate_path("rc_codec")), "codec");
    }

    #[test]
    fn through_umbrella() {
        let m = manifest("[dependencies]\nrc_core = \"0.1\"\n");
        assert_eq!(path_str(&m.get_crate_path("rc_codec")), "rc_core::codec");

        let m = manifest("[dev-dependencies]\nrc_core = \"0.1\"\n");
        assert_eq!(path_str(&m.get_crate_path("rc_codec")), "rc_core::codec");
    }

    #[test]
    fn fallback() {
        let m = manifest("[package]\nname = \"rc_codec\"\n");
        assert_eq!(path_str(&m.get_crate_path("rc_codec")), "rc_codec");
    }
}
