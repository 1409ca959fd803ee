//! Tracked module descriptors

use serde::Serialize;
use std::fmt;

/// A named module tracked against its upstream repository
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ModuleDescriptor {
    /// Module name, matching the directory name under the modules root
    pub name: &'static str,
    /// URL of the upstream module definition file
    pub module_url: &'static str,
}

/// Modules published from the eclipse-score tooling repository
pub const TOOLING_MODULES: &[ModuleDescriptor] = &[
    ModuleDescriptor::new(
        "score_cr_checker",
        "https://github.com/eclipse-score/tooling/blob/main/cr_checker/MODULE.bazel",
    ),
    ModuleDescriptor::new(
        "score_dash_license_checker",
        "https://github.com/eclipse-score/tooling/blob/main/dash/MODULE.bazel",
    ),
    ModuleDescriptor::new(
        "score_format_checker",
        "https://github.com/eclipse-score/tooling/blob/main/format_checker/MODULE.bazel",
    ),
    ModuleDescriptor::new(
        "score_python_basics",
        "https://github.com/eclipse-score/tooling/blob/main/python_basics/MODULE.bazel",
    ),
    ModuleDescriptor::new(
        "score_starpls_lsp",
        "https://github.com/eclipse-score/tooling/blob/main/starpls/MODULE.bazel",
    ),
];

impl ModuleDescriptor {
    /// Creates a new descriptor
    pub const fn new(name: &'static str, module_url: &'static str) -> Self {
        Self { name, module_url }
    }

    /// URL of the repository that publishes this module's releases
    ///
    /// Browse URLs such as `https://github.com/org/repo/blob/main/dir/MODULE.bazel`
    /// are cut back to `https://github.com/org/repo`. Any other URL is returned as is.
    pub fn repository_url(&self) -> &'static str {
        let url = self.module_url;
        ["/blob/", "/tree/"]
            .iter()
            .filter_map(|marker| url.find(marker))
            .min()
            .map(|idx| &url[..idx])
            .unwrap_or(url)
    }
}

impl fmt::Display for ModuleDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.module_url)
    }
}
