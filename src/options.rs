use std::path::PathBuf;
#[derive(Debug, Clone)]
pub struct BundleOptions {
    pub root: PathBuf,
    pub ignore_patterns: Vec<String>,
}
impl Default for BundleOptions {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            ignore_patterns: Vec::new(),
        }
    }
}
#[derive(Debug, Default)]
pub struct BundleBuilder {
    options: BundleOptions,
}
impl BundleBuilder {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            options: BundleOptions {
                root: root.into(),
                ..Default::default()
            },
        }
    }
    pub fn ignore_patterns(mut self, patterns: Vec<String>) -> Self {
        self.options.ignore_patterns = patterns;
        self
    }
    pub fn ignore_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.options.ignore_patterns.push(pattern.into());
        self
    }
    pub fn build(self) -> BundleOptions {
        self.options
    }
}
