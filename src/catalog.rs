//! @acp:module "Template Catalog"
//! @acp:summary "Lists the artifact templates available on disk"
//! @acp:domain cli
//! @acp:layer data
//!
//! A template directory holds one folder per category. Agents, commands and
//! rules are markdown files; skills may also be whole directories.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    Agents,
    Commands,
    Skills,
    Rules,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Agents,
        Category::Commands,
        Category::Skills,
        Category::Rules,
    ];

    /// Folder name, both in the template directory and under `.claude/`
    pub fn dir_name(&self) -> &'static str {
        match self {
            Category::Agents => "agents",
            Category::Commands => "commands",
            Category::Skills => "skills",
            Category::Rules => "rules",
        }
    }

    fn allows_directories(&self) -> bool {
        matches!(self, Category::Skills)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.dir_name())
    }
}

#[derive(Debug, Clone, Default)]
pub struct Catalog {
    root: PathBuf,
    entries: BTreeMap<Category, BTreeSet<String>>,
}

impl Catalog {
    /// Scan a template directory; missing category folders are simply empty
    pub fn scan(root: &Path) -> Result<Self> {
        let mut entries = BTreeMap::new();

        for category in Category::ALL {
            let dir = root.join(category.dir_name());
            let mut names = BTreeSet::new();
            if dir.is_dir() {
                for entry in WalkDir::new(&dir).min_depth(1).max_depth(1) {
                    let entry = entry.map_err(std::io::Error::from)?;
                    let file_type = entry.file_type();
                    let usable = file_type.is_file()
                        || (file_type.is_dir() && category.allows_directories());
                    if usable {
                        names.insert(entry.file_name().to_string_lossy().to_string());
                    }
                }
            }
            tracing::debug!(%category, count = names.len(), "scanned templates");
            entries.insert(category, names);
        }

        Ok(Self {
            root: root.to_path_buf(),
            entries,
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn contains(&self, category: Category, file: &str) -> bool {
        self.entries
            .get(&category)
            .is_some_and(|names| names.contains(file))
    }

    /// Names available for a category, sorted
    pub fn entries(&self, category: Category) -> impl Iterator<Item = &str> {
        self.entries
            .get(&category)
            .into_iter()
            .flat_map(|names| names.iter().map(String::as_str))
    }

    /// Source path of a template, if it exists in the catalog
    pub fn source(&self, category: Category, file: &str) -> Option<PathBuf> {
        self.contains(category, file)
            .then(|| self.root.join(category.dir_name()).join(file))
    }

    pub fn len(&self) -> usize {
        self.entries.values().map(BTreeSet::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
