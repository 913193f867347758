use std::collections::HashMap;
use std::path::{Component, Path, PathBuf};

use tracing::{debug, warn};

use super::{
    compare_entries, normalize_path, DirSource, EntryData, FileSystemModel, IconKind, ModelIndex,
    SortColumn, SortOrder,
};
use crate::error::Result;

/// A node of the model arena.
#[derive(Clone, Debug)]
struct Node {
    data: EntryData,
    parent: Option<ModelIndex>,
    /// `None` until the directory has been listed
    children: Option<Vec<ModelIndex>>,
}

impl Node {
    fn is_hidden(&self) -> bool {
        self.data.name.starts_with('.')
    }
}

/// Lazily-populated filesystem model over a [`DirSource`].
///
/// Nodes live in an arena and are never removed, so a [`ModelIndex`] stays
/// valid for the lifetime of the model. A directory is listed the first
/// time its children are requested, either directly through
/// [`FileSystemModel::children`] or while resolving a path below it.
///
/// Dot-files are materialized (so paths through them still resolve) but
/// filtered out of [`FileSystemModel::children`] unless hidden entries are
/// enabled.
#[derive(Clone, Debug)]
pub struct FsModel<S> {
    source: S,
    root_path: PathBuf,
    root: Option<ModelIndex>,
    nodes: Vec<Node>,
    by_path: HashMap<PathBuf, ModelIndex>,
    sort_column: SortColumn,
    sort_order: SortOrder,
    show_hidden: bool,
}

impl<S: DirSource> FsModel<S> {
    /// Create an unrooted model. Call [`FileSystemModel::set_root_path`]
    /// before resolving anything.
    pub fn new(source: S) -> Self {
        Self {
            source,
            root_path: PathBuf::new(),
            root: None,
            nodes: Vec::new(),
            by_path: HashMap::new(),
            sort_column: SortColumn::default(),
            sort_order: SortOrder::default(),
            show_hidden: false,
        }
    }

    /// Include dot-files in children listings.
    pub fn with_hidden(mut self, show_hidden: bool) -> Self {
        self.show_hidden = show_hidden;
        self
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Number of nodes materialized so far.
    #[cfg(test)]
    pub fn materialized(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the directory at `index` has already been listed.
    #[cfg(test)]
    pub fn is_fetched(&self, index: ModelIndex) -> bool {
        self.nodes
            .get(index.raw())
            .is_some_and(|n| n.children.is_some())
    }

    pub fn sorting(&self) -> (SortColumn, SortOrder) {
        (self.sort_column, self.sort_order)
    }

    fn push_node(&mut self, data: EntryData, parent: Option<ModelIndex>) -> ModelIndex {
        let index = ModelIndex::new(self.nodes.len());
        self.by_path.insert(data.path.clone(), index);
        self.nodes.push(Node {
            data,
            parent,
            children: None,
        });
        index
    }

    fn sort_indices(&self, indices: &mut [ModelIndex]) {
        indices.sort_by(|a, b| {
            compare_entries(
                &self.nodes[a.raw()].data,
                &self.nodes[b.raw()].data,
                self.sort_column,
                self.sort_order,
            )
        });
    }

    /// List a directory on first use and return all of its children,
    /// hidden ones included.
    fn fetch(&mut self, index: ModelIndex) -> Vec<ModelIndex> {
        let Some(node) = self.nodes.get(index.raw()) else {
            return Vec::new();
        };
        if let Some(children) = &node.children {
            return children.clone();
        }
        if !node.data.is_dir {
            return Vec::new();
        }

        let path = node.data.path.clone();
        let entries = match self.source.read_dir(&path) {
            Ok(entries) => entries,
            Err(err) => {
                // Unreadable directories show up empty
                warn!(path = %path.display(), error = %err, "failed to list directory");
                Vec::new()
            }
        };

        let mut children = Vec::with_capacity(entries.len());
        for entry in entries {
            let child_path = path.join(&entry.name);
            if let Some(&existing) = self.by_path.get(&child_path) {
                children.push(existing);
                continue;
            }
            let data = EntryData {
                icon: IconKind::for_entry(&entry.name, entry.is_dir),
                name: entry.name,
                path: child_path,
                is_dir: entry.is_dir,
                size: entry.size,
                modified: entry.modified,
            };
            children.push(self.push_node(data, Some(index)));
        }
        self.sort_indices(&mut children);

        debug!(path = %path.display(), count = children.len(), "listed directory");
        self.nodes[index.raw()].children = Some(children.clone());
        children
    }
}

impl<S: DirSource> FileSystemModel for FsModel<S> {
    fn set_root_path(&mut self, path: &Path) -> Result<ModelIndex> {
        let path = normalize_path(path);
        self.root_path = path.clone();

        let index = match self.by_path.get(&path) {
            Some(&existing) => existing,
            None => {
                let data = EntryData {
                    name: path.display().to_string(),
                    path: path.to_path_buf(),
                    is_dir: true,
                    icon: IconKind::Folder,
                    size: None,
                    modified: None,
                };
                self.push_node(data, None)
            }
        };

        self.root = Some(index);
        debug!(root = %path.display(), "model root set");
        Ok(index)
    }

    fn root_path(&self) -> &Path {
        &self.root_path
    }

    fn index(&mut self, path: &Path) -> Option<ModelIndex> {
        if let Some(&index) = self.by_path.get(path) {
            return Some(index);
        }
        let path = &normalize_path(path);
        if let Some(&index) = self.by_path.get(path) {
            return Some(index);
        }

        let relative = path.strip_prefix(&self.root_path).ok()?;
        let mut current = self.root?;

        for component in relative.components() {
            match component {
                Component::Normal(name) => {
                    let name = name.to_string_lossy();
                    current = self
                        .fetch(current)
                        .into_iter()
                        .find(|child| self.nodes[child.raw()].data.name == name)?;
                }
                Component::CurDir => {}
                Component::ParentDir => current = self.parent(current)?,
                Component::RootDir | Component::Prefix(_) => return None,
            }
        }

        Some(current)
    }

    fn parent(&self, index: ModelIndex) -> Option<ModelIndex> {
        self.nodes.get(index.raw())?.parent
    }

    fn is_dir(&self, index: ModelIndex) -> bool {
        self.nodes
            .get(index.raw())
            .is_some_and(|n| n.data.is_dir)
    }

    fn data(&self, index: ModelIndex) -> Option<EntryData> {
        self.nodes.get(index.raw()).map(|n| n.data.clone())
    }

    fn children(&mut self, index: ModelIndex) -> Vec<ModelIndex> {
        let children = self.fetch(index);
        if self.show_hidden {
            return children;
        }
        children
            .into_iter()
            .filter(|child| !self.nodes[child.raw()].is_hidden())
            .collect()
    }

    fn sort(&mut self, column: SortColumn, order: SortOrder) {
        self.sort_column = column;
        self.sort_order = order;

        for i in 0..self.nodes.len() {
            if let Some(mut children) = self.nodes[i].children.take() {
                self.sort_indices(&mut children);
                self.nodes[i].children = Some(children);
            }
        }
        debug!(?column, ?order, "model sorted");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::RawEntry;
    use std::cell::RefCell;
    use std::io;

    /// In-memory source that records which directories were listed.
    struct MapSource {
        dirs: HashMap<PathBuf, Vec<RawEntry>>,
        reads: RefCell<Vec<PathBuf>>,
    }

    impl DirSource for MapSource {
        fn read_dir(&self, path: &Path) -> io::Result<Vec<RawEntry>> {
            self.reads.borrow_mut().push(path.to_path_buf());
            self.dirs
                .get(path)
                .cloned()
                .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "no such directory"))
        }
    }

    fn create_test_model() -> FsModel<MapSource> {
        let mut dirs = HashMap::new();
        dirs.insert(
            PathBuf::from("/"),
            vec![RawEntry::dir("home"), RawEntry::dir("etc"), RawEntry::file("vmlinuz", 10)],
        );
        dirs.insert(PathBuf::from("/home"), vec![RawEntry::dir("ana")]);
        dirs.insert(
            PathBuf::from("/home/ana"),
            vec![
                RawEntry::file("b.txt", 2),
                RawEntry::dir("Documents"),
                RawEntry::file("A.txt", 3),
                RawEntry::dir(".cache"),
            ],
        );
        dirs.insert(PathBuf::from("/home/ana/.cache"), vec![RawEntry::file("x", 1)]);

        let mut model = FsModel::new(MapSource {
            dirs,
            reads: RefCell::new(Vec::new()),
        });
        model.set_root_path(Path::new("/")).unwrap();
        model
    }

    fn names(model: &FsModel<MapSource>, indices: &[ModelIndex]) -> Vec<String> {
        indices
            .iter()
            .map(|i| model.data(*i).unwrap().name)
            .collect()
    }

    #[test]
    fn test_root_is_unparented_directory() {
        let mut model = create_test_model();
        let root = model.index(Path::new("/")).unwrap();
        assert!(model.is_dir(root));
        assert_eq!(model.parent(root), None);
        assert_eq!(model.data(root).unwrap().name, "/");
    }

    #[test]
    fn test_setting_root_does_not_list_anything() {
        let model = create_test_model();
        assert!(model.source().reads.borrow().is_empty());
        assert_eq!(model.materialized(), 1);
    }

    #[test]
    fn test_index_materializes_only_ancestors() {
        let mut model = create_test_model();
        let docs = model.index(Path::new("/home/ana/Documents")).unwrap();

        assert_eq!(
            *model.source().reads.borrow(),
            vec![PathBuf::from("/"), PathBuf::from("/home"), PathBuf::from("/home/ana")]
        );
        // Documents itself is known but not yet listed
        assert!(!model.is_fetched(docs));

        let ana = model.parent(docs).unwrap();
        assert_eq!(model.data(ana).unwrap().path, PathBuf::from("/home/ana"));
    }

    #[test]
    fn test_index_is_stable_and_cached() {
        let mut model = create_test_model();
        let first = model.index(Path::new("/home/ana")).unwrap();
        let reads = model.source().reads.borrow().len();
        let second = model.index(Path::new("/home/ana")).unwrap();
        assert_eq!(first, second);
        assert_eq!(model.source().reads.borrow().len(), reads);
    }

    #[test]
    fn test_root_with_parent_components_resolves_plain_paths() {
        let mut model = create_test_model();
        let root = model.set_root_path(Path::new("/home/ana/Documents/..")).unwrap();
        assert_eq!(model.root_path(), Path::new("/home/ana"));
        assert_eq!(model.data(root).unwrap().path, PathBuf::from("/home/ana"));

        let docs = model.index(Path::new("/home/ana/Documents")).unwrap();
        assert_eq!(model.parent(docs), Some(root));
        assert_eq!(model.index(Path::new("/home/ana/./Documents/..")), Some(root));
    }

    #[test]
    fn test_index_missing_path() {
        let mut model = create_test_model();
        assert!(model.index(Path::new("/home/bob")).is_none());
        assert!(model.index(Path::new("relative/path")).is_none());
    }

    #[test]
    fn test_children_sorted_directories_first() {
        let mut model = create_test_model();
        let ana = model.index(Path::new("/home/ana")).unwrap();
        let children = model.children(ana);
        assert_eq!(names(&model, &children), vec!["Documents", "A.txt", "b.txt"]);
    }

    #[test]
    fn test_hidden_entries_filtered_but_resolvable() {
        let mut model = create_test_model();
        let ana = model.index(Path::new("/home/ana")).unwrap();
        let children = model.children(ana);
        assert!(!names(&model, &children).contains(&".cache".to_string()));

        let cache = model.index(Path::new("/home/ana/.cache")).unwrap();
        assert!(model.is_dir(cache));
    }

    #[test]
    fn test_show_hidden() {
        let mut model = create_test_model().with_hidden(true);
        let ana = model.index(Path::new("/home/ana")).unwrap();
        let children = model.children(ana);
        assert!(names(&model, &children).contains(&".cache".to_string()));
    }

    #[test]
    fn test_unreadable_directory_is_empty() {
        let mut model = create_test_model();
        let docs = model.index(Path::new("/home/ana/Documents")).unwrap();
        assert!(model.children(docs).is_empty());
        assert!(model.is_fetched(docs));
    }

    #[test]
    fn test_file_has_no_children() {
        let mut model = create_test_model();
        let file = model.index(Path::new("/vmlinuz")).unwrap();
        assert!(!model.is_dir(file));
        assert!(model.children(file).is_empty());
        assert_eq!(model.data(file).unwrap().size, Some(10));
    }

    #[test]
    fn test_sort_reorders_fetched_children() {
        let mut model = create_test_model();
        let ana = model.index(Path::new("/home/ana")).unwrap();
        model.sort(SortColumn::Name, SortOrder::Descending);
        let children = model.children(ana);
        assert_eq!(
            names(&model, &children),
            vec!["Documents", "b.txt", "A.txt"]
        );

        model.sort(SortColumn::Size, SortOrder::Ascending);
        let children = model.children(ana);
        assert_eq!(
            names(&model, &children),
            vec!["Documents", "b.txt", "A.txt"]
        );
        assert_eq!(model.sorting(), (SortColumn::Size, SortOrder::Ascending));
    }

    #[test]
    fn test_parent_dir_components() {
        let mut model = create_test_model();
        let home = model.index(Path::new("/home/ana/../")).unwrap();
        assert_eq!(model.data(home).unwrap().path, PathBuf::from("/home"));
    }
}
