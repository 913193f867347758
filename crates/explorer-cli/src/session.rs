//! An interactive session over one explorer window.
//!
//! Paths given to commands are resolved against the list view's current
//! root, the way a shell resolves them against the working directory.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use explorer_core::format::{display_name, format_date, format_size};
use explorer_core::{
    normalize_path, ExplorerError, ExplorerEvent, ExplorerWindow, FileSystemModel, ModelIndex,
    StandardLocations,
};
use thiserror::Error;
use tracing::debug;

use crate::command::{Command, HELP_TEXT};

/// Whether the session keeps reading input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Explorer(#[from] ExplorerError),
    #[error(transparent)]
    Io(#[from] io::Error),
}

pub struct Session<M, L> {
    window: ExplorerWindow<M, L>,
}

impl<M, L> Session<M, L>
where
    M: FileSystemModel,
    L: StandardLocations,
{
    pub fn new(window: ExplorerWindow<M, L>) -> Self {
        Self { window }
    }

    pub fn window(&self) -> &ExplorerWindow<M, L> {
        &self.window
    }

    /// Prompt showing the list view's root.
    pub fn prompt(&self) -> String {
        let root = self
            .window
            .list_root_path()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "-".to_string());
        format!("{}> ", root)
    }

    /// Make `path` absolute relative to the list view's root and fold away
    /// `.` and `..` components.
    pub fn resolve(&self, path: &Path) -> PathBuf {
        let joined = if path.is_absolute() {
            path.to_path_buf()
        } else {
            match self.window.list_root_path() {
                Some(base) => base.join(path),
                None => path.to_path_buf(),
            }
        };
        normalize_path(&joined)
    }

    fn index_for(&mut self, path: &Path) -> Result<ModelIndex, SessionError> {
        let resolved = self.resolve(path);
        self.window
            .index_of(&resolved)
            .ok_or(SessionError::Explorer(ExplorerError::PathNotFound(resolved)))
    }

    /// Run one command, writing its output to `out`.
    pub fn execute<W: Write>(
        &mut self,
        command: Command,
        out: &mut W,
    ) -> Result<Flow, SessionError> {
        debug!(?command, "executing");
        match command {
            Command::Tree(path) => {
                let index = self.index_for(&path)?;
                self.window.dispatch(ExplorerEvent::TreeActivated(index))?;
                self.render_list(out)?;
            }
            Command::Click(path) => {
                let index = self.index_for(&path)?;
                self.window.dispatch(ExplorerEvent::ListClicked(index))?;
                self.render_status(out)?;
            }
            Command::Open(path) => {
                let index = self.index_for(&path)?;
                self.window.dispatch(ExplorerEvent::ListDoubleClicked(index))?;
                self.render_list(out)?;
            }
            Command::Go(location) => {
                self.window.dispatch(ExplorerEvent::ShortcutTriggered(location))?;
                self.render_list(out)?;
            }
            Command::Sort(column) => {
                self.window.dispatch(ExplorerEvent::SortRequested(column))?;
                self.render_list(out)?;
            }
            Command::Size(value) => {
                self.window.dispatch(ExplorerEvent::IconSizeChanged(value))?;
                writeln!(out, "slider: {}", self.window.size_slider().value())?;
            }
            Command::Ls => self.render_list(out)?,
            Command::Status => self.render_status(out)?,
            Command::Help => writeln!(out, "{}", HELP_TEXT)?,
            Command::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }

    /// Print the list view: its root, then one line per entry.
    pub fn render_list<W: Write>(&mut self, out: &mut W) -> io::Result<()> {
        let root = self
            .window
            .list_root_path()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "-".to_string());
        writeln!(out, "[{}]", root)?;

        let entries = self.window.list_entries();
        if entries.is_empty() {
            writeln!(out, "  (empty)")?;
        }
        for entry in entries {
            writeln!(
                out,
                "  {} {} {}",
                format_size(entry.size, true),
                format_date(entry.modified, true),
                display_name(&entry.name, entry.is_dir)
            )?;
        }
        Ok(())
    }

    /// Print roots, tree selection, sort indicator and slider state.
    pub fn render_status<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let path = |index: Option<ModelIndex>| {
            index
                .and_then(|i| self.window.path_of(i))
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "-".to_string())
        };

        let tree = self.window.tree_view();
        let selection: Vec<String> = tree
            .selected_indexes()
            .iter()
            .map(|i| path(Some(*i)))
            .collect();
        let (column, order) = tree.sort_indicator();
        let slider = self.window.size_slider();
        let (min, max) = slider.range();

        writeln!(out, "tree root: {}", path(tree.root_index()))?;
        writeln!(out, "list root: {}", path(self.window.list_view().root_index()))?;
        writeln!(out, "selection: {}", selection.join(", "))?;
        writeln!(out, "sort:      {} {:?}", column.label(), order)?;
        writeln!(out, "slider:    {} ({}..={})", slider.value(), min, max)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use explorer_core::{
        EmbeddedBundle, ExplorerConfig, FsModel, LocalSource, Location, RecordedLocations,
    };
    use std::fs;

    struct Fixture {
        dir: tempfile::TempDir,
        session: Session<FsModel<LocalSource>, RecordedLocations>,
    }

    fn create_fixture() -> Fixture {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("Documents/reports")).unwrap();
        fs::write(dir.path().join("Documents/todo.txt"), b"milk").unwrap();
        fs::write(dir.path().join("readme.md"), b"# hi").unwrap();

        let locations = RecordedLocations::new()
            .with(Location::Documents, vec![dir.path().join("Documents")]);
        let config = ExplorerConfig {
            root_path: Some(dir.path().to_path_buf()),
            ..Default::default()
        };
        let window =
            ExplorerWindow::new(&config, &EmbeddedBundle, FsModel::new(LocalSource), locations)
                .unwrap();
        Fixture {
            dir,
            session: Session::new(window),
        }
    }

    fn run(session: &mut Session<FsModel<LocalSource>, RecordedLocations>, line: &str) -> String {
        let mut out = Vec::new();
        let command: Command = line.parse().unwrap();
        session.execute(command, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_ls_lists_root() {
        let mut fx = create_fixture();
        let out = run(&mut fx.session, "ls");
        assert!(out.starts_with(&format!("[{}]", fx.dir.path().display())));
        assert!(out.contains("Documents/"));
        assert!(out.contains("readme.md"));
    }

    #[test]
    fn test_open_relative_directory() {
        let mut fx = create_fixture();
        let out = run(&mut fx.session, "open Documents");
        assert!(out.contains("reports/"));
        assert!(out.contains("todo.txt"));
        assert_eq!(
            fx.session.window().list_root_path(),
            Some(fx.dir.path().join("Documents"))
        );

        run(&mut fx.session, "open ..");
        assert_eq!(
            fx.session.window().list_root_path(),
            Some(fx.dir.path().to_path_buf())
        );
    }

    #[test]
    fn test_tree_on_file_shows_parent() {
        let mut fx = create_fixture();
        let file = fx.dir.path().join("Documents/todo.txt");
        run(&mut fx.session, &format!("tree {}", file.display()));
        assert_eq!(
            fx.session.window().list_root_path(),
            Some(fx.dir.path().join("Documents"))
        );
    }

    #[test]
    fn test_open_file_shows_empty_list() {
        let mut fx = create_fixture();
        let out = run(&mut fx.session, "open readme.md");
        assert!(out.contains("(empty)"));
    }

    #[test]
    fn test_click_reports_selection() {
        let mut fx = create_fixture();
        let out = run(&mut fx.session, "click readme.md");
        assert!(out.contains(&format!(
            "selection: {}",
            fx.dir.path().join("readme.md").display()
        )));
    }

    #[test]
    fn test_go_documents() {
        let mut fx = create_fixture();
        run(&mut fx.session, "go documents");
        let documents = fx.dir.path().join("Documents");
        let tree_root = fx.session.window().tree_view().root_index();
        assert_eq!(
            tree_root.and_then(|i| fx.session.window().path_of(i)),
            Some(documents.clone())
        );
        assert_eq!(fx.session.window().list_root_path(), Some(documents));
    }

    #[test]
    fn test_go_unresolved_location_errors() {
        let mut fx = create_fixture();
        let mut out = Vec::new();
        let err = fx
            .session
            .execute(Command::Go(Location::Music), &mut out)
            .unwrap_err();
        assert!(matches!(
            err,
            SessionError::Explorer(ExplorerError::NoStandardLocation(Location::Music))
        ));
    }

    #[test]
    fn test_missing_path_errors() {
        let mut fx = create_fixture();
        let mut out = Vec::new();
        let err = fx
            .session
            .execute(Command::Open(PathBuf::from("nope")), &mut out)
            .unwrap_err();
        assert!(matches!(
            err,
            SessionError::Explorer(ExplorerError::PathNotFound(_))
        ));
    }

    #[test]
    fn test_size_and_quit() {
        let mut fx = create_fixture();
        assert_eq!(run(&mut fx.session, "size 5000"), "slider: 256\n");

        let mut out = Vec::new();
        assert_eq!(
            fx.session.execute(Command::Quit, &mut out).unwrap(),
            Flow::Quit
        );
    }

    #[test]
    fn test_root_with_parent_components_still_navigates() {
        let mut fx = create_fixture();
        let documents = fx.dir.path().join("Documents");
        let locations =
            RecordedLocations::new().with(Location::Documents, vec![documents.clone()]);
        let config = ExplorerConfig {
            root_path: Some(documents.join("..")),
            ..Default::default()
        };
        let window =
            ExplorerWindow::new(&config, &EmbeddedBundle, FsModel::new(LocalSource), locations)
                .unwrap();
        fx.session = Session::new(window);
        assert_eq!(
            fx.session.window().list_root_path(),
            Some(fx.dir.path().to_path_buf())
        );

        let out = run(&mut fx.session, "open Documents");
        assert!(out.contains("todo.txt"));
        assert_eq!(fx.session.window().list_root_path(), Some(documents.clone()));

        run(&mut fx.session, "open ..");
        run(&mut fx.session, "go documents");
        assert_eq!(fx.session.window().list_root_path(), Some(documents));
    }

    #[test]
    fn test_resolve_folds_components() {
        let fx = create_fixture();
        assert_eq!(
            fx.session.resolve(Path::new("Documents/./reports/..")),
            fx.dir.path().join("Documents")
        );
        assert_eq!(fx.session.resolve(Path::new("/etc")), PathBuf::from("/etc"));
    }
}
