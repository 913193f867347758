//! Root application module.
//!
//! Contains the main App component, the AppContext definition, and the
//! startup sequence that loads the filesystem snapshot and builds the window.

use explorer_core::{
    EmbeddedBundle, ExplorerConfig, ExplorerEvent, ExplorerWindow, FsModel, Manifest,
    RecordedLocations, SnapshotSource,
};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::components::explorer::Explorer;
use crate::config::{CONFIG_URL, MANIFEST_URL};
use crate::utils::dom::{log_debug, log_error, log_warn};
use crate::utils::{FetchError, fetch_json, fetch_text};

/// The explorer window over a loaded snapshot.
pub type WebExplorer = ExplorerWindow<FsModel<SnapshotSource>, RecordedLocations>;

// ============================================================================
// LoadState
// ============================================================================

/// Progress of the startup sequence.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoadState {
    Loading,
    Ready,
    Failed(String),
}

// ============================================================================
// AppContext
// ============================================================================

/// Application-wide context.
///
/// The window itself lives in a non-reactive [`StoredValue`]. Every mutation
/// goes through [`AppContext::dispatch`], which bumps `revision`; views read
/// through [`AppContext::read`], which tracks it.
///
/// This struct is `Copy` because all fields are arena handles.
#[derive(Clone, Copy)]
pub struct AppContext {
    explorer: StoredValue<Option<WebExplorer>, LocalStorage>,
    /// Bumped after every change to the window
    pub revision: RwSignal<u64>,
    pub load_state: RwSignal<LoadState>,
    /// Message from the last failed event, cleared by the next success
    pub status: RwSignal<Option<String>>,
}

impl AppContext {
    pub fn new() -> Self {
        Self {
            explorer: StoredValue::new_local(None),
            revision: RwSignal::new(0),
            load_state: RwSignal::new(LoadState::Loading),
            status: RwSignal::new(None),
        }
    }

    /// Take ownership of a fully built window.
    pub fn install(&self, window: WebExplorer) {
        self.explorer.set_value(Some(window));
        self.load_state.set(LoadState::Ready);
        self.revision.update(|r| *r += 1);
    }

    /// Hand an event to the window and re-render.
    pub fn dispatch(&self, event: ExplorerEvent) {
        let result = self
            .explorer
            .try_update_value(|w| w.as_mut().map(|w| w.dispatch(event)))
            .flatten();

        match result {
            Some(Ok(())) => self.status.set(None),
            Some(Err(err)) => {
                log_warn(&format!("{:?} failed: {}", event, err));
                self.status.set(Some(err.to_string()));
            }
            None => log_warn(&format!("{:?} dropped: window not ready", event)),
        }
        self.revision.update(|r| *r += 1);
    }

    /// Query the window, subscribing the caller to future changes.
    ///
    /// Takes `&mut` because the model fetches directory listings lazily.
    pub fn read<T>(&self, f: impl FnOnce(&mut WebExplorer) -> T) -> Option<T> {
        self.revision.track();
        self.explorer
            .try_update_value(|w| w.as_mut().map(f))
            .flatten()
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Startup
// ============================================================================

/// Window configuration; defaults when the page ships none.
async fn load_config() -> Result<ExplorerConfig, String> {
    match fetch_text(CONFIG_URL).await {
        Ok(text) => ExplorerConfig::from_toml_str(&text).map_err(|e| e.to_string()),
        Err(e) if e.is_not_found() => Ok(ExplorerConfig::default()),
        Err(e) => Err(e.to_string()),
    }
}

/// Build the window over a manifest, rooted where the snapshot was taken.
fn build_window(mut config: ExplorerConfig, manifest: &Manifest) -> Result<WebExplorer, String> {
    if config.root_path.is_none() {
        config.root_path = Some(manifest.root.clone());
    }
    let model = FsModel::new(SnapshotSource::new(manifest)).with_hidden(config.show_hidden);
    ExplorerWindow::new(&config, &EmbeddedBundle, model, manifest.recorded_locations())
        .map_err(|e| e.to_string())
}

/// Load the configuration and the snapshot, then install the window.
fn start(ctx: AppContext) {
    spawn_local(async move {
        let config = match load_config().await {
            Ok(config) => config,
            Err(e) => {
                log_error(&format!("config: {}", e));
                ctx.load_state.set(LoadState::Failed(e));
                return;
            }
        };

        let manifest = match fetch_json::<Manifest>(MANIFEST_URL).await {
            Ok(manifest) => manifest,
            Err(e) => {
                let message = match e {
                    FetchError::HttpError(404) => format!(
                        "{} not found; create it with `explorer-cli snapshot -o {}`",
                        MANIFEST_URL, MANIFEST_URL
                    ),
                    other => other.to_string(),
                };
                log_error(&message);
                ctx.load_state.set(LoadState::Failed(message));
                return;
            }
        };
        log_debug(&format!(
            "loaded {} entries under {}",
            manifest.entries.len(),
            manifest.root.display()
        ));

        match build_window(config, &manifest) {
            Ok(window) => {
                log_debug(&format!(
                    "snapshot indexes {} directories",
                    window.model().source().directory_count()
                ));
                ctx.install(window);
            }
            Err(e) => {
                log_error(&format!("window setup failed: {}", e));
                ctx.load_state.set(LoadState::Failed(e));
            }
        }
    });
}

/// Root application component.
///
/// Creates and provides the AppContext, starts loading, and renders the
/// explorer window once it is ready.
#[component]
pub fn App() -> impl IntoView {
    let ctx = AppContext::new();
    provide_context(ctx);
    start(ctx);

    view! {
        {move || match ctx.load_state.get() {
            LoadState::Loading => view! {
                <div class="explorer-window explorer-splash">"Loading filesystem snapshot..."</div>
            }.into_any(),
            LoadState::Failed(message) => view! {
                <div class="explorer-window explorer-splash">
                    <h1>"Explorer could not start"</h1>
                    <p>{message}</p>
                    <button on:click=move |_| {
                        if let Some(window) = web_sys::window() {
                            let _ = window.location().reload();
                        }
                    }>"Reload Page"</button>
                </div>
            }.into_any(),
            LoadState::Ready => view! { <Explorer /> }.into_any(),
        }}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use explorer_core::{Location, ManifestEntry};
    use std::path::{Path, PathBuf};

    fn create_test_manifest() -> Manifest {
        let entry = |path: &str, is_dir: bool| ManifestEntry {
            path: PathBuf::from(path),
            is_dir,
            size: (!is_dir).then_some(12),
            modified: None,
        };
        Manifest {
            root: PathBuf::from("/"),
            entries: vec![
                entry("/home", true),
                entry("/home/ana", true),
                entry("/home/ana/Music", true),
                entry("/home/ana/song.mp3", false),
            ],
            locations: RecordedLocations::new()
                .with(Location::Home, vec![PathBuf::from("/home/ana")]),
        }
    }

    #[test]
    fn test_build_window_roots_at_snapshot_root() {
        let window = build_window(ExplorerConfig::default(), &create_test_manifest()).unwrap();
        assert_eq!(window.list_root_path(), Some(PathBuf::from("/")));
    }

    #[test]
    fn test_build_window_keeps_configured_root() {
        let config = ExplorerConfig {
            root_path: Some(PathBuf::from("/home")),
            ..Default::default()
        };
        let window = build_window(config, &create_test_manifest()).unwrap();
        assert_eq!(window.list_root_path(), Some(PathBuf::from("/home")));
    }

    #[test]
    fn test_dispatch_reports_and_clears_status() {
        Owner::new().with(|| {
            let ctx = AppContext::new();
            ctx.dispatch(ExplorerEvent::ShortcutTriggered(Location::Home));
            assert_eq!(ctx.status.get_untracked(), None);

            let window = build_window(ExplorerConfig::default(), &create_test_manifest()).unwrap();
            ctx.install(window);
            assert_eq!(ctx.load_state.get_untracked(), LoadState::Ready);

            let before = ctx.revision.get_untracked();
            ctx.dispatch(ExplorerEvent::ShortcutTriggered(Location::Music));
            let status = ctx.status.get_untracked().unwrap();
            assert!(status.contains("music"), "{status}");
            assert!(ctx.revision.get_untracked() > before);

            ctx.dispatch(ExplorerEvent::ShortcutTriggered(Location::Home));
            assert_eq!(ctx.status.get_untracked(), None);
            assert_eq!(
                ctx.read(|w| w.list_root_path()).flatten(),
                Some(PathBuf::from("/home/ana"))
            );
        });
    }

    #[test]
    fn test_snapshot_window_shortcut() {
        let mut window = build_window(ExplorerConfig::default(), &create_test_manifest()).unwrap();
        window
            .dispatch(ExplorerEvent::ShortcutTriggered(Location::Home))
            .unwrap();
        let names: Vec<_> = window.list_entries().into_iter().map(|e| e.name).collect();
        assert_eq!(names, vec!["Music", "song.mp3"]);

        let ana = window.index_of(Path::new("/home/ana")).unwrap();
        assert_eq!(window.tree_view().root_index(), Some(ana));
    }
}
