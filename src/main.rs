//! Pokedex TUI - browse, search and favorite PokeAPI creatures

use std::cell::RefCell;
use std::io;
use std::rc::Rc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::{info, warn};
use tui_dispatch::{
    EffectContext, EffectStoreLike, EffectStoreWithMiddleware, EventBus, Keybindings, TaskKey,
};
use tui_dispatch_debug::debug::DebugLayer;
use tui_dispatch_debug::{
    DebugCliArgs, DebugRunOutput, DebugSession, DebugSessionError, ReplayItem,
};

use pokedex::action::Action;
use pokedex::api::{self, CatalogClient, CatalogSource};
use pokedex::config::{Config, ConfigArgs};
use pokedex::effect::Effect;
use pokedex::logging;
use pokedex::persist::{change_notice, FavoritesStore, FileKvStore};
use pokedex::reducer::reducer;
use pokedex::state::AppState;
use pokedex::ui::{self, DexComponentId, DexContext, PokedexUi};

const TICK_MS: u64 = 120;

#[derive(Parser, Debug)]
#[command(name = "pokedex")]
#[command(about = "Browse, search and favorite creatures from PokeAPI")]
struct Args {
    #[command(flatten)]
    config: ConfigArgs,

    #[command(flatten)]
    debug: DebugCliArgs,
}

#[tokio::main]
async fn main() -> io::Result<()> {
    let args = Args::parse();
    let config = Config::from_args(&args.config);
    if let Err(err) = logging::init(&config.log_file, "info") {
        eprintln!(
            "warning: logging disabled, cannot open {}: {err}",
            config.log_file.display()
        );
    }
    info!(
        api_base = %config.api_base,
        data_dir = %config.data_dir.display(),
        "starting pokedex"
    );

    let debug = DebugSession::new(args.debug);
    debug.save_state_schema::<AppState>().map_err(debug_error)?;
    debug.save_actions_schema::<Action>().map_err(debug_error)?;

    let state = debug
        .load_state_or_else_async(|| async { Ok::<AppState, io::Error>(AppState::default()) })
        .await
        .map_err(debug_error)?;
    let replay_actions = debug.load_replay_items().map_err(debug_error)?;
    let (middleware, recorder) = debug.middleware_with_recorder();
    let store = EffectStoreWithMiddleware::new(state, reducer, middleware);

    let handler = EffectHandler::new(&config);

    let use_alt_screen = debug.use_alt_screen();
    let mut stdout = io::stdout();
    if use_alt_screen {
        enable_raw_mode()?;
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &debug, store, replay_actions, handler).await;

    if use_alt_screen {
        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;
    }

    let run_output = result?;
    run_output.write_render_output()?;
    debug.save_actions(recorder.as_ref()).map_err(debug_error)?;
    info!("pokedex exited");
    Ok(())
}

fn debug_error(error: DebugSessionError) -> io::Error {
    io::Error::other(format!("debug session error: {error}"))
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    debug: &DebugSession,
    store: impl EffectStoreLike<AppState, Action, Effect>,
    replay_actions: Vec<ReplayItem<Action>>,
    handler: EffectHandler,
) -> io::Result<DebugRunOutput<AppState>> {
    let ui = Rc::new(RefCell::new(PokedexUi::new()));
    let mut bus: EventBus<AppState, Action, DexComponentId, DexContext> = EventBus::new();
    let keybindings: Keybindings<DexContext> = Keybindings::new();

    let ui_list = Rc::clone(&ui);
    bus.register(DexComponentId::List, move |event, state| {
        ui_list.borrow_mut().handle_list_event(&event.kind, state)
    });

    let ui_search = Rc::clone(&ui);
    bus.register(DexComponentId::Search, move |event, state| {
        ui_search
            .borrow_mut()
            .handle_search_event(&event.kind, state)
    });

    let ui_detail = Rc::clone(&ui);
    bus.register(DexComponentId::Detail, move |event, state| {
        ui_detail
            .borrow_mut()
            .handle_detail_event(&event.kind, state)
    });

    let ui_favorites = Rc::clone(&ui);
    bus.register(DexComponentId::Favorites, move |event, state| {
        ui_favorites
            .borrow_mut()
            .handle_favorites_event(&event.kind, state)
    });

    bus.register_global(|event, state| ui::handle_global_event(&event.kind, state));

    debug
        .run_effect_app_with_bus(
            terminal,
            store,
            DebugLayer::simple(),
            replay_actions,
            Some(Action::Init),
            Some(Action::Quit),
            |runtime| {
                if debug.render_once() {
                    return;
                }
                runtime.subscriptions().interval(
                    "tick",
                    Duration::from_millis(TICK_MS),
                    || Action::Tick,
                );
            },
            &mut bus,
            &keybindings,
            |frame, area, state, render_ctx, event_ctx| {
                ui.borrow_mut()
                    .render(frame, area, state, render_ctx, event_ctx);
            },
            |action| matches!(action, Action::Quit),
            move |effect, ctx| handler.handle(effect, ctx),
        )
        .await
}

/// Runs effects as tasks against the shared catalog client and favorites store.
struct EffectHandler {
    catalog: Arc<CatalogClient>,
    favorites: Arc<FavoritesStore<FileKvStore>>,
    mutations: AtomicU64,
}

impl EffectHandler {
    fn new(config: &Config) -> Self {
        Self {
            catalog: Arc::new(CatalogClient::new(config.api_base.clone())),
            favorites: Arc::new(FavoritesStore::new(FileKvStore::new(config.store_dir()))),
            mutations: AtomicU64::new(0),
        }
    }

    /// Favorites writes get their own key so none of them is superseded.
    fn mutation_key(&self) -> TaskKey {
        let seq = self.mutations.fetch_add(1, Ordering::Relaxed);
        TaskKey::new(format!("favorites_{seq}"))
    }

    fn handle(&self, effect: Effect, ctx: &mut EffectContext<Action>) {
        match effect {
            Effect::FetchPage { offset, limit } => {
                let catalog = Arc::clone(&self.catalog);
                ctx.tasks().spawn(TaskKey::new("page"), async move {
                    match catalog.fetch_page(offset, limit).await {
                        Ok(entries) => Action::PageDidLoad { offset, entries },
                        Err(error) => Action::PageDidError { offset, error },
                    }
                });
            }
            Effect::Search { query, generation } => {
                let catalog = Arc::clone(&self.catalog);
                ctx.tasks().spawn(TaskKey::new("search"), async move {
                    match api::search(catalog.as_ref(), &query).await {
                        Ok(matches) => Action::SearchDidLoad {
                            generation,
                            matches,
                        },
                        Err(error) => Action::SearchDidError { generation, error },
                    }
                });
            }
            Effect::FetchDetail { id } => {
                let catalog = Arc::clone(&self.catalog);
                let key = format!("detail_{id}");
                ctx.tasks().spawn(TaskKey::new(key), async move {
                    match catalog.fetch_detail(&id.to_string()).await {
                        Ok(detail) => Action::DetailDidLoad(detail),
                        Err(error) => Action::DetailDidError { id, error },
                    }
                });
            }
            Effect::LoadFavorites => {
                let favorites = Arc::clone(&self.favorites);
                ctx.tasks().spawn(TaskKey::new("favorites_load"), async move {
                    let set = favorites.load().await;
                    Action::FavoritesDidLoad(set.entries().to_vec())
                });
            }
            Effect::ToggleFavorite { entry } => {
                let favorites = Arc::clone(&self.favorites);
                ctx.tasks().spawn(self.mutation_key(), async move {
                    match favorites.toggle(&entry).await {
                        Ok(set) => Action::FavoritesDidChange {
                            notice: change_notice(&entry, &set),
                            entries: set.entries().to_vec(),
                        },
                        Err(error) => {
                            warn!(id = entry.id, error = %error, "favorite toggle failed");
                            Action::FavoritesDidError
                        }
                    }
                });
            }
            Effect::RemoveFavorite { entry } => {
                let favorites = Arc::clone(&self.favorites);
                ctx.tasks().spawn(self.mutation_key(), async move {
                    match favorites.remove(&entry).await {
                        Ok(set) => Action::FavoritesDidChange {
                            notice: change_notice(&entry, &set),
                            entries: set.entries().to_vec(),
                        },
                        Err(error) => {
                            warn!(id = entry.id, error = %error, "favorite removal failed");
                            Action::FavoritesDidError
                        }
                    }
                });
            }
        }
    }
}
