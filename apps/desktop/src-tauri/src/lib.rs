//! # Bazaar Desktop Library
//!
//! Core library for the Bazaar List desktop application.
//! This is the main entry point that configures and runs the Tauri app.
//!
//! ## Module Organization
//! ```text
//! bazaar_desktop_lib/
//! ├── lib.rs          ◄─── You are here (Tauri setup & run)
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── list.rs     ◄─── Checklist state management
//! │   ├── config.rs   ◄─── Configuration state
//! │   └── share.rs    ◄─── Share dispatch state
//! ├── commands/
//! │   ├── mod.rs      ◄─── Command exports
//! │   ├── list.rs     ◄─── Checklist manipulation commands
//! │   ├── share.rs    ◄─── Share command
//! │   └── config.rs   ◄─── Configuration retrieval
//! ├── share.rs        ◄─── ShareTarget trait + webview implementation
//! └── error.rs        ◄─── API error type for commands
//! ```

pub mod commands;
pub mod error;
pub mod share;
pub mod state;

use tracing::info;
use tracing_subscriber::EnvFilter;

use share::WebviewShare;
use state::{ConfigState, ListState, ShareState};

/// Runs the Tauri application.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────┐
/// │                       Application Startup                           │
/// │                                                                     │
/// │  1. Initialize Logging ───────────────────────────────────────────► │
/// │     • tracing-subscriber with env filter                            │
/// │     • Default: INFO, can be overridden with RUST_LOG                │
/// │                                                                     │
/// │  2. Initialize State Objects ─────────────────────────────────────► │
/// │     • ListState: checklist seeded with one blank row                │
/// │     • ConfigState: currency label, BAZAAR_* env overrides           │
/// │     • ShareState: webview-backed share target                       │
/// │                                                                     │
/// │  3. Build & Run Tauri App ────────────────────────────────────────► │
/// │     • Register all commands                                         │
/// │     • Manage state                                                  │
/// │     • Launch window                                                 │
/// └─────────────────────────────────────────────────────────────────────┘
/// ```
pub fn run() {
    // Initialize tracing (logging)
    init_tracing();

    info!("Starting Bazaar List Desktop Application");

    // Build and run the Tauri app
    tauri::Builder::default()
        // Setup hook runs before the app starts
        .setup(|app| {
            use tauri::Manager;

            let list_state = ListState::new();
            let config_state = ConfigState::from_env();
            // The webview owns the actual share sheet; this side only emits
            let share_state =
                ShareState::new(Box::new(WebviewShare::new(app.handle().clone())));

            app.manage(list_state);
            app.manage(config_state);
            app.manage(share_state);

            info!("State initialized");
            Ok(())
        })
        // Register all commands
        .invoke_handler(tauri::generate_handler![
            // List commands
            commands::list::get_list,
            commands::list::add_item,
            commands::list::set_item_name,
            commands::list::set_item_price,
            commands::list::toggle_item,
            commands::list::remove_item,
            commands::list::toggle_all,
            // Share command
            commands::share::share_list,
            // Config commands
            commands::config::get_config,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=bazaar=trace` - Show trace for bazaar crates only
/// - Default: INFO level
fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,bazaar=debug"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}
