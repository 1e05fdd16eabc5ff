//! # Bazaar Desktop Application Entry Point
//!
//! This is the main entry point for the Tauri desktop application.
//!
//! ## Application Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                        Bazaar List Desktop                          │
//! │                                                                     │
//! │  ┌───────────────────────────────────────────────────────────────┐  │
//! │  │                      Tauri WebView                            │  │
//! │  │  ┌─────────────────────────────────────────────────────────┐  │  │
//! │  │  │                  Static Frontend (dist/)                │  │  │
//! │  │  │  • Item rows            • Summary labels                │  │  │
//! │  │  │  • Master checkbox      • Share sheet                   │  │  │
//! │  │  └─────────────────────────────────────────────────────────┘  │  │
//! │  │                              │                                │  │
//! │  │                     invoke('command')                         │  │
//! │  │                              │                                │  │
//! │  └──────────────────────────────┼────────────────────────────────┘  │
//! │                                 ▼                                   │
//! │  ┌───────────────────────────────────────────────────────────────┐  │
//! │  │                    Rust Backend (this crate)                  │  │
//! │  │                                                               │  │
//! │  │  main.rs ────► Delegates to lib.rs                            │  │
//! │  │                                                               │  │
//! │  │  lib.rs ─────► Sets up logging, state, commands               │  │
//! │  │                                                               │  │
//! │  │  commands/ ──► get_list, add_item, toggle_all, share_list     │  │
//! │  │                                                               │  │
//! │  │  state/ ─────► ListState, ConfigState, ShareState             │  │
//! │  │                                                               │  │
//! │  └───────────────────────────────────────────────────────────────┘  │
//! │                                                                     │
//! │  No database, no network: the checklist lives and dies with the     │
//! │  process.                                                           │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

// Prevents an additional console window on Windows in release
#![cfg_attr(
    all(not(debug_assertions), target_os = "windows"),
    windows_subsystem = "windows"
)]

fn main() {
    // Run the Tauri application
    // The actual setup is in lib.rs for better testability
    bazaar_desktop_lib::run();
}
