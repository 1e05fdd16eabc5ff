//! # Tauri Commands Module
//!
//! All commands exposed to the webview frontend.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs      ◄─── You are here (exports)
//! ├── list.rs     ◄─── Checklist manipulation
//! ├── share.rs    ◄─── Receipt rendering + share dispatch
//! └── config.rs   ◄─── Configuration retrieval
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                    Tauri Command Flow                               │
//! │                                                                     │
//! │  Frontend                                                           │
//! │  ─────────                                                          │
//! │  const { invoke } = window.__TAURI__.core;                          │
//! │                                                                     │
//! │  const list = await invoke('toggle_item', { id });                  │
//! │         │                                                           │
//! │         │ (IPC via WebView)                                         │
//! │         ▼                                                           │
//! │  Rust Backend                                                       │
//! │  ────────────                                                       │
//! │  #[tauri::command]                                                  │
//! │  fn toggle_item(                                                    │
//! │      list: State<'_, ListState>,  ◄── Injected by Tauri             │
//! │      id: String,                  ◄── From invoke params            │
//! │  ) -> Result<ListResponse, ApiError>                                │
//! │         │                                                           │
//! │         │ (JSON serialization)                                      │
//! │         ▼                                                           │
//! │  Frontend receives: { items, masterChecked, totals, createdAt }     │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## State Injection
//! Each command declares only the state it needs:
//! ```rust,ignore
//! // Only needs the checklist
//! fn add_item(list: State<'_, ListState>)
//!
//! // Needs list, display config, and the share target
//! fn share_list(list: State<'_, ListState>, config: State<'_, ConfigState>,
//!               share: State<'_, ShareState>)
//! ```

pub mod config;
pub mod list;
pub mod share;
