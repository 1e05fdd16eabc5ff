//! # State Module
//!
//! Manages application state for the Tauri desktop app.
//!
//! Each state type is registered with Tauri separately so commands declare
//! exactly what they need:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                               │
//! │                                                                     │
//! │  ┌───────────────────────────────────────────────────────────────┐ │
//! │  │                      Tauri Runtime                            │ │
//! │  │  app.manage(list_state);                                      │ │
//! │  │  app.manage(config_state);                                    │ │
//! │  │  app.manage(share_state);                                     │ │
//! │  └───────────────────────────────────────────────────────────────┘ │
//! │                              │                                      │
//! │          ┌───────────────────┼───────────────────┐                  │
//! │          ▼                   ▼                   ▼                  │
//! │  ┌──────────────┐   ┌──────────────┐   ┌──────────────────┐        │
//! │  │  ListState   │   │ ConfigState  │   │   ShareState     │        │
//! │  │              │   │              │   │                  │        │
//! │  │  Arc<Mutex<  │   │  currency    │   │  Box<dyn         │        │
//! │  │   Checklist  │   │  label,      │   │   ShareTarget>   │        │
//! │  │  >>          │   │  decimals    │   │                  │        │
//! │  └──────────────┘   └──────────────┘   └──────────────────┘        │
//! │                                                                     │
//! │  THREAD SAFETY:                                                    │
//! │  • ListState: protected by Arc<Mutex<T>> for exclusive access      │
//! │  • ConfigState: read-only after initialization                     │
//! │  • ShareState: stateless dispatch through a Sync trait object      │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

mod config;
mod list;
mod share;

pub use config::ConfigState;
pub use list::ListState;
pub use share::ShareState;
