//! ccienv - Manage CircleCI project environment variables.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── config        # config init/show
//! │   ├── env           # ls, add, import, rm
//! │   ├── project       # project show
//! │   ├── prompt        # dialoguer-backed Prompt
//! │   ├── output        # Terminal output helpers
//! │   └── completions   # Shell completions
//! └── core/             # Core library components
//!     ├── config        # ~/.config/ccienv/config.toml
//!     ├── domain/       # Variable, ProjectSlug, Format, Listing
//!     ├── parse         # json / dotenv input
//!     ├── reconcile     # Pure partition logic
//!     ├── remote/       # RemoteStore trait + CircleCI client
//!     ├── prompt        # Prompt trait
//!     ├── validation    # Name checks
//!     └── manager       # Operations composed from the above
//! ```
//!
//! The reconciliation functions in [`core::reconcile`] and the parser in
//! [`core::parse`] do no I/O. [`core::manager::Manager`] wires them to a
//! [`core::remote::RemoteStore`] and a [`core::prompt::Prompt`].

pub mod cli;
pub mod core;
pub mod error;
