//! copier - clipboard relay daemon
//!
//! Listens on a Unix socket or TCP port, reads one payload per connection
//! and writes it into the system clipboard. Lets remote or sandboxed
//! processes delegate "copy to clipboard" to a local process.
//!
//! # Architecture
//!
//! The crate follows hexagonal (ports & adapters) architecture:
//!
//! - **Domain**: Endpoint and session value objects, configuration, errors
//! - **Application**: Accept loop, per-connection relay, port interfaces (traits)
//! - **Infrastructure**: Adapter implementations (sockets, arboard, wl-copy, config file)
//! - **CLI**: Command-line interface, argument parsing, and signal handling

pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;
