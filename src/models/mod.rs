//! Domain models for gtfo-lookup.
//!
//! # Core Concepts
//!
//! - [`Category`]: A fixed abuse technique class (`shell`, `sudo`, `file-read`, ...),
//!   mapping a short selector code to its canonical document label.
//! - [`Selector`]: What a lookup asks for, either one category or all of them.
//! - [`CapabilityEntry`]: One documented technique, with its description and command template.
//! - [`ParsedDocument`]: Every entry extracted from one binary's document, in document order.
//! - [`LookupResult`]: The filtered entries handed to the front end for display.

mod category;
mod entry;

pub use category::*;
pub use entry::*;
