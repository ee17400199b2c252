//! # CLI Behavior
//!
//! The terminal client for adboard. For the overall architecture, see the
//! crate-level documentation of the `adboard` library.
//!
//! ## Naked Execution (`adboard`)
//!
//! Running `adboard` with no arguments is `adboard list`: the header, then
//! every ad newest first, or an invitation to add one when the board is empty.
//!
//! ## Publishing (`adboard add`)
//!
//! The add-ad form runs as prompts. Fields given as flags are not asked
//! again unless validation fails, in which case every field is asked with
//! its current value as the default. The payment step offers pay, back or
//! cancel; `--yes` pays straight away. With all of `--title`,
//! `--description`, `--phone` and `--yes` the command never reads stdin and
//! a validation failure exits with an error.
//!
//! ## Deleting (`adboard delete`)
//!
//! Selectors are display indexes as printed by `list` (filtering never
//! renumbers) or ad ids. Each ad is shown and confirmed separately unless
//! `--yes` is given.
//!
//! ## Module Structure
//!
//! - `commands`: Per-command handlers that call the API and print results
//! - `prompt`: stdin prompts
//! - `render`: Card layout and colored messages
//! - `setup`: Argument parsing via clap

mod commands;
mod prompt;
mod render;
pub mod setup;

pub use commands::run;
