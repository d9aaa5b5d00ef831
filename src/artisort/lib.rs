//! # Artisort Architecture
//!
//! Artisort decides whether to lock (keep) or leave unlocked (discard) a game
//! artifact. Players write their own rules in a spreadsheet; without rules a
//! built-in heuristic decides.
//!
//! ## The Pipeline
//!
//! ```text
//! ┌──────────────┐   ┌──────────────┐   ┌─────────────┐   ┌──────────────┐
//! │ SheetSource  │──▶│  translate   │──▶│   RuleSet   │──▶│   classify   │──▶ Decision
//! │ (source/)    │   │ + grammar    │   │  (rules)    │   │ (+heuristic) │
//! └──────────────┘   └──────────────┘   └─────────────┘   └──────────────┘
//!                                                                ▲
//!                                                  Item (model) ─┘
//! ```
//!
//! 1. A [`source::SheetSource`] yields the workbook's sheets; one is selected.
//! 2. [`translate`] checks the header and turns each row into a
//!    [`rules::Rule`], using the cell grammar in [`grammar`]. Any bad cell
//!    aborts the load with a [`error::RuleError`] naming the row and column.
//! 3. [`classify`] evaluates an [`model::Item`] against the rules, first
//!    match wins, or runs the heuristic when there are no rules.
//!
//! [`api::Judge`] wraps steps 1 to 3 for embedding; the `artisort` binary is
//! a thin CLI over it and the [`commands`] layer.
//!
//! ## No Guessing
//!
//! Rule text is never corrected or reinterpreted. A typo fails the load, and a
//! failed load never falls back to the heuristic. An artifact that no user
//! rule matches is [`rules::Outcome::Undetermined`], which callers must treat
//! as "do nothing".
//!
//! ## Module Overview
//!
//! - [`vocab`]: categories and attributes with their sheet labels
//! - [`model`]: the artifact record
//! - [`grammar`]: cell-level parsing
//! - [`translate`]: header, row and sheet translation
//! - [`rules`]: conditions, rules and rule sets
//! - [`classify`]: first-match evaluation and the heuristic
//! - [`source`]: workbook readers
//! - [`api`]: the `Judge` facade
//! - [`commands`]: business logic behind each CLI command
//! - [`config`]: configuration file
//! - [`error`]: error types

pub mod api;
pub mod classify;
pub mod commands;
pub mod config;
pub mod error;
pub mod grammar;
pub mod model;
pub mod rules;
pub mod source;
pub mod translate;
pub mod vocab;
