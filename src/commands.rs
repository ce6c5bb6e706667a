//! Named outline commands and the dispatcher that runs them against a host.
//!
//! Running a command is always the same round trip: read the snapshot from the
//! host, compute the replacement, commit it once, then restore the selection. A
//! rejected operation commits nothing and turns into a single notification.

use crate::cursor::Selection;
use crate::edit_plan::Edit;
use crate::engine::HeadingEngine;
use crate::error::{EngineError, HostError};
use crate::formats::Format;
use crate::host::Host;
use chrono::NaiveDate;
use serde::Serialize;
use std::fmt;
use tracing::{info, warn};

/// Identifies an operation that can be bound to a trigger.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CommandId {
    /// Push the selected headings one level deeper.
    IncreaseHeading,
    /// Pull the selected headings one level up.
    DecreaseHeading,
    /// Add a scratchpad to the cursor's section.
    CreateScratchpad,
    /// Close the cursor's section with an end marker.
    CreateEol,
    /// List the section's direct sub-headings at the cursor.
    ListHeadings,
    /// Insert today's date heading at the cursor.
    InsertDate,
}

/// Key combination suggested for a command.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Hotkey {
    /// Modifier keys held down.
    pub modifiers: &'static [&'static str],
    /// Key pressed with the modifiers.
    pub key: &'static str,
}

/// What a host needs to expose a command.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CommandSpec {
    /// Stable identifier.
    pub id: &'static str,
    /// Human-readable name.
    pub name: &'static str,
    /// Optional default binding.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hotkey: Option<Hotkey>,
}

impl CommandId {
    /// Every command, in registration order.
    pub const ALL: [Self; 6] = [
        Self::IncreaseHeading,
        Self::DecreaseHeading,
        Self::CreateScratchpad,
        Self::CreateEol,
        Self::ListHeadings,
        Self::InsertDate,
    ];

    #[must_use]
    /// Stable identifier used on the command line and by hosts.
    pub fn id(self) -> &'static str {
        match self {
            Self::IncreaseHeading => "increase-heading",
            Self::DecreaseHeading => "decrease-heading",
            Self::CreateScratchpad => "create-scratchpad",
            Self::CreateEol => "create-eol",
            Self::ListHeadings => "list-headings",
            Self::InsertDate => "insert-date",
        }
    }

    #[must_use]
    /// Name shown in command palettes.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::IncreaseHeading => "Increase Heading Number",
            Self::DecreaseHeading => "Decrease Heading Number",
            Self::CreateScratchpad => "Create Scratchpad",
            Self::CreateEol => "Create EOL",
            Self::ListHeadings => "List Sub-headings",
            Self::InsertDate => "Insert Date Section",
        }
    }

    #[must_use]
    /// Default binding, if the command has one.
    pub fn hotkey(self) -> Option<Hotkey> {
        match self {
            Self::IncreaseHeading => Some(Hotkey {
                modifiers: &["Shift"],
                key: "+",
            }),
            Self::DecreaseHeading => Some(Hotkey {
                modifiers: &["Shift"],
                key: "-",
            }),
            _ => None,
        }
    }

    #[must_use]
    /// Looks a command up by its identifier.
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|command| command.id() == id)
    }

    #[must_use]
    /// Registration record for this command.
    pub fn spec(self) -> CommandSpec {
        CommandSpec {
            id: self.id(),
            name: self.display_name(),
            hotkey: self.hotkey(),
        }
    }
}

impl fmt::Display for CommandId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[must_use]
/// Registration records for every command.
pub fn registry() -> Vec<CommandSpec> {
    CommandId::ALL.into_iter().map(CommandId::spec).collect()
}

/// Registers every command with `host`.
pub fn register_all<H: Host + ?Sized>(host: &mut H) {
    for spec in registry() {
        host.register_command(&spec);
    }
}

/// Runs `command` against the host's current document.
///
/// Returns the selection left behind on success, or `None` when the engine
/// rejected the operation (the host has been notified and nothing was committed).
/// Creating a scratchpad also closes its parent section with an end marker as a
/// second round trip, anchored on the parent heading rather than the cursor.
///
/// # Errors
///
/// Returns an error if the host cannot supply the document or persist the
/// replacement; no notification is raised in that case.
pub fn run<F: Format, H: Host + ?Sized>(
    host: &mut H,
    engine: &HeadingEngine<F>,
    command: CommandId,
    today: NaiveDate,
) -> Result<Option<Selection>, HostError> {
    let lines = host.document_lines()?;
    let selection = host.selection()?;
    let cursor = selection.from;

    let outcome = match command {
        CommandId::IncreaseHeading => engine.increase_heading(&lines, selection),
        CommandId::DecreaseHeading => engine.decrease_heading(&lines, selection),
        CommandId::CreateScratchpad => engine.create_scratchpad(&lines, cursor, today),
        CommandId::CreateEol => engine.create_eol(&lines, cursor),
        CommandId::ListHeadings => engine.list_headings(&lines, cursor),
        CommandId::InsertDate => engine.insert_date_section(&lines, cursor, today),
    };
    let Some(selection) = settle(host, command, outcome)? else {
        return Ok(None);
    };

    if command == CommandId::CreateScratchpad {
        // The scratchpad lands below the parent heading, so its line still holds.
        let parent = engine.enclosing_heading(&lines, cursor);
        let lines = host.document_lines()?;
        return settle(host, CommandId::CreateEol, engine.close_section(&lines, &parent));
    }
    Ok(Some(selection))
}

/// Commits a successful outcome or notifies the rejection.
fn settle<H: Host + ?Sized>(
    host: &mut H,
    command: CommandId,
    outcome: Result<Edit, EngineError>,
) -> Result<Option<Selection>, HostError> {
    match outcome {
        Ok(edit) => {
            host.commit(&edit.lines)?;
            host.set_selection(edit.selection);
            info!(%command, lines = edit.lines.len(), "committed");
            Ok(Some(edit.selection))
        }
        Err(error) => {
            warn!(%command, %error, "rejected");
            host.notify(&error.to_string());
            Ok(None)
        }
    }
}

#[cfg(test)]
#[path = "tests/commands.rs"]
mod tests;
