use std::io::{self, Write};

use crate::model::ChangeRecord;
use crate::resolve::{Resolution, UnresolvedGroup};

pub const UPDATED_SUMMARY: &str = "File updated with new UUIDs";
pub const CLEAN_SUMMARY: &str = "No duplicate IDs found";

/// One block per reassigned entity.
pub fn write_change<W: Write + ?Sized>(out: &mut W, change: &ChangeRecord) -> io::Result<()> {
    writeln!(out, "Replacing ID for {}", change.entity_name)?;
    writeln!(out, "Old ID: {}", change.old_id)?;
    writeln!(out, "New ID: {}", change.new_id)?;
    writeln!(out, "---")
}

pub fn write_unresolved<W: Write + ?Sized>(out: &mut W, group: &UnresolvedGroup) -> io::Result<()> {
    writeln!(
        out,
        "Unresolved duplicate ID {}: {}",
        group.normalized_id,
        group.names.join(", ")
    )
}

/// Audit trail for a whole pass: every change, then any collisions the
/// policy leaves in place.
pub fn write_audit<W: Write + ?Sized>(out: &mut W, resolution: &Resolution) -> io::Result<()> {
    for change in &resolution.changes {
        write_change(out, change)?;
    }
    for group in &resolution.unresolved {
        write_unresolved(out, group)?;
    }
    Ok(())
}

pub fn write_summary<W: Write + ?Sized>(out: &mut W, changed: bool) -> io::Result<()> {
    writeln!(out, "{}", if changed { UPDATED_SUMMARY } else { CLEAN_SUMMARY })
}
