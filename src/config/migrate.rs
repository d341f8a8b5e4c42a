//! Deliberate changes to the pay-period anchor.
//!
//! Moving the anchor changes which dates every past and future period
//! covers, so it is never implicit: the version is bumped, the config file
//! is rewritten and the change is written to the audit log. Records keep
//! the `anchor_version` they were built with.

use crate::config::Config;
use crate::db::log::audit;
use crate::errors::AppResult;
use crate::models::period::PeriodAnchor;
use crate::ui::messages::{info, success};
use chrono::NaiveDate;
use rusqlite::Connection;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnchorMigration {
    pub old: PeriodAnchor,
    pub new: PeriodAnchor,
}

impl AnchorMigration {
    pub fn changed(&self) -> bool {
        self.old != self.new
    }
}

/// Compute the anchor that replaces `current`. Same date → no change.
pub fn next_anchor(current: &PeriodAnchor, date: NaiveDate) -> PeriodAnchor {
    if current.date == date {
        *current
    } else {
        PeriodAnchor {
            version: current.version + 1,
            date,
        }
    }
}

/// Move `cfg` to a new anchor date, save it to `path` and audit the change.
pub fn migrate_anchor(
    cfg: &mut Config,
    date: NaiveDate,
    path: &Path,
    conn: &Connection,
) -> AppResult<AnchorMigration> {
    let old = cfg.anchor;
    let new = next_anchor(&old, date);
    let migration = AnchorMigration { old, new };

    if !migration.changed() {
        info(format!(
            "Anchor already set to {} (version {}).",
            migration.old.date, migration.old.version
        ));
        return Ok(migration);
    }

    cfg.anchor = migration.new;
    cfg.save_to(path)?;

    audit(
        conn,
        "anchor_migrated",
        &format!("v{}", migration.new.version),
        &format!(
            "anchor {} (v{}) → {} (v{})",
            migration.old.date, migration.old.version, migration.new.date, migration.new.version
        ),
    );

    success(format!(
        "Anchor moved to {} (version {}).",
        migration.new.date, migration.new.version
    ));
    Ok(migration)
}
