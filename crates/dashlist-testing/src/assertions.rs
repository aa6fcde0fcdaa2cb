//! Assertions over the JSON form of a rendered list page.
//!
//! They read `content.screen` from `--format json` output and fail with a
//! message naming what was found instead.

use anyhow::{Context, Result, bail};
use predicates::prelude::*;
use serde_json::Value;

use crate::world::CliResult;

fn screen(json: &Value) -> Result<&Value> {
    let screen = &json["content"]["screen"];
    if !screen.is_object() {
        bail!("Expected 'content.screen' object in JSON");
    }
    Ok(screen)
}

fn rows(json: &Value) -> Result<&Vec<Value>> {
    screen(json)?["table"]["rows"]
        .as_array()
        .context("Expected 'content.screen.table.rows' array in JSON")
}

/// Assert the table has exactly `expected` rows of any kind.
pub fn assert_row_count(json: &Value, expected: usize) -> Result<()> {
    let rows = rows(json)?;
    if rows.len() != expected {
        bail!("Expected {} rows, got {}", expected, rows.len());
    }
    Ok(())
}

/// Assert every row is of `kind` (`skeleton`, `empty` or `entity`).
pub fn assert_row_kinds(json: &Value, kind: &str) -> Result<()> {
    for (i, row) in rows(json)?.iter().enumerate() {
        if row["kind"] != kind {
            bail!("Row {} is {} but expected {}", i, row["kind"], kind);
        }
    }
    Ok(())
}

/// Assert the entity rows carry exactly these ids, in order.
pub fn assert_entity_ids(json: &Value, expected: &[&str]) -> Result<()> {
    let ids: Vec<&str> = rows(json)?
        .iter()
        .filter(|row| row["kind"] == "entity")
        .filter_map(|row| row["id"].as_str())
        .collect();

    if ids != expected {
        bail!("Expected entity ids {:?}, got {:?}", expected, ids);
    }
    Ok(())
}

pub fn assert_create_enabled(json: &Value, expected: bool) -> Result<()> {
    let enabled = screen(json)?["create"]["enabled"]
        .as_bool()
        .context("Expected 'create.enabled' flag")?;

    if enabled != expected {
        bail!("Expected create enabled = {}, got {}", expected, enabled);
    }
    Ok(())
}

pub fn assert_limit_alert(json: &Value, expected: bool) -> Result<()> {
    let shown = !screen(json)?["limit_alert"].is_null();
    if shown != expected {
        bail!("Expected limit alert shown = {}, got {}", expected, shown);
    }
    Ok(())
}

/// Assert how many entity rows offer the delete control.
pub fn assert_delete_controls(json: &Value, expected: usize) -> Result<()> {
    let count = rows(json)?
        .iter()
        .filter(|row| {
            row["cells"].as_array().is_some_and(|cells| {
                cells.iter().any(|cell| {
                    cell["type"] == "actions"
                        && cell["actions"]
                            .as_array()
                            .is_some_and(|actions| actions.iter().any(|a| a["control"] == "remove"))
                })
            })
        })
        .count();

    if count != expected {
        bail!("Expected {} rows with a delete control, got {}", expected, count);
    }
    Ok(())
}

/// Assert the dispatched event produced exactly these intents, in order.
pub fn assert_intents(json: &Value, expected: &[&str]) -> Result<()> {
    let intents: Vec<&str> = json["content"]["dispatch"]["intents"]
        .as_array()
        .context("Expected 'content.dispatch.intents' array in JSON")?
        .iter()
        .filter_map(|intent| intent["intent"].as_str())
        .collect();

    if intents != expected {
        bail!("Expected intents {:?}, got {:?}", expected, intents);
    }
    Ok(())
}

/// Assert plain output contains `text`.
pub fn assert_stdout_contains(result: &CliResult, text: &str) -> Result<()> {
    if !predicate::str::contains(text).eval(result.stdout()) {
        bail!("Expected stdout to contain {:?}, got:\n{}", text, result.stdout());
    }
    Ok(())
}
