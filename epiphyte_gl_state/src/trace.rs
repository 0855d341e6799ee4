// Copyright 2026 the Epiphyte Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drift observability for reconciled draws.
//!
//! The reconciler intentionally does not log. Embedders that want to see
//! drift pass a [`DriftSink`] to
//! [`reconcile_with_trace`](crate::reconcile_with_trace) and decide
//! themselves what to do with the rows. [`DriftTable`] is the batteries-
//! included sink: it collects rows and renders the old/pre/post/reset
//! comparison as an aligned text table with symbolic GL names.
//!
//! Sinks are observation only. Nothing a sink does can change what was
//! drawn or what state the host gets back.

use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt;

use crate::reconcile::DriftRow;

/// A callback sink for parameter drift rows.
pub trait DriftSink {
    /// Called once per drifting parameter, in snapshot order.
    fn drift(&mut self, row: &DriftRow);
}

/// Collects drift rows and renders them as an aligned table.
///
/// The `Display` output has one line per row plus a header, columns padded
/// to their widest cell:
///
/// ```text
/// parameter      old    pre        post       reset
/// BLEND          false  true       true       false
/// BLEND_SRC_RGB  ONE    SRC_ALPHA  SRC_ALPHA  ONE
/// ```
///
/// An empty table renders as nothing.
#[derive(Clone, Debug, Default)]
pub struct DriftTable {
    rows: Vec<DriftRow>,
}

impl DriftTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self { rows: Vec::new() }
    }

    /// The collected rows, in the order they were reported.
    #[must_use]
    pub fn rows(&self) -> &[DriftRow] {
        &self.rows
    }

    /// Whether any drift has been reported.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Drops all collected rows.
    pub fn clear(&mut self) {
        self.rows.clear();
    }
}

impl DriftSink for DriftTable {
    fn drift(&mut self, row: &DriftRow) {
        self.rows.push(*row);
    }
}

impl fmt::Display for DriftTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.rows.is_empty() {
            return Ok(());
        }

        const HEADERS: [&str; 5] = ["parameter", "old", "pre", "post", "reset"];

        let rendered: Vec<[String; 5]> = self
            .rows
            .iter()
            .map(|row| {
                [
                    row.parameter.name().to_string(),
                    row.old.to_string(),
                    row.pre.to_string(),
                    row.post.to_string(),
                    row.reset.to_string(),
                ]
            })
            .collect();

        let mut widths = HEADERS.map(str::len);
        for cells in &rendered {
            for (width, cell) in widths.iter_mut().zip(cells.iter()) {
                *width = (*width).max(cell.len());
            }
        }

        let write_line = |f: &mut fmt::Formatter<'_>, cells: [&str; 5]| -> fmt::Result {
            for (column, cell) in cells.iter().enumerate() {
                if column + 1 == cells.len() {
                    // Last column stays unpadded; no trailing spaces.
                    writeln!(f, "{cell}")?;
                } else {
                    write!(f, "{cell:<width$}  ", width = widths[column])?;
                }
            }
            Ok(())
        };

        write_line(f, HEADERS)?;
        for cells in &rendered {
            write_line(
                f,
                [
                    cells[0].as_str(),
                    cells[1].as_str(),
                    cells[2].as_str(),
                    cells[3].as_str(),
                    cells[4].as_str(),
                ],
            )?;
        }
        Ok(())
    }
}
