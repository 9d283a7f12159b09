// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Run-record grouping by test identity.
//!
//! No filtering happens here: every observed record is retained under
//! its `test_id`, including tests seen only once. Records keep arrival
//! order within a group; groups keep first-seen order.

use std::collections::HashMap;

use crate::record::RunRecord;

/// All observed runs for one test, in arrival order.
#[derive(Debug, Clone)]
pub struct TestRuns {
    pub test_id: String,
    pub runs: Vec<RunRecord>,
}

/// Partition a flat record list by `test_id`.
pub fn group_by_test(records: Vec<RunRecord>) -> Vec<TestRuns> {
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut groups: Vec<TestRuns> = Vec::new();

    for record in records {
        if let Some(&slot) = index.get(&record.test_id) {
            groups[slot].runs.push(record);
        } else {
            index.insert(record.test_id.clone(), groups.len());
            groups.push(TestRuns {
                test_id: record.test_id.clone(),
                runs: vec![record],
            });
        }
    }

    groups
}

#[cfg(test)]
#[path = "group_tests.rs"]
mod tests;
