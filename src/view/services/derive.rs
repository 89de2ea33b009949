//! Filter-then-sort derivation over tasks.

use crate::reference::domain::Task;
use crate::view::domain::{FilterOptions, SortKey, TaskFilter, priority_rank, status_rank};
use std::cmp::Reverse;
use std::collections::HashSet;

/// Keeps the tasks satisfying every filter, ordered by `sort`.
///
/// Pure and total: the same inputs always give the same order, an empty
/// input gives an empty output and a filter value absent from the data
/// gives an empty output. Equal keys keep their input order.
#[must_use]
pub fn derive<'a>(items: &'a [Task], filters: &[TaskFilter], sort: SortKey) -> Vec<&'a Task> {
    let mut kept: Vec<&Task> = items
        .iter()
        .filter(|task| filters.iter().all(|filter| filter.matches(task)))
        .collect();
    sort_tasks(&mut kept, sort);
    kept
}

/// Stable in-place ordering of task references by `sort`.
pub fn sort_tasks(tasks: &mut [&Task], sort: SortKey) {
    match sort {
        SortKey::DueDate => tasks.sort_by_key(|task| {
            let when = task.due_date().or_else(|| task.created_at());
            (when.is_none(), when)
        }),
        SortKey::Priority => tasks.sort_by_key(|task| Reverse(priority_rank(task.priority()))),
        SortKey::Status => tasks.sort_by_key(|task| Reverse(status_rank(task.status()))),
        SortKey::Unsorted => {}
    }
}

/// Collects the distinct owners and tag values of `tasks` for filter
/// controls, in first-seen order. Owners without an id are skipped.
#[must_use]
pub fn filter_options(tasks: &[Task]) -> FilterOptions {
    let mut seen_owners = HashSet::new();
    let mut seen_tags = HashSet::new();
    let mut options = FilterOptions::default();
    for task in tasks {
        for owner in task.owners() {
            if owner.is_resolved() && seen_owners.insert(owner.id()) {
                options.owners.push(owner.clone());
            }
        }
        for tag in task.tags() {
            if seen_tags.insert(tag.value()) {
                options.tags.push(tag.value().to_owned());
            }
        }
    }
    options
}
