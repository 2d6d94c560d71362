//! Property-based tests for coalescing and splicing
//!
//! Uses proptest to verify properties that should hold for all inputs.

use activity_readme::core::models::{Document, EventKind, Markers};
use activity_readme::core::services::{coalesce, splice};
use proptest::prelude::*;

use crate::common::fixtures::EventBuilder;

fn total_push_size(events: &[activity_readme::core::models::Event]) -> u64 {
    events
        .iter()
        .map(|e| match e.kind {
            EventKind::Push { size } => size,
            _ => 0,
        })
        .sum()
}

proptest! {
    /// A run of pushes to one repository becomes a single event with the summed size
    #[test]
    fn same_repo_pushes_sum(sizes in prop::collection::vec(0u64..50, 1..20)) {
        let events = sizes.iter().map(|&s| EventBuilder::push(s).build()).collect();
        let out = coalesce(events);
        prop_assert_eq!(out.len(), 1);
        prop_assert_eq!(out[0].kind.clone(), EventKind::Push { size: sizes.iter().sum() });
    }

    /// Coalescing keeps every commit and never leaves two mergeable pushes side by side
    #[test]
    fn coalescing_preserves_totals(
        spec in prop::collection::vec((0usize..3, any::<bool>(), 1u64..10), 0..40)
    ) {
        let events: Vec<_> = spec
            .iter()
            .map(|&(repo, is_push, size)| {
                let builder = if is_push { EventBuilder::push(size) } else { EventBuilder::watch() };
                builder.repo(&format!("org/r{repo}")).build()
            })
            .collect();
        let non_push = events.iter().filter(|e| !e.is_push()).count();
        let total = total_push_size(&events);

        let out = coalesce(events);

        prop_assert_eq!(total_push_size(&out), total);
        prop_assert_eq!(out.iter().filter(|e| !e.is_push()).count(), non_push);
        for pair in out.windows(2) {
            prop_assert!(!(pair[0].is_push() && pair[1].is_push() && pair[0].repo == pair[1].repo));
        }
    }

    /// Only overflow past ten lines is collapsed, and text outside the markers survives
    #[test]
    fn splice_collapses_only_overflow(
        n in 0usize..30,
        before in "[a-z ]{0,20}",
        after in "[a-z ]{0,20}",
    ) {
        let text = format!(
            "{before}\n<!--START_SECTION:activity-->\nSTALE\n<!--END_SECTION:activity-->\n{after}"
        );
        let lines: Vec<String> = (0..n).map(|i| format!("entry {i}")).collect();

        let out = splice(&Document::parse(&text), &Markers::default(), &lines).unwrap().render();

        let prefix = format!("{before}\n<!--START_SECTION:activity-->\n");
        let suffix = format!("<!--END_SECTION:activity-->\n{after}");
        prop_assert!(out.starts_with(&prefix));
        prop_assert!(out.ends_with(&suffix));
        prop_assert!(!out.contains("STALE"));
        prop_assert_eq!(out.matches("<details>").count(), usize::from(n > 10));
        prop_assert_eq!(out.matches("</details>").count(), usize::from(n > 10));
    }
}
