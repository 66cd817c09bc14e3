//! Identifier derivation for one review cycle.
//!
//! Every identifier a cycle sends to the target is a pure function of
//! (user index, timestamp). Two concurrent cycles therefore never collide,
//! and no cycle ever reuses a previous cycle's identifiers. There is no
//! shared counter and no collision detection.

use std::time::{SystemTime, UNIX_EPOCH};

use crate::service::types::TeamMember;

/// Display name sent with every created pull request.
pub const PULL_REQUEST_NAME: &str = "test_pr";

/// Seed for one cycle's identifiers: which simulated user is running it,
/// and when it started.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExecutionContext {
    pub user_index: usize,
    pub timestamp_ms: u64,
}

impl ExecutionContext {
    pub fn new(user_index: usize, timestamp_ms: u64) -> Self {
        Self {
            user_index,
            timestamp_ms,
        }
    }

    /// Capture the current wall clock for this execution.
    pub fn capture(user_index: usize) -> Self {
        let timestamp_ms = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_millis() as u64;
        Self::new(user_index, timestamp_ms)
    }
}

/// Identifiers for one review cycle, derived from its context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CycleIds {
    pub team_name: String,
    pub members: [TeamMember; 3],
    pub pull_request_id: String,
}

impl CycleIds {
    /// Derive all identifiers for one cycle. Deterministic: the same context
    /// always yields the same identifiers.
    pub fn derive(ctx: &ExecutionContext) -> Self {
        let member = |n: usize| TeamMember {
            user_id: format!("user{}_{}_{}", n, ctx.user_index, ctx.timestamp_ms),
            username: format!("user{}", n),
            is_active: true,
        };

        Self {
            team_name: format!("test_team_{}_{}", ctx.user_index, ctx.timestamp_ms),
            members: [member(1), member(2), member(3)],
            pull_request_id: format!("pr_{}_{}", ctx.user_index, ctx.timestamp_ms),
        }
    }

    /// The pull request author: always the first team member.
    pub fn author(&self) -> &TeamMember {
        &self.members[0]
    }

    /// Whose review queue the cycle reads at the end: always the second
    /// member, independent of who authored or reviewed anything.
    pub fn review_target(&self) -> &TeamMember {
        &self.members[1]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derivation_is_deterministic() {
        let ctx = ExecutionContext::new(7, 1700000000123);
        assert_eq!(CycleIds::derive(&ctx), CycleIds::derive(&ctx));
    }

    #[test]
    fn identifiers_use_fixed_prefixes() {
        let ids = CycleIds::derive(&ExecutionContext::new(3, 42));
        assert_eq!(ids.team_name, "test_team_3_42");
        assert_eq!(ids.pull_request_id, "pr_3_42");
        assert_eq!(ids.members[0].user_id, "user1_3_42");
        assert_eq!(ids.members[1].user_id, "user2_3_42");
        assert_eq!(ids.members[2].user_id, "user3_3_42");
    }

    #[test]
    fn all_members_are_active() {
        let ids = CycleIds::derive(&ExecutionContext::new(0, 0));
        assert!(ids.members.iter().all(|m| m.is_active));
        assert_eq!(ids.members[0].username, "user1");
        assert_eq!(ids.members[1].username, "user2");
        assert_eq!(ids.members[2].username, "user3");
    }

    #[test]
    fn distinct_contexts_never_collide() {
        let contexts = [
            ExecutionContext::new(1, 100),
            ExecutionContext::new(2, 100),
            ExecutionContext::new(1, 101),
            ExecutionContext::new(2, 101),
        ];

        let mut seen = std::collections::HashSet::new();
        for ctx in &contexts {
            let ids = CycleIds::derive(ctx);
            assert!(seen.insert(ids.team_name.clone()));
            assert!(seen.insert(ids.pull_request_id.clone()));
            for member in &ids.members {
                assert!(seen.insert(member.user_id.clone()));
            }
        }
    }

    #[test]
    fn author_and_review_target_roles() {
        let ids = CycleIds::derive(&ExecutionContext::new(5, 9));
        assert_eq!(ids.author().user_id, "user1_5_9");
        assert_eq!(ids.review_target().user_id, "user2_5_9");
    }
}
