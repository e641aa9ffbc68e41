//! Property tests for change identity transitions.

use change_id::{ActorId, ChangeId, ChangeIdRecord, INITIAL_CHANGE_ID};
use proptest::prelude::*;

fn arb_actor() -> impl Strategy<Value = String> {
    "[0-9a-f]{1,24}"
}

prop_compose! {
    fn arb_change_id()(
        // Upper bounds stay below the saturation cap covered by unit tests
        client_seq in 0..u32::MAX,
        lamport in 0..u64::MAX,
        actor in arb_actor(),
        server_seq in proptest::option::of(any::<u64>()),
    ) -> ChangeId {
        ChangeId::of(client_seq, lamport, actor, server_seq).unwrap()
    }
}

proptest! {
    #[test]
    fn next_advances_and_clears_server_seq(c in arb_change_id()) {
        let next = c.next();
        prop_assert_eq!(next.lamport(), c.lamport() + 1);
        prop_assert_eq!(next.client_seq(), c.client_seq() + 1);
        prop_assert_eq!(next.actor(), c.actor());
        prop_assert_eq!(next.server_seq(), None);
    }

    #[test]
    fn sync_lamport_follows_receive_rule(c in arb_change_id(), remote in 0..u64::MAX) {
        let synced = c.sync_lamport(remote);
        if remote > c.lamport() {
            prop_assert_eq!(synced.lamport(), remote);
        } else {
            prop_assert_eq!(synced.lamport(), c.lamport() + 1);
        }
        prop_assert!(synced.lamport() >= remote);
        prop_assert_eq!(synced.client_seq(), c.client_seq());
        prop_assert_eq!(synced.actor(), c.actor());
        prop_assert_eq!(synced.server_seq(), None);
    }

    #[test]
    fn set_actor_preserves_everything_else(c in arb_change_id(), actor in arb_actor()) {
        let rebound = c.set_actor(ActorId::new(actor.as_str()).unwrap());
        prop_assert_eq!(rebound.client_seq(), c.client_seq());
        prop_assert_eq!(rebound.lamport(), c.lamport());
        prop_assert_eq!(rebound.server_seq(), c.server_seq());
        prop_assert_eq!(rebound.actor().as_str(), actor.as_str());
    }

    #[test]
    fn time_ticket_is_deterministic(c in arb_change_id(), delimiter in any::<u32>()) {
        let t1 = c.create_time_ticket(delimiter);
        let t2 = c.create_time_ticket(delimiter);
        prop_assert_eq!(t1.lamport(), c.lamport());
        prop_assert_eq!(t1.delimiter(), delimiter);
        prop_assert_eq!(t1.actor(), c.actor());
        prop_assert_eq!(t1, t2);
    }

    #[test]
    fn ordering_is_total(a in arb_change_id(), b in arb_change_id()) {
        let forward = a.cmp(&b);
        prop_assert_eq!(forward.reverse(), b.cmp(&a));
        prop_assert_eq!(forward == std::cmp::Ordering::Equal, a == b);
    }

    #[test]
    fn wire_record_preserves_value(c in arb_change_id()) {
        let record = ChangeIdRecord::from(&c);
        prop_assert_eq!(ChangeId::try_from(record).unwrap(), c);
    }

    #[test]
    fn transitions_leave_receiver_untouched(c in arb_change_id(), remote in any::<u64>()) {
        let before = c.clone();
        let _ = c.next();
        let _ = c.sync_lamport(remote);
        let _ = c.set_actor(ActorId::initial());
        prop_assert_eq!(c, before);
    }
}

#[test]
fn initial_change_id_is_stable() {
    let first = INITIAL_CHANGE_ID.clone();
    let _ = first.next();
    assert_eq!(*INITIAL_CHANGE_ID, ChangeId::initial());
    assert_eq!(INITIAL_CHANGE_ID.lamport(), 0);
}
