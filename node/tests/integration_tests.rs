//! Integration tests exercising the full ledger pipeline:
//! cast → seal → tally → prune → snapshot persistence → restore.
//!
//! These tests wire together components that are normally only connected
//! inside the composition root, verifying the system works end-to-end —
//! not just in isolation.

use std::path::Path;

use urna_node::{LedgerService, NodeConfig};
use urna_types::ElectionId;
use urna_work::Difficulty;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn test_config(data_dir: &Path) -> NodeConfig {
    NodeConfig {
        data_dir: data_dir.to_path_buf(),
        difficulty: Difficulty::new(2),
        ..Default::default()
    }
}

fn temp_service() -> (tempfile::TempDir, LedgerService) {
    let dir = tempfile::tempdir().expect("temp dir");
    let service = LedgerService::open(&test_config(dir.path()));
    (dir, service)
}

// ---------------------------------------------------------------------------
// 1. Cast / seal / tally
// ---------------------------------------------------------------------------

#[test]
fn cast_seal_tally_scenario() {
    let (_dir, service) = temp_service();

    service.add_vote(ElectionId::new(1), "A");
    service.add_vote(ElectionId::new(1), "B");
    service.seal_pending_votes();

    let export = service.export();
    assert_eq!(export.chain.len(), 2, "genesis plus one sealed block");
    assert_eq!(export.chain[1].votes.len(), 2);
    assert!(export.pending_votes.is_empty());
    assert!(export.is_valid);

    let counts = service.vote_count(ElectionId::new(1));
    assert_eq!(counts.get("A"), Some(&1));
    assert_eq!(counts.get("B"), Some(&1));
}

#[test]
fn unknown_election_tallies_empty() {
    let (_dir, service) = temp_service();
    service.add_vote(ElectionId::new(1), "A");
    service.seal_pending_votes();

    assert!(service.vote_count(ElectionId::new(999)).is_empty());
    assert!(service.votes_for_election(ElectionId::new(999)).is_empty());
}

#[test]
fn sealing_with_nothing_pending_adds_no_block() {
    let (_dir, service) = temp_service();
    service.seal_pending_votes();
    assert_eq!(service.export().chain.len(), 1);
}

// ---------------------------------------------------------------------------
// 2. Snapshot persistence round-trip
// ---------------------------------------------------------------------------

#[test]
fn restart_restores_identical_chain() {
    let dir = tempfile::tempdir().expect("temp dir");
    let config = test_config(dir.path());

    let before = {
        let service = LedgerService::open(&config);
        service.add_vote(ElectionId::new(7), "A");
        service.add_vote(ElectionId::new(7), "A");
        service.add_vote(ElectionId::new(7), "B");
        service.seal_pending_votes();
        service.export()
    };

    // Fresh instance against the same data dir must restore verbatim.
    let service = LedgerService::open(&config);
    let after = service.export();

    assert_eq!(after.chain.len(), before.chain.len());
    for (restored, original) in after.chain.iter().zip(before.chain.iter()) {
        assert_eq!(restored.hash, original.hash);
        assert_eq!(restored.index, original.index);
        assert_eq!(restored.previous_hash, original.previous_hash);
    }
    assert!(after.pending_votes.is_empty());
    assert!(service.is_chain_valid());

    let counts = service.vote_count(ElectionId::new(7));
    assert_eq!(counts.get("A"), Some(&2));
    assert_eq!(counts.get("B"), Some(&1));
}

#[test]
fn corrupt_snapshot_falls_back_to_fresh_genesis() {
    let dir = tempfile::tempdir().expect("temp dir");
    let config = test_config(dir.path());

    std::fs::create_dir_all(&config.data_dir).unwrap();
    std::fs::write(config.snapshot_path(), "{ definitely not a snapshot").unwrap();

    let service = LedgerService::open(&config);
    assert_eq!(service.export().chain.len(), 1);
    assert!(service.is_chain_valid());
}

#[test]
fn snapshot_file_round_trips_reference_field_names() {
    let dir = tempfile::tempdir().expect("temp dir");
    let config = test_config(dir.path());

    let service = LedgerService::open(&config);
    service.add_vote(ElectionId::new(1), "A");
    service.seal_pending_votes();

    let raw = std::fs::read_to_string(config.snapshot_path()).unwrap();
    let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert!(json.get("chain").is_some());
    assert!(json.get("pending_votes").is_some());
    let block = &json["chain"][1];
    for key in ["index", "timestamp", "votes", "previous_hash", "nonce", "hash"] {
        assert!(block.get(key).is_some(), "missing block field {key}");
    }
    let vote = &block["votes"][0];
    for key in ["election_id", "option", "timestamp", "vote_id"] {
        assert!(vote.get(key).is_some(), "missing vote field {key}");
    }
}

// ---------------------------------------------------------------------------
// 3. Pruning
// ---------------------------------------------------------------------------

#[test]
fn prune_removes_one_election_and_persists_the_rebuilt_chain() {
    let dir = tempfile::tempdir().expect("temp dir");
    let config = test_config(dir.path());

    {
        let service = LedgerService::open(&config);
        service.add_vote(ElectionId::new(1), "A");
        service.seal_pending_votes();
        service.add_vote(ElectionId::new(2), "B");
        service.seal_pending_votes();

        service.remove_votes_for_election(ElectionId::new(1));

        let export = service.export();
        assert_eq!(export.chain.len(), 2);
        assert_eq!(export.chain[1].index, 1);
        assert_eq!(export.chain[1].previous_hash, export.chain[0].hash);
        assert_eq!(export.chain[1].votes[0].option, "B");
        assert!(service.votes_for_election(ElectionId::new(1)).is_empty());
        assert!(export.is_valid);
    }

    // The rebuilt chain is what survives a restart.
    let service = LedgerService::open(&config);
    assert_eq!(service.export().chain.len(), 2);
    assert!(service.votes_for_election(ElectionId::new(1)).is_empty());
    assert_eq!(
        service.vote_count(ElectionId::new(2)).get("B"),
        Some(&1)
    );
    assert!(service.is_chain_valid());
}
