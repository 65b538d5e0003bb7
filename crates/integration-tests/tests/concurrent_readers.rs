//! Concurrent Reader Tests
//!
//! Many readers hit the provider at once and must all see one value

use bmake_shim_core::{
    process_version, BuildVersionProvider, FixedVersionProvider, VersionIdentifier,
    VersionProvider,
};
use std::sync::{Arc, Barrier};
use tokio::task::JoinSet;

const READERS: usize = 128;

/// OS threads released together by a barrier, racing the first
/// initialization of the process-wide value
#[test]
fn test_threads_observe_same_process_version() {
    let barrier = Arc::new(Barrier::new(READERS));

    let handles: Vec<_> = (0..READERS)
        .map(|_| {
            let barrier = barrier.clone();
            std::thread::spawn(move || {
                barrier.wait();
                let version = process_version();
                (version as *const VersionIdentifier as usize, version.clone())
            })
        })
        .collect();

    let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(results.len(), READERS);

    let (first_addr, first_version) = &results[0];
    for (addr, version) in &results {
        assert_eq!(addr, first_addr, "process version initialized more than once");
        assert_eq!(version, first_version);
    }
    assert!(!first_version.is_empty());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 8)]
async fn test_tasks_observe_same_build_version() {
    let provider: Arc<dyn VersionProvider> = Arc::new(BuildVersionProvider);

    let mut set = JoinSet::new();
    for _ in 0..READERS {
        let provider = provider.clone();
        set.spawn(async move { provider.version() });
    }

    let mut seen = Vec::with_capacity(READERS);
    while let Some(result) = set.join_next().await {
        seen.push(result.unwrap());
    }

    assert_eq!(seen.len(), READERS);
    assert!(seen.iter().all(|v| v == process_version()));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 8)]
async fn test_tasks_observe_same_fixed_version() {
    let provider: Arc<dyn VersionProvider> = Arc::new(FixedVersionProvider::new("1.2.3"));

    let mut set = JoinSet::new();
    for _ in 0..READERS {
        let provider = provider.clone();
        set.spawn(async move { provider.version() });
    }

    while let Some(result) = set.join_next().await {
        assert_eq!(result.unwrap().as_str(), "1.2.3");
    }
}
