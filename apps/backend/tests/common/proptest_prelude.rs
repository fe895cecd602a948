// Proptest prelude: shared configuration for integration tests.
//
// Env knobs:
// - PROPTEST_CASES: number of cases per property (default 16).
// - PROPTEST_MAX_SHRINK_MS: optional cap for shrinking time in milliseconds.
//
// Generators build legal games by construction; nothing here uses prop_assume!.

use proptest::prelude::ProptestConfig;

fn env_u32(name: &str) -> Option<u32> {
    std::env::var(name).ok().and_then(|s| s.parse::<u32>().ok())
}

pub fn proptest_prelude_config() -> ProptestConfig {
    let base = ProptestConfig::default();
    ProptestConfig {
        // No regression files for integration tests
        failure_persistence: None,
        cases: env_u32("PROPTEST_CASES").unwrap_or(16).max(1),
        max_shrink_time: env_u32("PROPTEST_MAX_SHRINK_MS").unwrap_or(base.max_shrink_time),
        ..base
    }
}
