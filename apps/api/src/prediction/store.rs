//! Feature store — the per-user feature history integration point.
//!
//! No persistence layer exists yet. The default backend fabricates a
//! bounded random record per lookup; a database-backed implementation slots
//! in behind the same trait and may return `AppError::NotFound`.

use async_trait::async_trait;
use rand::Rng;

use crate::errors::AppError;
use crate::models::features::FeatureRecord;

/// Per-user feature lookup, carried in `AppState` as `Arc<dyn FeatureStore>`.
#[async_trait]
pub trait FeatureStore: Send + Sync {
    async fn get(&self, user_id: &str) -> Result<FeatureRecord, AppError>;
}

/// Stand-in store: every lookup fabricates a plausible record.
pub struct FabricatedFeatureStore;

#[async_trait]
impl FeatureStore for FabricatedFeatureStore {
    async fn get(&self, _user_id: &str) -> Result<FeatureRecord, AppError> {
        let mut rng = rand::thread_rng();
        Ok(fabricate(&mut rng))
    }
}

fn fabricate<R: Rng>(rng: &mut R) -> FeatureRecord {
    FeatureRecord {
        cgpa: rng.gen_range(7.0..=9.0),
        internships: rng.gen_range(1..=3),
        projects: rng.gen_range(2..=5),
        skills_count: rng.gen_range(3..=8),
        certifications: rng.gen_range(0..=3),
        // No resume text backs a fabricated record.
        has_python: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_fabricated_records_stay_in_bounds() {
        for seed in 0..200 {
            let mut rng = StdRng::seed_from_u64(seed);
            let record = fabricate(&mut rng);
            assert!((7.0..=9.0).contains(&record.cgpa));
            assert!((1..=3).contains(&record.internships));
            assert!((2..=5).contains(&record.projects));
            assert!((3..=8).contains(&record.skills_count));
            assert!(record.certifications <= 3);
            assert!(!record.has_python);
        }
    }

    #[tokio::test]
    async fn test_store_lookup_always_succeeds() {
        let store = FabricatedFeatureStore;
        let record = store.get("user-123").await.unwrap();
        assert!(record.cgpa >= 7.0);
    }
}
