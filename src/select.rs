// Session selection - mode-specific sizing and stratification

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::error::EngineError;
use crate::models::{Mode, Question};
use crate::syllabus;

/// Pick the ordered question list for one session out of the filtered pool.
///
/// Study Mode shuffles the pool and takes the first `min(10, |pool|)`.
/// Exam Mode draws each domain's quota without replacement, in increasing
/// domain order, and fails if any domain comes up short. The shuffle is a
/// uniform permutation; a fixed `shuffle_seed` reproduces the selection.
pub fn select(
    pool: Vec<Question>,
    mode: Mode,
    program: u32,
    shuffle_seed: u64,
) -> Result<Vec<Question>, EngineError> {
    let mut rng = StdRng::seed_from_u64(shuffle_seed);

    match mode {
        Mode::Study => {
            let mut pool = pool;
            pool.shuffle(&mut rng);
            pool.truncate(syllabus::STUDY_SESSION_SIZE);

            tracing::info!("selected {} questions for study session", pool.len());
            Ok(pool)
        }
        Mode::Exam => {
            let Some(quotas) = syllabus::exam_quotas(program) else {
                return Err(EngineError::InvalidModeOrProgram { mode, program });
            };
            let expected: usize = quotas.iter().map(|&(_, count)| count).sum();

            let mut selected: Vec<Question> = Vec::with_capacity(expected);
            for &(domain, required) in quotas {
                let mut domain_pool: Vec<Question> = pool
                    .iter()
                    .filter(|q| q.domain == domain)
                    .cloned()
                    .collect();

                if domain_pool.len() < required {
                    tracing::warn!(
                        "insufficient questions for domain {domain} ({}): {} available, {required} required",
                        syllabus::domain_name(domain),
                        domain_pool.len()
                    );
                    return Err(EngineError::InsufficientDomainQuestions {
                        domain,
                        available: domain_pool.len(),
                        required,
                    });
                }

                domain_pool.shuffle(&mut rng);
                domain_pool.truncate(required);
                selected.extend(domain_pool);
            }

            if selected.len() != expected {
                return Err(EngineError::ExamSizeMismatch {
                    actual: selected.len(),
                    expected,
                });
            }

            tracing::info!(
                "selected {} questions for program={program} exam",
                selected.len()
            );
            Ok(selected)
        }
    }
}
