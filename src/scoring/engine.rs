//! The per-job scoring pass: matching, bucketing, tag bonus, rule
//! adjustment, and hybrid escalation to the scoring oracle

use crate::config::{Config, UnmappedBucketPolicy};
use crate::extraction::job::JobRequirement;
use crate::extraction::profile::CandidateProfile;
use crate::oracle::client::{ChatOracle, ChatReply, ToolSpec};
use crate::oracle::parser;
use crate::scoring::bucket::{self, BucketName};
use crate::scoring::rules::{self, RuleBreakdown};
use crate::scoring::tags;
use crate::scoring::taxonomy::{self, Category, MatchedLevel};
use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use serde_json::json;

/// A candidate's position in the escalation state machine. Terminal
/// states are `RuleScored` and `OracleScored`; `OracleFailed` falls
/// back to the rule-based score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EscalationState {
    RuleScored,
    OraclePending,
    OracleScored(u32),
    OracleFailed,
}

/// One candidate's full scoring result for one job requirement
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredCandidate {
    pub profile: CandidateProfile,
    pub matched_industry: MatchedLevel,
    pub matched_function: MatchedLevel,
    pub bucket: Option<BucketName>,
    /// Baseline taken from the bucket range's upper bound
    pub bucket_score: u32,
    pub tag_bonus: u32,
    pub rule_breakdown: RuleBreakdown,
    pub rule_based_score: u32,
    pub oracle_score: Option<u32>,
    pub final_score: u32,
}

/// Scoring engine for one run. All knobs come from the explicit
/// config object; the oracle is optional so a run can be fully local.
pub struct ScoringEngine<'a, O: ChatOracle> {
    config: &'a Config,
    oracle: Option<&'a O>,
}

impl<'a, O: ChatOracle> ScoringEngine<'a, O> {
    pub fn new(config: &'a Config, oracle: Option<&'a O>) -> Self {
        Self { config, oracle }
    }

    /// Score the full candidate set against one job requirement.
    /// Individual candidate failures are isolated; the pass always
    /// returns whatever could be scored.
    pub async fn score_all(
        &self,
        job: &JobRequirement,
        candidates: &[CandidateProfile],
    ) -> Vec<ScoredCandidate> {
        info!(
            "Scoring {} candidates for {} / {}",
            candidates.len(),
            job.company,
            job.position
        );

        let bar = ProgressBar::new(candidates.len() as u64);
        bar.set_style(
            ProgressStyle::with_template("{bar:40.cyan/blue} {pos}/{len} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar()),
        );

        let mut scored = Vec::new();
        for (index, candidate) in candidates.iter().enumerate() {
            bar.set_message(candidate.name.clone());
            if let Some(result) = self.score_candidate(index, candidate, job).await {
                scored.push(result);
            }
            bar.inc(1);
        }
        bar.finish_and_clear();

        if scored.is_empty() {
            info!(
                "Zero candidates scored for {} / {}",
                job.company, job.position
            );
        }
        scored
    }

    /// Run one candidate through the full pipeline. Returns `None`
    /// only for candidates excluded under the unmapped-bucket policy.
    async fn score_candidate(
        &self,
        index: usize,
        candidate: &CandidateProfile,
        job: &JobRequirement,
    ) -> Option<ScoredCandidate> {
        debug!("Scoring candidate: {}", candidate.name);

        let matched_industry =
            taxonomy::match_level(&job.industry, &candidate.industry, Category::Industry);
        let matched_function =
            taxonomy::match_level(&job.function, &candidate.function, Category::Function);

        let Some(resolved) = bucket::resolve(matched_function, matched_industry) else {
            return match self.config.scoring.unmapped_bucket_policy {
                UnmappedBucketPolicy::Exclude => {
                    debug!(
                        "Excluding {}: no bucket for ({}, {})",
                        candidate.name, matched_function, matched_industry
                    );
                    None
                }
                UnmappedBucketPolicy::ScoreZero => Some(ScoredCandidate {
                    profile: candidate.clone(),
                    matched_industry,
                    matched_function,
                    bucket: None,
                    bucket_score: 0,
                    tag_bonus: 0,
                    rule_breakdown: RuleBreakdown::default(),
                    rule_based_score: 0,
                    oracle_score: None,
                    final_score: 0,
                }),
            };
        };

        // Ceiling-first: start from the bucket's upper bound
        let bucket_score = resolved.range.max;

        // Tag bonus only refines a full-depth categorical match
        let tag_bonus = if matched_industry.is_full_depth() && matched_function.is_full_depth() {
            let cap = self.config.scoring.tag_bonus_cap;
            tags::tag_bonus(&candidate.industry.tag_set(), &job.industry.tag_set(), cap)
                + tags::tag_bonus(&candidate.function.tag_set(), &job.function.tag_set(), cap)
        } else {
            0
        };

        let base = bucket_score + tag_bonus;
        let bucket_name = if base > self.config.scoring.perfect_match_floor {
            BucketName::PerfectMatch
        } else {
            resolved.name
        };

        let (rule_based_score, rule_breakdown) =
            rules::adjust_score(base, candidate, job, &self.config.rules);

        let mut state = if self.should_escalate(rule_based_score, index) {
            EscalationState::OraclePending
        } else {
            EscalationState::RuleScored
        };

        if state == EscalationState::OraclePending {
            state = self.escalate(candidate, job, rule_based_score).await;
        }

        let (oracle_score, final_score) = match state {
            EscalationState::OracleScored(score) => (Some(score), score),
            _ => (None, rule_based_score),
        };

        Some(ScoredCandidate {
            profile: candidate.clone(),
            matched_industry,
            matched_function,
            bucket: Some(bucket_name),
            bucket_score,
            tag_bonus,
            rule_breakdown,
            rule_based_score,
            oracle_score,
            final_score,
        })
    }

    /// Escalate when the rule score crosses the confidence threshold
    /// or while inside the deep-score quota. Oracle calls cost network
    /// time proportional to resume length, so this gate stays tight.
    fn should_escalate(&self, rule_score: u32, index: usize) -> bool {
        if self.oracle.is_none() {
            return false;
        }
        rule_score >= self.config.scoring.escalation_threshold
            || index < self.config.scoring.deep_score_quota
    }

    /// One oracle round trip. Never propagates an error: any transport
    /// failure or unparseable reply becomes `OracleFailed` and the
    /// caller falls back to the rule-based score.
    async fn escalate(
        &self,
        candidate: &CandidateProfile,
        job: &JobRequirement,
        max_score: u32,
    ) -> EscalationState {
        let Some(oracle) = self.oracle else {
            return EscalationState::OracleFailed;
        };

        let prompt = build_scoring_prompt(job);
        let tool = score_tool(max_score);

        let reply = match oracle
            .complete(&prompt, &candidate.profile_subject(), Some(&tool))
            .await
        {
            Ok(reply) => reply,
            Err(e) => {
                warn!("Oracle call failed for {}: {}", candidate.name, e);
                return EscalationState::OracleFailed;
            }
        };

        match recover_score(&reply) {
            Some(score) => EscalationState::OracleScored(score.min(100)),
            None => {
                warn!("No numeric score recovered for {}", candidate.name);
                EscalationState::OracleFailed
            }
        }
    }
}

impl CandidateProfile {
    /// The text the oracle judges: the full extracted document
    fn profile_subject(&self) -> String {
        self.resume_text.clone()
    }
}

/// Structured tool reply first, then the free-text fallback cascade
fn recover_score(reply: &ChatReply) -> Option<u32> {
    if let Some(score) = reply.tool_u32("score") {
        return Some(score);
    }
    reply.content.as_deref().and_then(parser::extract_score)
}

fn score_tool(max_score: u32) -> ToolSpec {
    ToolSpec {
        name: "score_candidate".to_string(),
        description: "Score the candidate based on the provided algorithm".to_string(),
        parameters: json!({
            "type": "object",
            "properties": {
                "score": {
                    "type": "number",
                    "description": format!("Number between 0 and {}", max_score),
                },
            },
            "required": ["score"],
        }),
    }
}

fn build_scoring_prompt(job: &JobRequirement) -> String {
    format!(
        "You are a highly skilled assistant tasked with evaluating and scoring candidates \
for the {position} position at {company} in {country}.\n\n\
**Job Information:**\n\
- **Company:** {company}\n\
- **Position:** {position}\n\
- **Location:** {country}\n\n\
**Scoring Guidelines:**\n\
Evaluate the candidate's resume based on the following criteria, assigning points to \
each category as appropriate:\n\n\
1. **Relevant Experience**\n\
2. **Education**\n\
3. **Skills**\n\
4. **Cultural Fit**\n\
5. **Achievements**\n\
6. **Additional Factors**\n\n\
**Instructions:**\n\
1. Analyze the candidate's resume in detail, considering each of the above categories.\n\
2. Ensure that the candidate receives a score that accurately reflects their \
suitability for the role.\n\
3. Always call the function tool: score_candidate(<your_total_score>)\n",
        position = job.position,
        company = job.company,
        country = job.country,
    )
}
