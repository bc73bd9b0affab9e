//! What `SeaClient::transaction` does with a transaction whose callback
//! succeeded.
//!
//! The policy is fixed once per process. It comes from `set_txn_policy` when
//! that runs first (test binaries call it from a `ctor`), otherwise from
//! `BLOG_TXN_POLICY` (`commit` or `rollback`), otherwise `CommitOnOk`.

use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use tracing::{info, warn};

use crate::error::InfraError;

const POLICY_VAR: &str = "BLOG_TXN_POLICY";

/// Whether a successful transaction is committed or rolled back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TxnPolicy {
    #[default]
    CommitOnOk,
    /// Roll back even on success, so a run leaves the database untouched.
    RollbackOnOk,
}

impl fmt::Display for TxnPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TxnPolicy::CommitOnOk => f.write_str("commit"),
            TxnPolicy::RollbackOnOk => f.write_str("rollback"),
        }
    }
}

impl FromStr for TxnPolicy {
    type Err = InfraError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "commit" => Ok(TxnPolicy::CommitOnOk),
            "rollback" => Ok(TxnPolicy::RollbackOnOk),
            other => Err(InfraError::config(format!(
                "{POLICY_VAR} must be 'commit' or 'rollback', got '{other}'"
            ))),
        }
    }
}

static POLICY: OnceLock<TxnPolicy> = OnceLock::new();

fn policy_from_env() -> TxnPolicy {
    let Ok(raw) = std::env::var(POLICY_VAR) else {
        return TxnPolicy::default();
    };

    match raw.parse() {
        Ok(policy) => {
            info!(%policy, "Transaction policy set from environment");
            policy
        }
        Err(e) => {
            warn!(error = %e, "Ignoring invalid transaction policy");
            TxnPolicy::default()
        }
    }
}

/// The process-wide policy, resolved on first use.
pub fn current() -> TxnPolicy {
    *POLICY.get_or_init(policy_from_env)
}

/// Fix the policy for this process.
///
/// Returns `false` when a policy was already in effect, in which case
/// `policy` is ignored.
pub fn set_txn_policy(policy: TxnPolicy) -> bool {
    POLICY.set(policy).is_ok()
}
