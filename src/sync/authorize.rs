//! Authorization rule applied to false-positive findings

use crate::client::Finding;

/// Decides whether a false-positive finding has been authorized.
///
/// This is the pluggable business rule of the sync flow. Implementations may
/// inspect any field the server returned on the finding. `true` routes the
/// finding to the authorized disposition, `false` to the unauthorized one.
pub trait AuthorizationPolicy {
    fn authorize(&self, finding: &Finding) -> bool;
}

/// Any plain function over a finding is a usable policy
impl<F> AuthorizationPolicy for F
where
    F: Fn(&Finding) -> bool,
{
    fn authorize(&self, finding: &Finding) -> bool {
        self(finding)
    }
}

/// Default rule set: nothing is authorized.
///
/// Every false positive is routed to the unauthorized disposition until a
/// deployment substitutes its own criteria.
#[derive(Debug, Clone, Copy, Default)]
pub struct DenyAll;

impl AuthorizationPolicy for DenyAll {
    fn authorize(&self, _finding: &Finding) -> bool {
        false
    }
}
