//! Engine configuration (tolerances and validator policy).

/// Which edges count as "staying on one generator" (validator rule 2).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SameGeneratorRule {
    /// Reject only edges whose endpoints lie on the literal same generator.
    #[default]
    Literal,
    /// Also reject edges between a generator and its identified partner.
    Group,
}

/// Tolerances for the continuous representation plus the validator policy.
///
/// The discrete representation ignores the epsilons; it is exact.
#[derive(Clone, Copy, Debug)]
pub struct EngineCfg {
    /// Two parameters on one group closer than this denote the same point.
    pub eps_param: f64,
    /// Orientation values at or below this magnitude count as collinear.
    pub eps_orient: f64,
    pub same_generator: SameGeneratorRule,
}

impl Default for EngineCfg {
    fn default() -> Self {
        Self {
            eps_param: 1e-9,
            eps_orient: 1e-12,
            same_generator: SameGeneratorRule::Literal,
        }
    }
}
