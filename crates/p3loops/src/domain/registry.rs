//! Discrete point registration.
//!
//! Each group (pair of identified generators) keeps the parameters of its placed
//! points in ascending order; a point's ordinal is its index in that list. Inserting
//! shifts every later ordinal of the group by one, so holders of ordinals (paths) must
//! re-index alongside; see `crate::path::DiscretePath::insert_point`.

use super::{Domain, GeneratorId};
use crate::error::StructuralError;
use crate::point::Ordinal;

#[derive(Clone, Debug, PartialEq)]
pub struct Registry {
    groups: Vec<Vec<f64>>,
    group_of: Vec<GeneratorId>,
}

impl Registry {
    pub fn new(domain: &Domain) -> Self {
        Self {
            groups: vec![Vec::new(); domain.len()],
            group_of: domain.generator_ids().map(|g| domain.group(g)).collect(),
        }
    }

    /// Registry holding the given points of the domain's own generators.
    pub(crate) fn seeded(domain: &Domain, points: &[(GeneratorId, f64)]) -> Self {
        let mut r = Self::new(domain);
        for &(g, t) in points {
            r.groups[domain.group(g).0].push(t);
        }
        r.sort_dedup(0.0);
        r
    }

    /// Registry of arbitrary points; parameters within `eps` on one group merge.
    pub fn from_params(
        domain: &Domain,
        points: &[(GeneratorId, f64)],
        eps: f64,
    ) -> Result<Self, StructuralError> {
        let mut r = Self::new(domain);
        for &(g, t) in points {
            let canon = r.group_of(g)?;
            if !(0.0..=1.0).contains(&t) {
                return Err(StructuralError::ParamOutOfRange {
                    generator: g,
                    param: t,
                });
            }
            r.groups[canon.0].push(t);
        }
        r.sort_dedup(eps);
        Ok(r)
    }

    fn sort_dedup(&mut self, eps: f64) {
        for ps in &mut self.groups {
            ps.sort_by(f64::total_cmp);
            ps.dedup_by(|b, a| (*b - *a).abs() <= eps);
        }
    }

    /// Canonical group of `g`.
    pub fn group_of(&self, g: GeneratorId) -> Result<GeneratorId, StructuralError> {
        self.group_of
            .get(g.0)
            .copied()
            .ok_or(StructuralError::UnknownGenerator(g))
    }

    /// Sorted parameters placed on `g`'s group (empty for unknown generators).
    pub fn params(&self, g: GeneratorId) -> &[f64] {
        match self.group_of.get(g.0) {
            Some(group) => &self.groups[group.0],
            None => &[],
        }
    }

    #[inline]
    pub fn len(&self, g: GeneratorId) -> usize {
        self.params(g).len()
    }

    /// Number of placed points over all groups.
    pub fn total(&self) -> usize {
        self.groups.iter().map(Vec::len).sum()
    }

    #[inline]
    pub fn param(&self, g: GeneratorId, ordinal: Ordinal) -> Option<f64> {
        self.params(g).get(ordinal.0).copied()
    }

    /// Midpoint parameter of gap `gap` (before ordinal `gap`), or `None` past the end.
    pub fn gap_param(&self, g: GeneratorId, gap: usize) -> Option<f64> {
        let ps = self.params(g);
        if gap > ps.len() {
            return None;
        }
        let lo = if gap == 0 { 0.0 } else { ps[gap - 1] };
        let hi = ps.get(gap).copied().unwrap_or(1.0);
        Some(0.5 * (lo + hi))
    }

    /// Ordinal of the placed point at `param` (within `eps`), if any.
    pub fn ordinal_of(&self, g: GeneratorId, param: f64, eps: f64) -> Option<Ordinal> {
        let ps = self.params(g);
        let k = ps.partition_point(|&p| p < param - eps);
        match ps.get(k) {
            Some(&p) if (p - param).abs() <= eps => Some(Ordinal(k)),
            _ => None,
        }
    }

    /// Register a point at `ordinal` of `group`, shifting later ordinals up by one.
    ///
    /// `param` must fit strictly between its new neighbours so that the sorted order
    /// (and with it every existing relative order) is preserved.
    pub fn insert_point(
        &mut self,
        group: GeneratorId,
        ordinal: Ordinal,
        param: f64,
    ) -> Result<(), StructuralError> {
        let canon = self.group_of(group)?;
        let ps = &mut self.groups[canon.0];
        if ordinal.0 > ps.len() {
            return Err(StructuralError::OrdinalOutOfRange {
                group: canon,
                ordinal: ordinal.0,
                len: ps.len(),
            });
        }
        let below = ordinal.0 == 0 || ps[ordinal.0 - 1] < param;
        let above = ps.get(ordinal.0).map_or(true, |&next| param < next);
        if !(0.0..=1.0).contains(&param) || !below || !above {
            return Err(StructuralError::ParamOutOfOrder {
                group: canon,
                ordinal: ordinal.0,
                param,
            });
        }
        ps.insert(ordinal.0, param);
        Ok(())
    }
}
