//! Resolve assigned org units to the teams (leaf units) beneath them.

use std::collections::BTreeSet;

use pace_core::stores::UnitStore;

/// Leaf units under each of `assigned`, in stable order, de-duplicated.
///
/// A unit without children (or unknown to the store) resolves to itself.
pub fn resolve_teams<U>(units: &U, assigned: &[String]) -> Vec<String>
where
    U: UnitStore + ?Sized,
{
    let mut teams = Vec::new();
    let mut seen = BTreeSet::new();
    for unit_id in assigned {
        let mut path = BTreeSet::new();
        collect_leaves(units, unit_id, &mut path, &mut seen, &mut teams);
    }
    teams
}

fn collect_leaves<U>(
    units: &U,
    unit_id: &str,
    path: &mut BTreeSet<String>,
    seen: &mut BTreeSet<String>,
    teams: &mut Vec<String>,
) where
    U: UnitStore + ?Sized,
{
    if !path.insert(unit_id.to_string()) {
        tracing::warn!(unit_id, "org unit tree has a parent cycle; stopping descent");
        return;
    }

    let children = units.child_units(unit_id);
    if children.is_empty() {
        if seen.insert(unit_id.to_string()) {
            teams.push(unit_id.to_string());
        }
    } else {
        for child in children {
            collect_leaves(units, &child.unit_id, path, seen, teams);
        }
    }

    path.remove(unit_id);
}

#[cfg(test)]
mod tests {
    use pace_core::entities::OrgUnit;
    use pretty_assertions::assert_eq;

    use super::*;

    struct Units(Vec<OrgUnit>);

    impl UnitStore for Units {
        fn units(&self) -> &[OrgUnit] {
            &self.0
        }
    }

    fn unit(id: &str, parent: Option<&str>) -> OrgUnit {
        OrgUnit {
            unit_id: id.into(),
            parent_id: parent.map(str::to_string),
            tier: 0,
        }
    }

    fn tree() -> Units {
        Units(vec![
            unit("org", None),
            unit("eng", Some("org")),
            unit("platform", Some("eng")),
            unit("mobile", Some("eng")),
            unit("design", Some("org")),
        ])
    }

    fn ids(assigned: &[&str]) -> Vec<String> {
        assigned.iter().map(|id| (*id).to_string()).collect()
    }

    #[test]
    fn team_resolves_to_itself() {
        assert_eq!(resolve_teams(&tree(), &ids(&["platform"])), vec!["platform"]);
    }

    #[test]
    fn department_expands_to_its_teams() {
        assert_eq!(
            resolve_teams(&tree(), &ids(&["org"])),
            vec!["platform", "mobile", "design"]
        );
    }

    #[test]
    fn overlapping_assignments_are_deduplicated() {
        assert_eq!(
            resolve_teams(&tree(), &ids(&["mobile", "eng"])),
            vec!["mobile", "platform"]
        );
    }

    #[test]
    fn unknown_unit_passes_through() {
        assert_eq!(resolve_teams(&tree(), &ids(&["contractors"])), vec!["contractors"]);
    }

    #[test]
    fn parent_cycle_terminates() {
        let units = Units(vec![unit("a", Some("b")), unit("b", Some("a"))]);
        assert!(resolve_teams(&units, &ids(&["a"])).is_empty());
    }
}
