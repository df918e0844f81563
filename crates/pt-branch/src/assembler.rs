//! Branch assembly.

use std::fmt;

use pt_core::{as_m, as_mm, ElementId, Length};
use pt_graph::{AttributeSource, PortSource};

use crate::attributes::{AttributeKeys, AttributeResolver};
use crate::record::{composite_key, ExportRecord};

/// Calculation role of a branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CalcRole {
    Primary,
    Secondary,
}

impl CalcRole {
    pub fn as_str(self) -> &'static str {
        match self {
            CalcRole::Primary => "primary",
            CalcRole::Secondary => "secondary",
        }
    }
}

impl fmt::Display for CalcRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One element placed in a branch, with its resolved export attributes.
#[derive(Debug, Clone, PartialEq)]
pub struct BranchMember {
    pub element: ElementId,
    /// 0-based position within the branch.
    pub track: usize,
    pub name: String,
    pub system: String,
    pub level: String,
    pub diameter: Length,
    pub length: Length,
    pub volume: String,
    pub role: CalcRole,
}

/// A numbered, fully assembled chain.
#[derive(Debug, Clone, PartialEq)]
pub struct Branch {
    /// 0-based discovery order.
    pub index: usize,
    pub members: Vec<BranchMember>,
}

impl Branch {
    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn role(&self) -> CalcRole {
        self.members
            .first()
            .map_or(CalcRole::Secondary, |m| m.role)
    }

    pub fn elements(&self) -> impl Iterator<Item = ElementId> + '_ {
        self.members.iter().map(|m| m.element)
    }

    /// Flatten into export records, one per track.
    pub fn records(&self) -> Vec<ExportRecord> {
        self.members
            .iter()
            .map(|m| ExportRecord {
                element_id: m.element,
                system: m.system.clone(),
                level: m.level.clone(),
                branch: self.index,
                track: m.track,
                name: m.name.clone(),
                diameter_mm: as_mm(m.diameter),
                length_m: as_m(m.length),
                volume: m.volume.clone(),
                classification: m.role.to_string(),
                key: composite_key(&m.system, &m.level, self.index, m.track),
            })
            .collect()
    }
}

/// Result of assembling a run's chains.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Assembly {
    pub branches: Vec<Branch>,
    /// Seeds of chains dropped because a member is unknown to the host.
    pub abandoned: Vec<ElementId>,
}

impl Assembly {
    pub fn records(&self) -> Vec<ExportRecord> {
        self.branches.iter().flat_map(Branch::records).collect()
    }

    pub fn element_count(&self) -> usize {
        self.branches.iter().map(Branch::len).sum()
    }
}

/// Numbers chains into branches and resolves member attributes.
#[derive(Debug, Clone, Default)]
pub struct BranchAssembler {
    keys: AttributeKeys,
}

impl BranchAssembler {
    pub fn new(keys: AttributeKeys) -> Self {
        Self { keys }
    }

    pub fn keys(&self) -> &AttributeKeys {
        &self.keys
    }

    /// Assemble `chains` in order.
    ///
    /// A chain is either assembled completely or abandoned; abandoned chains
    /// do not consume a branch number. Empty chains are skipped.
    pub fn assemble<H, C>(&self, host: &H, chains: &[C]) -> Assembly
    where
        H: PortSource + AttributeSource + ?Sized,
        C: AsRef<[ElementId]>,
    {
        let mut assembly = Assembly::default();
        for chain in chains {
            let elements = chain.as_ref();
            let Some(&seed) = elements.first() else {
                continue;
            };
            match self.assemble_one(host, assembly.branches.len(), elements) {
                Some(branch) => assembly.branches.push(branch),
                None => {
                    tracing::warn!(%seed, len = elements.len(), "chain abandoned: member unknown to host");
                    assembly.abandoned.push(seed);
                }
            }
        }
        tracing::debug!(
            branches = assembly.branches.len(),
            abandoned = assembly.abandoned.len(),
            "branches assembled"
        );
        assembly
    }

    fn assemble_one<H>(&self, host: &H, index: usize, elements: &[ElementId]) -> Option<Branch>
    where
        H: PortSource + AttributeSource + ?Sized,
    {
        let resolver = AttributeResolver::new(host, &self.keys);
        let mut members = Vec::with_capacity(elements.len());
        let mut primary = false;

        for (track, &id) in elements.iter().enumerate() {
            let element = host.element(id)?;
            primary |= resolver.is_primary(id);
            members.push(BranchMember {
                element: id,
                track,
                name: element.name.clone(),
                system: resolver.system(id),
                level: resolver.level(id),
                diameter: resolver.diameter(id),
                length: resolver.length(id),
                volume: resolver.volume_label(id),
                role: CalcRole::Secondary,
            });
        }

        // One marked member makes the whole branch primary
        if primary {
            for member in &mut members {
                member.role = CalcRole::Primary;
            }
        }

        Some(Branch { index, members })
    }
}
