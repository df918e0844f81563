//! Branch export: seeds -> chains -> numbered branches -> records.

use pt_branch::{Assembly, BranchAssembler, ExportRecord};
use pt_core::ElementId;
use pt_graph::{Network, NodeArena, PortSource, SystemType};
use pt_project::ExportSettings;
use pt_traverse::{ChainTracer, NetworkWalker, Placement, Visited};

use crate::error::{AppError, AppResult};
use crate::fingerprint::compute_export_id;
use crate::selection;

/// How chains are produced from the seeds.
#[derive(Debug, Clone, PartialEq)]
pub enum ExportMode {
    /// Directional single-path tracing with the given system-type filter.
    Trace(SystemType),
    /// Tag-bounded walk; each seed contributes the elements it newly reached.
    Walk,
}

/// Where seeds come from.
#[derive(Debug, Clone, PartialEq)]
pub enum SeedStrategy {
    /// Caller-supplied element ids, in order.
    Explicit(Vec<ElementId>),
    /// Highest-flow pipe of every system tag matching the filter.
    StartPipes,
    /// Equipment of the matching systems.
    Equipment,
}

#[derive(Debug, Clone)]
pub struct ExportRequest {
    /// Substring matched against each element's system tag.
    pub system: String,
    pub mode: ExportMode,
    pub seeds: SeedStrategy,
}

#[derive(Debug, Clone)]
pub struct ExportOutcome {
    pub seeds: Vec<ElementId>,
    pub assembly: Assembly,
    pub records: Vec<ExportRecord>,
    pub export_id: String,
}

/// Run one export over `network`.
pub fn run_export(
    network: &Network,
    settings: &ExportSettings,
    request: &ExportRequest,
) -> AppResult<ExportOutcome> {
    let seeds = resolve_seeds(network, settings, request)?;
    tracing::info!(
        system = %request.system,
        mode = ?request.mode,
        seeds = seeds.len(),
        "starting export"
    );

    let chains: Vec<Vec<ElementId>> = match &request.mode {
        ExportMode::Trace(filter) => {
            let tracer = ChainTracer::new(filter.clone());
            let mut placement = Placement::new();
            tracer
                .trace_all(network, &seeds, &mut placement)
                .into_iter()
                .map(|chain| chain.elements)
                .collect()
        }
        ExportMode::Walk => walk_chains(network, settings, &seeds),
    };

    let assembler = BranchAssembler::new(settings.attributes.clone());
    let assembly = assembler.assemble(network, &chains);
    let records = assembly.records();
    let export_id = compute_export_id(&request.system, &records);

    tracing::info!(
        branches = assembly.branches.len(),
        records = records.len(),
        abandoned = assembly.abandoned.len(),
        %export_id,
        "export finished"
    );

    Ok(ExportOutcome {
        seeds,
        assembly,
        records,
        export_id,
    })
}

fn resolve_seeds(
    network: &Network,
    settings: &ExportSettings,
    request: &ExportRequest,
) -> AppResult<Vec<ElementId>> {
    let seeds = match &request.seeds {
        SeedStrategy::Explicit(ids) => {
            if let Some(unknown) = ids.iter().find(|&&id| network.element(id).is_none()) {
                return Err(AppError::UnknownSeed(unknown.index()));
            }
            ids.clone()
        }
        SeedStrategy::StartPipes => selection::start_pipes(
            network,
            &settings.tag_key,
            &settings.attributes.flow_keys,
            &request.system,
        )
        .into_iter()
        .map(|s| s.element)
        .collect(),
        SeedStrategy::Equipment => {
            selection::equipment_in_system(network, &settings.tag_key, &request.system)
        }
    };

    if seeds.is_empty() {
        return Err(AppError::NoSeeds(request.system.clone()));
    }
    Ok(seeds)
}

/// One walk per seed sharing a visited set; each seed yields its newly reached slice.
fn walk_chains(
    network: &Network,
    settings: &ExportSettings,
    seeds: &[ElementId],
) -> Vec<Vec<ElementId>> {
    let walker = NetworkWalker::new(settings.tag_key.as_str());
    let mut arena = NodeArena::new(network);
    let mut visited = Visited::new();
    let mut chains = Vec::new();

    for &seed in seeds {
        let before = visited.len();
        walker.walk(&mut arena, network, seed, &mut visited);
        let reached = &visited.order()[before..];
        if !reached.is_empty() {
            chains.push(reached.to_vec());
        }
    }
    chains
}
