//! Batch ingestion: parallel parse stage, serialized registration, one
//! completion pass.

use girder_record::ClassRecord;
use rayon::prelude::*;

use crate::error::ImportReport;
use crate::graph::ClassGraph;
use crate::stage::ClassStage;

/// Import one batch of records into a fresh graph.
pub fn import(records: Vec<ClassRecord>) -> (ClassGraph, ImportReport) {
    let mut graph = ClassGraph::new();
    let report = import_into(&mut graph, records);
    (graph, report)
}

/// Import one batch of records into `graph`.
///
/// Parsing descriptors and signatures is pure and per-record, so it fans out
/// across rayon workers. Registration mutates the shared name table and stays
/// serial, in input order, which keeps ids deterministic. `finalize_all` runs
/// once, after the last registration.
pub fn import_into(graph: &mut ClassGraph, records: Vec<ClassRecord>) -> ImportReport {
    let stages: Vec<ClassStage> = records.into_par_iter().map(ClassStage::parse).collect();
    for stage in stages {
        // A duplicate is captured for the batch report; it must not abort the
        // remaining registrations.
        let _ = graph.register_stage(stage);
    }
    graph.finalize_all()
}
