/*
 * Def/Use Index + Method Body
 *
 * Reaching-definition facts for one method body:
 * - (local, use statement) → reaching definition statements
 * - definition statement   → ordered use-sites
 *
 * The oracle computes these facts; the core only queries them. A straight-line
 * last-def computation is provided for fact dumps without precomputed chains.
 */

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::error::{FactsError, FactsResult};
use super::program::{LocalId, MethodRef, Statement, StmtId};

/// A statement reading a local
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UseSite {
    pub stmt: StmtId,
    pub local: LocalId,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct ReachingEntry {
    local: LocalId,
    at: StmtId,
    defs: Vec<StmtId>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct UsesEntry {
    def: StmtId,
    uses: Vec<UseSite>,
}

/// Serialized form (JSON object keys must be strings)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct DefUseRecords {
    #[serde(default)]
    reaching: Vec<ReachingEntry>,
    #[serde(default)]
    uses: Vec<UsesEntry>,
}

/// Def/use chains of one method body
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "DefUseRecords", into = "DefUseRecords")]
pub struct DefUseIndex {
    reaching: FxHashMap<(LocalId, StmtId), Vec<StmtId>>,
    uses: FxHashMap<StmtId, Vec<UseSite>>,
}

impl DefUseIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the reaching definitions of `local` at `at` (replaces any earlier entry)
    pub fn set_reaching(&mut self, local: LocalId, at: StmtId, defs: Vec<StmtId>) {
        self.reaching.insert((local, at), defs);
    }

    /// Record the ordered use-sites of a definition (replaces any earlier entry)
    pub fn set_uses(&mut self, def: StmtId, uses: Vec<UseSite>) {
        self.uses.insert(def, uses);
    }

    pub fn reaching_definitions(&self, local: LocalId, at: StmtId) -> &[StmtId] {
        self.reaching
            .get(&(local, at))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn uses_of(&self, def: StmtId) -> &[UseSite] {
        self.uses.get(&def).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Last-def chains for a body without branches
    ///
    /// Each use is reached by the most recent preceding definition of the
    /// same local; use-sites are recorded in program order.
    pub fn straight_line(statements: &[Statement]) -> Self {
        let mut index = Self::new();
        let mut last_def: FxHashMap<LocalId, StmtId> = FxHashMap::default();

        for stmt in statements {
            for local in stmt.used_locals() {
                let defs: Vec<StmtId> = last_def.get(&local.id).copied().into_iter().collect();
                for def in &defs {
                    let uses = index.uses.entry(*def).or_default();
                    let site = UseSite {
                        stmt: stmt.id,
                        local: local.id,
                    };
                    if !uses.contains(&site) {
                        uses.push(site);
                    }
                }
                index.reaching.insert((local.id, stmt.id), defs);
            }
            if let Some(local) = stmt.defined_local() {
                last_def.insert(local.id, stmt.id);
            }
        }

        index
    }
}

impl From<DefUseRecords> for DefUseIndex {
    fn from(records: DefUseRecords) -> Self {
        let mut index = Self::new();
        for entry in records.reaching {
            index.set_reaching(entry.local, entry.at, entry.defs);
        }
        for entry in records.uses {
            index.set_uses(entry.def, entry.uses);
        }
        index
    }
}

impl From<DefUseIndex> for DefUseRecords {
    fn from(index: DefUseIndex) -> Self {
        let mut reaching: Vec<ReachingEntry> = index
            .reaching
            .into_iter()
            .map(|((local, at), defs)| ReachingEntry { local, at, defs })
            .collect();
        reaching.sort_by_key(|e| (e.at, e.local));

        let mut uses: Vec<UsesEntry> = index
            .uses
            .into_iter()
            .map(|(def, uses)| UsesEntry { def, uses })
            .collect();
        uses.sort_by_key(|e| e.def);

        DefUseRecords { reaching, uses }
    }
}

/// Statements of one method plus their def/use index
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MethodBody {
    pub method: MethodRef,
    statements: Vec<Statement>,
    #[serde(default)]
    def_use: DefUseIndex,
}

impl MethodBody {
    /// Statement ids must be strictly increasing (program order)
    pub fn new(
        method: MethodRef,
        statements: Vec<Statement>,
        def_use: DefUseIndex,
    ) -> FactsResult<Self> {
        let body = Self {
            method,
            statements,
            def_use,
        };
        body.validate()?;
        Ok(body)
    }

    /// Body whose def/use chains are computed with [`DefUseIndex::straight_line`]
    pub fn straight_line(method: MethodRef, statements: Vec<Statement>) -> FactsResult<Self> {
        let def_use = DefUseIndex::straight_line(&statements);
        Self::new(method, statements, def_use)
    }

    pub fn validate(&self) -> FactsResult<()> {
        for pair in self.statements.windows(2) {
            if pair[0].id >= pair[1].id {
                return Err(FactsError::Malformed {
                    method: self.method.signature.clone(),
                    reason: format!(
                        "statement {} does not follow {} in program order",
                        pair[1].id.0, pair[0].id.0
                    ),
                });
            }
        }
        Ok(())
    }

    pub fn statements(&self) -> &[Statement] {
        &self.statements
    }

    /// Position of a statement in the raw trace
    pub fn position(&self, id: StmtId) -> Option<usize> {
        self.statements.binary_search_by_key(&id, |s| s.id).ok()
    }

    pub fn statement(&self, id: StmtId) -> Option<&Statement> {
        self.position(id).map(|idx| &self.statements[idx])
    }

    pub fn reaching_definitions(&self, local: LocalId, at: StmtId) -> &[StmtId] {
        self.def_use.reaching_definitions(local, at)
    }

    pub fn uses_of(&self, def: StmtId) -> &[UseSite] {
        self.def_use.uses_of(def)
    }
}
