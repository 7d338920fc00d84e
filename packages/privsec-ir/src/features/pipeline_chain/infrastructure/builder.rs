/*
 * Chain Builder
 *
 * Root call via the Call Reconstructor, then one child per use-site of the
 * host statement's result:
 * - use is a call on a type whose short name carries the stream marker → nested chain
 * - otherwise                                                        → the defined local (or Unknown)
 *
 * Use-sites are visited in source position order regardless of the order the
 * oracle reports them in. A use-site already on the current branch (loops) or
 * past the per-chain call budget becomes an Unknown leaf.
 */

use tracing::{debug, warn};

use crate::config::AnalyzerConfig;
use crate::features::pipeline_chain::domain::{ChainChild, PipelineChain};
use crate::features::value_resolution::domain::ResolvedValue;
use crate::features::value_resolution::ValueResolver;
use crate::shared::constants::resolution::MAX_CHAIN_CALLS;
use crate::shared::models::{InvokeExpr, MethodBody, StmtId, UseSite};

pub struct ChainBuilder<'a> {
    resolver: ValueResolver<'a>,
    config: &'a AnalyzerConfig,
}

impl<'a> ChainBuilder<'a> {
    pub fn new(body: &'a MethodBody, config: &'a AnalyzerConfig) -> Self {
        Self {
            resolver: ValueResolver::new(body, config),
            config,
        }
    }

    pub fn build_chain(&self, invoke: &InvokeExpr, host: StmtId) -> PipelineChain {
        let mut walk = ChainWalk::default();
        self.build_at_depth(invoke, host, 0, &mut walk)
    }

    fn build_at_depth(
        &self,
        invoke: &InvokeExpr,
        host: StmtId,
        depth: usize,
        walk: &mut ChainWalk,
    ) -> PipelineChain {
        let body = self.resolver.body();
        let mut chain = PipelineChain::new(self.resolver.build_call(invoke, host));
        walk.calls += 1;

        if depth >= self.config.resolver.max_depth {
            warn!(
                "Chain depth bound ({}) exceeded at {} in {}",
                self.config.resolver.max_depth, chain.call, body.method.signature
            );
            chain.children.push(ChainChild::Unknown);
            return chain;
        }

        let leaf = match body.statement(host).and_then(|s| s.defined_local()) {
            Some(local) => ChainChild::Value(ResolvedValue::Opaque(local.name.clone())),
            None => ChainChild::Unknown,
        };

        let mut uses: Vec<UseSite> = body.uses_of(host).to_vec();
        uses.sort_by_key(|site| site.stmt);

        walk.path.push(host);
        for site in uses {
            let next = body
                .statement(site.stmt)
                .and_then(|stmt| stmt.invoke_expr())
                .filter(|next| {
                    next.method
                        .declaring_type
                        .short_name()
                        .contains(self.config.target.stream_marker.as_str())
                });

            let child = match next {
                Some(_) if walk.path.contains(&site.stmt) => {
                    debug!(
                        "Use-site {:?} loops back into the chain in {}",
                        site.stmt, body.method.signature
                    );
                    ChainChild::Unknown
                }
                Some(_) if walk.calls >= MAX_CHAIN_CALLS => {
                    warn!(
                        "Chain call budget ({}) exhausted at {} in {}",
                        MAX_CHAIN_CALLS, chain.call, body.method.signature
                    );
                    ChainChild::Unknown
                }
                Some(next) => {
                    ChainChild::Chain(self.build_at_depth(next, site.stmt, depth + 1, walk))
                }
                None => leaf.clone(),
            };
            chain.children.push(child);
        }
        walk.path.pop();

        chain
    }
}

/// Host statements on the current branch and calls built so far
#[derive(Default)]
struct ChainWalk {
    path: Vec<StmtId>,
    calls: usize,
}
