//! Pipeline chain domain

use serde::Serialize;

use crate::features::value_resolution::domain::{CallNode, ResolvedValue};
use crate::shared::constants::rendering::UNKNOWN_MARKER;

/// One continuation of a call's result
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum ChainChild {
    /// The result feeds another stream call
    Chain(PipelineChain),
    /// The result escapes into a local outside the stream API
    Value(ResolvedValue),
    /// No continuation could be recovered
    Unknown,
}

/// Call plus one child per use-site of its result
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PipelineChain {
    pub call: CallNode,
    pub children: Vec<ChainChild>,
}

impl PipelineChain {
    pub fn new(call: CallNode) -> Self {
        Self {
            call,
            children: Vec::new(),
        }
    }

    /// Number of calls in the tree (root included)
    pub fn call_count(&self) -> usize {
        1 + self
            .children
            .iter()
            .map(|child| match child {
                ChainChild::Chain(chain) => chain.call_count(),
                ChainChild::Value(_) | ChainChild::Unknown => 0,
            })
            .sum::<usize>()
    }

    /// Root call line at `indent` spaces, each child two spaces deeper
    pub fn render(&self, indent: usize) -> String {
        let mut out = format!("{}{}", " ".repeat(indent), self.call);
        for child in &self.children {
            out.push('\n');
            match child {
                ChainChild::Chain(chain) => out.push_str(&chain.render(indent + 2)),
                ChainChild::Value(value) => {
                    out.push_str(&format!("{}{}", " ".repeat(indent + 2), value))
                }
                ChainChild::Unknown => {
                    out.push_str(&format!("{}{}", " ".repeat(indent + 2), UNKNOWN_MARKER))
                }
            }
        }
        out
    }

    /// Report block for a chain found in `method_signature`
    pub fn describe(&self, method_signature: &str) -> String {
        format!(
            "PrivacyStreams DFG in method {}\n{}",
            method_signature,
            self.render(2)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::value_resolution::domain::Receiver;
    use crate::shared::models::{Constant, MethodRef};

    #[test]
    fn test_render_indents_children() {
        let root = CallNode::new(
            Receiver::Entry,
            MethodRef::new("p.UQI", "p.PStream", "getData", &["p.Provider"]),
            vec![ResolvedValue::Opaque("r2".to_string())],
        );
        let limit = CallNode::new(
            Receiver::Anonymous,
            MethodRef::new("p.PStream", "p.PStream", "limit", &["int"]),
            vec![ResolvedValue::Literal(Constant::Int(10))],
        );
        let chain = PipelineChain {
            call: root,
            children: vec![
                ChainChild::Chain(PipelineChain {
                    call: limit,
                    children: vec![ChainChild::Value(ResolvedValue::Opaque("r4".to_string()))],
                }),
                ChainChild::Unknown,
            ],
        };

        assert_eq!(
            chain.render(2),
            "  UQI.getData(r2)\n    .limit(10)\n      r4\n    <unknown>"
        );
        assert_eq!(chain.call_count(), 2);
        assert!(chain
            .describe("<app.Main: void run()>")
            .starts_with("PrivacyStreams DFG in method <app.Main: void run()>\n  UQI"));
    }
}
