//! Rendering of automata in the Graphviz DOT format.
//! Accepting states are drawn as double circles, the initial state is marked by an arrow from an invisible node.
//! Parallel edges between the same pair of states are merged into a single edge with a comma-separated label.

use std::collections::BTreeMap;

use itertools::Itertools;

use super::{Dfa, Label, Nfa, StateId};

fn quote(name: &str) -> String {
    format!("\"{}\"", name.replace('\\', "\\\\").replace('"', "\\\""))
}

fn header(dot: &mut String, graph: &str, finals: &[String]) {
    dot.push_str(&format!("digraph {} {{\n", graph));
    dot.push_str("    rankdir=LR;\n");
    dot.push_str("    __start [label = \"\", shape = none, width = 0, height = 0];\n");
    if !finals.is_empty() {
        dot.push_str(&format!(
            "    node [shape = doublecircle]; {};\n",
            finals.iter().join(" ")
        ));
    }
    dot.push_str("    node [shape = circle];\n");
}

impl Nfa {
    pub fn to_dot(&self) -> String {
        let finals: Vec<String> = self.finals().iter().map(|s| quote(&self.name(*s))).collect();
        let mut dot = String::new();
        header(&mut dot, "NFA", &finals);

        for state in self.states() {
            dot.push_str(&format!("    {};\n", quote(&self.name(state))));
        }
        dot.push_str(&format!(
            "    __start -> {};\n",
            quote(&self.name(self.initial()))
        ));

        let mut edges: BTreeMap<(StateId, StateId), Vec<Label>> = BTreeMap::new();
        for from in self.states() {
            for (label, dests) in self.transitions_from(from) {
                for to in dests {
                    edges.entry((from, *to)).or_default().push(label);
                }
            }
        }
        for ((from, to), labels) in edges {
            dot.push_str(&format!(
                "    {} -> {} [label = \"{}\"];\n",
                quote(&self.name(from)),
                quote(&self.name(to)),
                labels.iter().join(",")
            ));
        }
        dot.push_str("}\n");
        dot
    }
}

impl Dfa {
    pub fn to_dot(&self) -> String {
        let finals: Vec<String> = self
            .finals()
            .map(|s| quote(self.state(s).name()))
            .collect();
        let mut dot = String::new();
        header(&mut dot, "DFA", &finals);

        for state in self.states() {
            dot.push_str(&format!("    {};\n", quote(state.name())));
        }
        dot.push_str(&format!(
            "    __start -> {};\n",
            quote(self.initial_state().name())
        ));

        let mut edges: BTreeMap<(usize, usize), Vec<char>> = BTreeMap::new();
        for (from, state) in self.states().iter().enumerate() {
            for (symbol, to) in state.transitions() {
                edges.entry((from, *to)).or_default().push(*symbol);
            }
        }
        for ((from, to), symbols) in edges {
            dot.push_str(&format!(
                "    {} -> {} [label = \"{}\"];\n",
                quote(self.state(from).name()),
                quote(self.state(to).name()),
                symbols.iter().join(",")
            ));
        }
        dot.push_str("}\n");
        dot
    }
}
